//! HTTP 路由

mod dns;
mod health;

use actix_web::{HttpRequest, HttpResponse, error, http::StatusCode, web};

use crate::response::ApiResponse;

pub use dns::register_dns;
pub use health::health;

/// 注册全部路由
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/health", web::get().to(health))
        .service(web::scope("/api/v1").route("/dns/register", web::post().to(register_dns)));
}

/// 请求体解析失败时也返回统一的 400 包装
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req: &HttpRequest| {
        let body = ApiResponse::error(StatusCode::BAD_REQUEST, err.to_string());
        let response = HttpResponse::BadRequest().json(body);
        error::InternalError::from_response(err, response).into()
    })
}
