//! 批量注册接口

use actix_web::{HttpResponse, http::StatusCode, web};
use serde::Deserialize;

use crate::response::ApiResponse;
use crate::state::AppState;

pub const EMPTY_CONTENT_MSG: &str = "dns_content must not be empty";

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    /// 多行文本，每行 `value domain [type]`
    #[serde(default)]
    pub dns_content: String,
    /// 为 true 时即使子域名已有记录也继续创建
    #[serde(default)]
    pub single_record: bool,
}

/// `POST /api/v1/dns/register`
#[tracing_attributes::instrument(
    name = "register_dns",
    skip_all,
    fields(single_record = body.single_record, bytes = body.dns_content.len())
)]
pub async fn register_dns(
    state: web::Data<AppState>,
    body: web::Json<RegisterRequest>,
) -> HttpResponse {
    let RegisterRequest {
        dns_content,
        single_record,
    } = body.into_inner();

    if dns_content.trim().is_empty() {
        tracing::warn!("rejected request with empty dns_content");
        return ApiResponse::error(StatusCode::BAD_REQUEST, EMPTY_CONTENT_MSG).into_response();
    }

    let results = state
        .register_service
        .register(&dns_content, single_record)
        .await;

    tracing::info!(domains = results.len(), "registration finished");
    ApiResponse::success(results).into_response()
}
