//! API 响应包装类型

use actix_web::{HttpResponse, http::StatusCode};
use serde::Serialize;

pub const SUCCESS_MSG: &str = "Success";

/// `{ "code": <http status>, "msg": <text>, "data": <payload or null> }`
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub code: u16,
    pub msg: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 创建成功响应
    #[must_use]
    pub fn success(data: T) -> Self {
        Self {
            code: StatusCode::OK.as_u16(),
            msg: SUCCESS_MSG.to_string(),
            data: Some(data),
        }
    }

    pub fn into_response(self) -> HttpResponse {
        let status = StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        HttpResponse::build(status).json(self)
    }
}

impl ApiResponse<()> {
    /// 错误响应，`data` 为 null
    #[must_use]
    pub fn error(status: StatusCode, msg: impl Into<String>) -> Self {
        Self {
            code: status.as_u16(),
            msg: msg.into(),
            data: None,
        }
    }
}
