use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
struct HealthData {
    status: &'static str,
    provider: &'static str,
    started_at: String,
}

pub async fn health(state: web::Data<AppState>) -> HttpResponse {
    ApiResponse::success(HealthData {
        status: "ok",
        provider: state.register_service.provider_id(),
        started_at: state.started_at.to_rfc3339(),
    })
    .into_response()
}
