//! 各 worker 共享的应用状态

use std::sync::Arc;

use chrono::{DateTime, Utc};
use dns_register_core::RegisterService;

pub struct AppState {
    pub register_service: Arc<RegisterService>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(register_service: Arc<RegisterService>) -> Self {
        Self {
            register_service,
            started_at: Utc::now(),
        }
    }
}
