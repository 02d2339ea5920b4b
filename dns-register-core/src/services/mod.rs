//! 业务逻辑服务层

mod record_type;
mod register_service;
mod resolver;

pub use record_type::infer_record_type;
pub use register_service::RegisterService;
pub use resolver::HickoryProbe;
