pub mod config_service;
pub mod logging;
pub mod paths;

pub use crate::config_service::ConfigService;
pub use crate::logging::{LogTarget, init_logging};
pub use crate::paths::KbasePaths;
