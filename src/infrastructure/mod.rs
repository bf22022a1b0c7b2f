//! 基础设施层：日志与外部 HTTP 客户端

pub mod logger;
pub mod users_client;

pub use logger::{Logger, LoggerError};
pub use users_client::{ClientError, UsersClient};
