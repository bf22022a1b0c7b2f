//! 日志基础设施

use tracing_subscriber::{filter::ParseError, EnvFilter};

use crate::config::LoggingConfig;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    #[error("无效的日志级别: {0}")]
    Filter(#[from] ParseError),
    #[error("日志初始化失败: {0}")]
    Init(String),
}

pub struct Logger;

impl Logger {
    /// 初始化全局日志；`RUST_LOG` 优先于配置中的级别
    pub fn init(config: &LoggingConfig) -> Result<(), LoggerError> {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&config.level))?;

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init()
            .map_err(|e| LoggerError::Init(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_fails() {
        let config = LoggingConfig {
            level: "debug".to_string(),
        };
        assert!(Logger::init(&config).is_ok());
        assert!(matches!(Logger::init(&config), Err(LoggerError::Init(_))));
    }
}
