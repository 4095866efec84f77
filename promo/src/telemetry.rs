//! # **promo** 日志

use crate::{config::LogConfig, errors::ConfigError};
use tracing::Level;
use tracing_appender::{non_blocking, non_blocking::WorkerGuard};
use tracing_subscriber::fmt;

/// 初始化日志输出
///
/// 返回的守卫须持有至程序退出，否则缓冲中的日志可能丢失。
pub fn init(cfg: &LogConfig) -> Result<WorkerGuard, ConfigError> {
    let level = cfg
        .level
        .parse::<Level>()
        .map_err(|e| ConfigError::Logging(format!("日志级别'{}'无效：{e}", cfg.level)))?;
    let (non_blocking, guard) = non_blocking(std::io::stdout());
    let builder = fmt()
        .with_writer(non_blocking)
        .with_max_level(level)
        .with_target(cfg.target);
    let result = if cfg.pretty {
        builder.pretty().try_init()
    } else {
        builder.try_init()
    };
    result.map_err(|e| ConfigError::Logging(e.to_string()))?;
    Ok(guard)
}
