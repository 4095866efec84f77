//! # **promo** 配置

use crate::errors::ConfigError;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;
use validator::Validate;

/// 构建分层配置
///
/// 依次叠加 `default`、`PROMO_ENV` 指定环境（缺省为 `dev`）的配置文件，以及前缀为 `PROMO` 的环境变量。
/// 配置根目录取 `PROMO_CONFIG_ROOT`，缺省为 `crate_dir/config`。
pub fn build_config(crate_dir: PathBuf) -> Result<Config, ConfigError> {
    let config_root = std::env::var("PROMO_CONFIG_ROOT")
        .map(PathBuf::from)
        .unwrap_or_else(|_| crate_dir.join("config"));
    let env = std::env::var("PROMO_ENV").unwrap_or_else(|_| "dev".to_string());
    let config = Config::builder()
        .add_source(File::from(config_root.join("default")).required(false))
        .add_source(File::from(config_root.join(env)).required(false))
        .add_source(
            Environment::with_prefix("PROMO")
                .separator("__")
                .list_separator(","),
        )
        .build()?;
    Ok(config)
}

/// 加载并验证配置
pub fn load_config(config: &Config) -> Result<PromoConfig, ConfigError> {
    let cfg = config.clone().try_deserialize::<PromoConfig>()?;
    validate_section(&cfg.store, "store")?;
    validate_section(&cfg.log, "log")?;
    Ok(cfg)
}

fn validate_section(cfg: &impl Validate, section: &str) -> Result<(), ConfigError> {
    cfg.validate().map_err(|e| ConfigError::ValidationError {
        section: section.to_string(),
        message: e.to_string(),
    })
}

/// 配置结构
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct PromoConfig {
    /// 存储配置
    pub store: StoreConfig,
    /// 日志配置
    pub log: LogConfig,
}

/// 存储配置
#[derive(Debug, Deserialize, Validate, Clone)]
#[serde(default)]
pub struct StoreConfig {
    /// 内存存储的初始容量
    #[validate(range(min = 1))]
    pub capacity: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { capacity: 256 }
    }
}

/// 日志配置
#[derive(Debug, Deserialize, Validate, Clone)]
#[serde(default)]
pub struct LogConfig {
    /// 最高日志级别
    #[validate(length(min = 1))]
    pub level: String,
    /// 是否美化输出
    pub pretty: bool,
    /// 是否输出日志目标
    pub target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            pretty: false,
            target: false,
        }
    }
}
