//! # **promo** 错误定义

use thiserror::Error;
use uuid::Uuid;

/// 领域错误枚举
#[derive(Debug, Error)]
pub enum DomainError {
    /// 实体不存在
    #[error("{entity}不存在：{id}")]
    NotFound {
        /// 实体名称
        entity: &'static str,
        /// 实体 Id
        id: Uuid,
    },
    /// 实体状态不允许执行命令
    #[error("状态错误：{0}")]
    InvalidState(String),
    /// 命令参数不合法
    #[error("参数错误：{0}")]
    InvalidArgument(String),
    /// 存储错误
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// 存储错误枚举
#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    /// 待更新的实体不存在
    #[error("待更新的实体不存在：{0}")]
    Missing(Uuid),
    /// 实体重复添加
    #[error("实体重复添加：{0}")]
    Duplicate(Uuid),
    /// 存储不可用
    #[error("存储不可用：{0}")]
    Unavailable(String),
}

/// 配置错误枚举
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 加载配置错误
    #[error("加载配置错误：{0}")]
    Load(#[from] config::ConfigError),
    /// 配置验证错误
    #[error("配置'{section}'验证错误：{message}")]
    ValidationError {
        /// 配置节
        section: String,
        /// 错误信息
        message: String,
    },
    /// 日志初始化错误
    #[error("日志初始化错误：{0}")]
    Logging(String),
}
