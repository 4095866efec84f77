//! # **promo** 核心库
//!
//! 合作伙伴促销码限额的领域模型、存储抽象与服务。

#![warn(missing_docs)]

extern crate self as promo;

pub mod config;
pub mod domain;
pub mod errors;
pub mod partner;
pub mod repository;
pub mod service;
pub mod telemetry;

/// # **promo** 宏
pub mod macros {
    pub use promo_macros::*;
}

pub use partner::{Partner, PartnerPromoCodeLimit};
pub use repository::{InMemoryRepository, Repository};
pub use service::PartnerService;
