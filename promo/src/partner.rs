//! # 合作伙伴聚合

use crate::macros::entity;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

mod cancel_limit;
mod set_limit;

pub use cancel_limit::{CancelPartnerPromoCodeLimit, PromoCodeLimitCancelled};
pub use set_limit::{PromoCodeLimitSet, SetPartnerPromoCodeLimit};

/// 合作伙伴
#[entity]
pub struct Partner {
    /// 名称
    pub name: String,
    /// 是否激活
    pub is_active: bool,
    /// 当前限额下已发放的促销码数量
    pub number_issued_promo_codes: u64,
    /// 限额记录，按创建先后排列
    pub limits: Vec<PartnerPromoCodeLimit>,
}

impl Partner {
    /// 当前生效的限额
    pub fn active_limit(&self) -> Option<&PartnerPromoCodeLimit> {
        self.limits.iter().find(|l| l.is_active())
    }

    /// 当前生效的限额（可变）
    pub fn active_limit_mut(&mut self) -> Option<&mut PartnerPromoCodeLimit> {
        self.limits.iter_mut().find(|l| l.is_active())
    }

    /// 按 Id 查找限额
    pub fn limit(&self, limit_id: Uuid) -> Option<&PartnerPromoCodeLimit> {
        self.limits.iter().find(|l| l.id == limit_id)
    }

    fn limit_mut(&mut self, limit_id: Uuid) -> Option<&mut PartnerPromoCodeLimit> {
        self.limits.iter_mut().find(|l| l.id == limit_id)
    }
}

/// 限额状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LimitState {
    /// 生效中
    Active,
    /// 已取消
    Cancelled {
        /// 取消时间
        at: OffsetDateTime,
    },
}

/// 合作伙伴促销码限额
#[entity]
pub struct PartnerPromoCodeLimit {
    /// 所属合作伙伴 Id
    pub partner_id: Uuid,
    /// 创建时间
    pub created_at: OffsetDateTime,
    /// 截止时间
    pub end_date: Option<OffsetDateTime>,
    /// 状态
    pub state: LimitState,
    /// 限额
    pub limit: i64,
}

impl PartnerPromoCodeLimit {
    /// 是否生效中
    #[inline]
    pub fn is_active(&self) -> bool {
        self.state == LimitState::Active
    }

    /// 取消时间，生效中的限额返回 None
    pub fn cancelled_at(&self) -> Option<OffsetDateTime> {
        match self.state {
            LimitState::Active => None,
            LimitState::Cancelled { at } => Some(at),
        }
    }

    /// 取消限额，已取消的限额保持原取消时间
    pub fn cancel(&mut self, at: OffsetDateTime) {
        if self.is_active() {
            self.state = LimitState::Cancelled { at };
        }
    }
}
