use crate::{
    domain::{Command, Event},
    errors::DomainError,
    macros::{command, event},
};
use time::OffsetDateTime;
use uuid::Uuid;

/// 取消合作伙伴当前促销码限额
#[command]
pub struct CancelPartnerPromoCodeLimit;

impl Command for CancelPartnerPromoCodeLimit {
    type A = super::Partner;
    type E = PromoCodeLimitCancelled;

    fn check(&self, agg: &Self::A) -> Result<(), DomainError> {
        if !agg.is_active {
            return Err(DomainError::InvalidState("合作伙伴未激活".to_string()));
        }

        Ok(())
    }

    fn execute(self, agg: &Self::A) -> Self::E {
        Self::E {
            limit_id: agg.active_limit().map(|l| l.id),
            cancelled_at: OffsetDateTime::now_utc(),
        }
    }
}

/// 促销码限额已取消
#[event]
pub struct PromoCodeLimitCancelled {
    /// 被取消的限额 Id，无生效限额时为 None
    pub limit_id: Option<Uuid>,
    /// 取消时间
    pub cancelled_at: OffsetDateTime,
}

impl Event for PromoCodeLimitCancelled {
    type A = super::Partner;

    fn apply(&self, agg: &mut Self::A) {
        if let Some(limit) = self.limit_id.and_then(|id| agg.limit_mut(id)) {
            limit.cancel(self.cancelled_at);
        }
    }
}
