use crate::{
    domain::{Command, Event},
    errors::DomainError,
    macros::{command, event},
};
use time::OffsetDateTime;
use uuid::Uuid;
use validator::Validate;

/// 设置合作伙伴促销码限额
#[command]
#[derive(Validate)]
pub struct SetPartnerPromoCodeLimit {
    /// 限额
    #[validate(range(min = 0, message = "限额不得小于零"))]
    pub limit: i64,
    /// 截止时间
    pub end_date: Option<OffsetDateTime>,
}

impl Command for SetPartnerPromoCodeLimit {
    type A = super::Partner;
    type E = PromoCodeLimitSet;

    fn check(&self, agg: &Self::A) -> Result<(), DomainError> {
        if !agg.is_active {
            return Err(DomainError::InvalidState("合作伙伴未激活".to_string()));
        }
        self.validate()
            .map_err(|e| DomainError::InvalidArgument(e.to_string()))
    }

    fn execute(self, agg: &Self::A) -> Self::E {
        Self::E {
            limit_id: Uuid::new_v4(),
            limit: self.limit,
            end_date: self.end_date,
            created_at: OffsetDateTime::now_utc(),
            replaced: agg.active_limit().map(|l| l.id),
        }
    }
}

/// 促销码限额已设置
#[event]
pub struct PromoCodeLimitSet {
    /// 新限额 Id
    pub limit_id: Uuid,
    /// 限额
    pub limit: i64,
    /// 截止时间
    pub end_date: Option<OffsetDateTime>,
    /// 设置时间
    pub created_at: OffsetDateTime,
    /// 被替换的限额 Id
    pub replaced: Option<Uuid>,
}

impl Event for PromoCodeLimitSet {
    type A = super::Partner;

    fn apply(&self, agg: &mut Self::A) {
        if let Some(replaced) = self.replaced {
            if let Some(prior) = agg.limit_mut(replaced) {
                prior.cancel(self.created_at);
            }
            agg.number_issued_promo_codes = 0;
        }
        agg.limits.push(super::PartnerPromoCodeLimit {
            id: self.limit_id,
            partner_id: agg.id,
            created_at: self.created_at,
            end_date: self.end_date,
            state: super::LimitState::Active,
            limit: self.limit,
        });
    }
}
