//! # **promo** 合作伙伴服务

use crate::{
    domain::Command,
    errors::DomainError,
    partner::{
        CancelPartnerPromoCodeLimit, Partner, PartnerPromoCodeLimit, SetPartnerPromoCodeLimit,
    },
    repository::Repository,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

const PARTNER: &str = "合作伙伴";
const LIMIT: &str = "合作伙伴限额";

/// 合作伙伴服务结构
pub struct PartnerService<R> {
    partners: R,
}

impl<R> PartnerService<R>
where
    R: Repository<Partner>,
{
    /// 构造函数
    pub fn new(partners: R) -> Self {
        Self { partners }
    }

    /// 获取全部合作伙伴
    #[instrument(skip(self))]
    pub async fn partners(&self) -> Result<Vec<Partner>, DomainError> {
        Ok(self.partners.get_all().await?)
    }

    /// 获取合作伙伴
    #[instrument(skip(self))]
    pub async fn partner(&self, partner_id: Uuid) -> Result<Partner, DomainError> {
        self.find(partner_id).await
    }

    /// 获取合作伙伴的指定限额
    #[instrument(skip(self))]
    pub async fn limit(
        &self,
        partner_id: Uuid,
        limit_id: Uuid,
    ) -> Result<PartnerPromoCodeLimit, DomainError> {
        let partner = self.find(partner_id).await?;
        partner
            .limit(limit_id)
            .cloned()
            .ok_or(DomainError::NotFound {
                entity: LIMIT,
                id: limit_id,
            })
    }

    /// 设置合作伙伴促销码限额
    ///
    /// 存在生效限额时将其取消并清零已发放数量，随后追加新限额并保存。
    #[instrument(skip(self, com), fields(limit = com.limit))]
    pub async fn set_limit(
        &self,
        partner_id: Uuid,
        com: SetPartnerPromoCodeLimit,
    ) -> Result<Partner, DomainError> {
        let mut partner = self.find(partner_id).await?;
        let evt = com.process(&mut partner).inspect_err(|e| warn!("{e}"))?;
        self.partners.update(&partner).await?;
        info!(limit_id = %evt.limit_id, replaced = ?evt.replaced, "设置促销码限额");
        Ok(partner)
    }

    /// 取消合作伙伴当前促销码限额
    #[instrument(skip(self))]
    pub async fn cancel_limit(&self, partner_id: Uuid) -> Result<Partner, DomainError> {
        let mut partner = self.find(partner_id).await?;
        let evt = CancelPartnerPromoCodeLimit
            .process(&mut partner)
            .inspect_err(|e| warn!("{e}"))?;
        self.partners.update(&partner).await?;
        info!(limit_id = ?evt.limit_id, "取消促销码限额");
        Ok(partner)
    }

    async fn find(&self, partner_id: Uuid) -> Result<Partner, DomainError> {
        match self.partners.get_by_id(partner_id).await? {
            Some(partner) => Ok(partner),
            None => {
                warn!("{PARTNER}不存在：{partner_id}");
                Err(DomainError::NotFound {
                    entity: PARTNER,
                    id: partner_id,
                })
            }
        }
    }
}
