#![allow(dead_code)]

use promo::{
    InMemoryRepository, Partner, PartnerPromoCodeLimit, Repository,
    config::StoreConfig,
    errors::StoreError,
    partner::LimitState,
};
use rstest::fixture;
use std::sync::{
    Arc, LazyLock,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};
use time::OffsetDateTime;
use tracing::{Level, info};
use tracing_subscriber::fmt;
use uuid::Uuid;

pub(crate) static SETUP: LazyLock<()> = LazyLock::new(|| {
    let _ = fmt()
        .with_test_writer()
        .with_max_level(Level::DEBUG)
        .try_init();
    info!("启用 {} 测试日志输出", Level::DEBUG);
});

/// 记录更新次数的存储替身
#[derive(Clone)]
pub(crate) struct CountingRepository {
    inner: InMemoryRepository<Partner>,
    updates: Arc<AtomicUsize>,
    unavailable: Arc<AtomicBool>,
}

impl CountingRepository {
    pub(crate) fn new(partners: impl IntoIterator<Item = Partner>) -> Self {
        LazyLock::force(&SETUP);
        Self {
            inner: InMemoryRepository::with_entities(&StoreConfig::default(), partners),
            updates: Arc::new(AtomicUsize::new(0)),
            unavailable: Arc::new(AtomicBool::new(false)),
        }
    }

    pub(crate) fn updates(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }

    pub(crate) fn set_unavailable(&self) {
        self.unavailable.store(true, Ordering::SeqCst);
    }

    pub(crate) async fn stored(&self, id: Uuid) -> Partner {
        self.inner.get_by_id(id).await.unwrap().unwrap()
    }
}

impl Repository<Partner> for CountingRepository {
    async fn get_all(&self) -> Result<Vec<Partner>, StoreError> {
        self.inner.get_all().await
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Partner>, StoreError> {
        self.inner.get_by_id(id).await
    }

    async fn add(&self, entity: Partner) -> Result<(), StoreError> {
        self.inner.add(entity).await
    }

    async fn update(&self, entity: &Partner) -> Result<(), StoreError> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("连接中断".to_string()));
        }
        self.inner.update(entity).await
    }
}

/// 激活状态、带一个生效限额（100）的合作伙伴
#[fixture]
pub(crate) fn partner() -> Partner {
    let id = Uuid::new_v4();
    Partner {
        id,
        name: "NewName".to_string(),
        is_active: true,
        number_issued_promo_codes: 0,
        limits: vec![PartnerPromoCodeLimit {
            id: Uuid::new_v4(),
            partner_id: id,
            created_at: OffsetDateTime::now_utc(),
            end_date: None,
            state: LimitState::Active,
            limit: 100,
        }],
    }
}
