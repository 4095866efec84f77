//! # **promo** 存储抽象

use crate::{config::StoreConfig, domain::Entity, errors::StoreError};
use std::{collections::HashMap, future::Future, sync::Arc};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

/// 实体存储特征
pub trait Repository<E: Entity>: Send + Sync + 'static {
    /// 获取全部实体
    fn get_all(&self) -> impl Future<Output = Result<Vec<E>, StoreError>> + Send;
    /// 按 Id 获取实体，不存在时返回 None
    fn get_by_id(&self, id: Uuid) -> impl Future<Output = Result<Option<E>, StoreError>> + Send;
    /// 添加实体
    fn add(&self, entity: E) -> impl Future<Output = Result<(), StoreError>> + Send;
    /// 更新实体
    fn update(&self, entity: &E) -> impl Future<Output = Result<(), StoreError>> + Send;
}

/// 内存存储
#[derive(Debug, Clone)]
pub struct InMemoryRepository<E> {
    entities: Arc<RwLock<HashMap<Uuid, E>>>,
}

impl<E: Entity> InMemoryRepository<E> {
    /// 构造函数
    pub fn new(cfg: &StoreConfig) -> Self {
        Self {
            entities: Arc::new(RwLock::new(HashMap::with_capacity(cfg.capacity))),
        }
    }

    /// 以给定实体构造
    pub fn with_entities(cfg: &StoreConfig, entities: impl IntoIterator<Item = E>) -> Self {
        let mut map = HashMap::with_capacity(cfg.capacity);
        map.extend(entities.into_iter().map(|e| (e.id(), e)));
        Self {
            entities: Arc::new(RwLock::new(map)),
        }
    }
}

impl<E: Entity> Repository<E> for InMemoryRepository<E> {
    async fn get_all(&self) -> Result<Vec<E>, StoreError> {
        Ok(self.entities.read().await.values().cloned().collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<E>, StoreError> {
        Ok(self.entities.read().await.get(&id).cloned())
    }

    async fn add(&self, entity: E) -> Result<(), StoreError> {
        let id = entity.id();
        let mut entities = self.entities.write().await;
        if entities.contains_key(&id) {
            return Err(StoreError::Duplicate(id));
        }
        entities.insert(id, entity);
        debug!("添加实体 {id}");
        Ok(())
    }

    async fn update(&self, entity: &E) -> Result<(), StoreError> {
        let id = entity.id();
        match self.entities.write().await.get_mut(&id) {
            Some(stored) => {
                *stored = entity.clone();
                debug!("更新实体 {id}");
                Ok(())
            }
            None => Err(StoreError::Missing(id)),
        }
    }
}
