//! # **promo** 特征

use crate::errors::DomainError;
use uuid::Uuid;

/// 实体特征
pub trait Entity: Send + Sync + Clone + 'static {
    /// 获取 id
    fn id(&self) -> Uuid;
}

/// 事件特征
pub trait Event: Send + 'static {
    /// 实体类型
    type A: Entity;

    /// 事件应用到实体
    fn apply(&self, agg: &mut Self::A);
}

/// 命令特征
pub trait Command: Sized + 'static {
    /// 实体类型
    type A: Entity;
    /// 事件类型
    type E: Event<A = Self::A>;

    /// 检查命令是否合法
    fn check(&self, agg: &Self::A) -> Result<(), DomainError>;
    /// 执行命令，生成相应事件
    fn execute(self, agg: &Self::A) -> Self::E;
    /// 处理命令
    #[inline]
    fn process(self, agg: &mut Self::A) -> Result<Self::E, DomainError> {
        self.check(agg)?;
        let evt = self.execute(agg);
        evt.apply(agg);
        Ok(evt)
    }
}
