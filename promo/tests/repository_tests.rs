use promo::{
    InMemoryRepository, Partner, Repository, config::StoreConfig, errors::StoreError,
};
use uuid::Uuid;

fn partner(name: &str) -> Partner {
    Partner {
        id: Uuid::new_v4(),
        name: name.to_string(),
        is_active: true,
        number_issued_promo_codes: 0,
        limits: Vec::new(),
    }
}

#[tokio::test]
async fn add_then_get_by_id() {
    let repo = InMemoryRepository::new(&StoreConfig::default());
    let p = partner("甲");

    repo.add(p.clone()).await.unwrap();

    assert_eq!(repo.get_by_id(p.id).await.unwrap(), Some(p));
    assert_eq!(repo.get_by_id(Uuid::new_v4()).await.unwrap(), None);
}

#[tokio::test]
async fn add_duplicate_is_rejected() {
    let p = partner("甲");
    let repo = InMemoryRepository::with_entities(&StoreConfig::default(), [p.clone()]);

    let result = repo.add(p.clone()).await;

    assert_eq!(result, Err(StoreError::Duplicate(p.id)));
}

#[tokio::test]
async fn update_replaces_stored_entity() {
    let mut p = partner("甲");
    let repo = InMemoryRepository::with_entities(&StoreConfig::default(), [p.clone()]);
    p.number_issued_promo_codes = 3;

    repo.update(&p).await.unwrap();

    assert_eq!(repo.get_by_id(p.id).await.unwrap(), Some(p));
}

#[tokio::test]
async fn update_unknown_entity_is_rejected() {
    let repo: InMemoryRepository<Partner> = InMemoryRepository::new(&StoreConfig::default());
    let p = partner("乙");

    let result = repo.update(&p).await;

    assert_eq!(result, Err(StoreError::Missing(p.id)));
    assert!(repo.get_all().await.unwrap().is_empty());
}
