use personstore::db::init_db;
use personstore::{ColumnRepository, DocumentRepository, Person, PersonStore, StoreError};
use tempfile::TempDir;

async fn setup_pool() -> (sqlx::SqlitePool, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir
        .path()
        .join("test.db")
        .to_string_lossy()
        .to_string();
    let pool = init_db(&db_path).await.expect("init_db failed");
    (pool, temp_dir)
}

/// Runs the demo sequence against any layout: migrate, insert the two
/// fixed records, read everything back.
async fn seed_and_list(store: &dyn PersonStore, seed: Vec<Person>) -> Vec<(String, i64)> {
    store.migrate().await.expect("migrate failed");
    for person in seed {
        store.create(person).await.expect("create failed");
    }

    let mut pairs: Vec<(String, i64)> = store
        .all()
        .await
        .expect("all failed")
        .into_iter()
        .map(|p| (p.name, p.age))
        .collect();
    pairs.sort();
    pairs
}

#[tokio::test]
async fn columns_layout_end_to_end() {
    let (pool, _temp) = setup_pool().await;
    let store = ColumnRepository::new(pool);

    let pairs = seed_and_list(
        &store,
        vec![Person::new("Williams", 56), Person::new("Eliasson", 52)],
    )
    .await;

    assert_eq!(
        pairs,
        vec![("Eliasson".to_string(), 52), ("Williams".to_string(), 56)]
    );
}

#[tokio::test]
async fn document_layout_end_to_end() {
    let (pool, _temp) = setup_pool().await;
    let store = DocumentRepository::new(pool);

    let pairs = seed_and_list(
        &store,
        vec![
            Person::with_id(10, "Williams", 56),
            Person::with_id(20, "Eliasson", 52),
        ],
    )
    .await;

    assert_eq!(
        pairs,
        vec![("Eliasson".to_string(), 52), ("Williams".to_string(), 56)]
    );
}

#[tokio::test]
async fn layouts_do_not_interfere_on_one_database() {
    let (pool, _temp) = setup_pool().await;
    let columns = ColumnRepository::new(pool.clone());
    let documents = DocumentRepository::new(pool);

    columns.migrate().await.unwrap();
    documents.migrate().await.unwrap();

    columns.create(Person::new("Williams", 56)).await.unwrap();
    documents
        .create(Person::with_id(10, "Eliasson", 52))
        .await
        .unwrap();

    assert_eq!(columns.all().await.unwrap().len(), 1);
    assert_eq!(documents.all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn rerunning_the_demo_reports_duplicates_and_keeps_rows() {
    let (pool, _temp) = setup_pool().await;
    let store = ColumnRepository::new(pool);
    store.migrate().await.unwrap();

    store.create(Person::new("Williams", 56)).await.unwrap();
    store.create(Person::new("Eliasson", 52)).await.unwrap();

    // Second run of the same seed: every insert is a duplicate.
    for person in [Person::new("Williams", 56), Person::new("Eliasson", 52)] {
        let err = store.create(person).await.expect_err("expected duplicate");
        assert!(matches!(err, StoreError::Duplicate));
    }

    assert_eq!(store.all().await.unwrap().len(), 2);
}
