//! Round trips against a real PostgreSQL. Run with
//! `DATABASE_URL=postgres://... cargo test -- --ignored`.

use student_registry::{
    ensure_tables, Address, AppError, Class, Entity, PgStore, Repository, School, Student,
};

async fn store() -> PgStore {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .expect("connect");
    let schema = "registry_test";
    ensure_tables(&pool, schema).await.expect("ensure tables");
    PgStore::new(pool, schema)
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn create_then_get_returns_input() {
    let store = store().await;
    let mut student = Student {
        student_id: 7,
        name: "Ada".into(),
        marks: 88,
        address: Address {
            street: "1 Main St".into(),
            city: "Pune".into(),
            state: "MH".into(),
        },
        ..Default::default()
    };
    Repository::<Student>::create(&store, &mut student).await.unwrap();
    assert!(student.id() > 0);

    let fetched = Repository::<Student>::get_by_id(&store, student.id()).await.unwrap();
    assert_eq!(fetched, student);
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn delete_hides_row_from_reads() {
    let store = store().await;
    let mut class = Class {
        class_name: "2C".into(),
        ..Default::default()
    };
    Repository::<Class>::create(&store, &mut class).await.unwrap();
    Repository::<Class>::delete(&store, class.id()).await.unwrap();

    let err = Repository::<Class>::get_by_id(&store, class.id()).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    let all = Repository::<Class>::list_all(&store).await.unwrap();
    assert!(all.iter().all(|c| c.id() != class.id()));

    let mut revived = class.clone();
    revived.class_name = "back".into();
    let err = Repository::<Class>::update(&store, &mut revived).await.unwrap_err();
    assert!(matches!(err, AppError::Store(_)));
    let err = Repository::<Class>::get_by_id(&store, class.id()).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn update_of_unknown_id_inserts_and_advances_ids() {
    let store = store().await;
    let mut first = School {
        name: "Seed".into(),
        ..Default::default()
    };
    Repository::<School>::create(&store, &mut first).await.unwrap();

    let mut placed = School {
        name: "Placed".into(),
        class_id: 4,
        ..Default::default()
    };
    placed.meta.id = first.id() + 1000;
    Repository::<School>::update(&store, &mut placed).await.unwrap();
    assert_eq!(placed.id(), first.id() + 1000);

    let fetched = Repository::<School>::get_by_id(&store, placed.id()).await.unwrap();
    assert_eq!(fetched.name, "Placed");

    let mut next = School {
        name: "Next".into(),
        ..Default::default()
    };
    Repository::<School>::create(&store, &mut next).await.unwrap();
    assert!(next.id() > placed.id());
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn update_overwrites_fields_and_keeps_created_at() {
    let store = store().await;
    let mut school = School {
        name: "Old".into(),
        class_id: 1,
        ..Default::default()
    };
    Repository::<School>::create(&store, &mut school).await.unwrap();

    let mut changed = School {
        name: "Updated".into(),
        class_id: 2,
        ..Default::default()
    };
    changed.meta.id = school.id();
    Repository::<School>::update(&store, &mut changed).await.unwrap();
    assert_eq!(changed.meta.created_at, school.meta.created_at);
    assert!(changed.meta.updated_at >= school.meta.updated_at);

    let fetched = Repository::<School>::get_by_id(&store, school.id()).await.unwrap();
    assert_eq!(fetched.name, "Updated");
    assert_eq!(fetched.class_id, 2);
}
