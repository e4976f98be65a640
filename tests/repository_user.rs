//! PostgreSQL repository tests.
//!
//! `#[sqlx::test]` creates a fresh database per test from `DATABASE_URL` and applies
//! `./migrations`. Run with `cargo test -- --ignored` against a live server.

use chrono::NaiveDate;
use sqlx::PgPool;
use std::sync::Arc;
use users_api::domain::entities::{NewUser, UpdateUser};
use users_api::domain::repositories::UserRepository;
use users_api::infrastructure::persistence::PgUserRepository;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn new_user(name: &str, dob: NaiveDate) -> NewUser {
    NewUser {
        name: name.to_string(),
        dob,
    }
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_create_user(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    let user = repo
        .create(new_user("Alice", date(1990, 5, 10)))
        .await
        .unwrap();

    assert!(user.id > 0);
    assert_eq!(user.name, "Alice");
    assert_eq!(user.dob, date(1990, 5, 10));
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_find_by_id(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    let created = repo.create(new_user("Bob", date(1985, 1, 2))).await.unwrap();

    let found = repo.find_by_id(created.id).await.unwrap();

    assert_eq!(found, Some(created));
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_find_by_id_missing(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    assert!(repo.find_by_id(i64::MAX).await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_list_in_id_order(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    let first = repo.create(new_user("First", date(1990, 1, 1))).await.unwrap();
    let second = repo.create(new_user("Second", date(1991, 1, 1))).await.unwrap();

    let users = repo.list().await.unwrap();

    assert_eq!(
        users.iter().map(|u| u.id).collect::<Vec<_>>(),
        vec![first.id, second.id]
    );
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_update_user(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    let created = repo.create(new_user("Carol", date(1970, 3, 3))).await.unwrap();

    let updated = repo
        .update(
            created.id,
            UpdateUser {
                name: "Caroline".to_string(),
                dob: date(1971, 4, 4),
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Caroline");
    assert_eq!(updated.dob, date(1971, 4, 4));
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_update_missing_user(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    let result = repo
        .update(
            987_654,
            UpdateUser {
                name: "Ghost".to_string(),
                dob: date(1970, 1, 1),
            },
        )
        .await
        .unwrap();

    assert!(result.is_none());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_delete_user(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    let created = repo.create(new_user("Dave", date(2000, 2, 29))).await.unwrap();

    assert!(repo.delete(created.id).await.unwrap());
    assert!(!repo.delete(created.id).await.unwrap());
    assert!(repo.find_by_id(created.id).await.unwrap().is_none());
}
