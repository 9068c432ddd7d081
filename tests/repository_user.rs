mod common;

use std::sync::Arc;
use link_desk::AppError;
use link_desk::domain::entities::{NewUser, UserUpdate};
use link_desk::domain::repositories::UserRepository;
use link_desk::infrastructure::persistence::SqliteUserRepository;

fn new_user(name: &str, email: &str) -> NewUser {
    NewUser {
        name: name.to_string(),
        email: email.to_string(),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
    }
}

async fn repo() -> SqliteUserRepository {
    SqliteUserRepository::new(Arc::new(common::test_pool().await))
}

#[tokio::test]
async fn test_create_and_find_user() {
    let repo = repo().await;

    let id = repo.create(new_user("John Doe", "john@example.com")).await.unwrap();
    assert!(id > 0);

    let user = repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(user.name, "John Doe");
    assert_eq!(user.email, "john@example.com");

    let creds = repo.find_by_email("john@example.com").await.unwrap().unwrap();
    assert_eq!(creds.id, id);
    assert!(creds.password_hash.starts_with("$argon2id$"));
}

#[tokio::test]
async fn test_create_duplicate_email_is_conflict() {
    let repo = repo().await;
    repo.create(new_user("John Doe", "john@example.com")).await.unwrap();

    let result = repo.create(new_user("Other John", "john@example.com")).await;

    assert!(matches!(result, Err(AppError::Conflict { .. })));
    assert_eq!(repo.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_find_missing_user() {
    let repo = repo().await;

    assert!(repo.find_by_id(1).await.unwrap().is_none());
    assert!(repo.find_by_email("ghost@example.com").await.unwrap().is_none());
    assert!(!repo.exists(1).await.unwrap());
}

#[tokio::test]
async fn test_list_is_ordered_by_id() {
    let repo = repo().await;
    let a = repo.create(new_user("Anna Lee", "anna@example.com")).await.unwrap();
    let b = repo.create(new_user("Bob Johnson", "bob@example.com")).await.unwrap();

    let users = repo.list().await.unwrap();

    let ids: Vec<i64> = users.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![a, b]);
}

#[tokio::test]
async fn test_search_is_case_insensitive_substring() {
    let repo = repo().await;
    repo.create(new_user("John Doe", "john@example.com")).await.unwrap();
    repo.create(new_user("Jane Smith", "jane@example.com")).await.unwrap();

    let users = repo.search_by_name("doe").await.unwrap();

    assert_eq!(users.len(), 1);
    assert_eq!(users[0].name, "John Doe");
}

#[tokio::test]
async fn test_search_treats_wildcards_literally() {
    let repo = repo().await;
    repo.create(new_user("John Doe", "john@example.com")).await.unwrap();

    assert!(repo.search_by_name("%").await.unwrap().is_empty());
    assert!(repo.search_by_name("J_hn").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_user() {
    let repo = repo().await;
    let id = repo.create(new_user("John Doe", "john@example.com")).await.unwrap();

    let updated = repo
        .update(id, UserUpdate {
            name: "John Smith".to_string(),
            email: "js@example.com".to_string(),
        })
        .await
        .unwrap();
    assert!(updated);

    let user = repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(user.name, "John Smith");
    assert_eq!(user.email, "js@example.com");
}

#[tokio::test]
async fn test_update_missing_user() {
    let repo = repo().await;

    let updated = repo
        .update(9, UserUpdate {
            name: "Nobody".to_string(),
            email: "nobody@example.com".to_string(),
        })
        .await
        .unwrap();

    assert!(!updated);
}

#[tokio::test]
async fn test_update_to_taken_email_is_conflict() {
    let repo = repo().await;
    repo.create(new_user("John Doe", "john@example.com")).await.unwrap();
    let jane = repo.create(new_user("Jane Smith", "jane@example.com")).await.unwrap();

    let result = repo
        .update(jane, UserUpdate {
            name: "Jane Smith".to_string(),
            email: "john@example.com".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::Conflict { .. })));
}

#[tokio::test]
async fn test_delete_user() {
    let repo = repo().await;
    let id = repo.create(new_user("John Doe", "john@example.com")).await.unwrap();

    assert!(repo.delete(id).await.unwrap());
    assert!(!repo.exists(id).await.unwrap());
    assert!(!repo.delete(id).await.unwrap());
}
