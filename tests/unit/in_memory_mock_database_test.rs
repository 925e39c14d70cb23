use mock_db_service::domain::repository::{MockDatabase, RepositoryError};
use mock_db_service::domain::user::User;
use mock_db_service::infrastructure::in_memory_mock_database::InMemoryMockDatabase;

#[tokio::test]
async fn it_saves_and_lists_users() {
    let database = InMemoryMockDatabase::new();
    let jon = User::now("jon@snow.test".to_string()).unwrap();
    let arya = User::now("arya@stark.test".to_string()).unwrap();

    database.save_user(&jon).await.unwrap();
    database.save_user(&arya).await.unwrap();

    let users = database.list_users().await.unwrap();
    assert_eq!(users, vec![jon, arya]);
}

#[tokio::test]
async fn it_rejects_duplicated_email() {
    let database = InMemoryMockDatabase::new();
    database
        .save_user(&User::now("jon@snow.test".to_string()).unwrap())
        .await
        .unwrap();

    let result = database
        .save_user(&User::now("jon@snow.test".to_string()).unwrap())
        .await;

    match result {
        Err(RepositoryError::Conflict(msg)) => assert!(msg.contains("jon@snow.test")),
        _ => panic!("Expected conflict error"),
    }
    assert_eq!(database.list_users().await.unwrap().len(), 1);
}

#[tokio::test]
async fn it_clears_all_data() {
    let database = InMemoryMockDatabase::new();
    database
        .save_user(&User::now("jon@snow.test".to_string()).unwrap())
        .await
        .unwrap();

    database.clear_all_data().await.unwrap();

    assert!(database.list_users().await.unwrap().is_empty());
}

#[tokio::test]
async fn it_clears_empty_database() {
    let database = InMemoryMockDatabase::new();

    database.clear_all_data().await.unwrap();
    database.clear_all_data().await.unwrap();

    assert!(database.list_users().await.unwrap().is_empty());
}

#[tokio::test]
async fn it_accepts_previously_cleared_email() {
    let database = InMemoryMockDatabase::new();
    database
        .save_user(&User::now("jon@snow.test".to_string()).unwrap())
        .await
        .unwrap();
    database.clear_all_data().await.unwrap();

    database
        .save_user(&User::now("jon@snow.test".to_string()).unwrap())
        .await
        .unwrap();

    assert_eq!(database.list_users().await.unwrap().len(), 1);
}

#[tokio::test]
async fn it_shares_data_between_clones() {
    let database = InMemoryMockDatabase::new();
    let handle = database.clone();

    handle
        .save_user(&User::now("jon@snow.test".to_string()).unwrap())
        .await
        .unwrap();
    assert_eq!(database.list_users().await.unwrap().len(), 1);

    database.clear_all_data().await.unwrap();
    assert!(handle.list_users().await.unwrap().is_empty());
}

#[tokio::test]
async fn it_gets_user_by_email_until_cleared() {
    let database = InMemoryMockDatabase::new();
    let jon = User::now("jon@snow.test".to_string()).unwrap();
    database.save_user(&jon).await.unwrap();

    assert_eq!(
        database.get_user_by_email("jon@snow.test").await.unwrap(),
        Some(jon)
    );
    assert_eq!(
        database.get_user_by_email("arya@stark.test").await.unwrap(),
        None
    );

    database.clear_all_data().await.unwrap();

    assert_eq!(
        database.get_user_by_email("jon@snow.test").await.unwrap(),
        None
    );
}
