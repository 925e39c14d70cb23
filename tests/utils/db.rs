use chrono::Utc;
use mock_db_service::infrastructure::database::DatabasePool;
use sqlx::migrate::MigrateDatabase;
use sqlx::{MySql, Sqlite};
use std::env;
use uuid::Uuid;

pub fn sqlite_test_database_url(test_case_id: &str) -> String {
    let path = env::temp_dir().join(format!("mock_db_service_{}.db", test_case_id));

    format!("sqlite://{}", path.display())
}

pub async fn create_sqlite_database(database_url: &str) {
    Sqlite::create_database(database_url).await.unwrap();
}

pub async fn drop_database(database_pool: &DatabasePool, database_url: &str) {
    database_pool.close().await;

    match database_pool {
        DatabasePool::MySql(_) => {
            MySql::drop_database(database_url).await.unwrap();
        }
        DatabasePool::Sqlite(_) => {
            Sqlite::drop_database(database_url).await.unwrap();
        }
    }
}

pub async fn insert_user(database_pool: &DatabasePool, email: &str) {
    let query = "INSERT INTO users (id, email, created_at) VALUES (?, ?, ?)";
    let id = Uuid::now_v7().to_string();

    match database_pool {
        DatabasePool::MySql(pool) => {
            sqlx::query(query)
                .bind(id)
                .bind(email)
                .bind(Utc::now())
                .execute(pool)
                .await
                .unwrap();
        }
        DatabasePool::Sqlite(pool) => {
            sqlx::query(query)
                .bind(id)
                .bind(email)
                .bind(Utc::now())
                .execute(pool)
                .await
                .unwrap();
        }
    }
}
