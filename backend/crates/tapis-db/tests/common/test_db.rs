use tapis_db::ConnectionManager;

use sqlx::SqlitePool;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    ConnectionManager::in_memory()
        .connect()
        .await
        .expect("Failed to create test pool")
}

/// Counts rows of a table, bypassing the repositories
pub async fn count_rows(pool: &SqlitePool, table: &str) -> i64 {
    // Use sqlx::query_scalar (not query!) so no offline data is needed
    sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(pool)
        .await
        .expect("Failed to count rows")
}
