use tapis_db::ConnectionManager;

use sqlx::SqlitePool;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    ConnectionManager::in_memory()
        .connect()
        .await
        .expect("Failed to create test pool")
}

pub async fn count_rows(pool: &SqlitePool, table: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(pool)
        .await
        .expect("Failed to count rows")
}

pub async fn delete_role(pool: &SqlitePool, slug: &str) {
    sqlx::query("DELETE FROM roles WHERE slug = ?")
        .bind(slug)
        .execute(pool)
        .await
        .expect("Failed to delete role");
}

pub async fn insert_global_role(pool: &SqlitePool, slug: &str, scopes: &str) {
    sqlx::query("INSERT INTO roles (slug, display_name, role_type, scopes) VALUES (?, ?, 'global', ?)")
        .bind(slug)
        .bind(slug)
        .bind(scopes)
        .execute(pool)
        .await
        .expect("Failed to insert role");
}
