use habit_infrastructure::persistence::Database;
use sqlx::SqlitePool;

pub async fn setup_in_memory_db() -> SqlitePool {
    let database = Database::in_memory().await.expect("open in-memory db");
    database.run_migrations().await.expect("run migrations");
    database.pool().clone()
}
