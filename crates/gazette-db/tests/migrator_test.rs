use gazette_db::migrator;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

async fn connect() -> DatabaseConnection {
    // A single pooled connection keeps the in-memory database alive for the
    // whole test.
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1).sqlx_logging(false);
    Database::connect(opt).await.unwrap()
}

#[tokio::test]
async fn apply_pending_runs_both_migrations_once() {
    let conn = connect().await;

    assert_eq!(migrator::apply_pending(&conn).await.unwrap(), 2);
    // Re-running is a no-op: both revisions are recorded.
    assert_eq!(migrator::apply_pending(&conn).await.unwrap(), 0);
}

#[tokio::test]
async fn rollback_removes_last_batch_and_allows_reapply() {
    let conn = connect().await;

    assert_eq!(migrator::apply_pending(&conn).await.unwrap(), 2);
    assert_eq!(migrator::rollback_last_batch(&conn).await.unwrap(), 2);
    assert_eq!(migrator::apply_pending(&conn).await.unwrap(), 2);
}

#[tokio::test]
async fn rollback_on_fresh_database_is_a_noop() {
    let conn = connect().await;

    assert_eq!(migrator::rollback_last_batch(&conn).await.unwrap(), 0);
}
