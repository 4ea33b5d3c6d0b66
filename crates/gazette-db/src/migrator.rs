//! Applies and rolls back the schema registry against a live connection.
//!
//! Applied revisions are recorded in a `migrations` bookkeeping table
//! (name, batch number, application time). Statements run one at a time
//! with no surrounding transaction; a failure surfaces as [`StoreError`]
//! and leaves earlier statements in place.

use gazette_schema::sql::Direction;
use gazette_schema::{DatabaseBackend as SchemaBackend, Migration, build_migration_queries, migrations};
use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, Statement};
use sea_query::{Alias, ColumnDef, Expr, Order, Query, SimpleExpr, Table};

use crate::error::StoreError;

const MIGRATIONS_TABLE: &str = "migrations";

fn schema_backend(backend: DbBackend) -> SchemaBackend {
    match backend {
        DbBackend::Postgres => SchemaBackend::Postgres,
        DbBackend::MySql => SchemaBackend::MySql,
        DbBackend::Sqlite => SchemaBackend::Sqlite,
    }
}

/// Apply every registry migration not yet recorded, oldest first, under a
/// single new batch number. Returns how many migrations ran.
pub async fn apply_pending(conn: &DatabaseConnection) -> Result<usize, StoreError> {
    ensure_bookkeeping_table(conn).await?;

    let applied = applied_names(conn).await?;
    let pending: Vec<Migration> = migrations::all()
        .into_iter()
        .filter(|m| !applied.contains(&m.name))
        .collect();
    if pending.is_empty() {
        return Ok(0);
    }

    let batch = latest_batch(conn).await?.unwrap_or(0) + 1;
    let backend = conn.get_database_backend();
    for migration in &pending {
        for query in build_migration_queries(migration, Direction::Up)? {
            let sql = query.build(schema_backend(backend));
            conn.execute(Statement::from_string(backend, sql)).await?;
        }
        record_applied(conn, &migration.name, batch).await?;
        tracing::info!(name = %migration.name, batch, "applied migration");
    }
    Ok(pending.len())
}

/// Run the `down` side of the most recent batch, newest first, and forget
/// its records. Returns how many migrations were rolled back.
pub async fn rollback_last_batch(conn: &DatabaseConnection) -> Result<usize, StoreError> {
    ensure_bookkeeping_table(conn).await?;

    let Some(batch) = latest_batch(conn).await? else {
        return Ok(0);
    };
    let names = batch_names_newest_first(conn, batch).await?;

    let registry = migrations::all();
    let backend = conn.get_database_backend();
    for name in &names {
        let migration = registry
            .iter()
            .find(|m| &m.name == name)
            .ok_or_else(|| StoreError::UnknownMigration(name.clone()))?;
        for query in build_migration_queries(migration, Direction::Down)? {
            let sql = query.build(schema_backend(backend));
            conn.execute(Statement::from_string(backend, sql)).await?;
        }
        forget_applied(conn, name).await?;
        tracing::info!(name = %migration.name, batch, "rolled back migration");
    }
    Ok(names.len())
}

async fn ensure_bookkeeping_table(conn: &DatabaseConnection) -> Result<(), StoreError> {
    let stmt = Table::create()
        .table(Alias::new(MIGRATIONS_TABLE))
        .if_not_exists()
        .col(
            ColumnDef::new(Alias::new("id"))
                .big_integer()
                .not_null()
                .primary_key()
                .auto_increment(),
        )
        .col(ColumnDef::new(Alias::new("name")).string_len(255).not_null())
        .col(ColumnDef::new(Alias::new("batch")).integer().not_null())
        .col(
            ColumnDef::new(Alias::new("migration_time"))
                .timestamp()
                .default(Into::<SimpleExpr>::into(Expr::cust("CURRENT_TIMESTAMP"))),
        )
        .to_owned();

    let backend = conn.get_database_backend();
    conn.execute(backend.build(&stmt)).await?;
    Ok(())
}

async fn applied_names(conn: &DatabaseConnection) -> Result<Vec<String>, StoreError> {
    let stmt = Query::select()
        .column(Alias::new("name"))
        .from(Alias::new(MIGRATIONS_TABLE))
        .order_by(Alias::new("id"), Order::Asc)
        .to_owned();

    let backend = conn.get_database_backend();
    let rows = conn.query_all(backend.build(&stmt)).await?;
    rows.iter()
        .map(|row| row.try_get("", "name").map_err(StoreError::from))
        .collect()
}

async fn batch_names_newest_first(
    conn: &DatabaseConnection,
    batch: i32,
) -> Result<Vec<String>, StoreError> {
    let stmt = Query::select()
        .column(Alias::new("name"))
        .from(Alias::new(MIGRATIONS_TABLE))
        .and_where(Expr::col(Alias::new("batch")).eq(batch))
        .order_by(Alias::new("id"), Order::Desc)
        .to_owned();

    let backend = conn.get_database_backend();
    let rows = conn.query_all(backend.build(&stmt)).await?;
    rows.iter()
        .map(|row| row.try_get("", "name").map_err(StoreError::from))
        .collect()
}

async fn latest_batch(conn: &DatabaseConnection) -> Result<Option<i32>, StoreError> {
    let stmt = Query::select()
        .expr_as(Expr::col(Alias::new("batch")).max(), Alias::new("batch"))
        .from(Alias::new(MIGRATIONS_TABLE))
        .to_owned();

    let backend = conn.get_database_backend();
    let row = conn.query_one(backend.build(&stmt)).await?;
    match row {
        Some(row) => Ok(row.try_get("", "batch")?),
        None => Ok(None),
    }
}

async fn record_applied(
    conn: &DatabaseConnection,
    name: &str,
    batch: i32,
) -> Result<(), StoreError> {
    let mut stmt = Query::insert()
        .into_table(Alias::new(MIGRATIONS_TABLE))
        .columns([Alias::new("name"), Alias::new("batch")])
        .to_owned();
    stmt.values([name.into(), batch.into()])?;

    let backend = conn.get_database_backend();
    conn.execute(backend.build(&stmt)).await?;
    Ok(())
}

async fn forget_applied(conn: &DatabaseConnection, name: &str) -> Result<(), StoreError> {
    let stmt = Query::delete()
        .from_table(Alias::new(MIGRATIONS_TABLE))
        .and_where(Expr::col(Alias::new("name")).eq(name))
        .to_owned();

    let backend = conn.get_database_backend();
    conn.execute(backend.build(&stmt)).await?;
    Ok(())
}
