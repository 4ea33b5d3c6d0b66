use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Db(#[from] sea_orm::DbErr),
    #[error("query build error: {0}")]
    QueryBuild(#[from] sea_query::error::Error),
    #[error("schema error: {0}")]
    Schema(#[from] gazette_schema::SchemaError),
    #[error("recorded migration not in registry: {0}")]
    UnknownMigration(String),
}
