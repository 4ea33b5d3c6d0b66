use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("column {table}.{column} cannot auto-increment: type does not support it")]
    AutoIncrementUnsupported { table: String, column: String },
}
