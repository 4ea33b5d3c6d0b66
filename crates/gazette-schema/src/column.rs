use serde::{Deserialize, Serialize};

/// Column definition inside a table migration.
///
/// `primary_key`/`auto_increment` are inline flags rather than table-level
/// constraints so the SQLite builder can emit the mandatory
/// `INTEGER PRIMARY KEY AUTOINCREMENT` single-column form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ColumnDef {
    pub name: String,
    pub r#type: ColumnType,
    pub nullable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(default)]
    pub primary_key: bool,
    #[serde(default)]
    pub auto_increment: bool,
}

impl ColumnDef {
    /// A nullable column with no default, the common case in this schema.
    pub fn nullable(name: impl Into<String>, r#type: ColumnType) -> Self {
        Self {
            name: name.into(),
            r#type,
            nullable: true,
            default: None,
            primary_key: false,
            auto_increment: false,
        }
    }

    /// An auto-incrementing big-integer primary key.
    pub fn big_increments(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            r#type: ColumnType::BigInt,
            nullable: false,
            default: None,
            primary_key: true,
            auto_increment: true,
        }
    }

    /// A NOT NULL timestamp defaulting to the engine clock at insert.
    pub fn created_timestamp(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            r#type: ColumnType::Timestamp,
            nullable: false,
            default: Some("CURRENT_TIMESTAMP".to_string()),
            primary_key: false,
            auto_increment: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ColumnType {
    BigInt,
    Integer,
    Text,
    Timestamp,
    Varchar { length: u32 },
}

impl ColumnType {
    /// Returns true if this type supports auto_increment (integer types only).
    pub fn supports_auto_increment(&self) -> bool {
        matches!(self, ColumnType::BigInt | ColumnType::Integer)
    }
}
