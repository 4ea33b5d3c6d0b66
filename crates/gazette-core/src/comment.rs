use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A persisted comment row. Comments belong to exactly one article for their
/// whole lifetime; deleting the article deletes them through the storage
/// cascade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub content: Option<String>,
    pub article_id: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Column values supplied when inserting a comment. The owning article is
/// not checked before insert; the foreign key rejects orphans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewComment {
    pub article_id: i64,
    pub content: Option<String>,
}
