use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A persisted article row.
///
/// `title`, `username`, `content`, and `view_count` are nullable in storage
/// because submissions are unvalidated: a form posted without a field stores
/// NULL. Identifiers and timestamps are engine-assigned at insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: i64,
    pub title: Option<String>,
    pub username: Option<String>,
    pub content: Option<String>,
    pub view_count: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Column values supplied when inserting an article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewArticle {
    pub title: Option<String>,
    pub content: Option<String>,
    pub username: String,
    pub view_count: i32,
}

/// Mutable subset of an article. Updates touch nothing else: author,
/// view count, and created timestamp survive every edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleChanges {
    pub title: Option<String>,
    pub content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_serializes_with_storage_column_names() {
        let article = Article {
            id: 1,
            title: Some("Hello".into()),
            username: None,
            content: Some("World".into()),
            view_count: Some(42),
            created_at: chrono::NaiveDate::from_ymd_opt(2021, 2, 23)
                .unwrap()
                .and_hms_opt(9, 39, 30)
                .unwrap(),
            updated_at: chrono::NaiveDate::from_ymd_opt(2021, 2, 23)
                .unwrap()
                .and_hms_opt(9, 39, 30)
                .unwrap(),
        };

        let json = serde_json::to_value(&article).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["title"], "Hello");
        assert!(json["username"].is_null());
        assert_eq!(json["view_count"], 42);
        assert_eq!(json["created_at"], "2021-02-23T09:39:30");
    }
}
