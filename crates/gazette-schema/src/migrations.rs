//! The blog's migration registry, in application order.

use crate::action::{Migration, MigrationAction};
use crate::column::{ColumnDef, ColumnType};
use crate::constraint::{ReferenceAction, TableConstraint};

pub const ARTICLES_TABLE: &str = "articles";
pub const COMMENTS_TABLE: &str = "comments";

/// Every migration the schema has ever had, oldest first. The runner applies
/// whatever suffix of this list is not yet recorded in the bookkeeping table.
pub fn all() -> Vec<Migration> {
    vec![create_articles(), create_comments()]
}

fn create_articles() -> Migration {
    Migration {
        name: "20210223093930_CreateArticles".to_string(),
        up: vec![MigrationAction::CreateTable {
            table: ARTICLES_TABLE.to_string(),
            columns: vec![
                ColumnDef::big_increments("id"),
                ColumnDef::nullable("title", ColumnType::Varchar { length: 255 }),
                ColumnDef::nullable("username", ColumnType::Varchar { length: 255 }),
                ColumnDef::nullable("content", ColumnType::Text),
                ColumnDef::nullable("view_count", ColumnType::Integer),
                ColumnDef::created_timestamp("created_at"),
                ColumnDef::created_timestamp("updated_at"),
            ],
            constraints: vec![],
        }],
        down: vec![MigrationAction::DropTable {
            table: ARTICLES_TABLE.to_string(),
        }],
    }
}

fn create_comments() -> Migration {
    Migration {
        name: "20210224111810_CreateComments".to_string(),
        up: vec![MigrationAction::CreateTable {
            table: COMMENTS_TABLE.to_string(),
            columns: vec![
                ColumnDef::big_increments("id"),
                ColumnDef::nullable("content", ColumnType::Text),
                ColumnDef {
                    name: "article_id".to_string(),
                    r#type: ColumnType::BigInt,
                    nullable: false,
                    default: None,
                    primary_key: false,
                    auto_increment: false,
                },
                ColumnDef::created_timestamp("created_at"),
                ColumnDef::created_timestamp("updated_at"),
            ],
            constraints: vec![TableConstraint::ForeignKey {
                name: None,
                columns: vec!["article_id".to_string()],
                ref_table: ARTICLES_TABLE.to_string(),
                ref_columns: vec!["id".to_string()],
                on_delete: Some(ReferenceAction::Cascade),
                on_update: Some(ReferenceAction::Cascade),
            }],
        }],
        down: vec![MigrationAction::DropTable {
            table: COMMENTS_TABLE.to_string(),
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_is_ordered_articles_before_comments() {
        let names: Vec<String> = all().into_iter().map(|m| m.name).collect();
        assert_eq!(
            names,
            vec![
                "20210223093930_CreateArticles".to_string(),
                "20210224111810_CreateComments".to_string(),
            ]
        );
    }

    #[test]
    fn comments_cascade_on_article_delete_and_update() {
        let migration = create_comments();
        let MigrationAction::CreateTable { constraints, .. } = &migration.up[0] else {
            panic!("expected CreateTable");
        };
        let TableConstraint::ForeignKey {
            ref_table,
            on_delete,
            on_update,
            ..
        } = &constraints[0];
        assert_eq!(ref_table, ARTICLES_TABLE);
        assert_eq!(on_delete, &Some(ReferenceAction::Cascade));
        assert_eq!(on_update, &Some(ReferenceAction::Cascade));
    }

    #[test]
    fn every_migration_is_reversible() {
        for migration in all() {
            assert!(!migration.up.is_empty(), "{} has no up actions", migration.name);
            assert!(!migration.down.is_empty(), "{} has no down actions", migration.name);
        }
    }
}
