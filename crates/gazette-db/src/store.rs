use gazette_core::{Article, ArticleChanges, Comment, NewArticle, NewComment};
use sea_orm::{ConnectionTrait, DatabaseConnection, QueryResult};
use sea_query::{Expr, Iden, Order, Query};

use crate::error::StoreError;

#[derive(Iden)]
enum Articles {
    Table,
    Id,
    Title,
    Username,
    Content,
    ViewCount,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Comments {
    Table,
    Id,
    Content,
    ArticleId,
    CreatedAt,
    UpdatedAt,
}

/// CRUD access to articles and their comments.
///
/// Missing rows are sentinel outcomes (`None`, or a silently successful
/// no-op), never errors; only engine failures surface as [`StoreError`].
#[derive(Debug, Clone)]
pub struct ArticleStore {
    conn: DatabaseConnection,
}

impl ArticleStore {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }

    /// All articles, newest-created first. Ties on `created_at` break by
    /// `id` descending so the order is deterministic within one second.
    pub async fn list_articles(&self) -> Result<Vec<Article>, StoreError> {
        let stmt = Query::select()
            .columns([
                Articles::Id,
                Articles::Title,
                Articles::Username,
                Articles::Content,
                Articles::ViewCount,
                Articles::CreatedAt,
                Articles::UpdatedAt,
            ])
            .from(Articles::Table)
            .order_by(Articles::CreatedAt, Order::Desc)
            .order_by(Articles::Id, Order::Desc)
            .to_owned();

        let backend = self.conn.get_database_backend();
        let rows = self.conn.query_all(backend.build(&stmt)).await?;
        rows.iter().map(article_from_row).collect()
    }

    pub async fn get_article(&self, id: i64) -> Result<Option<Article>, StoreError> {
        let stmt = Query::select()
            .columns([
                Articles::Id,
                Articles::Title,
                Articles::Username,
                Articles::Content,
                Articles::ViewCount,
                Articles::CreatedAt,
                Articles::UpdatedAt,
            ])
            .from(Articles::Table)
            .and_where(Expr::col(Articles::Id).eq(id))
            .to_owned();

        let backend = self.conn.get_database_backend();
        let row = self.conn.query_one(backend.build(&stmt)).await?;
        row.as_ref().map(article_from_row).transpose()
    }

    /// Insert an article; identifier and timestamps are engine-assigned.
    pub async fn create_article(&self, new: NewArticle) -> Result<(), StoreError> {
        let mut stmt = Query::insert()
            .into_table(Articles::Table)
            .columns([
                Articles::Title,
                Articles::Content,
                Articles::Username,
                Articles::ViewCount,
            ])
            .to_owned();
        stmt.values([
            new.title.into(),
            new.content.into(),
            new.username.into(),
            new.view_count.into(),
        ])?;

        let backend = self.conn.get_database_backend();
        self.conn.execute(backend.build(&stmt)).await?;
        Ok(())
    }

    /// Update title and content only. Reports success even when no row
    /// matches `id`; callers that care must check existence themselves.
    pub async fn update_article(
        &self,
        id: i64,
        changes: ArticleChanges,
    ) -> Result<(), StoreError> {
        let stmt = Query::update()
            .table(Articles::Table)
            .value(Articles::Title, changes.title)
            .value(Articles::Content, changes.content)
            .and_where(Expr::col(Articles::Id).eq(id))
            .to_owned();

        let backend = self.conn.get_database_backend();
        self.conn.execute(backend.build(&stmt)).await?;
        Ok(())
    }

    /// Delete an article. Its comments go with it through the storage-level
    /// cascade; a missing `id` is a silent no-op.
    pub async fn delete_article(&self, id: i64) -> Result<(), StoreError> {
        let stmt = Query::delete()
            .from_table(Articles::Table)
            .and_where(Expr::col(Articles::Id).eq(id))
            .to_owned();

        let backend = self.conn.get_database_backend();
        self.conn.execute(backend.build(&stmt)).await?;
        Ok(())
    }

    /// Comments under one article, oldest first (`id` ascending).
    pub async fn comments_for_article(&self, article_id: i64) -> Result<Vec<Comment>, StoreError> {
        let stmt = Query::select()
            .columns([
                Comments::Id,
                Comments::Content,
                Comments::ArticleId,
                Comments::CreatedAt,
                Comments::UpdatedAt,
            ])
            .from(Comments::Table)
            .and_where(Expr::col(Comments::ArticleId).eq(article_id))
            .order_by(Comments::Id, Order::Asc)
            .to_owned();

        let backend = self.conn.get_database_backend();
        let rows = self.conn.query_all(backend.build(&stmt)).await?;
        rows.iter().map(comment_from_row).collect()
    }

    /// Insert a comment without checking that the article exists; the
    /// foreign key rejects orphaned inserts.
    pub async fn create_comment(&self, new: NewComment) -> Result<(), StoreError> {
        let mut stmt = Query::insert()
            .into_table(Comments::Table)
            .columns([Comments::Content, Comments::ArticleId])
            .to_owned();
        stmt.values([new.content.into(), new.article_id.into()])?;

        let backend = self.conn.get_database_backend();
        self.conn.execute(backend.build(&stmt)).await?;
        Ok(())
    }
}

fn article_from_row(row: &QueryResult) -> Result<Article, StoreError> {
    Ok(Article {
        id: row.try_get("", "id")?,
        title: row.try_get("", "title")?,
        username: row.try_get("", "username")?,
        content: row.try_get("", "content")?,
        view_count: row.try_get("", "view_count")?,
        created_at: row.try_get("", "created_at")?,
        updated_at: row.try_get("", "updated_at")?,
    })
}

fn comment_from_row(row: &QueryResult) -> Result<Comment, StoreError> {
    Ok(Comment {
        id: row.try_get("", "id")?,
        content: row.try_get("", "content")?,
        article_id: row.try_get("", "article_id")?,
        created_at: row.try_get("", "created_at")?,
        updated_at: row.try_get("", "updated_at")?,
    })
}
