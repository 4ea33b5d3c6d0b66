use gazette_core::{ArticleChanges, NewArticle, NewComment};
use gazette_db::{ArticleStore, migrator};
use sea_orm::{ConnectOptions, Database};

async fn store() -> ArticleStore {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1).sqlx_logging(false);
    let conn = Database::connect(opt).await.unwrap();
    migrator::apply_pending(&conn).await.unwrap();
    ArticleStore::new(conn)
}

fn new_article(title: &str) -> NewArticle {
    NewArticle {
        title: Some(title.to_string()),
        content: Some(format!("{title} body")),
        username: "al".to_string(),
        view_count: 7,
    }
}

#[tokio::test]
async fn list_is_empty_on_fresh_database() {
    let store = store().await;
    assert!(store.list_articles().await.unwrap().is_empty());
}

#[tokio::test]
async fn newest_article_lists_first() {
    let store = store().await;
    store.create_article(new_article("first")).await.unwrap();
    store.create_article(new_article("second")).await.unwrap();
    store.create_article(new_article("third")).await.unwrap();

    let articles = store.list_articles().await.unwrap();
    assert_eq!(articles.len(), 3);
    assert_eq!(articles[0].title.as_deref(), Some("third"));
    assert_eq!(articles[2].title.as_deref(), Some("first"));
}

#[tokio::test]
async fn get_missing_article_is_none_not_error() {
    let store = store().await;
    assert!(store.get_article(999_999).await.unwrap().is_none());
}

#[tokio::test]
async fn create_assigns_id_and_timestamps() {
    let store = store().await;
    store.create_article(new_article("hello")).await.unwrap();

    let articles = store.list_articles().await.unwrap();
    let article = &articles[0];
    assert!(article.id > 0);
    assert_eq!(article.username.as_deref(), Some("al"));
    assert_eq!(article.view_count, Some(7));
    assert_eq!(article.created_at, article.updated_at);
}

#[tokio::test]
async fn missing_form_fields_store_null() {
    let store = store().await;
    store
        .create_article(NewArticle {
            title: None,
            content: None,
            username: "Anonymous".to_string(),
            view_count: 0,
        })
        .await
        .unwrap();

    let article = &store.list_articles().await.unwrap()[0];
    assert!(article.title.is_none());
    assert!(article.content.is_none());
}

#[tokio::test]
async fn update_changes_only_title_and_content() {
    let store = store().await;
    store.create_article(new_article("before")).await.unwrap();
    let original = store.list_articles().await.unwrap().remove(0);

    store
        .update_article(
            original.id,
            ArticleChanges {
                title: Some("after".to_string()),
                content: Some("edited".to_string()),
            },
        )
        .await
        .unwrap();

    let updated = store.get_article(original.id).await.unwrap().unwrap();
    assert_eq!(updated.title.as_deref(), Some("after"));
    assert_eq!(updated.content.as_deref(), Some("edited"));
    assert_eq!(updated.username, original.username);
    assert_eq!(updated.view_count, original.view_count);
    assert_eq!(updated.created_at, original.created_at);
}

#[tokio::test]
async fn update_of_missing_article_reports_success() {
    let store = store().await;
    store
        .update_article(
            999_999,
            ArticleChanges {
                title: Some("ghost".to_string()),
                content: None,
            },
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn delete_cascades_to_comments() {
    let store = store().await;
    store.create_article(new_article("parent")).await.unwrap();
    let article = store.list_articles().await.unwrap().remove(0);

    for text in ["one", "two"] {
        store
            .create_comment(NewComment {
                article_id: article.id,
                content: Some(text.to_string()),
            })
            .await
            .unwrap();
    }
    assert_eq!(
        store.comments_for_article(article.id).await.unwrap().len(),
        2
    );

    store.delete_article(article.id).await.unwrap();

    assert!(store.get_article(article.id).await.unwrap().is_none());
    assert!(
        store
            .comments_for_article(article.id)
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn delete_of_missing_article_reports_success() {
    let store = store().await;
    store.delete_article(999_999).await.unwrap();
}

#[tokio::test]
async fn orphan_comment_is_rejected_by_foreign_key() {
    let store = store().await;
    let result = store
        .create_comment(NewComment {
            article_id: 999_999,
            content: Some("orphan".to_string()),
        })
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn comments_list_in_insertion_order() {
    let store = store().await;
    store.create_article(new_article("parent")).await.unwrap();
    let article = store.list_articles().await.unwrap().remove(0);

    for text in ["first", "second", "third"] {
        store
            .create_comment(NewComment {
                article_id: article.id,
                content: Some(text.to_string()),
            })
            .await
            .unwrap();
    }

    let comments = store.comments_for_article(article.id).await.unwrap();
    let texts: Vec<_> = comments
        .iter()
        .map(|c| c.content.as_deref().unwrap())
        .collect();
    assert_eq!(texts, vec!["first", "second", "third"]);
    assert!(comments.iter().all(|c| c.article_id == article.id));
}
