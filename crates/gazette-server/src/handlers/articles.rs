//! Article and comment handlers.
//!
//! Only the pages that render an article (`show`, `edit`) check that it
//! exists, and a missing id still answers 200 with an inline message.
//! The write paths skip the check entirely: updates and deletes of a
//! missing row succeed silently, and an orphaned comment is stopped by
//! the foreign key rather than by the handler.

use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use axum_extra::extract::cookie::CookieJar;
use gazette_core::{ArticleChanges, NewArticle, NewComment, ANONYMOUS_AUTHOR};
use rand::Rng;
use serde::Deserialize;
use tera::Context;

use crate::app::AppState;
use crate::error::AppError;
use crate::identity;
use crate::templates::render;

#[derive(Debug, Deserialize)]
pub struct ArticleForm {
    pub title: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CommentForm {
    pub content: Option<String>,
}

pub async fn index(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Html<String>, AppError> {
    let articles = state.store.list_articles().await?;
    let mut ctx = Context::new();
    ctx.insert("articles", &articles);
    render(&state, &jar, "articles/index.html", ctx)
}

pub async fn new_form(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Html<String>, AppError> {
    render(&state, &jar, "articles/new.html", Context::new())
}

pub async fn show(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    let Some(article) = state.store.get_article(id).await? else {
        return Ok(not_found_page(id).into_response());
    };
    let comments = state.store.comments_for_article(id).await?;
    let mut ctx = Context::new();
    ctx.insert("article", &article);
    ctx.insert("comments", &comments);
    Ok(render(&state, &jar, "articles/show.html", ctx)?.into_response())
}

pub async fn edit_form(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    let Some(article) = state.store.get_article(id).await? else {
        return Ok(not_found_page(id).into_response());
    };
    let mut ctx = Context::new();
    ctx.insert("article", &article);
    Ok(render(&state, &jar, "articles/edit.html", ctx)?.into_response())
}

/// Create an article authored by the cookie username, or "Anonymous"
/// when nobody is signed in. The view count starts at a random value.
pub async fn create(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<ArticleForm>,
) -> Result<Redirect, AppError> {
    let username =
        identity::current_username(&jar).unwrap_or_else(|| ANONYMOUS_AUTHOR.to_string());
    let view_count = rand::thread_rng().gen_range(0..=1000);
    state
        .store
        .create_article(NewArticle {
            title: form.title,
            content: form.content,
            username,
            view_count,
        })
        .await?;
    Ok(Redirect::to("/articles"))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<ArticleForm>,
) -> Result<Redirect, AppError> {
    state
        .store
        .update_article(
            id,
            ArticleChanges {
                title: form.title,
                content: form.content,
            },
        )
        .await?;
    Ok(Redirect::to(&format!("/articles/{id}")))
}

pub async fn destroy(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect, AppError> {
    state.store.delete_article(id).await?;
    tracing::info!(id, "deleted article");
    Ok(Redirect::to("/articles"))
}

pub async fn create_comment(
    State(state): State<AppState>,
    Path(article_id): Path<i64>,
    Form(form): Form<CommentForm>,
) -> Result<Redirect, AppError> {
    state
        .store
        .create_comment(NewComment {
            article_id,
            content: form.content,
        })
        .await?;
    Ok(Redirect::to(&format!("/articles/{article_id}")))
}

fn not_found_page(id: i64) -> Html<String> {
    Html(format!("<h1>Cannot find article with id: {id}</h1>"))
}
