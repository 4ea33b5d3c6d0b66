use std::convert::Infallible;
use std::sync::Arc;

use axum::extract::Request;
use axum::middleware;
use axum::response::Response;
use axum::routing::{get, post};
use axum::Router;
use gazette_db::ArticleStore;
use tera::Tera;
use tower::{Layer, Service};
use tower_http::trace::TraceLayer;

use crate::handlers::{articles, pages};
use crate::method_override;
use crate::templates;

#[derive(Clone)]
pub struct AppState {
    pub store: ArticleStore,
    pub templates: Arc<Tera>,
}

impl AppState {
    pub fn new(store: ArticleStore) -> Result<Self, tera::Error> {
        Ok(Self {
            store,
            templates: Arc::new(templates::build()?),
        })
    }
}

/// The full route table.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::welcome))
        .route("/hello_world", get(pages::hello_world))
        .route("/contact_us", get(pages::contact_us))
        .route("/thank_you", get(pages::thank_you))
        .route("/survey", get(pages::survey))
        .route("/sign_in", post(pages::sign_in))
        .route("/sign_out", post(pages::sign_out))
        .route("/articles", get(articles::index).post(articles::create))
        .route("/articles/new", get(articles::new_form))
        .route(
            "/articles/{id}",
            get(articles::show)
                .patch(articles::update)
                .delete(articles::destroy),
        )
        .route("/articles/{id}/edit", get(articles::edit_form))
        .route("/articles/{id}/comments", post(articles::create_comment))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// The serveable stack: the router wrapped with the method-override
/// middleware. The override must sit outside the router, not on it;
/// layers on a `Router` run after the verb has already been matched,
/// so a `_method` rewrite applied there comes too late.
pub fn service(
    state: AppState,
) -> impl Service<Request, Response = Response, Error = Infallible, Future: Send>
+ Clone
+ Send
+ 'static {
    middleware::from_fn(method_override::override_method).layer(router(state))
}
