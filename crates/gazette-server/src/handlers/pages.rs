//! Static pages, the survey, and the sign-in round trip.

use axum::extract::{Query, State};
use axum::response::{Html, Redirect};
use axum::Form;
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use tera::Context;

use crate::app::AppState;
use crate::error::AppError;
use crate::identity;
use crate::templates::render;

pub const CAT_BREEDS: [&str; 4] = ["Persian", "Garfield", "Sylvester", "Chester"];
pub const CHEESES: [&str; 5] = ["Classic American Cheddar", "Feta", "Gouda", "Blue", "Brie"];

pub async fn hello_world() -> Html<&'static str> {
    Html("<h1>Hello, World!</h1>")
}

pub async fn welcome(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Html<String>, AppError> {
    render(&state, &jar, "welcome.html", Context::new())
}

pub async fn contact_us(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Html<String>, AppError> {
    render(&state, &jar, "contact.html", Context::new())
}

#[derive(Debug, Deserialize)]
pub struct ThankYouQuery {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

/// Echoes the contact form submission back to the sender.
pub async fn thank_you(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(query): Query<ThankYouQuery>,
) -> Result<Html<String>, AppError> {
    let mut ctx = Context::new();
    ctx.insert("name", &query.name);
    ctx.insert("email", &query.email);
    ctx.insert("message", &query.message);
    render(&state, &jar, "thank_you.html", ctx)
}

#[derive(Debug, Deserialize)]
pub struct SurveyQuery {
    pub name: Option<String>,
    pub colour: Option<String>,
    pub cat: Option<String>,
    pub cheese: Option<String>,
}

pub async fn survey(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(query): Query<SurveyQuery>,
) -> Result<Html<String>, AppError> {
    let mut ctx = Context::new();
    ctx.insert("cats", &CAT_BREEDS);
    ctx.insert("cheeses", &CHEESES);
    ctx.insert("name", &query.name);
    ctx.insert("favourite_colour", &query.colour);
    ctx.insert("cat", &query.cat);
    ctx.insert("cheese", &query.cheese);
    render(&state, &jar, "survey.html", ctx)
}

#[derive(Debug, Deserialize)]
pub struct SignInForm {
    #[serde(default)]
    pub username: String,
}

pub async fn sign_in(jar: CookieJar, Form(form): Form<SignInForm>) -> (CookieJar, Redirect) {
    (identity::sign_in(jar, form.username), Redirect::to("/"))
}

pub async fn sign_out(jar: CookieJar) -> (CookieJar, Redirect) {
    (identity::sign_out(jar), Redirect::to("/"))
}
