//! Templates are compiled into the binary so a deployed server has no
//! on-disk template directory to go missing.

use axum::response::Html;
use axum_extra::extract::cookie::CookieJar;
use tera::{Context, Tera};

use crate::app::AppState;
use crate::error::AppError;
use crate::identity;

pub fn build() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_templates([
        ("layout.html", include_str!("../templates/layout.html")),
        ("welcome.html", include_str!("../templates/welcome.html")),
        ("contact.html", include_str!("../templates/contact.html")),
        ("thank_you.html", include_str!("../templates/thank_you.html")),
        ("survey.html", include_str!("../templates/survey.html")),
        (
            "articles/index.html",
            include_str!("../templates/articles/index.html"),
        ),
        (
            "articles/new.html",
            include_str!("../templates/articles/new.html"),
        ),
        (
            "articles/show.html",
            include_str!("../templates/articles/show.html"),
        ),
        (
            "articles/edit.html",
            include_str!("../templates/articles/edit.html"),
        ),
    ])?;
    Ok(tera)
}

/// Render a page with the signed-in username available to the layout.
pub fn render(
    state: &AppState,
    jar: &CookieJar,
    name: &str,
    mut ctx: Context,
) -> Result<Html<String>, AppError> {
    ctx.insert("username", &identity::current_username(jar));
    Ok(Html(state.templates.render(name, &ctx)?))
}
