//! Cookie-based identity. The username is stored as-is in a plain cookie;
//! there is no account record and no credential check.

use axum_extra::extract::cookie::{Cookie, CookieJar};
use time::Duration;

pub const USERNAME_COOKIE: &str = "username";

const COOKIE_MAX_AGE: Duration = Duration::days(30);

pub fn current_username(jar: &CookieJar) -> Option<String> {
    jar.get(USERNAME_COOKIE)
        .map(|cookie| cookie.value().to_string())
}

pub fn sign_in(jar: CookieJar, username: String) -> CookieJar {
    let cookie = Cookie::build((USERNAME_COOKIE, username))
        .path("/")
        .max_age(COOKIE_MAX_AGE)
        .build();
    jar.add(cookie)
}

pub fn sign_out(jar: CookieJar) -> CookieJar {
    jar.remove(Cookie::build((USERNAME_COOKIE, "")).path("/").build())
}
