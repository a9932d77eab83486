use axum::http::header;
use axum::http::HeaderMap;
use cookie::time::Duration;
use cookie::Cookie;
use cookie::SameSite;

use crate::domain::session::models::SessionToken;

pub const SESSION_COOKIE: &str = "token";

/// `Set-Cookie` value delivering a session token.
pub fn session_cookie(token: &SessionToken, max_age: chrono::Duration) -> String {
    Cookie::build((SESSION_COOKIE, token.as_str()))
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Strict)
        .path("/")
        .max_age(Duration::seconds(max_age.num_seconds()))
        .build()
        .to_string()
}

pub fn session_from_cookie(headers: &HeaderMap) -> Option<String> {
    let cookie_header = headers.get(header::COOKIE)?.to_str().ok()?;

    cookie_header
        .split(';')
        .filter_map(|cookie_str| Cookie::parse(cookie_str.trim()).ok())
        .find(|cookie| cookie.name() == SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
}
