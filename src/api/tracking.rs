use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use cookie::time::Duration;
use uuid::Uuid;

pub const USER_COOKIE: &str = "display_user_id";

/// One year.
pub const USER_COOKIE_MAX_AGE_SECS: i64 = 365 * 24 * 60 * 60;

/// 128-bit random id as 32 lowercase hex characters.
pub fn new_tracking_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// 只在請求沒有帶 cookie（或值為空）時發一個新的
pub fn ensure_tracking_cookie(jar: CookieJar) -> CookieJar {
    let present = jar
        .get(USER_COOKIE)
        .map(|c| !c.value().is_empty())
        .unwrap_or(false);
    if present {
        return jar;
    }

    let id = new_tracking_id();
    tracing::debug!("Issuing tracking cookie {}", id);

    let cookie = Cookie::build((USER_COOKIE, id))
        .max_age(Duration::seconds(USER_COOKIE_MAX_AGE_SECS))
        .same_site(SameSite::None)
        .secure(true)
        .http_only(true)
        .build();
    jar.add(cookie)
}
