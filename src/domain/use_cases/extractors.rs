use actix_web::{
    cookie::{time::Duration, Cookie, SameSite},
    FromRequest, HttpRequest,
};
use futures_util::future::{ready, Ready};

use crate::entities::theme::{Theme, THEME_COOKIE};

/// Theme persisted in the visitor's cookie. Missing or unreadable values
/// fall back to the light theme.
/// Usage: Add `theme: ThemePreference` as a parameter to your handler function.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemePreference(pub Theme);

impl FromRequest for ThemePreference {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let theme = req
            .cookie(THEME_COOKIE)
            .and_then(|cookie| cookie.value().parse::<Theme>().ok())
            .unwrap_or_default();
        ready(Ok(ThemePreference(theme)))
    }
}

/// Cookie that remembers `theme` for one year.
pub fn theme_cookie(theme: Theme) -> Cookie<'static> {
    Cookie::build(THEME_COOKIE, theme.as_str())
        .path("/")
        .max_age(Duration::days(365))
        .same_site(SameSite::Lax)
        .http_only(false)
        .finish()
}
