//! Welcome pages and the username cookie.

use actix_web::cookie::{Cookie, time::Duration};
use actix_web::http::StatusCode;
use actix_web::http::header::{self, HeaderValue};
use actix_web::{HttpRequest, HttpResponse, web};

use photoboard_shared::dto::{ContactQuery, SignInForm};

use super::{html, redirect};
use crate::views;

/// Cookie holding the display name used for new posts.
pub const USERNAME_COOKIE: &str = "username";

/// Cookie remembering the last `things` list from the contact form.
pub const THINGS_COOKIE: &str = "things";

const USERNAME_MAX_AGE: Duration = Duration::days(7);

/// Display name from the `username` cookie, taken as-is.
pub fn username(req: &HttpRequest) -> Option<String> {
    req.cookie(USERNAME_COOKIE).map(|c| c.value().to_string())
}

/// Append a `Set-Cookie` header with the name and value percent-encoded.
///
/// Request cookies are decoded on read, so any text survives the round trip.
fn set_cookie(response: &mut HttpResponse, cookie: &Cookie<'_>) {
    match HeaderValue::from_str(&cookie.encoded().to_string()) {
        Ok(value) => {
            response.headers_mut().append(header::SET_COOKIE, value);
        }
        Err(e) => tracing::warn!(cookie = cookie.name(), "Failed to set cookie: {}", e),
    }
}

fn clear_username(response: &mut HttpResponse) {
    let mut cookie = Cookie::build(USERNAME_COOKIE, "").path("/").finish();
    cookie.make_removal();
    set_cookie(response, &cookie);
}

/// GET /hello_world
pub async fn hello_world() -> &'static str {
    "Hello, World!"
}

/// GET /home
pub async fn home() -> &'static str {
    "Welcome at CodeCore!"
}

/// GET /
pub async fn index(req: HttpRequest) -> HttpResponse {
    html(StatusCode::OK, views::welcome(username(&req).as_deref()))
}

/// GET /contact_us
pub async fn contact_us(req: HttpRequest, query: web::Query<ContactQuery>) -> HttpResponse {
    let query = query.into_inner();
    tracing::debug!(?query, "Contact form");

    let submitted = query.things_list();
    let things = submitted.clone().unwrap_or_else(|| {
        req.cookie(THINGS_COOKIE)
            .and_then(|c| serde_json::from_str::<Vec<String>>(c.value()).ok())
            .unwrap_or_default()
    });

    let page = views::contact_us(
        query.full_name.as_deref(),
        query.message.as_deref(),
        &things,
    );
    let mut response = html(StatusCode::OK, page);

    if let Some(list) = submitted {
        match serde_json::to_string(&list) {
            Ok(value) => {
                let cookie = Cookie::build(THINGS_COOKIE, value).path("/").finish();
                set_cookie(&mut response, &cookie);
            }
            Err(e) => tracing::warn!("Failed to encode things cookie: {}", e),
        }
    }

    response
}

/// POST /sign_in
///
/// A missing `username` field signs the visitor out instead.
pub async fn sign_in(form: web::Form<SignInForm>) -> HttpResponse {
    let mut response = redirect("/");

    match form.into_inner().username {
        Some(name) => {
            tracing::info!(username = %name, "Signed in");
            let cookie = Cookie::build(USERNAME_COOKIE, name)
                .path("/")
                .max_age(USERNAME_MAX_AGE)
                .finish();
            set_cookie(&mut response, &cookie);
        }
        None => clear_username(&mut response),
    }

    response
}

/// POST /sign_out
pub async fn sign_out() -> HttpResponse {
    let mut response = redirect("/");
    clear_username(&mut response);
    response
}
