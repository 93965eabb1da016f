//! HTTP handlers and route configuration.

/// Build an initialized test service around the given post store.
#[cfg(test)]
macro_rules! test_app {
    ($repo:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new(
                    crate::state::AppState::with_repository($repo),
                ))
                .configure(crate::handlers::configure_routes),
        )
        .await
    };
    () => {
        test_app!(std::sync::Arc::new(
            photoboard_infra::InMemoryPostRepository::new()
        ))
    };
}

mod health;
mod posts;
mod welcome;

use actix_web::http::header::{self, ContentType};
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, web};

use crate::middleware::error::{AppError, AppResult};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::FormConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .route("/hello_world", web::get().to(welcome::hello_world))
    .route("/home", web::get().to(welcome::home))
    .route("/", web::get().to(welcome::index))
    .route("/contact_us", web::get().to(welcome::contact_us))
    .route("/sign_in", web::post().to(welcome::sign_in))
    .route("/sign_out", web::post().to(welcome::sign_out))
    .service(
        web::scope("/posts")
            // `new` must be registered before the `{id}` catch-all
            .route("/new", web::get().to(posts::new))
            .route("", web::get().to(posts::index))
            .route("", web::post().to(posts::create))
            .route("/{id}", web::get().to(posts::show)),
    )
    .service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .route("/posts", web::get().to(posts::index_json)),
    )
    .default_service(web::to(not_found));
}

async fn not_found(req: actix_web::HttpRequest) -> AppResult<HttpResponse> {
    Err(AppError::NotFound(format!("No route for {}", req.path())))
}

/// `303 See Other` to `location`.
pub(crate) fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// An HTML page with the given status.
pub(crate) fn html(status: StatusCode, page: String) -> HttpResponse {
    HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(page)
}
