//! Posts handlers - new, create, index and show.

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, web};

use photoboard_core::ShowOutcome;
use photoboard_core::domain::{NewPost, Post};
use photoboard_shared::ApiResponse;
use photoboard_shared::dto::{CreatePostForm, PostResponse};

use super::welcome::username;
use super::{html, redirect};
use crate::middleware::error::AppResult;
use crate::state::AppState;
use crate::views;

/// Map the submitted form and the cookie display name into a new post row.
pub fn new_post_from_form(form: CreatePostForm, username: Option<String>) -> NewPost {
    NewPost::new(username, form.description, form.picture_url)
}

fn to_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        username: post.username,
        description: post.description,
        picture_url: post.picture_url,
        created_at: post.created_at.to_rfc3339(),
    }
}

/// GET /posts/new
pub async fn new() -> HttpResponse {
    html(StatusCode::OK, views::new_post())
}

/// POST /posts
///
/// A missing or unreadable body counts as an empty form.
pub async fn create(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: Option<web::Form<CreatePostForm>>,
) -> AppResult<HttpResponse> {
    let form = form.map(web::Form::into_inner).unwrap_or_default();
    let new_post = new_post_from_form(form, username(&req));
    state.posts.create(new_post).await?;

    Ok(redirect("/posts"))
}

/// GET /posts
pub async fn index(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;
    Ok(html(StatusCode::OK, views::posts_index(&posts)))
}

/// GET /api/posts
pub async fn index_json(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts: Vec<PostResponse> = state
        .posts
        .list()
        .await?
        .into_iter()
        .map(to_response)
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::ok(posts)))
}

/// GET /posts/{id}
///
/// A malformed id redirects home without touching the store.
pub async fn show(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let response = match state.posts.show(&path.into_inner()).await? {
        ShowOutcome::Found(post) => html(StatusCode::OK, views::post_show(&post)),
        ShowOutcome::NotFound(id) => html(StatusCode::NOT_FOUND, views::post_not_found(id)),
        ShowOutcome::Malformed => redirect("/"),
    };

    Ok(response)
}
