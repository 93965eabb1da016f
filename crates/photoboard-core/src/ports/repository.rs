use async_trait::async_trait;

use crate::domain::{NewPost, Post};
use crate::error::RepoError;

/// Row-store for posts.
///
/// Each method maps to exactly one store call.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Append a row. The store assigns `id` and `created_at`.
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError>;

    /// All posts, most recent `created_at` first. Ties fall back to the
    /// highest id first.
    async fn list_recent_first(&self) -> Result<Vec<Post>, RepoError>;

    /// At most one post with the given id.
    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, RepoError>;
}
