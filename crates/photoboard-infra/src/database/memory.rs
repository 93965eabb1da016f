//! In-memory post repository - used when no database is configured.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use photoboard_core::domain::{NewPost, Post};
use photoboard_core::error::RepoError;
use photoboard_core::ports::PostRepository;

struct Table {
    rows: Vec<Post>,
    /// `None` once `i32::MAX` has been assigned.
    next_id: Option<i32>,
}

/// Vec-backed post store with an async RwLock.
///
/// Ids start at 1 and are never reused; once `i32::MAX` has been handed out
/// further inserts fail. `created_at` never goes backwards, even if the wall
/// clock does.
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    table: RwLock<Table>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    fn starting_at(next_id: i32) -> Self {
        Self {
            table: RwLock::new(Table {
                rows: Vec::new(),
                next_id: Some(next_id),
            }),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn insert(&self, new_post: NewPost) -> Result<Post, RepoError> {
        let mut table = self.table.write().await;

        let id = table
            .next_id
            .ok_or_else(|| RepoError::Query("post id sequence exhausted".to_string()))?;
        table.next_id = id.checked_add(1);

        let now = Utc::now();
        let created_at = table
            .rows
            .last()
            .map_or(now, |last| last.created_at.max(now));

        let post = Post {
            id,
            username: new_post.username,
            description: new_post.description,
            picture_url: new_post.picture_url,
            created_at,
        };
        table.rows.push(post.clone());

        Ok(post)
    }

    async fn list_recent_first(&self) -> Result<Vec<Post>, RepoError> {
        let table = self.table.read().await;

        let mut posts = table.rows.clone();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(posts)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, RepoError> {
        let table = self.table.read().await;
        Ok(table.rows.iter().find(|p| p.id == id).cloned())
    }
}
