//! Posts resource handler - list, show and create over a [`PostRepository`].

use std::sync::Arc;

use crate::domain::{NewPost, Post, parse_post_id};
use crate::error::DomainError;
use crate::ports::PostRepository;

/// Result of looking up a single post from a path token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShowOutcome {
    Found(Post),
    /// The token was a valid id but no row matched.
    NotFound(i32),
    /// The token was not a base-10 integer. The store was not queried.
    Malformed,
}

/// Post operations. Holds no state besides the injected store.
#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    /// All posts, newest first. An empty board is not an error.
    pub async fn list(&self) -> Result<Vec<Post>, DomainError> {
        let posts = self.repo.list_recent_first().await?;
        tracing::debug!(count = posts.len(), "Listed posts");
        Ok(posts)
    }

    /// Look up a post by the raw path token.
    pub async fn show(&self, token: &str) -> Result<ShowOutcome, DomainError> {
        let Some(id) = parse_post_id(token) else {
            tracing::debug!(token, "Malformed post id");
            return Ok(ShowOutcome::Malformed);
        };

        match self.repo.find_by_id(id).await? {
            Some(post) => Ok(ShowOutcome::Found(post)),
            None => {
                tracing::debug!(post_id = id, "Post not found");
                Ok(ShowOutcome::NotFound(id))
            }
        }
    }

    /// Persist a new post. No field is required.
    pub async fn create(&self, post: NewPost) -> Result<Post, DomainError> {
        let created = self.repo.insert(post).await?;
        tracing::info!(post_id = created.id, username = ?created.username, "Post created");
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use chrono::{Duration, Utc};

    use crate::error::RepoError;

    /// Vec-backed store that counts every call made against it.
    #[derive(Default)]
    struct RecordingRepository {
        rows: Mutex<Vec<Post>>,
        calls: AtomicUsize,
        fail: bool,
    }

    impl RecordingRepository {
        fn failing() -> Self {
            Self {
                fail: true,
                ..Default::default()
            }
        }

        fn with_rows(rows: Vec<Post>) -> Self {
            Self {
                rows: Mutex::new(rows),
                ..Default::default()
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn check(&self) -> Result<(), RepoError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(RepoError::Connection("store offline".to_string()));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl PostRepository for RecordingRepository {
        async fn insert(&self, post: NewPost) -> Result<Post, RepoError> {
            self.check()?;
            let mut rows = self.rows.lock().unwrap();
            let id = rows.iter().map(|p| p.id).max().unwrap_or(0) + 1;
            let row = Post {
                id,
                username: post.username,
                description: post.description,
                picture_url: post.picture_url,
                created_at: Utc::now(),
            };
            rows.push(row.clone());
            Ok(row)
        }

        async fn list_recent_first(&self) -> Result<Vec<Post>, RepoError> {
            self.check()?;
            let mut rows = self.rows.lock().unwrap().clone();
            rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
            Ok(rows)
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<Post>, RepoError> {
            self.check()?;
            Ok(self.rows.lock().unwrap().iter().find(|p| p.id == id).cloned())
        }
    }

    fn post_at(id: i32, minutes_ago: i64) -> Post {
        Post {
            id,
            username: None,
            description: Some(format!("post {id}")),
            picture_url: None,
            created_at: Utc::now() - Duration::minutes(minutes_ago),
        }
    }

    #[tokio::test]
    async fn test_list_empty_board() {
        let service = PostService::new(Arc::new(RecordingRepository::default()));
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let repo = RecordingRepository::with_rows(vec![
            post_at(1, 30),
            post_at(2, 10),
            post_at(3, 20),
        ]);
        let service = PostService::new(Arc::new(repo));

        let ids: Vec<i32> = service.list().await.unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let repo = Arc::new(RecordingRepository::with_rows(vec![post_at(5, 60)]));
        let service = PostService::new(repo.clone());
        let started = Utc::now();

        let created = service
            .create(NewPost::new(
                Some("alice".to_string()),
                Some("cat".to_string()),
                Some("http://x/cat.png".to_string()),
            ))
            .await
            .unwrap();
        assert!(created.id > 5);

        let first = service.list().await.unwrap().remove(0);
        assert_eq!(first, created);
        assert_eq!(first.description.as_deref(), Some("cat"));
        assert_eq!(first.picture_url.as_deref(), Some("http://x/cat.png"));
        assert_eq!(first.username.as_deref(), Some("alice"));
        assert!(first.created_at >= started);
    }

    #[tokio::test]
    async fn test_create_with_no_fields() {
        let service = PostService::new(Arc::new(RecordingRepository::default()));
        let created = service.create(NewPost::default()).await.unwrap();

        assert_eq!(created.id, 1);
        assert_eq!(created.username, None);
        assert_eq!(service.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_show_malformed_skips_store() {
        let repo = Arc::new(RecordingRepository::default());
        let service = PostService::new(repo.clone());

        assert_eq!(service.show("abc").await.unwrap(), ShowOutcome::Malformed);
        assert_eq!(repo.calls(), 0);
    }

    #[tokio::test]
    async fn test_show_missing_is_not_an_error() {
        let repo = Arc::new(RecordingRepository::default());
        let service = PostService::new(repo.clone());

        assert_eq!(service.show("42").await.unwrap(), ShowOutcome::NotFound(42));
        assert_eq!(repo.calls(), 1);
    }

    #[tokio::test]
    async fn test_show_found() {
        let post = post_at(9, 1);
        let service = PostService::new(Arc::new(RecordingRepository::with_rows(vec![post.clone()])));

        assert_eq!(service.show("9").await.unwrap(), ShowOutcome::Found(post));
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let service = PostService::new(Arc::new(RecordingRepository::failing()));

        assert!(matches!(
            service.list().await,
            Err(DomainError::Repository(RepoError::Connection(_)))
        ));
        assert!(service.create(NewPost::default()).await.is_err());
        assert!(service.show("1").await.is_err());
    }
}
