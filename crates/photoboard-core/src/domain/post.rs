use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post entity - one picture submitted to the board.
///
/// `id` and `created_at` are always assigned by the row-store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i32,
    pub username: Option<String>,
    pub description: Option<String>,
    pub picture_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Fields a client may supply when creating a post.
///
/// Carries no id or timestamp: both belong to the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    pub username: Option<String>,
    pub description: Option<String>,
    pub picture_url: Option<String>,
}

impl NewPost {
    pub fn new(
        username: Option<String>,
        description: Option<String>,
        picture_url: Option<String>,
    ) -> Self {
        Self {
            username,
            description,
            picture_url,
        }
    }
}

/// Parse a post id taken from a request path.
///
/// The whole token must be a base-10 `i32`; surrounding whitespace is ignored.
pub fn parse_post_id(token: &str) -> Option<i32> {
    token.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_ids() {
        assert_eq!(parse_post_id("42"), Some(42));
        assert_eq!(parse_post_id(" 7 "), Some(7));
        assert_eq!(parse_post_id("-3"), Some(-3));
    }

    #[test]
    fn rejects_malformed_ids() {
        assert_eq!(parse_post_id("abc"), None);
        assert_eq!(parse_post_id(""), None);
        assert_eq!(parse_post_id("4.2"), None);
        assert_eq!(parse_post_id("12abc"), None);
        assert_eq!(parse_post_id("99999999999"), None);
    }
}
