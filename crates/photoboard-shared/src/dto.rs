//! Data Transfer Objects - request/response types for the web surface.

use serde::{Deserialize, Serialize};

/// Body of `POST /posts`. Every field may be missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostForm {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "pictureUrl")]
    pub picture_url: Option<String>,
}

/// Body of `POST /sign_in`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignInForm {
    #[serde(default)]
    pub username: Option<String>,
}

/// Query string of `GET /contact_us`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactQuery {
    #[serde(default, rename = "fullName")]
    pub full_name: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    /// Comma separated list, remembered in the `things` cookie.
    #[serde(default)]
    pub things: Option<String>,
}

impl ContactQuery {
    /// Split `things` on commas. `None` when the field is absent or empty.
    pub fn things_list(&self) -> Option<Vec<String>> {
        self.things
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(|s| s.split(',').map(str::to_string).collect())
    }
}

/// JSON view of a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: i32,
    pub username: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "pictureUrl")]
    pub picture_url: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}
