use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Shown in place of a missing thumbnail, both as the column default and as
/// the insert-time fallback.
pub const PLACEHOLDER_THUMBNAIL_URL: &str = "https://via.placeholder.com/150";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Course {
    pub id: i64,
    pub title: String,
    #[sqlx(rename = "videoUrl")]
    #[serde(rename = "videoUrl")]
    pub video_url: String,
    #[sqlx(rename = "thumbnailUrl")]
    #[serde(rename = "thumbnailUrl")]
    pub thumbnail_url: Option<String>,
    pub path: String,
    pub description: Option<String>,
}

/// A row waiting to be inserted. `title` is the dedup key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewCourse<'a> {
    pub title: &'a str,
    pub video_url: &'a str,
    pub thumbnail_url: Option<&'a str>,
    pub path: &'a str,
    pub description: Option<&'a str>,
}
