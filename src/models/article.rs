use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use validator::Validate;

/// DTO for `POST /save-article`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SaveArticleRequest {
    #[validate(length(min = 1, message = "htmlContent must not be empty"))]
    pub html_content: String,

    /// Display name; drives both the filename and the document title.
    /// Any length is accepted; the filename stem is truncated instead.
    pub article_name: Option<String>,
}

/// A persisted article. Immutable once written.
#[derive(Debug, Clone)]
pub struct SavedArticle {
    pub filename: String,
    pub file_path: PathBuf,
    pub public_url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SaveArticleResponse {
    pub message: String,
    pub filename: String,
    #[serde(rename = "articleURL")]
    pub article_url: String,
}

impl From<SavedArticle> for SaveArticleResponse {
    fn from(saved: SavedArticle) -> Self {
        Self {
            message: "Article published!".to_string(),
            filename: saved.filename,
            article_url: saved.public_url,
        }
    }
}
