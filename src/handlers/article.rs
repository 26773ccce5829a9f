// src/handlers/article.rs

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};
use validator::Validate;

use crate::{
    config::Config,
    error::AppError,
    models::article::{SaveArticleRequest, SaveArticleResponse},
    storage::ArticleStore,
    utils::{
        html::{HtmlSanitizer, article_title},
        template::{TemplateSource, render_document},
    },
};

/// Sanitize submitted HTML, embed it in the document template and write it
/// to the articles directory under a fresh filename.
///
/// Every failure is terminal for the request; nothing is retried except the
/// exclusive file creation inside the store.
pub async fn save_article(
    State(config): State<Config>,
    State(store): State<ArticleStore>,
    State(sanitizer): State<Arc<HtmlSanitizer>>,
    State(template): State<TemplateSource>,
    payload: Result<Json<SaveArticleRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    // 1. Parse and validate
    let Json(payload) = payload?;
    payload.validate()?;
    let name = payload.article_name.as_deref();

    // 2. Strip scripts and other disallowed markup
    let content = sanitizer.clean(&payload.html_content);

    // 3. Make sure the output directory exists
    store.ensure_dir().await?;

    // 4. Assemble the standalone document
    let template = template.load().await?;
    let document = render_document(&template, &article_title(name), &content);

    // 5. Derive the filename and write
    let saved = store
        .persist(name, config.lowercase_filenames, &document)
        .await?;

    tracing::info!("Article saved: {}", saved.file_path.display());

    Ok(Json(SaveArticleResponse::from(saved)))
}
