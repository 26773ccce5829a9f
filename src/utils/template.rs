// src/utils/template.rs

use std::borrow::Cow;
use std::path::PathBuf;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::error::AppError;

/// Standalone page every saved article is embedded into.
pub const BUILTIN_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{title}}</title>
    <link href="https://cdn.jsdelivr.net/npm/quill@2.0.2/dist/quill.snow.css" rel="stylesheet">
    <link href="https://cdn.jsdelivr.net/npm/highlight.js@11.9.0/styles/atom-one-dark.min.css" rel="stylesheet">
    <link href="https://fonts.googleapis.com/css2?family=Montserrat:ital,wght@0,100..900;1,100..900&family=Lato:ital,wght@0,100;0,300;0,400;0,700;0,900;1,100;1,300;1,400;1,700;1,900&display=swap" rel="stylesheet">
    <style>
        body {
            font-family: 'Montserrat', sans-serif;
            padding: 2rem;
            background-color: #f0f2f5;
        }
        .article-content {
            max-width: 800px;
            margin: auto;
            padding: 2rem;
            background-color: #fff;
            border-radius: 8px;
            box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
        }
    </style>
</head>
<body>
    <div class="article-content">
        {{content}}
    </div>
</body>
</html>
"#;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*(title|content)\s*\}\}").expect("static regex"));

/// Where the document template comes from.
#[derive(Debug, Clone)]
pub enum TemplateSource {
    Builtin,
    /// Re-read on every save so edits apply without a restart.
    File(PathBuf),
}

impl TemplateSource {
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map_or(TemplateSource::Builtin, TemplateSource::File)
    }

    pub async fn load(&self) -> Result<Cow<'static, str>, AppError> {
        match self {
            TemplateSource::Builtin => Ok(Cow::Borrowed(BUILTIN_TEMPLATE)),
            TemplateSource::File(path) => tokio::fs::read_to_string(path)
                .await
                .map(Cow::Owned)
                .map_err(|e| AppError::TemplateUnavailable(format!("{}: {}", path.display(), e))),
        }
    }
}

/// Substitutes `{{title}}` and `{{content}}` in a single pass.
///
/// Inserted values are not scanned again, so placeholder text inside the
/// content stays literal. `title` must already be escaped.
pub fn render_document(template: &str, title: &str, content: &str) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| match &caps[1] {
            "title" => title.to_string(),
            _ => content.to_string(),
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_embeds_title_and_content() {
        let doc = render_document(BUILTIN_TEMPLATE, "Hello", "<p>Body</p>");
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<title>Hello</title>"));
        assert!(doc.contains("<div class=\"article-content\">\n        <p>Body</p>\n    </div>"));
        assert!(!doc.contains("{{"));
    }

    #[test]
    fn placeholders_tolerate_inner_whitespace() {
        let doc = render_document("<h1>{{ title }}</h1>{{content  }}", "T", "C");
        assert_eq!(doc, "<h1>T</h1>C");
    }

    #[test]
    fn substituted_values_are_not_expanded() {
        let doc = render_document("{{title}}|{{content}}", "{{content}}", "{{title}}");
        assert_eq!(doc, "{{content}}|{{title}}");
    }

    #[test]
    fn unknown_placeholders_are_left_alone() {
        let doc = render_document("{{author}} {{content}}", "T", "C");
        assert_eq!(doc, "{{author}} C");
    }

    #[tokio::test]
    async fn file_source_reads_template() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("template.html");
        std::fs::write(&path, "<b>{{title}}</b>").unwrap();

        let template = TemplateSource::File(path).load().await.unwrap();
        assert_eq!(template, "<b>{{title}}</b>");
    }

    #[tokio::test]
    async fn missing_file_is_template_unavailable() {
        let dir = tempfile::TempDir::new().unwrap();
        let source = TemplateSource::from_path(Some(dir.path().join("nope.html")));

        let err = source.load().await.unwrap_err();
        assert!(matches!(err, AppError::TemplateUnavailable(_)));
    }
}
