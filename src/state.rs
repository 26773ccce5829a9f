use std::sync::Arc;

use axum::extract::FromRef;

use crate::config::Config;
use crate::storage::ArticleStore;
use crate::utils::html::HtmlSanitizer;
use crate::utils::template::TemplateSource;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub store: ArticleStore,
    pub sanitizer: Arc<HtmlSanitizer>,
    pub template: TemplateSource,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            store: ArticleStore::new(config.articles_dir.clone()),
            sanitizer: Arc::new(HtmlSanitizer::new()),
            template: TemplateSource::from_path(config.template_path.clone()),
            config,
        }
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

impl FromRef<AppState> for ArticleStore {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}

impl FromRef<AppState> for Arc<HtmlSanitizer> {
    fn from_ref(state: &AppState) -> Self {
        state.sanitizer.clone()
    }
}

impl FromRef<AppState> for TemplateSource {
    fn from_ref(state: &AppState) -> Self {
        state.template.clone()
    }
}
