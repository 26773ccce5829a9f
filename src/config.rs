// src/config.rs

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use dotenvy::dotenv;
use thiserror::Error;

/// Raised when an environment variable is present but cannot be parsed.
#[derive(Debug, Error)]
#[error("invalid value {value:?} for {key}")]
pub struct ConfigError {
    pub key: &'static str,
    pub value: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    /// Directory that receives saved articles and backs `/articles`.
    pub articles_dir: PathBuf,
    /// Directory holding the editor page (`index.html`) and its assets.
    pub static_dir: PathBuf,
    /// External document template. `None` uses the built-in page.
    pub template_path: Option<PathBuf>,
    pub lowercase_filenames: bool,
    pub max_body_bytes: usize,
    pub log_dir: PathBuf,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();

        let bind_addr = parse_var("BIND_ADDR", SocketAddr::from(([0, 0, 0, 0], 8080)))?;
        let articles_dir = path_var("ARTICLES_DIR", "articles");
        let static_dir = path_var("STATIC_DIR", "static");
        let template_path = env::var("ARTICLE_TEMPLATE")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);
        let lowercase_filenames = bool_var("LOWERCASE_FILENAMES", true)?;
        let max_body_bytes = parse_var("MAX_BODY_BYTES", 2 * 1024 * 1024)?;
        let log_dir = path_var("LOG_DIR", "logs");

        let rust_log = env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            bind_addr,
            articles_dir,
            static_dir,
            template_path,
            lowercase_filenames,
            max_body_bytes,
            log_dir,
            rust_log,
        })
    }
}

fn path_var(key: &str, default: &str) -> PathBuf {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(default))
}

fn parse_var<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(value) => value.trim().parse().map_err(|_| ConfigError { key, value }),
        Err(_) => Ok(default),
    }
}

fn bool_var(key: &'static str, default: bool) -> Result<bool, ConfigError> {
    match env::var(key) {
        Ok(value) => parse_bool(&value).ok_or_else(|| ConfigError { key, value }),
        Err(_) => Ok(default),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
