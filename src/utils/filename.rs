// src/utils/filename.rs

use std::sync::LazyLock;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;
use regex::Regex;

/// Stem used when no usable display name was supplied.
pub const FALLBACK_BASE: &str = "article";

/// Upper bound for the sanitized stem, leaving room for the stamp and
/// extension under the common 255-byte filename limit.
pub const MAX_BASE_LEN: usize = 200;

static DISALLOWED_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9\s]+").expect("static regex"));
static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("static regex"));

static LAST_STAMP: AtomicI64 = AtomicI64::new(0);

/// Turns a user-supplied display name into a path-segment-safe stem.
///
/// Each run of characters other than ASCII letters, digits and whitespace
/// becomes a hyphen, then each whitespace run becomes a hyphen, and
/// leading/trailing hyphens are removed. The two passes are independent,
/// so `"Rust & Go"` keeps three hyphens. The output is pure ASCII.
/// May return an empty string (e.g. for `"!!!"`).
pub fn sanitize_base_name(name: &str, lowercase: bool) -> String {
    let replaced = DISALLOWED_RUN.replace_all(name, "-");
    let hyphenated = WHITESPACE_RUN.replace_all(&replaced, "-");
    let mut base = hyphenated.trim_matches('-').to_string();

    if base.len() > MAX_BASE_LEN {
        base.truncate(MAX_BASE_LEN);
        base.truncate(base.trim_end_matches('-').len());
    }

    if lowercase {
        base.make_ascii_lowercase();
    }
    base
}

/// Builds `<base>-<stamp>.html`, falling back to `article-<stamp>.html`
/// when the name is absent or sanitizes to nothing.
pub fn derive_filename(display_name: Option<&str>, lowercase: bool, stamp: i64) -> String {
    let base = display_name
        .map(|name| sanitize_base_name(name, lowercase))
        .filter(|base| !base.is_empty())
        .unwrap_or_else(|| FALLBACK_BASE.to_string());

    format!("{base}-{stamp}.html")
}

/// Current Unix time in nanoseconds, strictly increasing within the process.
///
/// Two calls never return the same value even when the clock has not
/// advanced between them (or went backwards).
pub fn next_stamp() -> i64 {
    let now = Utc::now().timestamp_nanos_opt().unwrap_or_default();
    let mut last = LAST_STAMP.load(Ordering::Acquire);
    loop {
        let next = now.max(last.saturating_add(1));
        match LAST_STAMP.compare_exchange_weak(last, next, Ordering::AcqRel, Ordering::Acquire) {
            Ok(_) => return next,
            Err(actual) => last = actual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stem(filename: &str) -> &str {
        let without_ext = filename.strip_suffix(".html").unwrap();
        let (stem, stamp) = without_ext.rsplit_once('-').unwrap();
        assert!(stamp.chars().all(|c| c.is_ascii_digit()), "{filename}");
        stem
    }

    #[test]
    fn safe_names_only_collapse_whitespace() {
        let name = derive_filename(Some("My   Cool\tArticle 2"), false, 42);
        assert_eq!(name, "My-Cool-Article-2-42.html");

        for input in ["hello", "hello world", " padded  name ", "a b c d"] {
            let expected = input.split_whitespace().collect::<Vec<_>>().join("-");
            assert_eq!(stem(&derive_filename(Some(input), false, 7)), expected);
        }
    }

    #[test]
    fn disallowed_characters_become_hyphens() {
        assert_eq!(
            derive_filename(Some("My/Cool:Article!"), false, 1),
            "My-Cool-Article-1.html"
        );
        assert_eq!(sanitize_base_name("Rust & Go", false), "Rust---Go");
        assert_eq!(sanitize_base_name("a - b", false), "a---b");
        assert_eq!(sanitize_base_name("--Rust & Go!--", false), "Rust---Go");
        assert_eq!(sanitize_base_name("a//b", false), "a-b");
        assert_eq!(sanitize_base_name("café au lait", false), "caf--au-lait");
    }

    #[test]
    fn output_is_path_safe() {
        for input in ["../../etc/passwd", "a\\b", "nul\0byte", "~/.ssh", "ünïcødé 漢字"] {
            let name = derive_filename(Some(input), false, 5);
            assert!(!name.starts_with('-'));
            assert!(
                name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.'),
                "{name}"
            );
            assert!(!stem(&name).contains(".."));
        }
    }

    #[test]
    fn lowercase_option_lowers_stem() {
        assert_eq!(
            derive_filename(Some("My First Post"), true, 99),
            "my-first-post-99.html"
        );
    }

    #[test]
    fn missing_or_empty_name_uses_fallback() {
        assert_eq!(derive_filename(None, true, 123), "article-123.html");
        assert_eq!(derive_filename(Some(""), true, 123), "article-123.html");
        assert_eq!(derive_filename(Some(" !?! "), true, 123), "article-123.html");
    }

    #[test]
    fn long_names_are_truncated() {
        let long = "word ".repeat(100);
        let base = sanitize_base_name(&long, false);
        assert!(base.len() <= MAX_BASE_LEN);
        assert!(!base.ends_with('-'));
    }

    #[test]
    fn stamps_strictly_increase() {
        let mut previous = next_stamp();
        for _ in 0..1000 {
            let stamp = next_stamp();
            assert!(stamp > previous);
            previous = stamp;
        }
    }

    #[test]
    fn identical_names_in_succession_differ() {
        let a = derive_filename(Some("Same"), true, next_stamp());
        let b = derive_filename(Some("Same"), true, next_stamp());
        assert_ne!(a, b);
    }
}
