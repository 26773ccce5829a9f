use ammonia::Builder;

/// Title used when an article is saved without a display name.
pub const UNTITLED: &str = "Untitled article";

/// Whitelist-based HTML cleaner for submitted article bodies.
///
/// Built once at startup from ammonia's default policy, which preserves
/// safe tags (like <b>, <p>) while stripping dangerous tags (like <script>,
/// <iframe>) and malicious attributes (like onclick). `<script>` and
/// `<style>` are removed together with their contents.
///
/// The `class` attribute is additionally allowed so that the editor's
/// formatting classes (`ql-align-center`, `ql-syntax`, ...) survive.
pub struct HtmlSanitizer {
    builder: Builder<'static>,
}

impl HtmlSanitizer {
    pub fn new() -> Self {
        let mut builder = Builder::default();
        builder.add_generic_attributes(&["class"]);
        Self { builder }
    }

    pub fn clean(&self, input: &str) -> String {
        self.builder.clean(input).to_string()
    }
}

impl Default for HtmlSanitizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the document title from the optional display name.
///
/// The name is escaped, so markup in it is shown as text rather than
/// interpreted by the browser.
pub fn article_title(display_name: Option<&str>) -> String {
    match display_name.map(str::trim) {
        // The title is element text, not an attribute value, so a literal
        // space is safe there.
        Some(name) if !name.is_empty() => ammonia::clean_text(name).replace("&#32;", " "),
        _ => UNTITLED.to_string(),
    }
}
