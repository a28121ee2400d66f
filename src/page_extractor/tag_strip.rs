//! Regex tag-stripping fallback strategy
//!
//! Degraded extraction mode for documents the structured parser cannot
//! handle. Removes script/style blocks wholesale, replaces every other tag
//! with a space and collapses whitespace runs, so all line structure is
//! lost by design.

use std::sync::LazyLock;

use regex::Regex;

use super::{ExtractError, ExtractStrategy};

static SCRIPT_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script[^>]*>.*?</script>").expect("script pattern must compile")
});

static STYLE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<style[^>]*>.*?</style>").expect("style pattern must compile")
});

static ANY_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("tag pattern must compile"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern must compile"));

/// Fallback extraction strategy based on tag stripping
pub struct TagStripExtractor;

impl ExtractStrategy for TagStripExtractor {
    fn name(&self) -> &'static str {
        "tag_strip"
    }

    fn extract(&self, html: &str) -> Result<String, ExtractError> {
        let without_scripts = SCRIPT_BLOCK.replace_all(html, "");
        let without_styles = STYLE_BLOCK.replace_all(&without_scripts, "");
        let without_tags = ANY_TAG.replace_all(&without_styles, " ");
        let collapsed = WHITESPACE_RUN.replace_all(&without_tags, " ");

        Ok(collapsed.trim().to_string())
    }
}
