//! Readable-text extraction from raw HTML
//!
//! Converts an HTML document into plain text suitable for an agent to read.
//! Extraction is modeled as a strategy trait with two implementations:
//!
//! - [`DomExtractor`]: parses the document into a tree, drops non-content
//!   subtrees (script, style, nav, footer, header, aside) and concatenates
//!   the remaining text nodes in document order, one trimmed line per
//!   source line.
//! - [`TagStripExtractor`]: regex-based tag stripping that collapses all
//!   whitespace to single spaces. Used when structured parsing fails.
//!
//! The two strategies intentionally produce different whitespace layouts.
//! The fallback is a degraded but still readable mode; do not unify them.

mod dom;
mod tag_strip;

pub use dom::DomExtractor;
pub use tag_strip::TagStripExtractor;

use thiserror::Error;
use tracing::warn;

/// Tags whose entire subtree is dropped during extraction
pub const STRIP_TAGS: &[&str] = &["script", "style", "nav", "footer", "header", "aside"];

/// Error from a single extraction strategy
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The strategy could not produce text from this document
    #[error("extraction failed: {0}")]
    Failed(String),
}

/// A single HTML-to-text extraction strategy
pub trait ExtractStrategy {
    /// Strategy name, used for logging when a strategy is skipped
    fn name(&self) -> &'static str;

    /// Convert an HTML document into plain text
    fn extract(&self, html: &str) -> Result<String, ExtractError>;
}

/// Extract readable text from HTML content.
///
/// Tries the DOM-walking extractor first and falls back to regex tag
/// stripping if it fails. Pure function: same input always produces the
/// same output. Empty input produces empty output on both paths.
pub fn extract_text(html: &str) -> String {
    let primary = DomExtractor;
    match primary.extract(html) {
        Ok(text) => text,
        Err(err) => {
            warn!(
                strategy = primary.name(),
                "extraction strategy failed, falling back to tag stripping: {err}"
            );
            TagStripExtractor.extract(html).unwrap_or_default()
        }
    }
}
