//! DOM-walking extraction strategy
//!
//! Parses the document with an error-tolerant HTML5 parser and collects
//! text nodes in document order, skipping the subtrees of non-content tags.

use ego_tree::NodeRef;
use scraper::{Html, Node};

use super::{ExtractError, ExtractStrategy, STRIP_TAGS};

/// Primary extraction strategy backed by a parsed DOM tree
pub struct DomExtractor;

impl ExtractStrategy for DomExtractor {
    fn name(&self) -> &'static str {
        "dom"
    }

    fn extract(&self, html: &str) -> Result<String, ExtractError> {
        let document = Html::parse_document(html);

        let mut raw = String::new();
        collect_text(document.tree.root(), &mut raw);

        // One trimmed line per non-empty source line; preserves the
        // line-break structure of the original markup.
        let lines: Vec<&str> = raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        Ok(lines.join("\n"))
    }
}

/// Append the text content of `node` to `out`, pruning stripped subtrees
fn collect_text(node: NodeRef<'_, Node>, out: &mut String) {
    match node.value() {
        Node::Element(element) => {
            if STRIP_TAGS.contains(&element.name()) {
                return;
            }
        }
        Node::Text(text) => {
            out.push_str(text);
        }
        _ => {}
    }

    for child in node.children() {
        collect_text(child, out);
    }
}
