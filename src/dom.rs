//! HTML tree helpers used to rewrite the entry document during bundling.
//!
//! The document is parsed once, mutated (reference elements removed, merged
//! blocks appended) and serialized back to text in a single cycle.

use kuchiki::NodeRef;
use kuchiki::traits::TendrilSink;

use crate::error::{BundleError, BundleResult};

/// Parse an HTML string into a mutable document tree.
pub fn parse_document(html: &str) -> NodeRef {
    kuchiki::parse_html().one(html)
}

/// Serialize a document tree back to an HTML string.
pub fn serialize(document: &NodeRef) -> String {
    document.to_string()
}

/// Remove every element whose `src` or `href` attribute equals `uri` exactly.
///
/// Matching is done against the parsed attribute value, so a reference URI
/// that happens to be a substring of another never removes the wrong element.
pub fn remove_elements_referencing(document: &NodeRef, uri: &str) {
    let matches: Vec<_> = document
        .select("*")
        .expect("invalid universal selector")
        .filter(|element| {
            let attributes = element.attributes.borrow();
            attributes.get("src") == Some(uri) || attributes.get("href") == Some(uri)
        })
        .collect();

    // detach after collecting so removal does not invalidate the iterator
    for element in matches {
        element.as_node().detach();
    }
}

/// Append a new `<tag>` element containing `text` as the last child of the
/// first `parent` element in the document.
pub fn append_block(
    document: &NodeRef,
    parent: &'static str,
    tag: &'static str,
    text: &str,
) -> BundleResult<()> {
    let target = document
        .select_first(parent)
        .map_err(|()| BundleError::MissingElement(parent))?;

    let fragment = parse_document(&format!("<{tag}>{text}</{tag}>"));
    let block = fragment
        .select_first(tag)
        .expect("parsed fragment always contains the requested element");

    let node = block.as_node().clone();
    node.detach();
    target.as_node().append(node);
    Ok(())
}
