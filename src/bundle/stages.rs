//! Pure text transforms applied while assembling the bundled document.
//!
//! Every stage consumes text and produces new text; no node body is mutated
//! after loading, so stage ordering can never observe a partially rewritten
//! tree.

use crate::asset::AssetNode;
use crate::mime;

/// Produce a node's body with every child reference replaced by that child's data URI.
///
/// For a stylesheet this inlines the fonts and images it references, making
/// the merged `<style>` block self-contained. Nodes without children (scripts,
/// binaries) come back unchanged.
pub fn inline_child_references(node: &AssetNode) -> String {
    let mut text = node.text_body.clone();
    for child in &node.children {
        if let Some(reference) = &child.reference_uri {
            text = text.replace(reference.as_str(), &child.data_uri);
        }
    }
    text
}

/// Concatenate the bodies of the root's stylesheet children in dependency-list order.
///
/// Nested references are inlined first, and no separator is inserted between
/// bodies.
pub fn merged_stylesheets(root: &AssetNode) -> String {
    root.children
        .iter()
        .filter(|child| mime::is_stylesheet(child.mime_type))
        .map(inline_child_references)
        .collect()
}

/// Concatenate the bodies of the root's script children in dependency-list order.
pub fn merged_scripts(root: &AssetNode) -> String {
    root.children
        .iter()
        .filter(|child| mime::is_script(child.mime_type))
        .map(inline_child_references)
        .collect()
}

/// Replace references to the root's binary children (images, fonts, anything
/// that is neither stylesheet nor script) with their data URIs in the
/// document text.
pub fn inline_binary_references(html: String, root: &AssetNode) -> String {
    root.children
        .iter()
        .filter(|child| {
            !mime::is_stylesheet(child.mime_type) && !mime::is_script(child.mime_type)
        })
        .fold(html, |text, child| match &child.reference_uri {
            Some(reference) => text.replace(reference.as_str(), &child.data_uri),
            None => text,
        })
}
