//! Asset graph nodes loaded from the local filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use base64::{Engine as _, engine::general_purpose};
use log::debug;

use crate::error::{BundleError, BundleResult};
use crate::mime;
use crate::paths::resolve_reference;
use crate::references::{css_references, html_references, should_ignore_reference};

/// One physical file in the asset graph together with its resolved dependencies.
///
/// Loading is eager and recursive: constructing a node reads the file, derives
/// its MIME type and data URI, and resolves every reference reachable from its
/// body before returning. Only HTML and CSS nodes can have children; all other
/// types are leaves.
#[derive(Debug)]
pub struct AssetNode {
    /// Canonical absolute location of the file.
    pub path: PathBuf,
    /// File name component of the path.
    pub name: String,
    /// MIME type derived from the file extension.
    pub mime_type: &'static str,
    /// Full text content of the file, decoded lossily for binary assets.
    pub text_body: String,
    /// Raw bytes of the file.
    pub binary_body: Vec<u8>,
    /// `data:<mime>;base64,<bytes>` form of the raw bytes, computed at load time.
    pub data_uri: String,
    /// The literal relative URI the parent used to reference this node; `None` for the root.
    pub reference_uri: Option<String>,
    /// Child assets, in the order their references appear in the body.
    pub children: Vec<AssetNode>,
}

impl AssetNode {
    /// Load the asset at `path` and recursively resolve every reachable dependency.
    ///
    /// Fails with [`BundleError::NotFound`] when the path does not denote an
    /// existing file, and with [`BundleError::CircularReference`] when the
    /// reference chain loops back onto a file that is still being loaded.
    pub fn load(path: &Path) -> BundleResult<Self> {
        if !path.is_file() {
            return Err(BundleError::NotFound(path.to_path_buf()));
        }
        Self::load_reference(path, None, &mut Vec::new())
    }

    fn load_reference(
        path: &Path,
        reference_uri: Option<String>,
        ancestry: &mut Vec<PathBuf>,
    ) -> BundleResult<Self> {
        let canonical = path
            .canonicalize()
            .map_err(|err| BundleError::Io(path.to_path_buf(), err))?;
        if ancestry.contains(&canonical) {
            return Err(BundleError::CircularReference(canonical));
        }

        let binary_body =
            fs::read(&canonical).map_err(|err| BundleError::Io(canonical.clone(), err))?;
        let text_body = String::from_utf8_lossy(&binary_body).into_owned();
        let mime_type = mime::from_path(&canonical);
        let data_uri = format!(
            "data:{};base64,{}",
            mime_type,
            general_purpose::STANDARD.encode(&binary_body)
        );
        let name = canonical
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        ancestry.push(canonical.clone());
        let children = Self::load_children(&canonical, mime_type, &text_body, ancestry);
        ancestry.pop();

        Ok(Self {
            path: canonical,
            name,
            mime_type,
            text_body,
            binary_body,
            data_uri,
            reference_uri,
            children: children?,
        })
    }

    fn load_children(
        path: &Path,
        mime_type: &str,
        text_body: &str,
        ancestry: &mut Vec<PathBuf>,
    ) -> BundleResult<Vec<AssetNode>> {
        let references = if mime::is_markup(mime_type) {
            html_references(text_body)
        } else if mime::is_stylesheet(mime_type) {
            css_references(text_body)
        } else {
            return Ok(Vec::new());
        };

        let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
        let mut children = Vec::new();
        for uri in references {
            if should_ignore_reference(&uri) {
                continue;
            }
            let resolved = resolve_reference(base_dir, &uri);
            if !resolved.is_file() {
                debug!(
                    "dropping unresolved reference `{uri}` ({} does not exist)",
                    resolved.display()
                );
                continue;
            }
            children.push(Self::load_reference(&resolved, Some(uri), ancestry)?);
        }
        Ok(children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn fails_for_missing_entry_paths() {
        let err = AssetNode::load(Path::new("/definitely/not/here.html")).unwrap_err();
        assert!(matches!(err, BundleError::NotFound(_)));
    }

    #[test]
    fn loads_a_leaf_with_its_data_uri() {
        let dir = tempdir().unwrap();
        let logo = dir.path().join("logo.png");
        fs::write(&logo, [1u8, 2, 3]).unwrap();

        let node = AssetNode::load(&logo).unwrap();
        assert_eq!(node.name, "logo.png");
        assert_eq!(node.mime_type, "image/png");
        assert_eq!(node.binary_body, vec![1, 2, 3]);
        assert_eq!(node.data_uri, "data:image/png;base64,AQID");
        assert!(node.reference_uri.is_none());
        assert!(node.children.is_empty());
    }

    #[test]
    fn resolves_children_in_reference_order() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("css")).unwrap();
        fs::write(dir.path().join("css/site.css"), "body{}").unwrap();
        fs::write(dir.path().join("app.js"), "var a;").unwrap();
        let page = dir.path().join("index.html");
        fs::write(
            &page,
            r#"<link href="css/site.css"><script src="app.js"></script>"#,
        )
        .unwrap();

        let node = AssetNode::load(&page).unwrap();
        let references: Vec<_> = node
            .children
            .iter()
            .map(|child| child.reference_uri.as_deref().unwrap())
            .collect();
        assert_eq!(references, vec!["css/site.css", "app.js"]);
    }

    #[test]
    fn drops_missing_and_remote_references_silently() {
        let dir = tempdir().unwrap();
        let page = dir.path().join("index.html");
        fs::write(
            &page,
            r#"<img src="missing.png"><script src="https://cdn.example.com/app.js"></script>"#,
        )
        .unwrap();

        let node = AssetNode::load(&page).unwrap();
        assert!(node.children.is_empty());
    }

    #[test]
    fn stylesheet_children_resolve_their_own_references() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("css")).unwrap();
        fs::create_dir(dir.path().join("fonts")).unwrap();
        fs::write(dir.path().join("fonts/app.woff"), [0u8; 4]).unwrap();
        fs::write(
            dir.path().join("css/site.css"),
            "@font-face { src: url('../fonts/app.woff'); }",
        )
        .unwrap();
        let page = dir.path().join("index.html");
        fs::write(&page, r#"<link href="css/site.css">"#).unwrap();

        let node = AssetNode::load(&page).unwrap();
        assert_eq!(node.children.len(), 1);
        let stylesheet = &node.children[0];
        assert_eq!(stylesheet.children.len(), 1);
        let font = &stylesheet.children[0];
        assert_eq!(font.reference_uri.as_deref(), Some("../fonts/app.woff"));
        assert_eq!(font.mime_type, "font/woff");
        assert!(font.children.is_empty());
    }

    #[test]
    fn binary_leaves_never_parse_their_bodies() {
        let dir = tempdir().unwrap();
        // bytes that happen to spell out a reference must not produce children
        let tricky = dir.path().join("tricky.png");
        fs::write(&tricky, r#"<img src="other.png">"#).unwrap();
        fs::write(dir.path().join("other.png"), [0u8]).unwrap();

        let node = AssetNode::load(&tricky).unwrap();
        assert!(node.children.is_empty());
    }

    #[test]
    fn rejects_circular_reference_chains() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.css"), "@import url('b.css');").unwrap();
        fs::write(dir.path().join("b.css"), "@import url('a.css');").unwrap();
        let page = dir.path().join("index.html");
        fs::write(&page, r#"<link href="a.css">"#).unwrap();

        let err = AssetNode::load(&page).unwrap_err();
        assert!(matches!(err, BundleError::CircularReference(_)));
    }
}
