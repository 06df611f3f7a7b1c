//! The bundling engine that merges an asset graph into one self-contained document.

mod stages;

use std::fs;
use std::path::{Path, PathBuf};

use crate::asset::AssetNode;
use crate::dom;
use crate::error::{BundleError, BundleResult};
use crate::mime;

/// Opaque text transform applied to the merged HTML, CSS or JS before assembly.
pub type Optimizer = Box<dyn Fn(&str) -> String>;

/// Bundles a page's CSS, JavaScript, images and fonts into one HTML document.
///
/// Optimizer hooks are optional; an unconfigured hook is a no-op. Hooks run
/// after same-type merging and before the original reference elements are
/// removed from the document.
#[derive(Default)]
pub struct Bundler {
    optimize_html: Option<Optimizer>,
    optimize_css: Option<Optimizer>,
    optimize_js: Option<Optimizer>,
}

impl Bundler {
    /// Create a bundler with no optimizer hooks configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the transform applied to the page HTML.
    pub fn optimize_html(mut self, optimizer: impl Fn(&str) -> String + 'static) -> Self {
        self.optimize_html = Some(Box::new(optimizer));
        self
    }

    /// Set the transform applied to the merged stylesheet text.
    pub fn optimize_css(mut self, optimizer: impl Fn(&str) -> String + 'static) -> Self {
        self.optimize_css = Some(Box::new(optimizer));
        self
    }

    /// Set the transform applied to the merged script text.
    pub fn optimize_js(mut self, optimizer: impl Fn(&str) -> String + 'static) -> Self {
        self.optimize_js = Some(Box::new(optimizer));
        self
    }

    /// Bundle the page at `entry_path` and return the merged document.
    pub fn bundle_to_string(&self, entry_path: &Path) -> BundleResult<String> {
        let root = AssetNode::load(entry_path)?;
        self.assemble(&root)
    }

    /// Bundle the page at `entry_path` and write the merged document to `output_path`.
    ///
    /// The output directory must already exist; it is checked before any
    /// bundling work starts, and no partial output is written on failure.
    pub fn bundle_to_file(&self, entry_path: &Path, output_path: &Path) -> BundleResult<()> {
        let output_dir = match output_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        if !output_dir.is_dir() {
            return Err(BundleError::InvalidOutputTarget(output_dir));
        }

        let document = self.bundle_to_string(entry_path)?;
        fs::write(output_path, document)
            .map_err(|err| BundleError::Io(output_path.to_path_buf(), err))
    }

    fn assemble(&self, root: &AssetNode) -> BundleResult<String> {
        let css = stages::merged_stylesheets(root);
        let js = stages::merged_scripts(root);

        let html = apply_optimizer(self.optimize_html.as_ref(), root.text_body.clone());
        let css = apply_optimizer(self.optimize_css.as_ref(), css);
        let js = apply_optimizer(self.optimize_js.as_ref(), js);

        let document = dom::parse_document(&html);
        for child in root.children.iter().filter(|child| {
            mime::is_stylesheet(child.mime_type) || mime::is_script(child.mime_type)
        }) {
            if let Some(reference) = &child.reference_uri {
                dom::remove_elements_referencing(&document, reference);
            }
        }
        dom::append_block(&document, "head", "style", &css)?;
        dom::append_block(&document, "body", "script", &js)?;

        Ok(stages::inline_binary_references(
            dom::serialize(&document),
            root,
        ))
    }
}

fn apply_optimizer(optimizer: Option<&Optimizer>, text: String) -> String {
    match optimizer {
        Some(transform) => transform(&text),
        None => text,
    }
}
