//! Extraction of reference URIs from HTML and CSS source text.

mod css;
mod filters;
mod html;

pub use css::css_references;
pub use filters::should_ignore_reference;
pub use html::html_references;
