//! MIME type lookup keyed by file extension.
//!
//! The bundler only needs a type string per asset: it decides which files can
//! carry references of their own, and it labels the base64 data URIs embedded
//! in the output. Unknown extensions fall back to `application/octet-stream`.

use std::path::Path;

/// MIME type constants for the asset kinds the bundler handles.
pub mod types {
    /// HTML pages.
    pub const HTML: &str = "text/html";
    /// Stylesheets.
    pub const CSS: &str = "text/css";
    /// Scripts.
    pub const JAVASCRIPT: &str = "text/javascript";
    /// JSON data files.
    pub const JSON: &str = "application/json";

    /// PNG images.
    pub const PNG: &str = "image/png";
    /// JPEG images.
    pub const JPEG: &str = "image/jpeg";
    /// GIF images.
    pub const GIF: &str = "image/gif";
    /// WebP images.
    pub const WEBP: &str = "image/webp";
    /// SVG images.
    pub const SVG: &str = "image/svg+xml";
    /// Windows icon files.
    pub const ICO: &str = "image/x-icon";

    /// WOFF fonts.
    pub const WOFF: &str = "font/woff";
    /// WOFF2 fonts.
    pub const WOFF2: &str = "font/woff2";
    /// TrueType fonts.
    pub const TTF: &str = "font/ttf";
    /// OpenType fonts.
    pub const OTF: &str = "font/otf";
    /// Embedded OpenType fonts.
    pub const EOT: &str = "application/vnd.ms-fontobject";

    /// WebAssembly modules.
    pub const WASM: &str = "application/wasm";
    /// Fallback for unknown extensions.
    pub const OCTET_STREAM: &str = "application/octet-stream";
}

/// Guess the MIME type from a file path's extension.
pub fn from_path(path: &Path) -> &'static str {
    from_extension(path.extension().and_then(|ext| ext.to_str()))
}

/// Guess the MIME type from a bare extension string.
pub fn from_extension(ext: Option<&str>) -> &'static str {
    match ext.map(|value| value.to_ascii_lowercase()).as_deref() {
        Some("html" | "htm") => types::HTML,
        Some("css") => types::CSS,
        Some("js" | "mjs" | "cjs") => types::JAVASCRIPT,
        Some("json") => types::JSON,

        Some("png") => types::PNG,
        Some("jpg" | "jpeg") => types::JPEG,
        Some("gif") => types::GIF,
        Some("webp") => types::WEBP,
        Some("svg") => types::SVG,
        Some("ico") => types::ICO,

        Some("woff") => types::WOFF,
        Some("woff2") => types::WOFF2,
        Some("ttf") => types::TTF,
        Some("otf") => types::OTF,
        Some("eot") => types::EOT,

        Some("wasm") => types::WASM,
        _ => types::OCTET_STREAM,
    }
}

/// Whether a MIME type denotes a stylesheet.
pub fn is_stylesheet(mime: &str) -> bool {
    mime.contains("css")
}

/// Whether a MIME type denotes a script.
pub fn is_script(mime: &str) -> bool {
    mime.contains("javascript")
}

/// Whether a MIME type denotes an HTML page.
pub fn is_markup(mime: &str) -> bool {
    mime.contains("html")
}
