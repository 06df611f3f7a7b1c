use regex::Regex;

fn reference_ignores() -> &'static [Regex] {
    use std::sync::OnceLock;

    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS
        .get_or_init(|| {
            vec![
                Regex::new(r"(?i)^https?://").expect("invalid http(s) regex"),
                Regex::new(r"^//").expect("invalid protocol-relative regex"),
                Regex::new(r"(?i)^data:").expect("invalid data URI regex"),
                Regex::new(r"(?i)^mailto:").expect("invalid mailto regex"),
                Regex::new(r"^#").expect("invalid fragment regex"),
            ]
        })
        .as_slice()
}

/// Determine whether a reference URI should be skipped during dependency resolution.
///
/// Remote URLs, data URIs, mailto links and fragment-only references cannot be
/// loaded from the local filesystem; they stay untouched in the source
/// document instead of being resolved to nonsensical paths.
pub fn should_ignore_reference(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || reference_ignores().iter().any(|pattern| pattern.is_match(value))
}
