use std::sync::OnceLock;

use regex::Regex;

fn comment_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?s)/\*.*?\*/").expect("invalid CSS comment regex"))
}

fn url_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"url\(\s*(?:'(?P<squoted>[^']*)'|"(?P<dquoted>[^"]*)"|(?P<bare>[^'")][^)]*))\s*\)"#)
            .expect("invalid CSS url regex")
    })
}

/// Collect reference URIs from `url(...)` occurrences in stylesheet text.
///
/// Comments are stripped first so commented-out declarations never contribute
/// a reference. Matches are returned in source order, duplicates included: a
/// font declared twice in one `src:` list yields two identical entries.
pub fn css_references(css: &str) -> Vec<String> {
    let stripped = comment_pattern().replace_all(css, "");
    url_pattern()
        .captures_iter(&stripped)
        .filter_map(|caps| {
            caps.name("squoted")
                .or_else(|| caps.name("dquoted"))
                .or_else(|| caps.name("bare"))
        })
        .map(|capture| capture.as_str().trim().to_string())
        .collect()
}
