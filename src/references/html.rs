use kuchiki::traits::TendrilSink;

/// Collect reference URIs from an HTML document in document order.
///
/// Every element carrying a `src` or `href` attribute contributes one entry;
/// when both are present the `src` value wins. Markup without any such
/// element yields an empty list.
pub fn html_references(html: &str) -> Vec<String> {
    let document = kuchiki::parse_html().one(html);
    let mut references = Vec::new();

    for element in document.select("*").expect("invalid universal selector") {
        let attributes = element.attributes.borrow();
        if let Some(value) = attributes.get("src").or_else(|| attributes.get("href")) {
            references.push(value.to_string());
        }
    }

    references
}
