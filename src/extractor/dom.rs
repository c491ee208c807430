use scraper::{ElementRef, Selector};

// Concatenated text of every match inside `scope`, trimmed.
pub fn text_of(scope: ElementRef<'_>, sel: &Selector) -> String {
    let mut buf = String::new();
    for node in scope.select(sel) {
        for t in node.text() { buf.push_str(t); }
    }
    buf.trim().to_string()
}

// Attribute of the first match inside `scope`; empty when either is missing.
pub fn attr_of(scope: ElementRef<'_>, sel: &Selector, name: &str) -> String {
    scope
        .select(sel)
        .next()
        .and_then(|node| node.value().attr(name))
        .map(|v| v.to_string())
        .unwrap_or_default()
}

pub fn own_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

pub fn own_attr(el: ElementRef<'_>, name: &str) -> String {
    el.value().attr(name).unwrap_or_default().to_string()
}

/// Slug for a category href: the part after `marker`, minus one trailing slash.
/// Empty when the marker is absent.
pub fn slug_from_href(href: &str, marker: &str) -> String {
    match href.split(marker).nth(1) {
        Some(rest) => rest.strip_suffix('/').unwrap_or(rest).to_string(),
        None => String::new(),
    }
}
