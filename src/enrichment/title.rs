use regex::Regex;
use std::sync::LazyLock;

static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<title(?:\s[^>]*)?>(.*?)</title\s*>").expect("title pattern compiles")
});

/// Returns the text of the first `<title>` element, or an empty string.
pub fn extract_title(html: &str) -> String {
    TITLE_RE
        .captures(html)
        .and_then(|cap| cap.get(1))
        .map(|m| decode_entities(m.as_str()).trim().to_string())
        .unwrap_or_default()
}

fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
