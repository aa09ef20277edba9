use super::types::Link;

use std::fmt::Write;

/// Renders the home page listing for a store snapshot.
///
/// Links are shown in the order given. The anchor text is the title, or the
/// URL itself when no title is known.
pub fn render_listing(links: &[Link], listen_hint: &str) -> String {
    let mut page = String::with_capacity(256 + links.len() * 96);

    page.push_str("<h1>GophURLs</h1>\n");
    let _ = writeln!(
        page,
        "<p>Submit a link: <tt>curl -X POST -d '{{\"URL\":\"http://example.com\"}}' http://{}/links</tt></p>",
        escape_html(listen_hint)
    );
    let _ = writeln!(page, "<h2>Links ({})</h2>", links.len());
    page.push_str("<ol>\n");
    for link in links {
        let text = if link.title.is_empty() {
            &link.url
        } else {
            &link.title
        };
        let _ = writeln!(
            page,
            "  <li><a href=\"{}\">{}</a></li>",
            escape_html(&link.url),
            escape_html(text)
        );
    }
    page.push_str("</ol>\n");

    page
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
