//! Server-rendered HTML
//!
//! Views are plain functions returning `String`. Every piece of text that
//! did not originate in this module is passed through [`escape_html`].

pub mod callback;
pub mod widgets;

use std::fmt::Write as _;

pub use callback::{callback_page, not_found_page, page_shell};
pub use widgets::{callback_loading, event_card, footer, meeting_card, thinking_indicator};

/// Escape the five HTML-significant characters.
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Full HTML document. `title` is escaped; `head_extra` and `body` are
/// trusted markup.
pub(crate) fn document(title: &str, head_extra: &str, body: &str) -> String {
    let mut html = String::with_capacity(body.len() + 256);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(html, "<title>{} | Polaris AI</title>", escape_html(title));
    html.push_str(head_extra);
    html.push_str("</head>\n<body>\n");
    html.push_str(body);
    html.push_str("\n</body>\n</html>\n");
    html
}
