//! OAuth callback pages and the generic page shell

use chrono::Datelike;
use polaris_core::{CallbackKind, CallbackOutcome, CallbackStatus};

use super::widgets::{callback_loading, footer, thinking_indicator};
use super::{document, escape_html};

/// Callback screen for `kind`.
///
/// With no outcome yet the loading placeholder is shown. Otherwise the page
/// shows the status and message and carries a `<meta http-equiv="refresh">`
/// that performs the redirect after the outcome's delay.
pub fn callback_page(kind: CallbackKind, outcome: Option<&CallbackOutcome>) -> String {
    let Some(outcome) = outcome else {
        let title = kind.loading_title();
        return document(title, "", &with_footer(&callback_loading(title)));
    };

    let refresh = format!(
        "<meta http-equiv=\"refresh\" content=\"{};url={}\">\n",
        outcome.delay.as_secs(),
        escape_html(&outcome.redirect_to)
    );

    let (modifier, heading) = match outcome.status {
        CallbackStatus::Success => ("success", format!("{} connected", kind.provider())),
        CallbackStatus::Error => ("error", format!("{} connection failed", kind.provider())),
        CallbackStatus::Loading => ("loading", kind.loading_title().to_string()),
    };

    let body = format!(
        "<main>\n<section class=\"callback callback--{modifier}\" data-status=\"{modifier}\">\n\
         <h1>{}</h1>\n<p class=\"callback__message\">{}</p>\n{}\n\
         <p class=\"callback__redirect\">If nothing happens, <a href=\"{}\">continue</a>.</p>\n\
         </section>\n</main>",
        escape_html(&heading),
        escape_html(&outcome.message),
        thinking_indicator("Redirecting..."),
        escape_html(&outcome.redirect_to),
    );

    document(&heading, &refresh, &with_footer(&body))
}

/// Minimal page for browser routes that passed the route gate.
pub fn page_shell(path: &str) -> String {
    let body = format!(
        "<main>\n<div id=\"app\" data-path=\"{}\"></div>\n{}\n</main>",
        escape_html(path),
        thinking_indicator("Loading...")
    );
    document("Polaris AI", "", &with_footer(&body))
}

pub fn not_found_page(path: &str) -> String {
    let body = format!(
        "<main>\n<h1>Page not found</h1>\n<p>No page exists at <code>{}</code>.</p>\n\
         <a href=\"/\">Go home</a>\n</main>",
        escape_html(path)
    );
    document("Not found", "", &with_footer(&body))
}

fn with_footer(body: &str) -> String {
    format!("{body}\n{}", footer(chrono::Utc::now().year()))
}
