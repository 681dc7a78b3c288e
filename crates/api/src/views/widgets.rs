//! Presentational widgets
//!
//! Pure render functions; no state, no I/O.

use polaris_domain::{EventCardProps, MeetingCardProps};

use super::escape_html;

/// Calendar event card: title, time range, optional location and
/// description.
pub fn event_card(props: &EventCardProps) -> String {
    let time = match props.end.as_deref() {
        Some(end) => format!("{} - {}", escape_html(&props.start), escape_html(end)),
        None => escape_html(&props.start),
    };

    let mut html = format!(
        "<article class=\"event-card\">\n<h3 class=\"event-card__title\">{}</h3>\n\
         <p class=\"event-card__time\">{time}</p>\n",
        escape_html(&props.title)
    );
    if let Some(location) = props.location.as_deref().filter(|value| !value.is_empty()) {
        html.push_str(&format!(
            "<p class=\"event-card__location\">{}</p>\n",
            escape_html(location)
        ));
    }
    if let Some(description) = props.description.as_deref().filter(|value| !value.is_empty()) {
        html.push_str(&format!(
            "<p class=\"event-card__description\">{}</p>\n",
            escape_html(description)
        ));
    }
    html.push_str("</article>");
    html
}

/// Meeting card: title, time, attendee list and an optional join link.
pub fn meeting_card(props: &MeetingCardProps) -> String {
    let mut html = format!(
        "<article class=\"meeting-card\">\n<h3 class=\"meeting-card__title\">{}</h3>\n\
         <p class=\"meeting-card__time\">{}</p>\n",
        escape_html(&props.title),
        escape_html(&props.time)
    );

    if !props.attendees.is_empty() {
        html.push_str("<ul class=\"meeting-card__attendees\">\n");
        for attendee in &props.attendees {
            html.push_str(&format!("<li>{}</li>\n", escape_html(attendee)));
        }
        html.push_str("</ul>\n");
    }
    if let Some(url) = props.join_url.as_deref().filter(|url| is_web_link(url)) {
        html.push_str(&format!(
            "<a class=\"meeting-card__join\" href=\"{}\" target=\"_blank\" \
             rel=\"noopener noreferrer\">Join meeting</a>\n",
            escape_html(url)
        ));
    }
    html.push_str("</article>");
    html
}

/// Site footer with the copyright year.
pub fn footer(year: i32) -> String {
    format!(
        "<footer class=\"site-footer\">\n<p>&copy; {year} Polaris AI. All rights reserved.</p>\n\
         <nav><a href=\"/privacy\">Privacy</a> <a href=\"/terms\">Terms</a></nav>\n</footer>"
    )
}

/// Animated "thinking" dots with an accessible label.
pub fn thinking_indicator(label: &str) -> String {
    format!(
        "<div class=\"thinking-indicator\" role=\"status\" aria-live=\"polite\">\n\
         <span class=\"dot\"></span><span class=\"dot\"></span><span class=\"dot\"></span>\n\
         <span class=\"thinking-indicator__label\">{}</span>\n</div>",
        escape_html(label)
    )
}

/// Placeholder shown while a callback screen evaluates its parameters.
pub fn callback_loading(title: &str) -> String {
    format!(
        "<section class=\"callback callback--loading\">\n<h1>{}</h1>\n{}\n</section>",
        escape_html(title),
        thinking_indicator("Please wait...")
    )
}

/// Only `http(s)` links are rendered as anchors.
fn is_web_link(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_card_renders_optional_fields_only_when_present() {
        let minimal = EventCardProps {
            title: "Standup".into(),
            start: "9:00 AM".into(),
            ..EventCardProps::default()
        };
        let html = event_card(&minimal);
        assert!(html.contains("Standup"));
        assert!(html.contains("<p class=\"event-card__time\">9:00 AM</p>"));
        assert!(!html.contains("event-card__location"));
        assert!(!html.contains("event-card__description"));

        let full = EventCardProps {
            end: Some("9:15 AM".into()),
            location: Some("Room <4>".into()),
            description: Some("Daily sync".into()),
            ..minimal
        };
        let html = event_card(&full);
        assert!(html.contains("9:00 AM - 9:15 AM"));
        assert!(html.contains("Room &lt;4&gt;"));
        assert!(html.contains("Daily sync"));
    }

    #[test]
    fn meeting_card_lists_attendees_and_join_link() {
        let props = MeetingCardProps {
            title: "Design review".into(),
            time: "2:00 PM".into(),
            attendees: vec!["ana@example.com".into(), "Bo & Co".into()],
            join_url: Some("https://meet.example.com/abc".into()),
        };

        let html = meeting_card(&props);

        assert!(html.contains("<li>ana@example.com</li>"));
        assert!(html.contains("<li>Bo &amp; Co</li>"));
        assert!(html.contains("href=\"https://meet.example.com/abc\""));
    }

    #[test]
    fn meeting_card_drops_non_web_join_link() {
        let props = MeetingCardProps {
            title: "Sync".into(),
            time: "now".into(),
            join_url: Some("javascript:alert(1)".into()),
            ..MeetingCardProps::default()
        };

        let html = meeting_card(&props);

        assert!(!html.contains("href"));
        assert!(!html.contains("meeting-card__attendees"));
    }

    #[test]
    fn footer_and_indicators() {
        assert!(footer(2026).contains("&copy; 2026 Polaris AI"));
        assert!(thinking_indicator("<Thinking>").contains("&lt;Thinking&gt;"));

        let loading = callback_loading("Completing sign in...");
        assert!(loading.contains("<h1>Completing sign in...</h1>"));
        assert!(loading.contains("thinking-indicator"));
    }
}
