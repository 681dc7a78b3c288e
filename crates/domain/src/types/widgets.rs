//! Props for presentational widgets
//!
//! Times are pre-formatted strings; these types carry no identity and are
//! never stored.

use serde::{Deserialize, Serialize};

/// Calendar event summary card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCardProps {
    pub title: String,
    pub start: String,
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Meeting summary card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingCardProps {
    pub title: String,
    pub time: String,
    #[serde(default)]
    pub attendees: Vec<String>,
    #[serde(default)]
    pub join_url: Option<String>,
}
