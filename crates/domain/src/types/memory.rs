//! Memory settings document
//!
//! The user's memory preferences as stored by the backend. The wire format
//! is camelCase JSON:
//!
//! ```json
//! {
//!   "enabled": true,
//!   "categories": { "forms": true, "docs": true, "sheets": true, "calendar": true,
//!                   "gmail": true, "flights": true, "otherArtifacts": true },
//!   "autoDeleteDays": 0,
//!   "weeklyDigestEnabled": false,
//!   "weeklyDigestDay": "sunday",
//!   "weeklyDigestTime": "08:00"
//! }
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::PolarisError;

/// Content categories that can be remembered.
///
/// Exactly these seven keys are accepted; unknown or missing keys fail to
/// deserialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MemoryCategories {
    pub forms: bool,
    pub docs: bool,
    pub sheets: bool,
    pub calendar: bool,
    pub gmail: bool,
    pub flights: bool,
    pub other_artifacts: bool,
}

impl MemoryCategories {
    /// Every category enabled.
    pub const ALL: Self = Self {
        forms: true,
        docs: true,
        sheets: true,
        calendar: true,
        gmail: true,
        flights: true,
        other_artifacts: true,
    };

    /// Merge the flags present in `patch`, leaving the others untouched.
    pub fn apply(&mut self, patch: &CategoriesPatch) {
        let CategoriesPatch { forms, docs, sheets, calendar, gmail, flights, other_artifacts } =
            *patch;

        if let Some(value) = forms {
            self.forms = value;
        }
        if let Some(value) = docs {
            self.docs = value;
        }
        if let Some(value) = sheets {
            self.sheets = value;
        }
        if let Some(value) = calendar {
            self.calendar = value;
        }
        if let Some(value) = gmail {
            self.gmail = value;
        }
        if let Some(value) = flights {
            self.flights = value;
        }
        if let Some(value) = other_artifacts {
            self.other_artifacts = value;
        }
    }
}

impl Default for MemoryCategories {
    fn default() -> Self {
        Self::ALL
    }
}

/// Retention policy for remembered content.
///
/// Serialized as the number of days, `0` meaning never delete. Any other
/// integer is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum AutoDeleteDays {
    One,
    Seven,
    Thirty,
    Ninety,
    #[default]
    Never,
}

impl AutoDeleteDays {
    /// Every accepted value, in display order.
    pub const ALL: [Self; 5] = [Self::One, Self::Seven, Self::Thirty, Self::Ninety, Self::Never];

    /// Number of days, `0` for [`AutoDeleteDays::Never`].
    pub const fn days(self) -> u32 {
        match self {
            Self::One => 1,
            Self::Seven => 7,
            Self::Thirty => 30,
            Self::Ninety => 90,
            Self::Never => 0,
        }
    }
}

impl TryFrom<u32> for AutoDeleteDays {
    type Error = PolarisError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::One),
            7 => Ok(Self::Seven),
            30 => Ok(Self::Thirty),
            90 => Ok(Self::Ninety),
            0 => Ok(Self::Never),
            other => Err(PolarisError::InvalidInput(format!(
                "autoDeleteDays must be one of 1, 7, 30, 90 or 0, got {other}"
            ))),
        }
    }
}

impl From<AutoDeleteDays> for u32 {
    fn from(value: AutoDeleteDays) -> Self {
        value.days()
    }
}

/// Day the weekly digest is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeeklyDigestDay {
    #[default]
    Sunday,
    Monday,
    Friday,
}

/// 24-hour `HH:MM` time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DigestTime {
    hour: u8,
    minute: u8,
}

impl DigestTime {
    /// Build a time, rejecting out-of-range components.
    pub fn new(hour: u8, minute: u8) -> Result<Self, PolarisError> {
        if hour > 23 || minute > 59 {
            return Err(PolarisError::InvalidInput(format!(
                "digest time out of range: {hour:02}:{minute:02}"
            )));
        }
        Ok(Self { hour, minute })
    }

    pub const fn hour(self) -> u8 {
        self.hour
    }

    pub const fn minute(self) -> u8 {
        self.minute
    }
}

impl Default for DigestTime {
    fn default() -> Self {
        DEFAULT_MEMORY_SETTINGS.weekly_digest_time
    }
}

impl FromStr for DigestTime {
    type Err = PolarisError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid =
            || PolarisError::InvalidInput(format!("digest time must be HH:MM, got {value:?}"));

        let (hour, minute) = value.split_once(':').ok_or_else(invalid)?;
        if hour.len() != 2 || minute.len() != 2 {
            return Err(invalid());
        }
        if !hour.bytes().chain(minute.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let hour = hour.parse::<u8>().map_err(|_| invalid())?;
        let minute = minute.parse::<u8>().map_err(|_| invalid())?;
        Self::new(hour, minute)
    }
}

impl TryFrom<String> for DigestTime {
    type Error = PolarisError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DigestTime> for String {
    fn from(value: DigestTime) -> Self {
        value.to_string()
    }
}

impl fmt::Display for DigestTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// The user's memory preference document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemorySettings {
    /// Master toggle.
    pub enabled: bool,
    pub categories: MemoryCategories,
    pub auto_delete_days: AutoDeleteDays,
    pub weekly_digest_enabled: bool,
    pub weekly_digest_day: WeeklyDigestDay,
    pub weekly_digest_time: DigestTime,
}

/// Settings used before the backend returns a document, and whenever it has
/// none.
pub const DEFAULT_MEMORY_SETTINGS: MemorySettings = MemorySettings {
    enabled: true,
    categories: MemoryCategories::ALL,
    auto_delete_days: AutoDeleteDays::Never,
    weekly_digest_enabled: false,
    weekly_digest_day: WeeklyDigestDay::Sunday,
    weekly_digest_time: DigestTime { hour: 8, minute: 0 },
};

impl Default for MemorySettings {
    fn default() -> Self {
        DEFAULT_MEMORY_SETTINGS
    }
}

impl MemorySettings {
    /// Apply a partial update in place.
    ///
    /// Present top-level fields replace the current value; present category
    /// flags are merged one by one.
    pub fn apply(&mut self, patch: &MemorySettingsPatch) {
        if let Some(enabled) = patch.enabled {
            self.enabled = enabled;
        }
        if let Some(categories) = &patch.categories {
            self.categories.apply(categories);
        }
        if let Some(days) = patch.auto_delete_days {
            self.auto_delete_days = days;
        }
        if let Some(enabled) = patch.weekly_digest_enabled {
            self.weekly_digest_enabled = enabled;
        }
        if let Some(day) = patch.weekly_digest_day {
            self.weekly_digest_day = day;
        }
        if let Some(time) = patch.weekly_digest_time {
            self.weekly_digest_time = time;
        }
    }

    /// Copy of `self` with `patch` applied.
    #[must_use]
    pub fn merged(mut self, patch: &MemorySettingsPatch) -> Self {
        self.apply(patch);
        self
    }
}

/// Partial category update; `None` leaves the flag unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CategoriesPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forms: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sheets: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calendar: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gmail: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flights: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_artifacts: Option<bool>,
}

/// Partial settings update; `None` leaves the field unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MemorySettingsPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<CategoriesPatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_delete_days: Option<AutoDeleteDays>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekly_digest_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekly_digest_day: Option<WeeklyDigestDay>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekly_digest_time: Option<DigestTime>,
}

/// `{ "settings": ... }` body used by the settings endpoints in both
/// directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsEnvelope {
    pub settings: MemorySettings,
}

/// Which remembered records a delete request removes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeleteScope {
    All,
    Last30Days,
}

impl DeleteScope {
    /// Path below [`crate::constants::MEMORY_SETTINGS_PATH`].
    pub const fn path_suffix(self) -> &'static str {
        match self {
            Self::All => "/all",
            Self::Last30Days => "/last-30-days",
        }
    }

    /// Stable label for logs.
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Last30Days => "last_30_days",
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn defaults_match_documented_constant() {
        let settings = MemorySettings::default();

        assert!(settings.enabled);
        assert_eq!(settings.categories, MemoryCategories::ALL);
        assert_eq!(settings.auto_delete_days, AutoDeleteDays::Never);
        assert!(!settings.weekly_digest_enabled);
        assert_eq!(settings.weekly_digest_day, WeeklyDigestDay::Sunday);
        assert_eq!(settings.weekly_digest_time.to_string(), "08:00");
    }

    #[test]
    fn serializes_with_camel_case_wire_names() {
        let value = serde_json::to_value(DEFAULT_MEMORY_SETTINGS).unwrap();

        assert_eq!(
            value,
            json!({
                "enabled": true,
                "categories": {
                    "forms": true, "docs": true, "sheets": true, "calendar": true,
                    "gmail": true, "flights": true, "otherArtifacts": true
                },
                "autoDeleteDays": 0,
                "weeklyDigestEnabled": false,
                "weeklyDigestDay": "sunday",
                "weeklyDigestTime": "08:00"
            })
        );
    }

    #[test]
    fn rejects_auto_delete_values_outside_the_enumeration() {
        let mut value = serde_json::to_value(DEFAULT_MEMORY_SETTINGS).unwrap();
        value["autoDeleteDays"] = json!(14);

        let result: Result<MemorySettings, _> = serde_json::from_value(value);
        assert!(result.is_err());
    }

    #[test]
    fn accepts_every_enumerated_auto_delete_value() {
        for days in AutoDeleteDays::ALL {
            assert_eq!(AutoDeleteDays::try_from(days.days()).unwrap(), days);
        }
    }

    #[test]
    fn rejects_unknown_category_keys() {
        let mut value = serde_json::to_value(DEFAULT_MEMORY_SETTINGS).unwrap();
        value["categories"]["photos"] = json!(true);

        let result: Result<MemorySettings, _> = serde_json::from_value(value);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_missing_category_keys() {
        let mut value = serde_json::to_value(DEFAULT_MEMORY_SETTINGS).unwrap();
        value["categories"].as_object_mut().unwrap().remove("flights");

        let result: Result<MemorySettings, _> = serde_json::from_value(value);
        assert!(result.is_err());
    }

    #[test]
    fn digest_time_validation() {
        assert_eq!("23:59".parse::<DigestTime>().unwrap().to_string(), "23:59");
        assert_eq!("00:00".parse::<DigestTime>().unwrap(), DigestTime::new(0, 0).unwrap());

        for bad in ["24:00", "12:60", "8:00", "08:0", "0800", "ab:cd", "+1:00", ""] {
            assert!(bad.parse::<DigestTime>().is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn category_patch_merges_instead_of_replacing() {
        let patch = MemorySettingsPatch {
            categories: Some(CategoriesPatch { gmail: Some(false), ..CategoriesPatch::default() }),
            ..MemorySettingsPatch::default()
        };

        let merged = DEFAULT_MEMORY_SETTINGS.merged(&patch);

        assert!(!merged.categories.gmail);
        assert_eq!(
            merged.categories,
            MemoryCategories { gmail: false, ..MemoryCategories::ALL }
        );
        assert_eq!(merged.enabled, DEFAULT_MEMORY_SETTINGS.enabled);
        assert_eq!(merged.auto_delete_days, DEFAULT_MEMORY_SETTINGS.auto_delete_days);
        assert_eq!(merged.weekly_digest_time, DEFAULT_MEMORY_SETTINGS.weekly_digest_time);
    }

    #[test]
    fn top_level_patch_fields_replace() {
        let patch: MemorySettingsPatch = serde_json::from_value(json!({
            "enabled": false,
            "autoDeleteDays": 30,
            "weeklyDigestDay": "friday",
            "weeklyDigestTime": "17:30"
        }))
        .unwrap();

        let merged = DEFAULT_MEMORY_SETTINGS.merged(&patch);

        assert!(!merged.enabled);
        assert_eq!(merged.auto_delete_days, AutoDeleteDays::Thirty);
        assert_eq!(merged.weekly_digest_day, WeeklyDigestDay::Friday);
        assert_eq!(merged.weekly_digest_time.to_string(), "17:30");
        assert_eq!(merged.categories, MemoryCategories::ALL);
    }

    #[test]
    fn delete_scope_paths() {
        assert_eq!(DeleteScope::All.path_suffix(), "/all");
        assert_eq!(DeleteScope::Last30Days.path_suffix(), "/last-30-days");
    }
}
