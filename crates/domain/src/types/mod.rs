//! Domain types and models

pub mod callback;
pub mod location;
pub mod memory;
pub mod widgets;

pub use callback::CallbackParams;
pub use location::{LocationSnapshot, LocationStatus, UserLocation};
pub use memory::{
    AutoDeleteDays, CategoriesPatch, DeleteScope, DigestTime, MemoryCategories, MemorySettings,
    MemorySettingsPatch, SettingsEnvelope, WeeklyDigestDay, DEFAULT_MEMORY_SETTINGS,
};
pub use widgets::{EventCardProps, MeetingCardProps};
