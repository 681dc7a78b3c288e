//! Settings modal context
//!
//! UI-only state: whether the settings modal is open and which tab it shows.

use std::fmt;
use std::str::FromStr;

use parking_lot::RwLock;
use polaris_domain::PolarisError;
use serde::{Deserialize, Serialize};

/// Tabs of the settings modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingsTab {
    #[default]
    General,
    Memory,
    Connections,
    Account,
}

impl SettingsTab {
    pub const ALL: [Self; 4] = [Self::General, Self::Memory, Self::Connections, Self::Account];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Memory => "memory",
            Self::Connections => "connections",
            Self::Account => "account",
        }
    }
}

impl fmt::Display for SettingsTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SettingsTab {
    type Err = PolarisError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tab| tab.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| PolarisError::InvalidInput(format!("unknown settings tab: {value}")))
    }
}

#[derive(Debug, Default)]
struct ModalState {
    open: bool,
    active_tab: SettingsTab,
}

/// Open/closed state and active tab of the settings modal.
#[derive(Debug, Default)]
pub struct SettingsContext {
    state: RwLock<ModalState>,
}

impl SettingsContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the modal, switching to `tab` when one is given.
    pub fn open(&self, tab: Option<SettingsTab>) {
        let mut state = self.state.write();
        state.open = true;
        if let Some(tab) = tab {
            state.active_tab = tab;
        }
    }

    /// Close the modal. The active tab is remembered for the next open.
    pub fn close(&self) {
        self.state.write().open = false;
    }

    pub fn toggle(&self) {
        let mut state = self.state.write();
        state.open = !state.open;
    }

    pub fn set_active_tab(&self, tab: SettingsTab) {
        self.state.write().active_tab = tab;
    }

    pub fn is_open(&self) -> bool {
        self.state.read().open
    }

    pub fn active_tab(&self) -> SettingsTab {
        self.state.read().active_tab
    }
}
