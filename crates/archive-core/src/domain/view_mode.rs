//! ViewMode: the mutually exclusive state the wizard presents.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which variant of the archive wizard to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// The history is already archived; show the success state only.
    Archived,

    /// Plain archival form, no option tabs.
    SimpleArchival,

    /// Tabs offering "keep storage" and "free storage" (export then purge).
    DualModeArchival,
}

impl ViewMode {
    pub fn has_option_tabs(self) -> bool {
        matches!(self, ViewMode::DualModeArchival)
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ViewMode::Archived => "archived",
            ViewMode::SimpleArchival => "simple_archival",
            ViewMode::DualModeArchival => "dual_mode_archival",
        };
        f.write_str(s)
    }
}
