//! History summary: the unit of work the wizard archives.

use serde::{Deserialize, Serialize};

use super::ids::HistoryId;

/// Summary view of a history as the client store holds it.
///
/// The server sends many more keys; anything not listed here is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistorySummary {
    pub id: HistoryId,
    pub name: String,
    #[serde(default)]
    pub archived: bool,
}

impl HistorySummary {
    pub fn new(id: impl Into<HistoryId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            archived: false,
        }
    }

    /// Builder-style variant used mostly by fixtures.
    pub fn with_archived(mut self, archived: bool) -> Self {
        self.archived = archived;
        self
    }

    /// Archiving is one-way: once set, nothing in the client flips it back.
    pub fn mark_archived(&mut self) -> bool {
        let changed = !self.archived;
        self.archived = true;
        changed
    }
}
