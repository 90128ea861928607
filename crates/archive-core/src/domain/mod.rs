//! Domain model (ids, history, file sources, flags, view mode, errors).

pub mod errors;
pub mod file_source;
pub mod flags;
pub mod history;
pub mod ids;
pub mod view_mode;

pub use errors::ArchiveError;
pub use file_source::{FileSource, FileSourceKind, any_writable};
pub use flags::FeatureFlags;
pub use history::HistorySummary;
pub use ids::{FileSourceId, HistoryId};
pub use view_mode::ViewMode;
