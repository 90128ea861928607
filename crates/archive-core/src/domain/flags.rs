//! Process-wide feature flags read by the wizard.

use serde::{Deserialize, Serialize};

/// Feature flags relevant to archiving.
///
/// The server exposes the task backend switch as `enable_celery_tasks`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureFlags {
    #[serde(rename = "enable_celery_tasks", alias = "async_tasks_enabled", default)]
    pub async_tasks_enabled: bool,
}

impl FeatureFlags {
    pub fn new(async_tasks_enabled: bool) -> Self {
        Self {
            async_tasks_enabled,
        }
    }
}
