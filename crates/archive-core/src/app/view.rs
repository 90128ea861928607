//! View - 描画層へ渡すビューモデル
//!
//! GUI 自体はこのクレートの外。ここでは「何を出すか」と
//! 安定した要素 ID だけを決める。描画側とテストはこの ID で要素を探す。

use serde::Serialize;
use std::fmt;

use crate::domain::{FileSource, FileSourceId, HistoryId, HistorySummary, ViewMode};

pub const ARCHIVED_ALERT_ID: &str = "history-archived-alert";
pub const OPTION_TABS_CLASS: &str = "archival-option-tabs";
pub const KEEP_STORAGE_TAB_ID: &str = "keep-storage-tab";
pub const FREE_STORAGE_TAB_ID: &str = "free-storage-tab";

/// アーカイブ方法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArchivalOption {
    /// 中身を残したままアーカイブ
    KeepStorage,
    /// 書き込み可能なソースへエクスポートしてから中身を削除
    FreeStorage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionTab {
    pub id: &'static str,
    pub title: &'static str,
    pub option: ArchivalOption,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewBody {
    SuccessAlert {
        id: &'static str,
        message: &'static str,
    },
    SingleForm {
        option: ArchivalOption,
    },
    OptionTabs {
        class: &'static str,
        tabs: Vec<OptionTab>,
        /// free-storage の書き出し先候補
        export_targets: Vec<FileSourceId>,
    },
}

/// ArchivalView は wizard 1 画面分
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchivalView {
    pub history_id: HistoryId,
    pub header: String,
    pub mode: ViewMode,
    pub body: ViewBody,
}

impl ArchivalView {
    /// `sources` は DualModeArchival のときの書き出し先候補にだけ使う
    pub fn render(history: &HistorySummary, mode: ViewMode, sources: &[FileSource]) -> Self {
        let body = match mode {
            ViewMode::Archived => ViewBody::SuccessAlert {
                id: ARCHIVED_ALERT_ID,
                message: "This history has been archived. You can access it from the History Archive.",
            },
            ViewMode::SimpleArchival => ViewBody::SingleForm {
                option: ArchivalOption::KeepStorage,
            },
            ViewMode::DualModeArchival => ViewBody::OptionTabs {
                class: OPTION_TABS_CLASS,
                tabs: vec![
                    OptionTab {
                        id: KEEP_STORAGE_TAB_ID,
                        title: "Keep storage space",
                        option: ArchivalOption::KeepStorage,
                    },
                    OptionTab {
                        id: FREE_STORAGE_TAB_ID,
                        title: "Free up storage space",
                        option: ArchivalOption::FreeStorage,
                    },
                ],
                export_targets: sources
                    .iter()
                    .filter(|s| s.writable)
                    .map(|s| s.id.clone())
                    .collect(),
            },
        };

        Self {
            history_id: history.id.clone(),
            header: format!("Archive History \"{}\"", history.name),
            mode,
            body,
        }
    }

    /// 画面に出る安定 ID / class の一覧
    pub fn element_ids(&self) -> Vec<&'static str> {
        match &self.body {
            ViewBody::SuccessAlert { id, .. } => vec![*id],
            ViewBody::SingleForm { .. } => vec![],
            ViewBody::OptionTabs { class, tabs, .. } => {
                let mut ids = vec![*class];
                ids.extend(tabs.iter().map(|t| t.id));
                ids
            }
        }
    }

    pub fn has_element(&self, id: &str) -> bool {
        self.element_ids().iter().any(|e| *e == id)
    }
}

impl fmt::Display for ArchivalView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header)?;
        match &self.body {
            ViewBody::SuccessAlert { message, .. } => writeln!(f, "  {message}"),
            ViewBody::SingleForm { .. } => {
                writeln!(f, "  Archive this history, keeping its contents in place.")
            }
            ViewBody::OptionTabs {
                tabs,
                export_targets,
                ..
            } => {
                for tab in tabs {
                    writeln!(f, "  [{}] {}", tab.id, tab.title)?;
                }
                let targets: Vec<&str> = export_targets.iter().map(|id| id.as_str()).collect();
                writeln!(f, "  export targets: {}", targets.join(", "))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history(archived: bool) -> HistorySummary {
        HistorySummary::new("test-history-id", "fake-history-name").with_archived(archived)
    }

    #[test]
    fn header_contains_history_name() {
        let view = ArchivalView::render(&history(false), ViewMode::SimpleArchival, &[]);
        assert!(view.header.contains("fake-history-name"));
    }

    #[test]
    fn simple_mode_has_no_tabs() {
        let view = ArchivalView::render(&history(false), ViewMode::SimpleArchival, &[]);
        assert!(!view.mode.has_option_tabs());
        assert!(!view.has_element(OPTION_TABS_CLASS));
        assert!(view.element_ids().is_empty());
    }

    #[test]
    fn dual_mode_has_both_tabs_and_writable_targets_only() {
        let sources = vec![FileSource::posix("ro", false), FileSource::posix("rw", true)];
        let view = ArchivalView::render(&history(false), ViewMode::DualModeArchival, &sources);

        assert!(view.mode.has_option_tabs());
        assert!(view.has_element(OPTION_TABS_CLASS));
        assert!(view.has_element(KEEP_STORAGE_TAB_ID));
        assert!(view.has_element(FREE_STORAGE_TAB_ID));
        match &view.body {
            ViewBody::OptionTabs { export_targets, .. } => {
                assert_eq!(export_targets, &vec![FileSourceId::new("rw")]);
            }
            other => panic!("unexpected body: {other:?}"),
        }
    }

    #[test]
    fn archived_shows_success_alert_only() {
        let view = ArchivalView::render(&history(true), ViewMode::Archived, &[]);
        assert!(view.has_element(ARCHIVED_ALERT_ID));
        assert!(!view.mode.has_option_tabs());
        assert!(!view.has_element(OPTION_TABS_CLASS));
        assert!(!view.has_element(KEEP_STORAGE_TAB_ID));
    }

    #[test]
    fn serializes_with_tagged_body() {
        let view = ArchivalView::render(&history(true), ViewMode::Archived, &[]);
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["mode"], "archived");
        assert_eq!(json["body"]["kind"], "success_alert");
        assert_eq!(json["body"]["id"], ARCHIVED_ALERT_ID);
    }
}
