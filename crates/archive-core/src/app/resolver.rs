//! ArchiveModeResolver: decides which wizard mode to present.
//!
//! A pure decision table over three facts. No state, no I/O, total over its
//! inputs, so the same inputs always give the same mode.

use crate::domain::{FeatureFlags, FileSource, HistorySummary, ViewMode, any_writable};

/// Resolve the view mode. First matching row wins:
///
/// | archived | async tasks | any writable source | mode               |
/// |----------|-------------|---------------------|--------------------|
/// | true     | *           | *                   | `Archived`         |
/// | false    | true        | true                | `DualModeArchival` |
/// | false    | otherwise                         | `SimpleArchival`   |
///
/// Freeing storage means exporting the history to a writable source through
/// an async task first, hence both conditions for the dual mode.
pub fn resolve(history: &HistorySummary, sources: &[FileSource], flags: FeatureFlags) -> ViewMode {
    if history.archived {
        ViewMode::Archived
    } else if flags.async_tasks_enabled && any_writable(sources) {
        ViewMode::DualModeArchival
    } else {
        ViewMode::SimpleArchival
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn history(archived: bool) -> HistorySummary {
        HistorySummary::new("test-history-id", "fake-history-name").with_archived(archived)
    }

    fn sources(writable: &[bool]) -> Vec<FileSource> {
        writable
            .iter()
            .enumerate()
            .map(|(i, w)| FileSource::posix(&format!("source-{i}"), *w))
            .collect()
    }

    #[rstest]
    #[case::no_sources(false, &[], true, ViewMode::SimpleArchival)]
    #[case::writable_with_tasks(false, &[true], true, ViewMode::DualModeArchival)]
    #[case::writable_without_tasks(false, &[true], false, ViewMode::SimpleArchival)]
    #[case::read_only_sources(false, &[false, false], true, ViewMode::SimpleArchival)]
    #[case::one_of_many_writable(false, &[false, true, false], true, ViewMode::DualModeArchival)]
    #[case::archived_no_sources(true, &[], false, ViewMode::Archived)]
    #[case::archived_beats_dual(true, &[true], true, ViewMode::Archived)]
    fn decision_table(
        #[case] archived: bool,
        #[case] writable: &[bool],
        #[case] async_tasks: bool,
        #[case] expected: ViewMode,
    ) {
        let mode = resolve(&history(archived), &sources(writable), FeatureFlags::new(async_tasks));
        assert_eq!(mode, expected);
    }

    proptest! {
        #[test]
        fn prop_archived_always_wins(
            writable in proptest::collection::vec(any::<bool>(), 0..8),
            async_tasks in any::<bool>(),
        ) {
            let mode = resolve(&history(true), &sources(&writable), FeatureFlags::new(async_tasks));
            prop_assert_eq!(mode, ViewMode::Archived);
        }

        #[test]
        fn prop_dual_mode_iff_tasks_and_writable(
            writable in proptest::collection::vec(any::<bool>(), 0..8),
            async_tasks in any::<bool>(),
        ) {
            let mode = resolve(&history(false), &sources(&writable), FeatureFlags::new(async_tasks));
            let expected = if async_tasks && writable.contains(&true) {
                ViewMode::DualModeArchival
            } else {
                ViewMode::SimpleArchival
            };
            prop_assert_eq!(mode, expected);
        }

        #[test]
        fn prop_resolve_is_idempotent(
            archived in any::<bool>(),
            writable in proptest::collection::vec(any::<bool>(), 0..8),
            async_tasks in any::<bool>(),
        ) {
            let h = history(archived);
            let s = sources(&writable);
            let f = FeatureFlags::new(async_tasks);
            prop_assert_eq!(resolve(&h, &s, f), resolve(&h, &s, f));
        }
    }
}
