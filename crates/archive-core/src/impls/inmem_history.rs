//! InMemoryHistoryStore - クライアント側ストアのインメモリ実装
//!
//! # 実装詳細
//! - `RwLock<HashMap<HistoryId, HistorySummary>>` で保持
//! - 変更のたびに `watch` チャネルのリビジョンを進める
//!   （wizard の再解決トリガーに使う）

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use tokio::sync::watch;
use tracing::debug;

use crate::domain::{HistoryId, HistorySummary};
use crate::ports::HistoryStore;

pub struct InMemoryHistoryStore {
    histories: RwLock<HashMap<HistoryId, HistorySummary>>,
    revision: watch::Sender<u64>,
}

impl InMemoryHistoryStore {
    pub fn new() -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            histories: RwLock::new(HashMap::new()),
            revision,
        }
    }

    /// 追加または置き換え
    pub fn insert(&self, history: HistorySummary) {
        let mut guard = self.histories.write().unwrap_or_else(PoisonError::into_inner);
        guard.insert(history.id.clone(), history);
        drop(guard);
        self.bump();
    }

    /// archived を false -> true にする
    ///
    /// 実際に状態が変わったときだけ `true` を返し、購読者に通知する。
    pub fn mark_archived(&self, id: &HistoryId) -> bool {
        let mut guard = self.histories.write().unwrap_or_else(PoisonError::into_inner);
        let changed = guard
            .get_mut(id)
            .map(HistorySummary::mark_archived)
            .unwrap_or(false);
        drop(guard);
        if changed {
            debug!(history_id = %id, "history marked archived");
            self.bump();
        }
        changed
    }

    /// 変更通知の購読
    pub fn changes(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    fn bump(&self) {
        self.revision.send_modify(|rev| *rev += 1);
    }
}

impl Default for InMemoryHistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryStore for InMemoryHistoryStore {
    fn get_history_by_id(&self, id: &HistoryId) -> Option<HistorySummary> {
        self.histories
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }
}
