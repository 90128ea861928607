//! HistoryStore port - クライアント側のヒストリーストア
//!
//! wizard はストアを直接持たず、この trait 越しに参照だけする。
//! テストではスタブ実装に差し替える（実行時のモンキーパッチは不要）。

use crate::domain::{HistoryId, HistorySummary};

/// HistoryStore は ID からヒストリーの要約を引く
///
/// # 設計原則
/// - 読み取り専用（archived の更新はストア側の責務）
/// - 見つからなければ `None`。エラー扱いするかは呼び出し側が決める
pub trait HistoryStore: Send + Sync {
    fn get_history_by_id(&self, id: &HistoryId) -> Option<HistorySummary>;
}

impl<S: HistoryStore + ?Sized> HistoryStore for std::sync::Arc<S> {
    fn get_history_by_id(&self, id: &HistoryId) -> Option<HistorySummary> {
        (**self).get_history_by_id(id)
    }
}
