//! ArchiveWizard - 取得フェーズと解決フェーズをつなぐ
//!
//! # 流れ
//! 1. fetch: `FileSourceLister` からソース一覧を取る（失敗は空リスト扱い）
//! 2. resolve: ストアからヒストリーを引き、`resolver::resolve` で ViewMode を決める
//! 3. publish: `ArchivalView` を `watch` チャネルに流す
//!
//! # 後勝ち（last-write-wins）
//! load はリクエスト番号を払い出してから await する。決着時に自分より新しい
//! リクエストが開始されていれば、結果は捨てて `Settled::Superseded` を返す。
//! 番号の比較と結果の反映は同じロックの中で行う（ロックは await をまたがない）。

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::resolver::resolve;
use super::view::ArchivalView;
use crate::domain::{ArchiveError, FeatureFlags, FileSource, HistoryId};
use crate::ports::{FileSourceLister, HistoryStore};

/// load 1 回分の決着
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settled {
    /// この結果が画面に反映された
    Applied(ArchivalView),
    /// 新しいリクエストが先に始まっていたので破棄した
    Superseded { request: u64, newest: u64 },
}

/// 最後に反映された取得結果
struct Applied {
    request: u64,
    sources: Vec<FileSource>,
}

pub struct ArchiveWizard<S, L> {
    history_id: HistoryId,
    store: S,
    lister: L,
    flags: FeatureFlags,
    latest_request: AtomicU64,
    applied: Mutex<Option<Applied>>,
    view_tx: watch::Sender<Option<ArchivalView>>,
}

impl<S: HistoryStore, L: FileSourceLister> ArchiveWizard<S, L> {
    pub fn new(history_id: HistoryId, store: S, lister: L, flags: FeatureFlags) -> Self {
        let (view_tx, _) = watch::channel(None);
        Self {
            history_id,
            store,
            lister,
            flags,
            latest_request: AtomicU64::new(0),
            applied: Mutex::new(None),
            view_tx,
        }
    }

    /// 描画側の購読口。最初の load が決着するまでは `None`。
    pub fn subscribe(&self) -> watch::Receiver<Option<ArchivalView>> {
        self.view_tx.subscribe()
    }

    pub fn current(&self) -> Option<ArchivalView> {
        self.view_tx.borrow().clone()
    }

    /// ソース一覧を取り直して解決する
    pub async fn load(&self) -> Result<Settled, ArchiveError> {
        let request = self.latest_request.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(history_id = %self.history_id, request, "fetching file sources");

        let sources = match self.lister.list_file_sources().await {
            Ok(sources) => sources,
            Err(err) => {
                warn!(history_id = %self.history_id, request, error = %err,
                    "file source listing failed, continuing with none");
                Vec::new()
            }
        };

        let mut applied = self.applied.lock().unwrap_or_else(PoisonError::into_inner);
        let newest = self.latest_request.load(Ordering::SeqCst);
        if request != newest {
            debug!(request, newest, "discarding superseded file source listing");
            return Ok(Settled::Superseded { request, newest });
        }

        // ヒストリーが見つからなくても一覧は残す。後の refresh_history で使える
        let applied = applied.insert(Applied { request, sources });
        let view = self.resolve_and_publish(&applied.sources)?;
        Ok(Settled::Applied(view))
    }

    /// ヒストリー側が変わったとき（archived の反転など）に再解決する
    ///
    /// ソース一覧は直近に反映した結果を使い回す。まだ一度も load が
    /// 決着していなければ何も出さずに `None` を返す。
    pub fn refresh_history(&self) -> Result<Option<ArchivalView>, ArchiveError> {
        let applied = self.applied.lock().unwrap_or_else(PoisonError::into_inner);
        match applied.as_ref() {
            Some(applied) => {
                debug!(request = applied.request, "re-resolving with cached file sources");
                self.resolve_and_publish(&applied.sources).map(Some)
            }
            None => Ok(None),
        }
    }

    /// ストアの変更通知を受けるたびに `refresh_history` する
    ///
    /// 送信側（ストア）が drop されるまで戻らない。対象のヒストリーが
    /// まだストアにない間は「未着」として待ち続ける。
    pub async fn follow(&self, mut changes: watch::Receiver<u64>) -> Result<(), ArchiveError> {
        while changes.changed().await.is_ok() {
            match self.refresh_history() {
                Ok(_) => {}
                Err(ArchiveError::HistoryNotFound(id)) => {
                    debug!(history_id = %id, "history not in store yet, waiting");
                }
                Err(err) => return Err(err),
            }
        }
        Ok(())
    }

    fn resolve_and_publish(&self, sources: &[FileSource]) -> Result<ArchivalView, ArchiveError> {
        let history = self
            .store
            .get_history_by_id(&self.history_id)
            .ok_or_else(|| ArchiveError::HistoryNotFound(self.history_id.clone()))?;

        let mode = resolve(&history, sources, self.flags);
        let view = ArchivalView::render(&history, mode, sources);

        let previous = self.view_tx.send_replace(Some(view.clone()));
        if previous.map(|v| v.mode) != Some(mode) {
            info!(history_id = %self.history_id, %mode, "archive wizard mode resolved");
        }
        Ok(view)
    }
}
