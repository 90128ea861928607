//! StaticFileSourceLister - 開発・テスト用のファイルソース一覧
//!
//! 応答をキューに積んでおき、呼び出しごとに 1 件ずつ返す。
//! キューが空なら既定の応答を返す。遅延も指定できるので、
//! 古いリクエストが後から決着するケースを再現できる。

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::{ArchiveError, FileSource};
use crate::ports::FileSourceLister;

#[derive(Debug, Clone)]
enum Reply {
    Sources(Vec<FileSource>),
    Fail(String),
}

impl Reply {
    fn into_result(self) -> Result<Vec<FileSource>, ArchiveError> {
        match self {
            Reply::Sources(sources) => Ok(sources),
            Reply::Fail(msg) => Err(ArchiveError::Unavailable(msg)),
        }
    }
}

pub struct StaticFileSourceLister {
    default: Reply,
    scripted: Mutex<VecDeque<(Duration, Reply)>>,
    calls: AtomicUsize,
}

impl StaticFileSourceLister {
    /// 常に `sources` を返す
    pub fn new(sources: Vec<FileSource>) -> Self {
        Self::with_default(Reply::Sources(sources))
    }

    /// 常に失敗する
    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_default(Reply::Fail(message.into()))
    }

    fn with_default(default: Reply) -> Self {
        Self {
            default,
            scripted: Mutex::new(VecDeque::new()),
            calls: AtomicUsize::new(0),
        }
    }

    /// 次の呼び出しに `delay` 後に `sources` を返させる
    pub fn push_sources(&self, delay: Duration, sources: Vec<FileSource>) {
        self.push(delay, Reply::Sources(sources));
    }

    /// 次の呼び出しを `delay` 後に失敗させる
    pub fn push_failure(&self, delay: Duration, message: impl Into<String>) {
        self.push(delay, Reply::Fail(message.into()));
    }

    fn push(&self, delay: Duration, reply: Reply) {
        self.scripted
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back((delay, reply));
    }

    /// これまでの呼び出し回数
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl FileSourceLister for StaticFileSourceLister {
    async fn list_file_sources(&self) -> Result<Vec<FileSource>, ArchiveError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        let next = self
            .scripted
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front();
        let (delay, reply) = next.unwrap_or_else(|| (Duration::ZERO, self.default.clone()));
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        reply.into_result()
    }
}
