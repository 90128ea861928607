//! FileSourceLister port - リモートファイルソース一覧の取得
//!
//! 本番は HTTP（`impls::GalaxyClient`）、テストは `impls::StaticFileSourceLister`。

use async_trait::async_trait;

use crate::domain::{ArchiveError, FileSource};

/// FileSourceLister は現在利用可能なファイルソースを返す
///
/// # 設計原則
/// - 空の一覧は正常系（「書き込み可能なソースなし」と同じ扱い）
/// - 失敗は `Err` で返すだけ。空リストへの置き換えは wizard 側で行う
#[async_trait]
pub trait FileSourceLister: Send + Sync {
    async fn list_file_sources(&self) -> Result<Vec<FileSource>, ArchiveError>;
}

#[async_trait]
impl<L: FileSourceLister + ?Sized> FileSourceLister for std::sync::Arc<L> {
    async fn list_file_sources(&self) -> Result<Vec<FileSource>, ArchiveError> {
        (**self).list_file_sources().await
    }
}
