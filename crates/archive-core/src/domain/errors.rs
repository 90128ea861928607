//! Errors - エラー型
//!
//! resolver 自体は全域関数なのでエラーを持たない。
//! ここに並ぶのは ports / impls / config の境界で起きるものだけ。

use super::ids::HistoryId;

/// ArchiveError は archive-core の境界エラー
#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    #[error("history not found: {0}")]
    HistoryNotFound(HistoryId),

    #[error("GET {url} returned HTTP {status}")]
    Http { status: u16, url: String },

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("file source listing unavailable: {0}")]
    Unavailable(String),
}
