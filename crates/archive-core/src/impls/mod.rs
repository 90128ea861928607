//! Impls - ports の実装
//!
//! - **GalaxyClient**: HTTP（本番用）
//! - **InMemoryHistoryStore**: クライアント側ストア
//! - **StaticFileSourceLister**: 固定応答（開発・テスト用）

pub mod galaxy_http;
pub mod inmem_history;
pub mod static_sources;

pub use self::galaxy_http::GalaxyClient;
pub use self::inmem_history::InMemoryHistoryStore;
pub use self::static_sources::StaticFileSourceLister;
