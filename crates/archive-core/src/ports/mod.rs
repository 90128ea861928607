//! Ports - 抽象化レイヤー
//!
//! wizard が依存する外部の協調者を trait として定義します。
//! - ヒストリーストア（クライアント側の状態）
//! - ファイルソース一覧（サーバーの `/api/remote_files/plugins`）

pub mod file_sources;
pub mod history_store;

pub use self::file_sources::FileSourceLister;
pub use self::history_store::HistoryStore;
