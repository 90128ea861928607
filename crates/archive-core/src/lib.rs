//! archive-core
//!
//! History archive wizard の中核。どのモードで wizard を出すかを決める。
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（ids, history, file_source, flags, view_mode, errors）
//! - **ports**: 抽象化レイヤー（HistoryStore, FileSourceLister）
//! - **impls**: 実装（GalaxyClient, InMemoryHistoryStore, StaticFileSourceLister）
//! - **app**: アプリケーションロジック（resolver, view, wizard）
//! - **config**: クライアント設定（TOML + 環境変数）

pub mod app;
pub mod config;
pub mod domain;
pub mod impls;
pub mod ports;

pub use app::{ArchivalView, ArchiveWizard, Settled, resolve};
pub use config::ClientConfig;
pub use domain::{ArchiveError, FeatureFlags, FileSource, HistoryId, HistorySummary, ViewMode};
