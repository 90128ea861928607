//! App - アプリケーション層
//!
//! ports を組み合わせて wizard のロジックを実装します。
//!
//! # 主要コンポーネント
//! - **resolver**: ViewMode を決める純粋関数
//! - **view**: 描画層へ渡すビューモデルと安定 ID
//! - **ArchiveWizard**: 取得 → 解決 → 配信（後勝ち）

pub mod resolver;
pub mod view;
pub mod wizard;

pub use self::resolver::resolve;
pub use self::view::{ArchivalOption, ArchivalView, OptionTab, ViewBody};
pub use self::wizard::{ArchiveWizard, Settled};
