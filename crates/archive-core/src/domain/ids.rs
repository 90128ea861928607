//! Domain identifiers (strongly-typed IDs).
//!
//! サーバーが払い出す文字列 ID をそのまま保持します。
//! Phantom type パターンで `HistoryId` と `FileSourceId` を区別し、
//! 取り違えをコンパイル時に防ぎます。

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// IdMarker は各 ID 型のマーカー trait
pub trait IdMarker: Send + Sync + 'static {
    /// Debug 出力で使う型名（例: "HistoryId"）
    fn kind() -> &'static str;
}

/// ジェネリック ID 型
///
/// 中身はサーバー側の不透明な文字列。`T` は実行時には使わない。
pub struct Id<T: IdMarker> {
    value: String,
    _marker: PhantomData<T>,
}

impl<T: IdMarker> Id<T> {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            _marker: PhantomData,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

// derive だと `T: Clone` などを要求してしまうので手で実装する
impl<T: IdMarker> Clone for Id<T> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<T: IdMarker> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: IdMarker> Eq for Id<T> {}

impl<T: IdMarker> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T: IdMarker> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", T::kind(), self.value)
    }
}

impl<T: IdMarker> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl<T: IdMarker> From<&str> for Id<T> {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl<T: IdMarker> From<String> for Id<T> {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl<T: IdMarker> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

impl<'de, T: IdMarker> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::new)
    }
}

// ========================================
// マーカー型の定義
// ========================================

/// History のマーカー型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HistoryMarker;

impl IdMarker for HistoryMarker {
    fn kind() -> &'static str {
        "HistoryId"
    }
}

/// FileSource のマーカー型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileSourceMarker;

impl IdMarker for FileSourceMarker {
    fn kind() -> &'static str {
        "FileSourceId"
    }
}

pub type HistoryId = Id<HistoryMarker>;
pub type FileSourceId = Id<FileSourceMarker>;
