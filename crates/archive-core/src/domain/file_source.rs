//! Remote file sources (storage backends) as listed by the server.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::FileSourceId;

/// Plugin type of a file source.
///
/// Only a handful of types are named; everything else round-trips through
/// `Other` so a new server-side plugin never breaks decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSourceKind {
    Posix,
    S3fs,
    Ftp,
    WebDav,
    Dropbox,
    GoogleDrive,
    Other(String),
}

impl FileSourceKind {
    pub fn as_str(&self) -> &str {
        match self {
            FileSourceKind::Posix => "posix",
            FileSourceKind::S3fs => "s3fs",
            FileSourceKind::Ftp => "ftp",
            FileSourceKind::WebDav => "webdav",
            FileSourceKind::Dropbox => "dropbox",
            FileSourceKind::GoogleDrive => "googledrive",
            FileSourceKind::Other(s) => s,
        }
    }
}

impl From<&str> for FileSourceKind {
    fn from(value: &str) -> Self {
        match value {
            "posix" => FileSourceKind::Posix,
            "s3fs" => FileSourceKind::S3fs,
            "ftp" => FileSourceKind::Ftp,
            "webdav" => FileSourceKind::WebDav,
            "dropbox" => FileSourceKind::Dropbox,
            "googledrive" => FileSourceKind::GoogleDrive,
            other => FileSourceKind::Other(other.to_string()),
        }
    }
}

impl fmt::Display for FileSourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FileSourceKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FileSourceKind {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(FileSourceKind::from(s.as_str()))
    }
}

/// One entry of `GET /api/remote_files/plugins`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSource {
    pub id: FileSourceId,
    #[serde(rename = "type")]
    pub kind: FileSourceKind,
    pub uri_root: String,
    pub label: String,
    #[serde(default)]
    pub doc: Option<String>,
    #[serde(default)]
    pub writable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires_roles: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires_groups: Option<String>,
}

impl FileSource {
    /// A posix source with `gxfiles://<id>` as root, the shape most fixtures need.
    pub fn posix(id: &str, writable: bool) -> Self {
        Self {
            id: FileSourceId::new(id),
            kind: FileSourceKind::Posix,
            uri_root: format!("gxfiles://{id}"),
            label: id.to_string(),
            doc: None,
            writable,
            requires_roles: None,
            requires_groups: None,
        }
    }
}

/// True when at least one source accepts writes.
pub fn any_writable(sources: &[FileSource]) -> bool {
    sources.iter().any(|s| s.writable)
}
