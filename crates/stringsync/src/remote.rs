use std::path::Path;

use crate::identity::RepoIdentity;

/// Errors from the remote collaborators (index queries and file fetches).
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    #[error("file not found: {0}")]
    NotFound(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(String),
}

/// A file reported by the remote index. Paths are relative to the
/// repository root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteFile {
    pub path: String,
}

/// Queries a repository's file tree.
#[async_trait::async_trait]
pub trait RemoteIndex: Send + Sync {
    /// Find files whose content contains `content_marker` and whose file
    /// name matches `filename`, across the whole repository. The result is
    /// a superset match; callers apply their own path patterns on top.
    async fn find_files(
        &self,
        identity: &RepoIdentity,
        content_marker: &str,
        filename: &str,
    ) -> Result<Vec<RemoteFile>, RemoteError>;
}

/// Downloads single repository files to local paths.
#[async_trait::async_trait]
pub trait FileFetcher: Send + Sync {
    /// Download `remote_path` to `dest`, overwriting it unconditionally.
    /// Parent directories are created as needed.
    async fn fetch(
        &self,
        identity: &RepoIdentity,
        remote_path: &str,
        dest: &Path,
    ) -> Result<(), RemoteError>;
}
