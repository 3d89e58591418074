use std::collections::HashSet;
use std::path::Path;
use std::sync::Mutex;

use crate::identity::RepoIdentity;
use crate::progress::ProgressHandler;
use crate::remote::{FileFetcher, RemoteError, RemoteFile, RemoteIndex};

/// In-memory remote repository for tests: serves a fixed file listing and
/// file contents, implementing both collaborator traits. Listing order is
/// insertion order, mirroring a stable remote response.
#[derive(Default)]
pub struct InMemoryRemote {
    files: Vec<(String, String)>,
    fail_fetch: HashSet<String>,
    query_error: Option<String>,
}

impl InMemoryRemote {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&mut self, path: impl Into<String>, content: impl Into<String>) {
        self.files.push((path.into(), content.into()));
    }

    /// Make fetching this path fail with a network error.
    pub fn fail_fetch(&mut self, path: impl Into<String>) {
        self.fail_fetch.insert(path.into());
    }

    /// Make the index query fail with a parse error.
    pub fn fail_query(&mut self, message: impl Into<String>) {
        self.query_error = Some(message.into());
    }
}

#[async_trait::async_trait]
impl RemoteIndex for InMemoryRemote {
    async fn find_files(
        &self,
        _identity: &RepoIdentity,
        content_marker: &str,
        filename: &str,
    ) -> Result<Vec<RemoteFile>, RemoteError> {
        if let Some(message) = &self.query_error {
            return Err(RemoteError::Parse(message.clone()));
        }

        Ok(self
            .files
            .iter()
            .filter(|(path, content)| {
                path.rsplit('/').next() == Some(filename) && content.contains(content_marker)
            })
            .map(|(path, _)| RemoteFile { path: path.clone() })
            .collect())
    }
}

#[async_trait::async_trait]
impl FileFetcher for InMemoryRemote {
    async fn fetch(
        &self,
        _identity: &RepoIdentity,
        remote_path: &str,
        dest: &Path,
    ) -> Result<(), RemoteError> {
        if self.fail_fetch.contains(remote_path) {
            return Err(RemoteError::Network("simulated transport failure".into()));
        }

        let content = self
            .files
            .iter()
            .find(|(path, _)| path == remote_path)
            .map(|(_, content)| content)
            .ok_or_else(|| RemoteError::NotFound(remote_path.to_owned()))?;

        if let Some(parent) = dest.parent() {
            std::fs::create_dir_all(parent).map_err(|e| RemoteError::Io(e.to_string()))?;
        }
        std::fs::write(dest, content).map_err(|e| RemoteError::Io(e.to_string()))
    }
}

/// Progress handler that records every callback for assertions.
#[derive(Default)]
pub struct RecordingProgress {
    updates: Mutex<Vec<(String, String)>>,
    finished: Mutex<Vec<(Option<String>, bool)>>,
}

impl RecordingProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn updates(&self) -> Vec<(String, String)> {
        self.updates.lock().unwrap().clone()
    }

    pub fn finished(&self) -> Vec<(Option<String>, bool)> {
        self.finished.lock().unwrap().clone()
    }
}

impl ProgressHandler for RecordingProgress {
    fn on_update(&self, title: &str, detail: &str) {
        self.updates
            .lock()
            .unwrap()
            .push((title.to_owned(), detail.to_owned()));
    }

    fn on_finished(&self, message: Option<&str>, success: bool) {
        self.finished
            .lock()
            .unwrap()
            .push((message.map(str::to_owned), success));
    }
}
