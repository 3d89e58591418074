use std::io::Write;
use std::path::Path;

use futures::StreamExt;

use stringsync::{FileFetcher, RemoteError, RemoteFile, RemoteIndex, RepoIdentity, Throttle};

use crate::search::SearchResponse;

/// Called with `(bytes_received, total_bytes)` during a download,
/// throttled to at most one call per 75 ms.
pub type TransferObserver = Box<dyn Fn(u64, Option<u64>) + Send + Sync>;

/// Configuration for the GitHub collaborators.
///
/// The URL overrides default to the public endpoints; tests point them at
/// a mock server.
#[derive(Debug, Clone)]
pub struct GitHubClientConfig {
    pub token: Option<String>,
    pub branch: String,
    pub api_base_url: Option<String>,
    pub raw_base_url: Option<String>,
}

impl Default for GitHubClientConfig {
    fn default() -> Self {
        Self {
            token: None,
            branch: "master".into(),
            api_base_url: None,
            raw_base_url: None,
        }
    }
}

/// Talks to GitHub's code search API and raw file host, implementing the
/// sync core's remote collaborator traits.
pub struct GitHubClient {
    config: GitHubClientConfig,
    client: reqwest::Client,
    transfer: Option<TransferObserver>,
}

impl GitHubClient {
    pub fn new(config: GitHubClientConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
            transfer: None,
        }
    }

    /// Attach an observer for throttled transfer progress.
    pub fn with_transfer_observer(mut self, observer: TransferObserver) -> Self {
        self.transfer = Some(observer);
        self
    }

    fn api_base(&self) -> &str {
        self.config
            .api_base_url
            .as_deref()
            .unwrap_or("https://api.github.com")
    }

    fn raw_base(&self) -> &str {
        self.config
            .raw_base_url
            .as_deref()
            .unwrap_or("https://raw.githubusercontent.com")
    }

    fn build_request(&self, url: &str) -> reqwest::RequestBuilder {
        let mut req = self.client.get(url).header("User-Agent", "stringsync");

        if let Some(token) = &self.config.token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        req
    }
}

#[async_trait::async_trait]
impl RemoteIndex for GitHubClient {
    async fn find_files(
        &self,
        identity: &RepoIdentity,
        content_marker: &str,
        filename: &str,
    ) -> Result<Vec<RemoteFile>, RemoteError> {
        let url = format!(
            "{}/search/code?q={content_marker}+in:file+filename:{filename}+repo:{identity}",
            self.api_base(),
        );

        let response = self
            .build_request(&url)
            .send()
            .await
            .map_err(|e| RemoteError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(RemoteError::Network(format!(
                "HTTP {}: {}",
                response.status(),
                response.text().await.unwrap_or_else(|_| "unknown".into())
            )));
        }

        let search: SearchResponse = response
            .json()
            .await
            .map_err(|e| RemoteError::Parse(e.to_string()))?;

        Ok(search
            .items
            .into_iter()
            .map(|item| RemoteFile { path: item.path })
            .collect())
    }
}

#[async_trait::async_trait]
impl FileFetcher for GitHubClient {
    async fn fetch(
        &self,
        identity: &RepoIdentity,
        remote_path: &str,
        dest: &Path,
    ) -> Result<(), RemoteError> {
        let url = format!(
            "{}/{}/{}/{}/{remote_path}",
            self.raw_base(),
            identity.owner(),
            identity.repo(),
            self.config.branch,
        );

        let response = self
            .build_request(&url)
            .send()
            .await
            .map_err(|e| RemoteError::Network(e.to_string()))?;

        if response.status().as_u16() == 404 {
            return Err(RemoteError::NotFound(remote_path.to_owned()));
        }
        if !response.status().is_success() {
            return Err(RemoteError::Network(format!("HTTP {}", response.status())));
        }

        let total = response.content_length();

        if let Some(parent) = dest.parent() {
            std::fs::create_dir_all(parent).map_err(|e| RemoteError::Io(e.to_string()))?;
        }
        let mut file =
            std::fs::File::create(dest).map_err(|e| RemoteError::Io(e.to_string()))?;

        let mut received = 0u64;
        let mut throttle = Throttle::default();
        let mut stream = response.bytes_stream();

        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| RemoteError::Network(e.to_string()))?;
            file.write_all(&chunk)
                .map_err(|e| RemoteError::Io(e.to_string()))?;
            received += chunk.len() as u64;

            if let Some(observer) = &self.transfer
                && throttle.ready()
            {
                observer(received, total);
            }
        }

        Ok(())
    }
}
