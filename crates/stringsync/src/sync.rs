use crate::locale::{self, Locale};
use crate::progress::{CancelToken, ProgressHandler};
use crate::remote::RemoteError;
use crate::repo::StringsRepo;

/// Content token the remote search matches inside candidate files.
const CONTENT_MARKER: &str = "resources";
/// File name the remote search matches.
const FILENAME: &str = "strings.xml";

/// One remote file selected for download, in remote response order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanItem {
    pub remote_path: String,
    pub locale: Locale,
}

/// A download that failed during the sequential phase.
#[derive(Debug, Clone)]
pub struct SyncFailure {
    pub locale: Locale,
    pub reason: String,
}

/// Structured outcome of one sync invocation, complementing the
/// callback-based progress contract for library callers.
#[derive(Debug, Default)]
pub struct SyncReport {
    /// Locales downloaded in this run, in download order.
    pub downloaded: Vec<Locale>,
    /// Per-item failures; the batch continues past them.
    pub failures: Vec<SyncFailure>,
    /// Whether the run stopped early on the cancellation token.
    pub cancelled: bool,
}

impl SyncReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty() && !self.cancelled
    }
}

impl StringsRepo {
    /// Two-phase sync: scan the remote repository for `strings.xml` files,
    /// then download each selected file sequentially into the local cache.
    ///
    /// `handler.on_finished` fires exactly once per invocation; collaborator
    /// errors become terminal messages and are never raised out of here.
    /// Locally modified locales are skipped unless `overwrite` is set. The
    /// cancellation token is honored between sequential steps; files already
    /// downloaded before a cancel stay in place.
    pub async fn sync(
        &mut self,
        overwrite: bool,
        handler: &dyn ProgressHandler,
        cancel: &CancelToken,
    ) -> SyncReport {
        handler.on_update(
            "Scanning repository",
            &format!("Looking for strings.xml files in {}", self.identity()),
        );

        let items = match self.scan(overwrite).await {
            Ok(items) => items,
            Err(err) => {
                handler.on_finished(Some(&err.to_string()), false);
                return SyncReport::default();
            }
        };

        if items.is_empty() {
            handler.on_finished(Some("no strings.xml files found"), false);
            return SyncReport::default();
        }

        let total = items.len();
        let mut report = SyncReport::default();

        for (index, item) in items.iter().enumerate() {
            if cancel.is_cancelled() {
                report.cancelled = true;
                break;
            }

            handler.on_update(
                &format!("Downloading strings ({}/{total})", index + 1),
                &format!("Downloading locale {}", item.locale),
            );

            let dest = self.store.resolve_path(&item.locale);
            match self
                .fetcher
                .fetch(self.identity(), &item.remote_path, &dest)
                .await
            {
                Ok(()) => report.downloaded.push(item.locale.clone()),
                Err(err) => report.failures.push(SyncFailure {
                    locale: item.locale.clone(),
                    reason: err.to_string(),
                }),
            }
        }

        // Authoritative re-sync from disk, also after partial runs.
        self.registry.reload(self.store.dir());

        if report.cancelled {
            handler.on_finished(Some("sync cancelled"), false);
        } else if report.failures.is_empty() {
            handler.on_finished(None, true);
        } else {
            let message = format!("downloaded {} of {total} locales", report.downloaded.len());
            handler.on_finished(Some(&message), false);
        }

        report
    }

    /// Scan phase: query the remote index, keep paths matching the
    /// values-directory pattern, and drop locales with local edits unless
    /// `overwrite` is requested. Remote response order is preserved.
    async fn scan(&self, overwrite: bool) -> Result<Vec<ScanItem>, RemoteError> {
        let found = self
            .index
            .find_files(self.identity(), CONTENT_MARKER, FILENAME)
            .await?;

        let mut items = Vec::new();
        for file in found {
            let Some(matched) = locale::parse_remote_path(&file.path) else {
                continue;
            };
            if overwrite || !self.has_modified_locale(&matched) {
                items.push(ScanItem {
                    remote_path: file.path,
                    locale: matched,
                });
            }
        }

        Ok(items)
    }
}
