use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::identity::RepoIdentity;
use crate::locale::{self, Locale};
use crate::resources::{ResourceFile, ResourceFormat};

/// Maps a repository's locales to files under
/// `<cache-root>/<owner>/<repo>` and answers existence and modification
/// queries. Naming is deterministic; only `delete_all` mutates the tree.
pub struct LocaleFileStore {
    dir: PathBuf,
    format: Arc<dyn ResourceFormat>,
}

impl LocaleFileStore {
    pub fn new(
        cache_root: &Path,
        identity: &RepoIdentity,
        format: Arc<dyn ResourceFormat>,
    ) -> Self {
        Self {
            dir: cache_root.join(identity.owner()).join(identity.repo()),
            format,
        }
    }

    /// The repository's directory in the cache.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The deterministic path for a locale's file. No I/O.
    pub fn resolve_path(&self, locale: &Locale) -> PathBuf {
        self.dir.join(locale::file_name(locale))
    }

    pub fn exists(&self, locale: &Locale) -> bool {
        self.resolve_path(locale).is_file()
    }

    /// Open the resource file for a locale through the format collaborator.
    pub fn open(&self, locale: &Locale) -> Option<Box<dyn ResourceFile>> {
        self.format.open(&self.resolve_path(locale))
    }

    /// Content-based modification check. Fails closed: a missing or
    /// unreadable file is reported as unmodified.
    pub fn is_modified(&self, locale: &Locale) -> bool {
        if !self.exists(locale) {
            return false;
        }
        self.open(locale).is_some_and(|file| file.was_modified())
    }

    /// Remove every file in the repository directory, the directory
    /// itself, and the owner directory if it is now empty. Not
    /// transactional: a failure mid-way leaves a partially deleted tree.
    pub fn delete_all(&self) -> io::Result<()> {
        for entry in std::fs::read_dir(&self.dir)? {
            std::fs::remove_file(entry?.path())?;
        }
        std::fs::remove_dir(&self.dir)?;

        if let Some(owner_dir) = self.dir.parent()
            && std::fs::read_dir(owner_dir)?.next().is_none()
        {
            std::fs::remove_dir(owner_dir)?;
        }

        Ok(())
    }
}
