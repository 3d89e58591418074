use std::io;
use std::path::Path;
use std::sync::Arc;

use crate::identity::RepoIdentity;
use crate::locale::Locale;
use crate::registry::LocaleRegistry;
use crate::remote::{FileFetcher, RemoteIndex};
use crate::resources::ResourceFormat;
use crate::store::LocaleFileStore;

/// A locally cached GitHub repository of `strings.xml` translation files.
///
/// On disk this is a directory tree keyed by owner and repository:
///
/// ```text
/// <cache-root>/octocat/Hello-World/strings.xml
/// <cache-root>/octocat/Hello-World/strings-es.xml
/// ```
///
/// Combines the file store and locale registry, and drives the two-phase
/// sync implemented in [`sync`](crate::sync). Callers must not run two
/// syncs for the same identity concurrently; the repo does not serialize
/// them itself.
pub struct StringsRepo {
    identity: RepoIdentity,
    pub(crate) store: LocaleFileStore,
    pub(crate) registry: LocaleRegistry,
    pub(crate) index: Arc<dyn RemoteIndex>,
    pub(crate) fetcher: Arc<dyn FileFetcher>,
}

impl StringsRepo {
    pub fn new(
        cache_root: &Path,
        identity: RepoIdentity,
        format: Arc<dyn ResourceFormat>,
        index: Arc<dyn RemoteIndex>,
        fetcher: Arc<dyn FileFetcher>,
    ) -> Self {
        let store = LocaleFileStore::new(cache_root, &identity, format);
        let mut registry = LocaleRegistry::new();
        registry.reload(store.dir());

        Self {
            identity,
            store,
            registry,
            index,
            fetcher,
        }
    }

    pub fn identity(&self) -> &RepoIdentity {
        &self.identity
    }

    /// Locales currently cached locally, sorted.
    pub fn locales(&self) -> &[Locale] {
        self.registry.list()
    }

    pub fn has_locale(&self, locale: &Locale) -> bool {
        self.store.exists(locale)
    }

    /// Whether the locale's file was edited since it was downloaded.
    /// Locales unknown to the registry are reported as unmodified.
    pub fn has_modified_locale(&self, locale: &Locale) -> bool {
        self.registry.contains(locale) && self.store.is_modified(locale)
    }

    /// Whether any cached locale was edited. Short-circuits on the first.
    pub fn any_modified(&self) -> bool {
        self.registry
            .list()
            .iter()
            .any(|locale| self.store.is_modified(locale))
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Create an empty resource file for a locale. Succeeds without
    /// touching anything when the locale already exists; returns false
    /// when the underlying save fails.
    pub fn create_locale(&mut self, locale: &Locale) -> bool {
        if self.has_locale(locale) {
            return true;
        }

        let Some(file) = self.store.open(locale) else {
            return false;
        };
        if !file.save() {
            return false;
        }

        self.registry.add(locale.clone());
        true
    }

    /// Delete a locale's file and drop it from the registry. No-op when
    /// the locale is absent.
    pub fn delete_locale(&mut self, locale: &Locale) {
        if self.has_locale(locale) {
            if let Some(file) = self.store.open(locale) {
                file.delete();
            }
            self.registry.remove(locale);
        }
    }

    /// Remove the repository from the cache: every locale file, the
    /// repository directory, and the owner directory if this was the
    /// owner's last repository.
    pub fn delete(self) -> io::Result<()> {
        self.store.delete_all()
    }
}
