use std::path::Path;

use crate::locale::{self, Locale};

/// In-memory set of the locales currently present for one repository.
///
/// Invariant: a locale is in the registry iff its file exists on disk.
/// The set is rebuilt by [`reload`](Self::reload) on construction and
/// after every download batch; between reloads it is kept consistent by
/// routing file creation and deletion through the owning repository.
#[derive(Debug, Default)]
pub struct LocaleRegistry {
    locales: Vec<Locale>,
}

impl LocaleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear and repopulate from the repository directory. File names not
    /// matching the local pattern are ignored, never deleted. A missing
    /// directory leaves the registry empty.
    pub fn reload(&mut self, dir: &Path) {
        self.locales.clear();

        let Ok(entries) = std::fs::read_dir(dir) else {
            return;
        };
        for entry in entries.flatten() {
            if let Some(name) = entry.file_name().to_str()
                && let Some(found) = locale::parse_file_name(name)
            {
                self.locales.push(found);
            }
        }
        self.locales.sort();
    }

    /// Snapshot of the registered locales, sorted.
    pub fn list(&self) -> &[Locale] {
        &self.locales
    }

    pub fn contains(&self, locale: &Locale) -> bool {
        self.locales.contains(locale)
    }

    pub fn add(&mut self, locale: Locale) {
        if !self.contains(&locale) {
            self.locales.push(locale);
            self.locales.sort();
        }
    }

    pub fn remove(&mut self, locale: &Locale) {
        self.locales.retain(|known| known != locale);
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}
