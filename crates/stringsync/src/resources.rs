use std::path::{Path, PathBuf};

/// Opens resource files for a repository's locale files.
///
/// The XML model itself lives outside the sync core; the core only needs
/// to create empty files, delete them, and ask whether the content was
/// edited since it was downloaded.
pub trait ResourceFormat: Send + Sync {
    /// Open a handle for the file at `path`. Returns `None` when the
    /// format cannot produce a handle for the location at all.
    fn open(&self, path: &Path) -> Option<Box<dyn ResourceFile>>;
}

/// Handle to one resource file on disk.
pub trait ResourceFile {
    /// Persist the file. Writes a fresh skeleton when nothing exists yet;
    /// an existing file is left untouched. Returns false on I/O failure.
    fn save(&self) -> bool;

    /// Remove the file. Missing files are not an error.
    fn delete(&self);

    /// Whether the content differs from the originally downloaded file.
    /// The flag is derived from content, never tracked separately.
    fn was_modified(&self) -> bool;
}

const SKELETON: &str = "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<resources>\n</resources>\n";

/// Editors mark changed entries with this attribute inside the XML.
const MODIFIED_MARKER: &str = "modified=\"true\"";

/// Minimal `strings.xml` handling: empty-file creation and marker-based
/// modification detection.
pub struct XmlStrings;

impl ResourceFormat for XmlStrings {
    fn open(&self, path: &Path) -> Option<Box<dyn ResourceFile>> {
        Some(Box::new(XmlStringsFile {
            path: path.to_path_buf(),
        }))
    }
}

struct XmlStringsFile {
    path: PathBuf,
}

impl ResourceFile for XmlStringsFile {
    fn save(&self) -> bool {
        if self.path.is_file() {
            return true;
        }
        if let Some(parent) = self.path.parent()
            && std::fs::create_dir_all(parent).is_err()
        {
            return false;
        }
        std::fs::write(&self.path, SKELETON).is_ok()
    }

    fn delete(&self) {
        let _ = std::fs::remove_file(&self.path);
    }

    fn was_modified(&self) -> bool {
        // Fails closed: unreadable or missing files count as unmodified.
        match std::fs::read_to_string(&self.path) {
            Ok(content) => content.contains(MODIFIED_MARKER),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("stringsync-resources-{name}"));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn save_writes_skeleton_for_new_file() {
        let dir = temp_dir("skeleton");
        let path = dir.join("strings.xml");

        let file = XmlStrings.open(&path).unwrap();
        assert!(file.save());
        assert!(std::fs::read_to_string(&path).unwrap().contains("<resources>"));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn save_leaves_existing_content_untouched() {
        let dir = temp_dir("existing");
        let path = dir.join("strings.xml");
        std::fs::write(&path, "<resources><string name=\"a\">x</string></resources>").unwrap();

        let file = XmlStrings.open(&path).unwrap();
        assert!(file.save());
        assert!(std::fs::read_to_string(&path).unwrap().contains("name=\"a\""));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn modification_is_detected_from_content() {
        let dir = temp_dir("modified");
        let path = dir.join("strings.xml");

        std::fs::write(&path, "<resources><string name=\"a\">x</string></resources>").unwrap();
        assert!(!XmlStrings.open(&path).unwrap().was_modified());

        std::fs::write(
            &path,
            "<resources><string name=\"a\" modified=\"true\">y</string></resources>",
        )
        .unwrap();
        assert!(XmlStrings.open(&path).unwrap().was_modified());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_file_counts_as_unmodified() {
        let dir = temp_dir("missing");
        let file = XmlStrings.open(&dir.join("strings.xml")).unwrap();
        assert!(!file.was_modified());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn delete_ignores_missing_file() {
        let dir = temp_dir("delete");
        let file = XmlStrings.open(&dir.join("strings.xml")).unwrap();
        file.delete();

        let _ = std::fs::remove_dir_all(&dir);
    }
}
