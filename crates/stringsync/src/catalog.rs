use std::path::{Path, PathBuf};

use crate::identity::RepoIdentity;

/// Enumerates every cached owner/repo pair under an explicit cache root.
///
/// The root is passed in rather than taken from a global, so tests run
/// against temporary directories. All listings are sorted
/// lexicographically; filesystem enumeration order is never exposed.
pub struct RepoCatalog {
    root: PathBuf,
}

impl RepoCatalog {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Owner names: the first directory level under the cache root.
    pub fn owners(&self) -> Vec<String> {
        subdirectories(&self.root)
    }

    /// Repository names cached for one owner.
    pub fn repositories(&self, owner: &str) -> Vec<String> {
        subdirectories(&self.root.join(owner))
    }

    /// Every cached repository as an identity, owners outermost.
    pub fn identities(&self) -> Vec<RepoIdentity> {
        self.owners()
            .iter()
            .flat_map(|owner| {
                self.repositories(owner)
                    .into_iter()
                    .map(|repo| RepoIdentity::new(owner, repo))
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    /// GitHub URLs for every cached repository.
    pub fn repository_urls(&self) -> Vec<String> {
        self.identities()
            .iter()
            .map(RepoIdentity::remote_url)
            .collect()
    }
}

fn subdirectories(dir: &Path) -> Vec<String> {
    let mut names = Vec::new();

    let Ok(entries) = std::fs::read_dir(dir) else {
        return names;
    };
    for entry in entries.flatten() {
        if entry.path().is_dir()
            && let Some(name) = entry.file_name().to_str()
        {
            names.push(name.to_owned());
        }
    }

    names.sort();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_root(name: &str) -> PathBuf {
        let root = std::env::temp_dir().join(format!("stringsync-catalog-{name}"));
        let _ = std::fs::remove_dir_all(&root);
        std::fs::create_dir_all(root.join("octocat/Hello-World")).unwrap();
        std::fs::create_dir_all(root.join("octocat/Spoon-Knife")).unwrap();
        std::fs::create_dir_all(root.join("acme/translations")).unwrap();
        std::fs::write(root.join("stray-file"), "").unwrap();
        root
    }

    #[test]
    fn owners_are_sorted_directories_only() {
        let root = seeded_root("owners");
        let catalog = RepoCatalog::new(&root);

        assert_eq!(catalog.owners(), vec!["acme", "octocat"]);

        let _ = std::fs::remove_dir_all(&root);
    }

    #[test]
    fn repositories_list_one_owner() {
        let root = seeded_root("repos");
        let catalog = RepoCatalog::new(&root);

        assert_eq!(
            catalog.repositories("octocat"),
            vec!["Hello-World", "Spoon-Knife"]
        );
        assert!(catalog.repositories("unknown").is_empty());

        let _ = std::fs::remove_dir_all(&root);
    }

    #[test]
    fn repository_urls_cross_owners_and_repos() {
        let root = seeded_root("urls");
        let catalog = RepoCatalog::new(&root);

        assert_eq!(
            catalog.repository_urls(),
            vec![
                "https://github.com/acme/translations",
                "https://github.com/octocat/Hello-World",
                "https://github.com/octocat/Spoon-Knife",
            ]
        );

        let _ = std::fs::remove_dir_all(&root);
    }

    #[test]
    fn missing_root_lists_nothing() {
        let catalog = RepoCatalog::new("/nonexistent/stringsync-catalog");
        assert!(catalog.owners().is_empty());
        assert!(catalog.repository_urls().is_empty());
    }
}
