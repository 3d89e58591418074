use anyhow::{Context, Result};

use stringsync::StringsRepo;

pub fn run(repo: StringsRepo) -> Result<()> {
    if repo.any_modified() {
        eprintln!(
            "warning: deleting locally modified translations for {}",
            repo.identity()
        );
    }

    let identity = repo.identity().clone();
    repo.delete()
        .with_context(|| format!("failed to delete {identity}"))?;

    println!("Deleted {identity}.");
    Ok(())
}
