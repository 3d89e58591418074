use anyhow::Result;

use stringsync::RepoCatalog;

pub fn run(catalog: &RepoCatalog) -> Result<()> {
    let urls = catalog.repository_urls();

    if urls.is_empty() {
        println!("No cached repositories.");
        return Ok(());
    }

    for url in urls {
        println!("{url}");
    }

    Ok(())
}
