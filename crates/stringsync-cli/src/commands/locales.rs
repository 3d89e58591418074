use anyhow::{Result, bail};

use stringsync::{Locale, StringsRepo};

pub fn run(
    mut repo: StringsRepo,
    add: Option<&str>,
    remove: Option<&str>,
) -> Result<()> {
    if let Some(tag) = add {
        let locale = Locale::new(tag)?;
        if !repo.create_locale(&locale) {
            bail!("could not create locale {tag}");
        }
        println!("Created {locale} for {}", repo.identity());
        return Ok(());
    }

    if let Some(tag) = remove {
        let locale = Locale::new(tag)?;
        repo.delete_locale(&locale);
        println!("Removed {locale} from {}", repo.identity());
        return Ok(());
    }

    if repo.is_empty() {
        println!("No locales cached for {}", repo.identity());
        return Ok(());
    }

    for locale in repo.locales() {
        let marker = if repo.has_modified_locale(locale) {
            " (modified)"
        } else {
            ""
        };
        println!("{locale}{marker}");
    }

    Ok(())
}
