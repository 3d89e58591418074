use std::fmt;

/// Tag used when a resource file has no locale suffix (the base
/// `strings.xml`, as opposed to a `values-xx` directory).
pub const DEFAULT_TAG: &str = "default";

/// A locale tag such as `"es"` or `"zh-rTW"`.
///
/// Two independent naming patterns produce locales and must agree:
/// - remote paths: `res/values(-<tag>)?/strings.xml`
/// - local files: `strings(-<tag>)?.xml`
///
/// Both map an absent suffix to [`DEFAULT_TAG`] through [`from_suffix`],
/// so the rule cannot drift between them.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Locale(String);

#[derive(Debug, thiserror::Error)]
#[error("invalid locale tag: {0:?}")]
pub struct LocaleError(String);

impl Locale {
    /// Validate a tag. Accepts word characters and hyphens, the same
    /// character class both naming patterns match.
    pub fn new(tag: &str) -> Result<Self, LocaleError> {
        if tag.is_empty() || !tag.chars().all(is_tag_char) {
            return Err(LocaleError(tag.to_owned()));
        }
        Ok(Self(tag.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_default(&self) -> bool {
        self.0 == DEFAULT_TAG
    }
}

impl Default for Locale {
    /// The sentinel locale for suffix-less resource files.
    fn default() -> Self {
        Self(DEFAULT_TAG.to_owned())
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_tag_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// The shared suffix rule: no suffix group means the default locale.
fn from_suffix(suffix: Option<&str>) -> Option<Locale> {
    match suffix {
        None => Some(Locale::default()),
        Some(tag) => Locale::new(tag).ok(),
    }
}

/// Extract the locale from a remote resource path ending in
/// `res/values(-<tag>)?/strings.xml`. Remote search results are a superset
/// match, so paths that do not fit the pattern yield `None`.
pub fn parse_remote_path(path: &str) -> Option<Locale> {
    let mut segments = path.rsplit('/');

    if segments.next()? != "strings.xml" {
        return None;
    }

    let values = segments.next()?;
    if segments.next()? != "res" {
        return None;
    }

    if values == "values" {
        from_suffix(None)
    } else {
        from_suffix(Some(values.strip_prefix("values-")?))
    }
}

/// Extract the locale from a local file name of the form
/// `strings(-<tag>)?.xml`. Unrelated files yield `None`.
pub fn parse_file_name(name: &str) -> Option<Locale> {
    if name == "strings.xml" {
        return from_suffix(None);
    }

    let tag = name.strip_prefix("strings-")?.strip_suffix(".xml")?;
    from_suffix(Some(tag))
}

/// Inverse of [`parse_file_name`]: the on-disk file name for a locale.
pub fn file_name(locale: &Locale) -> String {
    if locale.is_default() {
        "strings.xml".to_owned()
    } else {
        format!("strings-{locale}.xml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_round_trips_every_tag() {
        for tag in ["default", "es", "pt-rBR", "zh-rTW", "sr_Latn"] {
            let locale = Locale::new(tag).unwrap();
            assert_eq!(parse_file_name(&file_name(&locale)), Some(locale));
        }
    }

    #[test]
    fn default_locale_maps_to_plain_strings_xml() {
        assert_eq!(file_name(&Locale::default()), "strings.xml");
        assert_eq!(parse_file_name("strings.xml"), Some(Locale::default()));
    }

    #[test]
    fn parses_remote_default_values_directory() {
        assert_eq!(
            parse_remote_path("res/values/strings.xml"),
            Some(Locale::default())
        );
    }

    #[test]
    fn parses_remote_locale_suffix() {
        let locale = parse_remote_path("app/src/main/res/values-es/strings.xml").unwrap();
        assert_eq!(locale.as_str(), "es");
    }

    #[test]
    fn rejects_remote_path_outside_res_tree() {
        assert_eq!(parse_remote_path("values-es/strings.xml"), None);
        assert_eq!(parse_remote_path("res/layout/strings.xml"), None);
        assert_eq!(parse_remote_path("res/values/colors.xml"), None);
    }

    #[test]
    fn rejects_remote_suffix_with_invalid_characters() {
        assert_eq!(parse_remote_path("res/values-b+sr+Latn/strings.xml"), None);
        assert_eq!(parse_remote_path("res/values-/strings.xml"), None);
    }

    #[test]
    fn rejects_unrelated_file_names() {
        assert_eq!(parse_file_name("notes.txt"), None);
        assert_eq!(parse_file_name("strings-es.backup"), None);
        assert_eq!(parse_file_name("mystrings.xml"), None);
    }

    #[test]
    fn rejects_empty_and_invalid_tags() {
        assert!(Locale::new("").is_err());
        assert!(Locale::new("es es").is_err());
        assert!(Locale::new("a/b").is_err());
    }
}
