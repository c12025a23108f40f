//! Persisted font preference.
//!
//! The settings file holds a single line, `family,size`, for example
//! `Times New Roman,14`. There is no escaping, so a family name may not
//! contain a comma.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::store::{FileStore, LocalFileStore};

/// Family used when no settings file exists.
pub const DEFAULT_FAMILY: &str = "Arial";

/// Point size used when no settings file exists.
pub const DEFAULT_SIZE: u32 = 12;

/// Settings file name, resolved against the working directory.
pub const DEFAULT_SETTINGS_FILE: &str = "plume_settings.txt";

/// A font family plus a positive point size.
///
/// Only constructed through validation, so every value can be written to
/// the settings file and read back unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontPreference {
    family: String,
    size: u32,
}

/// Checks that `family` fits in the `family,size` line as-is.
fn check_family(family: &str) -> Result<(), &'static str> {
    if family.is_empty() {
        return Err("family is empty");
    }
    if family.contains(',') {
        return Err("family contains a comma");
    }
    if family.chars().any(char::is_control) {
        return Err("family contains a control character");
    }
    if family.trim() != family {
        return Err("family has surrounding whitespace");
    }
    Ok(())
}

impl FontPreference {
    /// Validates and builds a preference.
    pub fn new(family: impl Into<String>, size: u32) -> Result<Self, FontError> {
        let family = family.into();
        if check_family(&family).is_err() {
            return Err(FontError::InvalidFamily(family));
        }
        if size == 0 {
            return Err(FontError::InvalidSize(size.to_string()));
        }
        Ok(Self { family, size })
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    /// Point size, always positive.
    pub fn size(&self) -> u32 {
        self.size
    }
}

impl Default for FontPreference {
    fn default() -> Self {
        Self {
            family: DEFAULT_FAMILY.to_string(),
            size: DEFAULT_SIZE,
        }
    }
}

impl fmt::Display for FontPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.family, self.size)
    }
}

impl FromStr for FontPreference {
    type Err = FontError;

    /// Parses the first line of a settings file.
    ///
    /// The family is taken verbatim and must pass the same checks as
    /// [`FontPreference::new`]; only whitespace around the size is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.lines().next().unwrap_or_default().trim_end();
        let malformed = |reason: &'static str| FontError::Malformed {
            line: line.to_string(),
            reason,
        };

        let mut fields = line.split(',');
        let (Some(family), Some(size), None) = (fields.next(), fields.next(), fields.next()) else {
            return Err(malformed("expected exactly one comma"));
        };
        check_family(family).map_err(malformed)?;
        let size: u32 = size
            .trim()
            .parse()
            .map_err(|_| malformed("size is not an integer"))?;
        if size == 0 {
            return Err(malformed("size must be positive"));
        }

        Ok(Self {
            family: family.to_string(),
            size,
        })
    }
}

/// Font preference errors.
#[derive(Debug, thiserror::Error)]
pub enum FontError {
    #[error("Malformed font settings {line:?}: {reason}")]
    Malformed { line: String, reason: &'static str },

    #[error("Font size must be a positive integer, got {0:?}")]
    InvalidSize(String),

    #[error("Invalid font family {0:?}")]
    InvalidFamily(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Loads, saves and applies the font preference.
#[derive(Debug)]
pub struct FontStore<S = LocalFileStore> {
    path: PathBuf,
    store: S,
    active: FontPreference,
}

impl FontStore<LocalFileStore> {
    /// Opens the store at `path` on the local filesystem and loads it.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, FontError> {
        Self::open_with(path, LocalFileStore)
    }
}

impl<S: FileStore> FontStore<S> {
    /// Opens the store at `path` over `store` and loads the preference.
    ///
    /// Fails if the file exists but is malformed.
    pub fn open_with(path: impl Into<PathBuf>, store: S) -> Result<Self, FontError> {
        let mut font_store = Self {
            path: path.into(),
            store,
            active: FontPreference::default(),
        };
        font_store.active = font_store.load()?;
        Ok(font_store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The preference currently in effect.
    pub fn active(&self) -> &FontPreference {
        &self.active
    }

    /// Reads the settings file. A missing file yields the default.
    pub fn load(&self) -> Result<FontPreference, FontError> {
        if !self.store.exists(&self.path) {
            tracing::debug!("No font settings at {}, using defaults", self.path.display());
            return Ok(FontPreference::default());
        }
        let content = self.store.read_to_string(&self.path)?;
        content.parse()
    }

    /// Overwrites the settings file with `preference`.
    pub fn save(&self, preference: &FontPreference) -> Result<(), FontError> {
        self.store.write(&self.path, &preference.to_string())?;
        tracing::info!("Saved font settings: {}", preference);
        Ok(())
    }

    /// Validates user input, makes it the active preference, and saves it.
    ///
    /// Nothing is written when validation fails.
    pub fn apply(&mut self, family: &str, size_text: &str) -> Result<&FontPreference, FontError> {
        let size = size_text
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|size| *size > 0)
            .ok_or_else(|| FontError::InvalidSize(size_text.to_string()))?;
        let preference = FontPreference::new(family, size)?;

        self.active = preference;
        self.save(&self.active)?;
        Ok(&self.active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn store_in(dir: &tempfile::TempDir) -> FontStore {
        FontStore::open(dir.path().join(DEFAULT_SETTINGS_FILE)).unwrap()
    }

    #[test]
    fn test_missing_file_yields_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.load().unwrap(), FontPreference::new("Arial", 12).unwrap());
        assert_eq!(store.active(), &FontPreference::default());
    }

    #[test]
    fn test_load_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_SETTINGS_FILE);
        std::fs::write(&path, "Times New Roman,14").unwrap();

        let store = FontStore::open(&path).unwrap();
        assert_eq!(store.active().family(), "Times New Roman");
        assert_eq!(store.active().size(), 14);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let preference = FontPreference::new("Courier New", 9).unwrap();

        store.save(&preference).unwrap();
        assert_eq!(
            std::fs::read_to_string(store.path()).unwrap(),
            "Courier New,9"
        );
        assert_eq!(store.load().unwrap(), preference);
    }

    #[test]
    fn test_apply_persists() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);

        let applied = store.apply("Georgia", " 16 ").unwrap().clone();
        assert_eq!(applied, FontPreference::new("Georgia", 16).unwrap());
        assert_eq!(store.active(), &applied);
        assert_eq!(store.load().unwrap(), applied);
    }

    #[test]
    fn test_apply_rejects_non_integer_size() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);

        let err = store.apply("Arial", "abc").unwrap_err();
        assert!(matches!(err, FontError::InvalidSize(ref s) if s == "abc"));
        assert!(!store.path().exists());
        assert_eq!(store.active(), &FontPreference::default());
    }

    #[test]
    fn test_apply_rejects_unwritable_input() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);

        assert!(matches!(store.apply("Arial", "0"), Err(FontError::InvalidSize(_))));
        assert!(matches!(store.apply("Foo, Bar", "12"), Err(FontError::InvalidFamily(_))));
        assert!(matches!(store.apply("  ", "12"), Err(FontError::InvalidFamily(_))));
        assert!(matches!(store.apply(" Arial", "12"), Err(FontError::InvalidFamily(_))));
        assert!(matches!(store.apply("Arial\t", "12"), Err(FontError::InvalidFamily(_))));
        assert!(matches!(store.apply("Foo\nBar", "12"), Err(FontError::InvalidFamily(_))));
        assert!(matches!(store.apply("Foo\rBar", "12"), Err(FontError::InvalidFamily(_))));
        assert!(!store.path().exists());
    }

    #[test]
    fn test_malformed_files_fail() {
        for content in ["Arial", "Arial,big", "Arial,0", "A,B,12", ",12", " Arial,12", "a\t,12", "\t ,12"] {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join(DEFAULT_SETTINGS_FILE);
            std::fs::write(&path, content).unwrap();

            let err = FontStore::open(&path).unwrap_err();
            assert!(
                matches!(err, FontError::Malformed { .. }),
                "{content:?} should be malformed, got {err}"
            );
        }
    }

    #[test]
    fn test_only_first_line_is_read() {
        let pref: FontPreference = "Verdana,11\ntrailing junk".parse().unwrap();
        assert_eq!(pref, FontPreference::new("Verdana", 11).unwrap());
    }

    #[test]
    fn test_choice_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_SETTINGS_FILE);

        let mut store = FontStore::open(&path).unwrap();
        store.apply("Times New Roman", "14").unwrap();
        drop(store);

        let restarted = FontStore::open(&path).unwrap();
        assert_eq!(restarted.active(), &FontPreference::new("Times New Roman", 14).unwrap());
    }

    proptest! {
        #[test]
        fn prop_valid_preference_reloads(
            family in "[A-Za-z]([A-Za-z ]{0,18}[A-Za-z])?",
            size in 1u32..500,
        ) {
            let dir = tempfile::tempdir().unwrap();
            let mut store = store_in(&dir);
            let applied = store.apply(&family, &size.to_string()).unwrap().clone();

            let reloaded = FontStore::open(store.path()).unwrap();
            prop_assert_eq!(reloaded.active(), &applied);
        }

        #[test]
        fn prop_apply_never_writes_unreadable_file(family in any::<String>()) {
            let dir = tempfile::tempdir().unwrap();
            let mut store = store_in(&dir);

            match store.apply(&family, "12") {
                Ok(applied) => {
                    let applied = applied.clone();
                    let reloaded = FontStore::open(store.path()).unwrap();
                    prop_assert_eq!(reloaded.active(), &applied);
                    prop_assert_eq!(applied.family(), family.as_str());
                }
                Err(_) => prop_assert!(!store.path().exists()),
            }
        }
    }
}
