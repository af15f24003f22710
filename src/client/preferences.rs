use std::collections::BTreeSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::api_client::DEFAULT_BASE_URL;

pub const DEFAULT_CRAWLER_IMPORT_LIMIT: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    System,
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageMode {
    #[default]
    Zh,
    En,
}

#[derive(Debug)]
pub enum PreferencesError {
    Io(std::io::Error),
    Malformed(serde_json::Error),
}

impl std::fmt::Display for PreferencesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PreferencesError::Io(e) => write!(f, "preferences I/O error: {}", e),
            PreferencesError::Malformed(e) => write!(f, "malformed preferences file: {}", e),
        }
    }
}

impl std::error::Error for PreferencesError {}

impl From<std::io::Error> for PreferencesError {
    fn from(error: std::io::Error) -> Self {
        PreferencesError::Io(error)
    }
}

impl From<serde_json::Error> for PreferencesError {
    fn from(error: serde_json::Error) -> Self {
        PreferencesError::Malformed(error)
    }
}

/// User settings persisted as a small JSON document. Unknown or missing keys
/// fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Preferences {
    pub theme_mode: ThemeMode,
    pub language_mode: LanguageMode,
    pub auto_update: bool,
    pub crawler_import_limit: usize,
    pub bookmarked_job_ids: BTreeSet<i64>,
    pub backend_base_url: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::default(),
            language_mode: LanguageMode::default(),
            auto_update: true,
            crawler_import_limit: DEFAULT_CRAWLER_IMPORT_LIMIT,
            bookmarked_job_ids: BTreeSet::new(),
            backend_base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Preferences {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PreferencesError> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No preferences at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PreferencesError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Flips the bookmark on `job_id` and reports whether it is now set.
    pub fn toggle_bookmark(&mut self, job_id: i64) -> bool {
        if self.bookmarked_job_ids.remove(&job_id) {
            false
        } else {
            self.bookmarked_job_ids.insert(job_id);
            true
        }
    }

    pub fn is_bookmarked(&self, job_id: i64) -> bool {
        self.bookmarked_job_ids.contains(&job_id)
    }

    /// Zero means "import nothing", so the limit is kept at one or more.
    pub fn set_crawler_import_limit(&mut self, limit: usize) {
        self.crawler_import_limit = limit.max(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let prefs = Preferences::default();
        assert_eq!(prefs.theme_mode, ThemeMode::System);
        assert_eq!(prefs.language_mode, LanguageMode::Zh);
        assert!(prefs.auto_update);
        assert_eq!(prefs.crawler_import_limit, 50);
        assert!(prefs.bookmarked_job_ids.is_empty());
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = Preferences::load(dir.path().join("absent.json")).unwrap();
        assert_eq!(prefs, Preferences::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");

        let mut prefs = Preferences::default();
        prefs.theme_mode = ThemeMode::Dark;
        prefs.language_mode = LanguageMode::En;
        prefs.auto_update = false;
        prefs.toggle_bookmark(7);
        prefs.save(&path).unwrap();

        let loaded = Preferences::load(&path).unwrap();
        assert_eq!(loaded, prefs);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, r#"{"themeMode":"light"}"#).unwrap();

        let prefs = Preferences::load(&path).unwrap();
        assert_eq!(prefs.theme_mode, ThemeMode::Light);
        assert_eq!(prefs.crawler_import_limit, 50);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "{not json").unwrap();
        assert!(matches!(
            Preferences::load(&path),
            Err(PreferencesError::Malformed(_))
        ));
    }

    #[test]
    fn test_toggle_bookmark() {
        let mut prefs = Preferences::default();
        assert!(prefs.toggle_bookmark(3));
        assert!(prefs.is_bookmarked(3));
        assert!(!prefs.toggle_bookmark(3));
        assert!(!prefs.is_bookmarked(3));
    }

    #[test]
    fn test_import_limit_floor() {
        let mut prefs = Preferences::default();
        prefs.set_crawler_import_limit(0);
        assert_eq!(prefs.crawler_import_limit, 1);
    }
}
