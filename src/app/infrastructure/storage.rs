//! Client-side key/value persistence for user preferences.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use tracing::warn;

use super::error::Result;

/// Minimal key/value store. Only the theme preference goes through it.
pub trait PreferenceStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-process store; nothing survives the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryPreferences {
    values: BTreeMap<String, String>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let mut values = BTreeMap::new();
        values.insert(key.to_string(), value.to_string());
        Self { values }
    }
}

impl PreferenceStore for MemoryPreferences {
    fn read(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// JSON object on disk, one string value per key.
#[derive(Debug)]
pub struct JsonPreferenceFile {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl JsonPreferenceFile {
    /// Open the store at `path`. A missing or unparsable file counts as empty.
    pub fn open(path: PathBuf) -> Self {
        let values = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(values) => values,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Failed to parse preferences, using defaults");
                    BTreeMap::new()
                }
            },
            Err(_) => BTreeMap::new(),
        };
        Self { path, values }
    }

    /// Open the store at the platform config location.
    pub fn open_default() -> Self {
        Self::open(Self::default_path())
    }

    /// Get preferences file path (cross-platform)
    pub fn default_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("dashboard-shell");
        path.push("preferences.json");
        path
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl PreferenceStore for JsonPreferenceFile {
    fn read(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_roundtrip() {
        let mut store = MemoryPreferences::new();
        assert_eq!(store.read("theme"), None);
        store.write("theme", "dark").unwrap();
        assert_eq!(store.read("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonPreferenceFile::open(dir.path().join("nope.json"));
        assert_eq!(store.read("theme"), None);
    }

    #[test]
    fn test_write_creates_parent_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.json");

        let mut store = JsonPreferenceFile::open(path.clone());
        store.write("theme", "system").unwrap();
        assert!(path.exists());

        let reopened = JsonPreferenceFile::open(path);
        assert_eq!(reopened.read("theme").as_deref(), Some("system"));
    }

    #[test]
    fn test_corrupt_file_is_treated_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, "{not json").unwrap();

        let mut store = JsonPreferenceFile::open(path.clone());
        assert_eq!(store.read("theme"), None);

        // Next write replaces the corrupt contents
        store.write("theme", "light").unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("\"theme\": \"light\""));
    }

    #[test]
    fn test_default_path_ends_with_app_dir() {
        let path = JsonPreferenceFile::default_path();
        assert!(path.ends_with("dashboard-shell/preferences.json"));
    }
}
