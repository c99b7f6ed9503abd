use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Key-value storage for the GitHub token.
///
/// The app only ever talks to this trait, so tests can swap the
/// file-backed store for an in-memory map.
pub trait TokenStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Token store backed by a JSON file in the platform config directory
pub struct FileTokenStore {
    store_path: PathBuf,
}

impl FileTokenStore {
    pub fn new() -> Result<Self> {
        let project_dirs = ProjectDirs::from("", "", "plunger")
            .context("Failed to determine config directory")?;

        let config_dir = project_dirs.config_dir().to_path_buf();

        // Create config directory if it doesn't exist
        if !config_dir.exists() {
            fs::create_dir_all(&config_dir).context("Failed to create config directory")?;
        }

        Ok(FileTokenStore {
            store_path: config_dir.join("tokens.json"),
        })
    }

    /// Build a store at an explicit file location
    pub fn with_path(store_path: PathBuf) -> Self {
        FileTokenStore { store_path }
    }

    fn load_map(&self) -> Result<HashMap<String, String>> {
        if !self.store_path.exists() {
            return Ok(HashMap::new());
        }

        let content =
            fs::read_to_string(&self.store_path).context("Failed to read token store file")?;

        let map: HashMap<String, String> = serde_json::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!("Failed to parse token store file: {}. Starting fresh.", e);
            HashMap::new()
        });

        Ok(map)
    }

    fn save_map(&self, map: &HashMap<String, String>) -> Result<()> {
        let content =
            serde_json::to_string_pretty(map).context("Failed to serialize token store")?;

        fs::write(&self.store_path, content).context("Failed to write token store file")?;

        Ok(())
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let map = self.load_map()?;
        Ok(map.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut map = self.load_map()?;
        map.insert(key.to_string(), value.to_string());
        self.save_map(&map)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let mut map = self.load_map()?;
        if map.remove(key).is_some() {
            self.save_map(&map)?;
        }
        Ok(())
    }
}

/// In-memory token store for tests
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    values: HashMap<String, String>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        MemoryTokenStore::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.values.remove(key);
        Ok(())
    }
}
