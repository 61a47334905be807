//! Best-score and saved-game persistence
//!
//! The game talks to a [`Storage`] whose calls never fail: persistence
//! problems are logged and play carries on. [`StorageManager`] implements it
//! on top of a string key/value store, preferring a directory of files and
//! falling back to memory when that directory cannot be written.

use log::{info, warn};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::io::configuration::{BEST_SCORE_KEY, GAME_STATE_KEY, STORAGE_PROBE_KEY};
use crate::io::error::{GameError, Result, WithPath};
use crate::io::state::SavedGame;

/// Persistence collaborator of the game manager
pub trait Storage {
    /// Highest score recorded so far, 0 if none
    fn best_score(&self) -> u64;

    /// Record a new best score
    fn set_best_score(&mut self, score: u64);

    /// Saved game, if one exists and decodes
    fn game_state(&self) -> Option<SavedGame>;

    /// Save the game
    fn set_game_state(&mut self, state: &SavedGame);

    /// Forget the saved game
    fn clear_game_state(&mut self);
}

/// String key/value store underneath [`StorageManager`]
pub trait KeyValueStore {
    /// Value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the backing medium cannot be read
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the backing medium cannot be written
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`; removing a missing key succeeds
    ///
    /// # Errors
    ///
    /// Returns an error if the backing medium cannot be written
    fn remove_item(&mut self, key: &str) -> Result<()>;
}

/// Volatile store that lives as long as the process
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    data: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every key
    pub fn clear(&mut self) {
        self.data.clear();
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.data.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        self.data.remove(key);
        Ok(())
    }
}

/// Durable store keeping one file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    directory: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `directory`; nothing is touched until first write
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Directory holding the key files
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Check that the directory accepts writes by storing and removing a probe key
    pub fn is_supported(&mut self) -> bool {
        self.set_item(STORAGE_PROBE_KEY, "1")
            .and_then(|()| self.remove_item(STORAGE_PROBE_KEY))
            .is_ok()
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.directory.join(key)
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(GameError::FileSystem {
                path,
                operation: "read",
                source,
            }),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.directory).with_path(&self.directory, "create directory")?;
        let path = self.key_path(key);
        fs::write(&path, value).with_path(&path, "write")
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        let path = self.key_path(key);
        match fs::remove_file(&path) {
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
            result => result.with_path(&path, "remove"),
        }
    }
}

/// [`Storage`] over a key/value store, encoding the game as JSON
pub struct StorageManager {
    store: Box<dyn KeyValueStore>,
    persistent: bool,
}

impl StorageManager {
    /// Storage that forgets everything when the process exits
    pub fn in_memory() -> Self {
        Self {
            store: Box::new(MemoryStore::new()),
            persistent: false,
        }
    }

    /// Storage in `directory`, or in memory if the directory is not writable
    pub fn open(directory: impl Into<PathBuf>) -> Self {
        let mut store = FileStore::new(directory);
        if store.is_supported() {
            Self {
                store: Box::new(store),
                persistent: true,
            }
        } else {
            info!(
                "Directory '{}' is not writable, keeping game state in memory",
                store.directory().display()
            );
            Self::in_memory()
        }
    }

    /// Storage over an arbitrary store, assumed durable
    pub fn with_store(store: impl KeyValueStore + 'static) -> Self {
        Self {
            store: Box::new(store),
            persistent: true,
        }
    }

    /// Whether state survives the process
    pub const fn is_persistent(&self) -> bool {
        self.persistent
    }
}

impl Storage for StorageManager {
    fn best_score(&self) -> u64 {
        match self.store.get_item(BEST_SCORE_KEY) {
            Ok(Some(text)) => text.trim().parse().unwrap_or_else(|_| {
                warn!("Ignoring unreadable best score '{text}'");
                0
            }),
            Ok(None) => 0,
            Err(error) => {
                warn!("{error}");
                0
            }
        }
    }

    fn set_best_score(&mut self, score: u64) {
        if let Err(error) = self.store.set_item(BEST_SCORE_KEY, &score.to_string()) {
            warn!("{error}");
        }
    }

    fn game_state(&self) -> Option<SavedGame> {
        let text = match self.store.get_item(GAME_STATE_KEY) {
            Ok(text) => text?,
            Err(error) => {
                warn!("{error}");
                return None;
            }
        };

        SavedGame::from_json(&text)
            .inspect_err(|error| warn!("Discarding saved game: {error}"))
            .ok()
    }

    fn set_game_state(&mut self, state: &SavedGame) {
        let result = state
            .to_json()
            .and_then(|json| self.store.set_item(GAME_STATE_KEY, &json));
        if let Err(error) = result {
            warn!("{error}");
        }
    }

    fn clear_game_state(&mut self) {
        if let Err(error) = self.store.remove_item(GAME_STATE_KEY) {
            warn!("{error}");
        }
    }
}
