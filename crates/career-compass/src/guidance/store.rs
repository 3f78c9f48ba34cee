use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::profile::Profile;

/// The in-progress assessment as kept on this device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedProfile {
    pub profile: Profile,
    pub saved_at: DateTime<Utc>,
}

/// Storage abstraction so the service can run against disk or memory.
pub trait ProfileStore: Send + Sync {
    fn save(&self, profile: &Profile) -> Result<SavedProfile, StoreError>;
    /// Absent and unreadable documents both load as `None`.
    fn load(&self) -> Result<Option<SavedProfile>, StoreError>;
    fn clear(&self) -> Result<(), StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("profile storage unavailable: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode profile: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Single JSON document on local disk.
#[derive(Debug, Clone)]
pub struct FileProfileStore {
    path: PathBuf,
}

impl FileProfileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProfileStore for FileProfileStore {
    fn save(&self, profile: &Profile) -> Result<SavedProfile, StoreError> {
        let saved = SavedProfile {
            profile: profile.clone(),
            saved_at: Utc::now(),
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let encoded = serde_json::to_vec_pretty(&saved)?;
        std::fs::write(&self.path, encoded)?;
        debug!(path = %self.path.display(), "saved assessment profile");

        Ok(saved)
    }

    fn load(&self) -> Result<Option<SavedProfile>, StoreError> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        match serde_json::from_slice::<SavedProfile>(&bytes) {
            Ok(saved) => Ok(Some(saved)),
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "ignoring malformed saved profile");
                Ok(None)
            }
        }
    }

    fn clear(&self) -> Result<(), StoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[derive(Debug, Default)]
pub struct InMemoryProfileStore {
    slot: Mutex<Option<SavedProfile>>,
}

impl ProfileStore for InMemoryProfileStore {
    fn save(&self, profile: &Profile) -> Result<SavedProfile, StoreError> {
        let saved = SavedProfile {
            profile: profile.clone(),
            saved_at: Utc::now(),
        };
        let mut guard = self.slot.lock().expect("profile store mutex poisoned");
        *guard = Some(saved.clone());
        Ok(saved)
    }

    fn load(&self) -> Result<Option<SavedProfile>, StoreError> {
        let guard = self.slot.lock().expect("profile store mutex poisoned");
        Ok(guard.clone())
    }

    fn clear(&self) -> Result<(), StoreError> {
        let mut guard = self.slot.lock().expect("profile store mutex poisoned");
        guard.take();
        Ok(())
    }
}
