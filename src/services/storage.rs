use crate::models::{UserData, UserDataError};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{Mutex, RwLock};

/// Errors that can occur when persisting user data
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Rejected update: {0}")]
    Rejected(#[from] UserDataError),
}

/// Key-value persistence for favorites and ratings
#[async_trait]
pub trait UserDataStore: Send + Sync {
    async fn load(&self) -> Result<UserData, StorageError>;
    async fn save(&self, data: &UserData) -> Result<(), StorageError>;
}

/// Whole-document JSON file store
///
/// Writes go to a sibling temp file which is then renamed over the
/// document, so readers never see a partial write.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl UserDataStore for JsonFileStore {
    async fn load(&self) -> Result<UserData, StorageError> {
        let json = match tokio::fs::read_to_string(&self.path).await {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(UserData::default()),
            Err(e) => {
                tracing::warn!("Cannot read user data at {}: {}", self.path.display(), e);
                return Ok(UserData::default());
            }
        };

        // A corrupt document is treated as empty rather than blocking the user
        match serde_json::from_str(&json) {
            Ok(data) => Ok(data),
            Err(e) => {
                tracing::warn!("Ignoring unreadable user data at {}: {}", self.path.display(), e);
                Ok(UserData::default())
            }
        }
    }

    async fn save(&self, data: &UserData) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let json = serde_json::to_vec_pretty(data)?;
        let tmp = self
            .path
            .with_extension(format!("{}.tmp", uuid::Uuid::new_v4().simple()));

        tokio::fs::write(&tmp, json).await?;
        if let Err(e) = tokio::fs::rename(&tmp, &self.path).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(e.into());
        }

        tracing::trace!("Saved user data to {}", self.path.display());
        Ok(())
    }
}

/// In-memory store, used when no storage path is configured and in tests
#[derive(Default)]
pub struct MemoryStore {
    data: RwLock<UserData>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(data: UserData) -> Self {
        Self {
            data: RwLock::new(data),
        }
    }
}

#[async_trait]
impl UserDataStore for MemoryStore {
    async fn load(&self) -> Result<UserData, StorageError> {
        Ok(self.data.read().await.clone())
    }

    async fn save(&self, data: &UserData) -> Result<(), StorageError> {
        *self.data.write().await = data.clone();
        Ok(())
    }
}

/// Favorites and ratings operations over a store
///
/// Every mutation is a single read-modify-write performed under one lock.
pub struct UserDataService {
    store: Arc<dyn UserDataStore>,
    write_lock: Mutex<()>,
}

impl UserDataService {
    pub fn new(store: Arc<dyn UserDataStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// Current favorites and ratings
    pub async fn data(&self) -> Result<UserData, StorageError> {
        self.store.load().await
    }

    /// Add or remove a favorite; returns whether it is now a favorite
    pub async fn toggle_favorite(&self, recipe_id: u32) -> Result<(bool, UserData), StorageError> {
        let _guard = self.write_lock.lock().await;

        let mut data = self.store.load().await?;
        let favorite = data.toggle_favorite(recipe_id);
        self.store.save(&data).await?;

        tracing::debug!("Recipe {} favorite: {}", recipe_id, favorite);
        Ok((favorite, data))
    }

    /// Overwrite the rating for a recipe
    pub async fn set_rating(&self, recipe_id: u32, rating: u8) -> Result<UserData, StorageError> {
        let _guard = self.write_lock.lock().await;

        let mut data = self.store.load().await?;
        data.set_rating(recipe_id, rating)?;
        self.store.save(&data).await?;

        tracing::debug!("Recipe {} rated {}", recipe_id, rating);
        Ok(data)
    }
}
