use thiserror::Error;
use web_sys::window;

use crate::shared::config::TOKEN_STORAGE_KEY;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("localStorage unavailable")]
    Unavailable,
    #[error("localStorage operation failed: {0}")]
    Operation(String),
}

/// Persistence of the single session token.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Result<Option<String>, StorageError>;
    fn save(&self, token: &str) -> Result<(), StorageError>;
    fn remove(&self) -> Result<(), StorageError>;
}

/// Browser localStorage under [`TOKEN_STORAGE_KEY`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageTokens;

fn get_local_storage() -> Result<web_sys::Storage, StorageError> {
    window()
        .ok_or(StorageError::Unavailable)?
        .local_storage()
        .map_err(|e| StorageError::Operation(format!("{e:?}")))?
        .ok_or(StorageError::Unavailable)
}

impl TokenStore for LocalStorageTokens {
    fn load(&self) -> Result<Option<String>, StorageError> {
        get_local_storage()?
            .get_item(TOKEN_STORAGE_KEY)
            .map_err(|e| StorageError::Operation(format!("{e:?}")))
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        get_local_storage()?
            .set_item(TOKEN_STORAGE_KEY, token)
            .map_err(|e| StorageError::Operation(format!("{e:?}")))
    }

    fn remove(&self) -> Result<(), StorageError> {
        get_local_storage()?
            .remove_item(TOKEN_STORAGE_KEY)
            .map_err(|e| StorageError::Operation(format!("{e:?}")))
    }
}
