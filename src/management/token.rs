use std::{io, path::PathBuf};

use tokio::sync::Mutex;

/// Durable store for the single refresh credential.
///
/// The backing medium is a plain text file holding the raw token. The store
/// exclusively owns the credential; callers receive copies scoped to one
/// token-exchange call. A missing file is the normal unauthenticated state,
/// not an error.
///
/// Reads and writes are serialized through an internal lock so a callback
/// write cannot race a concurrent data-request read.
pub struct TokenStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl TokenStore {
    pub fn new(path: PathBuf) -> Self {
        TokenStore {
            path,
            lock: Mutex::new(()),
        }
    }

    /// Persists the refresh token, fully overwriting any previous value.
    ///
    /// Creates parent directories as needed. Storage errors propagate to the
    /// caller; they indicate a deployment problem rather than a recoverable
    /// request failure.
    pub async fn save(&self, refresh_token: &str) -> Result<(), io::Error> {
        let _guard = self.lock.lock().await;

        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent).await?;
        }
        async_fs::write(&self.path, refresh_token).await
    }

    /// Returns the persisted refresh token, or `None` if no authorization
    /// has ever completed.
    pub async fn load(&self) -> Result<Option<String>, io::Error> {
        let _guard = self.lock.lock().await;

        match async_fs::read_to_string(&self.path).await {
            Ok(token) => Ok(Some(token)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}
