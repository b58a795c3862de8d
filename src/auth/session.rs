use crate::models::User;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Key the signed-in user is stored under, as in browser local storage
pub const CURRENT_USER_KEY: &str = "currentUser";

/// Where the signed-in user is mirrored so a session survives a restart.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn get(&self) -> Result<Option<User>>;

    async fn set(&self, user: &User) -> Result<()>;

    async fn clear(&self) -> Result<()>;
}

/// Keeps the session for the life of the process only
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    user: RwLock<Option<User>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn get(&self) -> Result<Option<User>> {
        Ok(self.user.read().await.clone())
    }

    async fn set(&self, user: &User) -> Result<()> {
        *self.user.write().await = Some(user.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        *self.user.write().await = None;
        Ok(())
    }
}

/// A JSON object of string keys on disk, standing in for browser local
/// storage. The user record lives under [`CURRENT_USER_KEY`].
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_entries(&self) -> Result<Map<String, Value>> {
        Ok(self.load_entries().await?.unwrap_or_default())
    }

    /// `None` when the file exists but does not hold a JSON object.
    async fn load_entries(&self) -> Result<Option<Map<String, Value>>> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Some(Map::new())),
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read {}", self.path.display()))
            }
        };

        match serde_json::from_str::<Map<String, Value>>(&raw) {
            Ok(entries) => Ok(Some(entries)),
            Err(e) => {
                warn!("Ignoring unreadable storage file {}: {}", self.path.display(), e);
                Ok(None)
            }
        }
    }

    async fn write_entries(&self, entries: &Map<String, Value>) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(entries)?;
        tokio::fs::write(&self.path, json)
            .await
            .with_context(|| format!("Failed to write {}", self.path.display()))
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn get(&self) -> Result<Option<User>> {
        let entries = self.read_entries().await?;
        let Some(value) = entries.get(CURRENT_USER_KEY) else {
            return Ok(None);
        };

        // values are stored as serialized strings, like localStorage
        let parsed = match value {
            Value::String(raw) => serde_json::from_str::<User>(raw),
            other => serde_json::from_value::<User>(other.clone()),
        };
        match parsed {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                warn!("Discarding corrupt session record: {}", e);
                Ok(None)
            }
        }
    }

    async fn set(&self, user: &User) -> Result<()> {
        let mut entries = self.read_entries().await?;
        entries.insert(
            CURRENT_USER_KEY.to_string(),
            Value::String(serde_json::to_string(user)?),
        );
        self.write_entries(&entries).await?;
        debug!("Persisted session for {} to {}", user.email, self.path.display());
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        let (mut entries, unreadable) = match self.load_entries().await? {
            Some(entries) => (entries, false),
            None => (Map::new(), true),
        };
        // an unreadable file is replaced so later reads stop warning about it
        if entries.remove(CURRENT_USER_KEY).is_some() || unreadable {
            self.write_entries(&entries).await?;
        }
        Ok(())
    }
}

/// The active session: an in-process slot backed by a [`SessionStore`].
/// Handlers receive this explicitly instead of reaching for global state.
pub struct Session {
    current: RwLock<Option<User>>,
    store: Arc<dyn SessionStore>,
}

impl Session {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self {
            current: RwLock::new(None),
            store,
        }
    }

    /// In-process user if there is one, otherwise whatever the store holds.
    pub async fn current_user(&self) -> Result<Option<User>> {
        if let Some(user) = self.current.read().await.clone() {
            return Ok(Some(user));
        }

        let stored = self.store.get().await?;
        if let Some(user) = &stored {
            debug!("Rehydrated session for {}", user.email);
            *self.current.write().await = Some(user.clone());
        }
        Ok(stored)
    }

    pub async fn establish(&self, user: User) -> Result<()> {
        self.store.set(&user).await?;
        *self.current.write().await = Some(user);
        Ok(())
    }

    pub async fn end(&self) -> Result<()> {
        *self.current.write().await = None;
        self.store.clear().await
    }
}
