//! Persisted user preferences.
//!
//! The site stores a single preference, the locale under
//! [`LOCALE_PREFERENCE_KEY`]. Stores are key/value so the resolver does not
//! care whether the value lives in a file, in memory or in a browser cookie.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

/// Key under which the selected locale code is persisted.
pub const LOCALE_PREFERENCE_KEY: &str = "wedding-language";

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("Failed to read preferences file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write preferences file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to encode preferences: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Single-writer key/value storage for preferences.
pub trait PreferenceStore {
    /// Stored value for `key`, if any.
    fn load(&self, key: &str) -> Option<String>;

    /// Replace the value for `key`.
    fn store(&mut self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

// ==================== In-memory Store ====================

#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    values: HashMap<String, String>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry.
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut values = HashMap::new();
        values.insert(key.to_string(), value.to_string());
        Self { values }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn store(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ==================== File Store ====================

/// Preferences kept as a flat JSON object on disk.
///
/// A missing file reads as empty. A corrupt file is logged and treated as
/// empty; the next write replaces it.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, PreferenceError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(PreferenceError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        match serde_json::from_str(&content) {
            Ok(values) => Ok(values),
            Err(e) => {
                warn!(
                    "Ignoring unreadable preferences file {}: {}",
                    self.path.display(),
                    e
                );
                Ok(BTreeMap::new())
            }
        }
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load(&self, key: &str) -> Option<String> {
        match self.read_all() {
            Ok(mut values) => values.remove(key),
            Err(e) => {
                warn!("{}", e);
                None
            }
        }
    }

    fn store(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let mut values = self.read_all()?;
        values.insert(key.to_string(), value.to_string());
        let encoded = serde_json::to_string_pretty(&values)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| PreferenceError::Write {
                path: self.path.clone(),
                source,
            })?;
        }

        fs::write(&self.path, encoded).map_err(|source| PreferenceError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

// ==================== Cookie Store ====================

/// Request-scoped preferences backed by the browser's cookies.
///
/// Wraps the request's `CookieJar`. Writes are added to the jar, which
/// the handler returns so axum emits the matching `Set-Cookie` headers.
#[derive(Debug, Clone, Default)]
pub struct CookiePreferences {
    jar: CookieJar,
}

impl CookiePreferences {
    pub fn new(jar: CookieJar) -> Self {
        Self { jar }
    }

    /// Jar holding the incoming cookies plus every write made here.
    pub fn into_jar(self) -> CookieJar {
        self.jar
    }
}

impl PreferenceStore for CookiePreferences {
    fn load(&self, key: &str) -> Option<String> {
        self.jar.get(key).map(|cookie| cookie.value().to_string())
    }

    fn store(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let cookie = Cookie::build((key.to_string(), value.to_string()))
            .path("/")
            .same_site(SameSite::Lax)
            .permanent();
        self.jar = std::mem::take(&mut self.jar).add(cookie);
        Ok(())
    }
}
