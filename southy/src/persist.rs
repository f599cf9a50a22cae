//! Capture of raw API payloads.
//!
//! Every parsed response is handed to a [`ResponsePersister`] keyed by
//! confirmation number and logical request name, for audit and debugging.
//! Persisting never changes what the client returns.

use std::path::{Path, PathBuf};

use serde_json::Value;

/// Error from saving a payload.
#[derive(Debug, thiserror::Error)]
#[error("persist error: {message}")]
pub struct PersistError {
    message: String,
}

impl PersistError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Sink for parsed API payloads.
pub trait ResponsePersister {
    fn save(&self, confirmation: &str, name: &str, payload: &Value) -> Result<(), PersistError>;
}

/// Persister that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPersister;

impl ResponsePersister for NoopPersister {
    fn save(&self, _confirmation: &str, _name: &str, _payload: &Value) -> Result<(), PersistError> {
        Ok(())
    }
}

impl<P: ResponsePersister> ResponsePersister for Option<P> {
    fn save(&self, confirmation: &str, name: &str, payload: &Value) -> Result<(), PersistError> {
        match self {
            Some(inner) => inner.save(confirmation, name, payload),
            None => Ok(()),
        }
    }
}

/// Writes payloads as pretty JSON under `<dir>/<CONFIRMATION>/<name>.json`.
///
/// Later responses for the same request name overwrite earlier ones, so the
/// file holds the last attempt of a retried request.
#[derive(Debug, Clone)]
pub struct JsonFilePersister {
    dir: PathBuf,
}

impl JsonFilePersister {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path a payload for this confirmation and request name is written to.
    pub fn path_for(&self, confirmation: &str, name: &str) -> PathBuf {
        self.dir
            .join(sanitize(confirmation))
            .join(format!("{}.json", sanitize(name)))
    }
}

impl ResponsePersister for JsonFilePersister {
    fn save(&self, confirmation: &str, name: &str, payload: &Value) -> Result<(), PersistError> {
        let path = self.path_for(confirmation, name);

        if let Some(parent) = path.parent()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                PersistError::new(format!("failed to create {}: {}", parent.display(), e))
            })?;
        }

        let json = serde_json::to_string_pretty(payload)
            .map_err(|e| PersistError::new(format!("failed to serialize payload: {e}")))?;

        std::fs::write(&path, json)
            .map_err(|e| PersistError::new(format!("failed to write {}: {}", path.display(), e)))
    }
}

/// Test helper that keeps payloads in memory, in the order they were saved.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryPersister {
    saved: std::sync::Mutex<Vec<(String, String, Value)>>,
}

#[cfg(test)]
impl MemoryPersister {
    /// Everything saved so far as (confirmation, name, payload).
    pub fn saved(&self) -> Vec<(String, String, Value)> {
        self.saved
            .lock()
            .map(|s| s.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }
}

#[cfg(test)]
impl ResponsePersister for MemoryPersister {
    fn save(&self, confirmation: &str, name: &str, payload: &Value) -> Result<(), PersistError> {
        let mut saved = self
            .saved
            .lock()
            .map_err(|_| PersistError::new("memory persister lock poisoned"))?;
        saved.push((confirmation.to_string(), name.to_string(), payload.clone()));
        Ok(())
    }
}

/// Keep path components to a safe character set.
fn sanitize(component: &str) -> String {
    let cleaned: String = component
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.is_empty() {
        "_".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn writes_payload_under_confirmation() {
        let dir = tempdir().unwrap();
        let persister = JsonFilePersister::new(dir.path());

        persister
            .save("ABC123", "view-reservation", &json!({"opstatus": 0}))
            .unwrap();

        let path = dir.path().join("ABC123").join("view-reservation.json");
        let written: Value = serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(written, json!({"opstatus": 0}));
    }

    #[test]
    fn later_saves_overwrite() {
        let dir = tempdir().unwrap();
        let persister = JsonFilePersister::new(dir.path());

        persister.save("ABC123", "check-in", &json!({"n": 1})).unwrap();
        persister.save("ABC123", "check-in", &json!({"n": 2})).unwrap();

        let contents = std::fs::read_to_string(persister.path_for("ABC123", "check-in")).unwrap();
        assert!(contents.contains('2'));
    }

    #[test]
    fn path_components_are_sanitized() {
        let persister = JsonFilePersister::new("/captures");
        assert_eq!(
            persister.path_for("../etc", "check in"),
            PathBuf::from("/captures/___etc/check_in.json")
        );
        assert_eq!(
            persister.path_for("", "x"),
            PathBuf::from("/captures/_/x.json")
        );
    }

    #[test]
    fn unwritable_directory_is_an_error() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "not a directory").unwrap();

        let persister = JsonFilePersister::new(&blocker);
        assert!(persister.save("ABC123", "check-in", &json!({})).is_err());
    }

    #[test]
    fn optional_persister() {
        let none: Option<MemoryPersister> = None;
        assert!(none.save("ABC123", "check-in", &json!({})).is_ok());

        let some = Some(MemoryPersister::default());
        some.save("ABC123", "check-in", &json!({"a": 1})).unwrap();
        assert_eq!(some.as_ref().unwrap().saved().len(), 1);
    }

    #[test]
    fn noop_persister_accepts_everything() {
        assert!(NoopPersister.save("ABC123", "check-in", &json!(null)).is_ok());
    }
}
