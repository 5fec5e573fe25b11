use std::fs;
use std::io;
use std::path::PathBuf;

use super::AiConfig;
use crate::utils::error::{Error, Result};

/// Single-document persistence for the AI configuration. `load` returns
/// `None` only when no document has ever been written; a document that
/// exists but fails to decode is an error, so an operator's customized
/// record is never silently discarded.
pub trait DocumentStore: Send + Sync {
    fn load(&self) -> Result<Option<AiConfig>>;
    fn save(&self, cfg: &AiConfig) -> Result<()>;
}

/// Pretty-printed JSON file at a fixed, deployment-configured path.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DocumentStore for JsonFileStore {
    fn load(&self) -> Result<Option<AiConfig>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(Error::Storage(e)),
        };

        let cfg = serde_json::from_str(&raw)
            .map_err(|e| Error::Corrupt(format!("{}: {e}", self.path.display())))?;
        Ok(Some(cfg))
    }

    fn save(&self, cfg: &AiConfig) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }

        let raw = serde_json::to_string_pretty(cfg)
            .map_err(|e| Error::Unexpected(format!("encode config: {e}")))?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}
