use crate::types::WeekRecord;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read store file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write store file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Store file {path} is not a valid week list: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to encode week records: {source}")]
    Encode { source: serde_json::Error },

    #[error("No stored week with id {id}")]
    NotFound { id: String },
}

/// JSON-file-backed collection of weekly records, keyed by record id.
/// The whole store is one array on disk, rewritten in full on every
/// change.
pub struct WeekStore {
    path: PathBuf,
}

impl WeekStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads every stored record. A store file that does not exist yet
    /// reads as an empty list.
    pub async fn load_all(&self) -> Result<Vec<WeekRecord>, StoreError> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("Store file {} not found, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source: e,
                })
            }
        };

        serde_json::from_slice(&raw).map_err(|e| StoreError::Parse {
            path: self.path.clone(),
            source: e,
        })
    }

    pub async fn get(&self, id: &str) -> Result<WeekRecord, StoreError> {
        self.load_all()
            .await?
            .into_iter()
            .find(|record| record.id == id)
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })
    }

    /// Inserts the record, replacing any stored week with the same id.
    pub async fn save(&self, record: WeekRecord) -> Result<(), StoreError> {
        let mut records = self.load_all().await?;

        records.retain(|existing| existing.id != record.id);
        records.push(record);

        self.write_all(records).await
    }

    /// Removes and returns the record with the given id.
    pub async fn delete(&self, id: &str) -> Result<WeekRecord, StoreError> {
        let mut records = self.load_all().await?;

        let position = records
            .iter()
            .position(|record| record.id == id)
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })?;

        let removed = records.remove(position);
        self.write_all(records).await?;

        Ok(removed)
    }

    /// Rewrites the store file. Records are kept ordered by save time so
    /// listings read oldest week first.
    pub(crate) async fn write_all(&self, mut records: Vec<WeekRecord>) -> Result<(), StoreError> {
        records.sort_by(|a, b| a.saved_at.cmp(&b.saved_at));

        let json =
            serde_json::to_vec_pretty(&records).map_err(|e| StoreError::Encode { source: e })?;

        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| StoreError::Write {
                path: self.path.clone(),
                source: e,
            })
    }
}
