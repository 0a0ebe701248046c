use super::{ContentVersion, StoreError, VersionStore};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;
use xxhash_rust::xxh64::xxh64;

const BLOB_DIR: &str = "blobs";
const INDEX_FILE: &str = "versions.json";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Index entry; the body lives in the blob named by `hash`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionRecord {
    pub id: String,
    pub title: String,
    pub author: String,
    /// UTC, formatted so that string order is time order
    pub timestamp: String,
    pub hash: String,
}

/// Content-addressable version store on disk
///
/// Layout under the data dir: `blobs/<xxh64>` holds each distinct body once,
/// `versions.json` lists the version records in creation order.
pub struct FsVersionStore {
    data_dir: PathBuf,
    blobs_dir: PathBuf,
    index_path: PathBuf,
}

impl FsVersionStore {
    /// Open (creating if needed) a store rooted at `data_dir`
    pub fn open(data_dir: &Path) -> Result<Self, StoreError> {
        let blobs_dir = data_dir.join(BLOB_DIR);
        fs::create_dir_all(&blobs_dir)?;

        Ok(Self {
            data_dir: data_dir.to_path_buf(),
            blobs_dir,
            index_path: data_dir.join(INDEX_FILE),
        })
    }

    /// Calculate XXHash64 of content and return as hex string
    fn calculate_hash(content: &str) -> String {
        let hash = xxh64(content.as_bytes(), 0);
        format!("{:016x}", hash)
    }

    fn save_blob(&self, hash: &str, content: &str) -> Result<(), StoreError> {
        let blob_path = self.blobs_dir.join(hash);

        // Identical bodies share one blob
        if !blob_path.exists() {
            fs::write(blob_path, content)?;
        }

        Ok(())
    }

    fn load_blob(&self, hash: &str) -> Result<String, StoreError> {
        let blob_path = self.blobs_dir.join(hash);

        if !blob_path.exists() {
            return Err(StoreError::InvalidHash(format!(
                "Blob not found for hash: {}",
                hash
            )));
        }

        Ok(fs::read_to_string(blob_path)?)
    }

    pub fn load_index(&self) -> Result<Vec<VersionRecord>, StoreError> {
        if !self.index_path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.index_path)?;
        let records = serde_json::from_str(&content)?;
        Ok(records)
    }

    fn save_index(&self, records: &[VersionRecord]) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(records)?;
        fs::write(&self.index_path, content)?;
        Ok(())
    }

    fn to_version(&self, record: &VersionRecord) -> Result<ContentVersion, StoreError> {
        Ok(ContentVersion {
            id: record.id.clone(),
            title: record.title.clone(),
            author: record.author.clone(),
            timestamp: record.timestamp.clone(),
            content: self.load_blob(&record.hash)?,
        })
    }

    /// Save a new version and return it
    pub fn create_version(
        &self,
        title: &str,
        author: &str,
        content: &str,
    ) -> Result<ContentVersion, StoreError> {
        let hash = Self::calculate_hash(content);
        self.save_blob(&hash, content)?;

        let record = VersionRecord {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            author: author.to_string(),
            timestamp: Utc::now().format(TIMESTAMP_FORMAT).to_string(),
            hash,
        };

        let mut records = self.load_index()?;
        records.push(record.clone());
        self.save_index(&records)?;

        tracing::info!("Saved version {} ({})", record.id, record.title);
        self.to_version(&record)
    }

    pub fn load_version(&self, id: &str) -> Result<Option<ContentVersion>, StoreError> {
        self.load_index()?
            .iter()
            .find(|r| r.id == id)
            .map(|r| self.to_version(r))
            .transpose()
    }

    pub fn load_versions(&self) -> Result<Vec<ContentVersion>, StoreError> {
        self.load_index()?
            .iter()
            .map(|r| self.to_version(r))
            .collect()
    }

    /// Get the data directory path
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

impl VersionStore for FsVersionStore {
    fn get_version(&self, id: &str) -> Option<ContentVersion> {
        self.load_version(id).unwrap_or_else(|e| {
            tracing::warn!("Failed to load version {}: {}", id, e);
            None
        })
    }

    fn list_versions(&self) -> Vec<ContentVersion> {
        self.load_versions().unwrap_or_else(|e| {
            tracing::warn!("Failed to load versions: {}", e);
            Vec::new()
        })
    }
}
