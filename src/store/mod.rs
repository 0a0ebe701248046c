//! Content version storage
//!
//! Versions are immutable: stores only ever add new ones.

mod fs;
mod memory;

pub use fs::FsVersionStore;
pub use memory::MemoryVersionStore;

use crate::diff::split_lines;
use serde::{Deserialize, Serialize};
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid hash: {0}")]
    InvalidHash(String),

    #[error("Duplicate version id: {0}")]
    DuplicateId(String),
}

/// A saved revision of a piece of course content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentVersion {
    pub id: String,
    pub title: String,
    pub author: String,
    /// Opaque, sortable
    pub timestamp: String,
    pub content: String,
}

impl ContentVersion {
    pub fn lines(&self) -> Vec<&str> {
        split_lines(&self.content)
    }

    /// Label used in version pickers
    pub fn label(&self) -> String {
        format!("{} ({})", self.title, self.timestamp)
    }
}

pub trait VersionStore {
    fn get_version(&self, id: &str) -> Option<ContentVersion>;

    /// All versions, oldest first
    fn list_versions(&self) -> Vec<ContentVersion>;
}
