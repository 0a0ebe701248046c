use crate::store::ContentVersion;
use std::path::PathBuf;

/// Requests handled by the background worker
pub enum WorkerMessage {
    LoadVersions,
    /// Save a text file as a new version
    Import { path: PathBuf, author: String },
    /// Write an exported diff to disk
    Export { path: PathBuf, text: String },
}

/// Response messages from background operations
pub enum ResponseMessage {
    VersionsLoaded(Result<Vec<ContentVersion>, String>),
    VersionSaved(Result<ContentVersion, String>),
    DiffExported(Result<PathBuf, String>),
}
