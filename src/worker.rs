use crate::diff::{DiffStrategy, diff_texts, has_meaningful_changes};
use crate::messages::{ResponseMessage, WorkerMessage};
use crate::store::{ContentVersion, FsVersionStore, StoreError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorkerError {
    #[error("{0}")]
    Store(#[from] StoreError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Version store is unavailable")]
    Unavailable,

    #[error("No changes compared to the latest \"{0}\"")]
    NoChanges(String),
}

/// Owns the on-disk store and does all file I/O off the UI thread
pub struct Worker {
    data_dir: PathBuf,
    receiver: Receiver<WorkerMessage>,
    response_sender: Sender<ResponseMessage>,
}

impl Worker {
    pub fn new(
        data_dir: PathBuf,
        receiver: Receiver<WorkerMessage>,
        response_sender: Sender<ResponseMessage>,
    ) -> Self {
        Self {
            data_dir,
            receiver,
            response_sender,
        }
    }

    pub fn run(&self) {
        let store = match FsVersionStore::open(&self.data_dir) {
            Ok(store) => {
                tracing::info!("Version store at {:?}", store.data_dir());
                Some(store)
            }
            Err(e) => {
                tracing::error!("Failed to open version store at {:?}: {}", self.data_dir, e);
                None
            }
        };

        while let Ok(message) = self.receiver.recv() {
            let response = match message {
                WorkerMessage::LoadVersions => ResponseMessage::VersionsLoaded(
                    Self::load_versions(store.as_ref()).map_err(|e| e.to_string()),
                ),
                WorkerMessage::Import { path, author } => ResponseMessage::VersionSaved(
                    Self::import(store.as_ref(), &path, &author).map_err(|e| e.to_string()),
                ),
                WorkerMessage::Export { path, text } => ResponseMessage::DiffExported(
                    Self::export(&path, &text)
                        .map(|_| path)
                        .map_err(|e| e.to_string()),
                ),
            };

            if let Err(e) = self.response_sender.send(response) {
                tracing::error!("Failed to send worker response: {}", e);
                break;
            }
        }
    }

    fn load_versions(store: Option<&FsVersionStore>) -> Result<Vec<ContentVersion>, WorkerError> {
        let store = store.ok_or(WorkerError::Unavailable)?;
        Ok(store.load_versions()?)
    }

    /// Save the file as a version titled after its stem, unless it matches
    /// the latest version of that title apart from blank lines
    fn import(
        store: Option<&FsVersionStore>,
        path: &Path,
        author: &str,
    ) -> Result<ContentVersion, WorkerError> {
        let store = store.ok_or(WorkerError::Unavailable)?;
        let content = fs::read_to_string(path)?;
        let title = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("Untitled")
            .to_string();

        if let Some(latest) = store
            .load_versions()?
            .into_iter()
            .rev()
            .find(|v| v.title == title)
        {
            let diff = diff_texts(DiffStrategy::LineDiff, &latest.content, &content);
            if !has_meaningful_changes(&diff) {
                return Err(WorkerError::NoChanges(title));
            }
        }

        Ok(store.create_version(&title, author, &content)?)
    }

    fn export(path: &Path, text: &str) -> Result<(), WorkerError> {
        fs::write(path, text)?;
        tracing::info!("Diff exported to {:?}", path);
        Ok(())
    }
}

pub fn spawn_worker(data_dir: PathBuf) -> (Sender<WorkerMessage>, Receiver<ResponseMessage>) {
    let (sender, receiver) = mpsc::channel();
    let (response_sender, response_receiver) = mpsc::channel();
    thread::spawn(move || {
        let worker = Worker::new(data_dir, receiver, response_sender);
        worker.run();
    });
    (sender, response_receiver)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use uuid::Uuid;

    const TIMEOUT: Duration = Duration::from_secs(5);

    fn test_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("test_worker_{}", Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_import_then_load() {
        let dir = test_dir();
        let file = dir.join("Lesson 1.md");
        fs::write(&file, "# Lesson 1\nIntro").unwrap();

        let (sender, receiver) = spawn_worker(dir.join("data"));
        sender
            .send(WorkerMessage::Import {
                path: file.clone(),
                author: "Teacher".to_string(),
            })
            .unwrap();

        let saved = match receiver.recv_timeout(TIMEOUT).unwrap() {
            ResponseMessage::VersionSaved(Ok(version)) => version,
            _ => panic!("expected a saved version"),
        };
        assert_eq!(saved.title, "Lesson 1");
        assert_eq!(saved.author, "Teacher");
        assert_eq!(saved.content, "# Lesson 1\nIntro");

        sender.send(WorkerMessage::LoadVersions).unwrap();
        match receiver.recv_timeout(TIMEOUT).unwrap() {
            ResponseMessage::VersionsLoaded(Ok(versions)) => assert_eq!(versions, vec![saved]),
            _ => panic!("expected the version list"),
        }

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_reimport_without_changes_is_rejected() {
        let dir = test_dir();
        let file = dir.join("notes.txt");
        fs::write(&file, "line one\nline two").unwrap();

        let (sender, receiver) = spawn_worker(dir.join("data"));
        let import = || WorkerMessage::Import {
            path: file.clone(),
            author: "Teacher".to_string(),
        };

        sender.send(import()).unwrap();
        assert!(matches!(
            receiver.recv_timeout(TIMEOUT).unwrap(),
            ResponseMessage::VersionSaved(Ok(_))
        ));

        fs::write(&file, "line one\nline two\n\n").unwrap();
        sender.send(import()).unwrap();
        match receiver.recv_timeout(TIMEOUT).unwrap() {
            ResponseMessage::VersionSaved(Err(e)) => assert!(e.contains("notes")),
            _ => panic!("expected the import to be rejected"),
        }

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_export_writes_file() {
        let dir = test_dir();
        let target = dir.join("diff.txt");

        let (sender, receiver) = spawn_worker(dir.join("data"));
        sender
            .send(WorkerMessage::Export {
                path: target.clone(),
                text: "+ added".to_string(),
            })
            .unwrap();

        match receiver.recv_timeout(TIMEOUT).unwrap() {
            ResponseMessage::DiffExported(Ok(path)) => assert_eq!(path, target),
            _ => panic!("expected export to succeed"),
        }
        assert_eq!(fs::read_to_string(&target).unwrap(), "+ added");

        let _ = fs::remove_dir_all(&dir);
    }
}
