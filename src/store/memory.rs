use super::{ContentVersion, StoreError, VersionStore};

/// Insertion-ordered in-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryVersionStore {
    versions: Vec<ContentVersion>,
}

impl MemoryVersionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a list, skipping later duplicates of an id
    pub fn from_versions(versions: Vec<ContentVersion>) -> Self {
        let mut store = Self::new();
        for version in versions {
            if let Err(e) = store.insert(version) {
                tracing::warn!("Skipping version: {}", e);
            }
        }
        store
    }

    pub fn insert(&mut self, version: ContentVersion) -> Result<(), StoreError> {
        if self.contains(&version.id) {
            return Err(StoreError::DuplicateId(version.id));
        }
        self.versions.push(version);
        Ok(())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.versions.iter().any(|v| v.id == id)
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ContentVersion> {
        self.versions.iter()
    }
}

impl VersionStore for MemoryVersionStore {
    fn get_version(&self, id: &str) -> Option<ContentVersion> {
        self.versions.iter().find(|v| v.id == id).cloned()
    }

    fn list_versions(&self) -> Vec<ContentVersion> {
        self.versions.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn version(id: &str, content: &str) -> ContentVersion {
        ContentVersion {
            id: id.to_string(),
            title: format!("Lesson {}", id),
            author: "Teacher".to_string(),
            timestamp: "2024-01-15 10:30".to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_lookup() {
        let store = MemoryVersionStore::from_versions(vec![version("1", "a"), version("2", "b")]);

        assert_eq!(store.len(), 2);
        assert_eq!(store.get_version("2").unwrap().content, "b");
        assert!(store.get_version("missing").is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut store = MemoryVersionStore::new();
        store.insert(version("1", "first")).unwrap();

        let result = store.insert(version("1", "second"));
        assert!(matches!(result, Err(StoreError::DuplicateId(id)) if id == "1"));
        assert_eq!(store.get_version("1").unwrap().content, "first");
    }

    #[test]
    fn test_from_versions_keeps_first_duplicate() {
        let store = MemoryVersionStore::from_versions(vec![
            version("1", "first"),
            version("1", "second"),
            version("2", "other"),
        ]);

        assert_eq!(store.len(), 2);
        assert_eq!(store.get_version("1").unwrap().content, "first");
        let ids: Vec<_> = store.list_versions().into_iter().map(|v| v.id).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }
}
