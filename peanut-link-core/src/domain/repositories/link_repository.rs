//! Link repository for data access
//!
//! Links are remembered per creator address. The file store keeps one JSON
//! document mapping lowercased creator addresses to their links.

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

use crate::domain::entities::StoredLink;
use crate::shared::error::LinkError;
use crate::shared::types::LinkResult;

/// Link repository trait
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// All links created by `creator`, oldest first
    async fn links_for(&self, creator: &str) -> LinkResult<Vec<StoredLink>>;

    /// Remember a newly created link
    async fn save_link(&self, link: StoredLink) -> LinkResult<()>;
}

type LinkIndex = HashMap<String, Vec<StoredLink>>;

/// JSON-file backed link store
pub struct FileLinkStore {
    path: PathBuf,
    lock: RwLock<()>,
}

impl FileLinkStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: RwLock::new(()),
        }
    }

    async fn read_index(&self) -> Result<LinkIndex, LinkError> {
        match tokio::fs::read(&self.path).await {
            Ok(data) if data.is_empty() => Ok(LinkIndex::new()),
            Ok(data) => Ok(serde_json::from_slice(&data)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(LinkIndex::new()),
            Err(e) => Err(LinkError::storage(format!(
                "Failed to read {}: {}",
                self.path.display(),
                e
            ))),
        }
    }
}

#[async_trait]
impl LinkRepository for FileLinkStore {
    async fn links_for(&self, creator: &str) -> LinkResult<Vec<StoredLink>> {
        let _guard = self.lock.read().await;
        let mut index = self.read_index().await?;
        Ok(index.remove(&creator.to_lowercase()).unwrap_or_default())
    }

    async fn save_link(&self, link: StoredLink) -> Result<(), LinkError> {
        let _guard = self.lock.write().await;
        let mut index = self.read_index().await?;
        index.entry(link.creator.to_lowercase()).or_default().push(link);

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let data = serde_json::to_vec_pretty(&index)?;
        tokio::fs::write(&self.path, data).await?;
        log::debug!("Saved link index to {}", self.path.display());
        Ok(())
    }
}

/// In-memory link store, for callers that keep links elsewhere and for tests
#[derive(Default)]
pub struct MemoryLinkStore {
    links: RwLock<LinkIndex>,
}

impl MemoryLinkStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkStore {
    async fn links_for(&self, creator: &str) -> LinkResult<Vec<StoredLink>> {
        let links = self.links.read().await;
        Ok(links.get(&creator.to_lowercase()).cloned().unwrap_or_default())
    }

    async fn save_link(&self, link: StoredLink) -> Result<(), LinkError> {
        let mut links = self.links.write().await;
        links.entry(link.creator.to_lowercase()).or_default().push(link);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CREATOR: &str = "0x742d35Cc6634C0532925a3b8D4C9db96C4b4d8b6";

    fn link(hash: &str) -> StoredLink {
        StoredLink::new(CREATOR, hash, format!("https://peanut.to/claim?c=10&v=v4.2&i=1#p={}", hash))
    }

    #[tokio::test]
    async fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let store = FileLinkStore::new(dir.path().join("links").join("links.json"));

        store.save_link(link("0x01")).await.expect("Failed to save link");
        store.save_link(link("0x02")).await.expect("Failed to save link");

        let links = store
            .links_for(&CREATOR.to_uppercase().replace("0X", "0x"))
            .await
            .expect("Failed to list links");
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].hash, "0x01");
        assert_eq!(links[1].hash, "0x02");
    }

    #[tokio::test]
    async fn test_file_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let store = FileLinkStore::new(dir.path().join("absent.json"));
        assert!(store.links_for(CREATOR).await.expect("Failed to list links").is_empty());
    }

    #[tokio::test]
    async fn test_file_store_corrupt_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("links.json");
        std::fs::write(&path, b"not json").expect("Failed to write file");

        let store = FileLinkStore::new(&path);
        let err = store.links_for(CREATOR).await.unwrap_err();
        assert!(matches!(err, LinkError::Storage(_)));
    }

    #[test]
    fn test_memory_store_separates_creators() {
        let store = MemoryLinkStore::new();
        tokio_test::block_on(async {
            store.save_link(link("0x01")).await.expect("Failed to save link");
            store
                .save_link(StoredLink::new("0x0000000000000000000000000000000000000001", "0x02", "c=1"))
                .await
                .expect("Failed to save link");

            assert_eq!(store.links_for(CREATOR).await.unwrap().len(), 1);
            assert_eq!(
                store.links_for("0x0000000000000000000000000000000000000001").await.unwrap().len(),
                1
            );
        });
    }
}
