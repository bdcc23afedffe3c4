use std::collections::HashMap;

use async_trait::async_trait;
use swapro_application::DocumentStorage;
use swapro_core::AppResult;
use tokio::sync::RwLock;

/// In-memory document storage implementation.
///
/// Backs tests and throwaway sessions; nothing survives the process.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    documents: RwLock<HashMap<String, String>>,
}

impl InMemoryStorage {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            documents: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl DocumentStorage for InMemoryStorage {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.documents.read().await.get(key).cloned())
    }

    async fn put(&self, key: &str, value: String) -> AppResult<()> {
        self.documents.write().await.insert(key.to_owned(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        self.documents.write().await.remove(key);
        Ok(())
    }
}
