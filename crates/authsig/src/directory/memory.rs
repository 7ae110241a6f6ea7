use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use async_trait::async_trait;

use crate::error::AuthError;

use super::KeyDirectory;

/// In-memory [`KeyDirectory`] for tests and demos.
///
/// Grants and revocations are visible to the very next lookup, which
/// makes it a faithful stand-in for a live directory: the core
/// re-queries on every check instead of caching.
#[derive(Default)]
pub struct MemoryDirectory {
    keys: RwLock<HashMap<String, HashSet<String>>>,
}

impl MemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grant(&self, identity: &str, key: &str) {
        self.keys
            .write()
            .expect("directory lock poisoned")
            .entry(identity.to_string())
            .or_default()
            .insert(key.to_string());
    }

    pub fn revoke(&self, identity: &str, key: &str) {
        if let Some(keys) = self
            .keys
            .write()
            .expect("directory lock poisoned")
            .get_mut(identity)
        {
            keys.remove(key);
        }
    }
}

#[async_trait]
impl KeyDirectory for MemoryDirectory {
    async fn authorized_keys(&self, identity: &str) -> Result<HashSet<String>, AuthError> {
        Ok(self
            .keys
            .read()
            .expect("directory lock poisoned")
            .get(identity)
            .cloned()
            .unwrap_or_default())
    }
}
