//! The external account directory: the one collaborator this core
//! depends on. Exposed as a capability trait so callers can back it
//! with a ledger client, an identity service, or an in-memory fake.

mod memory;

pub use memory::MemoryDirectory;

use std::collections::HashSet;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::error::AuthError;

/// Lookup of the public keys currently authorized for an identity.
///
/// Implementations must reflect current directory state on every call
/// — the core never caches results, so revocation takes effect on the
/// next check. A lookup that cannot complete is
/// [`AuthError::DirectoryUnavailable`], never an empty set.
#[async_trait]
pub trait KeyDirectory: Send + Sync {
    /// Fetch the set of WIF-encoded key identifiers authorized for
    /// `identity`.
    async fn authorized_keys(&self, identity: &str) -> Result<HashSet<String>, AuthError>;
}

/// Wraps a directory with a per-lookup deadline so a slow or
/// unreachable backend cannot stall the caller indefinitely.
pub struct TimeoutDirectory<D> {
    inner: D,
    deadline: Duration,
}

impl<D: KeyDirectory> TimeoutDirectory<D> {
    pub fn new(inner: D, deadline: Duration) -> Self {
        Self { inner, deadline }
    }
}

#[async_trait]
impl<D: KeyDirectory> KeyDirectory for TimeoutDirectory<D> {
    async fn authorized_keys(&self, identity: &str) -> Result<HashSet<String>, AuthError> {
        match tokio::time::timeout(self.deadline, self.inner.authorized_keys(identity)).await {
            Ok(result) => result,
            Err(_) => {
                debug!(identity, deadline = ?self.deadline, "directory lookup timed out");
                Err(AuthError::DirectoryUnavailable(format!(
                    "lookup for '{identity}' exceeded {:?}",
                    self.deadline
                )))
            }
        }
    }
}
