use std::sync::Arc;

use tokio::sync::Mutex;

use super::{Store, User};
use crate::context::{Context, Interrupted};

/// Keeps users in process memory. Clones share the same records.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    users: Arc<Mutex<Vec<User>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn users(&self) -> Vec<User> {
        self.users.lock().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.users.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.lock().await.is_empty()
    }
}

impl Store for MemoryStore {
    type Error = Interrupted;

    async fn create(&self, ctx: &Context, user: &User) -> Result<(), Interrupted> {
        let mut users = ctx.run(self.users.lock()).await?;
        users.push(user.clone());
        tracing::debug!(count = users.len(), "stored user in memory");
        Ok(())
    }
}
