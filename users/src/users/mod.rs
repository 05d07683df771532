mod implementations;
mod memory;
mod user;

pub use memory::MemoryStore;
pub use user::*;

use std::future::Future;
use std::sync::Arc;

use crate::context::Context;
use crate::error::{UsersError, UsersResult};

/// Persistence for user records.
pub trait Store {
    type Error: std::error::Error + Send + Sync + 'static;

    fn create(
        &self,
        ctx: &Context,
        user: &User,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;
}

impl<S: Store + ?Sized> Store for &S {
    type Error = S::Error;

    fn create(
        &self,
        ctx: &Context,
        user: &User,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send {
        (**self).create(ctx, user)
    }
}

impl<S: Store + ?Sized> Store for Arc<S> {
    type Error = S::Error;

    fn create(
        &self,
        ctx: &Context,
        user: &User,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send {
        (**self).create(ctx, user)
    }
}

#[derive(Debug, Clone)]
pub struct UserService<S> {
    store: S,
}

impl<S: Store> UserService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Fills in timestamps, trims the text fields, validates, then hands the
    /// record to the store. Returns the record as it was stored.
    #[tracing::instrument(skip_all)]
    pub async fn create_user(&self, ctx: &Context, mut user: User) -> UsersResult<User> {
        user.set_defaults();
        user.sanitize();

        if let Err(err) = user.validate() {
            tracing::debug!(error = %err, "rejected user");
            return Err(UsersError::Validation(err));
        }

        if let Err(err) = self.store.create(ctx, &user).await {
            tracing::debug!(error = %err, "store failed to create user");
            return Err(UsersError::Store(Box::new(err)));
        }

        tracing::debug!("user created");
        Ok(user)
    }
}
