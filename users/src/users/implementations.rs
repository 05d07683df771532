use sqlx::{Execute, SqlitePool};

use super::{Store, User};
use crate::context::Context;
use crate::error::StoreError;

impl Store for SqlitePool {
    type Error = StoreError;

    #[tracing::instrument(skip_all)]
    async fn create(&self, ctx: &Context, user: &User) -> Result<(), StoreError> {
        let query = sqlx::query(
            r#"
            INSERT INTO users (first_name, last_name, mobile, email, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.mobile)
        .bind(&user.email)
        .bind(user.created_at)
        .bind(user.updated_at);
        tracing::debug!("Query: {}", query.sql());

        let result = ctx.run(query.execute(self)).await??;
        tracing::debug!(id = result.last_insert_rowid(), "Inserted user");

        Ok(())
    }
}
