use async_trait::async_trait;
use sqlx::Row;

use crate::application::ports::user_repository::{UserRepository, UserRow};
use crate::infrastructure::db::DbPool;

pub struct SqlxUserRepository {
    pub pool: DbPool,
}

impl SqlxUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqlxUserRepository {
    async fn create_user(
        &self,
        username: &str,
        password_hash: &str,
        role: &str,
    ) -> anyhow::Result<UserRow> {
        let res = sqlx::query(r#"INSERT INTO users (username, password, role) VALUES (?, ?, ?)"#)
            .bind(username)
            .bind(password_hash)
            .bind(role)
            .execute(&self.pool)
            .await?;
        Ok(UserRow {
            id: res.last_insert_rowid(),
            username: username.to_string(),
            role: role.to_string(),
            password_hash: Some(password_hash.to_string()),
        })
    }

    async fn find_by_username(&self, username: &str) -> anyhow::Result<Option<UserRow>> {
        let row = sqlx::query(r#"SELECT id, username, password, role FROM users WHERE username = ?"#)
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| -> anyhow::Result<UserRow> {
            Ok(UserRow {
                id: r.try_get("id")?,
                username: r.try_get("username")?,
                role: r.try_get("role")?,
                password_hash: r.try_get("password")?,
            })
        })
        .transpose()
    }
}
