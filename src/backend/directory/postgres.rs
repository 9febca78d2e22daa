//! PostgreSQL-backed user directory
//!
//! The two adjacency lists are stored as `UUID[]` columns on the users row,
//! so a user and both halves of their social graph load in one query.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use super::{DirectoryError, UserDirectory};
use crate::shared::User;

/// User directory over a PostgreSQL connection pool
#[derive(Clone)]
pub struct PgDirectory {
    pool: PgPool,
}

impl PgDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

fn user_from_row(row: &PgRow) -> User {
    User {
        id: row.get("id"),
        username: row.get("username"),
        full_name: row.get("full_name"),
        avatar: row.get("avatar"),
        followers: row.get("followers"),
        followings: row.get("followings"),
        created_at: row.get("created_at"),
    }
}

#[async_trait]
impl UserDirectory for PgDirectory {
    async fn get_by_id(&self, id: Uuid) -> Result<Option<User>, DirectoryError> {
        let row = sqlx::query(
            r#"
            SELECT id, username, full_name, avatar, followers, followings, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| user_from_row(&r)))
    }

    async fn query(&self, ids: &[Uuid]) -> Result<Vec<User>, DirectoryError> {
        let rows = sqlx::query(
            r#"
            SELECT id, username, full_name, avatar, followers, followings, created_at
            FROM users
            WHERE id = ANY($1)
            "#,
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(user_from_row).collect())
    }

    async fn save(&self, users: &[User]) -> Result<(), DirectoryError> {
        // One transaction for the whole set: both sides of an edge commit
        // together or not at all.
        let mut tx = self.pool.begin().await?;

        for user in users {
            sqlx::query(
                r#"
                UPDATE users
                SET followers = $1, followings = $2
                WHERE id = $3
                "#,
            )
            .bind(&user.followers)
            .bind(&user.followings)
            .bind(user.id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    async fn insert(&self, user: &User) -> Result<(), DirectoryError> {
        sqlx::query(
            r#"
            INSERT INTO users (id, username, full_name, avatar, followers, followings, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(user.id)
        .bind(&user.username)
        .bind(&user.full_name)
        .bind(&user.avatar)
        .bind(&user.followers)
        .bind(&user.followings)
        .bind(user.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
