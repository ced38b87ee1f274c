use async_trait::async_trait;
use quill_common::caller::Caller;
use thiserror::Error;

use crate::models::{DbArticle, DbUser};

pub mod json;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("username already taken")]
    UsernameTaken,

    #[error("article not found")]
    NotFound,

    #[error("not allowed to modify this article")]
    PermissionDenied,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

#[async_trait]
pub trait Storage: UserStore + ArticleStore + Send + Sync + 'static {
    async fn ping(&self) -> Result<(), StoreError>;
}

#[async_trait]
pub trait UserStore {
    /// Create a regular user, rejecting duplicate usernames (exact,
    /// case-sensitive match). The whole check-hash-append-save cycle is a
    /// single critical section.
    async fn create_user(&self, username: &str, password: &str) -> Result<DbUser, StoreError>;

    /// Look up a user by exact username.
    async fn find_user(&self, username: &str) -> Result<Option<DbUser>, StoreError>;
}

#[async_trait]
pub trait ArticleStore {
    /// All articles, newest calendar day first. Articles sharing a day keep
    /// their insertion order.
    async fn list_articles(&self) -> Result<Vec<DbArticle>, StoreError>;

    /// Publish an article dated today (UTC) under `author_id`.
    async fn create_article(
        &self,
        author_id: i64,
        title: &str,
        content: &str,
    ) -> Result<DbArticle, StoreError>;

    /// Remove an article. Only the author or an admin may do so; everyone
    /// else gets `PermissionDenied`.
    async fn delete_article(&self, caller: &Caller, article_id: i64) -> Result<(), StoreError>;
}
