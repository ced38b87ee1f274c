//! Flat-file JSON storage.
//!
//! The entire [`Document`] is read before and rewritten after every
//! mutation; there are no partial updates. Mutating operations hold a
//! process-wide write lock for the whole load-mutate-save cycle so that
//! concurrent requests cannot interleave and drop each other's writes.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use chrono::Utc;
use quill_common::caller::Caller;
use tokio::{fs, sync::Mutex};
use tracing::{debug, warn};

use crate::models::{DbArticle, DbUser, Document};
use crate::storage::{ArticleStore, Storage, StoreError, UserStore};

pub struct JsonStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonStore {
    /// Create a store over `path`. No I/O happens until the first
    /// operation; a missing file behaves like an empty document.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Read the whole document. A missing file yields an empty document;
    /// an unreadable or corrupt one does too, with a warning, so a bad
    /// file never wedges the service.
    async fn load(&self) -> Document {
        match fs::read(&self.path).await {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(doc) => doc,
                Err(err) => {
                    warn!(path = %self.path.display(), %err, "data file is corrupt, starting from an empty document");
                    Document::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => Document::default(),
            Err(err) => {
                warn!(path = %self.path.display(), %err, "data file is unreadable, starting from an empty document");
                Document::default()
            }
        }
    }

    /// Overwrite the file with the full document, pretty-printed.
    async fn save(&self, doc: &Document) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(doc)?;
        fs::write(&self.path, bytes).await?;
        Ok(())
    }
}

#[async_trait]
impl Storage for JsonStore {
    async fn ping(&self) -> Result<(), StoreError> {
        match fs::metadata(&self.path).await {
            // A missing file is fine: it means first run, not an outage.
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
            Ok(_) => Ok(()),
        }
    }
}

#[async_trait]
impl UserStore for JsonStore {
    async fn create_user(&self, username: &str, password: &str) -> Result<DbUser, StoreError> {
        let _guard = self.write_lock.lock().await;

        let mut doc = self.load().await;
        if doc.users.iter().any(|u| u.username == username) {
            return Err(StoreError::UsernameTaken);
        }

        let user = DbUser::new(doc.next_id(), username.to_string(), password)?;
        doc.users.push(user.clone());
        self.save(&doc).await?;

        debug!(%user, "created user");
        Ok(user)
    }

    async fn find_user(&self, username: &str) -> Result<Option<DbUser>, StoreError> {
        let doc = self.load().await;
        Ok(doc.users.into_iter().find(|u| u.username == username))
    }
}

#[async_trait]
impl ArticleStore for JsonStore {
    async fn list_articles(&self) -> Result<Vec<DbArticle>, StoreError> {
        let mut articles = self.load().await.articles;
        // Stable sort: same-day articles keep their insertion order.
        articles.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(articles)
    }

    async fn create_article(
        &self,
        author_id: i64,
        title: &str,
        content: &str,
    ) -> Result<DbArticle, StoreError> {
        let _guard = self.write_lock.lock().await;

        let mut doc = self.load().await;
        let article = DbArticle {
            id: doc.next_id(),
            title: title.to_string(),
            content: content.to_string(),
            date: Utc::now().date_naive(),
            author_id,
        };
        doc.articles.push(article.clone());
        self.save(&doc).await?;

        debug!(article_id = article.id, author_id, "created article");
        Ok(article)
    }

    async fn delete_article(&self, caller: &Caller, article_id: i64) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;

        let mut doc = self.load().await;
        let index = doc
            .articles
            .iter()
            .position(|a| a.id == article_id)
            .ok_or(StoreError::NotFound)?;

        if !caller.may_modify(doc.articles[index].author_id) {
            return Err(StoreError::PermissionDenied);
        }

        doc.articles.remove(index);
        self.save(&doc).await?;

        debug!(article_id, user_id = caller.user_id, "deleted article");
        Ok(())
    }
}
