use std::sync::Arc;

use quill_db::storage::Storage;

use crate::{auth::jwt::TokenKeys, config::QuillApiConfig};

#[derive(Clone)]
pub struct ApiContext {
    pub config: QuillApiConfig,
    pub db: Arc<dyn Storage>,
    pub tokens: TokenKeys,
}

impl ApiContext {
    pub fn new(config: QuillApiConfig, db: Arc<dyn Storage>, tokens: TokenKeys) -> Self {
        Self { config, db, tokens }
    }
}
