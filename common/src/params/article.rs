use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for publishing a new article.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CreateArticleParams {
    /// The article title.
    #[serde(default)]
    pub title: String,

    /// The article body.
    #[serde(default)]
    pub content: String,
}
