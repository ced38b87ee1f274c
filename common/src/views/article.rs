use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A published article as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// The unique identifier for this article.
    pub id: i64,

    /// The article title.
    pub title: String,

    /// The article body.
    pub content: String,

    /// The calendar day the article was published, `YYYY-MM-DD`.
    pub date: NaiveDate,

    /// The id of the user who published the article.
    pub author_id: i64,
}
