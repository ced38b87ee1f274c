use chrono::NaiveDate;
use quill_common::views::Article;
use serde::{Deserialize, Serialize};

/// An article record as persisted in the document.
///
/// `date` has day granularity only and is set once at creation; articles
/// published on the same day carry no finer ordering information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DbArticle {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub date: NaiveDate,
    pub author_id: i64,
}

impl From<DbArticle> for Article {
    fn from(value: DbArticle) -> Self {
        Self {
            id: value.id,
            title: value.title,
            content: value.content,
            date: value.date,
            author_id: value.author_id,
        }
    }
}
