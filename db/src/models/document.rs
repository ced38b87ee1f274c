use serde::{Deserialize, Serialize};

use crate::models::{DbArticle, DbUser};

/// The persisted root: everything the application knows, in one JSON blob.
///
/// Both lists default to empty so that a missing or partial file loads
/// cleanly; first-run initialization is implicit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub users: Vec<DbUser>,

    #[serde(default)]
    pub articles: Vec<DbArticle>,
}

impl Document {
    /// Allocate the next record id: one past the highest id in use across
    /// both lists. Must be called inside the store's write critical section
    /// so two mutations cannot mint the same id. Stays monotonic even when
    /// the file predates this scheme and holds millisecond-timestamp ids.
    pub fn next_id(&self) -> i64 {
        self.users
            .iter()
            .map(|u| u.id)
            .chain(self.articles.iter().map(|a| a.id))
            .max()
            .map_or(1, |max| max + 1)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn empty_document_starts_ids_at_one() {
        assert_eq!(Document::default().next_id(), 1);
    }

    #[test]
    fn next_id_spans_users_and_articles() {
        let doc = Document {
            users: vec![DbUser::new(5, "alice".into(), "pw").unwrap()],
            articles: vec![DbArticle {
                id: 9,
                title: "t".into(),
                content: "c".into(),
                date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
                author_id: 5,
            }],
        };

        assert_eq!(doc.next_id(), 10);
    }

    #[test]
    fn missing_lists_deserialize_as_empty() {
        let doc: Document = serde_json::from_str("{}").unwrap();
        assert!(doc.users.is_empty());
        assert!(doc.articles.is_empty());
    }
}
