use serde::{Deserialize, Serialize};

/// The identity behind an authenticated request, decoded from a session
/// token. The fields are a snapshot of the user at login time and stay valid
/// until the token expires; they are not re-checked against the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Caller {
    pub user_id: i64,
    pub username: String,
    pub is_admin: bool,
}

impl Caller {
    /// Whether this caller may modify (delete) a record owned by `author_id`.
    ///
    /// Admins may modify anything; everyone else only their own records.
    pub fn may_modify(&self, author_id: i64) -> bool {
        self.is_admin || self.user_id == author_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caller(user_id: i64, is_admin: bool) -> Caller {
        Caller {
            user_id,
            username: "somebody".into(),
            is_admin,
        }
    }

    #[test]
    fn author_may_modify_own_record() {
        assert!(caller(7, false).may_modify(7));
    }

    #[test]
    fn non_author_may_not_modify() {
        assert!(!caller(7, false).may_modify(8));
    }

    #[test]
    fn admin_may_modify_anything() {
        assert!(caller(7, true).may_modify(8));
    }
}
