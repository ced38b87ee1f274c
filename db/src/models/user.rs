use std::fmt::Display;

use chrono::{DateTime, Utc};
use quill_common::{caller::Caller, views::User};
use serde::{Deserialize, Serialize};

/// bcrypt work factor for new password hashes.
pub const HASH_COST: u32 = 10;

/// A user record as persisted in the document. The password hash stays
/// inside this layer; clients only ever see the [`User`] projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DbUser {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

impl Display for DbUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "DbUser {{ id: {}, username: {}, is_admin: {} }}",
            self.id, self.username, self.is_admin
        )
    }
}

impl DbUser {
    /// Create a new regular user, hashing `password` with bcrypt.
    ///
    /// New users are never admins; there is no promotion path.
    pub fn new(id: i64, username: String, password: &str) -> Result<Self, bcrypt::BcryptError> {
        Ok(Self {
            id,
            username,
            password_hash: bcrypt::hash(password, HASH_COST)?,
            is_admin: false,
            created_at: Utc::now(),
        })
    }

    /// Check a candidate password against the stored hash.
    pub fn verify_password(&self, password: &str) -> Result<bool, bcrypt::BcryptError> {
        bcrypt::verify(password, &self.password_hash)
    }

    /// Convert this database user into a Caller for authorization checks.
    pub fn to_caller(&self) -> Caller {
        Caller {
            user_id: self.id,
            username: self.username.clone(),
            is_admin: self.is_admin,
        }
    }
}

impl From<DbUser> for User {
    fn from(value: DbUser) -> Self {
        Self {
            id: value.id,
            username: value.username,
            is_admin: value.is_admin,
        }
    }
}
