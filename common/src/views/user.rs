use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The public projection of a user record. This is the only shape in which
/// user data leaves the API; the password hash never appears here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// The unique identifier for this user.
    pub id: i64,

    /// The user's login name.
    pub username: String,

    /// Whether this user has administrative rights.
    pub is_admin: bool,
}
