use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Credentials submitted to the register and login endpoints.
///
/// Both fields default to the empty string when omitted so that a missing
/// field reports the same validation error as an empty one.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CredentialsParams {
    /// The username to register or authenticate as.
    #[serde(default)]
    pub username: String,

    /// The password for that user.
    #[serde(default)]
    pub password: String,
}
