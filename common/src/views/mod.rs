//! Output views for the various functions within Quill.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

mod article;
mod user;

pub use article::*;
pub use user::*;

/// An error response for an API endpoint. This is used to return errors to
/// the client in a consistent format: `{"error": "<message>"}`.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// A human-readable message describing the error that occurred.
    pub error: String,

    /// The underlying error text. Only populated in debug builds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
