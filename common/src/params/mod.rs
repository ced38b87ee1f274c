//! Input parameters for the various functions within Quill.

mod article;
mod auth;

pub use article::*;
pub use auth::*;
