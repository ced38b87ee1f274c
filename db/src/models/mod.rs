mod article;
mod document;
mod user;

pub use article::*;
pub use document::*;
pub use user::*;
