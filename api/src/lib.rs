//! Quill API service.
//!
//! A small blogging backend: user registration and login with bcrypt
//! password hashing and JWT sessions, plus listing, publishing and deleting
//! articles. All state lives in a single JSON file managed by `quill-db`.
//!
//! # Configuration
//!
//! The API requires a secret for signing session tokens. See
//! [`config::QuillApiConfig`] for configuration options.
//!
//! # Authentication
//!
//! Bearer tokens (HS256 JWTs, 7-day expiry) carrying the user's id,
//! username and admin flag. See [`auth::jwt`] for details.

pub mod auth;
pub mod config;
pub mod server;

pub(crate) mod context;
pub(crate) mod error;
pub(crate) mod handlers;
