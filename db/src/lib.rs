//! Persistence layer for Quill.
//!
//! The whole application state lives in one JSON document (see
//! [`models::Document`]) that is loaded and rewritten wholesale by the
//! storage layer. [`storage::json::JsonStore`] is the only implementation;
//! handlers talk to it through the traits in [`storage`].

pub mod models;
pub mod storage;
