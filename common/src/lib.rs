//! Shared wire-facing types for Quill.
//!
//! Holds the input parameters and output views used by the API surface, plus
//! the [`caller::Caller`] identity that authenticated requests carry around.

pub mod caller;
pub mod params;
pub mod views;
