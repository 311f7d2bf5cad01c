//! Incremental decode/format pipeline for platform log streams.
//!
//! Consumers should import through [`api`] rather than the internal modules.

pub mod api;
pub mod config;
pub mod decode;
pub mod error;
pub mod format;
pub mod record;
pub mod stream;
