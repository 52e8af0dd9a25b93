//! Core domain model for confessional.
//!
//! This crate defines the song catalog, the controlled theme vocabulary,
//! the matcher that picks the best song for a query, and the plain-text
//! match report exchanged with execution sandboxes.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod matcher;
pub mod model;
pub mod report;
pub mod taxonomy;

pub use error::{Error, Result};
pub use matcher::{MatchResult, Matcher, Query, ScoringPolicy, NO_MATCH_TITLE};
pub use model::{Catalog, CatalogEntry};
