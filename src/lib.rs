//! Helpers for harmonizing concept names merged from multiple source
//! ontologies: casing normalization for title-cased names, and collapsing of
//! per-source preferred-name statuses into a single flag.

pub mod casing;
pub mod status;

pub use casing::{lowercase_title_parts, lowercase_title_words};
pub use status::{collapse_status_codes, NameStatus, UnknownStatusCode};
