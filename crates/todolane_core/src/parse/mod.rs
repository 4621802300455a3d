//! Parsers for inline task metadata.

pub mod metadata;
