//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `rules.rs` - Per-kind movement rules in hand-built positions
//! - `selection.rs` - Selection state machine and candidate queries
//! - `edge_cases.rs` - Preserved permissive behaviors and board edges
//! - `proptest.rs` - Property-based tests
//! - `logging.rs` - Log records under the `logging` feature

#[cfg(feature = "logging")]
mod logging;
mod selection;
