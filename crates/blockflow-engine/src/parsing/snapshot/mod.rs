//! # Snapshot Testing Support
//!
//! Utilities for testing the structural builders via snapshot assertions and
//! invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Renders a `ParsedFlow` as a stable text listing (one
//!   node per line) for `insta` snapshot testing
//! - **`invariants`**: Runtime checks for builder correctness (spans in bounds,
//!   nodes in source order, spans slicing back to the node text)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::normalize;
