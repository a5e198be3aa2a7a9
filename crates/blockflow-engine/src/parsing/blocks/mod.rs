//! # Structural Building
//!
//! Two-phase decomposition of source lines into a depth-annotated node stream.
//!
//! ## Phases
//!
//! 1. **Line Classification** (`classify`): a `LineClassifier` maps a trimmed
//!    line plus scanner state to a `Category`, and answers whether the line
//!    opens or closes a block
//!
//! 2. **Structural Building** (`brace_builder`, `indent_builder`): a
//!    `FlowBuilder` consumes lines in order, keeps a `DepthStack`, and emits
//!    `Node`s as depth changes
//!
//! ## Modules
//!
//! - **`types`**: Core types (`Node`, `Category`, `Anomaly`)
//! - **`kinds`**: Token syntax with owned delimiters (Brace, BlockComment, TripleQuote, ...)
//! - **`classify`**: `BraceClassifier` and `IndentClassifier`
//! - **`containers`**: `DepthStack`, the nesting stack both builders share
//! - **`builder`**: `FlowBuilder` trait, `ParsedFlow`, and shared emit helpers
//! - **`brace_builder`**: brace-tracking builder
//! - **`indent_builder`**: indentation-tracking builder
//!
//! ## Key Invariants
//!
//! - Depth is never negative; structural anomalies are recorded, never fatal
//! - Nodes are emitted in source order and carry byte spans into the rope
//! - Category never changes how the indentation builder nests lines

pub mod brace_builder;
pub mod builder;
pub mod classify;
pub mod containers;
pub mod indent_builder;
pub mod kinds;
pub mod types;

pub use brace_builder::BraceBuilder;
pub use builder::{FlowBuilder, ParsedFlow};
pub use classify::{BraceClassifier, IndentClassifier, LineClassifier, ScanState};
pub use containers::DepthStack;
pub use indent_builder::IndentBuilder;
pub use types::{Anomaly, AnomalyKind, Category, Node};
