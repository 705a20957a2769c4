//! # Line Parsing
//!
//! Each input line is classified on its own, without reference to the lines
//! around it.
//!
//! ## Modules
//!
//! - **`element`**: The closed set of block elements a line can become
//! - **`kinds`**: Per-kind matchers owning their delimiter syntax
//! - **`classify`**: `LineClassifier` trying the matchers in priority order,
//!   plus the hard line break policy

pub mod classify;
pub mod element;
pub mod kinds;

pub use classify::{Classification, LineBreakPolicy, LineClassifier, classify};
pub use element::Element;
