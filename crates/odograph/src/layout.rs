//! Layout engine for annotating diagram topologies.
//!
//! This module decides, for every relation in a topology, which side of
//! each connected node the relation visually attaches to, and how the
//! points sharing a side are spaced so they do not overlap. It owns no
//! state and never positions nodes; positions come in from the caller and
//! go back out untouched.
//!
//! # Pipeline Position
//!
//! ```text
//! Service metadata (external)
//!     ↓ explorer state
//! Topology (positions + relations)
//!     ↓ layout (this module)
//! Annotated Topology (connection points)
//!     ↓ rendering (external)
//! Markers and curves
//! ```
//!
//! # Submodules
//!
//! - [`connection`] - Connection-point side assignment and offset spreading

pub mod connection;

pub use connection::{Engine, Layout};
