//! Odograph Core Types and Definitions
//!
//! This crate provides the foundational types for Odograph diagram
//! topologies. It includes:
//!
//! - **Identifiers**: Efficient string-interned identifiers ([`identifier::Id`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Topology**: The caller-owned diagram model ([`topology`] module)
//!
//! The types here carry no layout logic of their own; the `odograph` crate
//! consumes them to compute connection-point annotations.

pub mod geometry;
pub mod identifier;
pub mod topology;
