//! Error types for Odograph operations.
//!
//! This module provides the main error type [`OdographError`]. Layout is
//! deliberately total over degenerate geometry (zero sizes, self-loops,
//! unresolvable endpoints never fail); the only rejected inputs are
//! duplicate identifiers, which downstream consumers assume are unique.

use thiserror::Error;

use odograph_core::identifier::Id;

/// The main error type for Odograph operations.
///
/// Duplicate identifiers fail fast rather than silently overwriting an
/// earlier node or relation; an explorer surfacing one of these has a bug
/// in the metadata it fed in, not a transiently inconsistent diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OdographError {
    #[error("Duplicate node identifier: {0}")]
    DuplicateNode(Id),

    #[error("Duplicate relation identifier: {0}")]
    DuplicateRelation(Id),
}
