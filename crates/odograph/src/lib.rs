//! Odograph - connection-point layout for OData entity-relationship diagrams
//!
//! This library is the layout core of the Odograph explorer. The explorer
//! owns the diagram state — which entities exist, where the user has
//! dragged them, which navigation links connect them — and calls into this
//! crate every time that state changes. The engine answers one question:
//! for every relation, which side of each connected node should it attach
//! to, and where along that side, so that relations sharing a border do
//! not overlap.
//!
//! Everything else the explorer does (service metadata parsing, query
//! execution, mock-data generation, rendering) lives outside this
//! repository and talks to the engine only through [`topology::Topology`].
//!
//! # Examples
//!
//! ```
//! use odograph::geometry::{Point, Side, Size};
//! use odograph::identifier::Id;
//! use odograph::layout::Engine;
//! use odograph::topology::{Node, Relation, Topology};
//!
//! let mut topology = Topology::new();
//! topology.add_node(
//!     Node::new(Id::new("Customer"), Point::new(0.0, 0.0)).with_size(Size::new(100.0, 100.0)),
//! );
//! topology.add_node(
//!     Node::new(Id::new("Order"), Point::new(300.0, 0.0)).with_size(Size::new(100.0, 100.0)),
//! );
//! topology.add_relation(Relation::new(
//!     Id::new("Customer_Orders"),
//!     Id::new("Customer"),
//!     Id::new("Order"),
//! ));
//!
//! let layout = Engine::new().calculate(&topology).expect("unique identifiers");
//! let customer = layout.topology().node(Id::new("Customer")).unwrap();
//!
//! // The order sits to the customer's right, so the relation leaves
//! // through the right border, mid-side.
//! assert_eq!(customer.connection_points()[0].side(), Side::Right);
//! assert_eq!(customer.connection_points()[0].offset_percent(), 50.0);
//! ```

pub mod config;
mod error;
pub mod layout;

pub use odograph_core::{geometry, identifier, topology};

pub use error::OdographError;
