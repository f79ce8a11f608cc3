//! The caller-owned diagram model.
//!
//! A [`Topology`] is the in-memory picture of an entity-relationship
//! diagram: [`Node`]s (entity boxes with a position and an optional size)
//! and [`Relation`]s (directed links between two node identifiers). It is
//! owned and mutated by the hosting application — positions change on drag
//! or auto-layout, nodes and relations appear as service metadata loads —
//! and handed to the layout engine whenever it changes.
//!
//! The engine annotates a topology rather than editing it in place: every
//! node's [`ConnectionPoint`] list and every relation's connection-point
//! ids are **derived output**, fully regenerated on each layout pass and
//! never accumulated across calls.
//!
//! Relations are allowed to reference node identifiers that are not (yet)
//! present in the node set; such relations stay part of the topology and
//! are simply left unannotated by the engine.

use std::fmt;

use crate::{
    geometry::{Bounds, Point, Side, Size},
    identifier::Id,
};

/// Which end of a relation a connection point serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// The point sits on the relation's source node.
    Source,
    /// The point sits on the relation's target node.
    Target,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Source => write!(f, "source"),
            Role::Target => write!(f, "target"),
        }
    }
}

/// Deterministic identity of a connection point.
///
/// The identity is the value of the tuple (role, source node, target node,
/// relation): recomputing layout over unchanged input therefore yields
/// identical ids, and a relation can find its own points on the annotated
/// nodes by comparing ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionPointId {
    role: Role,
    source: Id,
    target: Id,
    relation: Id,
}

impl ConnectionPointId {
    /// Creates the identity for the `role` end of the given relation.
    pub fn new(role: Role, source: Id, target: Id, relation: Id) -> Self {
        Self {
            role,
            source,
            target,
            relation,
        }
    }

    /// Returns which relation end this identity belongs to.
    pub fn role(self) -> Role {
        self.role
    }

    /// Returns the source node id of the owning relation.
    pub fn source(self) -> Id {
        self.source
    }

    /// Returns the target node id of the owning relation.
    pub fn target(self) -> Id {
        self.target
    }

    /// Returns the id of the owning relation.
    pub fn relation(self) -> Id {
        self.relation
    }
}

impl fmt::Display for ConnectionPointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}->{}:{}",
            self.role, self.source, self.target, self.relation
        )
    }
}

/// A specific (side, offset) location on a node's border where a relation
/// visually attaches.
///
/// Points are created mid-side and spread out afterwards, so the offset is
/// provisional until the layout pass that produced the point completes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectionPoint {
    id: ConnectionPointId,
    role: Role,
    side: Side,
    offset_percent: f32,
}

impl ConnectionPoint {
    /// Creates a connection point on the given side with a provisional
    /// midpoint offset of 50%.
    pub fn new(id: ConnectionPointId, role: Role, side: Side) -> Self {
        Self {
            id,
            role,
            side,
            offset_percent: 50.0,
        }
    }

    /// Returns the deterministic identity of this point.
    pub fn id(self) -> ConnectionPointId {
        self.id
    }

    /// Returns which relation end this point serves.
    pub fn role(self) -> Role {
        self.role
    }

    /// Returns the node border this point sits on.
    pub fn side(self) -> Side {
        self.side
    }

    /// Returns the position along the side as a percentage of its length.
    ///
    /// Assigned points always lie strictly between 0 and 100.
    pub fn offset_percent(self) -> f32 {
        self.offset_percent
    }

    /// Sets the position along the side.
    pub fn set_offset_percent(&mut self, offset_percent: f32) {
        self.offset_percent = offset_percent;
    }
}

/// A diagram node (entity box) with a position, an optional size, and the
/// derived connection points of the most recent layout pass.
#[derive(Debug, Clone)]
pub struct Node {
    id: Id,
    position: Point,
    size: Option<Size>,
    connection_points: Vec<ConnectionPoint>,
}

impl Node {
    /// Creates a node at the given top-left position with no reported size.
    pub fn new(id: Id, position: Point) -> Self {
        Self {
            id,
            position,
            size: None,
            connection_points: Vec::new(),
        }
    }

    /// Sets the node's measured size (builder style).
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    /// Returns the node identifier.
    pub fn id(&self) -> Id {
        self.id
    }

    /// Returns the top-left position of the node.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Moves the node to a new top-left position.
    ///
    /// Positions are owned by the caller (drag, auto-layout); the layout
    /// engine only reads them.
    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    /// Returns the node's measured size, if one has been reported.
    pub fn size(&self) -> Option<Size> {
        self.size
    }

    /// Returns the node's bounding box, substituting `default_size` when no
    /// size has been reported.
    pub fn bounds_with_default(&self, default_size: Size) -> Bounds {
        Bounds::new_from_top_left(self.position, self.size.unwrap_or(default_size))
    }

    /// Returns the connection points derived by the most recent layout pass,
    /// in the order their relations were processed.
    pub fn connection_points(&self) -> &[ConnectionPoint] {
        &self.connection_points
    }

    /// Returns mutable access to the derived connection points.
    pub fn connection_points_mut(&mut self) -> &mut [ConnectionPoint] {
        &mut self.connection_points
    }

    /// Appends a derived connection point.
    pub fn add_connection_point(&mut self, point: ConnectionPoint) {
        self.connection_points.push(point);
    }

    /// Discards all derived connection points.
    pub fn clear_connection_points(&mut self) {
        self.connection_points.clear();
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// A directed relation between two nodes, referenced by node id.
///
/// The endpoints need not resolve to nodes in the topology; unresolvable
/// relations are carried through layout unannotated.
#[derive(Debug, Clone)]
pub struct Relation {
    id: Id,
    source: Id,
    target: Id,
    source_connection_point: Option<ConnectionPointId>,
    target_connection_point: Option<ConnectionPointId>,
}

impl Relation {
    /// Creates a relation from `source` to `target`.
    pub fn new(id: Id, source: Id, target: Id) -> Self {
        Self {
            id,
            source,
            target,
            source_connection_point: None,
            target_connection_point: None,
        }
    }

    /// Returns the relation identifier.
    pub fn id(&self) -> Id {
        self.id
    }

    /// Returns the source node id.
    pub fn source(&self) -> Id {
        self.source
    }

    /// Returns the target node id.
    pub fn target(&self) -> Id {
        self.target
    }

    /// Returns the id of the point this relation leaves through on its
    /// source node, if the last layout pass resolved both endpoints.
    pub fn source_connection_point(&self) -> Option<ConnectionPointId> {
        self.source_connection_point
    }

    /// Returns the id of the point this relation enters through on its
    /// target node, if the last layout pass resolved both endpoints.
    pub fn target_connection_point(&self) -> Option<ConnectionPointId> {
        self.target_connection_point
    }

    /// Records the source-end connection point (derived output).
    pub fn set_source_connection_point(&mut self, point: Option<ConnectionPointId>) {
        self.source_connection_point = point;
    }

    /// Records the target-end connection point (derived output).
    pub fn set_target_connection_point(&mut self, point: Option<ConnectionPointId>) {
        self.target_connection_point = point;
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}

/// A caller-owned collection of nodes and relations.
///
/// Insertion order is significant: the layout engine processes relations in
/// the order they appear here, which fixes the order of connection points
/// along a shared side.
#[derive(Debug, Clone, Default)]
pub struct Topology {
    nodes: Vec<Node>,
    relations: Vec<Relation>,
}

impl Topology {
    /// Creates an empty topology.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assembles a topology from already-built collections.
    pub fn from_parts(nodes: Vec<Node>, relations: Vec<Relation>) -> Self {
        Self { nodes, relations }
    }

    /// Appends a node.
    pub fn add_node(&mut self, node: Node) {
        self.nodes.push(node);
    }

    /// Appends a relation.
    pub fn add_relation(&mut self, relation: Relation) {
        self.relations.push(relation);
    }

    /// Returns the nodes in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Returns the relations in insertion order.
    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }

    /// Returns mutable access to the nodes, for position edits.
    pub fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    /// Looks up a node by id.
    pub fn node(&self, id: Id) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id() == id)
    }

    /// Looks up a relation by id.
    pub fn relation(&self, id: Id) -> Option<&Relation> {
        self.relations.iter().find(|relation| relation.id() == id)
    }

    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of relations.
    pub fn relation_count(&self) -> usize {
        self.relations.len()
    }

    /// Returns true if the topology holds no nodes and no relations.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.relations.is_empty()
    }
}
