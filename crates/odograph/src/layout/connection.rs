//! Connection-point assignment for diagram relations.
//!
//! For each relation whose endpoints both resolve, the engine compares the
//! center-to-center delta of the two nodes and attaches the relation to the
//! facing borders of the dominant axis. Points that land on the same border
//! of the same node are then spread so consecutive points are equidistant
//! and none sits flush with a corner.
//!
//! The computation is a pure function of the input topology and the engine
//! configuration: same input, same annotated output, including the derived
//! connection-point ids.

use indexmap::{IndexMap, IndexSet};
use log::{debug, warn};

use odograph_core::{
    geometry::{Axis, Point, Side},
    identifier::Id,
    topology::{ConnectionPoint, ConnectionPointId, Node, Relation, Role, Topology},
};

use crate::{config::LayoutConfig, error::OdographError};

/// The connection layout engine.
///
/// Stateless apart from its configuration; one engine can annotate any
/// number of topologies, from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: LayoutConfig,
}

impl Engine {
    /// Creates an engine with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with the given configuration.
    pub fn with_config(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// Returns the engine's configuration.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Computes connection points for every resolvable relation.
    ///
    /// Returns a structurally new, annotated topology; the input is not
    /// mutated. Relations whose source or target id is absent from the node
    /// set pass through unannotated and are reported via
    /// [`Layout::skipped_relations`].
    ///
    /// # Errors
    ///
    /// Fails fast on duplicate node or relation identifiers, since the
    /// annotated output is keyed by id.
    pub fn calculate(&self, topology: &Topology) -> Result<Layout, OdographError> {
        debug!(
            nodes = topology.node_count(),
            relations = topology.relation_count();
            "Calculating connection layout",
        );

        let default_size = self.config.default_node_size();

        let mut nodes: Vec<Node> = Vec::with_capacity(topology.node_count());
        let mut index_by_id: IndexMap<Id, usize> = IndexMap::with_capacity(topology.node_count());
        for node in topology.nodes() {
            let mut node = node.clone();
            node.clear_connection_points();

            if index_by_id.insert(node.id(), nodes.len()).is_some() {
                return Err(OdographError::DuplicateNode(node.id()));
            }
            if let Some(size) = node.size() {
                if size.is_degenerate() {
                    warn!(
                        node:% = node.id(),
                        width = size.width(),
                        height = size.height();
                        "Node has a degenerate size; its center is computed as-is",
                    );
                }
            }
            nodes.push(node);
        }

        let mut relations: Vec<Relation> = Vec::with_capacity(topology.relation_count());
        let mut relation_ids: IndexSet<Id> = IndexSet::with_capacity(topology.relation_count());
        let mut skipped: Vec<Id> = Vec::new();

        for relation in topology.relations() {
            let mut relation = relation.clone();
            relation.set_source_connection_point(None);
            relation.set_target_connection_point(None);

            if !relation_ids.insert(relation.id()) {
                return Err(OdographError::DuplicateRelation(relation.id()));
            }

            let (Some(&source_index), Some(&target_index)) = (
                index_by_id.get(&relation.source()),
                index_by_id.get(&relation.target()),
            ) else {
                debug!(relation:% = relation.id(); "Skipping relation with unresolvable endpoint");
                skipped.push(relation.id());
                relations.push(relation);
                continue;
            };

            let source_center = nodes[source_index].bounds_with_default(default_size).center();
            let target_center = nodes[target_index].bounds_with_default(default_size).center();
            let delta = target_center.sub_point(source_center);

            let (source_side, target_side) = assign_sides(delta, self.config.tie_break);

            let source_point = ConnectionPoint::new(
                ConnectionPointId::new(
                    Role::Source,
                    relation.source(),
                    relation.target(),
                    relation.id(),
                ),
                Role::Source,
                source_side,
            );
            let target_point = ConnectionPoint::new(
                ConnectionPointId::new(
                    Role::Target,
                    relation.source(),
                    relation.target(),
                    relation.id(),
                ),
                Role::Target,
                target_side,
            );

            relation.set_source_connection_point(Some(source_point.id()));
            relation.set_target_connection_point(Some(target_point.id()));
            nodes[source_index].add_connection_point(source_point);
            nodes[target_index].add_connection_point(target_point);
            relations.push(relation);
        }

        for node in &mut nodes {
            spread_side_offsets(node.connection_points_mut(), self.config.min_spread_count);
        }

        debug!(skipped = skipped.len(); "Connection layout calculated");

        Ok(Layout::new(Topology::from_parts(nodes, relations), skipped))
    }
}

/// Decides which borders of the source and target nodes a relation uses.
///
/// The dominant axis of the center-to-center delta wins; an exact tie falls
/// back to the configured axis. A self-loop has a zero delta and therefore
/// resolves through the tie-break, landing on top/bottom under the default
/// vertical rule.
fn assign_sides(delta: Point, tie_break: Axis) -> (Side, Side) {
    let axis = if delta.x().abs() > delta.y().abs() {
        Axis::Horizontal
    } else if delta.y().abs() > delta.x().abs() {
        Axis::Vertical
    } else {
        tie_break
    };

    match axis {
        Axis::Horizontal if delta.x() > 0.0 => (Side::Right, Side::Left),
        Axis::Horizontal => (Side::Left, Side::Right),
        Axis::Vertical if delta.y() > 0.0 => (Side::Bottom, Side::Top),
        Axis::Vertical => (Side::Top, Side::Bottom),
    }
}

/// Spreads the points sharing one border so that `k` points sit at
/// `100 * i / (k + 1)` percent, in the order their relations were
/// processed.
///
/// The `k + 1` denominator leaves a gap before the first and after the
/// last point, so no point ever sits exactly on a corner; a lone point
/// stays mid-side. Sides with fewer than `min_count` points keep their
/// provisional mid-side offset.
fn spread_side_offsets(points: &mut [ConnectionPoint], min_count: usize) {
    for side in [Side::Top, Side::Bottom, Side::Left, Side::Right] {
        let total = points.iter().filter(|point| point.side() == side).count();
        if total < min_count {
            continue;
        }

        for (ordinal, point) in points
            .iter_mut()
            .filter(|point| point.side() == side)
            .enumerate()
        {
            point.set_offset_percent(100.0 * (ordinal + 1) as f32 / (total + 1) as f32);
        }
    }
}

/// The result of a layout pass: the annotated topology plus the ids of the
/// relations that could not be resolved against the node set.
#[derive(Debug, Clone)]
pub struct Layout {
    topology: Topology,
    skipped_relations: Vec<Id>,
}

impl Layout {
    fn new(topology: Topology, skipped_relations: Vec<Id>) -> Self {
        Self {
            topology,
            skipped_relations,
        }
    }

    /// Returns the annotated topology.
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Consumes the layout, returning the annotated topology.
    pub fn into_topology(self) -> Topology {
        self.topology
    }

    /// Returns the ids of relations skipped because an endpoint did not
    /// resolve, in input order.
    pub fn skipped_relations(&self) -> &[Id] {
        &self.skipped_relations
    }
}
