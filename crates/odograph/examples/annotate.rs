//! Example: Annotating an entity topology with connection points
//!
//! This example demonstrates the basic workflow of:
//! 1. Building a topology from entity positions and navigation links
//! 2. Running the connection layout engine
//! 3. Reading the annotations back for rendering

use odograph::config::LayoutConfig;
use odograph::geometry::{Point, Size};
use odograph::identifier::Id;
use odograph::layout::Engine;
use odograph::topology::{Node, Relation, Topology};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A small slice of an OData service: three entity sets and their
    // navigation links, positioned as if the user had dragged them around.
    let mut topology = Topology::new();
    topology.add_node(
        Node::new(Id::new("Customer"), Point::new(0.0, 0.0)).with_size(Size::new(180.0, 120.0)),
    );
    topology.add_node(
        Node::new(Id::new("Order"), Point::new(400.0, 0.0)).with_size(Size::new(180.0, 160.0)),
    );
    // The Product box has not reported a size yet; the engine substitutes
    // the configured default.
    topology.add_node(Node::new(Id::new("Product"), Point::new(400.0, 400.0)));

    topology.add_relation(Relation::new(
        Id::new("Customer_Orders"),
        Id::new("Customer"),
        Id::new("Order"),
    ));
    topology.add_relation(Relation::new(
        Id::new("Order_Products"),
        Id::new("Order"),
        Id::new("Product"),
    ));
    // A link whose target entity set has not loaded yet; it is carried
    // through unannotated.
    topology.add_relation(Relation::new(
        Id::new("Order_Invoices"),
        Id::new("Order"),
        Id::new("Invoice"),
    ));

    // Annotate the topology.
    let config = LayoutConfig::default();
    let default_size = config.default_node_size();
    let engine = Engine::with_config(config);
    let layout = engine.calculate(&topology)?;

    // Print the attachment markers the way a renderer would consume them.
    for node in layout.topology().nodes() {
        println!("{}:", node.id());
        let bounds = node.bounds_with_default(default_size);
        for point in node.connection_points() {
            let marker = bounds.point_on_side(point.side(), point.offset_percent());
            println!(
                "  {} {} at {:.1}% -> ({:.1}, {:.1})",
                point.role(),
                point.side(),
                point.offset_percent(),
                marker.x(),
                marker.y(),
            );
        }
    }

    for skipped in layout.skipped_relations() {
        println!("skipped: {skipped} (endpoint not loaded)");
    }

    Ok(())
}
