//! Replay a drag and show where each pointer move lands.
//!
//! Run with: RUST_LOG=debug cargo run --example drag_snap --features tracing

use geomeasure::{LatLng, SnapConfig, Snapper, Vertex, VertexId, aggregate};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut lot = vec![
        Vertex::new(1, 0.0, 0.0),
        Vertex::new(2, 0.0, 0.0009),
        Vertex::new(3, 0.0009, 0.0009),
        Vertex::new(4, 0.0011, 0.0002),
    ];
    let dragged = VertexId(4);

    let snapper = Snapper::new(SnapConfig::default().with_grid_snapping(false));

    // Pointer path from the vertex's start toward due north of vertex 1
    let moves = [
        LatLng::new(0.0011, 0.00015),
        LatLng::new(0.00105, 0.0001),
        LatLng::new(0.001, 0.00004),
        LatLng::new(0.0009, 0.000005),
    ];

    for raw in moves {
        let out = snapper.resolve(raw, &lot, Some(dragged), 19.0);
        match out.fired {
            Some(c) => println!("{raw} -> {} (snapped to {}, score {:.3})", out.position, c.kind, c.score),
            None => println!("{raw} -> unchanged"),
        }
        if let Some(v) = lot.iter_mut().find(|v| v.id == dragged) {
            v.position = out.position;
        }
    }

    if let Some(m) = aggregate(&lot) {
        println!("{}", m.report(geomeasure::Unit::Meters));
    }
}
