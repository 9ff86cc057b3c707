//! Measure a lot and print the panel text.
//!
//! Run with: cargo run --example measure_lot -- feet

use geomeasure::{GridLines, LatLng, Meters, Unit, aggregate, bounds, edge_midpoints};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let unit = match std::env::args().nth(1).map(|s| s.parse::<Unit>()) {
        Some(Ok(unit)) => unit,
        Some(Err(e)) => {
            eprintln!("Error: {:?}", miette::Report::new(e));
            std::process::exit(2);
        }
        None => Unit::Meters,
    };

    let lot = [
        LatLng::new(37.759310, -122.414540),
        LatLng::new(37.759330, -122.414200),
        LatLng::new(37.759010, -122.414180),
        LatLng::new(37.758990, -122.414520),
        LatLng::new(37.759150, -122.414610),
    ];

    let Some(m) = aggregate(&lot) else {
        println!("Nothing to measure yet");
        return;
    };
    println!("{}", m.report(unit));

    for (i, mid) in edge_midpoints(&lot).iter().enumerate() {
        tracing::info!(side = i + 1, lat = mid.lat, lng = mid.lng, "label anchor");
    }

    if let Some(b) = bounds(&lot) {
        match GridLines::for_bounds(b, Meters(10.0)) {
            Ok(grid) => println!("10 m grid: {} lines over the lot", grid.len()),
            Err(e) => eprintln!("Error: {:?}", miette::Report::new(e)),
        }
    }
}
