//! Checks a short vehicle track against a city-centre geofence.
//!
//! Run with: RUST_LOG=debug cargo run --example geofence_demo

use geofence::polygon::classify;
use geofence::{BoundaryPolicy, Geofence, GeofenceConfig, GeofenceError, Point2, Prefilter};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), GeofenceError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Longitude/latitude pairs, treated as planar coordinates.
    let zone = vec![
        Point2::new(11.9500, 57.7000),
        Point2::new(11.9900, 57.7000),
        Point2::new(11.9900, 57.7200),
        Point2::new(11.9700, 57.7100),
        Point2::new(11.9500, 57.7200),
    ];

    let fence = Geofence::with_config(
        zone.clone(),
        GeofenceConfig::default()
            .with_boundary(BoundaryPolicy::Inclusive)
            .with_prefilter(Prefilter::ConvexHull),
    )?;

    let track = [
        Point2::new(11.9400, 57.7050),
        Point2::new(11.9500, 57.7050),
        Point2::new(11.9600, 57.7050),
        Point2::new(11.9700, 57.7150),
        Point2::new(11.9850, 57.7150),
        Point2::new(12.0000, 57.7100),
    ];

    for p in track {
        println!(
            "({:.4}, {:.4}) inside={} location={:?}",
            p.x,
            p.y,
            fence.contains(p),
            classify(&zone, p)
        );
    }

    Ok(())
}
