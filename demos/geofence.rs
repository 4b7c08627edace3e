//! Small end-to-end tour: build coordinates, measure distances and bearings,
//! sample a circular geofence, and check which waypoints fall inside it.
//!
//! Run with `cargo run --example geofence`.

use anyhow::Result;

use vectorized2d::units::NM_TO_METERS;
use vectorized2d::{AngleUnit, Array2dOps, Coordinate, Point2D, Vector2D};

fn main() -> Result<()> {
    env_logger::init();

    // A base station and a handful of waypoints (degrees in, radians stored).
    let base = Coordinate::single(33.0, 34.0, AngleUnit::Degrees);
    let waypoints = Coordinate::new(
        &[33.1, 33.4, 32.8, 33.05],
        &[34.2, 33.9, 34.4, 34.02],
        AngleUnit::Degrees,
    )?;

    let (dists, bearings) = base.geo_dist_and_bearing(&waypoints)?;
    for i in 0..waypoints.rows() {
        log::info!(
            "waypoint {}: {:.1} km away, bearing {:.1} deg",
            i,
            dists[i] / 1000.0,
            bearings[i].to_degrees()
        );
    }

    // A 20 NM geofence around the base, sampled at 64 points.
    let fence_radius = 20.0 * NM_TO_METERS;
    let fence = base.circle_around(fence_radius, 64)?;
    println!("geofence sampled at {} points", fence.rows());

    let inside = dists.iter().filter(|&&d| d <= fence_radius).count();
    println!("{} of {} waypoints inside the fence", inside, waypoints.rows());

    // The same rows viewed as Cartesian points still expose the raw surface.
    let points: Point2D = Point2D::from_array(waypoints.as_view().to_owned())?;
    let displacement: Vector2D = &points - &Point2D::from_array(base.as_view().to_owned())?;
    println!("max angular displacement norm: {:.4} rad", {
        let norms = displacement.norm();
        norms.iter().cloned().fold(0.0_f64, f64::max)
    });

    Ok(())
}
