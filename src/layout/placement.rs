// Sun, orbit and grid geometry.
//
// All circular placement starts at 12 o'clock (-pi/2) and advances in equal
// steps in the positive rotation of screen coordinates (y grows downward).
// The same convention applies to the sun ring and to member orbits.
//
// Overlap avoidance is closed-form rather than iterative: the ring radius
// grows with the cluster count and the largest sun, the orbit radius grows
// with the member count and clears the cluster's own sun.

use std::collections::HashMap;
use std::f64::consts::PI;

use super::grouping::Cluster;
use super::{LayoutConfig, Point};

/// Radius of the outer ring the suns sit on.
///
/// Zero for a single cluster (its sun sits at the origin), the fixed twin
/// distance for exactly two, and a count-and-footprint scaled radius for
/// three or more. Expects clusters in descending size order, so the largest
/// sun is `clusters[0]`.
pub fn ring_radius(clusters: &[Cluster], cfg: &LayoutConfig) -> f64 {
    let n = clusters.len();
    if n <= 1 {
        return 0.0;
    }
    if n == 2 {
        return cfg.twin_radius;
    }
    let max_sun = cfg.sun_size(clusters[0].members.len());
    cfg.ring_min_radius.max(n as f64 * cfg.ring_spacing + max_sun)
}

/// Place one sun per cluster.
///
/// A lone sun sits at the origin; two suns face each other across it on the
/// horizontal axis; three or more spread evenly on the ring, first cluster
/// at the top.
pub fn place_suns(clusters: &[Cluster], radius: f64) -> HashMap<String, Point> {
    let n = clusters.len();
    let mut suns = HashMap::new();

    for (idx, cluster) in clusters.iter().enumerate() {
        let pos = if n == 1 {
            Point { x: 0.0, y: 0.0 }
        } else if n == 2 {
            let x = if idx == 0 { -radius / 2.0 } else { radius / 2.0 };
            Point { x, y: 0.0 }
        } else {
            let angle = (idx as f64 / n as f64) * 2.0 * PI - PI / 2.0;
            Point {
                x: radius * angle.cos(),
                y: radius * angle.sin(),
            }
        };
        suns.insert(cluster.tag.clone(), pos);
    }

    suns
}

/// Orbit radius for a cluster of `member_count` contacts: clears the sun's
/// own footprint and grows with the count so members of a large cluster
/// don't crowd together.
pub fn orbit_radius(member_count: usize, cfg: &LayoutConfig) -> f64 {
    let sun_clearance = cfg.sun_size(member_count) / 2.0 + cfg.orbit_clearance;
    sun_clearance.max(member_count as f64 * cfg.orbit_spacing)
}

/// Place a cluster's members evenly spaced on their orbit around `sun`.
/// A single member goes to the top of the orbit, never onto the sun itself.
pub fn place_members(
    cluster: &Cluster,
    sun: Point,
    cfg: &LayoutConfig,
    positions: &mut HashMap<String, Point>,
) {
    let m = cluster.members.len();
    if m == 0 {
        // Grouping never produces empty clusters; guard the division anyway.
        return;
    }

    let orbit = orbit_radius(m, cfg);
    for (i, id) in cluster.members.iter().enumerate() {
        let angle = (i as f64 / m as f64) * 2.0 * PI - PI / 2.0;
        positions.insert(
            id.clone(),
            Point {
                x: sun.x + orbit * angle.cos(),
                y: sun.y + orbit * angle.sin(),
            },
        );
    }
}

/// Place untagged contacts in a fixed-column grid below the cluster region.
/// `baseline` is the sun ring radius, so the grid always clears the ring.
pub fn place_untagged(
    ids: &[String],
    baseline: f64,
    cfg: &LayoutConfig,
    positions: &mut HashMap<String, Point>,
) {
    let origin_x = -((cfg.grid_columns as f64 - 1.0) * cfg.grid_spacing) / 2.0;
    let offset_y = baseline + cfg.grid_margin;

    for (i, id) in ids.iter().enumerate() {
        let col = (i % cfg.grid_columns) as f64;
        let row = (i / cfg.grid_columns) as f64;
        positions.insert(
            id.clone(),
            Point {
                x: origin_x + col * cfg.grid_spacing,
                y: offset_y + row * cfg.grid_spacing,
            },
        );
    }
}
