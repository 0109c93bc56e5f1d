// Force-free "solar" layout for the contact mind map.
//
// Goals:
// - Deterministic: no randomness, no iteration over unordered maps
// - One sun per tag cluster on an outer ring, members on per-cluster orbits
// - Overlap-aware: ring and orbit radii both derive from the sun footprint,
//   so suns clear each other and members clear their own sun
// - Untagged contacts fall back to a grid below the cluster region
//
// Submodules:
// - grouping: primary-tag partition + descending-size cluster ordering
// - placement: sun ring, member orbits, untagged grid
//
// Output:
// - SolarLayout with one position map per contact id and per cluster tag.

use std::collections::HashMap;

use crate::contact::Contact;
use serde::Serialize;

mod grouping;
mod placement;

pub use placement::orbit_radius;

#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Sun diameter for an empty cluster.
    pub sun_base_size: f64,
    /// Sun diameter growth per member.
    pub sun_growth: f64,
    /// Cap on the sun diameter so huge clusters stop growing.
    pub sun_max_size: f64,
    /// Distance between the two suns when exactly two clusters exist.
    pub twin_radius: f64,
    /// Minimum ring radius for three or more clusters.
    pub ring_min_radius: f64,
    /// Extra ring radius per cluster.
    pub ring_spacing: f64,
    /// Gap between a sun's edge and its members' orbit.
    pub orbit_clearance: f64,
    /// Orbit radius growth per member.
    pub orbit_spacing: f64,
    /// Columns in the untagged grid.
    pub grid_columns: usize,
    /// Cell spacing of the untagged grid, both axes.
    pub grid_spacing: f64,
    /// Gap between the cluster region and the untagged grid.
    pub grid_margin: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            sun_base_size: 140.0,
            sun_growth: 4.0,
            sun_max_size: 260.0,
            twin_radius: 350.0,
            ring_min_radius: 350.0,
            ring_spacing: 140.0,
            orbit_clearance: 80.0,
            orbit_spacing: 40.0,
            grid_columns: 5,
            grid_spacing: 150.0,
            grid_margin: 400.0,
        }
    }
}

impl LayoutConfig {
    /// Visual sun diameter for a cluster of `member_count` contacts.
    /// Non-decreasing in the count and saturating at `sun_max_size`.
    /// Ring spacing and orbit radii share this footprint.
    pub fn sun_size(&self, member_count: usize) -> f64 {
        (self.sun_base_size + member_count as f64 * self.sun_growth).min(self.sun_max_size)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SolarLayout {
    /// Position per contact id (cluster members and untagged alike).
    pub contact_positions: HashMap<String, Point>,
    /// Sun position per cluster tag. Untagged contacts have no sun.
    pub sun_positions: HashMap<String, Point>,
}

/// Compute the solar layout for the given contacts.
///
/// Pure function of its input: same contacts in the same order always yield
/// the same maps. Every input contact gets exactly one entry in
/// `contact_positions`.
pub fn compute_solar_layout(contacts: &[Contact], cfg: &LayoutConfig) -> SolarLayout {
    let (clusters, untagged) = grouping::group_by_primary_tag(contacts);
    let clusters = grouping::order_clusters(clusters);

    let ring_radius = placement::ring_radius(&clusters, cfg);
    let sun_positions = placement::place_suns(&clusters, ring_radius);

    let mut contact_positions = HashMap::new();
    for cluster in &clusters {
        let sun = sun_positions
            .get(&cluster.tag)
            .copied()
            .unwrap_or_default();
        placement::place_members(cluster, sun, cfg, &mut contact_positions);
    }
    placement::place_untagged(&untagged, ring_radius, cfg, &mut contact_positions);

    SolarLayout {
        contact_positions,
        sun_positions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn contact(id: &str, tags: &[&str]) -> Contact {
        Contact {
            id: id.to_string(),
            category_tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn assert_close(p: Point, x: f64, y: f64) {
        assert!(
            (p.x - x).abs() < 1e-9 && (p.y - y).abs() < 1e-9,
            "expected ({x}, {y}), got ({}, {})",
            p.x,
            p.y
        );
    }

    #[test]
    fn test_empty_input_yields_empty_maps() {
        let layout = compute_solar_layout(&[], &LayoutConfig::default());
        assert!(layout.contact_positions.is_empty());
        assert!(layout.sun_positions.is_empty());
    }

    #[test]
    fn test_deterministic_across_invocations() {
        let contacts = vec![
            contact("1", &["Work"]),
            contact("2", &["Family"]),
            contact("3", &["Work", "Tech"]),
            contact("4", &[]),
        ];
        let cfg = LayoutConfig::default();
        let a = compute_solar_layout(&contacts, &cfg);
        let b = compute_solar_layout(&contacts, &cfg);
        assert_eq!(a.contact_positions, b.contact_positions);
        assert_eq!(a.sun_positions, b.sun_positions);
    }

    #[test]
    fn test_every_contact_gets_exactly_one_position() {
        let contacts = vec![
            contact("1", &["Work"]),
            contact("2", &["Family"]),
            contact("3", &["Work"]),
            contact("4", &[]),
            contact("5", &["Friends"]),
            contact("6", &[]),
        ];
        let layout = compute_solar_layout(&contacts, &LayoutConfig::default());
        assert_eq!(layout.contact_positions.len(), contacts.len());
        for c in &contacts {
            assert!(layout.contact_positions.contains_key(&c.id));
        }
        // One sun per distinct primary tag, none for the untagged.
        assert_eq!(layout.sun_positions.len(), 3);
    }

    #[test]
    fn test_single_cluster_sun_at_origin() {
        let contacts = vec![contact("1", &["Work"]), contact("2", &["Work"])];
        let cfg = LayoutConfig::default();
        let layout = compute_solar_layout(&contacts, &cfg);

        assert_eq!(layout.sun_positions.len(), 1);
        assert_close(layout.sun_positions["Work"], 0.0, 0.0);

        // Two members: top and bottom of the orbit.
        let orbit = orbit_radius(2, &cfg);
        assert_close(layout.contact_positions["1"], 0.0, -orbit);
        assert_close(layout.contact_positions["2"], 0.0, orbit);
    }

    #[test]
    fn test_untagged_only_uses_zero_baseline_grid() {
        let contacts = vec![contact("1", &[]), contact("2", &[])];
        let cfg = LayoutConfig::default();
        let layout = compute_solar_layout(&contacts, &cfg);

        assert!(layout.sun_positions.is_empty());
        let origin_x = -((cfg.grid_columns as f64 - 1.0) * cfg.grid_spacing) / 2.0;
        assert_close(layout.contact_positions["1"], origin_x, cfg.grid_margin);
        assert_close(
            layout.contact_positions["2"],
            origin_x + cfg.grid_spacing,
            cfg.grid_margin,
        );
    }

    #[test]
    fn test_three_clusters_ordered_by_size_on_ring() {
        // Input order deliberately differs from size order.
        let contacts = vec![
            contact("s1", &["Solo"]),
            contact("p1", &["Pair"]),
            contact("t1", &["Trio"]),
            contact("t2", &["Trio"]),
            contact("p2", &["Pair"]),
            contact("t3", &["Trio"]),
        ];
        let cfg = LayoutConfig::default();
        let layout = compute_solar_layout(&contacts, &cfg);

        let radius = cfg
            .ring_min_radius
            .max(3.0 * cfg.ring_spacing + cfg.sun_size(3));
        for (idx, tag) in ["Trio", "Pair", "Solo"].iter().enumerate() {
            let angle = (idx as f64 / 3.0) * 2.0 * PI - PI / 2.0;
            assert_close(
                layout.sun_positions[*tag],
                radius * angle.cos(),
                radius * angle.sin(),
            );
        }
    }

    #[test]
    fn test_members_sit_exactly_on_their_orbit() {
        let contacts = vec![
            contact("a", &["Work"]),
            contact("b", &["Work"]),
            contact("c", &["Work"]),
            contact("d", &["Family"]),
        ];
        let cfg = LayoutConfig::default();
        let layout = compute_solar_layout(&contacts, &cfg);

        let work_sun = layout.sun_positions["Work"];
        let orbit = orbit_radius(3, &cfg);
        for id in ["a", "b", "c"] {
            let p = layout.contact_positions[id];
            let dist = ((p.x - work_sun.x).powi(2) + (p.y - work_sun.y).powi(2)).sqrt();
            assert!((dist - orbit).abs() < 1e-9);
            assert!(orbit >= cfg.sun_size(3) / 2.0);
        }
    }

    #[test]
    fn test_untagged_grid_sits_below_cluster_ring() {
        let tags = ["A", "B", "C", "D"];
        let mut contacts: Vec<Contact> = tags
            .iter()
            .enumerate()
            .map(|(i, tag)| contact(&format!("t{i}"), &[*tag]))
            .collect();
        contacts.push(contact("u1", &[]));
        let cfg = LayoutConfig::default();
        let layout = compute_solar_layout(&contacts, &cfg);

        let ring = cfg
            .ring_min_radius
            .max(4.0 * cfg.ring_spacing + cfg.sun_size(1));
        let grid = layout.contact_positions["u1"];
        assert!((grid.y - (ring + cfg.grid_margin)).abs() < 1e-9);
        // Strictly below every sun.
        for sun in layout.sun_positions.values() {
            assert!(grid.y > sun.y);
        }
    }
}
