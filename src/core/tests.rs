//! Core domain: unit tests for course layout.

use bevy::prelude::*;

use super::layout::{MIN_PAIR_SEPARATION, SITE_HEIGHT, SPAWN_CLEARANCE};
use super::{arc_segments, mail_layout};

#[test]
fn test_layout_is_deterministic_per_seed() {
    assert_eq!(mail_layout(42, 4, 40.0), mail_layout(42, 4, 40.0));
    assert_ne!(mail_layout(42, 4, 40.0), mail_layout(43, 4, 40.0));
}

#[test]
fn test_layout_places_every_pair_in_bounds() {
    let layout = mail_layout(7, 6, 40.0);
    assert_eq!(layout.len(), 6);

    for (index, sites) in layout.iter().enumerate() {
        assert_eq!(sites.id, index as u32);
        for site in [sites.point, sites.dropoff] {
            assert_eq!(site.y, SITE_HEIGHT);
            let horizontal = Vec2::new(site.x, site.z).length();
            assert!(horizontal >= SPAWN_CLEARANCE - 1e-4);
            assert!(horizontal <= 40.0 + 1e-4);
        }
    }
}

#[test]
fn test_layout_usually_separates_pairs() {
    let separated = mail_layout(99, 20, 40.0)
        .iter()
        .filter(|sites| sites.point.distance(sites.dropoff) >= MIN_PAIR_SEPARATION)
        .count();
    assert!(separated >= 18);
}

#[test]
fn test_arc_segments_lie_on_circle() {
    let center = Vec3::new(-30.0, 0.0, 0.0);
    let segments = arc_segments(center, 15.0, 0.0, 180.0, 12);
    assert_eq!(segments.len(), 12);

    let expected_chord = 2.0 * 15.0 * (15.0_f32.to_radians() / 2.0).sin();
    for (mid, rotation, length) in segments {
        assert!((length - expected_chord).abs() < 1e-4);
        // Segment midpoints sit just inside the radius
        let inset = 15.0 * (15.0_f32.to_radians() / 2.0).cos();
        assert!((mid.distance(center) - inset).abs() < 1e-3);
        // The segment's long axis is tangent to the circle
        let axis = rotation * Vec3::X;
        assert!(axis.dot((mid - center).normalize()).abs() < 1e-4);
    }
}
