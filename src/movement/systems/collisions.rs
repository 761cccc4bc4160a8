//! Movement domain: ray probes against the physics world and ground detection.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, MovementState, MovementTuning, Player, RayHit, RayProbe};

/// [`RayProbe`] backed by avian's spatial query pipeline.
pub(crate) struct SpatialProbe<'a, 'w, 's> {
    query: &'a SpatialQuery<'w, 's>,
}

impl<'a, 'w, 's> SpatialProbe<'a, 'w, 's> {
    pub(crate) fn new(query: &'a SpatialQuery<'w, 's>) -> Self {
        Self { query }
    }
}

impl RayProbe for SpatialProbe<'_, '_, '_> {
    fn cast(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        mask: LayerMask,
    ) -> Option<RayHit> {
        let direction = Dir3::new(direction).ok()?;
        let filter = SpatialQueryFilter::from_mask(mask);
        self.query
            .cast_ray(origin, direction, max_distance, true, &filter)
            .map(|hit| RayHit {
                point: origin + *direction * hit.distance,
                normal: hit.normal,
            })
    }
}

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    tuning: Res<MovementTuning>,
    mut query: Query<(&Position, &mut MovementState), With<Player>>,
) {
    // Anything solid counts as ground, sensors and the player itself do not.
    let ground_mask = LayerMask::from([GameLayer::Ground, GameLayer::Wall]);
    let probe = SpatialProbe::new(&spatial_query);

    for (position, mut state) in &mut query {
        let was_on_ground = state.touching_ground;

        state.touching_ground = probe
            .cast(
                position.0,
                Vec3::NEG_Y,
                tuning.ground_probe_distance,
                ground_mask,
            )
            .is_some();

        if state.touching_ground && !was_on_ground {
            debug!("Landed at {:?}", position.0);
        } else if !state.touching_ground && was_on_ground {
            debug!("Left ground at {:?}", position.0);
        }
    }
}
