//! Delivery domain: trigger handling, run clock and marker animation.

use avian3d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::camera::FollowCamera;
use crate::delivery::{
    DeliveryRegistry, DeliveryRun, Hover, MailDeliveredEvent, MailDropoff, MailObtainedEvent,
    MailPoint, RunFinishedEvent,
};
use crate::movement::Player;

pub(crate) fn register_delivery_sites(
    mut registry: ResMut<DeliveryRegistry>,
    mut run: ResMut<DeliveryRun>,
    points: Query<(Entity, &MailPoint), Added<MailPoint>>,
    dropoffs: Query<(Entity, &MailDropoff), Added<MailDropoff>>,
) {
    for (entity, point) in &points {
        registry.add_point(point.id, entity);
        run.register_mail();
        debug!("Registered mail point {}", point.id);
    }
    for (entity, dropoff) in &dropoffs {
        registry.add_dropoff(dropoff.id, entity);
        debug!("Registered mail dropoff {}", dropoff.id);
    }
}

pub(crate) fn start_delivery_run(mut run: ResMut<DeliveryRun>) {
    if run.in_progress || run.outcome.is_some() || run.outstanding == 0 {
        return;
    }
    run.start();
    info!(
        "Delivery run started: {} mail, {}s on the clock",
        run.outstanding, run.time_limit
    );
}

/// Messages raised while handling trigger contacts.
#[derive(SystemParam)]
pub(crate) struct DeliveryWriters<'w> {
    obtained: MessageWriter<'w, MailObtainedEvent>,
    delivered: MessageWriter<'w, MailDeliveredEvent>,
    finished: MessageWriter<'w, RunFinishedEvent>,
}

/// The player and the pickup and dropoff triggers it can touch.
#[derive(SystemParam)]
pub(crate) struct DeliverySites<'w, 's> {
    players: Query<'w, 's, (), With<Player>>,
    points: Query<'w, 's, &'static MailPoint>,
    dropoffs: Query<'w, 's, &'static mut MailDropoff>,
    indicators: Query<'w, 's, &'static mut Visibility, Without<MailDropoff>>,
}

pub(crate) fn handle_site_triggers(
    mut commands: Commands,
    mut collision_events: MessageReader<CollisionStart>,
    mut writers: DeliveryWriters,
    mut sites: DeliverySites,
    mut registry: ResMut<DeliveryRegistry>,
    mut run: ResMut<DeliveryRun>,
) {
    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (player_entity, site_entity) in pairs {
            if !sites.players.contains(player_entity) {
                continue;
            }

            if let Ok(point) = sites.points.get(site_entity) {
                let id = point.id;
                run.obtain(id);
                registry.remove_point(id);
                commands.entity(site_entity).despawn();

                if let Some(mut dropoff) = registry
                    .dropoff(id)
                    .and_then(|entity| sites.dropoffs.get_mut(entity).ok())
                {
                    dropoff.armed = true;
                    if let Some(mut shown) = dropoff
                        .indicator
                        .and_then(|e| sites.indicators.get_mut(e).ok())
                    {
                        *shown = Visibility::Visible;
                    }
                }

                writers.obtained.write(MailObtainedEvent { id });
                info!("Picked up mail {}", id);
                continue;
            }

            let Ok(mut dropoff) = sites.dropoffs.get_mut(site_entity) else {
                continue;
            };
            if !dropoff.armed {
                continue;
            }

            let id = dropoff.id;
            let outcome = run.deliver(id);
            dropoff.armed = false;
            if let Some(mut shown) = dropoff
                .indicator
                .and_then(|e| sites.indicators.get_mut(e).ok())
            {
                *shown = Visibility::Hidden;
            }

            writers.delivered.write(MailDeliveredEvent {
                id,
                remaining: run.outstanding,
            });
            info!("Delivered mail {}, {} left", id, run.outstanding);

            if let Some(outcome) = outcome {
                writers.finished.write(RunFinishedEvent { outcome });
                info!("Delivery run finished: {:?}", outcome);
            }
        }
    }
}

pub(crate) fn tick_delivery_clock(
    time: Res<Time>,
    mut run: ResMut<DeliveryRun>,
    mut finished_events: MessageWriter<RunFinishedEvent>,
) {
    if let Some(outcome) = run.tick(time.delta_secs()) {
        finished_events.write(RunFinishedEvent { outcome });
        info!("Delivery run finished: {:?}", outcome);
    }
}

pub(crate) fn animate_markers(
    time: Res<Time>,
    camera: Query<&GlobalTransform, With<FollowCamera>>,
    mut markers: Query<(&mut Transform, &GlobalTransform, &Hover), Without<FollowCamera>>,
) {
    let seconds = time.elapsed_secs();
    let camera_position = camera.single().ok().map(GlobalTransform::translation);

    for (mut transform, global, hover) in &mut markers {
        transform.translation.y = hover.height_at(seconds);

        if let Some(camera_position) = camera_position {
            let mut facing = camera_position - global.translation();
            facing.y = 0.0;
            if facing.length_squared() > f32::EPSILON {
                transform.look_to(-facing, Vec3::Y);
            }
        }
    }
}
