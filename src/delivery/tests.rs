//! Delivery domain: unit tests for the run clock, bookkeeping and markers.

use avian3d::prelude::*;
use bevy::ecs::message::Messages;
use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;

use super::systems::handle_site_triggers;
use super::{
    DeliveryRegistry, DeliveryRun, Hover, MailDeliveredEvent, MailDropoff, MailObtainedEvent,
    MailPoint, RunFinishedEvent, RunOutcome,
};
use crate::movement::Player;

fn started_run(mail: u32) -> DeliveryRun {
    let mut run = DeliveryRun::new(240.0);
    for _ in 0..mail {
        run.register_mail();
    }
    run.start();
    run
}

#[test]
fn test_run_starts_with_full_clock() {
    let run = started_run(2);
    assert!(run.in_progress);
    assert_eq!(run.outstanding, 2);
    assert_eq!(run.seconds_left(), 240);
    assert!(run.outcome.is_none());
}

#[test]
fn test_delivering_all_mail_wins() {
    let mut run = started_run(2);

    run.obtain(1);
    run.obtain(2);
    assert_eq!(run.deliver(1), None);
    assert_eq!(run.outstanding, 1);
    assert_eq!(run.deliver(2), Some(RunOutcome::Won));
    assert!(!run.in_progress);
    assert_eq!(run.outcome, Some(RunOutcome::Won));
}

#[test]
fn test_delivering_uncarried_mail_is_ignored() {
    let mut run = started_run(1);

    assert_eq!(run.deliver(7), None);
    assert_eq!(run.outstanding, 1);
}

#[test]
fn test_obtaining_twice_carries_once() {
    let mut run = started_run(1);

    run.obtain(3);
    run.obtain(3);
    assert_eq!(run.carried, vec![3]);
}

#[test]
fn test_clock_runs_out() {
    let mut run = started_run(1);

    assert_eq!(run.tick(200.0), None);
    assert_eq!(run.seconds_left(), 40);
    assert_eq!(run.tick(40.5), Some(RunOutcome::Lost));
    assert_eq!(run.seconds_left(), 0);

    // A finished run no longer counts down or reports again
    assert_eq!(run.tick(1.0), None);
}

#[test]
fn test_clock_idle_before_start() {
    let mut run = DeliveryRun::new(10.0);
    assert_eq!(run.tick(20.0), None);
    assert_eq!(run.seconds_left(), 10);
}

#[test]
fn test_registry_lookup() {
    let mut world = World::new();
    let point = world.spawn_empty().id();
    let dropoff = world.spawn_empty().id();
    let mut registry = DeliveryRegistry::default();

    registry.add_point(5, point);
    registry.add_dropoff(5, dropoff);

    assert_eq!(registry.point(5), Some(point));
    assert_eq!(registry.dropoff(5), Some(dropoff));
    assert_eq!(registry.remove_point(5), Some(point));
    assert_eq!(registry.point(5), None);
    assert_eq!(registry.dropoff(6), None);
}

#[test]
fn test_hover_oscillates_around_origin() {
    let hover = Hover {
        origin_y: 2.0,
        amplitude: 0.5,
        frequency: 1.0,
    };

    assert_eq!(hover.height_at(0.0), 2.0);
    assert!((hover.height_at(std::f32::consts::FRAC_PI_2) - 2.5).abs() < 1e-5);
    assert!((hover.height_at(3.0 * std::f32::consts::FRAC_PI_2) - 1.5).abs() < 1e-5);
}

fn touch(world: &mut World, player: Entity, site: Entity) {
    let mut contacts = world.resource_mut::<Messages<CollisionStart>>();
    // Each run sees only this contact
    contacts.clear();
    contacts.write(CollisionStart {
        collider1: site,
        collider2: player,
        body1: Some(site),
        body2: Some(player),
    });
    world
        .run_system_once(handle_site_triggers)
        .expect("trigger system runs");
}

#[test]
fn test_pickup_then_dropoff_wins_run() {
    let mut world = World::new();
    world.init_resource::<Messages<CollisionStart>>();
    world.init_resource::<Messages<MailObtainedEvent>>();
    world.init_resource::<Messages<MailDeliveredEvent>>();
    world.init_resource::<Messages<RunFinishedEvent>>();
    world.init_resource::<DeliveryRegistry>();
    world.insert_resource(started_run(1));

    let player = world.spawn(Player).id();
    let point = world.spawn(MailPoint { id: 0 }).id();
    let indicator = world.spawn(Visibility::Hidden).id();
    let dropoff = world
        .spawn(MailDropoff {
            id: 0,
            armed: false,
            indicator: Some(indicator),
        })
        .id();
    {
        let mut registry = world.resource_mut::<DeliveryRegistry>();
        registry.add_point(0, point);
        registry.add_dropoff(0, dropoff);
    }

    // An unarmed dropoff ignores the player
    touch(&mut world, player, dropoff);
    assert_eq!(world.resource::<DeliveryRun>().outstanding, 1);

    touch(&mut world, player, point);
    assert!(world.get_entity(point).is_err());
    assert_eq!(world.resource::<DeliveryRun>().carried, vec![0]);
    assert!(world.get::<MailDropoff>(dropoff).is_some_and(|d| d.armed));
    assert_eq!(world.get::<Visibility>(indicator), Some(&Visibility::Visible));

    touch(&mut world, player, dropoff);
    let run = world.resource::<DeliveryRun>();
    assert_eq!(run.outstanding, 0);
    assert_eq!(run.outcome, Some(RunOutcome::Won));
    assert!(world.get::<MailDropoff>(dropoff).is_some_and(|d| !d.armed));
    assert_eq!(world.get::<Visibility>(indicator), Some(&Visibility::Hidden));
    assert_eq!(
        world
            .resource_mut::<Messages<RunFinishedEvent>>()
            .drain()
            .count(),
        1
    );
}
