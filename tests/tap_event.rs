//! Tap normalisation of pointer presses and touch starts.

use approx::assert_relative_eq;
use bevy::prelude::*;
use scene_behaviours::{
    BehaviourEventKind, DiagnosticKind, NormalizedPoint, PointerButton, PointerPressed,
    TapNormalizer, TouchStarted,
};
use test_utils::{behaviour_app, spawn_root, CapturedDiagnostics, CapturedEvents};

const WIDTH: f32 = 1024.0;
const HEIGHT: f32 = 768.0;

fn tap_app() -> (App, Entity) {
    let mut app = behaviour_app();
    let root = spawn_root(&mut app, WIDTH, HEIGHT);
    app.world_mut().entity_mut(root).insert(TapNormalizer::default());
    app.update();
    (app, root)
}

fn taps(app: &App, root: Entity) -> Vec<NormalizedPoint> {
    app.world()
        .resource::<CapturedEvents>()
        .kinds_for(root)
        .into_iter()
        .filter_map(|kind| match kind {
            BehaviourEventKind::Tap(point) => Some(point),
            _ => None,
        })
        .collect()
}

fn empty_touch_reports(app: &App) -> usize {
    app.world()
        .resource::<CapturedDiagnostics>()
        .count(DiagnosticKind::EmptyTouchList)
}

#[test]
fn press_at_horizontal_centre_taps_half_way() {
    let (mut app, root) = tap_app();
    app.world_mut()
        .write_message(PointerPressed::primary(Vec2::new(WIDTH / 2.0, 0.0)));
    app.update();

    let emitted = taps(&app, root);
    assert_eq!(emitted.len(), 1);
    let point = emitted.first().copied().unwrap_or_default();
    assert_relative_eq!(point.x, 0.5);
    assert_relative_eq!(point.y, 0.0);
}

#[test]
fn any_button_counts_as_a_tap() {
    let (mut app, root) = tap_app();
    app.world_mut().write_message(PointerPressed {
        client: Vec2::new(WIDTH, HEIGHT),
        button: PointerButton::Secondary,
    });
    app.update();
    assert_eq!(taps(&app, root), vec![NormalizedPoint::new(1.0, 1.0)]);
}

#[test]
fn touch_start_uses_the_first_touch() {
    let (mut app, root) = tap_app();
    app.world_mut().write_message(TouchStarted {
        touches: vec![Vec2::new(256.0, 384.0), Vec2::new(1000.0, 10.0)],
    });
    app.update();

    assert_eq!(taps(&app, root), vec![NormalizedPoint::new(0.25, 0.5)]);
    let last = app
        .world()
        .get::<TapNormalizer>(root)
        .and_then(TapNormalizer::last_point);
    assert_eq!(last, Some(NormalizedPoint::new(0.25, 0.5)));
}

#[test]
fn empty_touch_list_is_reported_and_ignored() {
    let (mut app, root) = tap_app();
    app.world_mut().write_message(TouchStarted::default());
    app.update();

    assert!(taps(&app, root).is_empty());
    assert_eq!(empty_touch_reports(&app), 1);
}

#[test]
fn empty_touch_list_does_not_block_other_input() {
    let (mut app, root) = tap_app();
    app.world_mut().write_message(TouchStarted::default());
    app.world_mut()
        .write_message(PointerPressed::primary(Vec2::ZERO));
    app.update();

    assert_eq!(taps(&app, root), vec![NormalizedPoint::new(0.0, 0.0)]);
    assert_eq!(empty_touch_reports(&app), 1);
}

#[test]
fn tap_and_click_coexist_on_the_root() {
    let (mut app, root) = tap_app();
    app.world_mut()
        .entity_mut(root)
        .insert(scene_behaviours::ClickNormalizer::default());
    app.update();
    app.world_mut()
        .write_message(PointerPressed::primary(Vec2::ZERO));
    app.update();

    let kinds = app.world().resource::<CapturedEvents>().kinds_for(root);
    assert!(kinds.contains(&BehaviourEventKind::Tap(NormalizedPoint::new(0.0, 0.0))));
    assert!(kinds.contains(&BehaviourEventKind::Click(NormalizedPoint::new(-1.0, 1.0))));
}
