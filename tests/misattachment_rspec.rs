//! Behavioural test: root-only normalisers attached elsewhere warn once and
//! stay inert.

#[path = "support/app_fixture.rs"]
mod app_fixture;

#[path = "support/rspec_runner.rs"]
mod rspec_runner;

use app_fixture::AppFixture;
use bevy::prelude::*;
use rspec::block::Context as Scenario;
use rspec_runner::run_serial;
use scene_behaviours::pointer::ListenerState;
use scene_behaviours::{
    ClickNormalizer, DiagnosticKind, PointerPressed, TapNormalizer, TouchStarted,
};
use test_utils::{behaviour_app, spawn_root, CapturedDiagnostics, CapturedEvents};

#[derive(Debug, Clone)]
struct MisattachedFixture {
    base: AppFixture,
    child: Entity,
}

impl MisattachedFixture {
    fn bootstrap() -> Self {
        let mut app = behaviour_app();
        let root = spawn_root(&mut app, 640.0, 480.0);
        let child = app
            .world_mut()
            .spawn((
                Name::new("panel"),
                Transform::default(),
                ChildOf(root),
                ClickNormalizer::default(),
                TapNormalizer::default(),
            ))
            .id();
        let base = AppFixture::new(app);
        base.tick();
        Self { base, child }
    }

    fn send_input(&self) {
        let mut app = self.base.guard();
        app.world_mut()
            .write_message(PointerPressed::primary(Vec2::new(320.0, 240.0)));
        app.world_mut().write_message(TouchStarted {
            touches: vec![Vec2::new(10.0, 10.0)],
        });
        app.world_mut().write_message(TouchStarted::default());
    }

    fn misattached_reports(&self) -> usize {
        self.base
            .guard()
            .world()
            .resource::<CapturedDiagnostics>()
            .count(DiagnosticKind::Misattached)
    }

    fn total_reports(&self) -> usize {
        self.base
            .guard()
            .world()
            .resource::<CapturedDiagnostics>()
            .0
            .len()
    }

    fn events(&self) -> usize {
        self.base.guard().world().resource::<CapturedEvents>().0.len()
    }

    fn listener_states(&self) -> (Option<ListenerState>, Option<ListenerState>) {
        let app = self.base.guard();
        let world = app.world();
        (
            world
                .get::<ClickNormalizer>(self.child)
                .map(ClickNormalizer::listener),
            world
                .get::<TapNormalizer>(self.child)
                .map(TapNormalizer::listener),
        )
    }
}

#[test]
fn normalisers_off_the_root_are_inert() {
    run_serial(&rspec::given(
        "click and tap normalisers attached to a child of the root",
        MisattachedFixture::bootstrap(),
        |scenario: &mut Scenario<MisattachedFixture>| {
            scenario.then("each attachment was reported once", |state| {
                assert_eq!(state.misattached_reports(), 2);
            });

            scenario.then("both components are inert", |state| {
                assert_eq!(
                    state.listener_states(),
                    (Some(ListenerState::Inert), Some(ListenerState::Inert))
                );
            });

            scenario.when("input arrives", |ctx| {
                ctx.before_each(|state| {
                    state.send_input();
                    state.base.tick();
                });

                ctx.then("no events are emitted", |state| {
                    assert_eq!(state.events(), 0);
                });

                ctx.then("only the attachment warnings were recorded", |state| {
                    assert_eq!(state.total_reports(), 2);
                });
            });
        },
    ));
}
