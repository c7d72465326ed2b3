//! Behavioural test: a walker approaching and retreating from a proximity
//! sentinel produces exactly one enter and one exit.

#[path = "support/app_fixture.rs"]
mod app_fixture;

#[path = "support/rspec_runner.rs"]
mod rspec_runner;

use std::sync::{Arc, Mutex, PoisonError};

use app_fixture::AppFixture;
use bevy::prelude::*;
use rspec::block::Context as Scenario;
use rspec_runner::run_serial;
use scene_behaviours::{BehaviourEventKind, DiagnosticKind, Proximity, TargetRef};
use test_utils::{
    behaviour_app, clear_capture, place, spawn_root, CapturedDiagnostics, CapturedEvents,
};

const THRESHOLD: f32 = 2.0;
const WALK: [f32; 5] = [5.0, 3.0, 1.0, 3.0, 5.0];

type TickEvents = Vec<Vec<BehaviourEventKind>>;

fn sentinel_proximity() -> Proximity {
    Proximity::new(TargetRef::Name("walker".to_owned()), THRESHOLD)
        .unwrap_or_else(|e| panic!("valid radius: {e}"))
}

#[derive(Debug, Clone)]
struct WalkFixture {
    base: AppFixture,
    sentinel: Entity,
    walker: Entity,
    per_tick: Arc<Mutex<TickEvents>>,
}

impl WalkFixture {
    fn bootstrap() -> Self {
        let mut app = behaviour_app();
        let root = spawn_root(&mut app, 800.0, 600.0);
        let walker = app
            .world_mut()
            .spawn((
                Name::new("walker"),
                Transform::from_xyz(WALK[0], 0.0, 0.0),
                ChildOf(root),
            ))
            .id();
        let sentinel = app
            .world_mut()
            .spawn((
                Transform::default(),
                sentinel_proximity(),
                ChildOf(root),
            ))
            .id();
        Self {
            base: AppFixture::new(app),
            sentinel,
            walker,
            per_tick: Arc::default(),
        }
    }

    /// Puts the walker back at its start with a fresh latch and no history.
    fn reset(&self) {
        let mut app = self.base.guard();
        place(&mut app, self.walker, Vec3::new(WALK[0], 0.0, 0.0));
        app.world_mut()
            .entity_mut(self.sentinel)
            .insert(sentinel_proximity());
        clear_capture(&mut app);
    }

    fn walk_and_record(&self) {
        let per_tick = self.walk();
        *self.per_tick.lock().unwrap_or_else(PoisonError::into_inner) = per_tick;
    }

    fn recorded(&self) -> TickEvents {
        self.per_tick
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Places the walker at each distance in turn, ticking once per sample,
    /// and returns the sentinel events each tick produced.
    fn walk(&self) -> TickEvents {
        WALK.iter()
            .map(|&x| {
                let before = self.sentinel_events().len();
                place(&mut self.base.guard(), self.walker, Vec3::new(x, 0.0, 0.0));
                self.base.tick();
                self.sentinel_events().split_off(before)
            })
            .collect()
    }

    fn sentinel_events(&self) -> Vec<BehaviourEventKind> {
        self.base
            .guard()
            .world()
            .resource::<CapturedEvents>()
            .kinds_for(self.sentinel)
    }

    fn diagnostics(&self) -> usize {
        self.base.guard().world().resource::<CapturedDiagnostics>().0.len()
    }

    fn is_inside(&self) -> bool {
        self.base
            .guard()
            .world()
            .get::<Proximity>(self.sentinel)
            .is_some_and(Proximity::is_inside)
    }
}

#[test]
fn walking_through_the_radius_enters_then_exits() {
    run_serial(&rspec::given(
        "a sentinel with radius 2 and a walker at distances [5, 3, 1, 3, 5]",
        WalkFixture::bootstrap(),
        |scenario: &mut Scenario<WalkFixture>| {
            scenario.when("the walker completes the walk", |ctx| {
                ctx.before_each(|state| {
                    state.reset();
                    state.walk_and_record();
                });

                ctx.then("enter fires on the third tick and exit on the fourth", |state| {
                    assert_eq!(
                        state.recorded(),
                        vec![
                            vec![],
                            vec![],
                            vec![BehaviourEventKind::Enter],
                            vec![BehaviourEventKind::Exit],
                            vec![],
                        ]
                    );
                });

                ctx.then("exactly two events were emitted in total", |state| {
                    assert_eq!(state.sentinel_events().len(), 2);
                });

                ctx.then("the sentinel ends outside", |state| {
                    assert!(!state.is_inside());
                });

                ctx.then("nothing was diagnosed", |state| {
                    assert_eq!(state.diagnostics(), 0);
                });
            });
        },
    ));
}

#[test]
fn despawned_target_is_reported_once_and_keeps_the_latch() {
    let fixture = WalkFixture::bootstrap();
    place(&mut fixture.base.guard(), fixture.walker, Vec3::ZERO);
    fixture.base.tick();
    assert!(fixture.is_inside());

    assert!(fixture.base.guard().world_mut().despawn(fixture.walker));
    fixture.base.tick();
    fixture.base.tick();

    let guard = fixture.base.guard();
    let diagnostics = guard.world().resource::<CapturedDiagnostics>();
    assert_eq!(diagnostics.count(DiagnosticKind::TargetUnresolved), 1);
    drop(guard);
    assert!(fixture.is_inside(), "latch must not change while unresolved");
    assert_eq!(fixture.sentinel_events(), vec![BehaviourEventKind::Enter]);
}
