//! Utility helpers for tests.
//!
//! Builds behaviour apps and records every [`BehaviourEvent`] and
//! [`BehaviourDiagnostic`] so assertions can count what was emitted.

use bevy::ecs::prelude::On;
use bevy::prelude::*;
use scene_behaviours::{
    BehaviourDiagnostic, BehaviourEvent, BehaviourEventKind, BehavioursPlugin, DiagnosticKind,
    RootNode, ViewportSize,
};

/// Every behaviour event observed, in trigger order.
#[derive(Resource, Default, Debug)]
pub struct CapturedEvents(pub Vec<BehaviourEvent>);

impl CapturedEvents {
    /// Event kinds targeted at `entity`, in trigger order.
    pub fn kinds_for(&self, entity: Entity) -> Vec<BehaviourEventKind> {
        self.0
            .iter()
            .filter(|event| event.entity == entity)
            .map(|event| event.kind)
            .collect()
    }
}

/// Every diagnostic observed, in trigger order.
#[derive(Resource, Default, Debug)]
pub struct CapturedDiagnostics(pub Vec<BehaviourDiagnostic>);

impl CapturedDiagnostics {
    /// Number of diagnostics of `kind`.
    pub fn count(&self, kind: DiagnosticKind) -> usize {
        self.0.iter().filter(|d| d.kind == kind).count()
    }
}

fn record_event(event: On<BehaviourEvent>, mut events: ResMut<CapturedEvents>) {
    events.0.push(*event.event());
}

fn record_diagnostic(event: On<BehaviourDiagnostic>, mut diagnostics: ResMut<CapturedDiagnostics>) {
    diagnostics.0.push(event.event().clone());
}

/// Installs capturing observers and their resources on `app`.
pub fn install_capture(app: &mut App) {
    app.insert_resource(CapturedEvents::default());
    app.insert_resource(CapturedDiagnostics::default());
    app.world_mut().add_observer(record_event);
    app.world_mut().add_observer(record_diagnostic);
}

/// App with `MinimalPlugins`, [`BehavioursPlugin`] and capture installed.
pub fn behaviour_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins).add_plugins(BehavioursPlugin);
    install_capture(&mut app);
    app
}

/// Spawns the scene root and sets a `width` x `height` viewport.
///
/// # Panics
/// Panics if the viewport dimensions are not strictly positive.
pub fn spawn_root(app: &mut App, width: f32, height: f32) -> Entity {
    let viewport = ViewportSize::new(width, height)
        .unwrap_or_else(|e| panic!("test viewport must be valid: {e}"));
    app.insert_resource(viewport);
    app.world_mut()
        .spawn((RootNode, Name::new("scene"), Transform::default()))
        .id()
}

/// Moves `entity` to `translation` in its parent's space.
pub fn place(app: &mut App, entity: Entity, translation: Vec3) {
    if let Some(mut transform) = app.world_mut().get_mut::<Transform>(entity) {
        transform.translation = translation;
    }
}

/// Clears captured events and diagnostics.
pub fn clear_capture(app: &mut App) {
    app.world_mut().resource_mut::<CapturedEvents>().0.clear();
    app.world_mut().resource_mut::<CapturedDiagnostics>().0.clear();
}
