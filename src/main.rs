//! Headless demo: walks a named target past a sentinel that follows it with
//! its gaze and reports when the target enters or leaves its radius.

use anyhow::Context;
use bevy::ecs::prelude::On;
use bevy::prelude::*;
use clap::Parser;
use log::info;
use scene_behaviours::{
    init_logging, BehaviourEvent, BehaviourEventKind, BehavioursPlugin, Follow, Proximity,
    RootNode, TargetRef, DEFAULT_PROXIMITY_DISTANCE,
};

/// Walk a target past a proximity sentinel
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Radius of the sentinel's proximity sphere
    #[arg(short, long, default_value_t = DEFAULT_PROXIMITY_DISTANCE)]
    distance: f32,

    /// Number of frames to simulate
    #[arg(short, long, default_value_t = 20)]
    steps: u16,
}

const WALKER: &str = "walker";

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value for Events V2."
)]
fn report(event: On<BehaviourEvent>, names: Query<&Name>) {
    let BehaviourEvent { entity, kind } = *event.event();
    let who = names.get(entity).map_or("unnamed", Name::as_str);
    match kind {
        BehaviourEventKind::Enter => info!("{WALKER} entered the radius of {who}"),
        BehaviourEventKind::Exit => info!("{WALKER} left the radius of {who}"),
        BehaviourEventKind::Click(_) | BehaviourEventKind::Tap(_) => {}
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let proximity = Proximity::new(TargetRef::Name(WALKER.to_owned()), args.distance)
        .context("invalid --distance")?;

    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(BehavioursPlugin)
        .add_observer(report);

    let root = app
        .world_mut()
        .spawn((RootNode, Name::new("scene"), Transform::default()))
        .id();
    app.world_mut().spawn((
        Name::new("sentinel"),
        Transform::from_xyz(0.0, 0.0, -1.0),
        Follow::new(TargetRef::Name(WALKER.to_owned())),
        proximity,
        ChildOf(root),
    ));
    let walker = app
        .world_mut()
        .spawn((Name::new(WALKER), Transform::default(), ChildOf(root)))
        .id();

    let half = f32::from(args.steps) / 2.0;
    for step in 0..args.steps {
        let x = f32::from(step) - half;
        if let Some(mut transform) = app.world_mut().get_mut::<Transform>(walker) {
            transform.translation = Vec3::new(x, 0.0, 0.0);
        }
        app.update();
    }

    info!("simulated {} frames", args.steps);
    Ok(())
}
