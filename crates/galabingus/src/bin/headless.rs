//! # Headless Run
//!
//! Runs the scene without a window and prints what happened.
//!
//! ```text
//! galabingus_headless [config.toml] [frames]
//! ```
//!
//! Without a config path the built-in defaults are used.

use std::process::ExitCode;

use galabingus::core::{ComponentKind, ComponentValue};
use galabingus::{
    ComponentPatch, Entity, EventBus, GameConfig, GameEvent, GameLoop, GameResult, Scene,
};
use galabingus_shared::Vec2;

/// Frames run when none are requested.
const DEFAULT_FRAMES: u64 = 600;

fn run(config_path: Option<String>, frames: u64) -> GameResult<()> {
    let config = match config_path {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    let (sender, receiver) = EventBus::create_pair(4096);
    let mut scene = Scene::new(&config, sender.clone())?;
    scene.spawn_tile("tile_strip26", Vec2::new(config.screen.size().x / 2.0, 0.0))?;
    scene.set_camera_offset(Vec2::new(0.0, -1.0));

    let mut game_loop = GameLoop::new(scene, config.frame, sender);
    let delta = config.frame_budget();
    let directions = [
        Vec2::new(1.0, 0.0),
        Vec2::new(0.0, 1.0),
        Vec2::new(-1.0, 0.0),
        Vec2::new(0.0, -1.0),
    ];

    let mut spawned = 0_u64;
    let mut faults = 0_u64;
    let mut draw_calls = 0_u64;
    for frame in 0..frames {
        let direction = directions[(frame / 60) as usize % directions.len()];
        game_loop.scene_mut().steer_player(direction);

        // Every 120 frames push one bad patch through the raw-kind path.
        if frame % 120 == 119 {
            let handle = game_loop.scene().player().handle();
            game_loop.scene_mut().queue_patch(ComponentPatch {
                handle,
                kind: ComponentKind::Position.raw(),
                value: ComponentValue::Scale(1.0),
            });
        }

        game_loop.step(delta);

        for event in receiver.drain() {
            match event {
                GameEvent::EntitySpawned { .. } => spawned += 1,
                GameEvent::StoreFault { .. } => faults += 1,
                GameEvent::FrameCompleted { draw_calls: calls, .. } => {
                    draw_calls += calls as u64;
                }
            }
        }
    }

    let stats = game_loop.scene().store().stats();
    println!("Entities spawned:   {spawned}");
    println!("Draw calls issued:  {draw_calls}");
    println!("Rejected patches:   {faults}");
    println!("Groups registered:  {}", stats.registered_groups);
    for kind in ComponentKind::ALL {
        println!("  {:<14} {} entries", kind.name(), stats.dense_entries[kind.index()]);
    }
    println!();
    game_loop.stats().print_summary();
    Ok(())
}

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let config_path = args.next();
    let frames = args
        .next()
        .and_then(|frames| frames.parse().ok())
        .unwrap_or(DEFAULT_FRAMES);

    match run(config_path, frames) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("galabingus_headless: {err}");
            ExitCode::FAILURE
        }
    }
}
