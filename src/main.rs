//! Drift Belt headless entry point
//!
//! Runs the simulation against a recording canvas, driven by a real-time
//! fixed-rate clock and a scripted pilot standing in for the keyboard.

use std::error::Error;
use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use drift_belt::sim::{World, step};
use drift_belt::{CommandList, Config, FixedClock, Key, KeyEvent};

/// Simulated seconds to run
const RUN_SECONDS: u64 = 5;

/// Scripted keyboard as (tick, pressed, `KeyboardEvent.key` name)
const PILOT: &[(u64, bool, &str)] = &[
    (0, true, "ArrowUp"),
    (20, true, "ArrowLeft"),
    (35, false, "ArrowLeft"),
    (45, false, "ArrowUp"),
    (60, true, "ArrowRight"),
    (70, true, "ArrowLeft"),
    (80, false, "ArrowLeft"),
    (90, false, "ArrowRight"),
    (100, true, "ArrowDown"),
];

fn key_edge(pressed: bool, name: &str) -> KeyEvent {
    let key = Key::from_key_name(name);
    if pressed {
        KeyEvent::Pressed(key)
    } else {
        KeyEvent::Released(key)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    log::info!("Drift Belt (headless) starting...");

    let config = Config::load()?;
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default();
    let total_ticks = RUN_SECONDS * config.tick_rate.round() as u64;

    let mut world = World::new(config, seed)?;
    let mut clock = FixedClock::new(world.config.tick_rate);
    let mut canvas = CommandList::new();
    let mut last = Instant::now();

    while world.time_ticks < total_ticks {
        let now = Instant::now();
        let due = clock.advance((now - last).as_secs_f32());
        last = now;

        for _ in 0..due {
            let tick = world.time_ticks;
            for (_, pressed, name) in PILOT.iter().filter(|(at, _, _)| *at == tick) {
                let event = key_edge(*pressed, name);
                log::debug!("tick {}: {} -> {:?}", tick, name, event);
                world.intents.apply(event);
            }
            canvas.commands.clear();
            step(&mut world, &mut canvas);
        }

        thread::sleep(Duration::from_secs_f32(clock.step() / 2.0));
    }

    log::info!(
        "Ran {} ticks, last frame had {} draw commands",
        world.time_ticks,
        canvas.len()
    );
    println!("{}", serde_json::to_string_pretty(&world.ship)?);
    println!("{}", serde_json::to_string_pretty(&canvas.commands)?);
    Ok(())
}
