//! Weather watchface simulator for desktop.
//!
//! Plays the part of the watch firmware: owns the window and the run loop, feeds the
//! face clock, battery and health events, and sends companion messages from the
//! keyboard.
//!
//! | Key | Action |
//! |-----|--------|
//! | `W` | Send the next weather preset |
//! | `P` | Send a partial report (conditions only) |
//! | `S` / `H` / `B` / `G` | Toggle steps / heart rate / battery / background |
//! | `T` | Flip the 12/24-hour preference |
//! | `C` | Plug in or unplug the charger |
//! | `Esc` | Quit |

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]

mod host;
mod storage;
mod timing;

use std::path::PathBuf;
use std::thread;
use std::time::Instant;

use anyhow::{Result, ensure};
use argh::FromArgs;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use env_logger::Env;
use log::info;
use watchface_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use watchface_common::{AppMessage, Event, MessageKey, Services, Storage, WatchFace};

use crate::host::SimHost;
use crate::storage::TomlStorage;
use crate::timing::FRAME_TIME;

/// Weather reports cycled by the `W` key.
const WEATHER_PRESETS: [(&str, &str); 6] = [
    ("72°", "Partly Cloudy, Sunny"),
    ("18°", "Clear"),
    ("11°", "Overcast Clouds"),
    ("9°", "Light Rain"),
    ("-4°", "Heavy Snow"),
    ("15°", "Mist"),
];

#[derive(FromArgs)]
/// Desktop simulator for the outlined-text weather watchface.
struct Args {
    /// window scale factor (default: 2)
    #[argh(option, default = "2")]
    scale: u32,

    /// clock style, 12 or 24 (default: 24)
    #[argh(option, default = "24")]
    clock: u8,

    /// settings file (default: watchface-settings.toml)
    #[argh(option, default = "PathBuf::from(\"watchface-settings.toml\")")]
    settings: PathBuf,

    /// temperature of an initial weather report
    #[argh(option)]
    temperature: Option<String>,

    /// conditions of an initial weather report
    #[argh(option)]
    conditions: Option<String>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();
    ensure!(matches!(args.clock, 12 | 24), "--clock must be 12 or 24, got {}", args.clock);
    ensure!(args.scale > 0, "--scale must be positive");

    let mut storage = TomlStorage::open(&args.settings)?;
    let mut host = SimHost::new(args.clock == 24);

    let bounds = Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(bounds.size);
    let output_settings = OutputSettingsBuilder::new().scale(args.scale).build();
    let mut window = Window::new("Weather Watchface", &output_settings);

    let mut face = WatchFace::new(bounds);
    face.load(&host, &storage);

    if let (Some(temperature), Some(conditions)) = (&args.temperature, &args.conditions) {
        face.handle(&Event::Message(weather_report(temperature, conditions)), &host, &mut storage);
    }

    let mut presets = WEATHER_PRESETS.iter().cycle();

    'running: loop {
        let frame_start = Instant::now();

        face.draw(&mut display).ok();
        window.update(&display);

        let mut events = Vec::new();
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => break 'running,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::Escape => break 'running,
                        Keycode::W => {
                            if let Some(&(temperature, conditions)) = presets.next() {
                                events.push(Event::Message(weather_report(temperature, conditions)));
                            }
                        }
                        Keycode::P => {
                            let partial = AppMessage::new().with_string(MessageKey::Conditions, "Thunderstorm");
                            events.push(Event::Message(partial));
                        }
                        Keycode::S => events.push(toggle_setting(&storage, MessageKey::ShowSteps)),
                        Keycode::H => events.push(toggle_setting(&storage, MessageKey::ShowHeartRate)),
                        Keycode::B => events.push(toggle_setting(&storage, MessageKey::ShowBattery)),
                        Keycode::G => events.push(toggle_setting(&storage, MessageKey::ShowBackground)),
                        Keycode::T => {
                            host.toggle_clock();
                            events.push(Event::Tick(host.local_time()));
                        }
                        Keycode::C => {
                            host.toggle_charging();
                            events.push(Event::Battery(host.battery_state()));
                        }
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        events.extend(host.poll());
        for event in &events {
            face.handle(event, &host, &mut storage);
        }

        let elapsed = frame_start.elapsed();
        if let Some(remaining) = FRAME_TIME.checked_sub(elapsed) {
            thread::sleep(remaining);
        }
    }

    face.unload();
    info!("Simulator closed");
    Ok(())
}

/// A complete weather report, as sent by the companion app.
fn weather_report<'a>(
    temperature: &'a str,
    conditions: &'a str,
) -> AppMessage<'a> {
    AppMessage::new()
        .with_string(MessageKey::Temperature, temperature)
        .with_string(MessageKey::Conditions, conditions)
}

/// A configuration-page message flipping one display option.
fn toggle_setting(
    storage: &TomlStorage,
    key: MessageKey,
) -> Event<'static> {
    let enabled = storage.read_bool(key).unwrap_or(false);
    info!("{} -> {}", key.name(), !enabled);
    Event::Message(AppMessage::new().with_bool(key, !enabled))
}
