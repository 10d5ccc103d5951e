#![warn(clippy::all)]

use anyhow::{anyhow, Result};
use clap::Parser;
use std::time::Instant;
use torus_life::{App, Settings};

fn main() -> Result<()> {
    let settings = Settings::parse();
    settings.validate()?;

    if let Some(generations) = settings.headless {
        return run_headless(&settings, generations);
    }

    use eframe::egui::ViewportBuilder;

    let app = App::new(&settings)?;
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(App::window_size(&settings))
            .with_resizable(false),
        follow_system_theme: false,
        default_theme: eframe::Theme::Light,
        ..Default::default()
    };
    eframe::run_native(
        "Game of Life",
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow!("Failed to run the window: {}", e))
}

/// Computes `generations` generations back to back and prints the final field.
fn run_headless(settings: &Settings, generations: u64) -> Result<()> {
    let mut rng = settings.rng();
    let mut simulator = settings.build_simulator(&mut rng, Instant::now())?;
    for _ in 0..generations {
        simulator.step(Instant::now());
    }
    print!("{}", simulator.grid());
    println!("{}", simulator.stats());
    Ok(())
}
