#![doc = include_str!("../README.md")]

mod config;
mod telemetry;

use alea::{Backend, NoiseMap, RandomSource, UNIFORM_COVERAGE};
use clap::Parser;
use config::{Action, CliArgs, Config};
use telemetry::init_logging;

fn main() -> anyhow::Result<()> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    let config = Config::try_from(args)?;

    init_logging()?;
    log_startup_info(&config);

    let mut source = RandomSource::with_preferences(config.preferences.iter().copied());

    match config.action {
        Action::Draw {
            min,
            max,
            method,
            count,
        } => {
            for _ in 0..count {
                println!("{}", source.draw(min, max, method)?);
            }
        }
        Action::Probe => {
            for backend in Backend::ALL {
                let status = if source.is_available(backend) {
                    "available"
                } else {
                    "unavailable"
                };
                println!("{backend:<10} {status}");
            }
            match source.method() {
                Some(backend) => println!("selected   {backend}"),
                None => println!("selected   none"),
            }
        }
        Action::Noise {
            method,
            width,
            height,
        } => {
            let backends: Vec<Backend> = match method {
                Some(backend) => vec![backend],
                None => Backend::ALL
                    .into_iter()
                    .filter(|&b| source.is_available(b))
                    .collect(),
            };
            if backends.is_empty() {
                tracing::warn!("No backend available to plot");
            }

            println!("expected coverage for a uniform source: {UNIFORM_COVERAGE:.4}");
            for backend in backends {
                let map = NoiseMap::plot(&mut source, Some(backend), width, height)?;
                println!(
                    "{backend:<10} {}x{} plotted={} distinct={} coverage={:.4}",
                    map.width(),
                    map.height(),
                    map.plotted(),
                    map.distinct(),
                    map.coverage()
                );
            }
        }
    }

    Ok(())
}

fn log_startup_info(config: &Config) {
    if cfg!(debug_assertions) {
        tracing::debug!("Starting with full config: {:#?}", config);
    } else {
        tracing::debug!("Starting with preferences {:?}", config.preferences);
    }
}
