#![doc = include_str!("../README.md")]

mod cli;

use std::io::{BufWriter, Write};

use clap::Parser;
use cli::config::{CliArgs, CliConfig};
use cli::run::run;
use cli::telemetry::init_telemetry;
use sleet::BasicSnowflakeGenerator;

fn main() -> anyhow::Result<()> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    let config = CliConfig::try_from(args)?;

    init_telemetry()?;
    tracing::debug!(layout = ?config.layout, "configured");

    let generator = BasicSnowflakeGenerator::with_layout(config.layout);
    let mut out = BufWriter::new(std::io::stdout().lock());
    run(&generator, config.command, &mut out)?;
    out.flush()?;
    Ok(())
}
