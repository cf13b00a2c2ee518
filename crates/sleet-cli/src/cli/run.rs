use std::io::Write;

use sleet::SnowflakeGenerator;

use crate::cli::{
    config::Command,
    output::{write_parts_json, write_parts_text},
};

/// Runs one subcommand against `generator`, writing results to `out`.
///
/// Stops at the first generator error; IDs written before it stay written.
pub fn run<G, W>(generator: &G, command: Command, out: &mut W) -> anyhow::Result<()>
where
    G: SnowflakeGenerator,
    W: Write,
{
    match command {
        Command::Next { count } => {
            for _ in 0..count {
                writeln!(out, "{}", generator.next_id()?)?;
            }
        }
        Command::Short { count } => {
            for _ in 0..count {
                writeln!(out, "{}", generator.short_id()?)?;
            }
        }
        Command::Parse { ids, json } => {
            let parsed: Vec<_> = ids.into_iter().map(|id| (id, generator.parse(id))).collect();
            if json {
                write_parts_json(out, &parsed)?;
            } else {
                write_parts_text(out, &parsed)?;
            }
        }
    }
    Ok(())
}
