use core::time::Duration;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use sleet::{SnowflakeId, SnowflakeLayout, default_epoch};

/// Runtime configuration for the `sleet` binary.
///
/// The layout flags are global, so they can be given before or after the
/// subcommand, and each has an environment variable fallback (read from
/// `.env` too).
#[derive(Parser, Debug, Clone)]
#[command(
    name = "sleet",
    version,
    about = "Generate and decode 63-bit Snowflake IDs"
)]
pub struct CliArgs {
    /// Worker ID stamped into generated IDs (0-31).
    ///
    /// Environment variable: `SLEET_WORKER_ID`
    #[arg(long, global = true, env = "SLEET_WORKER_ID", default_value_t = SnowflakeLayout::DEFAULT_WORKER_ID)]
    pub worker_id: u64,

    /// Datacenter ID stamped into generated IDs (0-31).
    ///
    /// Environment variable: `SLEET_DATACENTER_ID`
    #[arg(long, global = true, env = "SLEET_DATACENTER_ID", default_value_t = SnowflakeLayout::DEFAULT_DATACENTER_ID)]
    pub datacenter_id: u64,

    /// Epoch as whole seconds since 1970-01-01 UTC.
    ///
    /// Defaults to 2022-04-15 00:00:00 in the local time zone. Every process
    /// generating or decoding a given set of IDs must agree on it.
    ///
    /// Environment variable: `SLEET_EPOCH_SECS`
    #[arg(long, global = true, env = "SLEET_EPOCH_SECS")]
    pub epoch_secs: Option<u64>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum CliCommand {
    /// Print new Snowflake IDs, one per line.
    Next {
        /// How many IDs to print.
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },
    /// Print new 53-bit short IDs, one per line.
    Short {
        /// How many IDs to print.
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },
    /// Decode IDs into their fields.
    Parse {
        /// Decimal IDs to decode.
        #[arg(required = true)]
        ids: Vec<u64>,

        /// Print the decoded records as JSON.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

/// What to run, after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Next { count: usize },
    Short { count: usize },
    Parse { ids: Vec<SnowflakeId>, json: bool },
}

#[derive(Debug, Clone)]
pub struct CliConfig {
    pub layout: SnowflakeLayout,
    pub command: Command,
}

impl TryFrom<CliArgs> for CliConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let epoch = args
            .epoch_secs
            .map_or(Duration::from_millis(default_epoch()), Duration::from_secs);
        let layout = SnowflakeLayout::new(epoch, args.worker_id, args.datacenter_id)
            .with_context(|| {
                format!(
                    "invalid layout (SLEET_WORKER_ID={}, SLEET_DATACENTER_ID={}, SLEET_EPOCH_SECS={})",
                    args.worker_id,
                    args.datacenter_id,
                    epoch.as_secs()
                )
            })?;

        let command = match args.command {
            CliCommand::Next { count } | CliCommand::Short { count } if count == 0 => {
                bail!("--count must be greater than 0");
            }
            CliCommand::Next { count } => Command::Next { count },
            CliCommand::Short { count } => Command::Short { count },
            CliCommand::Parse { ids, json } => {
                let ids = ids
                    .into_iter()
                    .map(|raw| {
                        let id = SnowflakeId::from_raw(raw);
                        if !id.is_valid() {
                            bail!("{raw} is not a Snowflake ID: the reserved high bit is set");
                        }
                        Ok(id)
                    })
                    .collect::<anyhow::Result<Vec<_>>>()?;
                Command::Parse { ids, json }
            }
        };

        Ok(Self { layout, command })
    }
}
