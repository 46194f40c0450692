use alea::{Backend, MAX_NOISE_CELLS};
use anyhow::bail;
use clap::{Parser, Subcommand};

/// Runtime configuration for the `alea` binary.
///
/// Values come from CLI arguments, then environment variables (a `.env` file
/// in the working directory is loaded first), then defaults.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "alea",
    version,
    about = "Probe random backends, draw values and compare noise maps"
)]
pub struct CliArgs {
    /// Backends to try, in order, when choosing the active method.
    ///
    /// Comma-separated. Accepted names: `crypto` (`os`, `openssl`),
    /// `mersenne` (`mt`, `mt_rand`), `small` (`rand`).
    ///
    /// Environment variable: `ALEA_PREFERENCES`
    #[arg(
        long,
        global = true,
        env = "ALEA_PREFERENCES",
        default_value_t = String::from("crypto,mersenne,small")
    )]
    pub preferences: String,

    #[command(subcommand)]
    pub command: CommandArgs,
}

#[derive(Subcommand, Debug, Clone)]
pub enum CommandArgs {
    /// Draw values. Without `--min`/`--max`, draws floats in [0, 1).
    Draw {
        /// Lower bound. Must be given together with `--max`.
        #[arg(long, allow_negative_numbers = true)]
        min: Option<i64>,

        /// Upper bound. Must be greater than `--min`.
        #[arg(long, allow_negative_numbers = true)]
        max: Option<i64>,

        /// Backend to draw from instead of the negotiated one.
        ///
        /// Environment variable: `ALEA_METHOD`
        #[arg(long, env = "ALEA_METHOD")]
        method: Option<String>,

        /// How many values to draw.
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },

    /// Show which backends are available and which one gets selected.
    Probe,

    /// Plot a noise map and report how evenly points spread.
    ///
    /// Without `--method`, every available backend is plotted.
    Noise {
        /// Backend to plot.
        ///
        /// Environment variable: `ALEA_METHOD`
        #[arg(long, env = "ALEA_METHOD")]
        method: Option<String>,

        /// Grid width in cells.
        #[arg(long, default_value_t = 500)]
        width: u32,

        /// Grid height in cells.
        #[arg(long, default_value_t = 500)]
        height: u32,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Draw {
        min: Option<i64>,
        max: Option<i64>,
        method: Option<Backend>,
        count: usize,
    },
    Probe,
    Noise {
        method: Option<Backend>,
        width: u32,
        height: u32,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub preferences: Vec<Backend>,
    pub action: Action,
}

impl TryFrom<CliArgs> for Config {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let preferences = Backend::parse_list(&args.preferences)?;

        let action = match args.command {
            CommandArgs::Draw {
                min,
                max,
                method,
                count,
            } => {
                if count == 0 {
                    bail!("--count must be greater than 0");
                }
                Action::Draw {
                    min,
                    max,
                    method: parse_method(method.as_deref())?,
                    count,
                }
            }
            CommandArgs::Probe => Action::Probe,
            CommandArgs::Noise {
                method,
                width,
                height,
            } => {
                if width < 2 || height < 2 {
                    bail!("noise map needs at least 2x2 cells (got {width}x{height})");
                }
                if u64::from(width) * u64::from(height) > MAX_NOISE_CELLS as u64 {
                    bail!(
                        "noise map of {width}x{height} exceeds the limit of {MAX_NOISE_CELLS} cells"
                    );
                }
                Action::Noise {
                    method: parse_method(method.as_deref())?,
                    width,
                    height,
                }
            }
        };

        Ok(Self {
            preferences,
            action,
        })
    }
}

fn parse_method(method: Option<&str>) -> anyhow::Result<Option<Backend>> {
    Ok(method.map(str::parse).transpose()?)
}
