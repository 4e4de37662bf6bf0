//! Command-line options for the terminal host.

use anyhow::{anyhow, Result};

use crate::core::SessionConfig;

pub const USAGE: &str = "\
usage: reveal-tetris [options]

  --width N               board columns (4-64, default 10)
  --height N              board rows (4-64, default 20)
  --fall-ms N             automatic fall interval in ms (default 500)
  --seed N                piece sequence seed (default: from the clock)
  --reset-clears-reveal   restart also covers the picture again
  -h, --help              print this help";

/// Everything the host needs to start.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostConfig {
    pub session: SessionConfig,
    /// `None` means pick one at startup
    pub seed: Option<u32>,
    pub show_help: bool,
}

fn parse_value(args: &[String], i: usize, flag: &str) -> Result<u32> {
    let v = args
        .get(i)
        .ok_or_else(|| anyhow!("missing value for {}", flag))?;
    v.parse::<u32>()
        .map_err(|_| anyhow!("invalid {} value: {}", flag, v))
}

/// Parse arguments (without the program name).
///
/// The session part is validated here so a bad board size fails before the
/// terminal is switched into raw mode.
pub fn parse_host_args(args: &[String]) -> Result<HostConfig> {
    let mut config = HostConfig::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--width" => {
                i += 1;
                config.session.width = parse_value(args, i, "--width")?;
            }
            "--height" => {
                i += 1;
                config.session.height = parse_value(args, i, "--height")?;
            }
            "--fall-ms" => {
                i += 1;
                config.session.fall_interval_ms = parse_value(args, i, "--fall-ms")?;
            }
            "--seed" => {
                i += 1;
                config.seed = Some(parse_value(args, i, "--seed")?);
            }
            "--reset-clears-reveal" => {
                config.session.reset_clears_reveal = true;
            }
            "-h" | "--help" => {
                config.show_help = true;
                return Ok(config);
            }
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }

    config.session.validate()?;
    Ok(config)
}
