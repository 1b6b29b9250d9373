//! Command-line flags for the `tankbattle` binary and the config they build.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use tankbattle_core::config::Tuning;
use tankbattle_core::types::Playfield;
use tankbattle_sim::engine::SimConfig;

use crate::error::AppError;

/// Demo length when `--seconds` is not given.
pub const DEFAULT_DEMO_SECONDS: u64 = 30;

#[derive(Debug, Clone, PartialEq)]
pub struct CliArgs {
    /// JSON tuning overrides.
    pub config: Option<PathBuf>,
    pub seed: Option<u64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub seconds: u64,
}

pub fn print_usage() {
    eprintln!(
        "tankbattle: headless tank battle session\n\
         \n\
         Options:\n\
         \n\
           --config <path>    JSON tuning overrides (missing fields keep defaults)\n\
           --seed <N>         RNG seed (default: 42)\n\
           --width <W>        Playfield width (default: 1280)\n\
           --height <H>       Playfield height (default: 720)\n\
           --seconds <N>      Demo length in seconds (default: 30)\n\
         \n\
         Logging follows RUST_LOG (default: info).\n"
    );
}

/// Value following `flag`, parsed. `Ok(None)` when the flag is absent.
fn parse_flag<T: FromStr>(args: &[String], flag: &'static str) -> Result<Option<T>, AppError> {
    for i in 0..args.len() {
        if args[i] == flag {
            let Some(raw) = args.get(i + 1) else {
                return Err(AppError::MissingValue(flag));
            };
            return raw.parse().map(Some).map_err(|_| AppError::BadArgument {
                flag,
                value: raw.clone(),
            });
        }
    }
    Ok(None)
}

fn parse_dimension(args: &[String], flag: &'static str) -> Result<Option<f64>, AppError> {
    match parse_flag::<f64>(args, flag)? {
        Some(v) if !(v.is_finite() && v > 0.0) => Err(AppError::BadArgument {
            flag,
            value: v.to_string(),
        }),
        other => Ok(other),
    }
}

/// Parse the arguments after the program name.
pub fn parse_args(args: &[String]) -> Result<CliArgs, AppError> {
    Ok(CliArgs {
        config: parse_flag::<String>(args, "--config")?.map(PathBuf::from),
        seed: parse_flag(args, "--seed")?,
        width: parse_dimension(args, "--width")?,
        height: parse_dimension(args, "--height")?,
        seconds: parse_flag(args, "--seconds")?.unwrap_or(DEFAULT_DEMO_SECONDS),
    })
}

/// Read a tuning file.
pub fn load_tuning(path: &Path) -> Result<Tuning, AppError> {
    let json = std::fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Tuning::from_json_str(&json)?)
}

/// Build the engine configuration, starting from defaults.
pub fn sim_config(args: &CliArgs) -> Result<SimConfig, AppError> {
    let mut config = SimConfig::default();
    if let Some(path) = &args.config {
        config.tuning = load_tuning(path)?;
        log::info!("loaded tuning from {}", path.display());
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    let defaults = Playfield::default();
    config.playfield = Playfield::new(
        args.width.unwrap_or(defaults.width),
        args.height.unwrap_or(defaults.height),
    );
    Ok(config)
}
