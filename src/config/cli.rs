use super::{load_config, RuntimeConfig};
use crate::error::{Error, Result};
use std::path::PathBuf;

pub const USAGE: &str = "\
Usage: oneshot-classifier [OPTIONS]

Options:
  -c, --config <FILE>    JSON configuration file
      --runs-dir <DIR>   root directory holding run01, run02, ...
  -n, --runs <N>         number of trials
      --json-out <FILE>  write the experiment report as JSON
  -h, --help             print this help";

#[derive(Clone, Debug, PartialEq)]
pub enum CliCommand {
    Run(RuntimeConfig),
    Help,
}

/// Parse command-line arguments (without the program name).
///
/// `--config` is applied first; the remaining flags override its values
/// regardless of their position.
pub fn parse_args<I>(args: I) -> Result<CliCommand>
where
    I: IntoIterator<Item = String>,
{
    let mut config_path: Option<PathBuf> = None;
    let mut runs_dir: Option<PathBuf> = None;
    let mut runs: Option<usize> = None;
    let mut json_out: Option<PathBuf> = None;
    let mut iter = args.into_iter();

    while let Some(arg) = iter.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => {
                (flag.to_string(), Some(value.to_string()))
            }
            _ => (arg.clone(), None),
        };
        let mut value = || {
            inline
                .clone()
                .or_else(|| iter.next())
                .ok_or_else(|| Error::config(format!("expected value after {flag}")))
        };
        match flag.as_str() {
            "-h" | "--help" => return Ok(CliCommand::Help),
            "-c" | "--config" => config_path = Some(PathBuf::from(value()?)),
            "--runs-dir" => runs_dir = Some(PathBuf::from(value()?)),
            "-n" | "--runs" => {
                let raw = value()?;
                let n = raw
                    .parse::<usize>()
                    .map_err(|_| Error::config(format!("invalid run count: {raw}")))?;
                runs = Some(n);
            }
            "--json-out" => json_out = Some(PathBuf::from(value()?)),
            _ => return Err(Error::config(format!("unexpected argument: {arg}"))),
        }
    }

    let mut config = match config_path {
        Some(path) => load_config(&path)?,
        None => RuntimeConfig::default(),
    };
    if let Some(dir) = runs_dir {
        config.experiment.runs_dir = dir;
    }
    if let Some(n) = runs {
        config.experiment.runs = n;
    }
    if json_out.is_some() {
        config.output.json_out = json_out;
    }
    if config.experiment.runs == 0 {
        return Err(Error::config("run count must be at least 1"));
    }
    Ok(CliCommand::Run(config))
}
