//! Orchestrator for the complete resolution
//!
//! This module runs the ingestion phases in their fixed order and returns
//! the command name with the merged set. Phase 4 (serialization) is left to
//! the caller through [`Resolution::args`].

use super::{phase1, phase2, phase3, phase4};
use crate::error::{Error, Result};
use crate::flagset::{FlagetteSet, Sequencer};
use crate::options::Options;
use crate::phases::environment::{EnvSource, ProcessEnv};

/// Command reported for `-h` / `--help`.
pub const HELP_COMMAND: &str = "help";

/// Command reported for `-v` / `--version`.
pub const VERSION_COMMAND: &str = "version";

/// The outcome of a resolution: what to run and with which flags.
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    /// Command to run. Empty when no arguments were given.
    pub command: String,
    pub flagettes: FlagetteSet,
}

impl Resolution {
    fn with_command(command: &str) -> Self {
        Self {
            command: command.to_string(),
            flagettes: FlagetteSet::new(),
        }
    }

    /// The argument vector for the child, in sequence order.
    pub fn args(&self) -> Vec<String> {
        phase4::execute(&self.flagettes)
    }
}

/// Resolve `args` against the real process environment
///
/// `args` starts with the command token. See [`parse_with_env`].
pub fn parse<S: AsRef<str>>(opts: &Options, args: &[S]) -> Result<Resolution> {
    parse_with_env(opts, args, &ProcessEnv)
}

/// Resolve `args` with environment variables taken from `env`
///
/// 1. An empty `args` resolves to an empty command and an empty set.
/// 2. `-h`/`--help` resolve to `help` and `-v`/`--version` to `version`
///    without reading anything else.
/// 3. Any other first token starting with `-` is an [`Error::Usage`].
/// 4. Otherwise the first token is the command and the rest runs through
///    the command-line, environment and config-file phases in that order.
pub fn parse_with_env<S: AsRef<str>>(
    opts: &Options,
    args: &[S],
    env: &impl EnvSource,
) -> Result<Resolution> {
    let Some((first, rest)) = args.split_first() else {
        return Ok(Resolution::default());
    };

    let command = match first.as_ref() {
        "-h" | "--help" => return Ok(Resolution::with_command(HELP_COMMAND)),
        "-v" | "--version" => return Ok(Resolution::with_command(VERSION_COMMAND)),
        token if token.starts_with('-') => {
            return Err(Error::Usage {
                token: token.to_string(),
            })
        }
        token => token.to_string(),
    };

    let mut seq = Sequencer::new();

    // Phase 1: Command-Line Ingestion
    let mut flagettes = phase1::execute(rest, &mut seq);

    // Phase 2: Environment Overlay
    phase2::execute(opts, &mut flagettes, env, &mut seq)?;

    // Phase 3: Config-File Overlay
    phase3::execute(opts, &mut flagettes, &mut seq)?;

    Ok(Resolution { command, flagettes })
}
