//! CLI argument parsing and command dispatch

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Result};
use clap::{CommandFactory, Parser};
use overlay_run::launcher::{render_command_line, Launch, SystemLauncher};
use overlay_run::options::{default_config_path, Options, DEFAULT_ENV_PREFIX_FLAG};
use overlay_run::phases::orchestrator::{self, HELP_COMMAND, VERSION_COMMAND};

/// Overlay Run - Launch a command with arguments merged from the
/// environment and a config file
///
/// Everything from COMMAND onward is resolved: `--name=value`, `--name value`
/// and `-n value` arguments are kept in order, then variables named
/// `<PREFIX>_<NAME>` (with `--env_prefix=<prefix>`) and entries from the
/// config file are added as `--name=value`.
#[derive(Parser, Debug)]
#[command(name = "overlay-run")]
#[command(version, about, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// INI config file to merge (defaults to `.env` beside this executable)
    #[arg(long = "overlay-config", value_name = "PATH", env = "OVERLAY_RUN_CONFIG")]
    config: Option<PathBuf>,

    /// Let environment variables replace arguments that are already set
    #[arg(long = "overlay-override-env", env = "OVERLAY_RUN_OVERRIDE_ENV")]
    override_env: bool,

    /// Let config-file entries replace arguments that are already set
    #[arg(long = "overlay-override-config", env = "OVERLAY_RUN_OVERRIDE_CONFIG")]
    override_config: bool,

    /// Flag whose value names the environment-variable prefix
    #[arg(
        long = "overlay-prefix-flag",
        value_name = "NAME",
        env = "OVERLAY_RUN_PREFIX_FLAG",
        default_value = DEFAULT_ENV_PREFIX_FLAG
    )]
    prefix_flag: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(
        long = "overlay-log-level",
        value_name = "LEVEL",
        env = "OVERLAY_RUN_LOG",
        default_value = "warn",
        value_parser = ["error", "warn", "info", "debug", "trace"]
    )]
    log_level: String,

    /// Print the resolved command line instead of running it
    #[arg(long = "overlay-dry-run")]
    dry_run: bool,

    /// Command to run followed by its arguments (or -h, --help, -v, --version)
    #[arg(
        value_name = "COMMAND",
        num_args = 1..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    args: Vec<String>,
}

impl Cli {
    /// Execute the CLI command
    ///
    /// Returns the exit code to report: the child's own code when a command
    /// was run, success for help, version and dry runs.
    pub fn execute(self) -> Result<ExitCode> {
        init_logging(&self.log_level);

        let opts = self.options();
        let resolution = orchestrator::parse(&opts, &self.args)?;

        match resolution.command.as_str() {
            "" => bail!("No command was given; run with --help for usage"),
            HELP_COMMAND => {
                print!("{}", Cli::command().render_help());
                return Ok(ExitCode::SUCCESS);
            }
            VERSION_COMMAND => {
                print!("{}", Cli::command().render_version());
                return Ok(ExitCode::SUCCESS);
            }
            _ => {}
        }

        let args = resolution.args();
        if self.dry_run {
            println!("{}", render_command_line(&resolution.command, &args));
            return Ok(ExitCode::SUCCESS);
        }

        let code = SystemLauncher.launch(&resolution.command, &args)?;
        if code != 0 {
            log::warn!("Exit Status: {}", code);
        }
        Ok(ExitCode::from(u8::try_from(code).unwrap_or(1)))
    }

    fn options(&self) -> Options {
        Options {
            config_filename: self.config.clone().unwrap_or_else(default_config_path),
            override_with_config_vars: self.override_config,
            env_prefix_flag_name: self.prefix_flag.clone(),
            override_with_env_vars: self.override_env,
        }
    }
}

fn init_logging(level: &str) {
    // A second initialisation (e.g. from tests) is harmless.
    let _ = env_logger::Builder::new()
        .parse_filters(level)
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
