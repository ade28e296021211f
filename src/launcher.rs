//! Running the resolved command.
//!
//! The launcher spawns the child with the parent's standard streams, waits
//! for it and reports its exit code. A child that exits non-zero is not an
//! error here; only a failure to start it is.

use std::process::{Command, ExitStatus};

use log::info;

use crate::error::{Error, Result};

/// Something that can run a command to completion.
pub trait Launch {
    /// Run `command` with `args` and return its exit code.
    fn launch(&self, command: &str, args: &[String]) -> Result<i32>;
}

/// Launches real child processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLauncher;

impl Launch for SystemLauncher {
    fn launch(&self, command: &str, args: &[String]) -> Result<i32> {
        info!("Running app: {}", render_command_line(command, args));

        let status = Command::new(command)
            .args(args)
            .status()
            .map_err(|source| Error::Launch {
                command: command.to_string(),
                source,
            })?;

        let code = exit_code(status);
        info!(
            "Finished running app: {} (exit status {})",
            render_command_line(command, args),
            code
        );
        Ok(code)
    }
}

/// Join the command and its arguments with single spaces.
///
/// Used for logs and dry runs only; nothing is quoted.
pub fn render_command_line(command: &str, args: &[String]) -> String {
    std::iter::once(command)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Map a child's exit status to a process exit code.
///
/// On Unix a child killed by a signal reports `128 + signal`.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
