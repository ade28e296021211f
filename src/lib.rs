//! # Overlay Run Library
//!
//! This library resolves the argument list for a launched command. It takes
//! the user's command line, adds values found in prefixed environment
//! variables and an INI-style config file, settles conflicts between the
//! three sources and writes the result back out as a deterministic argument
//! vector. It is used by the `overlay-run` command-line tool.
//!
//! ## Quick Example
//!
//! ```
//! use overlay_run::options::Options;
//! use overlay_run::phases::orchestrator;
//!
//! let opts = Options {
//!     config_filename: "/nonexistent/.env".into(),
//!     override_with_config_vars: false,
//!     env_prefix_flag_name: "env_prefix".to_string(),
//!     override_with_env_vars: false,
//! };
//! let env: Vec<(String, String)> = Vec::new();
//!
//! let resolution =
//!     orchestrator::parse_with_env(&opts, &["run", "--port=8080", "-v", "staging"], &env)
//!         .unwrap();
//! assert_eq!(resolution.command, "run");
//! assert_eq!(resolution.args(), vec!["--port=8080", "-v", "staging"]);
//! ```
//!
//! ## Core Concepts
//!
//! - **Flagette (`flagette`)**: One resolved argument: its name with dashes,
//!   whether the value is attached with `=` or follows as its own token, the
//!   value, and a sequence number.
//! - **Flagette set (`flagset`)**: The unordered mapping every stage merges
//!   into, plus the `Sequencer` that restores a stable order.
//! - **Options (`options`)**: Where the config file lives, which flag names
//!   the environment prefix, and whether each overlay may replace values.
//! - **Phases (`phases`)**: Command-line ingestion, environment overlay,
//!   config-file overlay and serialization.
//! - **Launcher (`launcher`)**: Runs the resolved command and reports its
//!   exit code.

pub mod error;
pub mod flagette;
pub mod flagset;
pub mod launcher;
pub mod options;
pub mod phases;

#[cfg(test)]
mod flagset_proptest;
