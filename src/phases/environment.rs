//! Phase 2: Environment Overlay
//!
//! This phase merges process environment variables into the set produced by
//! Phase 1. It only runs when the command line carries the prefix flag named
//! by [`Options::env_prefix_flag_name`], e.g. `--env_prefix=myapp`.
//!
//! ## Process
//!
//! 1.  **Prefix**: The prefix flag is removed from the set, since it is
//!     metadata for the launcher and not an argument for the child. Its
//!     value is upper-cased and given a trailing `_` (`myapp` -> `MYAPP_`).
//! 2.  **Snapshot**: The environment is captured once and sorted by name, so
//!     sequence numbers never depend on the order of the environment block.
//! 3.  **Merge**: Each variable starting with the prefix becomes the long
//!     flag `--<rest>` with `<rest>` lower-cased. Keys that already exist are
//!     replaced only when [`Options::override_with_env_vars`] is set.
//!     A variable named exactly the prefix has no key and is skipped.
//!
//! Without the prefix flag this phase does nothing.

use log::{debug, warn};

use crate::error::Result;
use crate::flagset::{FlagKey, FlagetteSet, Sequencer};
use crate::options::Options;

/// Source of environment variables.
pub trait EnvSource {
    /// Capture the current set of `(name, value)` pairs.
    fn snapshot(&self) -> Result<Vec<(String, String)>>;
}

/// Reads the environment of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn snapshot(&self) -> Result<Vec<(String, String)>> {
        let mut vars = Vec::new();
        for (name, value) in std::env::vars_os() {
            match (name.into_string(), value.into_string()) {
                (Ok(name), Ok(value)) => vars.push((name, value)),
                (name, _) => debug!("Skipping non UTF-8 environment entry {:?}", name),
            }
        }
        Ok(vars)
    }
}

impl EnvSource for Vec<(String, String)> {
    fn snapshot(&self) -> Result<Vec<(String, String)>> {
        Ok(self.clone())
    }
}

/// Normalize a prefix to upper case with a trailing `_`.
pub fn normalize_prefix(prefix: &str) -> String {
    let mut prefix = prefix.to_uppercase();
    if !prefix.ends_with('_') {
        prefix.push('_');
    }
    prefix
}

/// Execute Phase 2: merge prefixed environment variables into `flagettes`
pub fn execute(
    opts: &Options,
    flagettes: &mut FlagetteSet,
    env: &impl EnvSource,
    seq: &mut Sequencer,
) -> Result<()> {
    if opts.env_prefix_flag_name.is_empty() {
        return Ok(());
    }

    let prefix_key = FlagKey::long(opts.env_prefix_flag_name.as_str());
    let Some(prefix_flag) = flagettes.get(&prefix_key).cloned() else {
        return Ok(());
    };

    let mut vars = env.snapshot()?;

    flagettes.remove(&prefix_key);
    if !prefix_flag.has_value() {
        warn!(
            "{} was given without a value; skipping environment variables",
            prefix_flag.name()
        );
        return Ok(());
    }

    let prefix = normalize_prefix(prefix_flag.value());
    debug!("Scanning environment for {}*", prefix);

    vars.sort();
    for (name, value) in vars {
        if let Some(rest) = name.strip_prefix(&prefix) {
            if rest.is_empty() {
                debug!("Skipping {}: nothing follows the prefix", name);
                continue;
            }
            let lookup_key = rest.to_lowercase();
            flagettes.overlay(&lookup_key, &value, opts.override_with_env_vars, seq);
        }
    }

    Ok(())
}
