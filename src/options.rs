//! Process-wide resolution options.
//!
//! [`Options`] is built once at startup and only read afterwards. The
//! defaults put the config file next to the launcher's own executable and
//! leave values that are already present untouched by both overlays.

use std::path::PathBuf;

/// Name of the config file looked up beside the executable.
pub const DEFAULT_CONFIG_FILENAME: &str = ".env";

/// Flag whose value names the environment-variable prefix.
pub const DEFAULT_ENV_PREFIX_FLAG: &str = "env_prefix";

/// Options controlling where overlay values come from and who wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Absolute path to the INI-style config file.
    pub config_filename: PathBuf,
    /// Replace existing entries with matching config-file values.
    pub override_with_config_vars: bool,
    /// Long flag (without dashes) whose value is the environment prefix.
    pub env_prefix_flag_name: String,
    /// Replace existing entries with matching environment values.
    pub override_with_env_vars: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            config_filename: default_config_path(),
            override_with_config_vars: false,
            env_prefix_flag_name: DEFAULT_ENV_PREFIX_FLAG.to_string(),
            override_with_env_vars: false,
        }
    }
}

/// Returns the default config file path.
///
/// This is `.env` in the directory holding the running executable. Falls
/// back to the current directory if the executable path cannot be
/// determined.
pub fn default_config_path() -> PathBuf {
    let dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|parent| parent.to_path_buf()))
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."));
    dir.join(DEFAULT_CONFIG_FILENAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_path_ends_with_env_file() {
        let path = default_config_path();
        assert!(path.ends_with(DEFAULT_CONFIG_FILENAME));
    }

    #[test]
    fn test_default_config_path_is_beside_executable() {
        let exe_dir = std::env::current_exe()
            .unwrap()
            .parent()
            .unwrap()
            .to_path_buf();
        assert_eq!(default_config_path(), exe_dir.join(".env"));
    }

    #[test]
    fn test_default_options() {
        let opts = Options::default();
        assert!(!opts.override_with_config_vars);
        assert!(!opts.override_with_env_vars);
        assert_eq!(opts.env_prefix_flag_name, "env_prefix");
    }
}
