//! Phase 3: Config-File Overlay
//!
//! This phase merges entries from an INI-style config file into the set.
//! Keys outside any section keep their own name; keys inside `[section]`
//! become `section_key`. Both parts are lower-cased.
//!
//! A missing file is not an error and contributes nothing. Any other read
//! or parse failure aborts resolution with [`Error::ConfigLoad`].

use std::io::ErrorKind;
use std::path::Path;

use ini::Ini;
use log::debug;

use crate::error::{Error, Result};
use crate::flagset::{FlagetteSet, Sequencer};
use crate::options::Options;

/// One `(lookup key, value)` pair read from the config file.
pub type ConfigEntry = (String, String);

/// Load every entry from the config file at `path`, in file order.
///
/// Returns an empty list when the file does not exist.
pub fn load_entries(path: &Path) -> Result<Vec<ConfigEntry>> {
    let conf = match Ini::load_from_file_noescape(path) {
        Ok(conf) => conf,
        Err(ini::Error::Io(err)) if err.kind() == ErrorKind::NotFound => {
            debug!("No config file at {}", path.display());
            return Ok(Vec::new());
        }
        Err(err) => {
            return Err(Error::ConfigLoad {
                path: path.to_path_buf(),
                message: err.to_string(),
            })
        }
    };

    let mut entries = Vec::new();
    for (section, properties) in conf.iter() {
        for (key, value) in properties.iter() {
            if key.is_empty() {
                debug!("Skipping entry without a key in {}", path.display());
                continue;
            }
            entries.push((lookup_key(section, key), value.to_string()));
        }
    }
    Ok(entries)
}

/// Build the lookup key for `key` in `section`.
pub fn lookup_key(section: Option<&str>, key: &str) -> String {
    match section {
        Some(section) if !section.is_empty() => {
            format!("{}_{}", section.to_lowercase(), key.to_lowercase())
        }
        _ => key.to_lowercase(),
    }
}

/// Execute Phase 3: merge config-file entries into `flagettes`
pub fn execute(opts: &Options, flagettes: &mut FlagetteSet, seq: &mut Sequencer) -> Result<()> {
    let entries = load_entries(&opts.config_filename)?;
    debug!(
        "Loaded {} entries from {}",
        entries.len(),
        opts.config_filename.display()
    );

    for (key, value) in entries {
        flagettes.overlay(&key, &value, opts.override_with_config_vars, seq);
    }

    Ok(())
}
