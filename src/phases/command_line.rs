//! Phase 1: Command-Line Ingestion
//!
//! This is the first phase of the resolution pipeline. It turns the argument
//! vector that follows the command token into a [`FlagetteSet`].
//!
//! ## Process
//!
//! Tokens are read left to right while a cursor tracks the most recently
//! started flag:
//!
//! 1.  **Long flags** (`--name`, `--name=value`) start a new flagette keyed
//!     in the long namespace. Only the first `=` splits name from value.
//! 2.  **Short flags** (`-n`, `-n=value`) are handled the same way in the
//!     short namespace.
//! 3.  **Bare tokens** become the value of the cursor flag when it has none
//!     yet. Anything else is dropped with a warning.
//!
//! A token made only of dashes (`-` or `--`) is treated as a bare token. A
//! flag with an empty name such as `--=value` is dropped with a warning.

use log::{debug, warn};

use crate::flagette::{AssignOper, Flagette};
use crate::flagset::{FlagKey, FlagetteSet, Sequencer};

/// Execute Phase 1: ingest command-line tokens into a fresh set
///
/// Never fails; an empty token list yields an empty set.
pub fn execute<S: AsRef<str>>(args: &[S], seq: &mut Sequencer) -> FlagetteSet {
    let mut flagettes = FlagetteSet::new();
    let mut cursor: Option<FlagKey> = None;

    for arg in args {
        let arg = arg.as_ref();
        match classify(arg) {
            Token::Flag { key, flagette } => {
                debug!("flag {} -> {}", key, flagette.emit());
                flagettes.introduce(key.clone(), flagette, seq);
                cursor = Some(key);
            }
            Token::Bare => {
                let pending = cursor
                    .as_ref()
                    .and_then(|key| flagettes.get_mut(key))
                    .filter(|flagette| !flagette.has_value());
                match pending {
                    Some(flagette) => {
                        debug!("value '{}' for {}", arg, flagette.name());
                        flagette.set_value(arg);
                    }
                    None => warn!("Dropping unrecognized argument: {}", arg),
                }
            }
            Token::Unnamed => warn!("Dropping flag without a name: {}", arg),
        }
    }

    flagettes
}

enum Token {
    Flag { key: FlagKey, flagette: Flagette },
    Bare,
    Unnamed,
}

fn classify(arg: &str) -> Token {
    if arg.chars().all(|c| c == '-') {
        return Token::Bare;
    }

    let (dashes, stripped) = if let Some(stripped) = arg.strip_prefix("--") {
        ("--", stripped)
    } else if let Some(stripped) = arg.strip_prefix('-') {
        ("-", stripped)
    } else {
        return Token::Bare;
    };

    let (key, flagette) = match stripped.split_once('=') {
        Some((key, value)) => (
            key,
            Flagette::new(format!("{}{}", dashes, key), AssignOper::Equals, value),
        ),
        None => (stripped, Flagette::new(arg, AssignOper::Space, "")),
    };
    if key.is_empty() {
        return Token::Unnamed;
    }

    let key = if dashes == "--" {
        FlagKey::long(key)
    } else {
        FlagKey::short(key)
    };
    Token::Flag { key, flagette }
}
