//! Phase 4: Serialization
//!
//! This is the last phase of the pipeline. It flattens the final set into
//! the argument vector handed to the child process.
//!
//! The set is unordered, so flagettes are sorted by sequence number first.
//! An `=` flagette contributes the single token `name=value`; a space
//! flagette contributes `name` followed by `value`. Nothing is quoted or
//! escaped.

use crate::flagset::FlagetteSet;

/// Execute Phase 4: flatten `flagettes` into argument tokens
pub fn execute(flagettes: &FlagetteSet) -> Vec<String> {
    flagettes
        .sorted()
        .into_iter()
        .flat_map(|flagette| flagette.to_args())
        .collect()
}
