//! A single resolved argument.
//!
//! A [`Flagette`] remembers how an argument will be written back out: the
//! literal name including its dashes, whether the value was attached with
//! `=` or given as the following token, the value itself, and the sequence
//! number that fixes its position in the final argument vector.

use std::fmt;

/// How a value is attached to its flag name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignOper {
    /// `--name=value`, emitted as a single token.
    Equals,
    /// `--name value`, emitted as two tokens (or the value is absent).
    Space,
}

impl AssignOper {
    /// The literal operator text, `"="` or `" "`.
    pub fn as_str(self) -> &'static str {
        match self {
            AssignOper::Equals => "=",
            AssignOper::Space => " ",
        }
    }
}

impl fmt::Display for AssignOper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One resolved argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flagette {
    name: String,
    assign_oper: AssignOper,
    value: String,
    sequence: u64,
}

impl Flagette {
    /// Create a flagette that has not been placed in a set yet.
    ///
    /// The sequence number stays `0` until [`FlagetteSet::introduce`]
    /// assigns one.
    ///
    /// [`FlagetteSet::introduce`]: crate::flagset::FlagetteSet::introduce
    pub fn new(name: impl Into<String>, assign_oper: AssignOper, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            assign_oper,
            value: value.into(),
            sequence: 0,
        }
    }

    /// Name as it will appear on the child's command line, dashes included.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn assign_oper(&self) -> AssignOper {
        self.assign_oper
    }

    /// True when the value was attached with `=`.
    pub fn has_equal_assignment_oper(&self) -> bool {
        self.assign_oper == AssignOper::Equals
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// True when the value is non-empty.
    pub fn has_value(&self) -> bool {
        !self.value.is_empty()
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub(crate) fn set_sequence(&mut self, sequence: u64) {
        self.sequence = sequence;
    }

    /// The name, operator and value concatenated without escaping.
    pub fn emit(&self) -> String {
        format!("{}{}{}", self.name, self.assign_oper, self.value)
    }

    /// The argument tokens this flagette contributes to the child's argv.
    ///
    /// `=` produces `["name=value"]`; a space produces `["name", "value"]`.
    pub fn to_args(&self) -> Vec<String> {
        if self.has_equal_assignment_oper() {
            vec![self.emit()]
        } else {
            vec![self.name.clone(), self.value.clone()]
        }
    }
}
