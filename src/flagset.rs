//! The mapping shared by all ingestion stages.
//!
//! A [`FlagetteSet`] is keyed by [`FlagKey`] and deliberately unordered.
//! Ordering is carried by each flagette's sequence number, handed out by a
//! [`Sequencer`] that every stage receives explicitly. Stages replace entries
//! wholesale; nothing outside the set holds on to a flagette.

use std::collections::hash_map::{self, HashMap};
use std::fmt;

use log::debug;

use crate::flagette::{AssignOper, Flagette};

/// Lookup key for a flagette.
///
/// Long and short flags live in separate namespaces, so `--p` and `-p`
/// never collide. Environment and config entries always produce long keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FlagKey {
    Long(String),
    Short(String),
}

impl FlagKey {
    pub fn long(key: impl Into<String>) -> Self {
        FlagKey::Long(key.into())
    }

    pub fn short(key: impl Into<String>) -> Self {
        FlagKey::Short(key.into())
    }
}

impl fmt::Display for FlagKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagKey::Long(key) => write!(f, "--{}", key),
            FlagKey::Short(key) => write!(f, "-{}", key),
        }
    }
}

/// Monotonic source of sequence numbers, starting at 1.
#[derive(Debug, Clone)]
pub struct Sequencer {
    next: u64,
}

impl Sequencer {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Hand out the next sequence number.
    pub fn next_sequence(&mut self) -> u64 {
        let sequence = self.next;
        self.next += 1;
        sequence
    }
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of merging one overlay entry into the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    /// The key was new and has been added.
    Inserted,
    /// The key existed and override was on; the entry was replaced.
    Replaced,
    /// The key existed and override was off; the entry was left alone.
    Kept,
}

/// Keys-unique mapping from [`FlagKey`] to [`Flagette`].
#[derive(Debug, Clone, Default)]
pub struct FlagetteSet {
    entries: HashMap<FlagKey, Flagette>,
}

impl FlagetteSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &FlagKey) -> Option<&Flagette> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &FlagKey) -> Option<&mut Flagette> {
        self.entries.get_mut(key)
    }

    pub fn contains_key(&self, key: &FlagKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn remove(&mut self, key: &FlagKey) -> Option<Flagette> {
        self.entries.remove(key)
    }

    /// Insert a flagette exactly as given, sequence number included.
    ///
    /// Returns the previous entry for `key`, if any.
    pub fn insert(&mut self, key: FlagKey, flagette: Flagette) -> Option<Flagette> {
        self.entries.insert(key, flagette)
    }

    /// Place a flagette in the set, assigning its sequence number.
    ///
    /// A new key takes the next number from `seq`. A key that is already
    /// present is replaced but keeps the number it was first introduced
    /// with.
    pub fn introduce(&mut self, key: FlagKey, mut flagette: Flagette, seq: &mut Sequencer) {
        match self.entries.entry(key) {
            hash_map::Entry::Occupied(mut slot) => {
                flagette.set_sequence(slot.get().sequence());
                slot.insert(flagette);
            }
            hash_map::Entry::Vacant(slot) => {
                flagette.set_sequence(seq.next_sequence());
                slot.insert(flagette);
            }
        }
    }

    /// Merge a `key=value` pair from an overlay source.
    ///
    /// The entry is emitted as `--key=value`. An existing key is only
    /// replaced when `override_existing` is set.
    pub fn overlay(
        &mut self,
        key: &str,
        value: &str,
        override_existing: bool,
        seq: &mut Sequencer,
    ) -> Overlay {
        let flag_key = FlagKey::long(key);
        let outcome = if self.entries.contains_key(&flag_key) {
            if !override_existing {
                debug!("{}: already present, keeping existing value", flag_key);
                return Overlay::Kept;
            }
            Overlay::Replaced
        } else {
            Overlay::Inserted
        };

        debug!("{}: {:?} with value '{}'", flag_key, outcome, value);
        let flagette = Flagette::new(format!("--{}", key), AssignOper::Equals, value);
        self.introduce(flag_key, flagette, seq);
        outcome
    }

    /// All flagettes ordered by ascending sequence number.
    pub fn sorted(&self) -> Vec<&Flagette> {
        let mut flagettes: Vec<&Flagette> = self.entries.values().collect();
        flagettes.sort_by_key(|flagette| flagette.sequence());
        flagettes
    }
}
