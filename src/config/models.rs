//! Color configuration data model

use serde::Serialize;
use std::collections::BTreeMap;

/// Slot holding the human-readable label of an entry. Reserved: the
/// applicator never writes it anywhere.
pub const LABEL_SLOT: usize = 0;

/// Slot holding the default ("day") color value.
pub const DAY_SLOT: usize = 1;

/// Slot holding the conventional alternate ("night") color value.
pub const NIGHT_SLOT: usize = 2;

/// Minimum number of slots an entry must have: one color value plus the
/// trailing property name.
pub const MIN_SLOTS: usize = 2;

/// Decoded color configuration: a mapping from entry identifiers to
/// positional color entries.
///
/// Constructed by [`parse_config`](super::parse_config); the parser is the
/// only decode path, so every entry in `colors` already satisfies the slot
/// invariants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorConfig {
    pub colors: BTreeMap<String, ColorEntry>,
}

/// One color entry: an ordered sequence of string slots.
///
/// The canonical layout is `[label, day, night, property-name]`, with the
/// property name always in the final slot. Entries may carry more or fewer
/// value slots; the variant slot passed to the applicator selects which
/// one is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ColorEntry(Vec<String>);

impl ColorEntry {
    /// Builds an entry from raw slots. Returns `None` when there are fewer
    /// than [`MIN_SLOTS`] slots.
    pub fn new(slots: Vec<String>) -> Option<Self> {
        (slots.len() >= MIN_SLOTS).then_some(Self(slots))
    }

    pub fn slots(&self) -> &[String] {
        &self.0
    }

    /// The reserved label slot (canonical layout).
    pub fn label(&self) -> &str {
        &self.0[LABEL_SLOT]
    }

    /// The style property name this entry controls, always the final slot.
    pub fn property_name(&self) -> &str {
        &self.0[self.property_slot()]
    }

    /// Index of the property-name slot.
    pub fn property_slot(&self) -> usize {
        self.0.len() - 1
    }

    /// The color value at `slot`, or `None` when the slot is absent or is
    /// the property-name slot itself.
    pub fn value_at(&self, slot: usize) -> Option<&str> {
        (slot < self.property_slot()).then(|| self.0[slot].as_str())
    }

    pub fn day(&self) -> Option<&str> {
        self.value_at(DAY_SLOT)
    }

    pub fn night(&self) -> Option<&str> {
        self.value_at(NIGHT_SLOT)
    }
}

/// Named variant selection over the positional slot contract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Variant {
    #[default]
    Day,
    Night,
    /// An explicit slot index, for configs carrying extra variants.
    Slot(usize),
}

impl Variant {
    /// The slot index this variant selects.
    pub fn slot(self) -> usize {
        match self {
            Variant::Day => DAY_SLOT,
            Variant::Night => NIGHT_SLOT,
            Variant::Slot(n) => n,
        }
    }
}
