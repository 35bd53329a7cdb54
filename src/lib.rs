//! recolor
//!
//! Reads a JSON-encoded color configuration and applies one named style
//! property per color entry through a pluggable [`StyleSink`]. Entries
//! are positional: a reserved label, a day value, optional alternate
//! values, and the property name in the final slot. A variant slot index
//! selects which value is applied; the day slot is the default.

pub mod apply;
pub mod config;
pub mod sink;

pub use apply::{apply_configuration, Applicator};
pub use config::{
    parse_config, ApplyError, ColorConfig, ColorEntry, StructureError, Variant, DAY_SLOT,
    LABEL_SLOT, MIN_SLOTS, NIGHT_SLOT,
};
pub use sink::{MemorySink, StyleSink, StylesheetSink};
