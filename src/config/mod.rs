//! Color configuration for the style applicator
//!
//! This module defines the decoded configuration model, the positional
//! slot contract of a color entry, and the parser that turns a JSON
//! string into a validated [`ColorConfig`].

pub mod models;
pub mod parser;


pub use models::{
    ColorConfig, ColorEntry, Variant, DAY_SLOT, LABEL_SLOT, MIN_SLOTS, NIGHT_SLOT,
};
pub use parser::{parse_config, ApplyError, StructureError};
