//! The style applicator: one pass from a serialized color configuration
//! to style properties on a sink.

use log::{debug, info};

use crate::config::{parse_config, ApplyError, ColorConfig, StructureError, DAY_SLOT};
use crate::sink::StyleSink;

/// Applies serialized color configurations to a [`StyleSink`], keeping the
/// last successfully parsed configuration around for inspection.
#[derive(Debug, Default)]
pub struct Applicator {
    last: Option<ColorConfig>,
}

impl Applicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode `input` and write one style property per color entry to
    /// `sink`, taking each entry's color value from `variant_slot` (the
    /// day slot when `None`) and its property name from the final slot.
    ///
    /// Fail-fast with partial application retained: decoding and shape
    /// validation happen before anything is written, so parse and shape
    /// failures apply no properties at all; a missing variant slot
    /// discovered mid-pass aborts the pass but leaves the properties
    /// already written on the sink.
    ///
    /// The parsed configuration is retained (see [`last_config`]) as soon
    /// as decoding succeeds, even if the pass itself then fails.
    ///
    /// [`last_config`]: Applicator::last_config
    pub fn apply(
        &mut self,
        input: &str,
        variant_slot: Option<usize>,
        sink: &mut dyn StyleSink,
    ) -> Result<(), ApplyError> {
        let config = parse_config(input)?;
        let result = apply_config(&config, variant_slot, sink);
        self.last = Some(config);
        result
    }

    /// The configuration from the most recent call whose decode succeeded.
    pub fn last_config(&self) -> Option<&ColorConfig> {
        self.last.as_ref()
    }
}

/// Stateless form of [`Applicator::apply`], for callers that do not need
/// the retained configuration.
pub fn apply_configuration(
    input: &str,
    variant_slot: Option<usize>,
    sink: &mut dyn StyleSink,
) -> Result<(), ApplyError> {
    let config = parse_config(input)?;
    apply_config(&config, variant_slot, sink)
}

fn apply_config(
    config: &ColorConfig,
    variant_slot: Option<usize>,
    sink: &mut dyn StyleSink,
) -> Result<(), ApplyError> {
    let slot = variant_slot.unwrap_or(DAY_SLOT);
    for (key, entry) in &config.colors {
        let value = entry
            .value_at(slot)
            .ok_or_else(|| StructureError::NoValueAtSlot {
                key: key.clone(),
                slot,
            })?;
        let name = entry.property_name();
        debug!("setting {name} = {value} (entry {key}, slot {slot})");
        sink.set_property(name, value);
    }
    info!(
        "applied {} color entries from slot {slot}",
        config.colors.len()
    );
    Ok(())
}
