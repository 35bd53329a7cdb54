//! Style sinks: where applied color properties land.
//!
//! The applicator writes through the [`StyleSink`] capability instead of a
//! live style object, so hosts decide what "the document root" is: an
//! in-process property store, a rendered stylesheet, or a real style
//! surface owned by the embedding application.

use std::fmt::Write;

/// A destination for style property writes.
///
/// One method, matching the single operation the applicator performs:
/// set a named property to a value, overwriting any prior value.
pub trait StyleSink {
    fn set_property(&mut self, name: &str, value: &str);
}

/// An in-memory property store, last writer wins per name.
///
/// Keeps first-write insertion order, which makes assertions on the exact
/// `(name, value)` pairs written straightforward in tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySink {
    properties: Vec<(String, String)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current value of `name`, if any write has set it.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// All properties in first-write order.
    pub fn properties(&self) -> &[(String, String)] {
        &self.properties
    }
}

impl StyleSink for MemorySink {
    fn set_property(&mut self, name: &str, value: &str) {
        match self.properties.iter_mut().find(|(n, _)| n == name) {
            Some(slot) => slot.1 = value.to_owned(),
            None => self.properties.push((name.to_owned(), value.to_owned())),
        }
    }
}

/// A sink that renders its properties as a `:root` CSS rule, for hosts
/// that inject a stylesheet rather than touching a style object directly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StylesheetSink {
    properties: MemorySink,
}

impl StylesheetSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the accumulated properties as a `:root { ... }` block with
    /// one declaration per line.
    pub fn to_css(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in self.properties.properties() {
            // write! to a String cannot fail
            let _ = writeln!(css, "  {name}: {value};");
        }
        css.push_str("}\n");
        css
    }
}

impl StyleSink for StylesheetSink {
    fn set_property(&mut self, name: &str, value: &str) {
        self.properties.set_property(name, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_records_pairs_in_order() {
        let mut sink = MemorySink::new();
        sink.set_property("--a", "#111");
        sink.set_property("--b", "#222");
        assert_eq!(
            sink.properties(),
            &[
                ("--a".to_owned(), "#111".to_owned()),
                ("--b".to_owned(), "#222".to_owned()),
            ]
        );
    }

    #[test]
    fn test_memory_sink_last_writer_wins() {
        let mut sink = MemorySink::new();
        sink.set_property("--a", "#111");
        sink.set_property("--a", "#999");
        assert_eq!(sink.get("--a"), Some("#999"));
        assert_eq!(sink.properties().len(), 1);
    }

    #[test]
    fn test_stylesheet_sink_renders_root_block() {
        let mut sink = StylesheetSink::new();
        sink.set_property("--accent-color", "#112233");
        sink.set_property("--canvas", "#f5f5f5");
        assert_eq!(
            sink.to_css(),
            ":root {\n  --accent-color: #112233;\n  --canvas: #f5f5f5;\n}\n"
        );
    }

    #[test]
    fn test_empty_stylesheet_sink_renders_empty_rule() {
        assert_eq!(StylesheetSink::new().to_css(), ":root {\n}\n");
    }
}
