use serde::{Deserialize, Serialize};

/// A single unit of a quantity.
///
/// `factor` is how many base units one of this unit is worth, so
/// `value_in_base = value * factor`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Unit {
    pub key: String,

    #[serde(rename = "name", alias = "displayName")]
    pub display_name: String,

    pub factor: f64,

    // Alternate spellings accepted by lookups (e.g. "ohm" for "Ω")
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
}

impl Unit {
    pub fn new(key: &str, display_name: &str, factor: f64) -> Self {
        Self {
            key: key.to_string(),
            display_name: display_name.to_string(),
            factor,
            aliases: Vec::new(),
        }
    }

    pub fn with_aliases(mut self, aliases: &[&str]) -> Self {
        self.aliases = aliases.iter().map(|a| a.to_string()).collect();
        self
    }

    pub fn is_base(&self) -> bool {
        self.factor == 1.0
    }

    /// Label used by unit selectors, e.g. "Kiloohm (kΩ)"
    pub fn label(&self) -> String {
        format!("{} ({})", self.display_name, self.key)
    }
}

/// Outcome of a single conversion: the raw number and its display string.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionResult {
    pub raw: f64,
    pub formatted: String,
}
