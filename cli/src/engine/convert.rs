use crate::engine::detector::parse_value;
use crate::engine::error::ConversionError;
use crate::engine::formatter::FormatPolicy;
use crate::engine::table::{ConversionTable, UnitRef};
use crate::engine::types::ConversionResult;

/// A validated conversion: finite value and two units of the same table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionRequest<'t> {
    value: f64,
    from: UnitRef<'t>,
    to: UnitRef<'t>,
}

impl<'t> ConversionRequest<'t> {
    pub(crate) fn new(value: f64, from: UnitRef<'t>, to: UnitRef<'t>) -> Self {
        Self { value, from, to }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn from(&self) -> UnitRef<'t> {
        self.from
    }

    pub fn to(&self) -> UnitRef<'t> {
        self.to
    }

    /// Normalize to the base unit, then project onto the target unit.
    pub fn raw(&self) -> f64 {
        if self.from == self.to {
            return self.value;
        }
        let base_value = self.value * self.from.factor();
        base_value / self.to.factor()
    }

    pub fn evaluate(&self, policy: &FormatPolicy) -> ConversionResult {
        let raw = self.raw();
        ConversionResult {
            raw,
            formatted: policy.format(raw),
        }
    }

    /// Evaluate with the owning table's policy
    pub fn evaluate_default(&self) -> ConversionResult {
        self.evaluate(self.from.table().policy())
    }
}

/// Convert `value` from one unit of `table` to another.
pub fn convert(
    value: f64,
    from: &str,
    to: &str,
    table: &ConversionTable,
) -> Result<f64, ConversionError> {
    Ok(table.request(value, from, to)?.raw())
}

/// Parse user text and convert it, producing a display-ready result.
pub fn convert_text(
    text: &str,
    from: &str,
    to: &str,
    table: &ConversionTable,
) -> Result<ConversionResult, ConversionError> {
    let value = parse_value(text)?;
    let request = table.request(value, from, to)?;
    Ok(request.evaluate_default())
}

/// Convert one value into every unit of the table, in table order.
pub fn convert_all<'t>(
    value: f64,
    from: &str,
    table: &'t ConversionTable,
) -> Result<Vec<(UnitRef<'t>, ConversionResult)>, ConversionError> {
    let from = table.unit(from)?;
    let value = table.check_value(value)?;
    Ok(table
        .iter()
        .map(|to| (to, ConversionRequest::new(value, from, to).evaluate_default()))
        .collect())
}
