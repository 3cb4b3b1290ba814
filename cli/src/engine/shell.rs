use crate::engine::convert::ConversionRequest;
use crate::engine::detector::parse_value;
use crate::engine::error::ConversionError;
use crate::engine::table::{ConversionTable, UnitRef};
use crate::engine::types::ConversionResult;
use log::debug;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const INVALID_NUMBER_MESSAGE: &str = "Please enter a valid number";

/// What `swap_units` does besides exchanging the selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SwapMode {
    #[default]
    UnitsOnly,
    /// Also move the last formatted result into the input
    CarryResult,
}

/// Initial input and unit selection, restored by `reset`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ShellDefaults {
    #[serde(default = "default_input")]
    pub input: String,
    pub from: String,
    pub to: String,
}

fn default_input() -> String {
    "1".to_string()
}

impl ShellDefaults {
    /// One base unit converted into the first other unit of the table.
    pub fn for_table(table: &ConversionTable) -> Self {
        let base = table.base();
        let target = table.iter().find(|u| !u.is_base()).unwrap_or(base);
        Self {
            input: default_input(),
            from: base.key().to_string(),
            to: target.key().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ShellState {
    /// No valid input; `message` explains why when the input is not empty
    Idle { message: Option<String> },
    Computed(ConversionResult),
}

impl ShellState {
    fn name(&self) -> &'static str {
        match self {
            ShellState::Idle { .. } => "Idle",
            ShellState::Computed(_) => "Computed",
        }
    }
}

/// State behind one converter page: input text, two unit selectors and the
/// displayed result. Every mutation recomputes synchronously.
#[derive(Debug, Clone)]
pub struct ConverterShell {
    table: Arc<ConversionTable>,
    defaults: (String, usize, usize),
    swap_mode: SwapMode,
    input: String,
    from: usize,
    to: usize,
    state: ShellState,
}

impl ConverterShell {
    pub fn new(
        table: Arc<ConversionTable>,
        defaults: &ShellDefaults,
    ) -> Result<Self, ConversionError> {
        let from = table.unit(&defaults.from)?.index();
        let to = table.unit(&defaults.to)?.index();

        let mut shell = Self {
            table,
            defaults: (defaults.input.clone(), from, to),
            swap_mode: SwapMode::default(),
            input: defaults.input.clone(),
            from,
            to,
            state: ShellState::Idle { message: None },
        };
        shell.recompute();
        Ok(shell)
    }

    /// Shell with the table's own defaults.
    pub fn for_table(table: Arc<ConversionTable>) -> Self {
        let defaults = ShellDefaults::for_table(&table);
        let base = table.base().index();
        let to = table
            .unit(&defaults.to)
            .map(|u| u.index())
            .unwrap_or(base);

        let mut shell = Self {
            table,
            defaults: (defaults.input.clone(), base, to),
            swap_mode: SwapMode::default(),
            input: defaults.input,
            from: base,
            to,
            state: ShellState::Idle { message: None },
        };
        shell.recompute();
        shell
    }

    pub fn with_swap_mode(mut self, mode: SwapMode) -> Self {
        self.swap_mode = mode;
        self
    }

    pub fn table(&self) -> &ConversionTable {
        &self.table
    }

    pub fn state(&self) -> &ShellState {
        &self.state
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn from_unit(&self) -> UnitRef<'_> {
        self.unit(self.from)
    }

    pub fn to_unit(&self) -> UnitRef<'_> {
        self.unit(self.to)
    }

    /// Text for the read-only result field (empty when idle)
    pub fn result_text(&self) -> &str {
        match &self.state {
            ShellState::Computed(result) => &result.formatted,
            ShellState::Idle { .. } => "",
        }
    }

    pub fn message(&self) -> Option<&str> {
        match &self.state {
            ShellState::Idle { message } => message.as_deref(),
            ShellState::Computed(_) => None,
        }
    }

    pub fn set_input(&mut self, text: &str) -> &ShellState {
        self.input = text.to_string();
        self.recompute();
        &self.state
    }

    /// Select the source unit. Unknown keys leave the selection unchanged.
    pub fn select_from(&mut self, key: &str) -> Result<&ShellState, ConversionError> {
        self.from = self.table.unit(key)?.index();
        self.recompute();
        Ok(&self.state)
    }

    /// Select the target unit. Unknown keys leave the selection unchanged.
    pub fn select_to(&mut self, key: &str) -> Result<&ShellState, ConversionError> {
        self.to = self.table.unit(key)?.index();
        self.recompute();
        Ok(&self.state)
    }

    pub fn swap_units(&mut self) -> &ShellState {
        if self.swap_mode == SwapMode::CarryResult {
            if let ShellState::Computed(result) = &self.state {
                self.input = result.formatted.clone();
            }
        }
        std::mem::swap(&mut self.from, &mut self.to);
        self.recompute();
        &self.state
    }

    pub fn reset(&mut self) -> &ShellState {
        let (input, from, to) = self.defaults.clone();
        self.input = input;
        self.from = from;
        self.to = to;
        self.recompute();
        &self.state
    }

    fn unit(&self, index: usize) -> UnitRef<'_> {
        self.table.unit_at(index).unwrap_or_else(|| self.table.base())
    }

    fn evaluate(&self) -> ShellState {
        if self.input.trim().is_empty() {
            return ShellState::Idle { message: None };
        }

        let value = match parse_value(&self.input) {
            Ok(value) => value,
            Err(_) => {
                return ShellState::Idle {
                    message: Some(INVALID_NUMBER_MESSAGE.to_string()),
                }
            }
        };

        match self.table.check_value(value) {
            Ok(value) => {
                let request = ConversionRequest::new(value, self.from_unit(), self.to_unit());
                ShellState::Computed(request.evaluate_default())
            }
            Err(e) => ShellState::Idle {
                message: Some(e.to_string()),
            },
        }
    }

    fn recompute(&mut self) {
        let next = self.evaluate();
        if next.name() != self.state.name() {
            debug!(
                "{}: {} -> {} (input {:?}, {} -> {})",
                self.table.id(),
                self.state.name(),
                next.name(),
                self.input,
                self.from_unit().key(),
                self.to_unit().key()
            );
        }
        self.state = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::types::Unit;

    fn density() -> Arc<ConversionTable> {
        Arc::new(
            ConversionTable::new(
                "density",
                "Density",
                vec![
                    Unit::new("kg/m³", "Kilogram per cubic meter", 1.0),
                    Unit::new("g/cm³", "Gram per cubic centimeter", 1000.0),
                ],
            )
            .unwrap()
            .non_negative(true),
        )
    }

    #[test]
    fn test_starts_computed_with_defaults() {
        let shell = ConverterShell::for_table(density());
        assert_eq!(shell.input(), "1");
        assert_eq!(shell.from_unit().key(), "kg/m³");
        assert_eq!(shell.to_unit().key(), "g/cm³");
        assert_eq!(shell.result_text(), "0.001");
    }

    #[test]
    fn test_idle_on_empty_and_invalid() {
        let mut shell = ConverterShell::for_table(density());
        assert_eq!(shell.set_input(""), &ShellState::Idle { message: None });
        assert_eq!(shell.result_text(), "");

        shell.set_input("abc");
        assert_eq!(shell.message(), Some(INVALID_NUMBER_MESSAGE));
        assert_eq!(shell.result_text(), "");
    }

    #[test]
    fn test_negative_density_is_idle() {
        let mut shell = ConverterShell::for_table(density());
        shell.set_input("-5");
        assert!(shell.message().unwrap().contains("cannot be negative"));
    }

    #[test]
    fn test_back_to_computed() {
        let mut shell = ConverterShell::for_table(density());
        shell.set_input("x");
        let state = shell.set_input("2500");
        assert!(matches!(state, ShellState::Computed(r) if r.formatted == "2.5"));
    }

    #[test]
    fn test_select_unknown_keeps_selection() {
        let mut shell = ConverterShell::for_table(density());
        assert!(shell.select_to("lb/ft³").is_err());
        assert_eq!(shell.to_unit().key(), "g/cm³");
    }

    #[test]
    fn test_swap_units_only() {
        let mut shell = ConverterShell::for_table(density());
        shell.swap_units();
        assert_eq!(shell.from_unit().key(), "g/cm³");
        assert_eq!(shell.input(), "1");
        assert_eq!(shell.result_text(), "1000");
    }

    #[test]
    fn test_swap_carries_result() {
        let mut shell =
            ConverterShell::for_table(density()).with_swap_mode(SwapMode::CarryResult);
        shell.set_input("500");
        assert_eq!(shell.result_text(), "0.5");
        shell.swap_units();
        assert_eq!(shell.input(), "0.5");
        assert_eq!(shell.result_text(), "500");
    }

    #[test]
    fn test_reset_restores_defaults() {
        let defaults = ShellDefaults {
            input: "2".to_string(),
            from: "g/cm³".to_string(),
            to: "kg/m³".to_string(),
        };
        let mut shell = ConverterShell::new(density(), &defaults).unwrap();
        assert_eq!(shell.result_text(), "2000");

        shell.set_input("7");
        shell.swap_units();
        shell.reset();
        assert_eq!(shell.input(), "2");
        assert_eq!(shell.from_unit().key(), "g/cm³");
        assert_eq!(shell.result_text(), "2000");
    }

    #[test]
    fn test_bad_defaults_rejected() {
        let defaults = ShellDefaults {
            input: "1".to_string(),
            from: "oz/gal".to_string(),
            to: "kg/m³".to_string(),
        };
        assert!(matches!(
            ConverterShell::new(density(), &defaults),
            Err(ConversionError::UnknownUnit { .. })
        ));
    }
}
