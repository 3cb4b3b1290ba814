// Linear unit conversion: a table of factors relative to one base unit,
// a convert step through that base, and magnitude-bucketed display.

pub mod convert;
pub mod detector;
pub mod error;
pub mod formatter;
pub mod shell;
pub mod table;
pub mod types;

#[cfg(test)]
mod tests;

pub use convert::{convert, convert_all, convert_text, ConversionRequest};
pub use detector::{parse_expression, parse_value, Expression};
pub use error::{ConversionError, TableError};
pub use formatter::{format, Bucket, FormatPolicy};
pub use shell::{ConverterShell, ShellDefaults, ShellState, SwapMode};
pub use table::{ConversionTable, TableDefinition, UnitRef};
pub use types::{ConversionResult, Unit};
