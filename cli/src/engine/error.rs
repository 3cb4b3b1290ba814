use thiserror::Error;

/// Errors raised while turning user input into a converted value.
///
/// None of these are fatal: a converter shell shows the message inline and
/// clears its result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    #[error("Please enter a valid number: '{0}'")]
    InvalidInput(String),

    #[error("{quantity} cannot be negative (got {value})")]
    DomainViolation { quantity: String, value: f64 },

    #[error("Unknown unit '{unit}' for {quantity}")]
    UnknownUnit { quantity: String, unit: String },

    #[error("Unknown quantity '{0}'")]
    UnknownQuantity(String),

    #[error("No quantity has both units '{from}' and '{to}'")]
    NoMatchingQuantity { from: String, to: String },

    #[error("Units '{from}' and '{to}' are ambiguous; pass --quantity with one of: {}", .candidates.join(", "))]
    AmbiguousUnits {
        from: String,
        to: String,
        candidates: Vec<String>,
    },
}

/// Errors raised while building a conversion table.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableError {
    #[error("Table '{0}' has no units")]
    Empty(String),

    #[error("Table '{0}' has no base unit (factor 1)")]
    NoBaseUnit(String),

    #[error("Table '{table}' has more than one base unit: {keys:?}")]
    MultipleBaseUnits { table: String, keys: Vec<String> },

    #[error("Unit '{unit}' in table '{table}' has invalid factor {factor}")]
    InvalidFactor {
        table: String,
        unit: String,
        factor: f64,
    },

    #[error("Key '{key}' appears more than once in table '{table}'")]
    DuplicateKey { table: String, key: String },

    #[error("Invalid format policy for table '{table}': {reason}")]
    InvalidFormat { table: String, reason: String },
}
