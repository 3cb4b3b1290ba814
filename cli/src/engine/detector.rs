use crate::engine::error::ConversionError;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Full "<value> <unit>" capture; the unit may contain spaces ("fl oz")
    /// but must not start with a digit, so "12" never splits into 1 and "2".
    static ref VALUE_UNIT: Regex = Regex::new(
        r"^(?P<value>[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?)\s*(?P<unit>[^\d\s.+\-].*?)\s*$"
    )
    .unwrap();

    /// Separators between source and target unit. Word connectors do not
    /// consume trailing space so that "12 in to cm" yields both candidates.
    static ref CONNECTOR: Regex = Regex::new(r"\s+(?:to|in|as)\b|\s*(?:->|→)").unwrap();
}

/// A parsed conversion expression such as "100 kΩ to Ω".
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    pub value: f64,
    pub from: String,
    pub to: Option<String>,
}

/// Parse a decimal string into a finite number.
pub fn parse_value(text: &str) -> Result<f64, ConversionError> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ConversionError::InvalidInput(trimmed.to_string())),
    }
}

/// Parse "<value> <unit>" optionally followed by "to|in|as|->" and a target unit.
pub fn parse_expression(text: &str) -> Result<Expression, ConversionError> {
    let trimmed = text.trim();

    // "in" is both a connector and the inch symbol, so try every connector
    // position until the left side reads as "<value> <unit>".
    for connector in CONNECTOR.find_iter(trimmed) {
        let left = &trimmed[..connector.start()];
        let right = trimmed[connector.end()..].trim();
        if right.is_empty() {
            continue;
        }
        if let Some((value, from)) = split_value_unit(left)? {
            return Ok(Expression {
                value,
                from,
                to: Some(right.to_string()),
            });
        }
    }

    match split_value_unit(trimmed)? {
        Some((value, from)) => Ok(Expression {
            value,
            from,
            to: None,
        }),
        None => Err(ConversionError::InvalidInput(trimmed.to_string())),
    }
}

fn split_value_unit(text: &str) -> Result<Option<(f64, String)>, ConversionError> {
    let Some(caps) = VALUE_UNIT.captures(text.trim()) else {
        return Ok(None);
    };
    let value = parse_value(&caps["value"])?;
    Ok(Some((value, caps["unit"].to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value("42").unwrap(), 42.0);
        assert_eq!(parse_value("  -1.5e3 ").unwrap(), -1500.0);
        assert_eq!(parse_value("+.5").unwrap(), 0.5);
    }

    #[test]
    fn test_parse_value_rejects() {
        for text in ["", "   ", "abc", "12abc", "NaN", "inf", "-infinity", "1e400"] {
            assert!(
                matches!(parse_value(text), Err(ConversionError::InvalidInput(_))),
                "{:?} should be rejected",
                text
            );
        }
    }

    #[test]
    fn test_parse_expression_with_target() {
        let expr = parse_expression("1000 Ω to kΩ").unwrap();
        assert_eq!(expr.value, 1000.0);
        assert_eq!(expr.from, "Ω");
        assert_eq!(expr.to.as_deref(), Some("kΩ"));

        let expr = parse_expression("2.5kPa->psi").unwrap();
        assert_eq!(expr.from, "kPa");
        assert_eq!(expr.to.as_deref(), Some("psi"));
    }

    #[test]
    fn test_parse_expression_inch_ambiguity() {
        let expr = parse_expression("12 in to cm").unwrap();
        assert_eq!(expr.value, 12.0);
        assert_eq!(expr.from, "in");
        assert_eq!(expr.to.as_deref(), Some("cm"));

        let expr = parse_expression("25 in as cm").unwrap();
        assert_eq!(expr.value, 25.0);
        assert_eq!(expr.from, "in");
        assert_eq!(expr.to.as_deref(), Some("cm"));

        let expr = parse_expression("100 in -> mm").unwrap();
        assert_eq!(expr.value, 100.0);
        assert_eq!(expr.from, "in");
        assert_eq!(expr.to.as_deref(), Some("mm"));

        let expr = parse_expression("3 ft in in").unwrap();
        assert_eq!(expr.from, "ft");
        assert_eq!(expr.to.as_deref(), Some("in"));
    }

    #[test]
    fn test_parse_expression_multiword_unit() {
        let expr = parse_expression("8 fl oz as mL").unwrap();
        assert_eq!(expr.from, "fl oz");
        assert_eq!(expr.to.as_deref(), Some("mL"));
    }

    #[test]
    fn test_parse_expression_without_target() {
        let expr = parse_expression("5 cP").unwrap();
        assert_eq!(expr.from, "cP");
        assert_eq!(expr.to, None);
    }

    #[test]
    fn test_parse_expression_errors() {
        assert!(parse_expression("kΩ to Ω").is_err());
        assert!(parse_expression("").is_err());
        assert!(parse_expression("12").is_err());
    }
}
