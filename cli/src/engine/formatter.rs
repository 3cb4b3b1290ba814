use crate::engine::error::TableError;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

/// One fixed-point band: magnitudes below `below` (and above the previous
/// band) are printed with `decimals` digits after the point.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Bucket {
    pub below: f64,
    pub decimals: usize,
}

impl Bucket {
    pub const fn new(below: f64, decimals: usize) -> Self {
        Self { below, decimals }
    }
}

/// Magnitude-bucketed display rules.
///
/// Very small and very large magnitudes switch to scientific notation; in
/// between, smaller numbers get more decimals.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FormatPolicy {
    pub scientific_below: f64,
    pub scientific_at_or_above: f64,
    /// Mantissa decimals in scientific notation
    pub scientific_digits: usize,
    pub trim_trailing_zeros: bool,
    #[serde(rename = "bucket")]
    pub buckets: Vec<Bucket>,
}

const DEFAULT_BUCKETS: [Bucket; 7] = [
    Bucket::new(1e-3, 8),
    Bucket::new(1.0, 6),
    Bucket::new(10.0, 4),
    Bucket::new(100.0, 3),
    Bucket::new(1e3, 2),
    Bucket::new(1e5, 1),
    Bucket::new(1e6, 0),
];

lazy_static! {
    /// Policy used by tables that do not carry their own
    pub static ref DEFAULT_POLICY: FormatPolicy = FormatPolicy::default();
}

impl Default for FormatPolicy {
    fn default() -> Self {
        Self {
            scientific_below: 1e-6,
            scientific_at_or_above: 1e6,
            scientific_digits: 4,
            trim_trailing_zeros: true,
            buckets: DEFAULT_BUCKETS.to_vec(),
        }
    }
}

impl FormatPolicy {
    /// Render a value for display.
    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return value.to_string();
        }
        if value == 0.0 {
            return "0".to_string();
        }

        let magnitude = value.abs();
        if magnitude < self.scientific_below || magnitude >= self.scientific_at_or_above {
            return self.scientific(value);
        }

        let decimals = self.decimals_for(magnitude);
        let mut fixed = format!("{:.*}", decimals, value);

        // Rounding may carry past the upper threshold or collapse to zero.
        let rounded: f64 = fixed.parse().unwrap_or(value);
        if rounded.abs() >= self.scientific_at_or_above {
            return self.scientific(value);
        }
        if rounded == 0.0 && fixed.starts_with('-') {
            fixed.remove(0);
        }

        if self.trim_trailing_zeros {
            trim_zeros(&fixed).to_string()
        } else {
            fixed
        }
    }

    /// Decimal places used for a magnitude inside the fixed-point range
    pub fn decimals_for(&self, magnitude: f64) -> usize {
        self.buckets
            .iter()
            .find(|b| magnitude < b.below)
            .or_else(|| self.buckets.last())
            .map(|b| b.decimals)
            .unwrap_or(0)
    }

    fn scientific(&self, value: f64) -> String {
        let text = format!("{:.*e}", self.scientific_digits, value);
        if !self.trim_trailing_zeros {
            return text;
        }
        match text.split_once('e') {
            Some((mantissa, exponent)) => format!("{}e{}", trim_zeros(mantissa), exponent),
            None => text,
        }
    }

    /// Check that the thresholds and buckets describe a usable policy
    pub fn validate(&self, table: &str) -> Result<(), TableError> {
        let invalid = |reason: String| TableError::InvalidFormat {
            table: table.to_string(),
            reason,
        };

        if !(self.scientific_below.is_finite() && self.scientific_below >= 0.0) {
            return Err(invalid(format!(
                "scientific_below must be a non-negative number, got {}",
                self.scientific_below
            )));
        }
        if !(self.scientific_at_or_above.is_finite()
            && self.scientific_at_or_above > self.scientific_below)
        {
            return Err(invalid(format!(
                "scientific_at_or_above ({}) must be greater than scientific_below ({})",
                self.scientific_at_or_above, self.scientific_below
            )));
        }

        let mut previous = self.scientific_below;
        for bucket in &self.buckets {
            if !(bucket.below > previous) {
                return Err(invalid(format!(
                    "bucket boundaries must be strictly increasing ({} after {})",
                    bucket.below, previous
                )));
            }
            if bucket.below > self.scientific_at_or_above {
                return Err(invalid(format!(
                    "bucket boundary {} lies above the scientific threshold {}",
                    bucket.below, self.scientific_at_or_above
                )));
            }
            previous = bucket.below;
        }

        Ok(())
    }
}

fn trim_zeros(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

/// Format with the default policy.
pub fn format(value: f64) -> String {
    DEFAULT_POLICY.format(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_buckets() {
        assert_eq!(format(0.0), "0");
        assert_eq!(format(0.000_512_345_678), "0.00051235");
        assert_eq!(format(0.5), "0.5");
        assert_eq!(format(3.14159265), "3.1416");
        assert_eq!(format(42.123456), "42.123");
        assert_eq!(format(999.999), "1000");
    }

    #[test]
    fn test_large_fixed_buckets() {
        assert_eq!(format(1234.5678), "1234.6");
        assert_eq!(format(99_999.94), "99999.9");
        assert_eq!(format(123_456.7), "123457");
    }

    #[test]
    fn test_scientific_extremes() {
        assert_eq!(format(1e6), "1e6");
        assert_eq!(format(12_345_678.0), "1.2346e7");
        assert_eq!(format(9.9e-7), "9.9e-7");
        assert_eq!(format(-2.5e-9), "-2.5e-9");
    }

    #[test]
    fn test_negative_values_use_magnitude() {
        assert_eq!(format(-0.5), "-0.5");
        assert_eq!(format(-1234.5678), "-1234.6");
    }

    #[test]
    fn test_rounding_respects_thresholds() {
        assert_eq!(format(999_999.7), "1e6");
        assert_eq!(format(-999_999.7), "-1e6");
        assert_eq!(format(999_999.4), "999999");

        let policy = FormatPolicy {
            scientific_below: 0.0,
            ..FormatPolicy::default()
        };
        assert_eq!(policy.format(-1e-12), "0");
        assert_eq!(policy.format(1e-12), "0");

        let untrimmed = FormatPolicy {
            trim_trailing_zeros: false,
            ..policy
        };
        assert_eq!(untrimmed.format(-1e-12), "0.00000000");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format(f64::NAN), "NaN");
        assert_eq!(format(f64::INFINITY), "inf");
    }

    #[test]
    fn test_without_trimming() {
        let policy = FormatPolicy {
            trim_trailing_zeros: false,
            ..FormatPolicy::default()
        };
        assert_eq!(policy.format(0.5), "0.500000");
        assert_eq!(policy.format(1e6), "1.0000e6");
    }

    #[test]
    fn test_validate_rejects_unordered_buckets() {
        let policy = FormatPolicy {
            buckets: vec![Bucket::new(10.0, 2), Bucket::new(1.0, 4)],
            ..FormatPolicy::default()
        };
        assert!(matches!(
            policy.validate("length"),
            Err(TableError::InvalidFormat { .. })
        ));
        assert!(FormatPolicy::default().validate("length").is_ok());
    }

    #[test]
    fn test_validate_rejects_bucket_above_threshold() {
        let policy = FormatPolicy {
            scientific_at_or_above: 1e4,
            ..FormatPolicy::default()
        };
        assert!(policy.validate("length").is_err());
    }
}
