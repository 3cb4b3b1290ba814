use crate::engine::convert::ConversionRequest;
use crate::engine::error::{ConversionError, TableError};
use crate::engine::formatter::{FormatPolicy, DEFAULT_POLICY};
use crate::engine::types::Unit;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Serialized shape of a table, as written in TOML table files and config.
///
/// ```toml
/// id = "electric-resistance"
/// name = "Electric Resistance"
///
/// [[unit]]
/// key = "Ω"
/// name = "Ohm"
/// factor = 1
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TableDefinition {
    pub id: String,
    pub name: String,

    #[serde(default)]
    pub non_negative: bool,

    #[serde(default)]
    pub format: Option<FormatPolicy>,

    #[serde(rename = "unit", alias = "units")]
    pub units: Vec<Unit>,
}

/// Units of one quantity, each expressed relative to a single base unit.
///
/// Only `N` factors are stored; any pair converts through the base unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "TableDefinition")]
pub struct ConversionTable {
    id: String,
    name: String,
    non_negative: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<FormatPolicy>,
    units: Vec<Unit>,

    #[serde(skip)]
    base: usize,
    // key or alias -> position in `units`
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl ConversionTable {
    pub fn new(id: &str, name: &str, units: Vec<Unit>) -> Result<Self, TableError> {
        if units.is_empty() {
            return Err(TableError::Empty(id.to_string()));
        }

        for unit in &units {
            if !unit.factor.is_finite() || unit.factor <= 0.0 {
                return Err(TableError::InvalidFactor {
                    table: id.to_string(),
                    unit: unit.key.clone(),
                    factor: unit.factor,
                });
            }
        }

        let bases: Vec<usize> = units
            .iter()
            .enumerate()
            .filter(|(_, u)| u.is_base())
            .map(|(i, _)| i)
            .collect();
        let base = match bases.as_slice() {
            [] => return Err(TableError::NoBaseUnit(id.to_string())),
            [only] => *only,
            many => {
                return Err(TableError::MultipleBaseUnits {
                    table: id.to_string(),
                    keys: many.iter().map(|&i| units[i].key.clone()).collect(),
                })
            }
        };

        let mut index = HashMap::new();
        for (position, unit) in units.iter().enumerate() {
            let names = std::iter::once(&unit.key).chain(unit.aliases.iter());
            for name in names {
                if index.insert(name.clone(), position).is_some() {
                    return Err(TableError::DuplicateKey {
                        table: id.to_string(),
                        key: name.clone(),
                    });
                }
            }
        }

        Ok(Self {
            id: id.to_string(),
            name: name.to_string(),
            non_negative: false,
            format: None,
            units,
            base,
            index,
        })
    }

    /// Reject negative values for this quantity
    pub fn non_negative(mut self, non_negative: bool) -> Self {
        self.non_negative = non_negative;
        self
    }

    /// Override the display policy for this table
    pub fn with_format(mut self, policy: FormatPolicy) -> Result<Self, TableError> {
        policy.validate(&self.id)?;
        self.format = Some(policy);
        Ok(self)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_non_negative(&self) -> bool {
        self.non_negative
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Policy set on this table itself, if any
    pub fn format_override(&self) -> Option<&FormatPolicy> {
        self.format.as_ref()
    }

    /// Formatting policy for results in this table.
    pub fn policy(&self) -> &FormatPolicy {
        self.format.as_ref().unwrap_or(&DEFAULT_POLICY)
    }

    pub fn base(&self) -> UnitRef<'_> {
        UnitRef {
            table: self,
            index: self.base,
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key.trim())
    }

    /// Resolve a key or alias to a unit of this table.
    pub fn unit(&self, key: &str) -> Result<UnitRef<'_>, ConversionError> {
        self.index
            .get(key.trim())
            .map(|&index| UnitRef { table: self, index })
            .ok_or_else(|| ConversionError::UnknownUnit {
                quantity: self.name.clone(),
                unit: key.to_string(),
            })
    }

    pub(crate) fn unit_at(&self, index: usize) -> Option<UnitRef<'_>> {
        (index < self.units.len()).then_some(UnitRef { table: self, index })
    }

    pub fn iter(&self) -> impl Iterator<Item = UnitRef<'_>> {
        (0..self.units.len()).map(move |index| UnitRef { table: self, index })
    }

    /// Check a value against the input rules of this quantity.
    pub fn check_value(&self, value: f64) -> Result<f64, ConversionError> {
        if !value.is_finite() {
            return Err(ConversionError::InvalidInput(value.to_string()));
        }
        if self.non_negative && value < 0.0 {
            return Err(ConversionError::DomainViolation {
                quantity: self.name.clone(),
                value,
            });
        }
        Ok(value)
    }

    /// Build a validated request; every failure mode is reported here so the
    /// arithmetic never sees an unknown unit or a bad value.
    pub fn request(
        &self,
        value: f64,
        from: &str,
        to: &str,
    ) -> Result<ConversionRequest<'_>, ConversionError> {
        if !value.is_finite() {
            return Err(ConversionError::InvalidInput(value.to_string()));
        }
        let from = self.unit(from)?;
        let to = self.unit(to)?;
        let value = self.check_value(value)?;
        Ok(ConversionRequest::new(value, from, to))
    }

    pub fn definition(&self) -> TableDefinition {
        TableDefinition {
            id: self.id.clone(),
            name: self.name.clone(),
            non_negative: self.non_negative,
            format: self.format.clone(),
            units: self.units.clone(),
        }
    }
}

impl TryFrom<TableDefinition> for ConversionTable {
    type Error = TableError;

    fn try_from(def: TableDefinition) -> Result<Self, Self::Error> {
        let table = ConversionTable::new(&def.id, &def.name, def.units)?.non_negative(def.non_negative);
        match def.format {
            Some(policy) => table.with_format(policy),
            None => Ok(table),
        }
    }
}

impl fmt::Display for ConversionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({})", self.name, self.id)?;
        for unit in self.iter() {
            let marker = if unit.is_base() { " [base]" } else { "" };
            writeln!(
                f,
                "  {:<10} {:<32} {}{}",
                unit.key(),
                unit.unit().display_name,
                unit.factor(),
                marker
            )?;
        }
        Ok(())
    }
}

/// A unit known to belong to a specific table.
///
/// Obtained only through [`ConversionTable::unit`] and friends, so holding one
/// proves the key was valid.
#[derive(Debug, Clone, Copy)]
pub struct UnitRef<'t> {
    table: &'t ConversionTable,
    index: usize,
}

impl<'t> UnitRef<'t> {
    pub fn unit(&self) -> &'t Unit {
        &self.table.units[self.index]
    }

    pub fn key(&self) -> &'t str {
        &self.unit().key
    }

    pub fn factor(&self) -> f64 {
        self.unit().factor
    }

    pub fn is_base(&self) -> bool {
        self.index == self.table.base
    }

    pub fn table(&self) -> &'t ConversionTable {
        self.table
    }

    pub(crate) fn index(&self) -> usize {
        self.index
    }
}

impl PartialEq for UnitRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.table, other.table) && self.index == other.index
    }
}

impl Eq for UnitRef<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn resistance() -> ConversionTable {
        ConversionTable::new(
            "electric-resistance",
            "Electric Resistance",
            vec![
                Unit::new("Ω", "Ohm", 1.0).with_aliases(&["ohm"]),
                Unit::new("kΩ", "Kiloohm", 1e3).with_aliases(&["kohm"]),
                Unit::new("MΩ", "Megaohm", 1e6),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_base_unit_detected() {
        let table = resistance();
        assert_eq!(table.base().key(), "Ω");
        assert!(table.unit("kΩ").unwrap().factor() == 1e3);
    }

    #[test]
    fn test_alias_resolves_to_same_unit() {
        let table = resistance();
        assert_eq!(table.unit("ohm").unwrap(), table.unit("Ω").unwrap());
        assert_eq!(table.unit(" kohm ").unwrap().key(), "kΩ");
    }

    #[test]
    fn test_unknown_unit() {
        let table = resistance();
        let err = table.unit("GΩ").unwrap_err();
        assert_eq!(
            err,
            ConversionError::UnknownUnit {
                quantity: "Electric Resistance".to_string(),
                unit: "GΩ".to_string(),
            }
        );
    }

    #[test]
    fn test_rejects_missing_base() {
        let result = ConversionTable::new("t", "T", vec![Unit::new("a", "A", 2.0)]);
        assert_eq!(result.unwrap_err(), TableError::NoBaseUnit("t".to_string()));
    }

    #[test]
    fn test_rejects_two_bases() {
        let result = ConversionTable::new(
            "t",
            "T",
            vec![Unit::new("a", "A", 1.0), Unit::new("b", "B", 1.0)],
        );
        assert!(matches!(
            result,
            Err(TableError::MultipleBaseUnits { keys, .. }) if keys == vec!["a", "b"]
        ));
    }

    #[test]
    fn test_rejects_bad_factors() {
        for factor in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = ConversionTable::new(
                "t",
                "T",
                vec![Unit::new("a", "A", 1.0), Unit::new("b", "B", factor)],
            );
            assert!(matches!(result, Err(TableError::InvalidFactor { .. })));
        }
    }

    #[test]
    fn test_rejects_alias_clashing_with_key() {
        let result = ConversionTable::new(
            "t",
            "T",
            vec![
                Unit::new("a", "A", 1.0),
                Unit::new("b", "B", 2.0).with_aliases(&["a"]),
            ],
        );
        assert_eq!(
            result.unwrap_err(),
            TableError::DuplicateKey {
                table: "t".to_string(),
                key: "a".to_string()
            }
        );
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(
            ConversionTable::new("t", "T", vec![]).unwrap_err(),
            TableError::Empty("t".to_string())
        );
    }

    #[test]
    fn test_from_toml_definition() {
        let content = r#"
id = "conductance"
name = "Electric Conductance"
non_negative = true

[[unit]]
key = "S"
name = "Siemens"
factor = 1
aliases = ["mho"]

[[unit]]
key = "mS"
name = "Millisiemens"
factor = 0.001
"#;
        let table: ConversionTable = toml::from_str(content).unwrap();
        assert_eq!(table.id(), "conductance");
        assert!(table.is_non_negative());
        assert_eq!(table.unit("mho").unwrap().key(), "S");
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_invalid_definition_fails_to_deserialize() {
        let content = r#"
id = "broken"
name = "Broken"

[[unit]]
key = "x"
name = "X"
factor = 3
"#;
        let result: Result<ConversionTable, _> = toml::from_str(content);
        assert!(result.is_err());
    }

    #[test]
    fn test_json_export_shape() {
        let json = serde_json::to_value(resistance()).unwrap();
        assert_eq!(json["id"], "electric-resistance");
        assert_eq!(json["units"][1]["key"], "kΩ");
        assert_eq!(json["units"][1]["name"], "Kiloohm");
        assert!(json.get("index").is_none());
    }
}
