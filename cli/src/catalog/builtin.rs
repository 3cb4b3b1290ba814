use crate::engine::error::TableError;
use crate::engine::table::ConversionTable;
use crate::engine::types::Unit;

/// One row of a built-in table.
#[derive(Debug, Clone, Copy)]
pub struct UnitRow {
    pub key: &'static str,
    pub name: &'static str,
    pub factor: f64,
    pub aliases: &'static [&'static str],
}

pub const fn row(key: &'static str, name: &'static str, factor: f64) -> UnitRow {
    UnitRow {
        key,
        name,
        factor,
        aliases: &[],
    }
}

impl UnitRow {
    pub const fn aka(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }
}

/// A built-in quantity. Factors are published constants, kept as written.
#[derive(Debug, Clone, Copy)]
pub struct QuantityDef {
    pub id: &'static str,
    pub name: &'static str,
    pub non_negative: bool,
    pub units: &'static [UnitRow],
}

impl QuantityDef {
    pub fn build(&self) -> Result<ConversionTable, TableError> {
        let units = self
            .units
            .iter()
            .map(|r| Unit::new(r.key, r.name, r.factor).with_aliases(r.aliases))
            .collect();
        Ok(ConversionTable::new(self.id, self.name, units)?.non_negative(self.non_negative))
    }
}

/// Every built-in quantity, in display order.
pub fn all() -> Vec<&'static QuantityDef> {
    let mut defs: Vec<&'static QuantityDef> = Vec::new();
    defs.extend(super::mechanical::QUANTITIES);
    defs.extend(super::electromagnetic::QUANTITIES);
    defs.extend(super::radiation::QUANTITIES);
    defs
}
