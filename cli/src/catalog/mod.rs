// Registry of conversion tables, one per physical quantity.

pub mod builtin;
pub mod electromagnetic;
pub mod mechanical;
pub mod radiation;

use crate::engine::convert::{self, ConversionRequest};
use crate::engine::error::{ConversionError, TableError};
use crate::engine::formatter::FormatPolicy;
use crate::engine::table::ConversionTable;
use crate::engine::types::{ConversionResult, Unit};
use lazy_static::lazy_static;
use log::{debug, error, info};
use std::collections::HashMap;
use std::sync::Arc;

lazy_static! {
    static ref BUILTIN: Catalog = Catalog::builtin();
}

/// Ordered set of tables keyed by quantity id.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tables: Vec<Arc<ConversionTable>>,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog holding every built-in quantity
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for def in builtin::all() {
            match def.build() {
                Ok(table) => {
                    catalog.insert(table);
                }
                Err(e) => error!("Skipping built-in table '{}': {}", def.id, e),
            }
        }
        debug!("Built-in catalog ready with {} tables", catalog.len());
        catalog
    }

    /// Shared built-in catalog, built on first use
    pub fn global() -> &'static Catalog {
        &BUILTIN
    }

    /// Add a table, replacing any table with the same id.
    /// Returns the replaced table, if any.
    pub fn insert(&mut self, table: ConversionTable) -> Option<Arc<ConversionTable>> {
        let table = Arc::new(table);
        match self.by_id.get(table.id()) {
            Some(&position) => {
                info!("Table '{}' replaced by a custom definition", table.id());
                Some(std::mem::replace(&mut self.tables[position], table))
            }
            None => {
                self.by_id.insert(table.id().to_string(), self.tables.len());
                self.tables.push(table);
                None
            }
        }
    }

    /// Use `policy` for every table that has no policy of its own
    pub fn set_default_format(&mut self, policy: &FormatPolicy) -> Result<(), TableError> {
        policy.validate("*")?;
        for slot in &mut self.tables {
            if slot.format_override().is_none() {
                let table = slot.as_ref().clone().with_format(policy.clone())?;
                *slot = Arc::new(table);
            }
        }
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<Arc<ConversionTable>> {
        self.by_id.get(id).map(|&i| Arc::clone(&self.tables[i]))
    }

    pub fn table(&self, id: &str) -> Result<&ConversionTable, ConversionError> {
        self.by_id
            .get(id)
            .map(|&i| self.tables[i].as_ref())
            .ok_or_else(|| ConversionError::UnknownQuantity(id.to_string()))
    }

    pub fn ids(&self) -> Vec<&str> {
        self.tables.iter().map(|t| t.id()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConversionTable> {
        self.tables.iter().map(|t| t.as_ref())
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Tables that know both unit keys, used to infer the quantity
    pub fn find_tables_for(&self, from: &str, to: &str) -> Vec<&ConversionTable> {
        self.iter()
            .filter(|t| t.contains(from) && t.contains(to))
            .collect()
    }

    /// Pick the table for a unit pair. An explicit quantity wins; otherwise
    /// exactly one table must know both keys.
    pub fn resolve(
        &self,
        quantity: Option<&str>,
        from: &str,
        to: &str,
    ) -> Result<&ConversionTable, ConversionError> {
        if let Some(quantity) = quantity {
            return self.table(quantity);
        }

        match self.find_tables_for(from, to).as_slice() {
            [] => Err(ConversionError::NoMatchingQuantity {
                from: from.to_string(),
                to: to.to_string(),
            }),
            [table] => {
                debug!("Inferred quantity '{}' from '{}' -> '{}'", table.id(), from, to);
                Ok(*table)
            }
            many => Err(ConversionError::AmbiguousUnits {
                from: from.to_string(),
                to: to.to_string(),
                candidates: many.iter().map(|t| t.id().to_string()).collect(),
            }),
        }
    }

    /// Validated request against the resolved table
    pub fn request(
        &self,
        quantity: Option<&str>,
        value: f64,
        from: &str,
        to: &str,
    ) -> Result<ConversionRequest<'_>, ConversionError> {
        self.resolve(quantity, from, to)?.request(value, from, to)
    }

    /// One value expressed in every unit of a quantity
    pub fn convert_all(
        &self,
        quantity: &str,
        value: f64,
        from: &str,
    ) -> Result<Vec<(Unit, ConversionResult)>, ConversionError> {
        let table = self.table(quantity)?;
        let rows = convert::convert_all(value, from, table)?;
        Ok(rows
            .into_iter()
            .map(|(unit, result)| (unit.unit().clone(), result))
            .collect())
    }
}
