use crate::catalog::Catalog;
use crate::config::error::ConfigError;
use crate::config::loader::load_tables_from_directory;
use crate::config::validation::ValidationResult;
use crate::engine::error::ConversionError;
use crate::engine::formatter::FormatPolicy;
use crate::engine::shell::{ConverterShell, ShellDefaults, SwapMode};
use crate::engine::table::{ConversionTable, TableDefinition};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// User configuration, read from TOML.
///
/// ```toml
/// tables_dir = "tables"
///
/// [format]
/// scientific_digits = 3
///
/// [shell]
/// swap = "carry-result"
///
/// [defaults.length]
/// input = "1"
/// from = "mi"
/// to = "km"
///
/// [[table]]
/// id = "typography"
/// name = "Typography"
/// unit = [{ key = "pt", name = "Point", factor = 1 }]
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    // Default display policy for tables without their own
    #[serde(default)]
    pub format: Option<FormatPolicy>,

    #[serde(default)]
    pub shell: ShellConfig,

    // Per-quantity initial input and unit selection
    #[serde(default)]
    pub defaults: BTreeMap<String, ShellDefaults>,

    // Inline custom tables
    #[serde(rename = "table", default)]
    pub tables: Vec<TableDefinition>,

    // Directory of one-table-per-file definitions
    #[serde(default)]
    pub tables_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ShellConfig {
    #[serde(default)]
    pub swap: SwapMode,
}

impl Config {
    /// Load from a file; a relative `tables_dir` is resolved against the
    /// file's directory.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let mut config = Self::load_from_str(&content)?;

        if let (Some(dir), Some(parent)) = (&config.tables_dir, path.parent()) {
            if dir.is_relative() {
                config.tables_dir = Some(parent.join(dir));
            }
        }
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn load_from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Built-in tables plus everything this config adds.
    ///
    /// Bad custom tables and stale defaults end up in the returned report;
    /// an invalid global format policy or a missing `tables_dir` is an error.
    pub fn build_catalog(&self) -> Result<(Catalog, ValidationResult), ConfigError> {
        let mut catalog = Catalog::builtin();
        let mut validation = ValidationResult::new();

        for def in &self.tables {
            let location = format!("table.{}", def.id);
            match ConversionTable::try_from(def.clone()) {
                Ok(table) => {
                    catalog.insert(table);
                }
                Err(e) => validation.add_error(e.to_string(), Some(location)),
            }
        }

        if let Some(dir) = &self.tables_dir {
            let (tables, dir_validation) = load_tables_from_directory(dir)?;
            info!("Loaded {} tables from {}", tables.len(), dir.display());
            for table in tables {
                catalog.insert(table);
            }
            validation.merge(dir_validation);
        }

        if let Some(policy) = &self.format {
            catalog.set_default_format(policy)?;
        }

        for (quantity, defaults) in &self.defaults {
            let location = Some(format!("defaults.{}", quantity));
            let Some(table) = catalog.get(quantity) else {
                validation.add_warning(format!("Unknown quantity '{}'", quantity), location);
                continue;
            };
            for key in [&defaults.from, &defaults.to] {
                if !table.contains(key) {
                    validation.add_warning(
                        format!("Unit '{}' is not part of {}", key, table.name()),
                        location.clone(),
                    );
                }
            }
        }

        Ok((catalog, validation))
    }

    /// Converter shell for one quantity with the configured defaults and swap mode
    pub fn shell_for(
        &self,
        catalog: &Catalog,
        quantity: &str,
    ) -> Result<ConverterShell, ConversionError> {
        let table = catalog
            .get(quantity)
            .ok_or_else(|| ConversionError::UnknownQuantity(quantity.to_string()))?;

        let shell = match self.defaults.get(quantity) {
            Some(defaults) => ConverterShell::new(table, defaults)?,
            None => ConverterShell::for_table(table),
        };
        Ok(shell.with_swap_mode(self.shell.swap))
    }
}
