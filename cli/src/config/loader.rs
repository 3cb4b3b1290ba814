use crate::config::error::ConfigError;
use crate::config::validation::ValidationResult;
use crate::engine::table::ConversionTable;
use log::{debug, warn};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Load every `*.toml` in `directory` as a conversion table.
///
/// Files that fail to parse or violate table invariants are reported in the
/// returned `ValidationResult` and skipped.
pub fn load_tables_from_directory<P: AsRef<Path>>(
    directory: P,
) -> Result<(Vec<ConversionTable>, ValidationResult), ConfigError> {
    let dir_path = directory.as_ref();

    if !dir_path.exists() {
        return Err(ConfigError::Directory(format!(
            "Directory does not exist: {}",
            dir_path.display()
        )));
    }
    if !dir_path.is_dir() {
        return Err(ConfigError::Directory(format!(
            "Path is not a directory: {}",
            dir_path.display()
        )));
    }

    let entries = fs::read_dir(dir_path).map_err(|source| ConfigError::Io {
        path: dir_path.display().to_string(),
        source,
    })?;

    let mut files = HashMap::new();
    for entry in entries {
        let path = entry
            .map_err(|source| ConfigError::Io {
                path: dir_path.display().to_string(),
                source,
            })?
            .path();

        if path.extension().and_then(|s| s.to_str()) != Some("toml") {
            continue;
        }
        let Some(filename) = path.file_name().and_then(|n| n.to_str()) else {
            warn!("Skipping non UTF-8 file name {}", path.display());
            continue;
        };
        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        files.insert(filename.to_string(), content);
    }

    debug!("Found {} table files in {}", files.len(), dir_path.display());
    Ok(load_tables_from_files(files))
}

/// Load tables from file contents (filename -> content map).
/// This is what the browser build uses, since it has no filesystem.
pub fn load_tables_from_files(
    files: HashMap<String, String>,
) -> (Vec<ConversionTable>, ValidationResult) {
    let mut names: Vec<&String> = files.keys().collect();
    names.sort();

    let mut tables = Vec::new();
    let mut validation = ValidationResult::new();

    for filename in names {
        let content = &files[filename];
        match load_table_from_content(content) {
            Ok(table) => {
                let stem = Path::new(filename).file_stem().and_then(|s| s.to_str());
                if stem != Some(table.id()) {
                    validation.add_warning(
                        format!("Table id '{}' does not match its file name", table.id()),
                        Some(filename.clone()),
                    );
                }
                tables.push(table);
            }
            Err(e) => {
                validation.add_error(
                    format!("Failed to load {}: {}", filename, e),
                    Some(filename.clone()),
                );
            }
        }
    }

    (tables, validation)
}

pub fn load_table_from_content(content: &str) -> Result<ConversionTable, ConfigError> {
    Ok(toml::from_str(content)?)
}
