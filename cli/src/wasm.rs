// WebAssembly bindings used by the converter pages
use crate::catalog::Catalog;
use crate::config::Config;
use crate::engine::convert::convert_text;
use crate::engine::shell::{ConverterShell, ShellState};
use log::warn;
use serde_json::json;
use wasm_bindgen::prelude::*;

fn to_js<E: std::fmt::Display>(e: E) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Parse optional config content and build the catalog it describes
fn load(config_content: Option<String>) -> Result<(Config, Catalog), JsValue> {
    let mut config = match config_content {
        Some(content) => Config::load_from_str(&content).map_err(to_js)?,
        None => Config::empty(),
    };
    if config.tables_dir.take().is_some() {
        warn!("tables_dir is ignored in the browser build");
    }
    let (catalog, validation) = config.build_catalog().map_err(to_js)?;
    if validation.has_issues() {
        warn!("{}", validation);
    }
    Ok((config, catalog))
}

/// One converter page: input field, two unit selectors and a result field
#[wasm_bindgen]
pub struct ConverterWasm {
    shell: ConverterShell,
}

#[wasm_bindgen]
impl ConverterWasm {
    #[wasm_bindgen(constructor)]
    pub fn new(quantity: &str, config_content: Option<String>) -> Result<ConverterWasm, JsValue> {
        let (config, catalog) = load(config_content)?;
        let shell = config.shell_for(&catalog, quantity).map_err(to_js)?;
        Ok(Self { shell })
    }

    /// Returns the new result text (empty when the input is not valid)
    #[wasm_bindgen]
    pub fn set_input(&mut self, text: &str) -> String {
        self.shell.set_input(text);
        self.result()
    }

    #[wasm_bindgen]
    pub fn select_from(&mut self, key: &str) -> Result<String, JsValue> {
        self.shell.select_from(key).map_err(to_js)?;
        Ok(self.result())
    }

    #[wasm_bindgen]
    pub fn select_to(&mut self, key: &str) -> Result<String, JsValue> {
        self.shell.select_to(key).map_err(to_js)?;
        Ok(self.result())
    }

    #[wasm_bindgen]
    pub fn swap_units(&mut self) -> String {
        self.shell.swap_units();
        self.result()
    }

    #[wasm_bindgen]
    pub fn reset(&mut self) -> String {
        self.shell.reset();
        self.result()
    }

    #[wasm_bindgen]
    pub fn result(&self) -> String {
        self.shell.result_text().to_string()
    }

    /// Inline validation message, if any
    #[wasm_bindgen]
    pub fn message(&self) -> Option<String> {
        self.shell.message().map(str::to_string)
    }

    #[wasm_bindgen]
    pub fn input(&self) -> String {
        self.shell.input().to_string()
    }

    #[wasm_bindgen]
    pub fn from_unit(&self) -> String {
        self.shell.from_unit().key().to_string()
    }

    #[wasm_bindgen]
    pub fn to_unit(&self) -> String {
        self.shell.to_unit().key().to_string()
    }

    /// Options for the unit dropdowns: [{key, name, label}]
    #[wasm_bindgen]
    pub fn units_json(&self) -> Result<String, JsValue> {
        let units: Vec<_> = self
            .shell
            .table()
            .units()
            .iter()
            .map(|u| json!({ "key": u.key, "name": u.display_name, "label": u.label() }))
            .collect();
        serde_json::to_string(&units).map_err(to_js)
    }

    /// Current state as {"state": "idle"|"computed", ...}
    #[wasm_bindgen]
    pub fn state_json(&self) -> Result<String, JsValue> {
        let value = match self.shell.state() {
            ShellState::Idle { message } => json!({ "state": "idle", "message": message }),
            ShellState::Computed(result) => json!({
                "state": "computed",
                "raw": result.raw,
                "formatted": result.formatted,
            }),
        };
        serde_json::to_string(&value).map_err(to_js)
    }
}

/// Available quantities as a JSON array of {id, name, units}
#[wasm_bindgen]
pub fn quantities_json(config_content: Option<String>) -> Result<String, JsValue> {
    let (_, catalog) = load(config_content)?;
    let quantities: Vec<_> = catalog
        .iter()
        .map(|t| json!({ "id": t.id(), "name": t.name(), "units": t.len() }))
        .collect();
    serde_json::to_string(&quantities).map_err(to_js)
}

/// Stateless conversion with the built-in catalog; returns {raw, formatted}
#[wasm_bindgen]
pub fn convert_value(quantity: &str, value: &str, from: &str, to: &str) -> Result<String, JsValue> {
    let table = Catalog::global().table(quantity).map_err(to_js)?;
    let result = convert_text(value, from, to, table).map_err(to_js)?;
    serde_json::to_string(&result).map_err(to_js)
}
