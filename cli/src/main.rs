use clap::{Parser, Subcommand};
use log::{debug, LevelFilter};
use std::path::{Path, PathBuf};
use unitkit::catalog::Catalog;
use unitkit::config::Config;
use unitkit::engine::{self, ConversionRequest, ConversionTable};

#[derive(Parser)]
#[command(name = "unitkit")]
#[command(about = "Linear unit conversion across dozens of physical quantities", long_about = None)]
struct Cli {
    /// Configuration file (custom tables, format policy, defaults)
    #[arg(long, global = true, env = "UNITKIT_CONFIG")]
    config: Option<PathBuf>,

    /// Print debug logs
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a value between two units
    Convert {
        /// Value to convert
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Source unit key (e.g. "kΩ")
        from: String,

        /// Target unit key (e.g. "Ω")
        to: String,

        /// Quantity id; inferred from the units when omitted
        #[arg(short, long)]
        quantity: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Evaluate an expression such as "1 kΩ to Ω"
    Eval {
        expression: String,

        /// Quantity id; inferred from the units when omitted
        #[arg(short, long)]
        quantity: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a value in every unit of a quantity
    All {
        /// Quantity id (e.g. "pressure")
        quantity: String,

        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Source unit key
        from: String,
    },

    /// List all quantities
    List,

    /// Show the unit table of a quantity
    Units {
        /// Quantity id (e.g. "dynamic-viscosity")
        quantity: String,
    },

    /// Export all tables as JSON
    Export {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .init();

    let result = match &cli.command {
        Commands::Convert {
            value,
            from,
            to,
            quantity,
            json,
        } => convert_value(cli.config.as_deref(), value, from, to, quantity.as_deref(), *json),
        Commands::Eval {
            expression,
            quantity,
            json,
        } => eval_expression(cli.config.as_deref(), expression, quantity.as_deref(), *json),
        Commands::All {
            quantity,
            value,
            from,
        } => show_all(cli.config.as_deref(), quantity, value, from),
        Commands::List => list_quantities(cli.config.as_deref()),
        Commands::Units { quantity } => show_units(cli.config.as_deref(), quantity),
        Commands::Export { output } => export_catalog(cli.config.as_deref(), output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_catalog(config_path: Option<&Path>) -> Result<Catalog, Box<dyn std::error::Error>> {
    let config = match config_path {
        Some(path) => Config::load_from_file(path)?,
        None => Config::empty(),
    };
    let (catalog, validation) = config.build_catalog()?;

    // Print validation issues if any
    if validation.has_issues() {
        eprintln!("{}", validation);
    }
    debug!("Catalog has {} quantities", catalog.len());

    Ok(catalog)
}

fn print_result(request: ConversionRequest<'_>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let table = request.from().table();
    let result = request.evaluate_default();

    if json {
        let output = serde_json::json!({
            "quantity": table.id(),
            "value": request.value(),
            "from": request.from().key(),
            "to": request.to().key(),
            "raw": result.raw,
            "formatted": result.formatted,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!(
            "{} {} = {} {}",
            table.policy().format(request.value()),
            request.from().key(),
            result.formatted,
            request.to().key()
        );
    }

    Ok(())
}

fn convert_value(
    config_path: Option<&Path>,
    value: &str,
    from: &str,
    to: &str,
    quantity: Option<&str>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = load_catalog(config_path)?;
    let value = engine::parse_value(value)?;
    print_result(catalog.request(quantity, value, from, to)?, json)
}

fn eval_expression(
    config_path: Option<&Path>,
    expression: &str,
    quantity: Option<&str>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = load_catalog(config_path)?;
    let expr = engine::parse_expression(expression)?;

    match &expr.to {
        Some(to) => print_result(catalog.request(quantity, expr.value, &expr.from, to)?, json),
        None => {
            let table = catalog.resolve(quantity, &expr.from, &expr.from)?;
            print_all(table, expr.value, &expr.from)
        }
    }
}

fn print_all(
    table: &ConversionTable,
    value: f64,
    from: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let rows = engine::convert_all(value, from, table)?;

    println!("{} {} ({}):", table.policy().format(value), from, table.name());
    for (unit, result) in rows {
        println!(
            "  {:>20} {:<10} {}",
            result.formatted,
            unit.key(),
            unit.unit().display_name
        );
    }

    Ok(())
}

fn show_all(
    config_path: Option<&Path>,
    quantity: &str,
    value: &str,
    from: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = load_catalog(config_path)?;
    let table = catalog.table(quantity)?;
    let value = engine::parse_value(value)?;
    print_all(table, value, from)
}

fn list_quantities(config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = load_catalog(config_path)?;

    println!("Quantities ({}):", catalog.len());
    for table in catalog.iter() {
        println!(
            "  - {:<26} {:<26} base: {:<8} units: {}",
            table.id(),
            table.name(),
            table.base().key(),
            table.len()
        );
    }

    Ok(())
}

fn show_units(config_path: Option<&Path>, quantity: &str) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = load_catalog(config_path)?;
    let table = catalog.table(quantity)?;
    print!("{}", table);
    if table.is_non_negative() {
        println!("  (negative values are rejected)");
    }
    Ok(())
}

fn export_catalog(
    config_path: Option<&Path>,
    output: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = load_catalog(config_path)?;
    let tables: Vec<&ConversionTable> = catalog.iter().collect();
    let json = serde_json::to_string_pretty(&tables)?;

    if let Some(output_path) = output {
        std::fs::write(output_path, json)?;
        println!("Catalog exported to {}", output_path);
    } else {
        println!("{}", json);
    }

    Ok(())
}
