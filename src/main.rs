//! Product Prototypes CLI
//!
//! Usage:
//!   product-prototypes [OPTIONS] <COMMAND>
//!
//! Commands:
//!   list               List registered prototype keys
//!   show <KEY>         Print a copy of a prototype
//!   clone <KEY> ...    Copy a prototype, reconfigure it, and print it
//!
//! Options:
//!   -c, --catalog <FILE>  Catalog file (TOML format)
//!   -v, --verbose         Log verbosity (-v, -vv, -vvv)
//!   -h, --help            Print help

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use thiserror::Error;

use product_prototypes::{Catalog, CatalogError, ProductRegistry, RegistryError};

/// Errors that can occur while running a command
#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

#[derive(Parser)]
#[command(name = "product-prototypes")]
#[command(about = "Keyed registry of cloneable product templates", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Catalog file with product prototypes (uses the built-in demo catalog if not provided)
    #[arg(short, long, global = true)]
    catalog: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// List registered prototype keys
    List,

    /// Print a copy of the prototype registered under KEY
    Show {
        key: String,
    },

    /// Copy a prototype, apply changes to the copy, and print it
    Clone {
        key: String,

        /// New display name for the copy
        #[arg(long)]
        name: Option<String>,

        /// New price for the copy
        #[arg(long)]
        price: Option<f64>,

        /// Set an attribute on the copy (repeatable)
        #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_attribute)]
        attributes: Vec<(String, String)>,

        /// Also print the registered prototype to show it is unchanged
        #[arg(long)]
        verify: bool,
    },
}

fn parse_attribute(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{}'", raw)),
    }
}

fn main() {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let registry = match load_catalog(cli.catalog.as_deref()) {
        Ok(registry) => registry,
        Err(e) => {
            match &cli.catalog {
                Some(path) => eprintln!("Error loading catalog '{}': {}", path.display(), e),
                None => eprintln!("Error loading catalog: {}", e),
            }
            std::process::exit(1);
        }
    };

    let stdout = io::stdout();
    if let Err(e) = run(&registry, cli.command, &mut stdout.lock()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Build the registry from a catalog file, or from the built-in catalog
fn load_catalog(path: Option<&Path>) -> Result<ProductRegistry, CatalogError> {
    match path {
        Some(path) => Ok(Catalog::from_file(path)?.into_registry()),
        None => Ok(Catalog::default().into_registry()),
    }
}

fn run(
    registry: &ProductRegistry,
    command: Command,
    out: &mut impl Write,
) -> Result<(), CliError> {
    match command {
        Command::List => {
            for key in registry.keys() {
                writeln!(out, "{}", key)?;
            }
        }
        Command::Show { key } => {
            writeln!(out, "{}", registry.get(&key)?)?;
        }
        Command::Clone {
            key,
            name,
            price,
            attributes,
            verify,
        } => {
            let mut product = registry.get(&key)?;
            if let Some(name) = name {
                product.set_name(name);
            }
            if let Some(price) = price {
                product.set_price(price);
            }
            for (attr, value) in attributes {
                product.set_attribute(attr, value);
            }
            writeln!(out, "{}", product)?;

            if verify {
                writeln!(out)?;
                writeln!(out, "Registered prototype:")?;
                writeln!(out, "{}", registry.get(&key)?)?;
            }
        }
    }
    Ok(())
}
