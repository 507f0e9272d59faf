//! Command-line interface definitions.
//!
//! Defines the CLI structure for the northwind console using `clap`. With
//! no subcommand the interactive menu runs; the other subcommands are
//! scripted views over the same catalog plus database and configuration
//! housekeeping.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::port::outbound::store::ProductFilter;

/// Console for maintaining the Northwind product catalog
#[derive(Parser, Debug)]
#[command(name = "northwind")]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file [default: ~/.northwind/config.toml]
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// SQLite database path, overriding the configuration
    #[arg(long, global = true)]
    pub db: Option<String>,

    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands for the northwind CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive menu (the default)
    Menu,

    /// List categories by name
    Categories(CategoriesArgs),

    /// List products by name
    Products(ProductsArgs),

    /// Show every field of one product
    Product(ProductArgs),

    /// Manage the catalog database
    #[command(subcommand)]
    Db(DbCommand),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Arguments for `northwind categories`.
#[derive(Parser, Debug)]
pub struct CategoriesArgs {
    /// Include each category's active products
    #[arg(long)]
    pub products: bool,
}

/// Arguments for `northwind products`.
#[derive(Parser, Debug)]
pub struct ProductsArgs {
    /// Which products to include
    #[arg(long, value_enum, default_value = "all")]
    pub filter: FilterArg,
}

/// Arguments for `northwind product`.
#[derive(Parser, Debug)]
pub struct ProductArgs {
    /// Product identifier
    pub id: i32,
}

/// Product listing filter as spelled on the command line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum FilterArg {
    /// Every product
    #[default]
    All,
    /// Products still sold
    Active,
    /// Discontinued products only
    Discontinued,
}

impl From<FilterArg> for ProductFilter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::All => Self::All,
            FilterArg::Active => Self::Active,
            FilterArg::Discontinued => Self::Discontinued,
        }
    }
}

/// Subcommands for `northwind db`.
#[derive(Subcommand, Debug)]
pub enum DbCommand {
    /// Apply pending schema migrations
    Migrate,
    /// Load the demo catalog into an empty database
    Seed,
}

/// Subcommands for `northwind config`.
///
/// Provides configuration management utilities including generation,
/// display, and validation of configuration files.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a new configuration file from template.
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied.
    Show,
    /// Validate a configuration file for correctness.
    Validate,
}

/// Arguments for `northwind config init`.
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}
