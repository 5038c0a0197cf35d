//! CLI argument definitions for the catalog tool.

use std::path::PathBuf;

use catalog_model::ProductId;
use catalog_query::SortKey;
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "catalog",
    version,
    about = "Product catalog manager",
    long_about = "Browse and edit a small product catalog.\n\n\
                  Changes are saved after every command. When nothing has been\n\
                  saved yet the catalog starts from a built-in set of products."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Settings file to use instead of the platform default.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the saved catalog (overrides the settings file).
    #[arg(
        long = "data-dir",
        value_name = "DIR",
        env = "CATALOG_DATA_DIR",
        global = true
    )]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List products matching the given filters.
    List(ListArgs),

    /// Show a single product.
    Show(IdArgs),

    /// Add a new product.
    Add(AddArgs),

    /// Edit an existing product. Omitted fields keep their value.
    Edit(EditArgs),

    /// Delete a product.
    Delete(IdArgs),

    /// Flip a product between available and unavailable.
    Toggle(IdArgs),

    /// Print the lowest and highest price in the catalog.
    Bounds,

    /// Discard all changes and go back to the built-in products.
    Reset(ResetArgs),
}

#[derive(Args)]
pub struct ListArgs {
    /// Case-insensitive text to look for in names and descriptions.
    #[arg(long, short = 's', value_name = "TEXT")]
    pub search: Option<String>,

    /// Lowest price to include (default: cheapest product).
    #[arg(long = "min-price", value_name = "N")]
    pub min_price: Option<f64>,

    /// Highest price to include (default: most expensive product).
    #[arg(long = "max-price", value_name = "N")]
    pub max_price: Option<f64>,

    /// Hide products that are in stock.
    #[arg(long = "hide-available")]
    pub hide_available: bool,

    /// Hide products that are out of stock.
    #[arg(long = "hide-unavailable")]
    pub hide_unavailable: bool,

    /// Sort order: default, price_asc, price_desc or name_asc.
    #[arg(long, value_name = "KEY")]
    pub sort: Option<SortKey>,

    /// Output format.
    #[arg(long, value_enum, default_value = "table")]
    pub format: ListFormatArg,
}

#[derive(Args)]
pub struct IdArgs {
    /// Product id.
    #[arg(value_name = "ID")]
    pub id: ProductId,
}

#[derive(Args)]
pub struct AddArgs {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    /// Price in rubles; must be a positive number.
    #[arg(long)]
    pub price: Option<String>,

    /// Absolute URL of the product image.
    #[arg(long = "image-url", value_name = "URL")]
    pub image_url: Option<String>,

    /// Create the product as out of stock.
    #[arg(long)]
    pub unavailable: bool,
}

#[derive(Args)]
pub struct EditArgs {
    /// Product id.
    #[arg(value_name = "ID")]
    pub id: ProductId,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub price: Option<String>,

    /// Image URL; pass an empty string to remove the image.
    #[arg(long = "image-url", value_name = "URL")]
    pub image_url: Option<String>,

    #[arg(long, value_name = "BOOL", action = ArgAction::Set)]
    pub available: Option<bool>,
}

#[derive(Args)]
pub struct ResetArgs {
    /// Only mark the catalog for reset; the current data stays until the
    /// next run.
    #[arg(long = "on-next-start")]
    pub on_next_start: bool,
}

/// `list` output choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ListFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
