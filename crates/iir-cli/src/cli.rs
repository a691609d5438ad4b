//! CLI argument definitions for the ingredient browser.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use iir_model::{Column, FilterCriteria};
use iir_query::DEFAULT_PAGE_SIZE;

#[derive(Parser)]
#[command(
    name = "iir",
    version,
    about = "Browse the inactive-ingredient dataset",
    long_about = "Search, page through and summarize the inactive-ingredient dataset.\n\n\
                  Reads data.json and field_mapping.json from --data-dir, the IIR_DATA_DIR\n\
                  environment variable, or ./web_app."
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

    #[command(flatten)]
    pub data: DataArgs,
}

/// Dataset location flags shared by every command that reads the dataset.
#[derive(Args, Clone)]
pub struct DataArgs {
    /// Directory holding data.json and field_mapping.json.
    #[arg(long = "data-dir", value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Record document (overrides --data-dir for the records).
    #[arg(long = "records", value_name = "PATH", global = true)]
    pub records: Option<PathBuf>,

    /// Field translation document (overrides --data-dir for the mapping).
    #[arg(long = "mapping", value_name = "PATH", global = true)]
    pub mapping: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Filter the dataset and print one page of results.
    Search(SearchArgs),

    /// Page through the dataset interactively.
    Browse(BrowseArgs),

    /// List the route and dosage-form codes available as filters.
    Vocab(VocabArgs),

    /// Print dataset statistics.
    Stats,

    /// Convert a CSV export into dataset documents.
    Convert(ConvertArgs),
}

#[derive(Args)]
pub struct FilterArgs {
    /// Substring of the English or Chinese ingredient name (case-insensitive).
    #[arg(long = "ingredient", short = 'i', value_name = "TERM")]
    pub ingredient: Option<String>,

    /// Exact route code, e.g. ORAL.
    #[arg(long = "route", value_name = "CODE")]
    pub route: Option<String>,

    /// Exact dosage-form code, e.g. TABLET.
    #[arg(long = "dosage-form", value_name = "CODE")]
    pub dosage_form: Option<String>,

    /// Substring of the CAS registry number.
    #[arg(long = "cas", value_name = "TERM")]
    pub cas: Option<String>,

    /// Substring of the UNII code (case-insensitive).
    #[arg(long = "unii", value_name = "TERM")]
    pub unii: Option<String>,
}

impl FilterArgs {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            ingredient: self.ingredient.clone(),
            route: self.route.clone(),
            dosage_form: self.dosage_form.clone(),
            cas_number: self.cas.clone(),
            unii: self.unii.clone(),
        }
    }
}

#[derive(Args)]
pub struct SearchArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    /// Page to print (1-based).
    #[arg(long = "page", default_value_t = 1)]
    pub page: usize,

    /// Rows per page.
    #[arg(long = "page-size", default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: usize,

    /// Columns to print, comma-separated field identifiers (default: all).
    #[arg(long = "columns", value_delimiter = ',', value_name = "FIELD,...")]
    pub columns: Vec<Column>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Args)]
pub struct BrowseArgs {
    /// Rows per page.
    #[arg(long = "page-size", default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: usize,
}

#[derive(Args)]
pub struct VocabArgs {
    /// Which vocabulary to list.
    #[arg(value_enum, default_value = "all")]
    pub field: VocabFieldArg,
}

#[derive(Args)]
pub struct ConvertArgs {
    /// CSV export to convert.
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,

    /// Output directory (default: the resolved data directory).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Skip writing field_mapping.json.
    #[arg(long = "no-mapping")]
    pub no_mapping: bool,

    /// Skip writing stats.json.
    #[arg(long = "no-stats")]
    pub no_stats: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Plain,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum VocabFieldArg {
    Route,
    DosageForm,
    All,
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
