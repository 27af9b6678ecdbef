use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use spendlog_domain::{CategorySelection, ExpenseQuery, SortKey};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "spendlog")]
#[command(about = "Track personal expenses from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to expense data file (or set SPENDLOG_FILE env var)
    #[arg(long, short, global = true, value_name = "FILE", env = "SPENDLOG_FILE")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record a new expense
    Add(AddArgs),
    /// Delete an expense by id
    Delete {
        #[arg(long)]
        id: String,
    },
    /// List expenses with optional search, category filter and sort
    List(ListArgs),
    /// Show totals: overall, this month and per category
    Summary(SummaryArgs),
    /// List the categories in use
    Categories {
        /// List the built-in category choices instead
        #[arg(long)]
        known: bool,
    },
    /// Export expenses as CSV
    Export(ExportArgs),
    /// Import expenses from a CSV export
    Import(ImportArgs),
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args)]
pub struct AddArgs {
    #[arg(long)]
    pub amount: f64,
    #[arg(long)]
    pub category: String,
    /// Date of the expense (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub date: Option<NaiveDate>,
    #[arg(long)]
    pub description: Option<String>,
}

#[derive(Args, Default)]
pub struct QueryArgs {
    /// Case-insensitive text matched against category and description
    #[arg(long)]
    pub search: Option<String>,
    /// Exact category to show, or "all"
    #[arg(long)]
    pub category: Option<String>,
    /// Sort order: date, amount or category
    #[arg(long)]
    pub sort: Option<SortKey>,
}

impl QueryArgs {
    pub fn to_query(&self) -> ExpenseQuery {
        ExpenseQuery::new()
            .with_search(self.search.clone().unwrap_or_default())
            .with_category(
                self.category
                    .as_deref()
                    .map(CategorySelection::parse)
                    .unwrap_or_default(),
            )
    }
}

#[derive(Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub query: QueryArgs,
}

#[derive(Args)]
pub struct SummaryArgs {
    /// Reference date for the monthly total (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub date: Option<NaiveDate>,
    /// Count only expenses from the same year and month
    #[arg(long)]
    pub calendar_month: bool,
}

#[derive(Args)]
pub struct ExportArgs {
    /// Output file path, defaults to expenses-<today>.csv in the export directory
    #[arg(long, short)]
    pub output: Option<PathBuf>,
    /// Print the CSV to stdout instead of writing a file
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,
    #[command(flatten)]
    pub query: QueryArgs,
}

#[derive(Args)]
pub struct ImportArgs {
    /// CSV file in export format
    #[arg(long, short)]
    pub input: PathBuf,
}
