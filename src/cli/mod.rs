mod brands;
mod record_args;
mod report;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use teatrack::config::resolve_data_dir;
use teatrack::services::aggregator::{DEFAULT_CHART_WEEKS, DEFAULT_TOP_BRANDS};
use teatrack::services::{Aggregator, FileStore, Journal, KeyValueStore};
use teatrack::types::{Result, TeatrackError};
use tracing::debug;

use brands::BrandsCommand;
use record_args::{AddArgs, EditArgs};

/// Bubble-tea purchase journal
#[derive(Parser)]
#[command(name = "teatrack")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Data directory (default: ~/.teatrack)
    #[arg(long, global = true, env = "TEATRACK_DIR", value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log a purchase
    Add(AddArgs),

    /// Change fields of a logged purchase
    Edit(EditArgs),

    /// Delete a purchase
    Delete {
        /// Record id or unique id prefix
        id: String,
    },

    /// List purchases, newest first
    List {
        /// Only show records whose brand or drink name contains TERM
        #[arg(long, value_name = "TERM")]
        search: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show spending statistics
    Stats {
        /// Number of brands in the ranking
        #[arg(long, default_value_t = DEFAULT_TOP_BRANDS)]
        top: usize,

        /// Number of recent weeks in the weekly chart
        #[arg(long, default_value_t = DEFAULT_CHART_WEEKS)]
        weeks: usize,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage the brand shortcut list
    #[command(subcommand)]
    Brands(BrandsCommand),
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        let dir = resolve_data_dir(self.data_dir)?;
        debug!(dir = %dir.display(), "opening journal");
        let mut journal = Journal::open(FileStore::new(dir)?);
        self.command.run(&mut journal)?;
        Ok(())
    }
}

impl Commands {
    fn run<S: KeyValueStore>(self, journal: &mut Journal<S>) -> Result<()> {
        match self {
            Commands::Add(args) => {
                let record = journal.add_record(args.into_draft())?;
                println!("Added {}", report::summary_line(record));
            }
            Commands::Edit(args) => {
                let id = journal.resolve_id(&args.id)?;
                let current = journal
                    .get(&id)
                    .ok_or_else(|| TeatrackError::NotFound(format!("record {}", id)))?;
                let draft = args.apply(current);
                let record = journal.update_record(&id, draft)?;
                println!("Updated {}", report::summary_line(record));
            }
            Commands::Delete { id } => {
                let id = journal.resolve_id(&id)?;
                let removed = journal.delete_record(&id)?;
                println!("Deleted {}", report::summary_line(&removed));
            }
            Commands::List { search, json } => {
                let records = match search.as_deref() {
                    Some(term) => journal.search(term),
                    None => Aggregator::in_display_order(journal.records()),
                };
                if json {
                    println!("{}", report::to_json(&records)?);
                } else {
                    print!("{}", report::render_records(&records));
                }
            }
            Commands::Stats { top, weeks, json } => {
                let mut stats = journal.report(top);
                stats.weekly = Aggregator::recent_weeks(&stats.weekly, weeks).to_vec();
                if json {
                    println!("{}", report::to_json(&stats)?);
                } else {
                    print!("{}", report::render_stats(&stats));
                }
            }
            Commands::Brands(cmd) => cmd.run(journal)?,
        }
        Ok(())
    }
}
