use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::clipboard::SystemClipboard;
use crate::config::Config;
use crate::history::HistoryStore;
use crate::logging::{LogTarget, init_logging};
use crate::parsers::load_catalog;
use crate::search::{MIN_QUERY_LEN, SearchSession, match_catalog};
use crate::stats::DashboardStats;
use crate::utils::{format_absolute_timestamp, format_path_with_tilde, sanitize_line};

#[derive(Parser)]
#[command(name = "case-search")]
#[command(version)]
#[command(
    about = "Search cases, evidence and timeline events of an investigation dashboard",
    long_about = None
)]
pub struct Cli {
    /// Catalog snapshot (JSON with cases, evidence and events)
    #[arg(long, global = true, env = "CASE_SEARCH_DATA", value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// File the recent-search history is kept in
    #[arg(long, global = true, env = "CASE_SEARCH_HISTORY", value_name = "FILE")]
    pub history_file: Option<PathBuf>,

    /// Keep history in memory only for this run
    #[arg(long, global = true)]
    pub no_history: bool,

    /// Write logs to this file (verbosity via RUST_LOG)
    #[arg(long, global = true, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the results for a query, one per line: kind, target path, title
    Search {
        query: String,
        /// Remember the query in the search history when it finds something
        #[arg(long)]
        record: bool,
    },
    /// Show recent searches, most recent first
    History {
        /// Forget all recent searches
        #[arg(long)]
        clear: bool,
    },
    /// Show statistics about the catalog
    Stats,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let interactive = cli.command.is_none();
    init_logging(LogTarget::choose(cli.log_file.as_deref(), interactive))?;

    let config = Config::resolve(cli.data, cli.history_file, cli.no_history, cli.log_file)?;
    tracing::debug!(?config, "resolved configuration");

    match cli.command {
        Some(Commands::Search { query, record }) => search(&config, &query, record),
        Some(Commands::History { clear }) => history(&config, clear),
        Some(Commands::Stats) => show_stats(&config),
        None => interactive_search(&config),
    }
}

fn interactive_search(config: &Config) -> Result<()> {
    let catalog = load_catalog(&config.data_file)?;
    let history = HistoryStore::load(config.history_store());
    let session = SearchSession::new(catalog, history);

    let accepted = crate::tui::run_interactive(session, Box::new(SystemClipboard::new()))?;
    if let Some(target_path) = accepted {
        println!("{}", target_path);
    }
    Ok(())
}

fn search(config: &Config, query: &str, record: bool) -> Result<()> {
    let catalog = load_catalog(&config.data_file)?;
    // Same threshold the interactive session applies
    let results = if query.chars().count() < MIN_QUERY_LEN {
        Vec::new()
    } else {
        match_catalog(query, &catalog)
    };

    let mut out = io::stdout().lock();
    for result in &results {
        writeln!(
            out,
            "{}\t{}\t{}",
            result.kind.as_str(),
            result.target_path,
            sanitize_line(&result.title)
        )?;
    }

    if record && !results.is_empty() {
        let mut history = HistoryStore::load(config.history_store());
        history.record(query);
    }
    Ok(())
}

fn history(config: &Config, clear: bool) -> Result<()> {
    let mut history = HistoryStore::load(config.history_store());

    if clear {
        history.clear();
        println!("Search history cleared");
        return Ok(());
    }

    for query in history.entries() {
        println!("{}", sanitize_line(query));
    }
    Ok(())
}

fn show_stats(config: &Config) -> Result<()> {
    let catalog = load_catalog(&config.data_file)?;
    let stats = DashboardStats::from_catalog(&catalog);

    println!("Case Catalog Statistics");
    println!("=======================");
    println!("Cases: {}", stats.total_cases);
    println!("  Open: {}", stats.open_cases);
    println!("  In progress: {}", stats.in_progress_cases);
    println!("  Closed: {}", stats.closed_cases);
    println!("Evidence: {}", stats.total_evidence);
    println!("  Not linked to a case: {}", stats.unlinked_evidence);
    println!("Timeline events: {}", stats.total_events);
    println!();
    println!("Catalog file: {}", format_path_with_tilde(&config.data_file));

    if let Some(oldest) = stats.oldest_event {
        println!("Oldest event: {}", format_absolute_timestamp(&oldest));
    }
    if let Some(newest) = stats.newest_event {
        println!("Newest event: {}", format_absolute_timestamp(&newest));
    }

    Ok(())
}
