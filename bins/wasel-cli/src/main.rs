//! Wasel search CLI.
//!
//! Runs the dashboard's "search everything" engine from a terminal:
//! queries against a JSON fixture of record collections, classifier
//! inspection, and the persisted recent-search history.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use serde::Deserialize;
use wasel_search::{
    Category, Collections, CustomerRecord, FileStore, OrderRecord, PickupRecord, QueryIntent,
    SearchEngine, TicketRecord,
};

#[derive(Parser)]
#[command(name = "wasel")]
#[command(about = "Search Wasel records from the terminal")]
#[command(version)]
struct Cli {
    /// Directory holding persisted CLI state
    #[arg(long, global = true, env = "WASEL_STATE_DIR")]
    state_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a query against a JSON fixture of record collections
    Search {
        /// The free-text query
        query: String,

        /// Path to the collections JSON file
        #[arg(short, long)]
        data: PathBuf,

        /// Print raw JSON instead of a readable listing
        #[arg(long)]
        json: bool,
    },

    /// Show or clear the recent-search history
    Recent {
        /// Clear the history instead of printing it
        #[arg(long)]
        clear: bool,
    },

    /// Print the classifier flags derived from a query
    Intents {
        /// The free-text query
        query: String,
    },
}

/// Fixture layout: every collection is optional.
#[derive(Default, Deserialize)]
#[serde(default)]
struct DataFile {
    orders: Vec<OrderRecord>,
    pickups: Vec<PickupRecord>,
    customers: Vec<CustomerRecord>,
    tickets: Vec<TicketRecord>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let state_dir = cli.state_dir.clone().unwrap_or_else(default_state_dir);
    let mut engine = SearchEngine::new(Box::new(FileStore::new(state_dir)));

    match cli.command {
        Commands::Search { query, data, json } => run_search(&mut engine, &query, &data, json),
        Commands::Recent { clear } => run_recent(&mut engine, clear),
        Commands::Intents { query } => {
            run_intents(&query);
            Ok(())
        }
    }
}

fn default_state_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("wasel")
}

fn run_search(engine: &mut SearchEngine, query: &str, data: &Path, json: bool) -> Result<()> {
    let raw = fs::read_to_string(data).with_context(|| format!("reading {}", data.display()))?;
    let file: DataFile =
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", data.display()))?;

    let collections = Collections {
        orders: &file.orders,
        pickups: &file.pickups,
        customers: &file.customers,
        tickets: &file.tickets,
    };

    let results = engine.search(query, &collections);
    engine.add_to_recent_searches(query)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("{} no results for '{}'", "ℹ".blue(), query);
        return Ok(());
    }

    for result in &results {
        println!(
            "{} {} {}",
            category_tag(result.category),
            result.title.bold(),
            result.route.dimmed()
        );
        if !result.subtitle.is_empty() {
            println!("    {}", result.subtitle);
        }
    }
    Ok(())
}

fn run_recent(engine: &mut SearchEngine, clear: bool) -> Result<()> {
    if clear {
        engine.clear_recent_searches()?;
        println!("{} recent searches cleared", "✓".green());
        return Ok(());
    }

    if engine.recent_searches().is_empty() {
        println!("{} no recent searches", "ℹ".blue());
        return Ok(());
    }

    for (index, query) in engine.recent_searches().iter().enumerate() {
        println!("{} {}", format!("{}.", index + 1).dimmed(), query);
    }
    Ok(())
}

fn run_intents(query: &str) {
    let intent = QueryIntent::classify(query);
    println!("order_id_like:  {}", flag(intent.order_id_like));
    println!("pickup_id_like: {}", flag(intent.pickup_id_like));
    println!("ticket_id_like: {}", flag(intent.ticket_id_like));
    println!("phone_like:     {}", flag(intent.phone_like));
    println!("location_like:  {}", flag(intent.location_like));
}

fn flag(value: bool) -> String {
    if value {
        "yes".green().to_string()
    } else {
        "no".dimmed().to_string()
    }
}

fn category_tag(category: Category) -> String {
    let label = format!("[{}]", category.label());
    match category {
        Category::Orders => label.green().to_string(),
        Category::Pickups => label.cyan().to_string(),
        Category::Customers => label.yellow().to_string(),
        Category::Tickets => label.magenta().to_string(),
        Category::Settings => label.blue().to_string(),
    }
}
