//! CLI administration tool for shortly.
//!
//! Works directly against the MongoDB record store, without going through the
//! HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL
//! cargo run --bin admin -- shorten https://www.example.com/some/long/url
//!
//! # Look up a short code
//! cargo run --bin admin -- resolve aB3-x=
//!
//! # Check the database connection
//! cargo run --bin admin -- ping
//! ```
//!
//! # Environment Variables
//!
//! Reads the same `MONGODB_*` variables as the service (see `shortly::config`).

use shortly::application::services::RecordService;
use shortly::config::{self, Config, mask_connection_string};
use shortly::domain::entities::Record;
use shortly::error::AppError;
use shortly::infrastructure::persistence::MongoRecordStore;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;

/// CLI tool for managing shortly records.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Create a record for a URL
    Shorten {
        /// The long URL to shorten
        url: String,
    },

    /// Show the record stored under a short code
    Resolve {
        /// Short code to look up
        code: String,
    },

    /// Check the database connection
    Ping,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Failed to load configuration")?;
    let settings = config.mongo_settings();

    let store = match MongoRecordStore::connect(&settings).await {
        Ok(store) => Arc::new(store),
        Err(e) => {
            println!(
                "{} {}",
                "❌ Cannot reach MongoDB at".red().bold(),
                mask_connection_string(&settings.uri).bright_black()
            );
            return Err(e).context("Failed to connect to MongoDB");
        }
    };

    let result = match cli.command {
        Commands::Shorten { url } => shorten(&store, url).await,
        Commands::Resolve { code } => resolve(&store, &code).await,
        Commands::Ping => ping(&config),
    };

    if let Err(e) = store.disconnect().await {
        println!("{} {}", "⚠️  Disconnect incomplete:".yellow(), e);
    }

    result
}

/// Creates a record, retrying on short code collisions like the HTTP API does.
async fn shorten(store: &Arc<MongoRecordStore>, url: String) -> Result<()> {
    println!("{}", "✂️  Shorten URL".bright_blue().bold());
    println!();

    let service = RecordService::new(store.clone());
    let record = service.shorten(url).await.map_err(app_error)?;

    println!("{}", "✅ Record created".green().bold());
    println!();
    print_record(&record);

    Ok(())
}

async fn resolve(store: &Arc<MongoRecordStore>, code: &str) -> Result<()> {
    println!("{}", "🔎 Resolve short code".bright_blue().bold());
    println!();

    let service = RecordService::new(store.clone());

    match service.resolve(code).await {
        Ok(record) => {
            print_record(&record);
            Ok(())
        }
        Err(AppError::NotFound { .. }) => {
            println!("  {} {}", "No record for".yellow(), code.cyan());
            println!();
            Ok(())
        }
        Err(e) => Err(app_error(e)),
    }
}

/// Reports connection details. Reaching this point means `connect` already pinged.
fn ping(config: &Config) -> Result<()> {
    println!("{}", "🔍 Checking database connection...".bright_blue());
    println!();
    println!("{}", "✅ Connected successfully!".green().bold());
    println!();
    println!(
        "  Server:     {}",
        mask_connection_string(&config.mongodb_uri).cyan()
    );
    println!("  Database:   {}", config.mongodb_database.cyan());
    println!("  Collection: {}", config.mongodb_collection.cyan());
    println!();

    Ok(())
}

/// Prints a record as an aligned field list.
fn print_record(record: &Record) {
    println!("  Short code: {}", record.short_code.bright_yellow().bold());
    println!("  URL:        {}", record.url.cyan());
    println!("  ID:         {}", record.id.bright_black());
    println!(
        "  Created:    {}",
        record.created_at.to_string().bright_black()
    );
    println!(
        "  Updated:    {}",
        record.updated_at.to_string().bright_black()
    );
    println!(
        "  Accessed:   {}",
        record.access_count.to_string().bright_white()
    );
    println!();
}

fn app_error(e: AppError) -> anyhow::Error {
    anyhow::anyhow!("{} ({})", e, e.code())
}
