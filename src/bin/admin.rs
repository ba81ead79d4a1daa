//! CLI administration tool for tiny-shortener.
//!
//! Inspects links and checks the database without going through HTTP.
//!
//! # Usage
//!
//! ```bash
//! # Show one link
//! cargo run --bin admin -- show aB3xY9
//!
//! # List the newest links
//! cargo run --bin admin -- list --limit 20
//!
//! # Totals
//! cargo run --bin admin -- stats
//!
//! # Database tools
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- db migrate
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (optional): SQLite database, default `sqlite://urls.db`

use tiny_shortener::application::services::{CodePolicy, LinkService};
use tiny_shortener::config::Config;
use tiny_shortener::domain::entities::UrlRecord;
use tiny_shortener::infrastructure::persistence::{self, SqliteUrlRepository};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::SqlitePool;
use std::sync::Arc;

/// CLI tool for managing tiny-shortener.
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
    /// Show a single link
    Show {
        /// Short code
        code: String,
    },

    /// List the most recently created links
    List {
        /// Maximum number of links to print
        #[arg(short, long, default_value_t = 20)]
        limit: i64,
    },

    /// Show link and click totals
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Apply pending schema migrations
    Migrate,
}

type Service = LinkService<SqliteUrlRepository>;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::from_env();

    let pool = persistence::connect(&config.database_url, &config.pool_settings())
        .await
        .context("Failed to connect to database")?;

    let repository = Arc::new(SqliteUrlRepository::new(Arc::new(pool.clone())));
    let service = LinkService::new(repository, CodePolicy::default());

    match cli.command {
        Commands::Show { code } => show_link(&service, &code).await?,
        Commands::List { limit } => list_links(&service, limit).await?,
        Commands::Stats => handle_stats(&service).await?,
        Commands::Db { action } => handle_db_action(action, &pool, &service).await?,
    }

    pool.close().await;

    Ok(())
}

/// Prints one link with its click count.
async fn show_link(service: &Service, code: &str) -> Result<()> {
    let record = service
        .get_link_by_code(code)
        .await
        .map_err(|e| anyhow::anyhow!("{}: {}", code, e))?;

    println!("{}", "🔗 Link".bright_blue().bold());
    println!();
    println!("  Code:    {}", record.code.cyan());
    println!("  URL:     {}", record.url.bright_white());
    println!(
        "  Created: {}",
        record
            .created_at
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string()
            .bright_black()
    );
    println!(
        "  Clicks:  {}",
        record.clicks.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Lists links, newest first.
///
/// # Output Format
///
/// ```text
/// 📋 Links
///
///   Code         Created            Clicks  URL
///   ────────────────────────────────────────────────────────────
///   aB3xY9       2025-01-15 10:30        3  https://example.com
/// ```
async fn list_links(service: &Service, limit: i64) -> Result<()> {
    println!("{}", "📋 Links".bright_blue().bold());
    println!();

    let records = service
        .recent_links(limit.max(1))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if records.is_empty() {
        println!("{}", "  No links found".yellow());
        return Ok(());
    }

    println!(
        "  {:<12} {:<18} {:>6}  {}",
        "Code".bright_white().bold(),
        "Created".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for record in &records {
        print_row(record);
    }

    println!();
    println!(
        "  Shown: {}",
        records.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

fn print_row(record: &UrlRecord) {
    println!(
        "  {:<12} {:<18} {:>6}  {}",
        record.code.cyan(),
        record
            .created_at
            .format("%Y-%m-%d %H:%M")
            .to_string()
            .bright_black(),
        record.clicks.to_string().green(),
        record.url
    );
}

/// Displays link and click totals.
async fn handle_stats(service: &Service) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let totals = service
        .totals()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to read totals: {}", e))?;

    println!(
        "  Links:  {}",
        totals.links.to_string().bright_green().bold()
    );
    println!(
        "  Clicks: {}",
        totals.clicks.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &SqlitePool, service: &Service) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            service
                .check_storage()
                .await
                .map_err(|e| anyhow::anyhow!("Database check failed: {}", e))?;

            let version: String = sqlx::query_scalar("SELECT sqlite_version()")
                .fetch_one(pool)
                .await?;

            println!("{}", "✅ Database connection OK".green().bold());
            println!("  SQLite: {}", version.bright_white());
        }
        DbAction::Migrate => {
            println!("{}", "🛠  Applying migrations...".bright_blue());

            persistence::migrate(pool)
                .await
                .context("Failed to apply migrations")?;

            println!("{}", "✅ Schema is up to date".green().bold());
        }
    }

    Ok(())
}
