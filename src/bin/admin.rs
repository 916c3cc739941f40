//! CLI administration tool for shortly.
//!
//! Manages short links directly in PostgreSQL without going through the
//! HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List every short link, newest first
//! cargo run --bin admin -- links list
//!
//! # Show one link without counting a visit
//! cargo run --bin admin -- links show aZ3kP9qX
//!
//! # Create a link that expires in a day
//! cargo run --bin admin -- links create https://example.com --expire-minutes 1440
//!
//! # Delete a link by id
//! cargo run --bin admin -- links delete 42
//!
//! # Totals
//! cargo run --bin admin -- stats
//!
//! # Check database connection / apply migrations
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- db migrate
//! ```
//!
//! # Environment Variables
//!
//! Reads the same configuration as the server (see `shortly::config`):
//!
//! - `DATABASE_URL` or `DB_HOST`/`DB_PORT`/`DB_USER`/`DB_PASSWORD`/`DB_NAME` (required)
//! - `CODE_LENGTH`, `CODE_MAX_ATTEMPTS`, `STORE_TIMEOUT_MS` for `links create`

use shortly::application::services::{UrlService, UrlServiceConfig};
use shortly::config;
use shortly::domain::entities::{RecordState, UrlRecord};
use shortly::infrastructure::persistence::PgUrlRepository;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing shortly.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage short links
    Links {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Show totals
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link management subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// List all links, newest first
    List,

    /// Show a single link by short code
    Show {
        /// Short code
        short: String,
    },

    /// Create a short link
    Create {
        /// URL to shorten
        url: String,

        /// Minutes until the link expires (omit for never)
        #[arg(short, long, allow_negative_numbers = true)]
        expire_minutes: Option<i64>,
    },

    /// Delete a link by id
    Delete {
        /// Record id
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let database_url = config
        .database_url
        .as_deref()
        .context("The admin tool needs the postgres storage backend")?;

    let pool = PgPool::connect(database_url)
        .await
        .context("Failed to connect to database")?;

    let result = match cli.command {
        Commands::Links { action } => {
            handle_link_action(action, &pool, config.service_config()).await
        }
        Commands::Stats => handle_stats(&pool).await,
        Commands::Db { action } => handle_db_action(action, &pool).await,
    };

    pool.close().await;
    result
}

/// Dispatches link management commands.
///
/// Codes are generated with the same `CODE_LENGTH`, `CODE_MAX_ATTEMPTS` and
/// `STORE_TIMEOUT_MS` settings as the server.
async fn handle_link_action(
    action: LinkAction,
    pool: &PgPool,
    service_config: UrlServiceConfig,
) -> Result<()> {
    let repo = Arc::new(PgUrlRepository::new(Arc::new(pool.clone())));
    let service = UrlService::new(repo, service_config);

    match action {
        LinkAction::List => list_links(&service).await?,
        LinkAction::Show { short } => show_link(&service, &short).await?,
        LinkAction::Create {
            url,
            expire_minutes,
        } => create_link(&service, &url, expire_minutes).await?,
        LinkAction::Delete { id, yes } => delete_link(&service, id, yes).await?,
    }

    Ok(())
}

/// Lists all links with status indicators.
///
/// # Output Format
///
/// ```text
/// Short links
///
///   ID    Short        Visits   Expires              Status   Original
///   ─────────────────────────────────────────────────────────────────────
///   2     aZ3kP9qX     14       never                ACTIVE   https://a.example
///   1     Qm81xLp0     0        2026-01-01 10:30     EXPIRED  https://b.example
/// ```
async fn list_links(service: &UrlService) -> Result<()> {
    println!("{}", "Short links".bright_blue().bold());
    println!();

    let records = service
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if records.is_empty() {
        println!("{}", "  No links found".yellow());
        return Ok(());
    }

    println!(
        "  {:<5} {:<12} {:<8} {:<20} {:<8} {}",
        "ID".bright_white().bold(),
        "Short".bright_white().bold(),
        "Visits".bright_white().bold(),
        "Expires".bright_white().bold(),
        "Status".bright_white().bold(),
        "Original".bright_white().bold()
    );
    println!("  {}", "─".repeat(90).bright_black());

    for record in &records {
        println!(
            "  {:<5} {:<12} {:<8} {:<20} {:<8} {}",
            record.id.to_string().bright_black(),
            record.short.cyan(),
            record.visit_count,
            format_expiry(record),
            status_label(record),
            record.original
        );
    }

    println!();
    println!(
        "  Total: {}",
        records.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Prints one link's details. Does not count a visit.
async fn show_link(service: &UrlService, short: &str) -> Result<()> {
    let record = service
        .find(short)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    println!("  ID:       {}", record.id.to_string().bright_black());
    println!("  Short:    {}", record.short.cyan());
    println!("  Original: {}", record.original);
    println!("  Visits:   {}", record.visit_count);
    println!("  Expires:  {}", format_expiry(&record));
    println!("  Status:   {}", status_label(&record));
    println!(
        "  Created:  {}",
        record.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    );

    Ok(())
}

async fn create_link(service: &UrlService, url: &str, expire_minutes: Option<i64>) -> Result<()> {
    let record = service
        .create(url, expire_minutes)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create link: {}", e))?;

    println!("{}", "Link created".green().bold());
    println!("  ID:      {}", record.id.to_string().bright_black());
    println!("  Short:   {}", record.short.bright_yellow().bold());
    println!("  Expires: {}", format_expiry(&record));

    Ok(())
}

/// Deletes a link after confirmation (skipped with `--yes`).
async fn delete_link(service: &UrlService, id: i64, skip_confirm: bool) -> Result<()> {
    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete link {}?", id))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let removed = service
        .delete(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete link: {}", e))?;

    if removed {
        println!("{}", "Link deleted".green().bold());
    } else {
        println!("{}", "No link with this id; nothing to delete".yellow());
    }

    Ok(())
}

/// Displays link and visit totals.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let links_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await?;

    let expired_count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM urls WHERE expires_at < NOW()")
            .fetch_one(pool)
            .await?;

    let visits: i64 = sqlx::query_scalar("SELECT COALESCE(SUM(visit_count), 0)::BIGINT FROM urls")
        .fetch_one(pool)
        .await?;

    println!(
        "  Links:   {}",
        links_count.to_string().bright_green().bold()
    );
    println!(
        "  Expired: {}",
        expired_count.to_string().bright_yellow().bold()
    );
    println!("  Visits:  {}", visits.to_string().bright_green().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
        DbAction::Migrate => {
            sqlx::migrate!("./migrations")
                .run(pool)
                .await
                .context("Failed to apply migrations")?;

            println!("{}", "Migrations applied".green().bold());
        }
    }

    Ok(())
}

fn format_expiry(record: &UrlRecord) -> String {
    record
        .expires_at
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "never".to_string())
}

fn status_label(record: &UrlRecord) -> ColoredString {
    match record.state_at(Utc::now()) {
        RecordState::Active => "ACTIVE".green(),
        RecordState::Expired => "EXPIRED".red(),
    }
}
