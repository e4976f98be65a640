//! CLI administration tool for users-api.
//!
//! Provides commands for inspecting and maintaining the user store without
//! going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List users with their current ages
//! cargo run --bin admin -- users list
//!
//! # Delete a user (asks for confirmation)
//! cargo run --bin admin -- users delete 42
//!
//! # Check database connection / show info / apply migrations
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- db info
//! cargo run --bin admin -- db migrate
//! ```
//!
//! # Environment Variables
//!
//! Same database variables as the server (see `users_api::config`).

use users_api::application::services::UserService;
use users_api::config::Config;
use users_api::domain::repositories::UserRepository;
use users_api::infrastructure::persistence::PgUserRepository;
use users_api::server;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing users-api.
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
    /// Manage users
    Users {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// User management subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// List all users
    List,

    /// Delete a user by id
    Delete {
        /// User id
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

    let config = Config::from_env()?;
    let pool = server::connect_pool(&config).await?;

    match cli.command {
        Commands::Users { action } => handle_user_action(action, pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches user management commands.
async fn handle_user_action(action: UserAction, pool: PgPool) -> Result<()> {
    let repo = Arc::new(PgUserRepository::new(Arc::new(pool)));

    match action {
        UserAction::List => list_users(repo).await?,
        UserAction::Delete { id, yes } => delete_user(repo, id, yes).await?,
    }

    Ok(())
}

/// Lists all users with their ages.
///
/// # Output Format
///
/// ```text
/// Users
///
///   ID     Name                           Date of birth  Age
///   ──────────────────────────────────────────────────────────
///   1      Alice                          1990-05-10     35
/// ```
async fn list_users(repo: Arc<PgUserRepository>) -> Result<()> {
    println!("{}", "Users".bright_blue().bold());
    println!();

    let service = UserService::new(repo);
    let users = service
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list users: {}", e))?;

    if users.is_empty() {
        println!("{}", "  No users found".yellow());
        return Ok(());
    }

    println!(
        "  {:<6} {:<30} {:<14} {}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Date of birth".bright_white().bold(),
        "Age".bright_white().bold()
    );
    println!("  {}", "─".repeat(58).bright_black());

    for user in &users {
        println!(
            "  {:<6} {:<30} {:<14} {}",
            user.id.to_string().bright_black(),
            user.name.cyan(),
            user.dob.to_string(),
            user.age.map(|a| a.to_string()).unwrap_or_default()
        );
    }

    println!();
    println!("  Total: {}", users.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Deletes a user after showing it and asking for confirmation.
async fn delete_user(repo: Arc<PgUserRepository>, id: i64, skip_confirm: bool) -> Result<()> {
    println!("{}", "Delete User".bright_blue().bold());
    println!();

    let user = repo
        .find_by_id(id)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .context("User not found")?;

    println!("  Name: {}", user.name.cyan());
    println!("  DOB:  {}", user.dob.to_string().bright_black());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this user?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    repo.delete(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete user: {}", e))?;

    println!("{}", "User deleted".green().bold());
    println!();

    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            // connect_pool already pinged the server
            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;
            let users_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
                .fetch_one(pool)
                .await
                .context("users table missing, run `admin db migrate`")?;

            println!("{}", "Database Info".bright_blue().bold());
            println!();
            println!("  Server: {}", version.bright_black());
            println!("  Users:  {}", users_count.to_string().bright_white().bold());
            println!();
        }
        DbAction::Migrate => {
            server::migrate(pool).await?;
            println!("{}", "Migrations applied".green().bold());
        }
    }

    Ok(())
}
