//! CLI administration tool for the link-desk user database.
//!
//! Provides commands for managing users and performing database operations
//! without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List all users
//! cargo run --bin admin -- user list
//!
//! # Create a user (prompts for missing fields)
//! cargo run --bin admin -- user create --name "John Doe" --email john@example.com
//!
//! # Delete a user
//! cargo run --bin admin -- user delete 3
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Insert the sample users
//! cargo run --bin admin -- db seed
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DATABASE_PATH`: SQLite database location
//!   (default: `users.db`)

use link_desk::application::services::UserService;
use link_desk::application::services::password::hash_password;
use link_desk::config;
use link_desk::infrastructure::persistence::{SqliteUserRepository, pool};
use link_desk::utils::user_validator::{UserFields, sanitize_input, validate_user_data};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Password};
use sqlx::SqlitePool;
use std::sync::Arc;

type AdminUserService = UserService<SqliteUserRepository>;

/// Sample accounts inserted by `db seed`.
const SAMPLE_USERS: [(&str, &str, &str); 3] = [
    ("John Doe", "john@example.com", "SecurePass123!"),
    ("Jane Smith", "jane@example.com", "MySecret456@"),
    ("Bob Johnson", "bob@example.com", "StrongPwd789#"),
];

/// CLI tool for managing link-desk users.
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
    User {
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

    /// Create a new user
    Create {
        /// Display name
        #[arg(short, long)]
        name: Option<String>,

        /// E-mail address
        #[arg(short, long)]
        email: Option<String>,
    },

    /// Delete a user
    Delete {
        /// User ID
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

    /// Insert sample users (existing e-mails are skipped)
    Seed,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid configuration")?;
    let pool = pool::connect(&config).await?;
    pool::migrate(&pool).await?;

    match cli.command {
        Commands::User { action } => handle_user_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches user management commands.
async fn handle_user_action(action: UserAction, pool: &SqlitePool) -> Result<()> {
    let repository = Arc::new(SqliteUserRepository::new(Arc::new(pool.clone())));
    let service = UserService::new(repository);

    match action {
        UserAction::List => list_users(&service).await?,
        UserAction::Create { name, email } => create_user(&service, name, email).await?,
        UserAction::Delete { id, yes } => delete_user(&service, id, yes).await?,
    }

    Ok(())
}

/// Lists all users.
///
/// # Output Format
///
/// ```text
/// Users
///
///   ID    Name                           Email
///   ----------------------------------------------------------------------
///   1     John Doe                       john@example.com
/// ```
async fn list_users(service: &AdminUserService) -> Result<()> {
    println!("{}", "Users".bright_blue().bold());
    println!();

    let users = service
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list users: {}", e))?;

    if users.is_empty() {
        println!("{}", "  No users found".yellow());
        println!();
        println!(
            "  Create one with: {} admin user create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<5} {:<30} {}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Email".bright_white().bold()
    );
    println!("  {}", "-".repeat(70).bright_black());

    for user in &users {
        println!(
            "  {:<5} {:<30} {}",
            user.id.to_string().bright_black(),
            user.name.cyan(),
            user.email
        );
    }

    println!();
    println!("  Total: {}", users.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Creates a user with interactive prompts.
///
/// Runs the same validation as `POST /users` and reports every violated rule.
async fn create_user(
    service: &AdminUserService,
    name: Option<String>,
    email: Option<String>,
) -> Result<()> {
    println!("{}", "Create User".bright_blue().bold());
    println!();

    let name = match name {
        Some(n) => n,
        None => Input::new().with_prompt("Name").interact_text()?,
    };
    let email = match email {
        Some(e) => e,
        None => Input::new().with_prompt("Email").interact_text()?,
    };
    let password = Password::new()
        .with_prompt("Password")
        .with_confirmation("Repeat password", "Passwords do not match")
        .interact()?;

    check_new_user(&name, &email, &password)?;

    let id = service
        .register(sanitize_input(&name), sanitize_input(&email), password)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create user: {}", e))?;

    println!();
    println!(
        "{} (id {})",
        "User created successfully!".green().bold(),
        id.to_string().bright_white()
    );
    println!();

    Ok(())
}

/// Validates a new account the way `POST /users` does.
///
/// # Errors
///
/// Returns an error listing every violated rule.
fn check_new_user(name: &str, email: &str, password: &str) -> Result<()> {
    let fields = UserFields {
        name: Some(name),
        email: Some(email),
        password: Some(password),
    };

    validate_user_data(&fields, true).map_err(|errors| {
        anyhow::anyhow!("Validation failed:\n  - {}", errors.join("\n  - "))
    })
}

/// Deletes a user after confirmation (default: No).
async fn delete_user(service: &AdminUserService, id: i64, skip_confirm: bool) -> Result<()> {
    println!("{}", "Delete User".bright_blue().bold());
    println!();

    let user = service
        .get(id)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    println!("  Name:  {}", user.name.cyan());
    println!("  Email: {}", user.email);
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

    service
        .delete(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete user: {}", e))?;

    println!("{}", "User deleted successfully!".green().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &SqlitePool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            let version: String = sqlx::query_scalar("SELECT sqlite_version()")
                .fetch_one(pool)
                .await?;
            let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
                .fetch_one(pool)
                .await?;

            println!("{}", "Database connection OK".green().bold());
            println!("  SQLite: {}", version.bright_white());
            println!("  Users:  {}", users.to_string().bright_white());
        }
        DbAction::Seed => seed(pool).await?,
    }

    Ok(())
}

/// Inserts [`SAMPLE_USERS`], skipping e-mails that already exist.
async fn seed(pool: &SqlitePool) -> Result<()> {
    println!("{}", "Seeding sample users...".bright_blue());

    let mut inserted = 0;
    for (name, email, password) in SAMPLE_USERS {
        let hash = hash_password(password.to_string())
            .await
            .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))?;

        let result =
            sqlx::query("INSERT OR IGNORE INTO users (name, email, password) VALUES (?, ?, ?)")
                .bind(name)
                .bind(email)
                .bind(hash)
                .execute(pool)
                .await?;

        if result.rows_affected() > 0 {
            inserted += 1;
            println!("  {} {}", "+".green(), email);
        } else {
            println!("  {} {} (exists)", "=".bright_black(), email);
        }
    }

    println!();
    println!(
        "{} {} user(s) inserted",
        "Done:".green().bold(),
        inserted.to_string().bright_white()
    );

    Ok(())
}
