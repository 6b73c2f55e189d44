//! CLI module for fileportal
//!
//! Provides the command-line interface for the portal service and the
//! offline index generator.

/// generate subcommand
pub mod generate;

/// serve subcommand
pub mod serve;

/// user subcommand
pub mod user;

use clap::{Parser, Subcommand};

/// fileportal - Session-authenticated local file sharing portal
#[derive(Parser, Debug)]
#[command(name = "fileportal")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    FILEPORTAL_HOST               Bind address (default: 0.0.0.0)
    FILEPORTAL_PORT               Listen port (default: 8360)
    FILEPORTAL_LOG_LEVEL          Log level (default: info)
    FILEPORTAL_USERS_FILE         User credentials file (default: users.json)
    FILEPORTAL_ACCESS_LOG_FILE    Access log file (default: access_log.json)
    FILEPORTAL_SESSION_TTL_SECS   Session lifetime in seconds (default: 86400)
    FILEPORTAL_ADMIN_USERNAME     First-boot admin username (default: admin)
    FILEPORTAL_ADMIN_PASSWORD     First-boot admin password
"#)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the authentication service
    Serve(serve::ServeArgs),
    /// Generate a static index.html for a directory
    Generate(generate::GenerateArgs),
    /// Manage the users file
    User(user::UserArgs),
}
