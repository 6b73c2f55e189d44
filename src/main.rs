//! fileportal entry point

use clap::Parser;
use fileportal::auth::session::SessionStore;
use fileportal::cli::{Cli, Commands};
use fileportal::config::{self, get_env_or, get_env_parse};
use fileportal::store::access_log::JsonAccessLogStore;
use fileportal::store::users::JsonUserStore;
use fileportal::{auth, logging, server, AppState};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Clone)]
struct ServerConfig {
    host: String,
    port: u16,
    users_file: PathBuf,
    access_log_file: PathBuf,
}

impl ServerConfig {
    fn from_env() -> Self {
        Self {
            host: get_env_or("FILEPORTAL_HOST", config::DEFAULT_HOST),
            port: get_env_parse("FILEPORTAL_PORT", config::DEFAULT_PORT),
            users_file: PathBuf::from(get_env_or(
                "FILEPORTAL_USERS_FILE",
                config::DEFAULT_USERS_FILE,
            )),
            access_log_file: PathBuf::from(get_env_or(
                "FILEPORTAL_ACCESS_LOG_FILE",
                config::DEFAULT_ACCESS_LOG_FILE,
            )),
        }
    }

    fn from_args(args: &fileportal::cli::serve::ServeArgs) -> Self {
        Self {
            host: args.host.clone(),
            port: args.port,
            users_file: args.users_file.clone(),
            access_log_file: args.access_log_file.clone(),
        }
    }

    fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve(args)) => {
            logging::init().expect("failed to initialize logging");
            run_server(ServerConfig::from_args(&args)).await;
        }
        Some(Commands::Generate(args)) => {
            logging::init().expect("failed to initialize logging");
            if let Err(e) = fileportal::cli::generate::execute(&args) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Some(Commands::User(args)) => {
            logging::init().expect("failed to initialize logging");
            if let Err(e) = fileportal::cli::user::execute(&args).await {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        None => {
            // サブコマンド省略時はserve相当（設定は環境変数から）
            logging::init().expect("failed to initialize logging");
            run_server(ServerConfig::from_env()).await;
        }
    }
}

async fn run_server(config: ServerConfig) {
    let users = Arc::new(JsonUserStore::new(config.users_file.clone()));
    let access_log = Arc::new(JsonAccessLogStore::new(config.access_log_file.clone()));

    if let Err(e) = auth::bootstrap::ensure_admin_exists(users.as_ref()).await {
        tracing::error!("Admin bootstrap failed: {}", e);
        std::process::exit(1);
    }

    let state = AppState {
        users,
        access_log,
        sessions: SessionStore::new(),
        session_ttl: config::session_ttl(),
    };

    server::run(state, &config.bind_addr()).await;
}
