//! serve サブコマンド
//!
//! 認証サービスを起動します。

use clap::Args;
use std::path::PathBuf;

/// serve サブコマンドの引数
#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Listen port
    #[arg(short, long, default_value = "8360", env = "FILEPORTAL_PORT")]
    pub port: u16,

    /// Bind address
    #[arg(short = 'H', long, default_value = "0.0.0.0", env = "FILEPORTAL_HOST")]
    pub host: String,

    /// User credentials file
    #[arg(long, default_value = "users.json", env = "FILEPORTAL_USERS_FILE")]
    pub users_file: PathBuf,

    /// Access log file
    #[arg(
        long,
        default_value = "access_log.json",
        env = "FILEPORTAL_ACCESS_LOG_FILE"
    )]
    pub access_log_file: PathBuf,
}
