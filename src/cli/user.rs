//! user サブコマンド
//!
//! users.jsonのオフライン管理（追加・一覧）。
//! パスワードはbcryptでハッシュ化して保存する。

use crate::auth::password::hash_password;
use crate::common::auth::{User, UserRole};
use crate::common::error::PortalError;
use crate::store::traits::UserStore;
use crate::store::users::JsonUserStore;
use chrono::Utc;
use clap::{Args, Subcommand};
use std::path::PathBuf;

/// user サブコマンドの引数
#[derive(Args, Debug)]
pub struct UserArgs {
    /// User management action
    #[command(subcommand)]
    pub command: UserCommands,

    /// User credentials file
    #[arg(long, default_value = "users.json", env = "FILEPORTAL_USERS_FILE")]
    pub users_file: PathBuf,
}

/// user サブコマンドの操作
#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// Add or replace a user
    Add {
        /// Username
        username: String,

        /// Role
        #[arg(long, value_enum, default_value_t = UserRole::User)]
        role: UserRole,

        /// Password (prompted when omitted)
        #[arg(long)]
        password: Option<String>,
    },
    /// List users
    List,
}

/// user サブコマンドを実行
pub async fn execute(args: &UserArgs) -> Result<(), PortalError> {
    let store = JsonUserStore::new(args.users_file.clone());

    match &args.command {
        UserCommands::Add {
            username,
            role,
            password,
        } => add_user(&store, username, *role, password.as_deref()).await,
        UserCommands::List => list_users(&store).await,
    }
}

async fn add_user(
    store: &JsonUserStore,
    username: &str,
    role: UserRole,
    password: Option<&str>,
) -> Result<(), PortalError> {
    if username.trim().is_empty() {
        return Err(PortalError::Validation(
            "Username cannot be empty".to_string(),
        ));
    }

    let password = match password {
        Some(p) => p.to_string(),
        None => rpassword::prompt_password("Password: ")
            .map_err(|e| PortalError::Internal(format!("Failed to read password: {}", e)))?,
    };
    if password.trim().is_empty() {
        return Err(PortalError::Validation(
            "Password cannot be empty".to_string(),
        ));
    }

    let password_hash = hash_password(password.trim())?;
    let existed = store.find_by_username(username).await?.is_some();

    let user = User {
        username: username.to_string(),
        password_hash,
        role,
        created_at: Utc::now(),
        last_login: None,
    };
    store.upsert(&user).await?;

    println!(
        "{} user '{}' with role {}",
        if existed { "Updated" } else { "Added" },
        username,
        role
    );
    Ok(())
}

async fn list_users(store: &JsonUserStore) -> Result<(), PortalError> {
    let users = store.list().await?;
    if users.is_empty() {
        println!("No users registered");
        return Ok(());
    }

    for user in users {
        let last_login = user
            .last_login
            .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| "-".to_string());
        println!("{}\t{}\tlast login: {}", user.username, user.role, last_login);
    }
    Ok(())
}
