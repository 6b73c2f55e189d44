//! 初回起動時の管理者アカウント作成
//!
//! users.jsonが空のままサービスを起動したときに環境変数から管理者を作成する

use crate::auth::password::hash_password;
use crate::common::auth::{User, UserRole};
use crate::common::error::PortalError;
use crate::config::get_env;
use crate::store::traits::UserStore;
use chrono::Utc;

/// 環境変数から管理者を作成
///
/// # Environment Variables
/// * `FILEPORTAL_ADMIN_USERNAME` - 管理者ユーザー名（省略時: "admin"）
/// * `FILEPORTAL_ADMIN_PASSWORD` - 管理者パスワード（必須）
///
/// # Returns
/// * `Ok(Some(username))` - 管理者作成成功（ユーザー名を返す）
/// * `Ok(None)` - FILEPORTAL_ADMIN_PASSWORDが未設定（作成しない）
/// * `Err(PortalError)` - 作成失敗
pub async fn create_admin_from_env(users: &dyn UserStore) -> Result<Option<String>, PortalError> {
    let password = match get_env("FILEPORTAL_ADMIN_PASSWORD") {
        Some(p) if !p.is_empty() => p,
        _ => {
            tracing::debug!("FILEPORTAL_ADMIN_PASSWORD not set, skipping admin creation from env");
            return Ok(None);
        }
    };

    let username = get_env("FILEPORTAL_ADMIN_USERNAME").unwrap_or_else(|| "admin".to_string());

    let password_hash = hash_password(&password)?;
    let user = User {
        username: username.clone(),
        password_hash,
        role: UserRole::Admin,
        created_at: Utc::now(),
        last_login: None,
    };
    users.upsert(&user).await?;

    tracing::info!("Created admin user from env: username={}", username);
    Ok(Some(username))
}

/// 初回起動時の管理者作成処理
///
/// 1. ユーザーストレージが空かチェック
/// 2. 空の場合は環境変数から管理者を作成
/// 3. 環境変数も未設定ならCLIでの作成を促すだけで起動は続行する
pub async fn ensure_admin_exists(users: &dyn UserStore) -> Result<(), PortalError> {
    if users.count().await? > 0 {
        tracing::debug!("Users already exist, skipping admin creation");
        return Ok(());
    }

    tracing::info!("First boot detected: no users registered");

    match create_admin_from_env(users).await? {
        Some(username) => {
            tracing::info!("Admin user created from environment: {}", username);
        }
        None => {
            tracing::warn!(
                "No users registered and FILEPORTAL_ADMIN_PASSWORD not set; \
                 create an account with `fileportal user add <name> --role admin`"
            );
        }
    }
    Ok(())
}
