//! ロギング初期化ユーティリティ

use crate::common::error::PortalError;
use tracing_subscriber::EnvFilter;

/// tracingサブスクライバを初期化する
///
/// ログレベルは環境変数 `FILEPORTAL_LOG_LEVEL`（未設定時は `info`）。
/// 2回目以降の呼び出しはエラーになる。
pub fn init() -> Result<(), PortalError> {
    let filter = EnvFilter::try_from_env("FILEPORTAL_LOG_LEVEL")
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| PortalError::Internal(format!("Failed to initialize logging: {}", e)))
}
