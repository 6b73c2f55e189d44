//! アクセスログストレージ（access_log.json）
//!
//! 新しい順のJSON配列として永続化する。書き込みごとに直近
//! [`MAX_LOG_ENTRIES`] 件へ切り詰める。read-modify-writeは
//! Mutexで直列化する（プロセスをまたぐ書き込みはlast writer wins）。

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

use crate::common::error::PortalError;
use crate::store::traits::AccessLogStore;

/// ログに保持する最大エントリ数
pub const MAX_LOG_ENTRIES: usize = 1000;

/// 記録対象の操作種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessAction {
    /// ログイン成功
    LoginSuccess,
    /// ログイン失敗
    LoginFailed,
    /// ログアウト
    Logout,
    /// ファイルアクセス
    FileAccess,
}

impl AccessAction {
    /// 操作種別を文字列に変換
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LoginSuccess => "login_success",
            Self::LoginFailed => "login_failed",
            Self::Logout => "logout",
            Self::FileAccess => "file_access",
        }
    }
}

impl std::fmt::Display for AccessAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// アクセスログエントリ
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessLogEntry {
    /// エポック秒
    pub timestamp: i64,
    /// 表示用時刻（ローカルタイム）
    pub time_str: String,
    /// 操作したユーザー名
    pub username: String,
    /// 操作種別
    pub action: AccessAction,
    /// 対象ファイル名（file_accessのみ）
    #[serde(default)]
    pub filename: Option<String>,
    /// クライアントIP
    pub ip: String,
}

impl AccessLogEntry {
    /// 現在時刻でエントリを作成
    pub fn now(
        username: &str,
        action: AccessAction,
        filename: Option<String>,
        ip: String,
    ) -> Self {
        let now = chrono::Local::now();
        Self {
            timestamp: now.timestamp(),
            time_str: now.format("%Y-%m-%d %H:%M:%S").to_string(),
            username: username.to_string(),
            action,
            filename,
            ip,
        }
    }
}

/// JSONファイルベースのアクセスログストア
pub struct JsonAccessLogStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonAccessLogStore {
    /// 指定パスのaccess_log.jsonを扱うストアを作成（ファイルは遅延作成）
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// ストアが扱うファイルパス
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<Vec<AccessLogEntry>, PortalError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(PortalError::Storage(format!(
                "Failed to read {}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    async fn save(&self, entries: &[AccessLogEntry]) -> Result<(), PortalError> {
        let raw = serde_json::to_string_pretty(entries)?;
        tokio::fs::write(&self.path, raw).await.map_err(|e| {
            PortalError::Storage(format!("Failed to write {}: {}", self.path.display(), e))
        })
    }
}

#[async_trait]
impl AccessLogStore for JsonAccessLogStore {
    async fn append(&self, entry: AccessLogEntry) -> Result<(), PortalError> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.load().await?;
        entries.insert(0, entry);
        if entries.len() > MAX_LOG_ENTRIES {
            tracing::debug!(
                "Access log exceeded {} entries, truncating",
                MAX_LOG_ENTRIES
            );
            entries.truncate(MAX_LOG_ENTRIES);
        }
        self.save(&entries).await
    }

    async fn recent(&self, limit: usize) -> Result<Vec<AccessLogEntry>, PortalError> {
        let mut entries = self.load().await?;
        entries.truncate(limit);
        Ok(entries)
    }

    async fn count(&self) -> Result<usize, PortalError> {
        Ok(self.load().await?.len())
    }
}
