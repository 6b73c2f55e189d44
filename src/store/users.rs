//! ユーザーストレージ（users.json）
//!
//! ユーザー名をキーとするJSONオブジェクトとして永続化する。
//! ファイル全体のread-modify-writeをMutexで直列化する。
//! プロセスをまたぐ同時書き込みはlast writer wins。

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

use crate::common::auth::{User, UserRole};
use crate::common::error::PortalError;
use crate::store::traits::UserStore;

// ディスク上のレコード（ユーザー名はマップのキー側に持つ）
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredUser {
    password_hash: String,
    role: UserRole,
    created_at: DateTime<Utc>,
    #[serde(default)]
    last_login: Option<DateTime<Utc>>,
}

impl StoredUser {
    fn into_user(self, username: &str) -> User {
        User {
            username: username.to_string(),
            password_hash: self.password_hash,
            role: self.role,
            created_at: self.created_at,
            last_login: self.last_login,
        }
    }

    fn from_user(user: &User) -> Self {
        Self {
            password_hash: user.password_hash.clone(),
            role: user.role,
            created_at: user.created_at,
            last_login: user.last_login,
        }
    }
}

/// JSONファイルベースのユーザーストア
pub struct JsonUserStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonUserStore {
    /// 指定パスのusers.jsonを扱うストアを作成（ファイルは遅延作成）
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

    async fn load(&self) -> Result<BTreeMap<String, StoredUser>, PortalError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(PortalError::Storage(format!(
                "Failed to read {}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    async fn save(&self, users: &BTreeMap<String, StoredUser>) -> Result<(), PortalError> {
        let raw = serde_json::to_string_pretty(users)?;
        tokio::fs::write(&self.path, raw).await.map_err(|e| {
            PortalError::Storage(format!("Failed to write {}: {}", self.path.display(), e))
        })
    }
}

#[async_trait]
impl UserStore for JsonUserStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, PortalError> {
        let users = self.load().await?;
        Ok(users
            .get(username)
            .cloned()
            .map(|stored| stored.into_user(username)))
    }

    async fn upsert(&self, user: &User) -> Result<(), PortalError> {
        let _guard = self.write_lock.lock().await;
        let mut users = self.load().await?;
        users.insert(user.username.clone(), StoredUser::from_user(user));
        self.save(&users).await
    }

    async fn list(&self) -> Result<Vec<User>, PortalError> {
        let users = self.load().await?;
        Ok(users
            .into_iter()
            .map(|(username, stored)| stored.into_user(&username))
            .collect())
    }

    async fn count(&self) -> Result<usize, PortalError> {
        Ok(self.load().await?.len())
    }

    async fn update_last_login(&self, username: &str) -> Result<(), PortalError> {
        let _guard = self.write_lock.lock().await;
        let mut users = self.load().await?;
        let stored = users.get_mut(username).ok_or_else(|| {
            PortalError::Storage(format!("User not found: {}", username))
        })?;
        stored.last_login = Some(Utc::now());
        self.save(&users).await
    }
}
