//! サーバーサイドセッション管理
//!
//! ランダムトークンをキーとするインメモリのセッションテーブル。
//! ログイン成功時に作成し、ログアウトまたは期限切れで破棄する。
//! 失効済みエントリは参照時に遅延破棄する。

use crate::common::auth::UserRole;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// セッショントークン長
const SESSION_TOKEN_LENGTH: usize = 48;

/// サーバーサイドセッション
#[derive(Debug, Clone)]
pub struct Session {
    /// ログイン中のユーザー名
    pub username: String,
    /// ユーザーロール
    pub role: UserRole,
    /// 作成日時
    pub created_at: DateTime<Utc>,
    /// 失効日時
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// 失効済みかどうか
    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }
}

/// インメモリセッションテーブル
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<String, Session>>>,
}

impl SessionStore {
    /// 空のセッションテーブルを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// セッションを作成しトークンを返す
    pub async fn create(&self, username: &str, role: UserRole, ttl: Duration) -> String {
        let token = crate::auth::generate_random_token(SESSION_TOKEN_LENGTH);
        let now = Utc::now();
        let session = Session {
            username: username.to_string(),
            role,
            created_at: now,
            expires_at: now + ttl,
        };
        self.inner.write().await.insert(token.clone(), session);
        token
    }

    /// トークンからセッションを引く
    ///
    /// 失効済みのセッションはその場で破棄してNoneを返す。
    pub async fn get(&self, token: &str) -> Option<Session> {
        let mut sessions = self.inner.write().await;
        match sessions.get(token) {
            Some(session) if session.is_expired() => {
                sessions.remove(token);
                None
            }
            Some(session) => Some(session.clone()),
            None => None,
        }
    }

    /// セッションを破棄する
    pub async fn remove(&self, token: &str) -> Option<Session> {
        self.inner.write().await.remove(token)
    }

    /// 現在保持しているセッション数（失効分を含む）
    pub async fn active_count(&self) -> usize {
        self.inner.read().await.len()
    }
}
