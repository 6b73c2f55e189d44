//! fileportal
//!
//! 認証付きローカルファイル共有ポータル。
//! セッション認証サービス（axum）と静的インデックス生成を1バイナリで提供する。

#![warn(missing_docs)]

/// 共通型定義
pub mod common;

/// REST APIハンドラー
pub mod api;

/// 認証・セッション管理
pub mod auth;

/// JSONファイルストレージ
pub mod store;

/// 静的インデックス生成
pub mod indexer;

/// ロギング初期化ユーティリティ
pub mod logging;

/// 設定管理（環境変数ヘルパー）
pub mod config;

/// CLIインターフェース
pub mod cli;

/// axumサーバー起動
pub mod server;

use std::sync::Arc;

/// アプリケーション状態
#[derive(Clone)]
pub struct AppState {
    /// ユーザーストレージ
    pub users: Arc<dyn store::traits::UserStore>,
    /// アクセスログストレージ
    pub access_log: Arc<dyn store::traits::AccessLogStore>,
    /// セッションテーブル
    pub sessions: auth::session::SessionStore,
    /// セッション有効期間
    pub session_ttl: chrono::Duration,
}
