//! Repository traitパターン定義
//!
//! ストレージ操作を抽象化し、ハンドラーには注入された読み書き契約だけを見せる。
//! 現在の実装はJSONファイル（users.json / access_log.json）だが、
//! 契約を満たす別実装に差し替えられる。

use async_trait::async_trait;

use crate::common::auth::User;
use crate::common::error::PortalError;
use crate::store::access_log::AccessLogEntry;

/// ユーザーストレージのRepository trait
#[async_trait]
pub trait UserStore: Send + Sync {
    /// ユーザー名でユーザーを検索
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, PortalError>;
    /// ユーザーを作成または置換（last writer wins）
    async fn upsert(&self, user: &User) -> Result<(), PortalError>;
    /// すべてのユーザーを取得（ユーザー名順）
    async fn list(&self) -> Result<Vec<User>, PortalError>;
    /// 登録ユーザー数
    async fn count(&self) -> Result<usize, PortalError>;
    /// 最終ログイン日時を現在時刻に更新
    async fn update_last_login(&self, username: &str) -> Result<(), PortalError>;
}

/// アクセスログストレージのRepository trait
#[async_trait]
pub trait AccessLogStore: Send + Sync {
    /// エントリを先頭に追記する
    ///
    /// 上限を超えた古いエントリは書き込み時に切り捨てる。
    async fn append(&self, entry: AccessLogEntry) -> Result<(), PortalError>;
    /// 新しい順に最大limit件を返す
    async fn recent(&self, limit: usize) -> Result<Vec<AccessLogEntry>, PortalError>;
    /// 保持しているエントリ数
    async fn count(&self) -> Result<usize, PortalError>;
}
