//! JSONファイルストレージ層
//!
//! users.json / access_log.json の永続化

/// ユーザーストレージ
pub mod users;

/// アクセスログストレージ
pub mod access_log;

/// Repository traitパターン（注入可能な読み書き契約）
pub mod traits;
