//! アクセスログAPI
//!
//! ログ閲覧（admin専用）とファイルアクセス記録

use crate::common::auth::UserRole;
use crate::common::ip::client_ip;
use crate::store::access_log::{AccessAction, AccessLogEntry};
use crate::store::traits::AccessLogStore;
use crate::AppState;
use axum::{
    extract::{ConnectInfo, State},
    http::HeaderMap,
    response::{IntoResponse, Response},
    Form, Json,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

use super::auth::{current_session, StatusResponse};
use super::error::AppError;

/// /access_logs が返す最大件数
const ACCESS_LOGS_LIMIT: usize = 50;

/// アクセスログ一覧レスポンス
#[derive(Debug, Serialize)]
pub struct AccessLogsResponse {
    /// 成否
    pub success: bool,
    /// ログエントリ（新しい順、最大50件）
    pub logs: Vec<AccessLogEntry>,
}

/// ファイルアクセス記録フォーム
#[derive(Debug, Deserialize)]
pub struct FileAccessForm {
    /// アクセスされたファイル名
    pub filename: String,
}

/// GET /access_logs - アクセスログ一覧取得
///
/// roleがadminのセッションのみ閲覧できる。未ログイン・権限不足は
/// ステータス200のまま `{"success":false,"message":...}` を返す。
pub async fn get_access_logs(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let session = match current_session(&state, &headers).await {
        Some(session) => session,
        None => {
            return Ok(Json(StatusResponse::failed("Not logged in")).into_response());
        }
    };

    if session.role != UserRole::Admin {
        tracing::info!(
            "Access log read denied for non-admin user: {}",
            session.username
        );
        return Ok(Json(StatusResponse::failed("Insufficient permissions")).into_response());
    }

    let logs = state.access_log.recent(ACCESS_LOGS_LIMIT).await?;
    Ok(Json(AccessLogsResponse {
        success: true,
        logs,
    })
    .into_response())
}

/// POST /log_file_access - ファイルアクセス記録
///
/// 生成ページがファイルリンクのクリック時に呼び出す。
/// ログイン済みセッションが必要。
pub async fn log_file_access(
    State(state): State<AppState>,
    headers: HeaderMap,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    Form(form): Form<FileAccessForm>,
) -> Result<Response, AppError> {
    let session = match current_session(&state, &headers).await {
        Some(session) => session,
        None => {
            return Ok(Json(StatusResponse::failed("Not logged in")).into_response());
        }
    };

    let ip = client_ip(&headers, connect_info.map(|ConnectInfo(addr)| addr));
    state
        .access_log
        .append(AccessLogEntry::now(
            &session.username,
            AccessAction::FileAccess,
            Some(form.filename),
            ip,
        ))
        .await?;

    Ok(Json(StatusResponse::ok("Recorded")).into_response())
}
