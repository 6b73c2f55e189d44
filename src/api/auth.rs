//! 認証API
//!
//! ログイン、ログアウト、認証状態確認

use crate::auth::session::Session;
use crate::auth::{
    build_session_cookie, clear_session_cookie, extract_session_cookie, is_request_secure,
};
use crate::common::auth::UserRole;
use crate::common::ip::client_ip;
use crate::store::access_log::{AccessAction, AccessLogEntry};
use crate::store::traits::{AccessLogStore, UserStore};
use crate::AppState;
use axum::{
    extract::{ConnectInfo, State},
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
    Form, Json,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

use super::error::AppError;

/// ログインフォーム
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    /// ユーザー名
    pub username: String,
    /// パスワード
    pub password: String,
}

/// 成否とメッセージのみのレスポンス
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    /// 成否
    pub success: bool,
    /// 表示用メッセージ
    pub message: String,
}

impl StatusResponse {
    /// 成功レスポンスを作成
    pub fn ok(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
        }
    }

    /// 失敗レスポンスを作成
    pub fn failed(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
        }
    }
}

/// 認証状態レスポンス
#[derive(Debug, Serialize)]
pub struct CheckAuthResponse {
    /// 認証済みかどうか
    pub authenticated: bool,
    /// ログイン中のユーザー名
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// ユーザーロール
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
}

/// リクエストのCookieからセッションを引く
pub(crate) async fn current_session(state: &AppState, headers: &HeaderMap) -> Option<Session> {
    let token = extract_session_cookie(headers)?;
    state.sessions.get(&token).await
}

/// POST /login - ログイン
///
/// フォームのユーザー名・パスワードを保存済みbcryptハッシュと照合する。
/// 成功時はセッションを作成してCookieを設定し、login_successを記録する。
/// 失敗時はlogin_failedを記録する。成否はボディで返し、ステータスは200のまま
/// （生成ページのスクリプトがこの契約に依存する）。
///
/// # Returns
/// * `200 OK` - `{"success":bool,"message":...}`（成功時はSet-Cookie付き）
/// * `500 Internal Server Error` - ストレージ障害
pub async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let ip = client_ip(&headers, connect_info.map(|ConnectInfo(addr)| addr));

    if let Some(user) = state.users.find_by_username(&form.username).await? {
        if crate::auth::password::verify_password(&form.password, &user.password_hash)? {
            if let Err(e) = state.users.update_last_login(&user.username).await {
                // ログイン自体は成功として扱う
                tracing::warn!("Failed to update last login: {}", e);
            }

            let token = state
                .sessions
                .create(&user.username, user.role, state.session_ttl)
                .await;
            state
                .access_log
                .append(AccessLogEntry::now(
                    &user.username,
                    AccessAction::LoginSuccess,
                    None,
                    ip,
                ))
                .await?;

            let cookie = build_session_cookie(
                &token,
                state.session_ttl.num_seconds(),
                is_request_secure(&headers),
            );
            let mut response_headers = HeaderMap::new();
            response_headers.insert(header::SET_COOKIE, cookie.parse().unwrap());

            tracing::info!("Login success: {}", user.username);
            return Ok((
                response_headers,
                Json(StatusResponse::ok("Login successful")),
            )
                .into_response());
        }
    }

    state
        .access_log
        .append(AccessLogEntry::now(
            &form.username,
            AccessAction::LoginFailed,
            None,
            ip,
        ))
        .await?;

    tracing::info!("Login failed: {}", form.username);
    Ok(Json(StatusResponse::failed("Invalid username or password")).into_response())
}

/// GET /logout - ログアウト
///
/// セッションが存在すれば破棄してlogoutを記録する。
/// セッションの有無にかかわらずCookie削除ヘッダーを返す。
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
    connect_info: Option<ConnectInfo<SocketAddr>>,
) -> Result<Response, AppError> {
    if let Some(token) = extract_session_cookie(&headers) {
        if let Some(session) = state.sessions.remove(&token).await {
            let ip = client_ip(&headers, connect_info.map(|ConnectInfo(addr)| addr));
            state
                .access_log
                .append(AccessLogEntry::now(
                    &session.username,
                    AccessAction::Logout,
                    None,
                    ip,
                ))
                .await?;
            tracing::info!("Logout: {}", session.username);
        }
    }

    let mut response_headers = HeaderMap::new();
    response_headers.insert(
        header::SET_COOKIE,
        clear_session_cookie(is_request_secure(&headers))
            .parse()
            .unwrap(),
    );
    Ok((response_headers, Json(StatusResponse::ok("Logged out"))).into_response())
}

/// GET /check_auth - 認証状態確認
///
/// ログは記録しない。
pub async fn check_auth(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Json<CheckAuthResponse> {
    match current_session(&state, &headers).await {
        Some(session) => Json(CheckAuthResponse {
            authenticated: true,
            username: Some(session.username),
            role: Some(session.role),
        }),
        None => Json(CheckAuthResponse {
            authenticated: false,
            username: None,
            role: None,
        }),
    }
}
