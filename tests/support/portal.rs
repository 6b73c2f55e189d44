//! テスト用のポータル構築とHTTPリクエストヘルパー

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use chrono::Utc;
use fileportal::auth::session::SessionStore;
use fileportal::common::auth::{User, UserRole};
use fileportal::store::access_log::JsonAccessLogStore;
use fileportal::store::traits::UserStore;
use fileportal::store::users::JsonUserStore;
use fileportal::{api, AppState};
use std::sync::Arc;
use tower::ServiceExt;

/// 一時ディレクトリ上のJSONストアで動くテスト用ポータル
#[allow(dead_code)]
pub struct TestPortal {
    /// アプリケーションルーター
    pub app: Router,
    /// 共有状態（ストアへの直接アクセス用）
    pub state: AppState,
    _dir: tempfile::TempDir,
}

/// テスト用ポータルを作成する
pub async fn create_test_portal() -> TestPortal {
    let dir = tempfile::tempdir().expect("create temp dir");
    let users = Arc::new(JsonUserStore::new(dir.path().join("users.json")));
    let access_log = Arc::new(JsonAccessLogStore::new(dir.path().join("access_log.json")));
    let state = AppState {
        users,
        access_log,
        sessions: SessionStore::new(),
        session_ttl: chrono::Duration::hours(24),
    };
    TestPortal {
        app: api::create_app(state.clone()),
        state,
        _dir: dir,
    }
}

/// bcryptハッシュ済みパスワードでユーザーを登録する
pub async fn create_user(state: &AppState, username: &str, password: &str, role: UserRole) {
    let password_hash =
        fileportal::auth::password::hash_password(password).expect("hash password");
    let user = User {
        username: username.to_string(),
        password_hash,
        role,
        created_at: Utc::now(),
        last_login: None,
    };
    state.users.upsert(&user).await.expect("create user");
}

/// POST /login を実行し、(ステータス, セッションCookie, ボディ) を返す
pub async fn login(
    app: &Router,
    username: &str,
    password: &str,
) -> (StatusCode, Option<String>, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/login")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(format!(
                    "username={}&password={}",
                    username, password
                )))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|value| value.to_string());
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap();
    (status, cookie, json)
}

/// GETリクエストを実行し、(ステータス, Set-Cookie, ボディ) を返す
pub async fn get_json(
    app: &Router,
    uri: &str,
    cookie: Option<&str>,
) -> (StatusCode, Option<String>, serde_json::Value) {
    let mut builder = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let response = app
        .clone()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string());
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap();
    (status, set_cookie, json)
}

/// フォームをPOSTし、(ステータス, ボディ) を返す
pub async fn post_form(
    app: &Router,
    uri: &str,
    form_body: &str,
    cookie: Option<&str>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let response = app
        .clone()
        .oneshot(builder.body(Body::from(form_body.to_string())).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap();
    (status, json)
}
