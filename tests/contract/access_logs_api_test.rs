//! アクセスログAPI契約テスト
//!
//! /access_logs のadminゲートと /log_file_access の記録を検証する

use axum::http::StatusCode;
use fileportal::common::auth::UserRole;
use fileportal::store::access_log::{AccessAction, AccessLogEntry};
use fileportal::store::traits::AccessLogStore;

use crate::support::portal::{create_test_portal, create_user, get_json, login, post_form};

#[tokio::test]
async fn access_logs_requires_login() {
    let portal = create_test_portal().await;

    let (status, _, body) = get_json(&portal.app, "/access_logs", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert!(body.get("logs").is_none());
}

#[tokio::test]
async fn access_logs_rejects_non_admin() {
    let portal = create_test_portal().await;
    create_user(&portal.state, "viewer", "pw123456", UserRole::User).await;
    let (_, cookie, _) = login(&portal.app, "viewer", "pw123456").await;

    let (status, _, body) =
        get_json(&portal.app, "/access_logs", cookie.as_deref()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert!(body.get("logs").is_none());
}

#[tokio::test]
async fn access_logs_returns_entries_for_admin() {
    let portal = create_test_portal().await;
    create_user(&portal.state, "admin", "pw123456", UserRole::Admin).await;

    // 失敗ログインを1件仕込んでからログインする
    let _ = login(&portal.app, "admin", "wrong").await;
    let (_, cookie, _) = login(&portal.app, "admin", "pw123456").await;

    let (status, _, body) =
        get_json(&portal.app, "/access_logs", cookie.as_deref()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let logs = body["logs"].as_array().unwrap();
    assert_eq!(logs.len(), 2);
    // 新しい順: login_success が先頭
    assert_eq!(logs[0]["action"], "login_success");
    assert_eq!(logs[1]["action"], "login_failed");
}

#[tokio::test]
async fn access_logs_caps_response_at_50_entries() {
    let portal = create_test_portal().await;
    create_user(&portal.state, "admin", "pw123456", UserRole::Admin).await;

    for i in 0..60 {
        portal
            .state
            .access_log
            .append(AccessLogEntry::now(
                &format!("user{}", i),
                AccessAction::FileAccess,
                Some(format!("file{}.txt", i)),
                "127.0.0.1".to_string(),
            ))
            .await
            .unwrap();
    }

    let (_, cookie, _) = login(&portal.app, "admin", "pw123456").await;
    let (_, _, body) = get_json(&portal.app, "/access_logs", cookie.as_deref()).await;

    assert_eq!(body["success"], true);
    assert_eq!(body["logs"].as_array().unwrap().len(), 50);
}

#[tokio::test]
async fn log_file_access_appends_entry() {
    let portal = create_test_portal().await;
    create_user(&portal.state, "alice", "pw123456", UserRole::User).await;
    let (_, cookie, _) = login(&portal.app, "alice", "pw123456").await;

    let (status, body) = post_form(
        &portal.app,
        "/log_file_access",
        "filename=report.pdf",
        cookie.as_deref(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let entries = portal.state.access_log.recent(10).await.unwrap();
    assert_eq!(entries[0].action.as_str(), "file_access");
    assert_eq!(entries[0].username, "alice");
    assert_eq!(entries[0].filename.as_deref(), Some("report.pdf"));
}

#[tokio::test]
async fn log_file_access_requires_login() {
    let portal = create_test_portal().await;

    let (status, body) = post_form(
        &portal.app,
        "/log_file_access",
        "filename=report.pdf",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);

    let entries = portal.state.access_log.recent(10).await.unwrap();
    assert!(entries.is_empty());
}
