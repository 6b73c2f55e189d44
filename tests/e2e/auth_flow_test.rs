//! 認証フローE2Eテスト
//!
//! ログイン → 認証確認 → ファイルアクセス記録 → ログ閲覧 → ログアウトの一連の流れ

use axum::http::StatusCode;
use fileportal::common::auth::UserRole;

use crate::support::portal::{create_test_portal, create_user, get_json, login, post_form};

#[tokio::test]
async fn test_complete_auth_flow() {
    let portal = create_test_portal().await;
    create_user(&portal.state, "admin", "password123", UserRole::Admin).await;

    // Step 1: ログイン
    let (status, cookie, body) = login(&portal.app, "admin", "password123").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let cookie = cookie.expect("session cookie");

    // Step 2: 認証確認
    let (_, _, check) = get_json(&portal.app, "/check_auth", Some(&cookie)).await;
    assert_eq!(check["authenticated"], true);
    assert_eq!(check["username"], "admin");
    assert_eq!(check["role"], "admin");

    // Step 3: ファイルアクセスを記録
    let (_, record) = post_form(
        &portal.app,
        "/log_file_access",
        "filename=movie.mp4",
        Some(&cookie),
    )
    .await;
    assert_eq!(record["success"], true);

    // Step 4: 管理者としてログを閲覧（新しい順）
    let (_, _, logs_body) = get_json(&portal.app, "/access_logs", Some(&cookie)).await;
    assert_eq!(logs_body["success"], true);
    let logs = logs_body["logs"].as_array().unwrap();
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0]["action"], "file_access");
    assert_eq!(logs[0]["filename"], "movie.mp4");
    assert_eq!(logs[1]["action"], "login_success");

    // Step 5: ログアウト
    let (_, set_cookie, logout_body) =
        get_json(&portal.app, "/logout", Some(&cookie)).await;
    assert_eq!(logout_body["success"], true);
    assert!(set_cookie.unwrap().contains("Max-Age=0"));

    // Step 6: 破棄済みセッションでは何も見えない
    let (_, _, check) = get_json(&portal.app, "/check_auth", Some(&cookie)).await;
    assert_eq!(check["authenticated"], false);

    let (_, _, denied) = get_json(&portal.app, "/access_logs", Some(&cookie)).await;
    assert_eq!(denied["success"], false);
}

#[tokio::test]
async fn test_non_admin_flow_cannot_read_logs() {
    let portal = create_test_portal().await;
    create_user(&portal.state, "bob", "password123", UserRole::User).await;

    let (_, cookie, _) = login(&portal.app, "bob", "password123").await;
    let cookie = cookie.expect("session cookie");

    // 一般ユーザーでもファイルアクセスは記録できる
    let (_, record) = post_form(
        &portal.app,
        "/log_file_access",
        "filename=doc.pdf",
        Some(&cookie),
    )
    .await;
    assert_eq!(record["success"], true);

    // ログ閲覧はadmin専用
    let (_, _, denied) = get_json(&portal.app, "/access_logs", Some(&cookie)).await;
    assert_eq!(denied["success"], false);
}

#[tokio::test]
async fn test_two_sessions_are_independent() {
    let portal = create_test_portal().await;
    create_user(&portal.state, "admin", "password123", UserRole::Admin).await;
    create_user(&portal.state, "bob", "password456", UserRole::User).await;

    let (_, admin_cookie, _) = login(&portal.app, "admin", "password123").await;
    let (_, bob_cookie, _) = login(&portal.app, "bob", "password456").await;
    let admin_cookie = admin_cookie.unwrap();
    let bob_cookie = bob_cookie.unwrap();

    // bobがログアウトしてもadminのセッションは生きている
    let _ = get_json(&portal.app, "/logout", Some(&bob_cookie)).await;

    let (_, _, bob_check) = get_json(&portal.app, "/check_auth", Some(&bob_cookie)).await;
    assert_eq!(bob_check["authenticated"], false);

    let (_, _, admin_check) =
        get_json(&portal.app, "/check_auth", Some(&admin_cookie)).await;
    assert_eq!(admin_check["authenticated"], true);
    assert_eq!(admin_check["username"], "admin");
}
