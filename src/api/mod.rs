//! REST APIハンドラー
//!
//! ログイン、ログアウト、認証確認、アクセスログ

/// 認証API
pub mod auth;

/// アクセスログAPI
pub mod access_log;

/// エラーレスポンス型
pub mod error;

use crate::AppState;
use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

/// アプリケーションルーターを作成
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/login", post(auth::login))
        .route("/logout", get(auth::logout))
        .route("/check_auth", get(auth::check_auth))
        .route("/access_logs", get(access_log::get_access_logs))
        .route("/log_file_access", post(access_log::log_file_access))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// 資格情報付きCORSレイヤー
///
/// 生成ページは別オリジン（file:// や静的配信ポート）から資格情報付きで
/// 呼び出すため、リクエストのOriginをそのまま返す。
/// credentialsとワイルドカードOriginは併用できない。
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}
