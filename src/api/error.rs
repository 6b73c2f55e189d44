//! APIエラーレスポンス型
//!
//! axum用の共通エラーハンドリング

use crate::common::error::PortalError;
use axum::{response::IntoResponse, Json};
use serde_json::json;

/// Axum用のエラーレスポンス型
#[derive(Debug)]
pub struct AppError(pub PortalError);

impl From<PortalError> for AppError {
    fn from(err: PortalError) -> Self {
        AppError(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        // レスポンスにはexternal_message()のみ載せ、詳細はログに出す
        tracing::error!("Request failed: {}", self.0);
        let status = self.0.status_code();
        let payload = json!({
            "success": false,
            "message": self.0.external_message(),
        });
        (status, Json(payload)).into_response()
    }
}
