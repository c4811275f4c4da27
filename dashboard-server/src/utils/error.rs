//! 统一错误处理
//!
//! 提供应用级错误类型和响应结构：
//! - [`AppError`] - 应用错误枚举
//! - [`AppResponse`] - API 响应结构
//!
//! # 错误码规范
//!
//! | 错误码 | HTTP | 说明 |
//! |--------|------|------|
//! | E1000 | 500 | 内部错误 |
//! | E1001 | 400 | 无效请求 |
//! | E1002 | 401 | 未登录 |
//! | E1003 | 403 | 无权限 |
//! | E1004 | 404 | 资源不存在 |
//! | E1005 | 422 | 验证失败 |
//! | E1006 | 409 | 资源冲突 |
//! | E1007 | 401 | 令牌过期 |
//! | E1008 | 401 | 无效令牌 |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::db::RepoError;

/// API 错误响应结构
///
/// ```json
/// {
///   "code": "E1004",
///   "message": "Event evt-1 not found"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct AppResponse<T> {
    /// 错误码
    pub code: String,
    /// 消息
    pub message: String,
    /// 响应数据
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// 追踪 ID (可选)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
}

/// 应用错误枚举
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== 认证错误 (401/403) ==========
    #[error("Authentication required")]
    /// 未登录 (401)
    Unauthorized,

    #[error("Token expired")]
    /// 令牌过期 (401)
    TokenExpired,

    #[error("Invalid token: {0}")]
    /// 无效令牌 (401)
    InvalidToken(String),

    #[error("Permission denied: {0}")]
    /// 无权限 (403)
    Forbidden(String),

    // ========== 业务逻辑错误 (4xx) ==========
    #[error("Resource not found: {0}")]
    /// 资源不存在 (404)
    NotFound(String),

    #[error("Resource already exists: {0}")]
    /// 资源冲突 (409)
    Conflict(String),

    #[error("Validation failed: {0}")]
    /// 验证失败 (422)
    Validation(String),

    #[error("Invalid request: {0}")]
    /// 无效请求 (400)
    BadRequest(String),

    // ========== 系统错误 (5xx) ==========
    #[error("Internal server error: {0}")]
    /// 内部错误 (500)
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // Authentication errors (401)
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "E1002", "Please login first"),
            AppError::TokenExpired => (StatusCode::UNAUTHORIZED, "E1007", "Token expired"),
            AppError::InvalidToken(_) => (StatusCode::UNAUTHORIZED, "E1008", "Invalid token"),

            // Authorization errors (403)
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, "E1003", msg.as_str()),

            // Not found (404)
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "E1004", msg.as_str()),

            // Conflict (409)
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "E1006", msg.as_str()),

            // Validation (422)
            AppError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, "E1005", msg.as_str()),

            // Invalid request (400)
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "E1001", msg.as_str()),

            // Internal errors (500)
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "E1000",
                    "Internal server error",
                )
            }
        };

        let body = Json(AppResponse::<()> {
            code: code.to_string(),
            message: message.to_string(),
            data: None,
            trace_id: None, // 单租户场景不需要 trace_id
        });

        (status, body).into_response()
    }
}

impl From<RepoError> for AppError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Duplicate(msg) => AppError::Conflict(msg),
            RepoError::Validation(msg) => AppError::Validation(msg),
            RepoError::Storage(msg) => {
                error!(target: "storage", error = %msg, "Storage error occurred");
                AppError::Internal(msg)
            }
        }
    }
}

// ========== Helper Constructors ==========

impl AppError {
    pub fn unauthorized() -> Self {
        Self::Unauthorized
    }

    pub fn token_expired() -> Self {
        Self::TokenExpired
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn invalid_token(msg: impl Into<String>) -> Self {
        Self::InvalidToken(msg.into())
    }

    /// Create an invalid credentials error with unified message
    /// Used to prevent username enumeration during login
    pub fn invalid_credentials() -> Self {
        Self::BadRequest("Invalid username or password".to_string())
    }
}

// ========== Helper functions ==========

/// Create a successful response
pub fn ok<T: Serialize>(data: T) -> Json<AppResponse<T>> {
    Json(AppResponse {
        code: "0".to_string(),
        message: "Success".to_string(),
        data: Some(data),
        trace_id: None,
    })
}

/// Create a successful response with custom message
pub fn ok_with_message<T: Serialize>(data: T, message: impl Into<String>) -> Json<AppResponse<T>> {
    Json(AppResponse {
        code: "0".to_string(),
        message: message.into(),
        data: Some(data),
        trace_id: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_and_status() {
        let cases: Vec<(AppError, StatusCode)> = vec![
            (AppError::Unauthorized, StatusCode::UNAUTHORIZED),
            (AppError::TokenExpired, StatusCode::UNAUTHORIZED),
            (
                AppError::InvalidToken("bad".to_string()),
                StatusCode::UNAUTHORIZED,
            ),
            (
                AppError::Forbidden("no".to_string()),
                StatusCode::FORBIDDEN,
            ),
            (
                AppError::NotFound("gone".to_string()),
                StatusCode::NOT_FOUND,
            ),
            (AppError::Conflict("dup".to_string()), StatusCode::CONFLICT),
            (
                AppError::Validation("bad".to_string()),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                AppError::BadRequest("bad".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::Internal("boom".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }

    #[test]
    fn test_repo_error_mapping() {
        let err: AppError = RepoError::NotFound("Event e1 not found".to_string()).into();
        assert!(matches!(err, AppError::NotFound(_)));

        let err: AppError = RepoError::Validation("bad".to_string()).into();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_ok_envelope_shape() {
        let body = ok(42);
        let json = serde_json::to_value(&body.0).unwrap();
        assert_eq!(json["code"], "0");
        assert_eq!(json["message"], "Success");
        assert_eq!(json["data"], 42);
        // trace_id is omitted, not null
        assert!(json.get("trace_id").is_none());
    }
}
