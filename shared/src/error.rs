//! API 错误分类
//!
//! 客户端视角的远端调用错误。HTTP 状态码与响应体中的
//! `{ "error": "..." }` 文案在这里归类；各视图通过 [`ApiError::notice`]
//! 取得展示文案——服务端给出具体 message 时原样显示，否则退回
//! 按类别的通用文案。

use std::fmt;

use serde::{Deserialize, Serialize};

/// 远端调用失败的分类结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiError {
    /// 401/403：凭据被拒（不区分具体原因）
    Unauthorized(Option<String>),
    /// 404：目标记录不存在（可能被并发删除）
    NotFound(Option<String>),
    /// 409：资源冲突（如重复注册）
    Conflict(Option<String>),
    /// 其他非 2xx 响应
    Server { status: u16, message: Option<String> },
    /// 传输层失败，没有收到响应
    Network(String),
    /// 响应体无法解析
    Decode(String),
}

impl ApiError {
    /// 按状态码归类。`message` 取自响应体的 `error` 字段（若有）。
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        match status {
            401 | 403 => ApiError::Unauthorized(message),
            404 => ApiError::NotFound(message),
            409 => ApiError::Conflict(message),
            _ => ApiError::Server { status, message },
        }
    }

    /// 会话是否已失效（被拒请求是唯一的过期信号）。
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound(_))
    }

    /// 用户可见提示：优先原样展示服务端 message，否则给出
    /// 按类别的通用文案。
    pub fn notice(&self) -> String {
        fn or_generic(message: &Option<String>, fallback: &str) -> String {
            message.clone().unwrap_or_else(|| fallback.to_string())
        }

        match self {
            ApiError::Unauthorized(m) => or_generic(m, "Authentication failed"),
            ApiError::NotFound(m) => or_generic(m, "The requested record was not found"),
            ApiError::Conflict(m) => or_generic(m, "A record with these details already exists"),
            ApiError::Server { message, .. } => {
                or_generic(message, "The operation failed on the server")
            }
            ApiError::Network(_) => "Network error. Please try again.".to_string(),
            ApiError::Decode(_) => "Unexpected response from the server".to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Unauthorized(_) => write!(f, "unauthorized"),
            ApiError::NotFound(_) => write!(f, "not found"),
            ApiError::Conflict(_) => write!(f, "conflict"),
            ApiError::Server { status, .. } => write!(f, "server error (status {})", status),
            ApiError::Network(e) => write!(f, "network error: {}", e),
            ApiError::Decode(e) => write!(f, "decode error: {}", e),
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================
    // 状态码归类
    // =========================================================

    #[test]
    fn classifies_by_status_code() {
        assert!(ApiError::from_status(401, None).is_unauthorized());
        assert!(ApiError::from_status(403, None).is_unauthorized());
        assert!(ApiError::from_status(404, None).is_not_found());
        assert_eq!(
            ApiError::from_status(409, None),
            ApiError::Conflict(None)
        );
        assert_eq!(
            ApiError::from_status(500, None),
            ApiError::Server {
                status: 500,
                message: None
            }
        );
    }

    // =========================================================
    // 提示文案
    // =========================================================

    #[test]
    fn server_message_is_shown_verbatim() {
        let err = ApiError::from_status(400, Some("User already exists".to_string()));
        assert_eq!(err.notice(), "User already exists");
    }

    #[test]
    fn missing_message_falls_back_to_generic_notice() {
        assert_eq!(
            ApiError::from_status(404, None).notice(),
            "The requested record was not found"
        );
        assert_eq!(
            ApiError::Network("fetch failed".to_string()).notice(),
            "Network error. Please try again."
        );
    }
}
