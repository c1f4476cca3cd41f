//! 认证相关接口
//!
//! 登录 / 注册 / 注销 / 找回与重置密码。除注销外均为匿名调用。

use gloo_net::http::Request;
use serde::Serialize;
use staffdeck_shared::error::ApiError;
use staffdeck_shared::{Ack, LoginRequest, LoginResponse, PasswordReset, PasswordResetRequest, RegisterRequest};

use super::client::{ApiClient, decode, transport};

/// 空请求体 `{}`
#[derive(Serialize)]
struct Empty {}

impl ApiClient {
    /// POST /login
    ///
    /// 凭据错误时服务端返回 401，归类为 [`ApiError::Unauthorized`]。
    pub async fn login(&self, email: String, password: String) -> Result<LoginResponse, ApiError> {
        let body = LoginRequest { email, password };
        let response = Request::post(&self.url("/login"))
            .json(&body)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        decode(response).await
    }

    /// POST /register
    ///
    /// 邮箱已被占用时服务端以 `error` 文案拒绝。
    pub async fn register(
        &self,
        name: String,
        email: String,
        password: String,
    ) -> Result<Ack, ApiError> {
        let body = RegisterRequest {
            name,
            email,
            password,
        };
        let response = Request::post(&self.url("/register"))
            .json(&body)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        decode(response).await
    }

    /// POST /logout（携带 Bearer 凭据）
    pub async fn logout(&self) -> Result<Ack, ApiError> {
        let response = self
            .authorize(Request::post(&self.url("/logout")))
            .json(&Empty {})
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        decode(response).await
    }

    /// POST /password-reset-request
    pub async fn request_password_reset(&self, email: String) -> Result<Ack, ApiError> {
        let body = PasswordResetRequest { email };
        let response = Request::post(&self.url("/password-reset-request"))
            .json(&body)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        decode(response).await
    }

    /// POST /password-reset
    ///
    /// 令牌过期或未知时服务端以 `error` 文案拒绝，视图原样展示。
    pub async fn reset_password(&self, token: String, password: String) -> Result<Ack, ApiError> {
        let body = PasswordReset { token, password };
        let response = Request::post(&self.url("/password-reset"))
            .json(&body)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        decode(response).await
    }
}
