use gloo_net::http::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use staffdeck_shared::ErrorBody;
use staffdeck_shared::error::ApiError;

use crate::config;
use crate::session::SessionStore;

/// 后端 API 客户端
///
/// 持有基地址与会话槽位。令牌在每次请求发出前从槽位读取；
/// 没有令牌时请求照常发出，由服务端裁决是否拒绝。
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
    session: SessionStore,
}

impl ApiClient {
    pub fn new(session: SessionStore) -> Self {
        Self::with_base_url(config::api_base_url(), session)
    }

    pub fn with_base_url(base_url: impl Into<String>, session: SessionStore) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, session }
    }

    pub(super) fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// 附加 Bearer 凭据（若令牌存在）。
    pub(super) fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }
}

/// 传输层失败 → [`ApiError::Network`]。
pub(super) fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

/// 统一的响应解码：2xx 解析为 `T`，其余按状态码与响应体中的
/// `error` 文案归类。
pub(super) async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    } else {
        let status = response.status();
        let message = response.json::<ErrorBody>().await.ok().map(|b| b.error);
        Err(ApiError::from_status(status, message))
    }
}
