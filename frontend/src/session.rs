//! 会话管理
//!
//! 会话令牌是客户端唯一的持久化状态：登录时写入，注销时清除，
//! 每次需要鉴权的请求发出前读取。令牌槽位通过 [`SessionStore`]
//! 显式传递，不做任何客户端过期判断——被拒绝的请求是唯一的
//! 过期信号。

use leptos::prelude::*;

/// LocalStorage 中令牌的固定键名
const TOKEN_STORAGE_KEY: &str = "staffdeck_token";

/// 浏览器持久化的会话令牌槽位。
///
/// read / write / clear 是它仅有的接口。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStore;

impl SessionStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    /// 读取当前令牌，不存在或存储不可用时为 `None`。
    pub fn token(&self) -> Option<String> {
        Self::storage()?.get_item(TOKEN_STORAGE_KEY).ok()?
    }

    /// 写入令牌，返回是否成功。
    pub fn store(&self, token: &str) -> bool {
        Self::storage()
            .and_then(|s| s.set_item(TOKEN_STORAGE_KEY, token).ok())
            .is_some()
    }

    /// 清除令牌，返回是否成功。
    pub fn clear(&self) -> bool {
        Self::storage()
            .and_then(|s| s.remove_item(TOKEN_STORAGE_KEY).ok())
            .is_some()
    }
}

/// 认证状态
#[derive(Clone, Default)]
pub struct AuthState {
    /// 是否已认证（以令牌存在性为准）
    pub is_authenticated: bool,
}

/// 认证上下文
///
/// 包含读写信号与令牌槽位，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// 认证状态（只读）
    pub state: ReadSignal<AuthState>,
    /// 设置认证状态（写入）
    set_state: WriteSignal<AuthState>,
    /// 令牌槽位，API 客户端按请求读取
    pub session: SessionStore,
}

impl AuthContext {
    /// 创建认证上下文，从 LocalStorage 恢复令牌存在性。
    pub fn new() -> Self {
        let session = SessionStore;
        let (state, set_state) = signal(AuthState {
            is_authenticated: session.token().is_some(),
        });
        Self {
            state,
            set_state,
            session,
        }
    }

    /// 认证状态信号（用于路由守卫注入）。
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().is_authenticated)
    }

    /// 登录成功：先写入令牌，再翻转认证信号。
    pub fn login(&self, token: &str) {
        self.session.store(token);
        self.set_state.update(|s| s.is_authenticated = true);
    }

    /// 注销：先清除令牌，再翻转信号。顺序保证随后的任何读取
    /// 都看不到旧令牌。
    pub fn logout(&self) {
        self.session.clear();
        self.set_state.update(|s| s.is_authenticated = false);
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}
