//! StaffDeck 前端应用
//!
//! 员工名录的浏览器管理端，采用 Context-Driven 架构：
//! - `web::route` / `web::router`: 路由定义与路由服务（含认证守卫）
//! - `session`: 会话令牌槽位与认证状态
//! - `api`: 后端 HTTP 客户端（认证 + 员工 CRUD）
//! - `components`: 视图层

mod config;
mod session;

mod api {
    mod auth;
    mod client;
    mod employees;

    pub use self::client::ApiClient;
}

mod components {
    pub mod confirm_dialog;
    pub mod employee_form;
    pub mod employee_list;
    pub mod forgot_password;
    mod icons;
    pub mod login;
    pub mod register;
    pub mod reset_password;
}

// 原生 Web API 封装：所有 window.history / location 访问集中于此。
pub(crate) mod web {
    pub mod route;
    pub mod router;
}

use leptos::prelude::*;

use crate::components::employee_form::EmployeeFormPage;
use crate::components::employee_list::EmployeeListPage;
use crate::components::forgot_password::ForgotPasswordPage;
use crate::components::login::LoginPage;
use crate::components::register::RegisterPage;
use crate::components::reset_password::ResetPasswordPage;
use crate::session::AuthContext;
use crate::web::route::AppRoute;
use crate::web::router::{Router, RouterOutlet};

/// 路由匹配函数：AppRoute -> 视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::ForgotPassword => view! { <ForgotPasswordPage /> }.into_any(),
        AppRoute::ResetPassword { token } => {
            view! { <ResetPasswordPage token=token /> }.into_any()
        }
        AppRoute::Employees => view! { <EmployeeListPage /> }.into_any(),
        AppRoute::EmployeeAdd => view! { <EmployeeFormPage /> }.into_any(),
        AppRoute::EmployeeEdit(id) => view! { <EmployeeFormPage employee_id=id /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 认证上下文：启动时从 LocalStorage 恢复令牌存在性
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);

    // 2. 认证信号注入路由服务，实现守卫与认证系统解耦
    let is_authenticated = auth_ctx.is_authenticated_signal();

    view! {
        <Router is_authenticated=is_authenticated>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
