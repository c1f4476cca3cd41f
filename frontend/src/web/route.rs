//! 路由定义模块 - 领域模型
//!
//! 纯粹的业务逻辑层，不依赖 DOM 或 web_sys。
//! 定义应用的全部路由、路径解析与守卫表。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 登录页面（默认路由）
    #[default]
    Login,
    /// 注册页面
    Register,
    /// 找回密码
    ForgotPassword,
    /// 重置密码，令牌来自 `?token=` 查询参数
    ResetPassword { token: String },
    /// 员工列表（需要认证）
    Employees,
    /// 新增员工（需要认证）
    EmployeeAdd,
    /// 编辑员工（需要认证）
    EmployeeEdit(i64),
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path（可含查询串）解析为路由枚举。
    pub fn from_path(path: &str) -> Self {
        let (path, query) = match path.split_once('?') {
            Some((p, q)) => (p, Some(q)),
            None => (path, None),
        };
        let path = if path.len() > 1 {
            path.trim_end_matches('/')
        } else {
            path
        };

        match path {
            "" | "/" | "/login" => Self::Login,
            "/register" => Self::Register,
            "/forgot-password" => Self::ForgotPassword,
            "/reset-password" => Self::ResetPassword {
                token: query_param(query, "token").unwrap_or_default(),
            },
            "/employees" => Self::Employees,
            "/add" => Self::EmployeeAdd,
            other => match other.strip_prefix("/employee/") {
                Some(id) => match id.parse::<i64>() {
                    Ok(id) => Self::EmployeeEdit(id),
                    Err(_) => Self::NotFound,
                },
                None => Self::NotFound,
            },
        }
    }

    /// 路由对应的 URL path。
    pub fn to_path(&self) -> String {
        match self {
            Self::Login => "/login".to_string(),
            Self::Register => "/register".to_string(),
            Self::ForgotPassword => "/forgot-password".to_string(),
            Self::ResetPassword { token } if token.is_empty() => "/reset-password".to_string(),
            Self::ResetPassword { token } => format!("/reset-password?token={}", token),
            Self::Employees => "/employees".to_string(),
            Self::EmployeeAdd => "/add".to_string(),
            Self::EmployeeEdit(id) => format!("/employee/{}", id),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// **守卫表：员工相关路由需要认证。**
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Self::Employees | Self::EmployeeAdd | Self::EmployeeEdit(_)
        )
    }

    /// 已认证用户是否应离开此路由（登录页）。
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login)
    }

    /// 守卫拦截后的重定向目标。
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// 认证成功后的落地页。
    pub fn auth_success_redirect() -> Self {
        Self::Employees
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

/// 从查询串中取单个参数值（重置令牌为 URL-safe 字符，无需解码）。
fn query_param(query: Option<&str>, name: &str) -> Option<String> {
    query?.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == name && !value.is_empty()).then(|| value.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================
    // 路径解析
    // =========================================================

    #[test]
    fn parses_known_paths() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/login"), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/register"), AppRoute::Register);
        assert_eq!(
            AppRoute::from_path("/forgot-password"),
            AppRoute::ForgotPassword
        );
        assert_eq!(AppRoute::from_path("/employees"), AppRoute::Employees);
        assert_eq!(AppRoute::from_path("/add"), AppRoute::EmployeeAdd);
        assert_eq!(AppRoute::from_path("/employee/7"), AppRoute::EmployeeEdit(7));
        assert_eq!(AppRoute::from_path("/unknown"), AppRoute::NotFound);
    }

    #[test]
    fn reset_password_token_comes_from_query() {
        assert_eq!(
            AppRoute::from_path("/reset-password?token=abc123"),
            AppRoute::ResetPassword {
                token: "abc123".to_string()
            }
        );
        // 缺失令牌仍进入页面，由提交校验拦住
        assert_eq!(
            AppRoute::from_path("/reset-password"),
            AppRoute::ResetPassword {
                token: String::new()
            }
        );
    }

    #[test]
    fn non_numeric_employee_id_is_not_found() {
        assert_eq!(AppRoute::from_path("/employee/abc"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/employee/"), AppRoute::NotFound);
    }

    #[test]
    fn round_trips_through_to_path() {
        for route in [
            AppRoute::Login,
            AppRoute::Register,
            AppRoute::ForgotPassword,
            AppRoute::Employees,
            AppRoute::EmployeeAdd,
            AppRoute::EmployeeEdit(42),
            AppRoute::ResetPassword {
                token: "tok".to_string(),
            },
        ] {
            assert_eq!(AppRoute::from_path(&route.to_path()), route);
        }
    }

    // =========================================================
    // 守卫表
    // =========================================================

    #[test]
    fn guard_table_protects_employee_routes_only() {
        assert!(AppRoute::Employees.requires_auth());
        assert!(AppRoute::EmployeeAdd.requires_auth());
        assert!(AppRoute::EmployeeEdit(1).requires_auth());

        assert!(!AppRoute::Login.requires_auth());
        assert!(!AppRoute::Register.requires_auth());
        assert!(!AppRoute::ForgotPassword.requires_auth());
        assert!(
            !AppRoute::ResetPassword {
                token: String::new()
            }
            .requires_auth()
        );
    }

    #[test]
    fn auth_redirect_targets() {
        assert_eq!(AppRoute::auth_failure_redirect(), AppRoute::Login);
        assert_eq!(AppRoute::auth_success_redirect(), AppRoute::Employees);
        assert!(AppRoute::Login.should_redirect_when_authenticated());
        assert!(!AppRoute::Employees.should_redirect_when_authenticated());
    }
}
