use serde::{Deserialize, Serialize};

pub mod error;
pub mod query;
pub mod validation;

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// 列表默认每页条数
pub const DEFAULT_PAGE_SIZE: u32 = 10;
/// 每页条数可选项
pub const PAGE_SIZE_CHOICES: [u32; 3] = [5, 10, 25];
/// 密码最小长度（注册 / 重置密码共用）
pub const MIN_PASSWORD_LEN: usize = 6;

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 服务端托管的员工记录，id 由服务端分配且不可变。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub department: String,
    pub phone: String,
}

/// 员工表单内容（创建 / 更新请求体，不含 id）。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeDraft {
    pub name: String,
    pub email: String,
    pub department: String,
    pub phone: String,
}

/// 列表接口返回的一页数据，整页替换视图的上一页缓存。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeePage {
    pub employees: Vec<Employee>,
    pub total: u64,
    pub page: u32,
}

impl EmployeePage {
    /// 从当前页移除一行（删除成功后的本地失效处理）。
    ///
    /// 返回该 id 是否存在于当前页。
    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.employees.len();
        self.employees.retain(|e| e.id != id);
        if self.employees.len() < before {
            self.total = self.total.saturating_sub(1);
            true
        } else {
            false
        }
    }
}

// =========================================================
// 认证协议 (Auth Wire Types)
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// 登录成功响应。`user` 与 `message` 为服务端附带信息，可能缺省。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub user: Option<UserInfo>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordResetRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordReset {
    pub token: String,
    pub password: String,
}

/// 仅表示成功、无有效负载的应答（可带提示信息）。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: Option<String>,
}

/// 服务端错误响应体 `{ "error": "..." }`。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================
    // 辅助函数
    // =========================================================

    fn employee(id: i64, name: &str) -> Employee {
        Employee {
            id,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            department: "HR".to_string(),
            phone: "1234567890".to_string(),
        }
    }

    // =========================================================
    // EmployeePage::remove
    // =========================================================

    #[test]
    fn remove_drops_row_and_decrements_total() {
        let mut page = EmployeePage {
            employees: vec![employee(1, "Alice"), employee(2, "Bob")],
            total: 2,
            page: 1,
        };

        assert!(page.remove(1));
        assert_eq!(page.employees.len(), 1);
        assert_eq!(page.employees[0].id, 2);
        assert_eq!(page.total, 1);
    }

    #[test]
    fn remove_unknown_id_is_a_noop() {
        let mut page = EmployeePage {
            employees: vec![employee(2, "Bob")],
            total: 5,
            page: 1,
        };

        assert!(!page.remove(99));
        assert_eq!(page.employees.len(), 1);
        assert_eq!(page.total, 5);
    }

    // =========================================================
    // 协议形状 (Wire Shapes)
    // =========================================================

    #[test]
    fn employee_page_matches_server_shape() {
        let json = r#"{
            "employees": [
                {"id": 1, "name": "Alice Smith", "email": "alice@example.com",
                 "department": "HR", "phone": "1234567890"}
            ],
            "total": 42,
            "page": 3
        }"#;

        let page: EmployeePage = serde_json::from_str(json).unwrap();
        assert_eq!(page.total, 42);
        assert_eq!(page.page, 3);
        assert_eq!(page.employees[0].name, "Alice Smith");
    }

    #[test]
    fn login_response_tolerates_missing_user_block() {
        let minimal: LoginResponse = serde_json::from_str(r#"{"token": "abc"}"#).unwrap();
        assert_eq!(minimal.token, "abc");
        assert!(minimal.user.is_none());

        let full: LoginResponse = serde_json::from_str(
            r#"{"message": "Login successful", "token": "abc",
                "user": {"id": 7, "name": "Alice", "email": "alice@example.com"}}"#,
        )
        .unwrap();
        assert_eq!(full.user.unwrap().name, "Alice");
    }

    #[test]
    fn ack_accepts_empty_object() {
        let ack: Ack = serde_json::from_str("{}").unwrap();
        assert!(ack.message.is_none());

        let ack: Ack = serde_json::from_str(r#"{"message": "Employee deleted"}"#).unwrap();
        assert_eq!(ack.message.as_deref(), Some("Employee deleted"));
    }
}
