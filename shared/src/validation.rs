//! 表单校验规则
//!
//! 所有视图在发起网络请求之前执行的纯校验。校验失败时请求
//! 一律不发出，由视图以提示条展示 `Display` 文案。

use std::fmt;

use crate::{EmployeeDraft, MIN_PASSWORD_LEN};

/// 客户端校验错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// 必填字段为空
    EmptyField(&'static str),
    /// 邮箱不符合 `x@y.z` 形式
    InvalidEmail,
    /// 密码低于最小长度
    PasswordTooShort,
    /// 密码与确认密码不一致（整表规则）
    PasswordMismatch,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyField(_) => write!(f, "All fields are required"),
            ValidationError::InvalidEmail => write!(f, "Invalid email format"),
            ValidationError::PasswordTooShort => write!(
                f,
                "Password must be at least {} characters",
                MIN_PASSWORD_LEN
            ),
            ValidationError::PasswordMismatch => write!(f, "Passwords do not match"),
        }
    }
}

/// 邮箱形式校验：`非空白@非空白.非空白`。
///
/// 唯一性等更强的约束由服务端负责。
pub fn is_valid_email(email: &str) -> bool {
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || local.contains(char::is_whitespace) {
        return false;
    }
    let mut labels = domain.rsplitn(2, '.');
    let (Some(tld), Some(host)) = (labels.next(), labels.next()) else {
        return false;
    };
    !tld.is_empty()
        && !host.is_empty()
        && !domain.contains(char::is_whitespace)
}

fn require(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::EmptyField(field))
    } else {
        Ok(())
    }
}

fn require_email(email: &str) -> Result<(), ValidationError> {
    require(email, "email")?;
    if is_valid_email(email.trim()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

fn require_password(password: &str) -> Result<(), ValidationError> {
    require(password, "password")?;
    if password.len() < MIN_PASSWORD_LEN {
        Err(ValidationError::PasswordTooShort)
    } else {
        Ok(())
    }
}

/// 员工表单：四个字段均非空，邮箱形式正确。
pub fn validate_employee(draft: &EmployeeDraft) -> Result<(), ValidationError> {
    require(&draft.name, "name")?;
    require(&draft.email, "email")?;
    require(&draft.department, "department")?;
    require(&draft.phone, "phone")?;
    require_email(&draft.email)
}

/// 登录表单：邮箱 + 密码必填，邮箱形式正确。
pub fn validate_login(email: &str, password: &str) -> Result<(), ValidationError> {
    require_email(email)?;
    require(password, "password")
}

/// 注册表单：姓名 / 邮箱 / 密码必填，邮箱形式与密码长度受限。
pub fn validate_registration(
    name: &str,
    email: &str,
    password: &str,
) -> Result<(), ValidationError> {
    require(name, "name")?;
    require_email(email)?;
    require_password(password)
}

/// 找回密码表单：仅校验邮箱。
pub fn validate_reset_request(email: &str) -> Result<(), ValidationError> {
    require_email(email)
}

/// 重置密码表单：长度下限 + 两次输入一致（整表规则）。
pub fn validate_password_reset(password: &str, confirm: &str) -> Result<(), ValidationError> {
    require_password(password)?;
    if password != confirm {
        Err(ValidationError::PasswordMismatch)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> EmployeeDraft {
        EmployeeDraft {
            name: "Alice Smith".to_string(),
            email: "alice@example.com".to_string(),
            department: "HR".to_string(),
            phone: "1234567890".to_string(),
        }
    }

    // =========================================================
    // 邮箱形式
    // =========================================================

    #[test]
    fn email_pattern_accepts_simple_addresses() {
        assert!(is_valid_email("alice@example.com"));
        assert!(is_valid_email("a.b+c@sub.domain.org"));
    }

    #[test]
    fn email_pattern_rejects_malformed_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("alice"));
        assert!(!is_valid_email("alice@example"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("alice@.com"));
        assert!(!is_valid_email("alice@example."));
        assert!(!is_valid_email("al ice@example.com"));
        assert!(!is_valid_email("alice@exa mple.com"));
        assert!(!is_valid_email("alice@@example.com"));
    }

    // =========================================================
    // 员工表单
    // =========================================================

    #[test]
    fn employee_draft_requires_every_field() {
        assert!(validate_employee(&draft()).is_ok());

        for field in ["name", "email", "department", "phone"] {
            let mut d = draft();
            match field {
                "name" => d.name.clear(),
                "email" => d.email.clear(),
                "department" => d.department.clear(),
                _ => d.phone.clear(),
            }
            assert_eq!(
                validate_employee(&d),
                Err(ValidationError::EmptyField(field))
            );
        }
    }

    #[test]
    fn employee_draft_rejects_bad_email() {
        let mut d = draft();
        d.email = "not-an-email".to_string();
        assert_eq!(validate_employee(&d), Err(ValidationError::InvalidEmail));
    }

    // =========================================================
    // 认证表单
    // =========================================================

    #[test]
    fn registration_enforces_password_length() {
        assert_eq!(
            validate_registration("Alice", "alice@example.com", "short"),
            Err(ValidationError::PasswordTooShort)
        );
        assert!(validate_registration("Alice", "alice@example.com", "secret1").is_ok());
    }

    #[test]
    fn password_reset_requires_matching_confirmation() {
        assert_eq!(
            validate_password_reset("secret1", "secret2"),
            Err(ValidationError::PasswordMismatch)
        );
        assert!(validate_password_reset("secret1", "secret1").is_ok());
    }

    #[test]
    fn login_requires_both_fields() {
        assert_eq!(
            validate_login("alice@example.com", ""),
            Err(ValidationError::EmptyField("password"))
        );
        assert_eq!(
            validate_login("", "secret1"),
            Err(ValidationError::EmptyField("email"))
        );
        assert!(validate_login("alice@example.com", "secret1").is_ok());
    }
}
