//! 环境配置
//!
//! 后端基地址按环境在编译期注入，默认指向本地开发服务。

/// 后端 API 基地址。
///
/// 构建时通过环境变量 `STAFFDECK_API_URL` 覆盖，例如
/// `STAFFDECK_API_URL=https://api.example.com trunk build --release`。
pub fn api_base_url() -> &'static str {
    option_env!("STAFFDECK_API_URL").unwrap_or("http://localhost:5000")
}
