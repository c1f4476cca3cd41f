//! 员工 CRUD 接口
//!
//! 全部携带 Bearer 凭据。列表由服务端完成过滤 / 排序 / 分页，
//! 客户端只透传查询元组。

use gloo_net::http::Request;
use staffdeck_shared::error::ApiError;
use staffdeck_shared::query::ListQuery;
use staffdeck_shared::{Ack, Employee, EmployeeDraft, EmployeePage};

use super::client::{ApiClient, decode, transport};

impl ApiClient {
    /// GET /employees?page&perPage&sortField&sortDirection&search
    pub async fn list(&self, query: &ListQuery) -> Result<EmployeePage, ApiError> {
        let url = format!("{}{}", self.url("/employees"), query.query_string());
        let response = self
            .authorize(Request::get(&url))
            .send()
            .await
            .map_err(transport)?;
        decode(response).await
    }

    /// GET /employees/{id}
    pub async fn get_by_id(&self, id: i64) -> Result<Employee, ApiError> {
        let url = self.url(&format!("/employees/{}", id));
        let response = self
            .authorize(Request::get(&url))
            .send()
            .await
            .map_err(transport)?;
        decode(response).await
    }

    /// POST /employees
    pub async fn create(&self, draft: &EmployeeDraft) -> Result<Employee, ApiError> {
        let response = self
            .authorize(Request::post(&self.url("/employees")))
            .json(draft)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        decode(response).await
    }

    /// PUT /employees/{id}
    ///
    /// 记录已被并发删除时返回 404。
    pub async fn update(&self, id: i64, draft: &EmployeeDraft) -> Result<Employee, ApiError> {
        let url = self.url(&format!("/employees/{}", id));
        let response = self
            .authorize(Request::put(&url))
            .json(draft)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        decode(response).await
    }

    /// DELETE /employees/{id}
    pub async fn delete(&self, id: i64) -> Result<Ack, ApiError> {
        let url = self.url(&format!("/employees/{}", id));
        let response = self
            .authorize(Request::delete(&url))
            .send()
            .await
            .map_err(transport)?;
        decode(response).await
    }
}
