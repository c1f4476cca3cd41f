//! 列表查询状态
//!
//! 员工列表视图持有的完整查询元组：页码、每页条数、排序字段、
//! 排序方向与搜索词。任一控件变化都会生成新的 `ListQuery`，
//! 由视图整体重新发起列表请求。

use serde::{Deserialize, Serialize};

use crate::DEFAULT_PAGE_SIZE;

/// 可排序的员工字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Id,
    Name,
    Email,
    Department,
    Phone,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Name => "name",
            SortField::Email => "email",
            SortField::Department => "department",
            SortField::Phone => "phone",
        }
    }
}

/// 排序方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// 列表查询元组，页码从 1 开始。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    pub page: u32,
    pub per_page: u32,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
    pub search: String,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PAGE_SIZE,
            sort_field: SortField::Id,
            sort_direction: SortDirection::Ascending,
            search: String::new(),
        }
    }
}

impl ListQuery {
    /// 翻页（页码由调用方保证在 1..=page_count 范围内）。
    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page: page.max(1),
            ..self.clone()
        }
    }

    /// 修改每页条数并回到第一页。
    pub fn with_per_page(&self, per_page: u32) -> Self {
        Self {
            page: 1,
            per_page: per_page.max(1),
            ..self.clone()
        }
    }

    /// 点击列头：同列翻转方向，新列从升序开始。
    pub fn toggle_sort(&self, field: SortField) -> Self {
        let direction = if self.sort_field == field {
            self.sort_direction.toggled()
        } else {
            SortDirection::Ascending
        };
        Self {
            sort_field: field,
            sort_direction: direction,
            ..self.clone()
        }
    }

    /// 提交搜索词并回到第一页。
    pub fn with_search(&self, search: impl Into<String>) -> Self {
        Self {
            page: 1,
            search: search.into(),
            ..self.clone()
        }
    }

    /// 根据服务端返回的总数计算总页数（至少 1 页）。
    pub fn page_count(&self, total: u64) -> u32 {
        let per_page = u64::from(self.per_page.max(1));
        (total.div_ceil(per_page).max(1)).min(u64::from(u32::MAX)) as u32
    }

    /// 渲染为列表接口的查询串，空搜索词省略 `search` 参数。
    pub fn query_string(&self) -> String {
        let mut qs = format!(
            "?page={}&perPage={}&sortField={}&sortDirection={}",
            self.page,
            self.per_page,
            self.sort_field.as_str(),
            self.sort_direction.as_str(),
        );
        let search = self.search.trim();
        if !search.is_empty() {
            qs.push_str("&search=");
            qs.push_str(&encode_component(search));
        }
        qs
    }
}

/// 查询参数值的百分号编码（unreserved 字符集之外全部转义）。
fn encode_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================
    // 查询串渲染
    // =========================================================

    #[test]
    fn default_query_string_omits_search() {
        let qs = ListQuery::default().query_string();
        assert_eq!(qs, "?page=1&perPage=10&sortField=id&sortDirection=asc");
    }

    #[test]
    fn search_term_is_included_and_encoded() {
        let query = ListQuery::default().with_search("alice");
        assert!(query.query_string().ends_with("&search=alice"));

        let spaced = ListQuery::default().with_search("alice smith & co");
        assert!(
            spaced
                .query_string()
                .ends_with("&search=alice%20smith%20%26%20co")
        );
    }

    #[test]
    fn blank_search_is_treated_as_absent() {
        let query = ListQuery::default().with_search("   ");
        assert!(!query.query_string().contains("search="));
    }

    // =========================================================
    // 状态迁移
    // =========================================================

    #[test]
    fn toggle_sort_flips_direction_on_same_column() {
        let query = ListQuery::default().toggle_sort(SortField::Name);
        assert_eq!(query.sort_field, SortField::Name);
        assert_eq!(query.sort_direction, SortDirection::Ascending);

        let flipped = query.toggle_sort(SortField::Name);
        assert_eq!(flipped.sort_direction, SortDirection::Descending);

        // 换列后回到升序
        let other = flipped.toggle_sort(SortField::Email);
        assert_eq!(other.sort_field, SortField::Email);
        assert_eq!(other.sort_direction, SortDirection::Ascending);
    }

    #[test]
    fn search_and_page_size_reset_to_first_page() {
        let query = ListQuery::default().with_page(4);
        assert_eq!(query.page, 4);

        assert_eq!(query.with_search("bob").page, 1);
        assert_eq!(query.with_per_page(25).page, 1);
    }

    #[test]
    fn page_count_rounds_up_and_never_hits_zero() {
        let query = ListQuery::default(); // per_page = 10
        assert_eq!(query.page_count(0), 1);
        assert_eq!(query.page_count(10), 1);
        assert_eq!(query.page_count(11), 2);
        assert_eq!(query.page_count(42), 5);
    }
}
