use serde::{Deserialize, Serialize};

/// Page-number pagination block returned by OpenFEC list endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Pagination {
    pub count: i64,
    pub page: Option<i64>,
    pub pages: Option<i64>,
    pub per_page: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub results: Vec<T>,
    pub pagination: Pagination,
}
