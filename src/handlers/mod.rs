pub mod customers;
pub mod envelope;
pub mod orders;
pub mod products;

use std::str::FromStr;

use actix_web::web;
use bigdecimal::BigDecimal;
use serde::Deserialize;

use crate::domain::errors::DomainError;
use crate::domain::page::{PageRequest, DEFAULT_PAGE_SIZE};
use crate::errors::AppError;

// ── Pagination ───────────────────────────────────────────────────────────────

/// Query string of list endpoints: `page` and `pageSize`. `pageNumber` and
/// `page_size` are accepted as well.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    /// Page number (1-based). Defaults to 1.
    #[serde(default = "default_page", alias = "pageNumber")]
    pub page: i64,
    /// Number of items per page. Defaults to 10, maximum 100.
    #[serde(default = "default_page_size", alias = "page_size")]
    pub page_size: i64,
}

fn default_page() -> i64 {
    1
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

impl ListParams {
    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page, self.page_size)
    }
}

// ── Helpers ──────────────────────────────────────────────────────────────────

/// Runs a blocking service call (Diesel is synchronous) on actix's thread pool.
pub async fn blocking<T, F>(f: F) -> Result<T, AppError>
where
    F: FnOnce() -> Result<T, DomainError> + Send + 'static,
    T: Send + 'static,
{
    web::block(f)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
        .map_err(AppError::from)
}

/// Decimals travel as strings, e.g. "9.99", to avoid floating-point issues.
pub fn parse_decimal(field: &str, value: &str) -> Result<BigDecimal, AppError> {
    BigDecimal::from_str(value.trim())
        .map_err(|e| AppError::BadRequest(format!("Invalid {field} '{value}': {e}")))
}
