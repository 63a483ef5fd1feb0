use actix_web::http::StatusCode;
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::page::Page;

/// Uniform body wrapping every response. `statusCode` is the application
/// status and need not match the HTTP status line.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub data: Option<T>,
    pub message: Option<String>,
    pub status_code: u16,
    pub is_success: bool,
}

impl<T> ApiResponse<T> {
    pub fn new(data: Option<T>, status: StatusCode, message: Option<String>) -> Self {
        Self {
            data,
            message,
            status_code: status.as_u16(),
            is_success: status.is_success(),
        }
    }

    pub fn ok(data: T) -> Self {
        Self::new(Some(data), StatusCode::OK, None)
    }

    pub fn created(data: T, message: &str) -> Self {
        Self::new(Some(data), StatusCode::CREATED, Some(message.to_string()))
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PagedResponse<T> {
    pub data: Option<Vec<T>>,
    pub message: Option<String>,
    pub status_code: u16,
    pub is_success: bool,
    pub current_page: i64,
    pub page_size: i64,
    pub total_count: i64,
    pub total_pages: i64,
}

impl<T> From<Page<T>> for PagedResponse<T> {
    fn from(page: Page<T>) -> Self {
        let total_pages = page.total_pages();
        Self {
            data: Some(page.items),
            message: None,
            status_code: StatusCode::OK.as_u16(),
            is_success: true,
            current_page: page.request.page,
            page_size: page.request.page_size,
            total_count: page.total,
            total_pages,
        }
    }
}
