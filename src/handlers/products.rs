use actix_web::http::header;
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::envelope::{ApiResponse, PagedResponse};
use super::{blocking, parse_decimal, ListParams};
use crate::domain::product::{Product, ProductInput};
use crate::errors::AppError;
use crate::AppProductService;

// ── Request / response DTOs ──────────────────────────────────────────────────

/// Body of both create and update requests.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    pub title: String,
    /// Defaults to an empty string.
    #[serde(default)]
    pub description: Option<String>,
    pub slug: String,
    /// Decimal price as a string to avoid floating-point issues, e.g. "9.99"
    pub price: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub slug: String,
    pub price: String,
}

impl ProductRequest {
    fn into_input(self) -> Result<ProductInput, AppError> {
        Ok(ProductInput {
            price: parse_decimal("price", &self.price)?,
            title: self.title,
            description: self.description,
            slug: self.slug,
        })
    }
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            title: p.title,
            description: p.description,
            slug: p.slug,
            price: p.price.to_string(),
        }
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /v1/products
#[utoipa::path(
    post,
    path = "/v1/products",
    request_body = ProductRequest,
    responses(
        (status = 201, description = "Product created", body = ApiResponse<ProductResponse>),
        (status = 400, description = "Malformed request body or price"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "products"
)]
pub async fn create_product(
    service: web::Data<AppProductService>,
    body: web::Json<ProductRequest>,
) -> Result<HttpResponse, AppError> {
    let input = body.into_inner().into_input()?;
    let product = blocking(move || service.create_product(input)).await?;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/v1/products/{}", product.id)))
        .json(ApiResponse::created(
            ProductResponse::from(product),
            "Product created successfully.",
        )))
}

/// GET /v1/products
///
/// Products are ordered by title. Use `page` (1-based) and `pageSize`.
#[utoipa::path(
    get,
    path = "/v1/products",
    params(
        ("page" = Option<i64>, Query, description = "Page number (1-based, default 1)"),
        ("pageSize" = Option<i64>, Query, description = "Items per page (default 10, max 100)"),
    ),
    responses(
        (status = 200, description = "Paginated list of products", body = PagedResponse<ProductResponse>),
        (status = 500, description = "Internal server error"),
    ),
    tag = "products"
)]
pub async fn list_products(
    service: web::Data<AppProductService>,
    query: web::Query<ListParams>,
) -> Result<HttpResponse, AppError> {
    let page = query.page_request();
    let result = blocking(move || service.list_products(page)).await?;

    Ok(HttpResponse::Ok().json(PagedResponse::from(result.map(ProductResponse::from))))
}

/// GET /v1/products/{id}
#[utoipa::path(
    get,
    path = "/v1/products/{id}",
    params(
        ("id" = Uuid, Path, description = "Product UUID"),
    ),
    responses(
        (status = 200, description = "Product found", body = ApiResponse<ProductResponse>),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "products"
)]
pub async fn get_product(
    service: web::Data<AppProductService>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let product = blocking(move || service.get_product(id)).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(ProductResponse::from(product))))
}

/// PUT /v1/products/{id}
#[utoipa::path(
    put,
    path = "/v1/products/{id}",
    params(
        ("id" = Uuid, Path, description = "Product UUID"),
    ),
    request_body = ProductRequest,
    responses(
        (status = 200, description = "Product updated", body = ApiResponse<ProductResponse>),
        (status = 400, description = "Malformed request body or price"),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "products"
)]
pub async fn update_product(
    service: web::Data<AppProductService>,
    path: web::Path<Uuid>,
    body: web::Json<ProductRequest>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let input = body.into_inner().into_input()?;
    let product = blocking(move || service.update_product(id, input)).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(ProductResponse::from(product))))
}

/// DELETE /v1/products/{id}
#[utoipa::path(
    delete,
    path = "/v1/products/{id}",
    params(
        ("id" = Uuid, Path, description = "Product UUID"),
    ),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 404, description = "Product not found"),
        (status = 409, description = "Product is referenced by existing orders"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "products"
)]
pub async fn delete_product(
    service: web::Data<AppProductService>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    blocking(move || service.delete_product(id)).await?;

    Ok(HttpResponse::NoContent().finish())
}
