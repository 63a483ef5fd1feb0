use actix_web::http::header;
use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::envelope::{ApiResponse, PagedResponse};
use super::{blocking, ListParams};
use crate::domain::customer::{Customer, CustomerUpdate, NewCustomer};
use crate::errors::AppError;
use crate::AppCustomerService;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Calendar date, e.g. "1995-01-01"
    pub birth_date: NaiveDate,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomerRequest {
    pub name: String,
    pub email: String,
    /// Omitting the phone clears it.
    #[serde(default)]
    pub phone: Option<String>,
    pub birth_date: NaiveDate,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: NaiveDate,
}

impl From<CreateCustomerRequest> for NewCustomer {
    fn from(r: CreateCustomerRequest) -> Self {
        Self {
            name: r.name,
            email: r.email,
            phone: r.phone,
            birth_date: r.birth_date,
        }
    }
}

impl From<UpdateCustomerRequest> for CustomerUpdate {
    fn from(r: UpdateCustomerRequest) -> Self {
        Self {
            name: r.name,
            email: r.email,
            phone: r.phone,
            birth_date: r.birth_date,
        }
    }
}

impl From<Customer> for CustomerResponse {
    fn from(c: Customer) -> Self {
        Self {
            id: c.id,
            name: c.name,
            email: c.email,
            phone: c.phone,
            birth_date: c.birth_date,
        }
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /v1/customers
#[utoipa::path(
    post,
    path = "/v1/customers",
    request_body = CreateCustomerRequest,
    responses(
        (status = 201, description = "Customer created", body = ApiResponse<CustomerResponse>),
        (status = 400, description = "Malformed request body"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "customers"
)]
pub async fn create_customer(
    service: web::Data<AppCustomerService>,
    body: web::Json<CreateCustomerRequest>,
) -> Result<HttpResponse, AppError> {
    let input = NewCustomer::from(body.into_inner());
    let customer = blocking(move || service.create_customer(input)).await?;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/v1/customers/{}", customer.id)))
        .json(ApiResponse::created(
            CustomerResponse::from(customer),
            "Customer created successfully.",
        )))
}

/// GET /v1/customers
///
/// Customers are ordered by name. Use `page` (1-based) and `pageSize`.
#[utoipa::path(
    get,
    path = "/v1/customers",
    params(
        ("page" = Option<i64>, Query, description = "Page number (1-based, default 1)"),
        ("pageSize" = Option<i64>, Query, description = "Items per page (default 10, max 100)"),
    ),
    responses(
        (status = 200, description = "Paginated list of customers", body = PagedResponse<CustomerResponse>),
        (status = 500, description = "Internal server error"),
    ),
    tag = "customers"
)]
pub async fn list_customers(
    service: web::Data<AppCustomerService>,
    query: web::Query<ListParams>,
) -> Result<HttpResponse, AppError> {
    let page = query.page_request();
    let result = blocking(move || service.list_customers(page)).await?;

    Ok(HttpResponse::Ok().json(PagedResponse::from(result.map(CustomerResponse::from))))
}

/// GET /v1/customers/{id}
#[utoipa::path(
    get,
    path = "/v1/customers/{id}",
    params(
        ("id" = Uuid, Path, description = "Customer UUID"),
    ),
    responses(
        (status = 200, description = "Customer found", body = ApiResponse<CustomerResponse>),
        (status = 404, description = "Customer not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "customers"
)]
pub async fn get_customer(
    service: web::Data<AppCustomerService>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let customer = blocking(move || service.get_customer(id)).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(CustomerResponse::from(customer))))
}

/// PUT /v1/customers/{id}
#[utoipa::path(
    put,
    path = "/v1/customers/{id}",
    params(
        ("id" = Uuid, Path, description = "Customer UUID"),
    ),
    request_body = UpdateCustomerRequest,
    responses(
        (status = 200, description = "Customer updated", body = ApiResponse<CustomerResponse>),
        (status = 400, description = "Malformed request body"),
        (status = 404, description = "Customer not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "customers"
)]
pub async fn update_customer(
    service: web::Data<AppCustomerService>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateCustomerRequest>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let update = CustomerUpdate::from(body.into_inner());
    let customer = blocking(move || service.update_customer(id, update)).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(CustomerResponse::from(customer))))
}

/// DELETE /v1/customers/{id}
#[utoipa::path(
    delete,
    path = "/v1/customers/{id}",
    params(
        ("id" = Uuid, Path, description = "Customer UUID"),
    ),
    responses(
        (status = 204, description = "Customer deleted"),
        (status = 404, description = "Customer not found"),
        (status = 409, description = "Customer is referenced by existing orders"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "customers"
)]
pub async fn delete_customer(
    service: web::Data<AppCustomerService>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    blocking(move || service.delete_customer(id)).await?;

    Ok(HttpResponse::NoContent().finish())
}
