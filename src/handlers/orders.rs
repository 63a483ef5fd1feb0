use actix_web::http::{header, StatusCode};
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::customers::CustomerResponse;
use super::envelope::ApiResponse;
use super::products::ProductResponse;
use super::{blocking, parse_decimal};
use crate::domain::order::{FetchDepth, NewOrder, Order, OrderLine, OrderLineInput};
use crate::errors::AppError;
use crate::AppOrderService;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderLineRequest {
    pub product_id: Uuid,
    pub quantity: i32,
    /// Line total as a decimal string, e.g. "299.97". Stored as given.
    pub total: String,
}

/// Only the customer id is read; any customer object sent alongside it is
/// ignored in favour of the stored record.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub customer_id: Uuid,
    #[serde(default)]
    pub lines: Vec<CreateOrderLineRequest>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineResponse {
    pub id: Uuid,
    pub order_id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
    pub total: String,
    pub product: Option<ProductResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub customer: Option<CustomerResponse>,
    pub created_at: String,
    pub updated_at: String,
    pub lines: Vec<OrderLineResponse>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Depth {
    /// The order alone.
    #[default]
    Shallow,
    /// The order with its customer, lines and their products.
    Full,
}

#[derive(Debug, Deserialize)]
pub struct GetOrderParams {
    #[serde(default)]
    pub depth: Depth,
}

impl CreateOrderRequest {
    fn into_new_order(self) -> Result<NewOrder, AppError> {
        let lines = self
            .lines
            .into_iter()
            .map(|l| {
                Ok(OrderLineInput {
                    total: parse_decimal("total", &l.total)?,
                    product_id: l.product_id,
                    quantity: l.quantity,
                })
            })
            .collect::<Result<Vec<_>, AppError>>()?;
        Ok(NewOrder {
            customer_id: self.customer_id,
            lines,
        })
    }
}

impl From<Depth> for FetchDepth {
    fn from(d: Depth) -> Self {
        match d {
            Depth::Shallow => FetchDepth::Shallow,
            Depth::Full => FetchDepth::Full,
        }
    }
}

impl From<OrderLine> for OrderLineResponse {
    fn from(l: OrderLine) -> Self {
        Self {
            id: l.id,
            order_id: l.order_id,
            product_id: l.product_id,
            quantity: l.quantity,
            total: l.total.to_string(),
            product: l.product.map(ProductResponse::from),
        }
    }
}

impl From<Order> for OrderResponse {
    fn from(o: Order) -> Self {
        Self {
            id: o.id,
            customer_id: o.customer_id,
            customer: o.customer.map(CustomerResponse::from),
            created_at: o.created_at.to_rfc3339(),
            updated_at: o.updated_at.to_rfc3339(),
            lines: o.lines.into_iter().map(OrderLineResponse::from).collect(),
        }
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /v1/orders
///
/// Resolves the customer and every product referenced by the lines, then
/// inserts the order and its lines in a single database transaction. If any
/// reference does not resolve nothing is written and the response is a 400
/// whose envelope carries status 404 and the offending id.
#[utoipa::path(
    post,
    path = "/v1/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created successfully", body = ApiResponse<OrderResponse>),
        (status = 400, description = "Unknown customer or product, or malformed body"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn create_order(
    service: web::Data<AppOrderService>,
    body: web::Json<CreateOrderRequest>,
) -> Result<HttpResponse, AppError> {
    let request = body.into_inner().into_new_order()?;
    let order = blocking(move || service.create_order(request)).await?;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/v1/orders/{}", order.id)))
        .json(ApiResponse::created(
            OrderResponse::from(order),
            "Order created successfully.",
        )))
}

/// GET /v1/orders/{id}
///
/// An unknown id is still a 200; `data` is null. Pass `depth=full` to load
/// the customer, lines and products.
#[utoipa::path(
    get,
    path = "/v1/orders/{id}",
    params(
        ("id" = Uuid, Path, description = "Order UUID"),
        ("depth" = Option<Depth>, Query, description = "shallow (default) or full"),
    ),
    responses(
        (status = 200, description = "Lookup completed; data is null when no order matches", body = ApiResponse<OrderResponse>),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn get_order(
    service: web::Data<AppOrderService>,
    path: web::Path<Uuid>,
    query: web::Query<GetOrderParams>,
) -> Result<HttpResponse, AppError> {
    let order_id = path.into_inner();
    let depth = FetchDepth::from(query.into_inner().depth);
    let order = blocking(move || service.get_order(order_id, depth)).await?;

    let body = match order {
        Some(order) => ApiResponse::ok(OrderResponse::from(order)),
        None => ApiResponse::new(
            None,
            StatusCode::OK,
            Some("No order matches the given ID.".to_string()),
        ),
    };
    Ok(HttpResponse::Ok().json(body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_ignores_customer_snapshot() {
        let id = Uuid::new_v4();
        let product_id = Uuid::new_v4();
        let body = serde_json::json!({
            "customerId": id,
            "customer": { "name": "Someone Else" },
            "lines": [{ "productId": product_id, "quantity": 3, "total": "299.97" }]
        });

        let request: CreateOrderRequest = serde_json::from_value(body).expect("valid body");
        let order = request.into_new_order().expect("valid order");

        assert_eq!(order.customer_id, id);
        assert_eq!(order.lines.len(), 1);
        assert_eq!(order.lines[0].product_id, product_id);
        assert_eq!(order.lines[0].quantity, 3);
        assert_eq!(order.lines[0].total.to_string(), "299.97");
    }

    #[test]
    fn unparsable_total_is_bad_request() {
        let body = serde_json::json!({
            "customerId": Uuid::new_v4(),
            "lines": [{ "productId": Uuid::new_v4(), "quantity": 1, "total": "lots" }]
        });

        let request: CreateOrderRequest = serde_json::from_value(body).expect("valid body");

        assert!(matches!(
            request.into_new_order(),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn order_response_uses_camel_case_keys() {
        let order_id = Uuid::new_v4();
        let now = chrono::Utc::now();
        let order = Order {
            id: order_id,
            customer_id: Uuid::new_v4(),
            customer: None,
            created_at: now,
            updated_at: now,
            lines: vec![OrderLine {
                id: Uuid::new_v4(),
                order_id,
                product_id: Uuid::new_v4(),
                quantity: 1,
                total: "10.005".parse().expect("valid decimal"),
                product: None,
            }],
        };

        let json = serde_json::to_value(OrderResponse::from(order)).expect("serializable");

        assert!(json["customerId"].is_string());
        assert!(json["createdAt"].is_string());
        assert_eq!(json["lines"][0]["orderId"], order_id.to_string());
        assert_eq!(json["lines"][0]["total"], "10.005");
        assert!(json.get("customer_id").is_none());
    }

    #[test]
    fn depth_defaults_to_shallow() {
        let params: GetOrderParams = serde_json::from_str("{}").expect("valid params");
        assert_eq!(FetchDepth::from(params.depth), FetchDepth::Shallow);

        let params: GetOrderParams =
            serde_json::from_str(r#"{"depth":"full"}"#).expect("valid params");
        assert_eq!(FetchDepth::from(params.depth), FetchDepth::Full);
    }
}
