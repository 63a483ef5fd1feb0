use utoipa::OpenApi;

use crate::handlers::{customers, orders, products};

#[derive(OpenApi)]
#[openapi(
    paths(
        customers::create_customer,
        customers::list_customers,
        customers::get_customer,
        customers::update_customer,
        customers::delete_customer,
        products::create_product,
        products::list_products,
        products::get_product,
        products::update_product,
        products::delete_product,
        orders::create_order,
        orders::get_order,
    ),
    tags(
        (name = "customers", description = "Customer management"),
        (name = "products", description = "Product catalogue"),
        (name = "orders", description = "Order placement and lookup"),
    )
)]
pub struct ApiDoc;
