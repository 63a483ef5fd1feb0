use std::collections::{HashMap, HashSet};

use bigdecimal::BigDecimal;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::order::{FetchDepth, NewOrder, Order, OrderLine};
use crate::domain::ports::{CustomerRepository, OrderRepository, ProductRepository};
use crate::domain::product::Product;

pub struct OrderService<C, P, O> {
    customers: C,
    products: P,
    orders: O,
}

impl<C, P, O> OrderService<C, P, O>
where
    C: CustomerRepository,
    P: ProductRepository,
    O: OrderRepository,
{
    pub fn new(customers: C, products: P, orders: O) -> Self {
        Self {
            customers,
            products,
            orders,
        }
    }

    /// Resolves the customer and every referenced product, then persists the
    /// order with all of its lines. Nothing is written unless every reference
    /// resolves; the first unresolvable line (in request order) is reported.
    pub fn create_order(&self, request: NewOrder) -> Result<Order, DomainError> {
        let order_id = Uuid::new_v4();
        let now = Utc::now();

        let customer = self
            .customers
            .find_by_id(request.customer_id)?
            .ok_or_else(|| {
                log::warn!("Rejected order: unknown customer {}", request.customer_id);
                DomainError::CustomerNotFound(request.customer_id)
            })?;

        let products = self.resolve_products(&request)?;

        let mut lines = Vec::with_capacity(request.lines.len());
        for input in request.lines {
            let Some(product) = products.get(&input.product_id) else {
                log::warn!("Rejected order: unknown product {}", input.product_id);
                return Err(DomainError::ProductNotFound(input.product_id));
            };
            warn_on_total_mismatch(product, input.quantity, &input.total);

            lines.push(OrderLine {
                id: Uuid::new_v4(),
                order_id,
                product_id: input.product_id,
                quantity: input.quantity,
                total: input.total,
                product: Some(product.clone()),
            });
        }

        let order = Order {
            id: order_id,
            customer_id: customer.id,
            customer: Some(customer),
            created_at: now,
            updated_at: now,
            lines,
        };
        self.orders.create(&order)?;

        log::info!(
            "Created order {} for customer {} with {} line(s)",
            order.id,
            order.customer_id,
            order.lines.len()
        );
        Ok(order)
    }

    /// An absent order is `Ok(None)`, not an error.
    pub fn get_order(&self, id: Uuid, depth: FetchDepth) -> Result<Option<Order>, DomainError> {
        self.orders.find_by_id(id, depth)
    }

    fn resolve_products(&self, request: &NewOrder) -> Result<HashMap<Uuid, Product>, DomainError> {
        let mut seen = HashSet::new();
        let ids: Vec<Uuid> = request
            .lines
            .iter()
            .map(|l| l.product_id)
            .filter(|id| seen.insert(*id))
            .collect();
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        Ok(self
            .products
            .find_by_ids(&ids)?
            .into_iter()
            .map(|p| (p.id, p))
            .collect())
    }
}

/// Line totals are trusted as supplied; a disagreement with the catalogue
/// price is only reported.
fn warn_on_total_mismatch(product: &Product, quantity: i32, total: &BigDecimal) {
    let expected = &product.price * BigDecimal::from(quantity);
    if &expected != total {
        log::warn!(
            "Line total {} for product {} differs from {} x {} = {}",
            total,
            product.id,
            quantity,
            product.price,
            expected
        );
    }
}
