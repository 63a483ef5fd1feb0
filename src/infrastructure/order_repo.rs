use diesel::prelude::*;
use uuid::Uuid;

use crate::db::DbPool;
use crate::domain::customer::Customer;
use crate::domain::errors::DomainError;
use crate::domain::order::{FetchDepth, Order, OrderLine};
use crate::domain::ports::OrderRepository;
use crate::domain::product::Product;
use crate::schema::{customers, order_lines, orders, products};

use super::models::{CustomerRow, OrderLineRow, OrderRow, ProductRow};

#[derive(Clone)]
pub struct DieselOrderRepository {
    pool: DbPool,
}

impl DieselOrderRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn line_rows(order: &Order) -> Vec<OrderLineRow> {
    order
        .lines
        .iter()
        .enumerate()
        .map(|(position, l)| OrderLineRow {
            id: l.id,
            order_id: order.id,
            product_id: l.product_id,
            position: position as i32,
            quantity: l.quantity,
            total: l.total.clone(),
        })
        .collect()
}

fn shallow(row: OrderRow) -> Order {
    Order {
        id: row.id,
        customer_id: row.customer_id,
        customer: None,
        created_at: row.created_at,
        updated_at: row.updated_at,
        lines: vec![],
    }
}

impl OrderRepository for DieselOrderRepository {
    fn create(&self, order: &Order) -> Result<(), DomainError> {
        let mut conn = self.pool.get()?;

        conn.transaction::<_, DomainError, _>(|conn| {
            diesel::insert_into(orders::table)
                .values(&OrderRow {
                    id: order.id,
                    customer_id: order.customer_id,
                    created_at: order.created_at,
                    updated_at: order.updated_at,
                })
                .execute(conn)?;

            let lines = line_rows(order);
            if !lines.is_empty() {
                diesel::insert_into(order_lines::table)
                    .values(&lines)
                    .execute(conn)?;
            }

            Ok(())
        })
    }

    fn find_by_id(&self, id: Uuid, depth: FetchDepth) -> Result<Option<Order>, DomainError> {
        let mut conn = self.pool.get()?;

        conn.transaction::<_, DomainError, _>(|conn| {
            let row = orders::table
                .find(id)
                .select(OrderRow::as_select())
                .first(conn)
                .optional()?;

            let Some(row) = row else {
                return Ok(None);
            };
            let mut order = shallow(row);
            if depth == FetchDepth::Shallow {
                return Ok(Some(order));
            }

            order.customer = customers::table
                .find(order.customer_id)
                .select(CustomerRow::as_select())
                .first(conn)
                .optional()?
                .map(Customer::from);

            let lines: Vec<(OrderLineRow, ProductRow)> = order_lines::table
                .inner_join(products::table)
                .filter(order_lines::order_id.eq(order.id))
                .order(order_lines::position.asc())
                .select((OrderLineRow::as_select(), ProductRow::as_select()))
                .load(conn)?;

            order.lines = lines
                .into_iter()
                .map(|(l, p)| OrderLine {
                    id: l.id,
                    order_id: l.order_id,
                    product_id: l.product_id,
                    quantity: l.quantity,
                    total: l.total,
                    product: Some(Product::from(p)),
                })
                .collect();

            Ok(Some(order))
        })
    }
}
