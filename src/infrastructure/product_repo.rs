use diesel::prelude::*;
use uuid::Uuid;

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::page::{Page, PageRequest};
use crate::domain::ports::ProductRepository;
use crate::domain::product::Product;
use crate::schema::products;

use super::delete_error;
use super::models::{ProductChangeset, ProductRow};

#[derive(Clone)]
pub struct DieselProductRepository {
    pool: DbPool,
}

impl DieselProductRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl ProductRepository for DieselProductRepository {
    fn create(&self, product: &Product) -> Result<(), DomainError> {
        let mut conn = self.pool.get()?;
        diesel::insert_into(products::table)
            .values(&ProductRow::from(product))
            .execute(&mut conn)?;
        Ok(())
    }

    fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, DomainError> {
        let mut conn = self.pool.get()?;
        let row = products::table
            .find(id)
            .select(ProductRow::as_select())
            .first(&mut conn)
            .optional()?;
        Ok(row.map(Product::from))
    }

    fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Product>, DomainError> {
        let mut conn = self.pool.get()?;
        let rows = products::table
            .filter(products::id.eq_any(ids))
            .select(ProductRow::as_select())
            .load(&mut conn)?;
        Ok(rows.into_iter().map(Product::from).collect())
    }

    fn list(&self, page: PageRequest) -> Result<Page<Product>, DomainError> {
        let mut conn = self.pool.get()?;

        conn.transaction::<_, DomainError, _>(|conn| {
            let total: i64 = products::table.count().get_result(conn)?;

            let rows = products::table
                .select(ProductRow::as_select())
                .order((products::title.asc(), products::id.asc()))
                .limit(page.page_size)
                .offset(page.offset())
                .load(conn)?;

            Ok(Page {
                items: rows.into_iter().map(Product::from).collect(),
                total,
                request: page,
            })
        })
    }

    fn update(&self, product: &Product) -> Result<(), DomainError> {
        let mut conn = self.pool.get()?;
        diesel::update(products::table.find(product.id))
            .set(ProductChangeset::from(product))
            .execute(&mut conn)?;
        Ok(())
    }

    fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        let mut conn = self.pool.get()?;
        diesel::delete(products::table.find(id))
            .execute(&mut conn)
            .map_err(|e| delete_error("Product", e))?;
        Ok(())
    }
}
