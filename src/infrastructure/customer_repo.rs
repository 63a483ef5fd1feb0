use diesel::prelude::*;
use uuid::Uuid;

use crate::db::DbPool;
use crate::domain::customer::Customer;
use crate::domain::errors::DomainError;
use crate::domain::page::{Page, PageRequest};
use crate::domain::ports::CustomerRepository;
use crate::schema::customers;

use super::delete_error;
use super::models::{CustomerChangeset, CustomerRow};

#[derive(Clone)]
pub struct DieselCustomerRepository {
    pool: DbPool,
}

impl DieselCustomerRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl CustomerRepository for DieselCustomerRepository {
    fn create(&self, customer: &Customer) -> Result<(), DomainError> {
        let mut conn = self.pool.get()?;
        diesel::insert_into(customers::table)
            .values(&CustomerRow::from(customer))
            .execute(&mut conn)?;
        Ok(())
    }

    fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>, DomainError> {
        let mut conn = self.pool.get()?;
        let row = customers::table
            .find(id)
            .select(CustomerRow::as_select())
            .first(&mut conn)
            .optional()?;
        Ok(row.map(Customer::from))
    }

    fn list(&self, page: PageRequest) -> Result<Page<Customer>, DomainError> {
        let mut conn = self.pool.get()?;

        conn.transaction::<_, DomainError, _>(|conn| {
            let total: i64 = customers::table.count().get_result(conn)?;

            let rows = customers::table
                .select(CustomerRow::as_select())
                .order((customers::name.asc(), customers::id.asc()))
                .limit(page.page_size)
                .offset(page.offset())
                .load(conn)?;

            Ok(Page {
                items: rows.into_iter().map(Customer::from).collect(),
                total,
                request: page,
            })
        })
    }

    fn update(&self, customer: &Customer) -> Result<(), DomainError> {
        let mut conn = self.pool.get()?;
        diesel::update(customers::table.find(customer.id))
            .set(CustomerChangeset::from(customer))
            .execute(&mut conn)?;
        Ok(())
    }

    fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        let mut conn = self.pool.get()?;
        diesel::delete(customers::table.find(id))
            .execute(&mut conn)
            .map_err(|e| delete_error("Customer", e))?;
        Ok(())
    }
}
