use uuid::Uuid;

use super::customer::Customer;
use super::errors::DomainError;
use super::order::{FetchDepth, Order};
use super::page::{Page, PageRequest};
use super::product::Product;

pub trait CustomerRepository: Send + Sync + 'static {
    fn create(&self, customer: &Customer) -> Result<(), DomainError>;
    fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>, DomainError>;
    fn list(&self, page: PageRequest) -> Result<Page<Customer>, DomainError>;
    fn update(&self, customer: &Customer) -> Result<(), DomainError>;
    fn delete(&self, id: Uuid) -> Result<(), DomainError>;
}

pub trait ProductRepository: Send + Sync + 'static {
    fn create(&self, product: &Product) -> Result<(), DomainError>;
    fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, DomainError>;
    /// Every product whose id is in `ids`. Unknown ids are simply absent.
    fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Product>, DomainError>;
    fn list(&self, page: PageRequest) -> Result<Page<Product>, DomainError>;
    fn update(&self, product: &Product) -> Result<(), DomainError>;
    fn delete(&self, id: Uuid) -> Result<(), DomainError>;
}

pub trait OrderRepository: Send + Sync + 'static {
    /// Persists the order and all of its lines atomically.
    fn create(&self, order: &Order) -> Result<(), DomainError>;
    fn find_by_id(&self, id: Uuid, depth: FetchDepth) -> Result<Option<Order>, DomainError>;
}
