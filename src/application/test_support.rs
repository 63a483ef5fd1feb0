//! In-memory repositories for exercising the services without a database.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use uuid::Uuid;

use crate::domain::customer::Customer;
use crate::domain::errors::DomainError;
use crate::domain::order::{FetchDepth, Order};
use crate::domain::page::{Page, PageRequest};
use crate::domain::ports::{CustomerRepository, OrderRepository, ProductRepository};
use crate::domain::product::Product;

#[derive(Default)]
struct State {
    customers: HashMap<Uuid, Customer>,
    products: HashMap<Uuid, Product>,
    orders: Vec<Order>,
    batched_lookups: Vec<Vec<Uuid>>,
}

/// One shared store implementing every repository port. Clones share state.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<State>>,
    failing: Arc<AtomicBool>,
}

impl InMemoryStore {
    /// Makes every subsequent repository call fail with a storage fault.
    pub fn fail_all(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub fn insert_customer(&self, customer: Customer) {
        self.lock().customers.insert(customer.id, customer);
    }

    pub fn insert_product(&self, product: Product) {
        self.lock().products.insert(product.id, product);
    }

    pub fn customers(&self) -> Vec<Customer> {
        sorted(self.lock().customers.values().cloned().collect(), |c| {
            (c.name.clone(), c.id)
        })
    }

    pub fn products(&self) -> Vec<Product> {
        sorted(self.lock().products.values().cloned().collect(), |p| {
            (p.title.clone(), p.id)
        })
    }

    pub fn orders(&self) -> Vec<Order> {
        self.lock().orders.clone()
    }

    pub fn batched_lookups(&self) -> Vec<Vec<Uuid>> {
        self.lock().batched_lookups.clone()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().expect("store mutex poisoned")
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(DomainError::Internal("connection refused".to_string()));
        }
        Ok(())
    }

    fn is_referenced(&self, customer_or_product: Uuid) -> bool {
        self.lock().orders.iter().any(|o| {
            o.customer_id == customer_or_product
                || o.lines.iter().any(|l| l.product_id == customer_or_product)
        })
    }
}

fn sorted<T, K: Ord>(mut items: Vec<T>, key: impl FnMut(&T) -> K) -> Vec<T> {
    items.sort_by_key(key);
    items
}

fn paginate<T>(items: Vec<T>, page: PageRequest) -> Page<T> {
    let total = items.len() as i64;
    let items = items
        .into_iter()
        .skip(page.offset() as usize)
        .take(page.page_size as usize)
        .collect();
    Page {
        items,
        total,
        request: page,
    }
}

impl CustomerRepository for InMemoryStore {
    fn create(&self, customer: &Customer) -> Result<(), DomainError> {
        self.check()?;
        self.insert_customer(customer.clone());
        Ok(())
    }

    fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>, DomainError> {
        self.check()?;
        Ok(self.lock().customers.get(&id).cloned())
    }

    fn list(&self, page: PageRequest) -> Result<Page<Customer>, DomainError> {
        self.check()?;
        Ok(paginate(self.customers(), page))
    }

    fn update(&self, customer: &Customer) -> Result<(), DomainError> {
        self.check()?;
        self.insert_customer(customer.clone());
        Ok(())
    }

    fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        self.check()?;
        if self.is_referenced(id) {
            return Err(DomainError::Conflict(
                "Customer is referenced by existing orders.".to_string(),
            ));
        }
        self.lock().customers.remove(&id);
        Ok(())
    }
}

impl ProductRepository for InMemoryStore {
    fn create(&self, product: &Product) -> Result<(), DomainError> {
        self.check()?;
        self.insert_product(product.clone());
        Ok(())
    }

    fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, DomainError> {
        self.check()?;
        Ok(self.lock().products.get(&id).cloned())
    }

    fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Product>, DomainError> {
        self.check()?;
        let mut state = self.lock();
        state.batched_lookups.push(ids.to_vec());
        Ok(ids
            .iter()
            .filter_map(|id| state.products.get(id).cloned())
            .collect())
    }

    fn list(&self, page: PageRequest) -> Result<Page<Product>, DomainError> {
        self.check()?;
        Ok(paginate(self.products(), page))
    }

    fn update(&self, product: &Product) -> Result<(), DomainError> {
        self.check()?;
        self.insert_product(product.clone());
        Ok(())
    }

    fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        self.check()?;
        if self.is_referenced(id) {
            return Err(DomainError::Conflict(
                "Product is referenced by existing orders.".to_string(),
            ));
        }
        self.lock().products.remove(&id);
        Ok(())
    }
}

impl OrderRepository for InMemoryStore {
    fn create(&self, order: &Order) -> Result<(), DomainError> {
        self.check()?;
        let mut stored = order.clone();
        stored.customer = None;
        for line in &mut stored.lines {
            line.product = None;
        }
        self.lock().orders.push(stored);
        Ok(())
    }

    fn find_by_id(&self, id: Uuid, depth: FetchDepth) -> Result<Option<Order>, DomainError> {
        self.check()?;
        let state = self.lock();
        let Some(mut order) = state.orders.iter().find(|o| o.id == id).cloned() else {
            return Ok(None);
        };
        match depth {
            FetchDepth::Shallow => order.lines.clear(),
            FetchDepth::Full => {
                order.customer = state.customers.get(&order.customer_id).cloned();
                for line in &mut order.lines {
                    line.product = state.products.get(&line.product_id).cloned();
                }
            }
        }
        Ok(Some(order))
    }
}
