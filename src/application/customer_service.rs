use uuid::Uuid;

use crate::domain::customer::{Customer, CustomerUpdate, NewCustomer};
use crate::domain::errors::DomainError;
use crate::domain::page::{Page, PageRequest};
use crate::domain::ports::CustomerRepository;

pub struct CustomerService<R> {
    repo: R,
}

impl<R: CustomerRepository> CustomerService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn create_customer(&self, input: NewCustomer) -> Result<Customer, DomainError> {
        let customer = Customer::create(input);
        self.repo.create(&customer)?;
        log::info!("Created customer {}", customer.id);
        Ok(customer)
    }

    pub fn get_customer(&self, id: Uuid) -> Result<Customer, DomainError> {
        self.repo
            .find_by_id(id)?
            .ok_or(DomainError::NotFound("Customer"))
    }

    pub fn list_customers(&self, page: PageRequest) -> Result<Page<Customer>, DomainError> {
        self.repo.list(page)
    }

    pub fn update_customer(
        &self,
        id: Uuid,
        update: CustomerUpdate,
    ) -> Result<Customer, DomainError> {
        let mut customer = self.get_customer(id)?;
        customer.apply(update);
        self.repo.update(&customer)?;
        Ok(customer)
    }

    pub fn delete_customer(&self, id: Uuid) -> Result<(), DomainError> {
        self.get_customer(id)?;
        self.repo.delete(id)?;
        log::info!("Deleted customer {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::application::test_support::InMemoryStore;

    fn birth_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(1995, 1, 1).expect("valid date")
    }

    fn new_customer(name: &str) -> NewCustomer {
        NewCustomer {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: "0987654321".to_string(),
            birth_date: birth_date(),
        }
    }

    #[test]
    fn create_echoes_fields_and_assigns_fresh_id() {
        let service = CustomerService::new(InMemoryStore::default());

        let a = service.create_customer(new_customer("Jane")).expect("create");
        let b = service.create_customer(new_customer("Jane")).expect("create");

        assert_eq!(a.name, "Jane");
        assert_eq!(a.email, "jane@example.com");
        assert_eq!(a.phone, "0987654321");
        assert_eq!(a.birth_date, birth_date());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn get_unknown_customer_is_not_found() {
        let service = CustomerService::new(InMemoryStore::default());

        let err = service.get_customer(Uuid::new_v4()).unwrap_err();

        assert!(matches!(err, DomainError::NotFound("Customer")));
    }

    #[test]
    fn update_overwrites_fields_and_clears_missing_phone() {
        let store = InMemoryStore::default();
        let service = CustomerService::new(store.clone());
        let created = service.create_customer(new_customer("John")).expect("create");

        let updated = service
            .update_customer(
                created.id,
                CustomerUpdate {
                    name: "John Smith".to_string(),
                    email: "john.smith@example.com".to_string(),
                    phone: None,
                    birth_date: birth_date(),
                },
            )
            .expect("update");

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.phone, "");
        let stored = service.get_customer(created.id).expect("get");
        assert_eq!(stored.name, "John Smith");
    }

    #[test]
    fn update_unknown_customer_mutates_nothing() {
        let store = InMemoryStore::default();
        let service = CustomerService::new(store.clone());
        service.create_customer(new_customer("John")).expect("create");
        let before = store.customers();

        let err = service
            .update_customer(
                Uuid::new_v4(),
                CustomerUpdate {
                    name: "Ghost".to_string(),
                    email: "ghost@example.com".to_string(),
                    phone: None,
                    birth_date: birth_date(),
                },
            )
            .unwrap_err();

        assert!(matches!(err, DomainError::NotFound(_)));
        assert_eq!(store.customers(), before);
    }

    #[test]
    fn delete_removes_customer() {
        let service = CustomerService::new(InMemoryStore::default());
        let created = service.create_customer(new_customer("John")).expect("create");

        service.delete_customer(created.id).expect("delete");

        assert!(matches!(
            service.get_customer(created.id),
            Err(DomainError::NotFound(_))
        ));
    }

    #[test]
    fn delete_unknown_customer_is_not_found() {
        let service = CustomerService::new(InMemoryStore::default());

        let err = service.delete_customer(Uuid::new_v4()).unwrap_err();

        assert!(matches!(err, DomainError::NotFound("Customer")));
    }

    #[test]
    fn list_pages_with_full_total() {
        let service = CustomerService::new(InMemoryStore::default());
        for name in ["Ana", "Bruno", "Carla", "Davi", "Eva"] {
            service.create_customer(new_customer(name)).expect("create");
        }

        let first = service.list_customers(PageRequest::new(1, 2)).expect("list");
        let last = service.list_customers(PageRequest::new(3, 2)).expect("list");

        assert_eq!(first.items.len(), 2);
        assert_eq!(first.total, 5);
        assert_eq!(first.total_pages(), 3);
        assert_eq!(first.items[0].name, "Ana");
        assert_eq!(last.items.len(), 1);
        assert_eq!(last.items[0].name, "Eva");
    }

    #[test]
    fn page_far_past_the_end_is_empty() {
        let service = CustomerService::new(InMemoryStore::default());
        service.create_customer(new_customer("Ana")).expect("create");

        let page = service
            .list_customers(PageRequest::new(i64::MAX, 100))
            .expect("list");

        assert!(page.items.is_empty());
        assert_eq!(page.total, 1);
    }

    #[test]
    fn storage_fault_surfaces_as_internal() {
        let store = InMemoryStore::default();
        store.fail_all();
        let service = CustomerService::new(store);

        let err = service.create_customer(new_customer("John")).unwrap_err();

        assert!(matches!(err, DomainError::Internal(_)));
    }
}
