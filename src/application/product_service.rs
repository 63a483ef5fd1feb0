use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::page::{Page, PageRequest};
use crate::domain::ports::ProductRepository;
use crate::domain::product::{Product, ProductInput};

pub struct ProductService<R> {
    repo: R,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn create_product(&self, input: ProductInput) -> Result<Product, DomainError> {
        let product = Product::create(input);
        self.repo.create(&product)?;
        log::info!("Created product {} ({})", product.id, product.slug);
        Ok(product)
    }

    pub fn get_product(&self, id: Uuid) -> Result<Product, DomainError> {
        self.repo
            .find_by_id(id)?
            .ok_or(DomainError::NotFound("Product"))
    }

    pub fn list_products(&self, page: PageRequest) -> Result<Page<Product>, DomainError> {
        self.repo.list(page)
    }

    pub fn update_product(&self, id: Uuid, input: ProductInput) -> Result<Product, DomainError> {
        let mut product = self.get_product(id)?;
        product.apply(input);
        self.repo.update(&product)?;
        Ok(product)
    }

    pub fn delete_product(&self, id: Uuid) -> Result<(), DomainError> {
        self.get_product(id)?;
        self.repo.delete(id)?;
        log::info!("Deleted product {}", id);
        Ok(())
    }
}
