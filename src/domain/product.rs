use bigdecimal::BigDecimal;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub slug: String,
    pub price: BigDecimal,
}

/// Fields accepted when creating or replacing a product.
#[derive(Debug, Clone)]
pub struct ProductInput {
    pub title: String,
    pub description: Option<String>,
    pub slug: String,
    pub price: BigDecimal,
}

impl Product {
    pub fn create(input: ProductInput) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: input.title,
            description: input.description.unwrap_or_default(),
            slug: input.slug,
            price: input.price,
        }
    }

    pub fn apply(&mut self, input: ProductInput) {
        self.title = input.title;
        self.description = input.description.unwrap_or_default();
        self.slug = input.slug;
        self.price = input.price;
    }
}
