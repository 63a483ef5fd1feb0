use chrono::NaiveDate;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: NaiveDate,
}

/// Replacement values for an existing customer. A missing phone clears it.
#[derive(Debug, Clone)]
pub struct CustomerUpdate {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub birth_date: NaiveDate,
}

impl Customer {
    pub fn create(input: NewCustomer) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: input.name,
            email: input.email,
            phone: input.phone,
            birth_date: input.birth_date,
        }
    }

    pub fn apply(&mut self, update: CustomerUpdate) {
        self.name = update.name;
        self.email = update.email;
        self.phone = update.phone.unwrap_or_default();
        self.birth_date = update.birth_date;
    }
}
