use uuid::Uuid;

use crate::domain::customer::Customer;
use crate::domain::errors::DomainError;
use crate::domain::ports::CustomerRepository;

pub struct CustomerService<R> {
    customers: R,
}

impl<R: CustomerRepository> CustomerService<R> {
    pub fn new(customers: R) -> Self {
        Self { customers }
    }

    pub fn create_customer(&self, name: &str, email: &str) -> Result<Customer, DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::InvalidInput(
                "customer name must not be empty".to_string(),
            ));
        }
        if self.customers.find_by_email(email)?.is_some() {
            return Err(DomainError::EmailTaken(email.to_string()));
        }
        self.customers.create(name, email)
    }

    pub fn get_customer(&self, id: Uuid) -> Result<Option<Customer>, DomainError> {
        self.customers.find_by_id(id)
    }
}
