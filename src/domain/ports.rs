use uuid::Uuid;

use super::customer::Customer;
use super::errors::DomainError;
use super::order::{ListResult, OrderLineSnapshot, OrderView};
use super::product::Product;

pub trait CustomerRepository: Send + Sync + 'static {
    fn create(&self, name: &str, email: &str) -> Result<Customer, DomainError>;
    fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>, DomainError>;
    fn find_by_email(&self, email: &str) -> Result<Option<Customer>, DomainError>;
}

pub trait ProductRepository: Send + Sync + 'static {
    fn create(&self, product: Product) -> Result<Product, DomainError>;
    fn find_by_name(&self, name: &str) -> Result<Option<Product>, DomainError>;
    /// Batched lookup. Ids with no matching product are simply absent from
    /// the result; the caller diffs against what it asked for.
    fn find_all_by_id(&self, ids: &[Uuid]) -> Result<Vec<Product>, DomainError>;
}

pub trait OrderRepository: Send + Sync + 'static {
    /// Persists the order and its lines atomically, assigning id and
    /// creation timestamp.
    fn create(
        &self,
        customer_id: Uuid,
        lines: Vec<OrderLineSnapshot>,
    ) -> Result<OrderView, DomainError>;
    fn find_by_id(&self, id: Uuid) -> Result<Option<OrderView>, DomainError>;
    fn list(&self, page: i64, limit: i64) -> Result<ListResult, DomainError>;
}
