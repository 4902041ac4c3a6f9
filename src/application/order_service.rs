use std::collections::{HashMap, HashSet};

use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::order::{ListResult, OrderLineRequest, OrderLineSnapshot, OrderView};
use crate::domain::ports::{CustomerRepository, OrderRepository, ProductRepository};

/// Order-creation workflow. Validates the customer, validates every
/// requested product for existence and stock, snapshots the current unit
/// price per line, and persists the order as the final step. Persistence is
/// only reached once every check has passed, so a rejected request writes
/// nothing.
pub struct OrderService<C, P, R> {
    customers: C,
    products: P,
    orders: R,
}

impl<C, P, R> OrderService<C, P, R>
where
    C: CustomerRepository,
    P: ProductRepository,
    R: OrderRepository,
{
    pub fn new(customers: C, products: P, orders: R) -> Self {
        Self {
            customers,
            products,
            orders,
        }
    }

    /// Missing products are collected and reported together (the batched
    /// lookup yields the full diff anyway); stock violations are checked in
    /// request order and fail on the first one. A product appearing on
    /// several lines is checked against the combined quantity, not each
    /// line in isolation.
    pub fn create_order(
        &self,
        customer_id: Uuid,
        requested: Vec<OrderLineRequest>,
    ) -> Result<OrderView, DomainError> {
        if requested.is_empty() {
            return Err(DomainError::InvalidInput(
                "order must contain at least one line".to_string(),
            ));
        }
        if let Some(line) = requested.iter().find(|l| l.quantity <= 0) {
            return Err(DomainError::InvalidInput(format!(
                "quantity for product {} must be positive",
                line.product_id
            )));
        }

        self.customers
            .find_by_id(customer_id)?
            .ok_or(DomainError::CustomerNotFound(customer_id))?;

        let ids: Vec<Uuid> = requested.iter().map(|l| l.product_id).collect();
        let by_id: HashMap<Uuid, _> = self
            .products
            .find_all_by_id(&ids)?
            .into_iter()
            .map(|p| (p.id, p))
            .collect();

        let mut seen = HashSet::new();
        let missing: Vec<Uuid> = ids
            .iter()
            .copied()
            .filter(|id| !by_id.contains_key(id) && seen.insert(*id))
            .collect();
        if !missing.is_empty() {
            return Err(DomainError::ProductsNotFound(missing));
        }

        let mut totals: HashMap<Uuid, i32> = HashMap::new();
        for line in &requested {
            let total = totals.entry(line.product_id).or_insert(0);
            *total = total.saturating_add(line.quantity);
        }
        for line in &requested {
            let product = &by_id[&line.product_id];
            let requested_total = totals[&line.product_id];
            if product.quantity < requested_total {
                return Err(DomainError::InsufficientStock {
                    name: product.name.clone(),
                    requested: requested_total,
                    available: product.quantity,
                });
            }
        }

        let lines = requested
            .iter()
            .map(|line| {
                let product = &by_id[&line.product_id];
                OrderLineSnapshot {
                    product_id: product.id,
                    quantity: line.quantity,
                    unit_price: product.price.clone(),
                }
            })
            .collect();

        self.orders.create(customer_id, lines)
    }

    pub fn get_order(&self, id: Uuid) -> Result<Option<OrderView>, DomainError> {
        self.orders.find_by_id(id)
    }

    pub fn list_orders(&self, page: i64, limit: i64) -> Result<ListResult, DomainError> {
        self.orders.list(page, limit)
    }
}
