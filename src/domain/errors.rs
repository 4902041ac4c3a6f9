use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("customer {0} not found")]
    CustomerNotFound(Uuid),
    #[error("products not found: {}", join_ids(.0))]
    ProductsNotFound(Vec<Uuid>),
    #[error("insufficient stock for product '{name}': requested {requested}, available {available}")]
    InsufficientStock {
        name: String,
        requested: i32,
        available: i32,
    },
    #[error("email '{0}' is already registered")]
    EmailTaken(String),
    #[error("product '{0}' already exists")]
    ProductNameTaken(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("internal error: {0}")]
    Internal(String),
}

fn join_ids(ids: &[Uuid]) -> String {
    ids.iter()
        .map(Uuid::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_stock_names_product_and_both_quantities() {
        let err = DomainError::InsufficientStock {
            name: "keyboard".to_string(),
            requested: 10,
            available: 5,
        };
        let msg = err.to_string();
        assert!(msg.contains("keyboard"));
        assert!(msg.contains("10"));
        assert!(msg.contains("5"));
    }

    #[test]
    fn products_not_found_lists_every_missing_id() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let msg = DomainError::ProductsNotFound(vec![a, b]).to_string();
        assert!(msg.contains(&a.to_string()));
        assert!(msg.contains(&b.to_string()));
    }

    #[test]
    fn customer_not_found_names_the_id() {
        let id = Uuid::new_v4();
        let msg = DomainError::CustomerNotFound(id).to_string();
        assert!(msg.contains(&id.to_string()));
    }
}
