use bigdecimal::{BigDecimal, Zero};
use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::ports::ProductRepository;
use crate::domain::product::Product;

pub struct ProductService<R> {
    products: R,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(products: R) -> Self {
        Self { products }
    }

    pub fn create_product(
        &self,
        name: &str,
        price: BigDecimal,
        quantity: i32,
    ) -> Result<Product, DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::InvalidInput(
                "product name must not be empty".to_string(),
            ));
        }
        if price < BigDecimal::zero() {
            return Err(DomainError::InvalidInput(
                "price must not be negative".to_string(),
            ));
        }
        if quantity < 0 {
            return Err(DomainError::InvalidInput(
                "quantity must not be negative".to_string(),
            ));
        }
        if self.products.find_by_name(name)?.is_some() {
            return Err(DomainError::ProductNameTaken(name.to_string()));
        }
        self.products.create(Product {
            id: Uuid::new_v4(),
            name: name.to_string(),
            price,
            quantity,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;
    use std::sync::{Arc, Mutex};

    use super::*;

    #[derive(Clone, Default)]
    struct InMemoryProducts {
        rows: Arc<Mutex<Vec<Product>>>,
    }

    impl ProductRepository for InMemoryProducts {
        fn create(&self, product: Product) -> Result<Product, DomainError> {
            self.rows.lock().unwrap().push(product.clone());
            Ok(product)
        }

        fn find_by_name(&self, name: &str) -> Result<Option<Product>, DomainError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .find(|p| p.name == name)
                .cloned())
        }

        fn find_all_by_id(&self, ids: &[Uuid]) -> Result<Vec<Product>, DomainError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .filter(|p| ids.contains(&p.id))
                .cloned()
                .collect())
        }
    }

    fn price(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).expect("valid decimal")
    }

    #[test]
    fn creates_product() {
        let svc = ProductService::new(InMemoryProducts::default());

        let product = svc
            .create_product("keyboard", price("10.00"), 5)
            .expect("create failed");

        assert_eq!(product.name, "keyboard");
        assert_eq!(product.quantity, 5);
    }

    #[test]
    fn rejects_duplicate_name() {
        let svc = ProductService::new(InMemoryProducts::default());
        svc.create_product("keyboard", price("10.00"), 5)
            .expect("create failed");

        let err = svc
            .create_product("keyboard", price("12.00"), 3)
            .unwrap_err();

        assert!(matches!(err, DomainError::ProductNameTaken(_)));
    }

    #[test]
    fn rejects_negative_price_and_quantity() {
        let svc = ProductService::new(InMemoryProducts::default());

        assert!(matches!(
            svc.create_product("keyboard", price("-1.00"), 5),
            Err(DomainError::InvalidInput(_))
        ));
        assert!(matches!(
            svc.create_product("keyboard", price("1.00"), -5),
            Err(DomainError::InvalidInput(_))
        ));
    }
}
