use diesel::prelude::*;
use uuid::Uuid;

use crate::db::DbPool;
use crate::domain::customer::Customer;
use crate::domain::errors::DomainError;
use crate::domain::ports::CustomerRepository;
use crate::schema::customers;

use super::models::{CustomerRow, NewCustomerRow};

pub struct DieselCustomerRepository {
    pool: DbPool,
}

impl DieselCustomerRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn to_domain(row: CustomerRow) -> Customer {
    Customer {
        id: row.id,
        name: row.name,
        email: row.email,
        created_at: row.created_at,
    }
}

impl CustomerRepository for DieselCustomerRepository {
    fn create(&self, name: &str, email: &str) -> Result<Customer, DomainError> {
        let mut conn = self.pool.get()?;

        let row: CustomerRow = diesel::insert_into(customers::table)
            .values(&NewCustomerRow {
                id: Uuid::new_v4(),
                name: name.to_string(),
                email: email.to_string(),
            })
            .returning(CustomerRow::as_returning())
            .get_result(&mut conn)?;

        Ok(to_domain(row))
    }

    fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>, DomainError> {
        let mut conn = self.pool.get()?;

        let row = customers::table
            .filter(customers::id.eq(id))
            .select(CustomerRow::as_select())
            .first(&mut conn)
            .optional()?;

        Ok(row.map(to_domain))
    }

    fn find_by_email(&self, email: &str) -> Result<Option<Customer>, DomainError> {
        let mut conn = self.pool.get()?;

        let row = customers::table
            .filter(customers::email.eq(email))
            .select(CustomerRow::as_select())
            .first(&mut conn)
            .optional()?;

        Ok(row.map(to_domain))
    }
}
