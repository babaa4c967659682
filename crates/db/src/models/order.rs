//! Order read models and aggregate views.

use advantage_core::types::{Amount, DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use crate::models::customer::Customer;

/// An order with its customer attached, as returned to API clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderWithCustomer {
    pub id: DbId,
    pub customer: Customer,
    pub total: Amount,
    pub placed: Timestamp,
    pub completed: Option<Timestamp>,
}

/// Flat result of `orders JOIN customers`; customer columns are prefixed.
#[derive(Debug, FromRow)]
pub(crate) struct OrderWithCustomerRow {
    pub id: DbId,
    pub total: Amount,
    pub placed: Timestamp,
    pub completed: Option<Timestamp>,
    pub customer_id: DbId,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_state: String,
}

impl From<OrderWithCustomerRow> for OrderWithCustomer {
    fn from(row: OrderWithCustomerRow) -> Self {
        Self {
            id: row.id,
            customer: Customer {
                id: row.customer_id,
                name: row.customer_name,
                email: row.customer_email,
                state: row.customer_state,
            },
            total: row.total,
            placed: row.placed,
            completed: row.completed,
        }
    }
}

/// One page of orders together with the order count it was read against.
#[derive(Debug, Clone)]
pub struct OrderPage {
    pub orders: Vec<OrderWithCustomer>,
    pub total_count: i64,
}

/// Sum of order totals for one customer state.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct StateTotal {
    pub state: String,
    pub total: Amount,
}

/// Sum of order totals for one customer.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct CustomerSpend {
    pub name: String,
    pub total: Amount,
}
