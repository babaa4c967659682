//! Random domain generator for demo and test data.
//!
//! Produces synthetic customers, orders and servers with plausible
//! attributes. Every function takes its random source explicitly so callers
//! can pass a seeded [`rand::rngs::StdRng`] for reproducible output, and
//! time-dependent functions take `now` instead of reading the clock.

use std::collections::HashSet;

use chrono::{DurationRound, TimeDelta};
use rand::Rng;

use crate::error::CoreError;
use crate::types::{Amount, DbId, Timestamp};

// ---------------------------------------------------------------------------
// Vocabularies
// ---------------------------------------------------------------------------

/// Customer name prefixes. No prefix character appears in any suffix, so
/// every prefix/suffix pair concatenates to a distinct name.
pub const NAME_PREFIXES: [&str; 10] = ["A", "B", "C", "AA", "CC", "AC", "AG", "GG", "FA", "BB"];

/// Customer name suffixes.
pub const NAME_SUFFIXES: [&str; 10] = ["Z", "YY", "Y", "YZ", "XY", "XZ", "ZZ", "OZ", "O", "P"];

/// Number of distinct customer names the generator can produce.
pub const NAME_CAPACITY: usize = NAME_PREFIXES.len() * NAME_SUFFIXES.len();

/// Region codes customers are spread across.
pub const STATE_CODES: [&str; 12] = [
    "CA", "CO", "DE", "HI", "KS", "MI", "MS", "MA", "NE", "WA", "WI", "MP",
];

/// Orders are placed within this many days before `now`.
pub const PLACED_WINDOW_DAYS: i64 = 90;

/// Inclusive lower bound for an order total.
pub const MIN_ORDER_TOTAL: Amount = 100;

/// Exclusive upper bound for an order total.
pub const MAX_ORDER_TOTAL: Amount = 10_000;

/// Shortest lead time between placing and completing an order.
pub const MIN_LEAD_DAYS: i64 = 7;

/// Exclusive upper bound for the drawn lead time.
pub const MAX_LEAD_DAYS: i64 = 21;

/// Random draws attempted before falling back to enumerating free names.
const MAX_RANDOM_NAME_ATTEMPTS: usize = 64;

const SERVER_ENVIRONMENTS: [&str; 3] = ["Dev", "QA", "Prod"];
const SERVER_ROLES: [&str; 3] = ["Web", "Mail", "Services"];
const OFFLINE_SERVERS: [&str; 1] = ["Dev_Mail"];

// ---------------------------------------------------------------------------
// Generated records
// ---------------------------------------------------------------------------

/// A customer ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerSeed {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub state: String,
}

/// An order ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSeed {
    pub id: DbId,
    pub customer_id: DbId,
    pub total: Amount,
    pub placed: Timestamp,
    pub completed: Option<Timestamp>,
}

/// A server from the static seed list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSeed {
    pub id: DbId,
    pub name: String,
    pub is_online: bool,
}

// ---------------------------------------------------------------------------
// Attribute generators
// ---------------------------------------------------------------------------

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, items: &[&'a str]) -> &'a str {
    items[rng.random_range(0..items.len())]
}

fn all_customer_names() -> impl Iterator<Item = String> {
    NAME_PREFIXES.iter().flat_map(|prefix| {
        NAME_SUFFIXES
            .iter()
            .map(move |suffix| format!("{prefix}{suffix}"))
    })
}

/// Generate a customer name not present in `existing`.
///
/// Draws a random prefix and suffix up to a fixed number of times. If every
/// draw collides, the remaining free names are enumerated and one is picked
/// uniformly, so the call always terminates.
///
/// Fails with [`CoreError::NameSpaceExhausted`] once `existing` holds
/// [`NAME_CAPACITY`] names or no free combination remains.
pub fn generate_customer_name<R: Rng + ?Sized>(
    rng: &mut R,
    existing: &HashSet<String>,
) -> Result<String, CoreError> {
    let exhausted = CoreError::NameSpaceExhausted {
        capacity: NAME_CAPACITY,
    };
    if existing.len() >= NAME_CAPACITY {
        return Err(exhausted);
    }

    for _ in 0..MAX_RANDOM_NAME_ATTEMPTS {
        let name = format!(
            "{}{}",
            pick(rng, &NAME_PREFIXES),
            pick(rng, &NAME_SUFFIXES)
        );
        if !existing.contains(&name) {
            return Ok(name);
        }
    }

    let free: Vec<String> = all_customer_names()
        .filter(|name| !existing.contains(name))
        .collect();
    if free.is_empty() {
        return Err(exhausted);
    }
    let idx = rng.random_range(0..free.len());
    Ok(free[idx].clone())
}

/// Derive a contact email from a customer name.
///
/// ```
/// use advantage_core::generator::derive_email;
///
/// assert_eq!(derive_email("AAXY"), "contact@aaxy.com");
/// ```
pub fn derive_email(name: &str) -> String {
    format!("contact@{}.com", name.to_lowercase())
}

/// Pick a region code uniformly from [`STATE_CODES`].
pub fn pick_state<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick(rng, &STATE_CODES)
}

/// Draw an order total in `[MIN_ORDER_TOTAL, MAX_ORDER_TOTAL)`.
pub fn random_order_total<R: Rng + ?Sized>(rng: &mut R) -> Amount {
    rng.random_range(MIN_ORDER_TOTAL..MAX_ORDER_TOTAL)
}

/// Draw a placement time within the last [`PLACED_WINDOW_DAYS`] days.
///
/// The result lies on a whole minute.
pub fn random_placed<R: Rng + ?Sized>(rng: &mut R, now: Timestamp) -> Timestamp {
    let now = now.duration_trunc(TimeDelta::minutes(1)).unwrap_or(now);
    let window = TimeDelta::days(PLACED_WINDOW_DAYS);
    let offset = rng.random_range(0..window.num_minutes());
    now - window + TimeDelta::minutes(offset)
}

/// Draw a completion time for an order placed at `placed`.
///
/// A lead time is drawn in `[MIN_LEAD_DAYS, MAX_LEAD_DAYS)`. Orders younger
/// than the lead time are still open (`None`); older ones complete a whole
/// number of days after placement, between `MIN_LEAD_DAYS` and the lead time.
pub fn random_completed<R: Rng + ?Sized>(
    rng: &mut R,
    placed: Timestamp,
    now: Timestamp,
) -> Option<Timestamp> {
    let lead_days = rng.random_range(MIN_LEAD_DAYS..MAX_LEAD_DAYS);
    if now - placed < TimeDelta::days(lead_days) {
        return None;
    }
    let offset = rng.random_range(MIN_LEAD_DAYS..=lead_days);
    Some(placed + TimeDelta::days(offset))
}

// ---------------------------------------------------------------------------
// Record generators
// ---------------------------------------------------------------------------

/// Generate `count` customers with ids `1..=count` and pairwise distinct names.
pub fn generate_customers<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
) -> Result<Vec<CustomerSeed>, CoreError> {
    let mut names = HashSet::with_capacity(count);
    let mut customers = Vec::with_capacity(count);

    for id in 1..=count {
        let name = generate_customer_name(rng, &names)?;
        names.insert(name.clone());
        customers.push(CustomerSeed {
            id: id as DbId,
            email: derive_email(&name),
            state: pick_state(rng).to_string(),
            name,
        });
    }

    Ok(customers)
}

/// Generate `count` orders with ids `1..=count`.
///
/// Each order references a customer drawn uniformly from `customer_ids`.
pub fn generate_orders<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    customer_ids: &[DbId],
    now: Timestamp,
) -> Result<Vec<OrderSeed>, CoreError> {
    if count > 0 && customer_ids.is_empty() {
        return Err(CoreError::Validation(
            "cannot generate orders without customers".to_string(),
        ));
    }

    let orders = (1..=count)
        .map(|id| {
            let customer_id = customer_ids[rng.random_range(0..customer_ids.len())];
            let placed = random_placed(rng, now);
            OrderSeed {
                id: id as DbId,
                customer_id,
                total: random_order_total(rng),
                placed,
                completed: random_completed(rng, placed, now),
            }
        })
        .collect();

    Ok(orders)
}

/// The fixed server inventory: every environment crossed with every role.
pub fn seed_servers() -> Vec<ServerSeed> {
    SERVER_ENVIRONMENTS
        .iter()
        .flat_map(|env| SERVER_ROLES.iter().map(move |role| format!("{env}_{role}")))
        .enumerate()
        .map(|(idx, name)| ServerSeed {
            id: idx as DbId + 1,
            is_online: !OFFLINE_SERVERS.contains(&name.as_str()),
            name,
        })
        .collect()
}
