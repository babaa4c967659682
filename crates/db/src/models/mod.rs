//! Domain model structs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct matching
//! the database row. Rows are only ever created by the seeder, so there are
//! no create/update DTOs; inserts take the generator's seed records.

pub mod customer;
pub mod order;
pub mod server;
