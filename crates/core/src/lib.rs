//! Domain types and pure logic for the Advantage order analytics backend.
//!
//! Nothing in this crate touches the database or the network: the random
//! domain generator and the pagination rules live here so they can be unit
//! tested in isolation and reused by the `db` and `api` crates.

pub mod error;
pub mod generator;
pub mod pagination;
pub mod types;
