//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod customer_repo;
pub mod order_repo;
pub mod server_repo;

pub use customer_repo::CustomerRepo;
pub use order_repo::OrderRepo;
pub use server_repo::ServerRepo;

/// Rows per multi-row `INSERT`, keeping bind parameters well under
/// PostgreSQL's 65535 limit.
pub(crate) const INSERT_CHUNK_ROWS: usize = 1_000;

/// Build the `($1, $2), ($3, $4), ...` part of a multi-row `INSERT`.
pub(crate) fn values_clause(row_count: usize, column_count: usize) -> String {
    let mut clause = String::new();
    let mut param_idx = 1usize;
    for row in 0..row_count {
        if row > 0 {
            clause.push_str(", ");
        }
        clause.push('(');
        for col in 0..column_count {
            if col > 0 {
                clause.push_str(", ");
            }
            clause.push('$');
            clause.push_str(&param_idx.to_string());
            param_idx += 1;
        }
        clause.push(')');
    }
    clause
}
