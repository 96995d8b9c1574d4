//! Database ID type definition.

/// Alias for the integer type used for transaction IDs.
pub type TransactionId = i64;
