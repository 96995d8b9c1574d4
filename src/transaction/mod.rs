//! Transaction management for the finance tracker.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and `NewTransaction` for creating transactions
//! - The `TransactionStore` trait and its SQLite implementation
//! - Validation and sign normalization of creation requests
//! - The JSON API handlers for listing, creating and deleting transactions

mod core;
mod create_endpoint;
mod delete_endpoint;
mod list_endpoint;
mod service;
mod store;

pub use core::{NewTransaction, Transaction, create_transaction_table};
pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;
pub use list_endpoint::get_transactions_endpoint;
pub use service::{
    CreateTransactionRequest, TransactionType, create_transaction, delete_transaction,
    list_transactions, signed_amount,
};
pub use store::{SQLiteTransactionStore, TransactionStore};
