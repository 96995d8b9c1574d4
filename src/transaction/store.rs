//! Defines the transaction store trait and its SQLite implementation.

use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::Connection;

use crate::{
    Error,
    database_id::TransactionId,
    transaction::core::{
        NewTransaction, RowsAffected, Transaction, delete_transaction_by_id, insert_transaction,
        select_all_transactions,
    },
};

/// Handles the creation, retrieval and deletion of transactions.
///
/// The store is the sole owner of persisted transactions. Each method is an
/// independent unit of work, no guarantees are made across calls.
pub trait TransactionStore {
    /// Save a new transaction, assigning it a unique ID.
    fn create(&self, transaction: NewTransaction) -> Result<Transaction, Error>;

    /// Retrieve every transaction in the store's natural (insertion) order.
    fn get_all(&self) -> Result<Vec<Transaction>, Error>;

    /// Delete the transaction with `id`.
    ///
    /// Implementers should report how many transactions were deleted rather
    /// than failing when `id` does not exist.
    fn delete(&self, id: TransactionId) -> Result<RowsAffected, Error>;
}

/// Stores transactions in a SQLite database.
#[derive(Debug, Clone)]
pub struct SQLiteTransactionStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteTransactionStore {
    /// Create a new store for the SQLite `connection`.
    ///
    /// The database is expected to be initialized with [crate::initialize_db].
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.connection.lock().map_err(|error| {
            tracing::error!("could not acquire database lock: {error}");
            Error::DatabaseLockError
        })
    }
}

impl TransactionStore for SQLiteTransactionStore {
    fn create(&self, transaction: NewTransaction) -> Result<Transaction, Error> {
        let connection = self.lock()?;
        insert_transaction(transaction, &connection)
    }

    fn get_all(&self) -> Result<Vec<Transaction>, Error> {
        let connection = self.lock()?;
        select_all_transactions(&connection)
    }

    fn delete(&self, id: TransactionId) -> Result<RowsAffected, Error> {
        let connection = self.lock()?;
        delete_transaction_by_id(id, &connection)
    }
}
