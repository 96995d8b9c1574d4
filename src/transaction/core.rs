//! Defines the core data models and database queries for transactions.

use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{Error, database_id::TransactionId};

// ============================================================================
// MODELS
// ============================================================================

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// Transactions are only ever created and deleted, never edited. To create a
/// new `Transaction`, use [Transaction::build].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction, assigned by the store.
    #[serde(rename = "_id")]
    pub id: TransactionId,
    /// A short label for what the transaction was for.
    pub title: String,
    /// The amount of money spent or earned in this transaction.
    ///
    /// Positive values are income, negative values are expenses and zero is
    /// neither.
    pub amount: f64,
    /// A free-text label used to group transactions, e.g. "Groceries".
    pub category: String,
    /// When the transaction was recorded.
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
}

impl Transaction {
    /// Create a new transaction dated now.
    ///
    /// Shortcut for [NewTransaction] for discoverability. `amount` is stored
    /// as is, see [crate::signed_amount] for converting a magnitude and a
    /// [crate::TransactionType] into a signed amount.
    pub fn build(title: &str, amount: f64, category: &str) -> NewTransaction {
        NewTransaction {
            title: title.to_owned(),
            amount,
            category: category.to_owned(),
            date: OffsetDateTime::now_utc(),
        }
    }
}

/// A transaction that has not been saved to the store yet.
#[derive(Debug, PartialEq, Clone)]
pub struct NewTransaction {
    /// A short label for what the transaction was for.
    pub title: String,

    /// The signed amount of the transaction.
    ///
    /// Positive values represent income, negative values represent
    /// expenses. This follows standard accounting conventions where
    /// money flowing into your account is positive.
    ///
    /// # Examples
    /// - `1000.00` - Salary deposit
    /// - `-45.99` - Coffee shop purchase
    /// - `-400.00` - Rent payment
    pub amount: f64,

    /// The label used to group the transaction in the category totals.
    pub category: String,

    /// When the transaction was recorded. Defaults to the current time.
    pub date: OffsetDateTime,
}

impl NewTransaction {
    /// Set the date of the transaction.
    pub fn date(mut self, date: OffsetDateTime) -> Self {
        self.date = date;
        self
    }
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Insert a new transaction into the database.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn insert_transaction(
    transaction: NewTransaction,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let transaction = connection
        .prepare(
            "INSERT INTO \"transaction\" (title, amount, category, date)
             VALUES (?1, ?2, ?3, ?4)
             RETURNING id, title, amount, category, date",
        )?
        .query_row(
            (
                transaction.title,
                transaction.amount,
                transaction.category,
                transaction.date,
            ),
            map_transaction_row,
        )?;

    Ok(transaction)
}

/// Retrieve every transaction in the database in the order they were inserted.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn select_all_transactions(connection: &Connection) -> Result<Vec<Transaction>, Error> {
    let mut statement = connection
        .prepare("SELECT id, title, amount, category, date FROM \"transaction\" ORDER BY id")?;

    let transactions = statement
        .query_map([], map_transaction_row)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(transactions)
}

/// The number of rows changed by a query.
pub type RowsAffected = usize;

/// Delete the transaction with `id`, returning the number of rows deleted.
///
/// Deleting an `id` that does not exist is not an error, it deletes zero rows.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn delete_transaction_by_id(
    id: TransactionId,
    connection: &Connection,
) -> Result<RowsAffected, Error> {
    connection
        .execute(
            "DELETE FROM \"transaction\" WHERE id = :id",
            &[(":id", &id)],
        )
        .map_err(|err| err.into())
}

/// Retrieve a transaction from the database by its `id`.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid transaction,
/// - or [Error::SqlError] there is some other SQL error.
#[cfg(test)]
pub fn get_transaction(id: TransactionId, connection: &Connection) -> Result<Transaction, Error> {
    let transaction = connection
        .prepare("SELECT id, title, amount, category, date FROM \"transaction\" WHERE id = :id")?
        .query_row(&[(":id", &id)], map_transaction_row)?;

    Ok(transaction)
}

/// Get the total number of transactions in the database.
#[cfg(test)]
pub fn count_transactions(connection: &Connection) -> Result<u32, Error> {
    connection
        .query_row("SELECT COUNT(id) FROM \"transaction\";", [], |row| {
            row.get(0)
        })
        .map_err(|error| error.into())
}

/// Create the transaction table in the database.
///
/// `AUTOINCREMENT` stops the IDs of deleted transactions from being handed
/// out again.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS \"transaction\" (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                amount REAL NOT NULL,
                category TEXT NOT NULL,
                date TEXT NOT NULL
                )",
        (),
    )?;

    Ok(())
}

/// Map a database row to a Transaction.
pub fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let id = row.get(0)?;
    let title = row.get(1)?;
    let amount = row.get(2)?;
    let category = row.get(3)?;
    let date = row.get(4)?;

    Ok(Transaction {
        id,
        title,
        amount,
        category,
        date,
    })
}

// ============================================================================
// TESTS
// ============================================================================
