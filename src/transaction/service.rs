//! Validation, sign normalization and the create/list/delete operations over
//! a [TransactionStore].

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{
    Error,
    database_id::TransactionId,
    transaction::{NewTransaction, Transaction, TransactionStore},
};

/// Whether money was earned or spent.
///
/// The type is not stored, it only decides the sign of a new transaction's
/// amount. See [signed_amount].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money earned, stored as a positive amount.
    #[default]
    Income,
    /// Money spent, stored as a negative amount.
    Expense,
}

impl TransactionType {
    /// The type implied by an amount that already carries its sign.
    ///
    /// Negative amounts are expenses, everything else is income, so that
    /// `signed_amount(amount, TransactionType::infer(amount)) == amount`.
    pub fn infer(amount: f64) -> Self {
        if amount < 0.0 {
            TransactionType::Expense
        } else {
            TransactionType::Income
        }
    }

    /// The lowercase name used in forms and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

/// Convert a caller-supplied amount and type into the amount to store.
///
/// The magnitude of `raw_amount` is kept and its sign is discarded:
/// expenses are stored as `-|raw_amount|` and income as `|raw_amount|`.
pub fn signed_amount(raw_amount: f64, transaction_type: TransactionType) -> f64 {
    match transaction_type {
        TransactionType::Expense => -raw_amount.abs(),
        TransactionType::Income => raw_amount.abs(),
    }
}

/// The fields a client may send to create a transaction.
///
/// Every field is optional at this stage so that a missing field is reported
/// as a validation error rather than a deserialization failure.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct CreateTransactionRequest {
    /// The label of the transaction, must not be blank.
    #[serde(default)]
    pub title: Option<String>,
    /// The amount of the transaction, must be finite.
    #[serde(default)]
    pub amount: Option<f64>,
    /// The grouping label of the transaction, must not be blank.
    #[serde(default)]
    pub category: Option<String>,
    /// Decides the sign of the stored amount. When absent the type is inferred
    /// from the sign of `amount`.
    #[serde(default, rename = "type")]
    pub transaction_type: Option<TransactionType>,
    /// When the transaction happened, defaults to the time it is created.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub date: Option<OffsetDateTime>,
}

impl CreateTransactionRequest {
    /// Check the request and apply the sign convention.
    ///
    /// # Errors
    /// Returns a:
    /// - [Error::EmptyTitle] if the title is missing or blank,
    /// - [Error::EmptyCategory] if the category is missing or blank,
    /// - or [Error::InvalidAmount] if the amount is missing, NaN or infinite.
    pub fn validate(self) -> Result<NewTransaction, Error> {
        let title = match self.title {
            Some(title) if !title.trim().is_empty() => title,
            _ => return Err(Error::EmptyTitle),
        };

        let category = match self.category {
            Some(category) if !category.trim().is_empty() => category,
            _ => return Err(Error::EmptyCategory),
        };

        let raw_amount = match self.amount {
            Some(amount) if amount.is_finite() => amount,
            _ => return Err(Error::InvalidAmount),
        };

        let transaction_type = self
            .transaction_type
            .unwrap_or_else(|| TransactionType::infer(raw_amount));

        Ok(NewTransaction {
            title,
            amount: signed_amount(raw_amount, transaction_type),
            category,
            date: self.date.unwrap_or_else(OffsetDateTime::now_utc),
        })
    }
}

/// Validate `request` and save it to `store`.
///
/// # Errors
/// Returns a validation error (see [CreateTransactionRequest::validate]) or
/// any error from the store.
pub fn create_transaction(
    request: CreateTransactionRequest,
    store: &impl TransactionStore,
) -> Result<Transaction, Error> {
    let transaction = request.validate()?;

    store.create(transaction)
}

/// Get every stored transaction in the store's natural order.
///
/// # Errors
/// Returns any error from the store.
pub fn list_transactions(store: &impl TransactionStore) -> Result<Vec<Transaction>, Error> {
    store.get_all()
}

/// Delete the transaction with `id`.
///
/// Deleting a transaction that does not exist succeeds without changing the
/// store, so deleting twice is the same as deleting once.
///
/// # Errors
/// Returns any error from the store.
pub fn delete_transaction(id: TransactionId, store: &impl TransactionStore) -> Result<(), Error> {
    let rows_affected = store.delete(id)?;

    if rows_affected == 0 {
        tracing::debug!("Tried to delete transaction {id}, but it does not exist.");
    }

    Ok(())
}

#[cfg(test)]
mod sign_tests {
    use crate::transaction::{TransactionType, signed_amount};

    #[test]
    fn expense_is_negative() {
        assert_eq!(signed_amount(50.0, TransactionType::Expense), -50.0);
        assert_eq!(signed_amount(-50.0, TransactionType::Expense), -50.0);
    }

    #[test]
    fn income_is_positive() {
        assert_eq!(signed_amount(50.0, TransactionType::Income), 50.0);
        assert_eq!(signed_amount(-50.0, TransactionType::Income), 50.0);
    }

    #[test]
    fn inferred_type_keeps_signed_amount() {
        for amount in [-12.5, 0.0, 99.99] {
            assert_eq!(signed_amount(amount, TransactionType::infer(amount)), amount);
        }
    }

    #[test]
    fn type_deserializes_from_lowercase() {
        let got: TransactionType = serde_json::from_str("\"expense\"").unwrap();

        assert_eq!(got, TransactionType::Expense);
        assert!(serde_json::from_str::<TransactionType>("\"Expense\"").is_err());
    }
}


#[cfg(test)]
mod service_tests {
    use std::sync::{Arc, Mutex};

    use rusqlite::Connection;

    use crate::{
        Error,
        database_id::TransactionId,
        db::initialize,
        transaction::{
            CreateTransactionRequest, NewTransaction, SQLiteTransactionStore, Transaction,
            TransactionStore, TransactionType, core::RowsAffected, create_transaction,
            delete_transaction, list_transactions,
        },
    };

    fn get_store() -> SQLiteTransactionStore {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        SQLiteTransactionStore::new(Arc::new(Mutex::new(conn)))
    }

    fn request(
        title: &str,
        amount: f64,
        category: &str,
        transaction_type: TransactionType,
    ) -> CreateTransactionRequest {
        CreateTransactionRequest {
            title: Some(title.to_owned()),
            amount: Some(amount),
            category: Some(category.to_owned()),
            transaction_type: Some(transaction_type),
            date: None,
        }
    }

    #[test]
    fn create_expense_stores_negative_amount() {
        let store = get_store();

        let transaction = create_transaction(
            request("Groceries", 50.0, "Food", TransactionType::Expense),
            &store,
        )
        .unwrap();

        assert_eq!(transaction.amount, -50.0);
    }

    #[test]
    fn create_income_stores_positive_amount() {
        let store = get_store();

        let transaction = create_transaction(
            request("Salary", 50.0, "Job", TransactionType::Income),
            &store,
        )
        .unwrap();

        assert_eq!(transaction.amount, 50.0);
    }

    #[test]
    fn create_then_list_contains_exactly_one_match() {
        let store = get_store();

        let created = create_transaction(
            request("Rent", 400.0, "Housing", TransactionType::Expense),
            &store,
        )
        .unwrap();

        let transactions = list_transactions(&store).unwrap();
        let matches = transactions
            .iter()
            .filter(|t| t.title == "Rent" && t.amount == -400.0 && t.category == "Housing")
            .count();
        assert_eq!(matches, 1);
        assert_eq!(transactions, vec![created]);
    }

    #[test]
    fn invalid_request_does_not_touch_store() {
        let store = get_store();

        let result = create_transaction(
            request("", 10.0, "Food", TransactionType::Expense),
            &store,
        );

        assert_eq!(result, Err(Error::EmptyTitle));
        assert_eq!(list_transactions(&store), Ok(vec![]));
    }

    #[test]
    fn delete_then_list_excludes_id() {
        let store = get_store();
        let keep = create_transaction(
            request("Salary", 1000.0, "Job", TransactionType::Income),
            &store,
        )
        .unwrap();
        let remove = create_transaction(
            request("Rent", 400.0, "Housing", TransactionType::Expense),
            &store,
        )
        .unwrap();

        delete_transaction(remove.id, &store).unwrap();

        assert_eq!(list_transactions(&store), Ok(vec![keep]));
    }

    #[test]
    fn delete_missing_id_succeeds_without_changes() {
        let store = get_store();
        let keep = create_transaction(
            request("Salary", 1000.0, "Job", TransactionType::Income),
            &store,
        )
        .unwrap();

        assert_eq!(delete_transaction(keep.id + 100, &store), Ok(()));
        assert_eq!(list_transactions(&store), Ok(vec![keep]));
    }

    #[test]
    fn delete_twice_succeeds() {
        let store = get_store();
        let transaction = create_transaction(
            request("Salary", 1000.0, "Job", TransactionType::Income),
            &store,
        )
        .unwrap();

        assert_eq!(delete_transaction(transaction.id, &store), Ok(()));
        assert_eq!(delete_transaction(transaction.id, &store), Ok(()));
    }

    struct UnreachableStore;

    impl TransactionStore for UnreachableStore {
        fn create(&self, _: NewTransaction) -> Result<Transaction, Error> {
            Err(Error::DatabaseLockError)
        }

        fn get_all(&self) -> Result<Vec<Transaction>, Error> {
            Err(Error::DatabaseLockError)
        }

        fn delete(&self, _: TransactionId) -> Result<RowsAffected, Error> {
            Err(Error::DatabaseLockError)
        }
    }

    #[test]
    fn store_errors_propagate() {
        let store = UnreachableStore;

        assert_eq!(
            create_transaction(
                request("Salary", 1000.0, "Job", TransactionType::Income),
                &store
            ),
            Err(Error::DatabaseLockError)
        );
        assert_eq!(list_transactions(&store), Err(Error::DatabaseLockError));
        assert_eq!(delete_transaction(1, &store), Err(Error::DatabaseLockError));
    }
}
