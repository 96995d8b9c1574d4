#![allow(missing_docs)]

use axum_test::TestServer;
use rusqlite::Connection;
use scraper::Html;

use crate::{
    AppState, build_router,
    transaction::{SQLiteTransactionStore, Transaction, TransactionStore},
};

/// Create an app backed by an in-memory database, returning the test server
/// and a handle to the same store for arranging and checking data.
pub(crate) fn get_test_server() -> (TestServer, SQLiteTransactionStore) {
    let connection = Connection::open_in_memory().expect("Could not open database in memory.");
    let state = AppState::new(connection).expect("Could not initialize database.");
    let store = state.transaction_store.clone();

    let server = TestServer::try_new(build_router(state)).expect("Could not create test server.");

    (server, store)
}

#[track_caller]
pub(crate) fn insert(
    store: &SQLiteTransactionStore,
    title: &str,
    amount: f64,
    category: &str,
) -> Transaction {
    store
        .create(Transaction::build(title, amount, category))
        .expect("Could not create transaction")
}

#[track_caller]
pub(crate) fn list_stored(store: &SQLiteTransactionStore) -> Vec<Transaction> {
    store.get_all().expect("Could not get transactions")
}

#[track_caller]
pub(crate) fn parse_html_document(text: &str) -> Html {
    let html = Html::parse_document(text);
    assert!(
        html.errors.is_empty(),
        "Got HTML parsing errors: {:?}\n{}",
        html.errors,
        text
    );
    html
}
