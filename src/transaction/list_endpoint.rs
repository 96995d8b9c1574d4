use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::transaction::{SQLiteTransactionStore, list_transactions};

/// A route handler for getting every transaction as a JSON array.
pub async fn get_transactions_endpoint(State(store): State<SQLiteTransactionStore>) -> Response {
    match list_transactions(&store) {
        Ok(transactions) => Json(transactions).into_response(),
        Err(error) => {
            tracing::error!("could not list transactions: {error}");
            error.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use crate::{
        Transaction, endpoints,
        test_utils::{get_test_server, insert},
    };

    #[tokio::test]
    async fn empty_store_returns_empty_array() {
        let (server, _) = get_test_server();

        let response = server.get(endpoints::TRANSACTIONS).await;

        response.assert_status_ok();
        assert_eq!(response.json::<Value>(), Value::Array(vec![]));
    }

    #[tokio::test]
    async fn returns_transactions_in_insertion_order() {
        let (server, store) = get_test_server();
        let want = vec![
            insert(&store, "Salary", 1000.0, "Job"),
            insert(&store, "Rent", -400.0, "Housing"),
            insert(&store, "Food", -100.0, "Housing"),
        ];

        let response = server.get(endpoints::TRANSACTIONS).await;

        response.assert_status_ok();
        assert_eq!(response.json::<Vec<Transaction>>(), want);
    }

    #[tokio::test]
    async fn objects_have_expected_fields() {
        let (server, store) = get_test_server();
        insert(&store, "Salary", 1000.0, "Job");

        let response = server.get(endpoints::TRANSACTIONS).await;

        let body: Value = response.json();
        let object = body[0].as_object().expect("want a JSON object");
        let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["_id", "amount", "category", "date", "title"]);
    }
}
