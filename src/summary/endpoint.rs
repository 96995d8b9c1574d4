use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{
    summary::summarize,
    transaction::{SQLiteTransactionStore, list_transactions},
};

/// A route handler for the summary of every stored transaction as JSON.
pub async fn get_summary_endpoint(State(store): State<SQLiteTransactionStore>) -> Response {
    match list_transactions(&store) {
        Ok(transactions) => Json(summarize(&transactions)).into_response(),
        Err(error) => {
            tracing::error!("could not list transactions for the summary: {error}");
            error.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use crate::{
        endpoints,
        test_utils::{get_test_server, insert},
    };

    #[tokio::test]
    async fn summarizes_stored_transactions() {
        let (server, store) = get_test_server();
        insert(&store, "Salary", 1000.0, "Job");
        insert(&store, "Rent", -400.0, "Housing");
        insert(&store, "Food", -100.0, "Housing");

        let response = server.get(endpoints::SUMMARY).await;

        response.assert_status_ok();
        assert_eq!(
            response.json::<Value>(),
            json!({
                "income": 1000.0,
                "expenses": 500.0,
                "savings": 500.0,
                "categoryTotals": { "Job": 1000.0, "Housing": 500.0 },
            })
        );
    }

    #[tokio::test]
    async fn empty_store_is_all_zero() {
        let (server, _) = get_test_server();

        let response = server.get(endpoints::SUMMARY).await;

        assert_eq!(
            response.json::<Value>(),
            json!({ "income": 0.0, "expenses": 0.0, "savings": 0.0, "categoryTotals": {} })
        );
    }
}
