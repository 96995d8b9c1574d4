use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{
    database_id::TransactionId,
    transaction::{SQLiteTransactionStore, delete_transaction},
};

/// A route handler for deleting a transaction, responds with `{"success": true}`.
///
/// Unknown IDs, including path segments that are not valid IDs, are treated
/// as already deleted.
pub async fn delete_transaction_endpoint(
    State(store): State<SQLiteTransactionStore>,
    Path(transaction_id): Path<String>,
) -> Response {
    let Ok(id) = transaction_id.parse::<TransactionId>() else {
        tracing::debug!("Ignoring delete for malformed transaction ID {transaction_id:?}");
        return success();
    };

    match delete_transaction(id, &store) {
        Ok(()) => success(),
        Err(error) => {
            tracing::error!("Could not delete transaction {id}: {error}");
            error.into_response()
        }
    }
}

fn success() -> Response {
    Json(json!({ "success": true })).into_response()
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use crate::{
        endpoints::{self, format_endpoint},
        test_utils::{get_test_server, insert, list_stored},
    };

    #[tokio::test]
    async fn deletes_transaction() {
        let (server, store) = get_test_server();
        let keep = insert(&store, "Salary", 1000.0, "Job");
        let remove = insert(&store, "Rent", -400.0, "Housing");

        let response = server
            .delete(&format_endpoint(endpoints::TRANSACTION, remove.id))
            .await;

        response.assert_status_ok();
        assert_eq!(response.json::<Value>(), json!({ "success": true }));
        assert_eq!(list_stored(&store), vec![keep]);
    }

    #[tokio::test]
    async fn missing_id_succeeds_without_changes() {
        let (server, store) = get_test_server();
        let keep = insert(&store, "Salary", 1000.0, "Job");

        let response = server
            .delete(&format_endpoint(endpoints::TRANSACTION, 999))
            .await;

        response.assert_status_ok();
        assert_eq!(response.json::<Value>(), json!({ "success": true }));
        assert_eq!(list_stored(&store), vec![keep]);
    }

    #[tokio::test]
    async fn malformed_id_succeeds_without_changes() {
        let (server, store) = get_test_server();
        let keep = insert(&store, "Salary", 1000.0, "Job");

        let response = server.delete("/transactions/not-an-id").await;

        response.assert_status_ok();
        assert_eq!(response.json::<Value>(), json!({ "success": true }));
        assert_eq!(list_stored(&store), vec![keep]);
    }
}
