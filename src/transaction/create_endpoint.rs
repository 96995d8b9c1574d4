//! Defines the endpoint for creating a new transaction.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    transaction::{CreateTransactionRequest, SQLiteTransactionStore, create_transaction},
};

/// A route handler for creating a new transaction, responds with the stored
/// transaction as JSON.
///
/// Bodies that are not JSON or have fields of the wrong type are reported as
/// a 400 with the same JSON error shape as a failed validation.
pub async fn create_transaction_endpoint(
    State(store): State<SQLiteTransactionStore>,
    body: Result<Json<CreateTransactionRequest>, JsonRejection>,
) -> Response {
    let request = match body {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::debug!("Rejected create transaction body: {rejection}");
            return Error::InvalidRequest(rejection.body_text()).into_response();
        }
    };

    match create_transaction(request, &store) {
        Ok(transaction) => Json(transaction).into_response(),
        Err(error) => {
            tracing::error!("could not create transaction: {error}");
            error.into_response()
        }
    }
}
