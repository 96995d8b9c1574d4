//! Route handlers for the tracker page.
//!
//! Successful form submissions redirect back to the page so that it is
//! rendered from a fresh read of the store. Failures re-render the page
//! straight away with a warning banner.

use axum::{
    Form,
    extract::{Path, State, rejection::FormRejection},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};

use crate::{
    Error,
    database_id::TransactionId,
    endpoints,
    tracker::{
        page::tracker_view,
        state::{Action, FormState, ViewState, update},
    },
    transaction::{
        SQLiteTransactionStore, TransactionStore, create_transaction, delete_transaction,
        list_transactions,
    },
};

/// A route handler for the tracker page.
pub async fn get_tracker_page(State(store): State<SQLiteTransactionStore>) -> Response {
    let state = load(&store);
    let status = if state.banner.is_some() {
        StatusCode::INTERNAL_SERVER_ERROR
    } else {
        StatusCode::OK
    };

    (status, tracker_view(&state)).into_response()
}

/// A route handler for the tracker page's form, redirects to the tracker page on success.
///
/// A form that cannot be decoded, e.g. with an unknown transaction type, is
/// shown as a failed add with an empty form.
pub async fn create_transaction_form_endpoint(
    State(store): State<SQLiteTransactionStore>,
    form: Result<Form<FormState>, FormRejection>,
) -> Response {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            tracing::debug!("Rejected transaction form: {rejection}");
            let state = update(load(&store), Action::AddFailed(FormState::default()));

            return (StatusCode::BAD_REQUEST, tracker_view(&state)).into_response();
        }
    };

    match create_transaction(form.to_request(), &store) {
        Ok(_) => Redirect::to(endpoints::ROOT).into_response(),
        Err(error) => {
            tracing::error!("could not create transaction from form: {error}");
            let status = status_for(&error);
            let state = update(load(&store), Action::AddFailed(form));

            (status, tracker_view(&state)).into_response()
        }
    }
}

/// A route handler for the delete buttons, redirects to the tracker page on success.
///
/// Like the JSON API, deleting a transaction that does not exist succeeds.
pub async fn delete_transaction_form_endpoint(
    State(store): State<SQLiteTransactionStore>,
    Path(transaction_id): Path<String>,
) -> Response {
    let Ok(id) = transaction_id.parse::<TransactionId>() else {
        tracing::debug!("Ignoring delete for malformed transaction ID {transaction_id:?}");
        return Redirect::to(endpoints::ROOT).into_response();
    };

    match delete_transaction(id, &store) {
        Ok(()) => Redirect::to(endpoints::ROOT).into_response(),
        Err(error) => {
            tracing::error!("Could not delete transaction {id}: {error}");
            let status = status_for(&error);
            let state = update(load(&store), Action::DeleteFailed);

            (status, tracker_view(&state)).into_response()
        }
    }
}

/// Build the page state from a fresh read of `store`.
fn load(store: &impl TransactionStore) -> ViewState {
    let action = match list_transactions(store) {
        Ok(transactions) => Action::Fetched(transactions),
        Err(error) => {
            tracing::error!("could not list transactions: {error}");
            Action::FetchFailed
        }
    };

    update(ViewState::default(), action)
}

fn status_for(error: &Error) -> StatusCode {
    if error.is_validation_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}
