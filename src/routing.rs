//! Application router configuration.

use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::cors::CorsLayer;

use crate::{
    AppState, endpoints,
    not_found::get_404_not_found,
    summary::get_summary_endpoint,
    tracker::{
        create_transaction_form_endpoint, delete_transaction_form_endpoint, get_tracker_page,
    },
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, get_transactions_endpoint,
    },
};

/// Return a router with all the app's routes.
///
/// The JSON API lives under [endpoints::TRANSACTIONS] and accepts requests
/// from any origin. The tracker page is served from [endpoints::ROOT].
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route(
            endpoints::TRANSACTIONS,
            get(get_transactions_endpoint).post(create_transaction_endpoint),
        )
        .route(endpoints::SUMMARY, get(get_summary_endpoint))
        .route(endpoints::TRANSACTION, delete(delete_transaction_endpoint))
        .layer(CorsLayer::permissive());

    let page_routes = Router::new()
        .route(
            endpoints::ROOT,
            get(get_tracker_page).post(create_transaction_form_endpoint),
        )
        .route(
            endpoints::DELETE_TRANSACTION_VIEW,
            post(delete_transaction_form_endpoint),
        );

    page_routes
        .merge(api_routes)
        .fallback(get_404_not_found)
        .with_state(state)
}
