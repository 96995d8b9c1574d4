//! The server-rendered tracker page.
//!
//! The page shows the transaction form, the list of transactions, the summary
//! cards and a pie chart of category totals. Forms post back to the server and
//! the page is rendered again from the store.

mod chart;
mod handlers;
mod page;
mod state;

pub use handlers::{
    create_transaction_form_endpoint, delete_transaction_form_endpoint, get_tracker_page,
};
