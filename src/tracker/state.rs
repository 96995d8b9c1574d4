//! The state shown on the tracker page and the actions that change it.
//!
//! A [ViewState] is never mutated in place. Each user action is turned into an
//! [Action] and passed with the current state to [update], which returns the
//! next state.

use serde::{Deserialize, Serialize};

use crate::{
    summary::{Summary, summarize},
    transaction::{CreateTransactionRequest, Transaction, TransactionType},
};

/// The contents of the transaction form, exactly as the user typed them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormState {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, rename = "type")]
    pub transaction_type: TransactionType,
}

impl FormState {
    /// Convert the form into a creation request.
    ///
    /// An amount that does not parse as a number is left out so that it is
    /// rejected by validation.
    pub fn to_request(&self) -> CreateTransactionRequest {
        CreateTransactionRequest {
            title: Some(self.title.clone()),
            amount: self.amount.trim().parse().ok(),
            category: Some(self.category.clone()),
            transaction_type: Some(self.transaction_type),
            date: None,
        }
    }
}

/// The warning shown at the top of the page after an operation fails.
///
/// There is one generic message per kind of operation, the cause is only
/// logged on the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banner {
    FetchFailed,
    AddFailed,
    DeleteFailed,
}

impl Banner {
    pub fn message(&self) -> &'static str {
        match self {
            Banner::FetchFailed => "Cannot connect to the database. Is it running?",
            Banner::AddFailed => "Failed to add transaction",
            Banner::DeleteFailed => "Failed to delete transaction",
        }
    }
}

/// Everything needed to render the tracker page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub form: FormState,
    pub transactions: Vec<Transaction>,
    pub summary: Summary,
    pub banner: Option<Banner>,
}

/// Something that happened which changes what the page shows.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The transactions were read from the store.
    Fetched(Vec<Transaction>),
    /// The transactions could not be read.
    FetchFailed,
    /// Creating a transaction from the submitted form failed.
    AddFailed(FormState),
    /// Deleting a transaction failed.
    DeleteFailed,
}

/// Apply `action` to `state`, returning the next state.
pub fn update(state: ViewState, action: Action) -> ViewState {
    match action {
        Action::Fetched(transactions) => ViewState {
            summary: summarize(&transactions),
            transactions,
            banner: None,
            ..state
        },
        Action::FetchFailed => ViewState {
            banner: Some(Banner::FetchFailed),
            ..state
        },
        Action::AddFailed(form) => ViewState {
            form,
            banner: Some(Banner::AddFailed),
            ..state
        },
        Action::DeleteFailed => ViewState {
            banner: Some(Banner::DeleteFailed),
            ..state
        },
    }
}
