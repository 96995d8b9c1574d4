//! Renders the tracker page from a [ViewState].

use maud::{Markup, html};

use crate::{
    endpoints::{self, format_endpoint},
    html::{
        BUTTON_DELETE_STYLE, BUTTON_PRIMARY_STYLE, FORM_TEXT_INPUT_STYLE, HeadElement,
        PAGE_CONTAINER_STYLE, base, format_currency,
    },
    summary::Summary,
    tracker::{
        chart::{CHART_ID, ECHARTS_URL, category_chart, chart_script},
        state::{Banner, FormState, ViewState},
    },
    transaction::{Transaction, TransactionType},
};

pub(super) fn tracker_view(state: &ViewState) -> Markup {
    let content = html! {
        div class=(PAGE_CONTAINER_STYLE)
        {
            h1 class="text-5xl font-extrabold text-center mb-10 tracking-wide drop-shadow-lg"
            {
                "Finance Tracker"
            }

            div class="grid grid-cols-1 md:grid-cols-2 gap-8 w-full max-w-6xl items-start justify-items-center"
            {
                div
                    id=(CHART_ID)
                    class="rounded w-full max-w-md h-[450px]"
                {}

                div class="w-full max-w-lg"
                {
                    @if let Some(banner) = state.banner {
                        (banner_view(banner))
                    }

                    (form_view(&state.form))
                    (transaction_list_view(&state.transactions))
                    (summary_view(&state.summary))
                }
            }
        }
    };

    let scripts = [
        HeadElement::ScriptLink(ECHARTS_URL.to_owned()),
        chart_script(&category_chart(&state.summary.category_totals)),
    ];

    base("Finance Tracker", &scripts, &content)
}

fn banner_view(banner: Banner) -> Markup {
    html! {
        div
            id="error-banner"
            role="alert"
            class="mb-4 p-2 bg-red-100 text-red-700 rounded"
        {
            (banner.message())
        }
    }
}

fn form_view(form: &FormState) -> Markup {
    html! {
        form
            method="post"
            action=(endpoints::ROOT)
            class="flex flex-wrap items-center gap-2 mb-6 justify-center"
        {
            input
                class=(FORM_TEXT_INPUT_STYLE)
                name="title"
                placeholder="Title"
                required
                value=(form.title);

            input
                class=(FORM_TEXT_INPUT_STYLE)
                type="number"
                step="any"
                name="amount"
                placeholder="Amount"
                required
                value=(form.amount);

            input
                class=(FORM_TEXT_INPUT_STYLE)
                name="category"
                placeholder="Category"
                required
                value=(form.category);

            select class=(FORM_TEXT_INPUT_STYLE) name="type"
            {
                @for transaction_type in [TransactionType::Income, TransactionType::Expense] {
                    option
                        value=(transaction_type.as_str())
                        selected[transaction_type == form.transaction_type]
                    {
                        (match transaction_type {
                            TransactionType::Income => "Income",
                            TransactionType::Expense => "Expense",
                        })
                    }
                }
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add" }
        }
    }
}

fn transaction_list_view(transactions: &[Transaction]) -> Markup {
    html! {
        ul id="transactions" class="mb-6 divide-y max-h-64 overflow-y-auto pr-2"
        {
            @for transaction in transactions {
                li class="flex justify-between py-2"
                {
                    span
                    {
                        (transaction.title) " (" (transaction.category) ") – "

                        span class=(amount_style(transaction.amount))
                        {
                            (format_currency(transaction.amount))
                        }
                    }

                    form
                        method="post"
                        action=(format_endpoint(endpoints::DELETE_TRANSACTION_VIEW, transaction.id))
                    {
                        button
                            type="submit"
                            class=(BUTTON_DELETE_STYLE)
                            aria-label=(format!("Delete {}", transaction.title))
                        {
                            "❌"
                        }
                    }
                }
            }
        }
    }
}

fn amount_style(amount: f64) -> &'static str {
    if amount > 0.0 {
        "text-green-600 font-bold"
    } else {
        "text-red-600 font-bold"
    }
}

fn summary_view(summary: &Summary) -> Markup {
    html! {
        div id="summary" class="grid grid-cols-3 gap-4 text-center"
        {
            (summary_card("income", "Income", summary.income, "bg-green-100", "text-green-600"))
            (summary_card("expenses", "Expenses", summary.expenses, "bg-red-100", "text-red-600"))
            (summary_card("savings", "Savings", summary.savings, "bg-yellow-200", "text-yellow-600"))
        }
    }
}

fn summary_card(id: &str, label: &str, amount: f64, background: &str, text_color: &str) -> Markup {
    html! {
        div id=(id) class={ "p-4 rounded " (background) }
        {
            h2 class="font-bold text-gray-900" { (label) }
            p class=(text_color) { (format_currency(amount)) }
        }
    }
}
