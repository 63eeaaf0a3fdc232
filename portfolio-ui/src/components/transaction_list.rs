//! Transaction List Component

use leptos::*;

use crate::model::Transaction;

/// One `<li>` per transaction, in the order given
#[component]
pub fn TransactionList(transactions: Vec<Transaction>) -> impl IntoView {
    view! {
        <div class="transaction-list">
            <h3>"Transaction History"</h3>
            <ul>
                {transactions
                    .iter()
                    .map(|tx| view! { <li>{tx.line()}</li> })
                    .collect_view()}
            </ul>
        </div>
    }
}
