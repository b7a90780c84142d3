//=============================================================================
// File: src/screens/deposits.rs
//=============================================================================
use std::collections::HashMap;

use api::deposit::Deposit;
use dioxus::prelude::*;

use crate::components::bank_logo::BankLogo;
use crate::components::pico::Card;
use crate::feed::toggle_expanded;
use crate::feed::DepositFeed;

/// A self-contained component for rendering a single deposit row.
///
/// The expansion map lives above the section switcher so a row stays open
/// across tab toggles.
#[component]
fn DepositRow(deposit: Deposit, expanded: Signal<HashMap<String, bool>>) -> Element {
    let is_expanded = expanded
        .read()
        .get(&deposit.id)
        .copied()
        .unwrap_or(false);
    let row_class = if is_expanded {
        "deposit-item expanded"
    } else {
        "deposit-item"
    };
    let row_id = deposit.id.clone();

    rsx! {
        div {
            class: "{row_class}",
            onclick: move |_| toggle_expanded(&mut expanded.write(), &row_id),

            div { class: "deposit-summary",
                span { class: "deposit-amount", "{deposit.amount_label()}" }
                div { class: "deposit-details",
                    span { class: "deposit-date", "{deposit.timestamp.date_label()}" }
                    span { class: "deposit-time", "{deposit.timestamp.time_label()}" }
                }
            }

            if is_expanded {
                div { class: "deposit-details expanded",
                    div { class: "additional-info",
                        span { class: "dot" }
                        span { class: "deposit-id", "ID заявки: {deposit.id}" }
                    }
                    div { class: "additional-info",
                        span { class: "dot" }
                        span { class: "deposit-requisites",
                            "Реквизиты: "
                            BankLogo { bank: deposit.bank.clone() }
                            " {deposit.bot_requisites}"
                        }
                    }
                    div { class: "additional-info",
                        span { class: "dot" }
                        span { class: "deposit-status", "Статус: {deposit.status}" }
                    }
                }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn DepositsScreen(expanded: Signal<HashMap<String, bool>>) -> Element {
    let feed = use_context::<DepositFeed>();
    let deposits = feed.deposits.read();

    rsx! {
        Card {
            div { class: "deposits-section",
                h3 { "Депозиты" }
                if deposits.is_empty() && *feed.is_loading.read() {
                    progress {}
                }
                for deposit in deposits.iter() {
                    DepositRow {
                        key: "{deposit.id}",
                        deposit: deposit.clone(),
                        expanded,
                    }
                }
            }
        }
    }
}
