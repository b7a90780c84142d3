//=============================================================================
// File: src/screens/topups.rs
//=============================================================================
use dioxus::prelude::*;

use crate::components::pico::Card;

/// Placeholder: the backend does not expose top-up data yet.
#[allow(non_snake_case)]
#[component]
pub fn TopupsScreen() -> Element {
    rsx! {
        Card {
            div { class: "topups-section",
                h3 { "Пополнения" }
                p { "Информация о пополнениях пока недоступна." }
            }
        }
    }
}
