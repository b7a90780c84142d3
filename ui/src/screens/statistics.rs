//=============================================================================
// File: src/screens/statistics.rs
//=============================================================================
use dioxus::prelude::*;

use crate::components::pico::Card;

/// Placeholder: the backend does not expose statistics yet.
#[allow(non_snake_case)]
#[component]
pub fn StatisticsScreen() -> Element {
    rsx! {
        Card {
            div { class: "statistics-section",
                h3 { "Статистика" }
                p { "Статистика пока недоступна." }
            }
        }
    }
}
