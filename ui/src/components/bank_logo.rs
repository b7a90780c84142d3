// File: src/components/bank_logo.rs
use dioxus::prelude::*;

use crate::banks::bank_logo;

/// The small bank logo shown next to requisites in an expanded row.
/// Renders nothing for a bank the cabinet does not know.
#[component]
pub fn BankLogo(bank: String) -> Element {
    let src = bank_logo(&bank);

    rsx! {
        if !src.is_empty() {
            img {
                class: "bank-logo",
                src: "{src}",
                alt: "{bank} logo",
            }
        }
    }
}
