// The client-side Dioxus application logic.

use std::collections::HashMap;

use dioxus::prelude::*;

pub mod banks;
pub mod compat;
mod components;
pub mod feed;
pub mod hooks;
mod screens;

use components::pico::Button;
use components::pico::Container;
use hooks::use_deposit_poller::use_deposit_poller;
use screens::deposits::DepositsScreen;
use screens::statistics::StatisticsScreen;
use screens::topups::TopupsScreen;

/// Where the error screen sends the user. The path carries the backend's
/// historical misspelling; the router on the other side expects it.
const SIGNIN_PATH: &str = "/accont/signin";
const SUPPORT_URL: &str = "https://mmr-info.ru";
const CABINET_LOGO: &str = "/assets/mmr_logo.png";

/// Enum to represent the three top-level sections of the cabinet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Deposits,
    Topups,
    Statistics,
}

impl Section {
    /// Helper to get the display label for each section.
    fn label(&self) -> &'static str {
        match self {
            Section::Deposits => "Транзакции",
            Section::Topups => "Пополнения",
            Section::Statistics => "Статистика",
        }
    }
}

/// A list of all sections for easy iteration.
const ALL_SECTIONS: [Section; 3] = [Section::Deposits, Section::Topups, Section::Statistics];

/// Pressing the active section's button closes it; pressing any other
/// opens that one. At most one section is ever open.
pub fn toggle_section(active: Option<Section>, pressed: Section) -> Option<Section> {
    if active == Some(pressed) {
        None
    } else {
        Some(pressed)
    }
}

/// The section switcher row.
#[component]
fn SectionTabs(active_section: Signal<Option<Section>>) -> Element {
    rsx! {
        div {
            class: "menu-buttons",
            for section in ALL_SECTIONS {
                button {
                    class: if *active_section.read() == Some(section) {
                        "menu-button active"
                    } else {
                        "menu-button"
                    },
                    onclick: move |_| {
                        let next = toggle_section(*active_section.peek(), section);
                        active_section.set(next);
                    },
                    "{section.label()}"
                }
            }
        }
    }
}

/// The full-screen failure view. Replaces everything else once the feed has
/// errored; reload-and-sign-in is the only recovery path.
#[component]
fn ErrorScreen(message: String) -> Element {
    rsx! {
        div {
            class: "payment-page",
            div {
                class: "payment-container",
                img { class: "auth-logo", src: "{CABINET_LOGO}", alt: "логотип кабинета" }
                p { class: "error-message", "{message}" }
                div {
                    class: "error-actions",
                    Button {
                        on_click: move |_| compat::reload_to_signin(SIGNIN_PATH),
                        "Войти в аккаунт"
                    }
                    a { href: "{SUPPORT_URL}", "Связаться с тех. поддержкой сайта" }
                }
            }
        }
    }
}

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let cabinet_css = r#"
    .menu-buttons {
        display: flex;
        gap: 0.5rem;
        margin-bottom: 1rem;
    }

    .menu-button {
        flex: 1;
        background: none;
        color: var(--pico-muted-color);
        border: 1px solid var(--pico-muted-border-color);
        border-radius: var(--pico-border-radius);
        padding: 0.5rem 1rem;
    }

    .menu-button.active {
        color: var(--pico-primary);
        border-color: var(--pico-primary);
        font-weight: bold;
    }

    .section-content { display: none; }
    .section-content.expanded { display: block; }

    .deposit-item {
        border: 1px solid var(--pico-muted-border-color);
        border-radius: var(--pico-border-radius);
        padding: 0.75rem 1rem;
        margin-bottom: 0.5rem;
        cursor: pointer;
    }

    .deposit-item.expanded {
        border-color: var(--pico-primary);
    }

    .deposit-summary {
        display: flex;
        justify-content: space-between;
        align-items: center;
    }

    .deposit-amount { font-weight: bold; color: var(--pico-ins-color); }
    .deposit-details { display: flex; gap: 0.5rem; color: var(--pico-muted-color); }
    .deposit-details.expanded {
        display: block;
        margin-top: 0.75rem;
        border-top: 1px solid var(--pico-muted-border-color);
        padding-top: 0.75rem;
    }

    .additional-info { display: flex; align-items: center; gap: 0.5rem; }
    .dot {
        width: 6px;
        height: 6px;
        border-radius: 50%;
        background-color: var(--pico-primary);
        flex-shrink: 0;
    }

    .bank-logo { height: 1.2em; vertical-align: middle; }

    .payment-page {
        display: flex;
        justify-content: center;
        align-items: center;
        min-height: 100vh;
    }

    .payment-container { text-align: center; max-width: 24rem; }
    .auth-logo { max-width: 10rem; margin-bottom: 1.5rem; }
    .error-message { color: var(--pico-del-color); margin-bottom: 1.5rem; }
    .error-actions { display: flex; flex-direction: column; gap: 0.75rem; }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: "/assets/css/pico.min.css",
        }
        style {
            "{cabinet_css}"
        }
        HistoryBody {}
    }
}

#[component]
fn HistoryBody() -> Element {
    // The poller owns all fetching; screens read through the feed context.
    let feed = use_deposit_poller();
    use_context_provider(|| feed);

    // Both signals live here, above the section switcher, so expansion
    // state survives tab toggling.
    let active_section = use_signal(|| None::<Section>);
    let expanded = use_signal(HashMap::<String, bool>::new);

    // Once the feed has errored, the whole view is replaced no matter what
    // the rest of the state says.
    if let Some(message) = feed.error.read().clone() {
        return rsx! {
            ErrorScreen { message }
        };
    }

    let content_class = if active_section.read().is_some() {
        "section-content expanded"
    } else {
        "section-content"
    };

    rsx! {
        div {
            class: "transactions",
            Container {
                SectionTabs {
                    active_section,
                }
                div {
                    class: "{content_class}",
                    match *active_section.read() {
                        Some(Section::Deposits) => rsx! {
                            DepositsScreen { expanded }
                        },
                        Some(Section::Topups) => rsx! {
                            TopupsScreen {}
                        },
                        Some(Section::Statistics) => rsx! {
                            StatisticsScreen {}
                        },
                        None => rsx! {},
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pressing_the_active_section_closes_it() {
        let opened = toggle_section(None, Section::Deposits);
        assert_eq!(opened, Some(Section::Deposits));
        assert_eq!(toggle_section(opened, Section::Deposits), None);
    }

    #[test]
    fn pressing_another_section_switches_to_it() {
        let opened = toggle_section(None, Section::Topups);
        assert_eq!(
            toggle_section(opened, Section::Statistics),
            Some(Section::Statistics)
        );
    }
}
