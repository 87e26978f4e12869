use dioxus::prelude::*;

use crate::locale::{use_locale, Language};
use crate::t;

use super::engine::{DropdownEvent, DropdownState};

fn entry_class(current: bool) -> &'static str {
    if current {
        "switcher__entry switcher__entry--current"
    } else {
        "switcher__entry"
    }
}

/// Language dropdown. Reads and (alone in the application) writes the
/// locale store; the open/closed panel state is local to this instance and
/// resets when the switcher unmounts.
#[component]
pub fn LanguageSwitcher() -> Element {
    let mut locale = use_locale();
    let mut dropdown = use_signal(DropdownState::default);

    let current = locale.language();
    let code = current.code();
    let open = dropdown().is_open();
    let chevron = if open {
        "switcher__chevron switcher__chevron--open"
    } else {
        "switcher__chevron"
    };

    rsx! {
        div { class: "switcher",
            button {
                class: "switcher__toggle",
                onclick: move |_| dropdown.set(dropdown().apply(DropdownEvent::TogglePressed)),
                span { class: "switcher__code", "{code}" }
                span { class: "{chevron}", "▾" }
            }
            if open {
                div {
                    class: "switcher__scrim",
                    onclick: move |_| dropdown.set(dropdown().apply(DropdownEvent::ScrimPressed)),
                }
                div { class: "switcher__menu",
                    span { class: "switcher__menu-label", {t!("switcher-label")} }
                    { Language::CATALOG.iter().map(|&entry| {
                        let entry_code = entry.code();
                        let label = entry.label();
                        let class = entry_class(entry == current);
                        rsx! {
                            button {
                                key: "{entry_code}",
                                class: "{class}",
                                // Locale write and close are one step from the
                                // caller's perspective: same handler, one render.
                                onclick: move |_| {
                                    locale.set_language(entry);
                                    dropdown.set(dropdown().apply(DropdownEvent::EntrySelected));
                                },
                                "{label}"
                            }
                        }
                    }) }
                }
            }
        }
    }
}
