use crate::state::use_task_store;
use dioxus::prelude::*;

/// Switches between light and dark mode and remembers the choice.
#[component]
pub fn ThemeToggle() -> Element {
    let mut store = use_task_store();
    let dark = store.display_mode().is_dark();
    let (icon, label) = if dark {
        ("☀️", "Switch to light mode")
    } else {
        ("🌙", "Switch to dark mode")
    };

    rsx! {
        button {
            r#type: "button",
            title: label,
            aria_label: label,
            class: "p-2 rounded-full bg-white/60 dark:bg-gray-700 hover:bg-white dark:hover:bg-gray-600 transition-colors",
            onclick: move |_| {
                let mode = store.toggle_display_mode();
                tracing::debug!(%mode, "display mode toggled");
            },
            "{icon}"
        }
    }
}
