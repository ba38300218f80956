use crate::components::{Header, TaskBoard};
use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        main { class: "flex items-center justify-center min-h-screen bg-gray-100 dark:bg-gray-900 transition-colors duration-300",
            div { class: "max-w-lg w-full px-6 py-8",
                div { class: "p-6 rounded-3xl bg-white/40 dark:bg-gray-800/40 backdrop-blur-md shadow-xl",
                    Header {}
                    TaskBoard {}
                }
            }
        }
    }
}
