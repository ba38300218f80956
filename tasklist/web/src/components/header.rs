use super::{AddTaskForm, ProgressBar, ThemeToggle};
use crate::state::use_task_store;
use dioxus::prelude::*;

/// Title, counters, progress and the add form.
#[component]
pub fn Header() -> Element {
    let store = use_task_store();
    let stats = store.stats();

    rsx! {
        div { class: "bg-white/40 dark:bg-gray-800/60 backdrop-blur-lg rounded-2xl shadow-xl p-8 mb-8 transition-all duration-300",
            div { class: "flex justify-end", ThemeToggle {} }
            div { class: "text-center mb-8",
                h1 { class: "text-4xl font-bold text-gray-800 dark:text-gray-100 mb-2", "Task Manager" }
                p { class: "text-gray-600 dark:text-gray-400", "Stay organized and productive" }
            }

            div { class: "grid grid-cols-1 md:grid-cols-3 gap-4 mb-8",
                StatCard { label: "Total Tasks", value: stats.total, icon: "📋", tone: Tone::Blue }
                StatCard { label: "Completed", value: stats.completed, icon: "✅", tone: Tone::Green }
                StatCard { label: "Pending", value: stats.pending(), icon: "⏳", tone: Tone::Amber }
            }

            ProgressBar { stats }
            AddTaskForm {}
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Tone {
    Blue,
    Green,
    Amber,
}

impl Tone {
    /// Card, label and value classes, spelled out so Tailwind can find them.
    fn classes(self) -> (&'static str, &'static str, &'static str) {
        match self {
            Tone::Blue => (
                "border-blue-200 from-blue-50 to-blue-100",
                "text-blue-600 dark:text-blue-300",
                "text-blue-800 dark:text-blue-100",
            ),
            Tone::Green => (
                "border-green-200 from-green-50 to-green-100",
                "text-green-600 dark:text-green-300",
                "text-green-800 dark:text-green-100",
            ),
            Tone::Amber => (
                "border-amber-200 from-amber-50 to-amber-100",
                "text-amber-600 dark:text-amber-300",
                "text-amber-800 dark:text-amber-100",
            ),
        }
    }
}

/// A single counter card.
#[component]
fn StatCard(label: &'static str, value: usize, icon: &'static str, tone: Tone) -> Element {
    let (card, label_class, value_class) = tone.classes();

    rsx! {
        div { class: "p-4 rounded-xl border bg-gradient-to-r {card} dark:from-gray-700 dark:to-gray-700 dark:border-gray-600 shadow hover:shadow-lg transition-all duration-300",
            div { class: "flex items-center justify-between",
                div {
                    p { class: "{label_class} text-sm font-medium", "{label}" }
                    p { class: "text-2xl font-bold {value_class}", "{value}" }
                }
                span { class: "text-3xl", "{icon}" }
            }
        }
    }
}
