use dioxus::prelude::*;
use tasklist_core::{ProgressTier, Stats};

/// Completion progress. Renders nothing while there are no tasks.
#[component]
pub fn ProgressBar(stats: Stats) -> Element {
    if stats.total == 0 {
        return rsx! {};
    }
    let percentage = stats.percentage();
    let gradient = tier_gradient(stats.tier());

    rsx! {
        div { class: "mb-8",
            div { class: "flex justify-between items-center mb-2",
                span { class: "text-sm font-medium text-gray-600 dark:text-gray-300", "Progress" }
                span { class: "text-sm font-medium text-gray-800 dark:text-gray-100", "{percentage}%" }
            }
            div { class: "w-full bg-gray-200 dark:bg-gray-700 rounded-full h-3 overflow-hidden",
                div {
                    class: "bg-gradient-to-r {gradient} h-3 rounded-full transition-all duration-700 ease-out",
                    style: "width: {percentage}%",
                }
            }
        }
    }
}

fn tier_gradient(tier: ProgressTier) -> &'static str {
    match tier {
        ProgressTier::High => "from-green-500 to-green-600",
        ProgressTier::Medium => "from-yellow-400 to-yellow-500",
        ProgressTier::Low => "from-red-500 to-red-600",
    }
}
