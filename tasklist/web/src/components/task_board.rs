use super::TaskItem;
use crate::state::use_task_store;
use dioxus::prelude::*;
use tasklist_core::Task;

/// All tasks, split into pending and completed sections.
#[component]
pub fn TaskBoard() -> Element {
    let store = use_task_store();
    let tasks = store.tasks();

    if tasks.is_empty() {
        return rsx! { EmptyState {} };
    }

    let pending: Vec<Task> = tasks.pending().cloned().collect();
    let completed: Vec<Task> = tasks.completed().cloned().collect();

    rsx! {
        div { class: "space-y-6",
            if !pending.is_empty() {
                TaskSection { title: "Pending Tasks", icon: "📝", tasks: pending }
            }
            if !completed.is_empty() {
                TaskSection { title: "Completed Tasks", icon: "🏁", tasks: completed }
            }
        }
    }
}

#[component]
fn TaskSection(title: &'static str, icon: &'static str, tasks: Vec<Task>) -> Element {
    rsx! {
        section { class: "bg-gradient-to-br from-white to-gray-50 dark:from-gray-800 dark:to-gray-900 rounded-2xl shadow-lg p-6 transition-all duration-300 hover:shadow-xl",
            div { class: "flex items-center gap-3 mb-6",
                div { class: "w-8 h-8 bg-gray-100 dark:bg-gray-700 rounded-full flex items-center justify-center",
                    "{icon}"
                }
                h2 { class: "text-xl font-semibold text-gray-800 dark:text-gray-100",
                    "{title} ({tasks.len()})"
                }
            }
            div { class: "space-y-3 transition-all duration-300",
                {tasks.iter().map(|task| rsx! {
                    TaskItem { key: "{task.id()}", task: task.clone() }
                })}
            }
        }
    }
}

/// Shown when there are no tasks at all.
#[component]
fn EmptyState() -> Element {
    rsx! {
        div { class: "bg-gradient-to-br from-white to-gray-50 dark:from-gray-800 dark:to-gray-900 rounded-2xl shadow-lg p-12 text-center transition-all duration-300",
            div { class: "flex flex-col items-center",
                div { class: "w-16 h-16 bg-gray-100 dark:bg-gray-700 rounded-full flex items-center justify-center mb-4 animate-pulse text-3xl",
                    "📋"
                }
                h3 { class: "text-xl font-semibold text-gray-800 dark:text-gray-100 mb-2", "No tasks yet" }
                p { class: "text-gray-600 dark:text-gray-400", "Add your first task above to get started!" }
            }
        }
    }
}
