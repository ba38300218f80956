use crate::state::{use_app_config, use_task_store};
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use tasklist_core::Task;

/// One task row: completion toggle, inline editing and deletion.
///
/// Enter saves an edit and Escape cancels it. With motion enabled, a deleted
/// row fades out before it is removed from the store. A fading row ignores
/// further input, and the pending removal outlives the row itself.
#[component]
pub fn TaskItem(task: Task) -> Element {
    let mut store = use_task_store();
    let delete_delay = use_app_config().motion.delete_delay();
    let mut editing = use_signal(|| false);
    let mut edit_text = use_signal(|| task.text().to_string());
    let mut deleting = use_signal(|| false);

    let id = task.id().clone();
    let text = task.text().to_string();
    let completed = task.is_completed();
    let created = task.created_label();

    let save = use_callback({
        let id = id.clone();
        move |()| {
            store.edit(&id, &edit_text());
            editing.set(false);
        }
    });

    let cancel = use_callback({
        let text = text.clone();
        move |()| {
            edit_text.set(text.clone());
            editing.set(false);
        }
    });

    let toggle = {
        let id = id.clone();
        move |_| {
            if !deleting() {
                store.toggle(&id);
            }
        }
    };

    let start_edit = {
        let text = text.clone();
        move |_| {
            if !deleting() {
                edit_text.set(text.clone());
                editing.set(true);
            }
        }
    };

    let delete = move |_| match delete_delay {
        Some(ms) => {
            deleting.set(true);
            let id = id.clone();
            // Not tied to this row: toggling moves the task to another section and remounts it.
            spawn_forever(async move {
                TimeoutFuture::new(ms).await;
                store.delete(&id);
            });
        }
        None => {
            store.delete(&id);
        }
    };

    let row_class = if completed {
        "bg-gradient-to-r from-green-50 to-green-100 border-green-200 dark:from-green-900/40 dark:to-green-900/20 dark:border-green-800"
    } else {
        "bg-white border-gray-200 hover:border-blue-300 hover:bg-blue-50/40 dark:bg-gray-800 dark:border-gray-700"
    };
    let leaving = if deleting() { "leaving" } else { "" };
    let check_class = if completed {
        "bg-green-500 border-green-500 text-white"
    } else {
        "border-gray-300 hover:border-blue-500"
    };
    let toggle_label = if completed { "Mark as pending" } else { "Mark as completed" };
    let text_class = if completed { "line-through text-gray-500" } else { "text-gray-800 dark:text-gray-100" };

    rsx! {
        div { class: "group task-fade p-4 rounded-xl border-2 transition-all duration-300 {row_class} {leaving}",
            div { class: "flex items-center gap-4",
                button {
                    r#type: "button",
                    aria_label: toggle_label,
                    disabled: deleting(),
                    class: "flex-shrink-0 w-6 h-6 rounded-full border-2 flex items-center justify-center transition-all {check_class}",
                    onclick: toggle,
                    if completed { "✓" }
                }

                div { class: "flex-1 min-w-0",
                    if editing() {
                        div { class: "flex items-center gap-2",
                            input {
                                r#type: "text",
                                value: "{edit_text}",
                                autofocus: true,
                                oninput: move |evt: FormEvent| edit_text.set(evt.value()),
                                onkeydown: move |evt: KeyboardEvent| match evt.key() {
                                    Key::Enter => save.call(()),
                                    Key::Escape => cancel.call(()),
                                    _ => {}
                                },
                                class: "flex-1 px-3 py-1 border border-gray-300 rounded-lg focus:border-blue-500 focus:ring-2 focus:ring-blue-100 bg-white dark:bg-gray-700 text-gray-800 dark:text-gray-100",
                            }
                            button {
                                r#type: "button",
                                aria_label: "Save",
                                class: "p-1 text-green-600 hover:text-green-700 hover:bg-green-100 rounded-lg",
                                onclick: move |_| save.call(()),
                                "💾"
                            }
                            button {
                                r#type: "button",
                                aria_label: "Cancel",
                                class: "p-1 text-gray-600 hover:text-gray-700 hover:bg-gray-100 rounded-lg",
                                onclick: move |_| cancel.call(()),
                                "✕"
                            }
                        }
                    } else {
                        div { class: "flex items-center justify-between",
                            span { class: "truncate {text_class}", "{text}" }
                            div { class: "flex items-center gap-1 opacity-0 group-hover:opacity-100 transition-opacity duration-200",
                                button {
                                    r#type: "button",
                                    aria_label: "Edit",
                                    disabled: deleting(),
                                    class: "p-1 text-blue-600 hover:text-blue-700 hover:bg-blue-100 rounded-lg",
                                    onclick: start_edit,
                                    "✏️"
                                }
                                button {
                                    r#type: "button",
                                    aria_label: "Delete",
                                    disabled: deleting(),
                                    class: "p-1 text-red-600 hover:text-red-700 hover:bg-red-100 rounded-lg",
                                    onclick: delete,
                                    "🗑️"
                                }
                            }
                        }
                    }
                }
            }

            div { class: "mt-2 text-xs text-gray-500 dark:text-gray-400 pl-10", "{created}" }
        }
    }
}
