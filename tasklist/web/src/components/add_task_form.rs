use crate::state::{use_app_config, use_task_store};
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

/// Input for new tasks. Blank input keeps the submit button disabled.
#[component]
pub fn AddTaskForm() -> Element {
    let mut store = use_task_store();
    let feedback = use_app_config().motion.add_feedback();
    let mut input = use_signal(String::new);
    let mut adding = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if store.add(&input()).is_none() {
            return;
        }
        input.set(String::new());

        if let Some(ms) = feedback {
            adding.set(true);
            spawn(async move {
                TimeoutFuture::new(ms).await;
                adding.set(false);
            });
        }
    };

    let ready = !input().trim().is_empty() && !adding();
    let button_class = if ready {
        "bg-blue-500 hover:bg-blue-600 text-white shadow-lg hover:shadow-xl scale-100"
    } else {
        "bg-gray-300 dark:bg-gray-600 text-gray-500 scale-95"
    };
    let pulse = if adding() { "animate-pulse" } else { "" };
    let rotate = if adding() { "rotate-45" } else { "" };

    rsx! {
        form { class: "relative", onsubmit: handle_submit,
            input {
                r#type: "text",
                placeholder: "Add a new task...",
                value: "{input}",
                oninput: move |evt: FormEvent| input.set(evt.value()),
                class: "w-full pl-4 pr-12 py-4 border-2 border-gray-200 dark:border-gray-600 rounded-xl focus:border-blue-500 focus:ring-4 focus:ring-blue-100 outline-none transition-all duration-200 text-gray-800 dark:text-gray-100 placeholder-gray-400 bg-white/70 dark:bg-gray-700",
            }
            button {
                r#type: "submit",
                disabled: !ready,
                aria_label: "Add task",
                class: "absolute right-2 top-1/2 transform -translate-y-1/2 p-2 rounded-lg transition-all duration-200 {button_class} {pulse}",
                span { class: "inline-block w-5 h-5 leading-5 text-center font-bold transition-transform duration-200 {rotate}",
                    "+"
                }
            }
        }
    }
}
