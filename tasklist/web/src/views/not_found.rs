use dioxus::prelude::*;

#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = route.join("/");
    tracing::debug!(%path, "unknown route");

    rsx! {
        div {
            class: "min-h-screen flex items-center justify-center bg-gray-100 dark:bg-gray-900",
            div {
                class: "text-center px-6",
                div {
                    class: "mb-8",
                    h1 {
                        class: "text-9xl font-bold text-gray-300 dark:text-gray-700 mb-4",
                        "404"
                    }
                    h2 {
                        class: "text-4xl font-bold text-gray-800 dark:text-gray-100 mb-4",
                        "Page Not Found"
                    }
                    p {
                        class: "text-xl text-gray-600 dark:text-gray-400 mb-8",
                        "There is nothing at /{path}. Your tasks are waiting on the main page."
                    }
                }
                Link {
                    to: "/",
                    class: "inline-block bg-blue-600 hover:bg-blue-700 text-white font-bold py-3 px-6 rounded-lg transition-colors duration-200",
                    "Back to my tasks"
                }
            }
        }
    }
}
