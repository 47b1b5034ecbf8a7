use dioxus::prelude::*;

use crate::context::AppProvider;
use crate::views::{MaterialViewer, StudyView};

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "ReThink" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                AppProvider {
                    StudyView {}
                    // Overlay sits above the study layout.
                    MaterialViewer {}
                }
            }
        }
    }
}
