use dioxus::prelude::*;
use rethink_core::model::DocumentSource;
use rethink_core::quiz::DocumentOptions;

/// `src` for the embedded frame. Sources that already carry a fragment win.
#[must_use]
pub fn document_src(source: &DocumentSource, options: DocumentOptions) -> String {
    let href = source.href();
    if href.contains('#') {
        href.to_owned()
    } else {
        format!("{href}{}", options.fragment())
    }
}

#[component]
pub fn DocumentViewer(source: DocumentSource, options: DocumentOptions) -> Element {
    let src = document_src(&source, options);

    rsx! {
        div { class: "document-viewer",
            iframe {
                class: "document-frame",
                title: "Document viewer",
                src: "{src}",
            }
        }
    }
}
