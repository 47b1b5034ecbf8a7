use dioxus::prelude::*;
use rethink_core::model::{ActiveTab, MaterialId, SubjectId};

use crate::context::use_app_context;
use crate::vm::{DeckRowVm, MaterialRowVm, format_date, map_deck_rows, map_material_row};

/// Subject browser: sidebar, tabs, material and deck lists, graph toggle.
#[component]
pub fn StudyView() -> Element {
    let ctx = use_app_context();
    let greeting = format!("Hi, {}", ctx.current_user().first_name());
    let selected = ctx.selected_subject();
    let selected_id = selected.as_ref().map(|subject| subject.id());
    let subjects: Vec<(SubjectId, String)> = ctx
        .subjects()
        .iter()
        .map(|subject| (subject.id(), subject.name().to_owned()))
        .collect();
    let show_graph = ctx.show_graph();
    let updated_label = selected
        .as_ref()
        .map(|subject| format!("Updated {}", format_date(subject.updated_at())))
        .unwrap_or_default();
    let graph_label = if show_graph { "Hide graph" } else { "Show graph" };

    let ctx_for_graph = ctx.clone();

    rsx! {
        div { class: "study",
            aside { class: "study-sidebar",
                p { class: "study-greeting", "{greeting}" }
                ul { class: "subject-list",
                    for (id, name) in subjects {
                        SubjectItem { key: "{id}", id, name, active: selected_id == Some(id) }
                    }
                }
            }
            main { class: "study-main",
                match selected {
                    None => rsx! {
                        p { class: "study-empty", "Select a subject to start studying." }
                    },
                    Some(subject) => rsx! {
                        div { class: "subject-header",
                            h1 { "{subject.name()}" }
                            if let Some(description) = subject.description() {
                                p { class: "subject-description", "{description}" }
                            }
                            p { class: "subject-updated", "{updated_label}" }
                            button {
                                class: if show_graph { "graph-toggle on" } else { "graph-toggle" },
                                r#type: "button",
                                onclick: move |_| ctx_for_graph.toggle_show_graph(),
                                "{graph_label}"
                            }
                        }
                        TabBar {}
                        SubjectTab { subject_id: subject.id() }
                    },
                }
            }
        }
    }
}

#[component]
fn SubjectItem(id: SubjectId, name: String, active: bool) -> Element {
    let ctx = use_app_context();
    rsx! {
        li {
            button {
                class: if active { "subject active" } else { "subject" },
                r#type: "button",
                onclick: move |_| ctx.select_subject_by_id(id),
                "{name}"
            }
        }
    }
}

#[component]
fn TabBar() -> Element {
    rsx! {
        div { class: "tab-bar", role: "tablist",
            TabButton { tab: ActiveTab::material(), label: "Material" }
            TabButton { tab: ActiveTab::flashcards(), label: "Flashcards" }
        }
    }
}

#[component]
fn TabButton(tab: ActiveTab, label: &'static str) -> Element {
    let ctx = use_app_context();
    let active = ctx.active_tab() == tab;
    rsx! {
        button {
            class: if active { "tab active" } else { "tab" },
            r#type: "button",
            role: "tab",
            aria_selected: "{active}",
            onclick: move |_| ctx.set_active_tab(tab.clone()),
            "{label}"
        }
    }
}

#[component]
fn SubjectTab(subject_id: SubjectId) -> Element {
    let ctx = use_app_context();
    if ctx.active_tab().is(ActiveTab::FLASHCARDS) {
        let rows = map_deck_rows(ctx.flashcard_decks(), subject_id);
        return rsx! {
            DeckList { rows }
        };
    }

    let rows: Vec<MaterialRowVm> = ctx.subject_materials().iter().map(map_material_row).collect();
    rsx! {
        if rows.is_empty() {
            p { class: "study-empty", "No material yet." }
        }
        ul { class: "material-list",
            for (id, row) in rows.into_iter().map(|row| (row.id, row)) {
                MaterialItem { key: "{id}", row }
            }
        }
    }
}

#[component]
fn MaterialItem(row: MaterialRowVm) -> Element {
    let ctx = use_app_context();
    let id: MaterialId = row.id;
    rsx! {
        li {
            button {
                class: "material-row",
                r#type: "button",
                onclick: move |_| {
                    let material = ctx.catalog().material(id).cloned();
                    tracing::debug!(material = %id, "material selected");
                    ctx.set_selected_material(material);
                },
                span { class: "material-badge", "{row.badge}" }
                span { class: "material-title", "{row.title}" }
            }
        }
    }
}

#[component]
fn DeckList(rows: Vec<DeckRowVm>) -> Element {
    rsx! {
        if rows.is_empty() {
            p { class: "study-empty", "No flashcard decks yet." }
        }
        ul { class: "deck-list",
            for row in rows {
                li { class: "deck-row",
                    span { class: "deck-name", "{row.name}" }
                    span { class: "deck-count", "{row.count_label}" }
                    if let Some(last) = row.last_studied_label {
                        span { class: "deck-last-studied", "{last}" }
                    }
                }
            }
        }
    }
}
