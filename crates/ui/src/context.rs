use std::sync::Arc;

use dioxus::prelude::*;
use rethink_core::model::{ActiveTab, Catalog, FlashcardDeck, Material, Subject, SubjectId, User};
use rethink_core::quiz::ViewerConfig;
use thiserror::Error;

/// What the composition root hands to the UI.
pub trait UiApp: Send + Sync {
    fn catalog(&self) -> Arc<Catalog>;
    fn viewer_config(&self) -> ViewerConfig;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ContextError {
    #[error("use_app_context must be used within an AppProvider")]
    MissingProvider,
}

/// Session-wide UI state shared by every view.
///
/// Catalog data is read-only; the four selectable fields are signals, so
/// setters are synchronous and every reader re-renders on change.
#[derive(Clone)]
pub struct AppContext {
    catalog: Arc<Catalog>,
    viewer: Arc<ViewerConfig>,
    selected_subject: Signal<Option<Subject>>,
    active_tab: Signal<ActiveTab>,
    show_graph: Signal<bool>,
    selected_material: Signal<Option<Material>>,
    selection_revision: Signal<u64>,
}

impl AppContext {
    /// Must run inside a component so the signals get an owner.
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            catalog: app.catalog(),
            viewer: Arc::new(app.viewer_config()),
            selected_subject: Signal::new(None),
            active_tab: Signal::new(ActiveTab::default()),
            show_graph: Signal::new(false),
            selected_material: Signal::new(None),
            selection_revision: Signal::new(0),
        }
    }

    #[must_use]
    pub fn current_user(&self) -> &User {
        &self.catalog.user
    }

    #[must_use]
    pub fn subjects(&self) -> &[Subject] {
        &self.catalog.subjects
    }

    #[must_use]
    pub fn flashcard_decks(&self) -> &[FlashcardDeck] {
        &self.catalog.flashcard_decks
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn viewer_config(&self) -> Arc<ViewerConfig> {
        Arc::clone(&self.viewer)
    }

    #[must_use]
    pub fn selected_subject(&self) -> Option<Subject> {
        self.selected_subject.read().clone()
    }

    #[must_use]
    pub fn active_tab(&self) -> ActiveTab {
        self.active_tab.read().clone()
    }

    #[must_use]
    pub fn show_graph(&self) -> bool {
        *self.show_graph.read()
    }

    #[must_use]
    pub fn selected_material(&self) -> Option<Material> {
        self.selected_material.read().clone()
    }

    /// Bumped by every `set_selected_material` call, including repeats.
    #[must_use]
    pub fn selection_revision(&self) -> u64 {
        *self.selection_revision.read()
    }

    pub fn set_selected_subject(&self, subject: Option<Subject>) {
        let mut signal = self.selected_subject;
        signal.set(subject);
    }

    pub fn set_active_tab(&self, tab: ActiveTab) {
        let mut signal = self.active_tab;
        signal.set(tab);
    }

    pub fn set_show_graph(&self, show: bool) {
        let mut signal = self.show_graph;
        signal.set(show);
    }

    pub fn set_selected_material(&self, material: Option<Material>) {
        let mut signal = self.selected_material;
        let mut revision = self.selection_revision;
        signal.set(material);
        *revision.write() += 1;
    }

    pub fn toggle_show_graph(&self) {
        let mut signal = self.show_graph;
        let next = !*signal.peek();
        signal.set(next);
    }

    /// Select a subject by id; unknown ids clear the selection.
    pub fn select_subject_by_id(&self, id: SubjectId) {
        self.set_selected_subject(self.catalog.subject(id).cloned());
    }

    /// Materials of the selected subject, empty when nothing is selected.
    #[must_use]
    pub fn subject_materials(&self) -> Vec<Material> {
        self.selected_subject
            .read()
            .as_ref()
            .map(|subject| subject.materials().to_vec())
            .unwrap_or_default()
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

/// The shared context, or `ContextError::MissingProvider` outside `AppProvider`.
///
/// # Errors
///
/// Returns `ContextError::MissingProvider` when no provider is mounted above.
pub fn try_app_context() -> Result<AppContext, ContextError> {
    try_consume_context::<AppContext>().ok_or(ContextError::MissingProvider)
}

/// The shared context.
///
/// # Panics
///
/// Panics when no `AppProvider` is mounted above the caller.
#[must_use]
pub fn use_app_context() -> AppContext {
    match try_app_context() {
        Ok(ctx) => ctx,
        Err(err) => panic!("{err}"),
    }
}

/// Creates the session's `AppContext` from the injected `UiApp` and shares it
/// with everything below.
#[component]
pub fn AppProvider(children: Element) -> Element {
    let app = use_context::<Arc<dyn UiApp>>();
    use_context_provider(|| build_app_context(&app));
    rsx! {
        {children}
    }
}
