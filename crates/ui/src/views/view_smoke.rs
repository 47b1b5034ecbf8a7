use std::time::Duration;

use dioxus::prelude::*;
use rethink_core::model::{ActiveTab, Material, MaterialId, SubjectId};
use rethink_core::quiz::{ELABORATION_PROMPTS, QuizPhase, ViewerConfig};

use super::test_harness::{ViewerHarness, drive_dom, setup_viewer_harness};
use crate::context::try_app_context;
use crate::vm::QuizIntent;

const NEURO_TEXTBOOK: u64 = 101;
const NEURO_NOTES: u64 = 103;

fn material(harness: &ViewerHarness, id: u64) -> Option<Material> {
    harness.ctx().catalog().material(MaterialId::new(id)).cloned()
}

fn open(harness: &mut ViewerHarness, id: u64, show_graph: bool) {
    let selected = material(harness, id);
    harness.update(|ctx| {
        ctx.select_subject_by_id(SubjectId::new(1));
        ctx.set_show_graph(show_graph);
        ctx.set_selected_material(selected);
    });
}

#[tokio::test(flavor = "current_thread")]
async fn study_view_greets_user_and_lists_subjects() {
    let harness = setup_viewer_harness(ViewerConfig::sequence());
    let html = harness.render();
    assert!(html.contains("Hi, Alex"), "missing greeting in {html}");
    assert!(html.contains("Neuroscience"), "missing subject in {html}");
    assert!(html.contains("Cell Biology"), "missing subject in {html}");
    assert!(html.contains("Select a subject"), "missing empty state in {html}");
    assert!(!html.contains("material-viewer"), "viewer shown without selection: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn selected_subject_lists_materials_then_decks() {
    let mut harness = setup_viewer_harness(ViewerConfig::sequence());
    harness.update(|ctx| ctx.select_subject_by_id(SubjectId::new(1)));
    let html = harness.render();
    assert!(html.contains("Neuroanatomy Textbook"), "missing material in {html}");
    assert!(html.contains("Cranial Nerve Notes"), "missing material in {html}");
    assert!(html.contains("Updated Nov 14, 2023"), "missing updated date in {html}");

    harness.update(|ctx| ctx.set_active_tab(ActiveTab::flashcards()));
    let html = harness.render();
    assert!(html.contains("Brain Regions"), "missing deck in {html}");
    assert!(html.contains("12 cards"), "missing card count in {html}");
    assert!(html.contains("Last studied Nov 13, 2023"), "missing last studied in {html}");
    assert!(!html.contains("Organelles"), "deck from another subject in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn non_textbook_material_renders_no_viewer() {
    for config in [ViewerConfig::sequence(), ViewerConfig::single()] {
        let mut harness = setup_viewer_harness(config);
        open(&mut harness, NEURO_NOTES, true);
        let html = harness.render();
        assert!(!html.contains("material-viewer"), "viewer shown for notes: {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn sequence_viewer_waits_for_graph_toggle() {
    let mut harness = setup_viewer_harness(ViewerConfig::sequence());
    open(&mut harness, NEURO_TEXTBOOK, false);
    assert!(!harness.render().contains("material-viewer"));

    harness.update(|ctx| ctx.set_show_graph(true));
    let html = harness.render();
    assert!(html.contains("material-viewer"), "viewer missing in {html}");
    assert!(html.contains("document-frame"), "document frame missing in {html}");
    assert!(html.contains("/bookneuro.pdf#toolbar=1"), "document src missing in {html}");
    assert!(html.contains("Close viewer"), "close button missing in {html}");
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn trigger_appears_after_prompt_delay() {
    let mut harness = setup_viewer_harness(ViewerConfig::single());
    open(&mut harness, NEURO_TEXTBOOK, false);
    assert!(!harness.render().contains("Test it!"));

    harness.advance(Duration::from_secs(9)).await;
    assert!(!harness.render().contains("Test it!"), "trigger shown early");

    harness.advance(Duration::from_secs(2)).await;
    let html = harness.render();
    assert!(html.contains("quiz-trigger"), "trigger missing in {html}");
    assert!(html.contains("Test it!"), "trigger label missing in {html}");
    assert!(!html.contains("quiz-panel"), "question shown before activation: {html}");
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn reselecting_the_same_textbook_restarts_the_delay() {
    let mut harness = setup_viewer_harness(ViewerConfig::single());
    open(&mut harness, NEURO_TEXTBOOK, false);
    harness.advance(Duration::from_secs(8)).await;

    let again = material(&harness, NEURO_TEXTBOOK);
    harness.update(|ctx| ctx.set_selected_material(again));
    harness.advance(Duration::from_secs(8)).await;
    assert!(!harness.render().contains("Test it!"), "stale timer revealed trigger");

    harness.advance(Duration::from_secs(3)).await;
    assert!(harness.render().contains("Test it!"));
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn closing_cancels_the_pending_prompt() {
    let mut harness = setup_viewer_harness(ViewerConfig::single());
    open(&mut harness, NEURO_TEXTBOOK, false);
    harness.advance(Duration::from_secs(5)).await;

    harness.update(|ctx| ctx.set_selected_material(None));
    harness.advance(Duration::from_secs(10)).await;
    assert!(!harness.render().contains("material-viewer"));

    open(&mut harness, NEURO_TEXTBOOK, false);
    let html = harness.render();
    assert!(html.contains("material-viewer"), "viewer missing in {html}");
    assert!(!html.contains("Test it!"), "leftover trigger after reopening: {html}");
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn sequence_viewer_answers_then_re_arms() {
    let mut harness = setup_viewer_harness(ViewerConfig::sequence());
    open(&mut harness, NEURO_TEXTBOOK, true);
    harness.advance(Duration::from_secs(10)).await;
    let html = harness.render();
    assert!(html.contains("quiz-trigger"), "trigger missing in {html}");

    harness.dispatch(QuizIntent::Activate);
    let html = harness.render();
    assert!(html.contains("Question 1 of 2"), "first question missing in {html}");
    assert!(html.contains(ELABORATION_PROMPTS[0]), "elaboration missing in {html}");
    assert!(html.contains("quiz-answer"), "answers missing in {html}");
    assert!(!html.contains("quiz-trigger"), "trigger still shown: {html}");

    harness.dispatch(QuizIntent::Answer(false));
    let html = harness.render();
    assert!(html.contains("Wrong!"), "feedback missing in {html}");
    assert!(html.contains("quiz-feedback wrong"), "feedback class missing in {html}");
    assert!(html.contains("Memory updated"), "memory badge missing in {html}");
    assert_eq!(harness.flow().bandit().counts()[0], 1);

    harness.advance(Duration::from_secs(1)).await;
    assert!(harness.render().contains("Wrong!"), "feedback dismissed early");

    harness.advance(Duration::from_secs(1)).await;
    let html = harness.render();
    assert!(!html.contains("quiz-feedback"), "feedback not dismissed: {html}");
    assert!(html.contains("quiz-trigger"), "trigger not re-armed in {html}");

    harness.dispatch(QuizIntent::Activate);
    let html = harness.render();
    assert!(html.contains("Question 2 of 2"), "second question missing in {html}");
    assert!(html.contains(ELABORATION_PROMPTS[1]), "next arm not explored in {html}");
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn single_viewer_rests_after_feedback() {
    let mut harness = setup_viewer_harness(ViewerConfig::single());
    open(&mut harness, NEURO_TEXTBOOK, false);
    harness.advance(Duration::from_secs(10)).await;
    assert!(harness.render().contains("Test it!"));

    harness.dispatch(QuizIntent::Activate);
    let html = harness.render();
    assert!(html.contains("Question 1 of 1"), "question missing in {html}");

    harness.dispatch(QuizIntent::Answer(true));
    let html = harness.render();
    assert!(html.contains("Correct!"), "feedback missing in {html}");
    assert!(html.contains("quiz-feedback correct"), "feedback class missing in {html}");
    assert!(html.contains("Memory updated"), "memory badge missing in {html}");

    harness.advance(Duration::from_secs(2)).await;
    let html = harness.render();
    assert_eq!(harness.flow().phase(), QuizPhase::Resting);
    assert!(html.contains("material-viewer"), "viewer closed unexpectedly: {html}");
    assert!(!html.contains("quiz-feedback"), "feedback not dismissed: {html}");
    assert!(!html.contains("Test it!"), "trigger re-armed for single variant: {html}");

    harness.advance(Duration::from_secs(20)).await;
    assert!(!harness.render().contains("Test it!"), "trigger came back while resting");
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn answers_before_the_trigger_are_ignored() {
    let mut harness = setup_viewer_harness(ViewerConfig::single());
    open(&mut harness, NEURO_TEXTBOOK, false);
    harness.dispatch(QuizIntent::Activate);
    harness.dispatch(QuizIntent::Answer(true));
    let html = harness.render();
    assert!(!html.contains("quiz-panel"), "question shown before prompt: {html}");
    assert_eq!(harness.flow().bandit().total_pulls(), 0);
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn close_intent_clears_selection_and_pending_feedback() {
    let mut harness = setup_viewer_harness(ViewerConfig::sequence());
    open(&mut harness, NEURO_TEXTBOOK, true);
    harness.advance(Duration::from_secs(10)).await;
    harness.dispatch(QuizIntent::Activate);
    harness.dispatch(QuizIntent::Answer(true));

    harness.dispatch(QuizIntent::Close);
    let ctx = harness.ctx();
    assert!(harness.dom.in_runtime(|| ctx.selected_material()).is_none());
    assert!(!harness.render().contains("material-viewer"));

    harness.advance(Duration::from_secs(3)).await;
    assert_eq!(harness.flow().phase(), QuizPhase::Idle);
}

#[component]
fn Orphan() -> Element {
    let message = match try_app_context() {
        Ok(_) => "found".to_owned(),
        Err(err) => err.to_string(),
    };
    rsx! { p { "{message}" } }
}

#[test]
fn context_outside_provider_reports_missing_provider() {
    let mut dom = VirtualDom::new(Orphan);
    dom.rebuild_in_place();
    drive_dom(&mut dom);
    let html = dioxus_ssr::render(&dom);
    assert!(
        html.contains("use_app_context must be used within an AppProvider"),
        "unexpected {html}"
    );
}
