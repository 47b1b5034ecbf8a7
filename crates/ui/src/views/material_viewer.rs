use dioxus::prelude::*;
use rethink_core::quiz::{QuizFlow, TimerRequest};
use services::quiz_driver;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

use crate::context::use_app_context;
use crate::views::DocumentViewer;
use crate::vm::{
    FeedbackVm, MEMORY_BADGE, QuestionVm, QuizIntent, QuizOverlayVm, map_quiz_overlay,
};

/// Textbook overlay with the timed true/false quiz.
///
/// Every change of the selected material (including re-selecting the same
/// one) cancels the pending timer and restarts the flow. Timer tasks belong
/// to this component's scope, so unmounting cancels them too.
#[component]
pub fn MaterialViewer() -> Element {
    let ctx = use_app_context();
    let config = ctx.viewer_config();
    let mut flow = use_signal({
        let quiz = config.quiz.clone();
        move || QuizFlow::new(quiz)
    });
    let mut pending = use_signal(|| None::<Task>);

    let ctx_for_selection = ctx.clone();
    use_effect(move || {
        let material = ctx_for_selection.selected_material();
        let revision = ctx_for_selection.selection_revision();
        cancel_pending(pending);

        match material {
            Some(material) if material.is_textbook() => {
                let request = flow.write().reset();
                tracing::debug!(
                    material = %material.id(),
                    revision,
                    epoch = request.epoch,
                    "textbook selected, quiz reset"
                );
                pending.set(Some(schedule_timer(flow, request)));
            }
            _ => flow.write().close(),
        }
    });

    let ctx_for_intent = ctx.clone();
    let gate = config.clone();
    let dispatch_intent = use_callback(move |intent: QuizIntent| {
        let material = ctx_for_intent.selected_material();
        if !gate.should_render(material.as_ref(), ctx_for_intent.show_graph()) {
            return;
        }
        match intent {
            QuizIntent::Activate => {
                quiz_driver::activate_trigger(&mut flow.write());
            }
            QuizIntent::Answer(answer) => {
                let request = quiz_driver::submit_answer(&mut flow.write(), answer);
                if let Some(request) = request {
                    cancel_pending(pending);
                    pending.set(Some(schedule_timer(flow, request)));
                }
            }
            QuizIntent::Close => {
                cancel_pending(pending);
                flow.write().close();
                ctx_for_intent.set_selected_material(None);
                tracing::debug!("viewer closed");
            }
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch_intent, flow);
            }
        }
    }

    let material = ctx.selected_material();
    if !config.should_render(material.as_ref(), ctx.show_graph()) {
        return rsx! {};
    }
    let Some(source) = material.as_ref().and_then(|m| m.document_source()).cloned() else {
        return rsx! {};
    };
    let title = material.as_ref().map(|m| m.title().to_owned()).unwrap_or_default();
    let QuizOverlayVm {
        show_trigger,
        question,
        feedback,
        ..
    } = map_quiz_overlay(&flow.read());

    rsx! {
        div { class: "material-viewer",
            div { class: "viewer-header",
                h2 { class: "viewer-title", "{title}" }
                button {
                    class: "viewer-close",
                    r#type: "button",
                    aria_label: "Close viewer",
                    onclick: move |_| dispatch_intent.call(QuizIntent::Close),
                    "×"
                }
            }
            div { class: "viewer-body",
                DocumentViewer { source, options: config.document }
                if show_trigger {
                    button {
                        class: "quiz-trigger",
                        r#type: "button",
                        onclick: move |_| dispatch_intent.call(QuizIntent::Activate),
                        "{config.trigger_label}"
                    }
                }
                if let Some(question) = question {
                    QuizPanel {
                        question,
                        feedback,
                        on_answer: move |answer: bool| dispatch_intent.call(QuizIntent::Answer(answer)),
                    }
                }
            }
        }
    }
}

#[component]
fn QuizPanel(question: QuestionVm, feedback: Option<FeedbackVm>, on_answer: EventHandler<bool>) -> Element {
    rsx! {
        div { class: "quiz-panel",
            p { class: "quiz-position", "{question.position_label}" }
            if let Some(elaboration) = question.elaboration {
                p { class: "quiz-elaboration", "{elaboration}" }
            }
            p { class: "quiz-question", "{question.text}" }
            if question.show_answers {
                div { class: "quiz-answers",
                    button {
                        class: "quiz-answer",
                        r#type: "button",
                        onclick: move |_| on_answer.call(true),
                        "True"
                    }
                    button {
                        class: "quiz-answer",
                        r#type: "button",
                        onclick: move |_| on_answer.call(false),
                        "False"
                    }
                }
            }
            if let Some(feedback) = feedback {
                div { class: feedback.class(),
                    span { class: "quiz-feedback-message", "{feedback.message()}" }
                    span { class: "memory-badge", "{MEMORY_BADGE}" }
                }
            }
        }
    }
}

fn cancel_pending(mut pending: Signal<Option<Task>>) {
    if let Some(task) = pending.write().take() {
        task.cancel();
    }
}

fn schedule_timer(mut flow: Signal<QuizFlow>, request: TimerRequest) -> Task {
    spawn(async move {
        tokio::time::sleep(request.delay).await;
        quiz_driver::fire_timer(&mut flow.write(), request);
    })
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    flow: Rc<RefCell<Option<Signal<QuizFlow>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizIntent>, flow: Signal<QuizFlow>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.flow.borrow_mut() = Some(flow);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn flow(&self) -> Signal<QuizFlow> {
        (*self.flow.borrow()).expect("quiz flow registered")
    }
}
