use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use rethink_core::model::Material;
use rethink_core::quiz::{QuizFlow, QuizSnapshot, TimerRequest, Ucb1Bandit, ViewerConfig};

use crate::quiz_driver;
use crate::timer::TimerHandle;

struct SessionState {
    flow: QuizFlow,
    material: Option<Material>,
    show_graph: bool,
    pending: Option<TimerHandle>,
}

impl SessionState {
    fn cancel_pending(&mut self) {
        if let Some(timer) = self.pending.take() {
            timer.cancel();
        }
    }
}

/// Headless material viewer: the quiz flow plus the timers that drive it.
///
/// Backs the `simulate` command and headless tests; the desktop viewer runs
/// the same `quiz_driver` transitions on Dioxus tasks instead.
///
/// Clones share one session. Transitions from callers and from timers are
/// serialized by a mutex. Dropping the last clone cancels any pending timer.
#[derive(Clone)]
pub struct ViewerSession {
    config: Arc<ViewerConfig>,
    state: Arc<Mutex<SessionState>>,
}

impl ViewerSession {
    #[must_use]
    pub fn new(config: ViewerConfig) -> Self {
        let flow = QuizFlow::new(config.quiz.clone());
        Self {
            config: Arc::new(config),
            state: Arc::new(Mutex::new(SessionState {
                flow,
                material: None,
                show_graph: false,
                pending: None,
            })),
        }
    }

    #[must_use]
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace the selected material. Every call restarts the quiz, even when
    /// the same material is selected again.
    ///
    /// Must be called inside a tokio runtime when a textbook is selected.
    pub fn select_material(&self, material: Option<Material>) {
        let mut state = self.lock();
        state.cancel_pending();

        match material.as_ref() {
            Some(selected) if selected.is_textbook() => {
                let request = state.flow.reset();
                tracing::debug!(
                    material = %selected.id(),
                    epoch = request.epoch,
                    "textbook selected, quiz reset"
                );
                state.pending = Some(self.schedule(request));
            }
            Some(selected) => {
                state.flow.close();
                tracing::debug!(
                    material = %selected.id(),
                    kind = selected.kind().label(),
                    "non-textbook selected, viewer stays hidden"
                );
            }
            None => {
                state.flow.close();
                tracing::debug!("selection cleared");
            }
        }
        state.material = material;
    }

    pub fn set_show_graph(&self, show: bool) {
        self.lock().show_graph = show;
    }

    /// Close button: clears the selection and cancels every pending timer.
    pub fn close(&self) {
        let mut state = self.lock();
        state.cancel_pending();
        state.flow.close();
        state.material = None;
        tracing::debug!("viewer closed");
    }

    /// Press the trigger. Returns the question index now shown.
    pub fn activate_trigger(&self) -> Option<usize> {
        let mut state = self.lock();
        if !self.rendered(&state) {
            return None;
        }
        quiz_driver::activate_trigger(&mut state.flow)
    }

    /// Answer the question on screen. Returns whether the answer was correct.
    pub fn submit_answer(&self, answer: bool) -> Option<bool> {
        let mut state = self.lock();
        if !self.rendered(&state) {
            return None;
        }
        let request = quiz_driver::submit_answer(&mut state.flow, answer)?;
        let correct = state.flow.snapshot().is_correct;
        state.cancel_pending();
        state.pending = Some(self.schedule(request));
        correct
    }

    #[must_use]
    pub fn snapshot(&self) -> QuizSnapshot {
        self.lock().flow.snapshot()
    }

    /// Text of the question on screen.
    #[must_use]
    pub fn question_text(&self) -> Option<String> {
        self.lock()
            .flow
            .current_question()
            .map(|question| question.text().to_owned())
    }

    /// Elaboration prompt paired with the question on screen.
    #[must_use]
    pub fn elaboration(&self) -> Option<&'static str> {
        self.lock().flow.current_elaboration()
    }

    /// Copy of the elaboration bandit's statistics.
    #[must_use]
    pub fn bandit(&self) -> Ucb1Bandit {
        self.lock().flow.bandit().clone()
    }

    #[must_use]
    pub fn selected_material(&self) -> Option<Material> {
        self.lock().material.clone()
    }

    /// Whether the overlay would be on screen right now.
    #[must_use]
    pub fn is_rendered(&self) -> bool {
        let state = self.lock();
        self.rendered(&state)
    }

    /// Whether a timer is still waiting to fire.
    #[must_use]
    pub fn has_pending_timer(&self) -> bool {
        self.lock()
            .pending
            .as_ref()
            .is_some_and(|timer| !timer.is_finished())
    }

    fn rendered(&self, state: &SessionState) -> bool {
        self.config
            .should_render(state.material.as_ref(), state.show_graph)
    }

    fn schedule(&self, request: TimerRequest) -> TimerHandle {
        let state = Arc::downgrade(&self.state);
        TimerHandle::schedule(request.delay, async move {
            fire(&state, request);
        })
    }
}

fn fire(state: &Weak<Mutex<SessionState>>, request: TimerRequest) {
    let Some(state) = state.upgrade() else {
        return;
    };
    let mut state = state.lock().unwrap_or_else(PoisonError::into_inner);
    quiz_driver::fire_timer(&mut state.flow, request);
}
