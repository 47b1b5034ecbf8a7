//! Transitions shared by every runner of a `QuizFlow` (desktop viewer and
//! headless session), so both log the same events.

use rethink_core::quiz::{QuizFlow, TimerKind, TimerRequest};

/// Apply an elapsed timer. Returns whether it changed the flow; stale timers
/// are logged and ignored.
pub fn fire_timer(flow: &mut QuizFlow, request: TimerRequest) -> bool {
    let applied = flow.timer_elapsed(request);
    if applied {
        match request.kind {
            TimerKind::PromptReveal => tracing::debug!(epoch = request.epoch, "trigger available"),
            TimerKind::FeedbackExpiry => tracing::debug!(epoch = request.epoch, "feedback dismissed"),
        }
    } else {
        tracing::warn!(kind = ?request.kind, epoch = request.epoch, "ignored stale timer");
    }
    applied
}

/// Press the trigger. Returns the question index now shown.
pub fn activate_trigger(flow: &mut QuizFlow) -> Option<usize> {
    let shown = flow.activate_trigger();
    if let Some(index) = shown {
        tracing::debug!(
            index,
            completed = flow.is_completed(),
            elaboration = ?flow.snapshot().elaboration,
            "question shown"
        );
    }
    shown
}

/// Submit an answer and report the bandit reward. Returns the feedback
/// timer to schedule.
pub fn submit_answer(flow: &mut QuizFlow, answer: bool) -> Option<TimerRequest> {
    let request = flow.submit_answer(answer)?;
    let correct = flow.snapshot().is_correct;
    match flow.last_reward() {
        Some((arm, reward)) => {
            tracing::debug!(answer, ?correct, arm, reward, "answer submitted, memory updated");
        }
        None => tracing::debug!(answer, ?correct, "answer submitted"),
    }
    Some(request)
}
