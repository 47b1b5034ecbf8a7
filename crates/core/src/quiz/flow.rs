use std::time::Duration;

use crate::quiz::bandit::{ELABORATION_PROMPTS, Ucb1Bandit, reward};
use crate::quiz::question::{Question, QuestionSet};

/// Delay between opening a textbook and offering the quiz trigger.
pub const DEFAULT_PROMPT_DELAY: Duration = Duration::from_secs(10);
/// How long answer feedback stays on screen.
pub const DEFAULT_FEEDBACK_DELAY: Duration = Duration::from_secs(2);

/// Tunables for one viewer's quiz flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizConfig {
    pub questions: QuestionSet,
    /// Show the trigger again as soon as feedback expires.
    pub re_arm_after_feedback: bool,
    pub prompt_delay: Duration,
    pub feedback_delay: Duration,
}

impl QuizConfig {
    #[must_use]
    pub fn new(questions: QuestionSet, re_arm_after_feedback: bool) -> Self {
        Self {
            questions,
            re_arm_after_feedback,
            prompt_delay: DEFAULT_PROMPT_DELAY,
            feedback_delay: DEFAULT_FEEDBACK_DELAY,
        }
    }

    /// Cycles through the neuroanatomy pair, re-arming after each answer.
    #[must_use]
    pub fn sequence() -> Self {
        Self::new(QuestionSet::neuroanatomy(), true)
    }

    /// One question, asked once per material selection.
    #[must_use]
    pub fn single() -> Self {
        Self::new(QuestionSet::neuroanatomy_single(), false)
    }

    #[must_use]
    pub fn with_prompt_delay(mut self, delay: Duration) -> Self {
        self.prompt_delay = delay;
        self
    }

    #[must_use]
    pub fn with_feedback_delay(mut self, delay: Duration) -> Self {
        self.feedback_delay = delay;
        self
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self::sequence()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizPhase {
    /// Waiting for the prompt delay; nothing quiz-related on screen.
    Idle,
    /// Trigger visible, question hidden.
    PromptAvailable,
    /// Question and answer buttons visible.
    QuestionShown,
    /// Feedback visible until the feedback delay expires.
    Answered { answer: bool, correct: bool },
    /// Feedback expired without re-arming the trigger.
    Resting,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerKind {
    PromptReveal,
    FeedbackExpiry,
}

/// A delayed transition the caller must schedule.
///
/// When the delay elapses, hand `epoch` back to the matching `*_elapsed` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerRequest {
    pub kind: TimerKind,
    pub delay: Duration,
    pub epoch: u64,
}

/// Flattened, render-ready view of the flow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct QuizSnapshot {
    pub visible: bool,
    pub current_index: Option<usize>,
    pub user_answer: Option<bool>,
    pub is_correct: Option<bool>,
    pub feedback_visible: bool,
    pub prompt_button_visible: bool,
    pub answer_buttons_visible: bool,
    pub completed: bool,
    /// Bandit arm used to elaborate the question on screen.
    pub elaboration: Option<usize>,
}

/// Quiz state machine for a single material viewer.
///
/// Pure: it never sleeps. Operations that start a delay return a
/// `TimerRequest`; every reset or close bumps the epoch so timers issued
/// before it are ignored when they come back.
///
/// Each shown question is paired with an elaboration prompt picked by a
/// UCB1 bandit; the answer's correctness is fed back as that arm's reward.
/// Bandit statistics live as long as the flow and survive resets.
#[derive(Debug, Clone)]
pub struct QuizFlow {
    config: QuizConfig,
    phase: QuizPhase,
    cursor: Option<usize>,
    completed: bool,
    epoch: u64,
    bandit: Ucb1Bandit,
    arm: Option<usize>,
}

impl QuizFlow {
    #[must_use]
    pub fn new(config: QuizConfig) -> Self {
        Self {
            config,
            phase: QuizPhase::Idle,
            cursor: None,
            completed: false,
            epoch: 0,
            bandit: Ucb1Bandit::default(),
            arm: None,
        }
    }

    #[must_use]
    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.cursor
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    #[must_use]
    pub fn bandit(&self) -> &Ucb1Bandit {
        &self.bandit
    }

    /// Elaboration prompt paired with the question on screen.
    #[must_use]
    pub fn current_elaboration(&self) -> Option<&'static str> {
        self.current_question()?;
        self.arm.and_then(|arm| ELABORATION_PROMPTS.get(arm).copied())
    }

    /// Arm and reward recorded by the answer on screen.
    #[must_use]
    pub fn last_reward(&self) -> Option<(usize, f64)> {
        match self.phase {
            QuizPhase::Answered { correct, .. } => self.arm.map(|arm| (arm, reward(correct))),
            _ => None,
        }
    }

    /// The question on screen, if any.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        match self.phase {
            QuizPhase::QuestionShown | QuizPhase::Answered { .. } => {
                self.cursor.and_then(|i| self.config.questions.get(i))
            }
            _ => None,
        }
    }

    /// Start over for a newly selected material.
    ///
    /// Returns the prompt-reveal timer to schedule.
    pub fn reset(&mut self) -> TimerRequest {
        self.clear();
        TimerRequest {
            kind: TimerKind::PromptReveal,
            delay: self.config.prompt_delay,
            epoch: self.epoch,
        }
    }

    /// Tear down for a closed viewer. Pending timers go stale.
    pub fn close(&mut self) {
        self.clear();
    }

    fn clear(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
        self.phase = QuizPhase::Idle;
        self.cursor = None;
        self.completed = false;
        self.arm = None;
    }

    /// Prompt delay elapsed. Returns whether the trigger became visible.
    pub fn prompt_elapsed(&mut self, epoch: u64) -> bool {
        if epoch != self.epoch || self.phase != QuizPhase::Idle {
            return false;
        }
        self.phase = QuizPhase::PromptAvailable;
        true
    }

    /// User activated the trigger: advance to the next question and show it.
    ///
    /// Returns the index now shown, or `None` when the trigger is not offered.
    pub fn activate_trigger(&mut self) -> Option<usize> {
        if self.phase != QuizPhase::PromptAvailable {
            return None;
        }
        let (next, wrapped) = self.config.questions.next_index(self.cursor);
        if wrapped {
            self.completed = true;
        }
        self.cursor = Some(next);
        self.arm = Some(self.bandit.select_arm());
        self.phase = QuizPhase::QuestionShown;
        Some(next)
    }

    /// User picked True or False.
    ///
    /// Returns the feedback-expiry timer, or `None` when no question awaits an answer.
    pub fn submit_answer(&mut self, answer: bool) -> Option<TimerRequest> {
        if self.phase != QuizPhase::QuestionShown {
            return None;
        }
        let correct = self.current_question()?.is_correct(answer);
        self.phase = QuizPhase::Answered { answer, correct };
        if let Some(arm) = self.arm {
            self.bandit.update(arm, reward(correct));
        }
        self.epoch = self.epoch.wrapping_add(1);
        Some(TimerRequest {
            kind: TimerKind::FeedbackExpiry,
            delay: self.config.feedback_delay,
            epoch: self.epoch,
        })
    }

    /// Feedback delay elapsed. Returns whether feedback was dismissed.
    pub fn feedback_elapsed(&mut self, epoch: u64) -> bool {
        if epoch != self.epoch || !matches!(self.phase, QuizPhase::Answered { .. }) {
            return false;
        }
        self.phase = if self.config.re_arm_after_feedback {
            QuizPhase::PromptAvailable
        } else {
            QuizPhase::Resting
        };
        true
    }

    /// Route an elapsed timer to the matching transition.
    pub fn timer_elapsed(&mut self, request: TimerRequest) -> bool {
        match request.kind {
            TimerKind::PromptReveal => self.prompt_elapsed(request.epoch),
            TimerKind::FeedbackExpiry => self.feedback_elapsed(request.epoch),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> QuizSnapshot {
        let (user_answer, is_correct) = match self.phase {
            QuizPhase::Answered { answer, correct } => (Some(answer), Some(correct)),
            _ => (None, None),
        };
        QuizSnapshot {
            visible: matches!(
                self.phase,
                QuizPhase::QuestionShown | QuizPhase::Answered { .. }
            ),
            current_index: self.cursor,
            user_answer,
            is_correct,
            feedback_visible: matches!(self.phase, QuizPhase::Answered { .. }),
            prompt_button_visible: self.phase == QuizPhase::PromptAvailable,
            answer_buttons_visible: self.phase == QuizPhase::QuestionShown,
            completed: self.completed,
            elaboration: if matches!(
                self.phase,
                QuizPhase::QuestionShown | QuizPhase::Answered { .. }
            ) {
                self.arm
            } else {
                None
            },
        }
    }
}
