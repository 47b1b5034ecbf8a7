use rethink_core::quiz::QuizFlow;

pub const MEMORY_BADGE: &str = "Memory updated";

/// User actions on the quiz overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Activate,
    Answer(bool),
    Close,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizOverlayVm {
    pub show_trigger: bool,
    pub question: Option<QuestionVm>,
    pub feedback: Option<FeedbackVm>,
    pub completed: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub position_label: String,
    pub text: String,
    pub elaboration: Option<String>,
    pub show_answers: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub correct: bool,
}

impl FeedbackVm {
    #[must_use]
    pub fn message(&self) -> &'static str {
        if self.correct { "Correct!" } else { "Wrong!" }
    }

    #[must_use]
    pub fn class(&self) -> &'static str {
        if self.correct {
            "quiz-feedback correct"
        } else {
            "quiz-feedback wrong"
        }
    }
}

/// Everything the overlay needs from the flow, in one pass.
#[must_use]
pub fn map_quiz_overlay(flow: &QuizFlow) -> QuizOverlayVm {
    let snapshot = flow.snapshot();
    let total = flow.config().questions.len();

    let question = match (snapshot.visible, snapshot.current_index, flow.current_question()) {
        (true, Some(index), Some(question)) => Some(QuestionVm {
            position_label: format!("Question {} of {total}", index + 1),
            text: question.text().to_owned(),
            elaboration: flow.current_elaboration().map(str::to_owned),
            show_answers: snapshot.answer_buttons_visible,
        }),
        _ => None,
    };

    let feedback = if snapshot.feedback_visible {
        snapshot.is_correct.map(|correct| FeedbackVm { correct })
    } else {
        None
    };

    QuizOverlayVm {
        show_trigger: snapshot.prompt_button_visible,
        question,
        feedback,
        completed: snapshot.completed,
    }
}
