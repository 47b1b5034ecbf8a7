use std::ops::Index;
use std::sync::Arc;

use crate::quiz::QuizError;

const NEURO_PLAIN: &str = "Think of the brain as being made up of five big areas. The biggest one is the telencephalon \u{2014} that's where your thinking and decisions happen, and it includes the two halves of your brain. Then you've got the diencephalon, which is kind of like the brain's control center with parts like the thalamus and hypothalamus. The midbrain, or mesencephalon, is involved in reflexes like reacting to sounds or lights. Below that is the metencephalon, which includes the pons and the cerebellum \u{2014} the cerebellum helps with movement and balance. Finally, the myelencephalon (also called the medulla oblongata) takes care of automatic stuff like breathing and heartbeat. Together, the midbrain, pons, and medulla are often just called the brainstem. Inside the brain and spinal cord is a fluid-filled space \u{2014} it's like plumbing for your nervous system. Also, 12 pairs of cranial nerves come out of your brain to help control things like facial movements, hearing, and digestion.\n\n\nThe diencephalon includes the thalamus, hypothalamus, and subthalamus.";

const NEURO_ANATOMICAL: &str = "The brain is anatomically subdivided into five principal regions. The largest is the telencephalon, composed of the cerebral hemispheres. Additional divisions include the diencephalon (comprising the epithalamus, thalamus, hypothalamus, and subthalamus), the mesencephalon (midbrain), which includes the cerebral peduncles (tegmentum and crus cerebri) and tectum (superior and inferior colliculi), the metencephalon (pons and cerebellum), and the myelencephalon (medulla oblongata). The mesencephalon, pons, and medulla oblongata collectively constitute the brainstem. The central nervous system's cavity forms the central canal in the spinal cord and expands into a ventricular system in the brain, filled with cerebrospinal fluid. Twelve pairs of cranial nerves arise from the brain to provide motor, sensory, and parasympathetic innervation to the head, neck, and visceral organs.\n\n\nThe diencephalon includes the thalamus, hypothalamus, and subthalamus.";

/// A single true/false statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    text: String,
    correct_answer: bool,
}

impl Question {
    #[must_use]
    pub fn new(text: impl Into<String>, correct_answer: bool) -> Self {
        Self {
            text: text.into(),
            correct_answer,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn correct_answer(&self) -> bool {
        self.correct_answer
    }

    /// Exact equality between the submitted answer and the expected one.
    #[must_use]
    pub fn is_correct(&self, answer: bool) -> bool {
        answer == self.correct_answer
    }
}

/// Ordered, non-empty list of questions. Cheap to clone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSet(Arc<[Question]>);

impl QuestionSet {
    /// # Errors
    ///
    /// Returns `QuizError::EmptyQuestionSet` when no questions are given.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::EmptyQuestionSet);
        }
        Ok(Self(questions.into()))
    }

    /// The two-question neuroanatomy set: the same statement framed in plain and
    /// in anatomical language.
    #[must_use]
    pub fn neuroanatomy() -> Self {
        Self(Arc::from(vec![
            Question::new(NEURO_PLAIN, true),
            Question::new(NEURO_ANATOMICAL, true),
        ]))
    }

    /// Only the plain-language neuroanatomy question.
    #[must_use]
    pub fn neuroanatomy_single() -> Self {
        Self(Arc::from(vec![Question::new(NEURO_PLAIN, true)]))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with slices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.0.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.0.iter()
    }

    /// Index that follows `current`, wrapping to 0 past the end.
    ///
    /// The flag is true when the wrap happened.
    #[must_use]
    pub fn next_index(&self, current: Option<usize>) -> (usize, bool) {
        match current {
            None => (0, false),
            Some(i) if i + 1 < self.len() => (i + 1, false),
            Some(_) => (0, true),
        }
    }
}

impl Index<usize> for QuestionSet {
    type Output = Question;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}
