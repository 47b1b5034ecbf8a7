//! UCB1 choice of how a concept is elaborated before it is tested.
//!
//! Each arm is one elaboration prompt. A correct true/false answer rewards
//! the arm that was active when the question was shown.

use crate::quiz::QuizError;

/// Elaboration prompts, one per bandit arm.
pub const ELABORATION_PROMPTS: [&str; 4] = [
    "Explain the concept in a simple and engaging way, focusing on practical examples.",
    "Break down the concept into its fundamental components and explain each part.",
    "Compare and contrast this concept with related ideas, highlighting key differences.",
    "Present the concept through a real-world scenario or case study.",
];

/// Reward for one answer: 1 when correct, 0 otherwise.
#[must_use]
pub fn reward(correct: bool) -> f64 {
    if correct { 1.0 } else { 0.0 }
}

/// Upper-confidence-bound bandit over a fixed number of arms.
///
/// Every arm is pulled once before the UCB score takes over; ties go to the
/// lowest index.
#[derive(Debug, Clone, PartialEq)]
pub struct Ucb1Bandit {
    values: Vec<f64>,
    counts: Vec<u32>,
    total_pulls: u32,
}

impl Ucb1Bandit {
    /// # Errors
    ///
    /// Returns `QuizError::NoArms` when `arms` is zero.
    pub fn new(arms: usize) -> Result<Self, QuizError> {
        if arms == 0 {
            return Err(QuizError::NoArms);
        }
        Ok(Self::zeroed(arms))
    }

    fn zeroed(arms: usize) -> Self {
        Self {
            values: vec![0.0; arms],
            counts: vec![0; arms],
            total_pulls: 0,
        }
    }

    #[must_use]
    pub fn arms(&self) -> usize {
        self.values.len()
    }

    /// Mean reward per arm.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    #[must_use]
    pub fn total_pulls(&self) -> u32 {
        self.total_pulls
    }

    /// Arm to play next.
    #[must_use]
    pub fn select_arm(&self) -> usize {
        if let Some(unpulled) = self.counts.iter().position(|&count| count == 0) {
            return unpulled;
        }
        let scores = self.ucb_scores();
        let mut best = 0;
        for (arm, score) in scores.iter().enumerate().skip(1) {
            if *score > scores[best] {
                best = arm;
            }
        }
        best
    }

    /// Record `reward` for `arm` with the incremental mean update.
    ///
    /// Returns `false` and changes nothing when `arm` is out of range.
    pub fn update(&mut self, arm: usize, reward: f64) -> bool {
        let (Some(value), Some(count)) = (self.values.get_mut(arm), self.counts.get_mut(arm))
        else {
            return false;
        };
        *count += 1;
        self.total_pulls += 1;
        *value += (reward - *value) / f64::from(*count);
        true
    }

    /// Softmax over the UCB scores; uniform before any pull.
    #[must_use]
    pub fn distributions(&self) -> Vec<f64> {
        let arms = self.arms();
        if self.total_pulls == 0 {
            return vec![1.0 / arms as f64; arms];
        }
        let scores = self.ucb_scores();
        let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let exp: Vec<f64> = scores
            .iter()
            .map(|score| {
                if score.is_infinite() {
                    if *score == max { 1.0 } else { 0.0 }
                } else if max.is_infinite() {
                    0.0
                } else {
                    (score - max).exp()
                }
            })
            .collect();
        let sum: f64 = exp.iter().sum();
        exp.into_iter().map(|weight| weight / sum).collect()
    }

    // Unpulled arms score +inf.
    fn ucb_scores(&self) -> Vec<f64> {
        let ln_total = f64::from(self.total_pulls.max(1)).ln();
        self.values
            .iter()
            .zip(&self.counts)
            .map(|(value, &count)| {
                if count == 0 {
                    f64::INFINITY
                } else {
                    value + (2.0 * ln_total / f64::from(count)).sqrt()
                }
            })
            .collect()
    }
}

impl Default for Ucb1Bandit {
    /// One arm per entry of `ELABORATION_PROMPTS`.
    fn default() -> Self {
        Self::zeroed(ELABORATION_PROMPTS.len())
    }
}
