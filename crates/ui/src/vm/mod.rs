mod deck_vm;
mod material_vm;
mod quiz_vm;
mod time_fmt;

pub use deck_vm::{DeckRowVm, map_deck_rows};
pub use material_vm::{MaterialRowVm, map_material_row};
pub use quiz_vm::{
    FeedbackVm, MEMORY_BADGE, QuestionVm, QuizIntent, QuizOverlayVm, map_quiz_overlay,
};
pub use time_fmt::format_date;
