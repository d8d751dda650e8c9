// Mock interview: question banks, answer evaluation, and the injectable
// random source behind fluency draws and question selection.

pub mod evaluator;
pub mod questions;
pub mod random;

pub use evaluator::{evaluate_answer, EvaluationResult};
pub use questions::{InterviewQuestion, QuestionBank, DEFAULT_BANK};
pub use random::{RandomSource, RngSource, SequenceSource};
