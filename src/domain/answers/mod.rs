//! Answers module - Serializable answer sheets replayed by the runner.

mod sheet;

pub use sheet::{
    AnswerSheet, MeaningAnswers, PactAnswers, PurposeAnswers, RewardEdit, ValuesAnswers,
};
