//! Answer sheet adapters.

mod file_answer_source;

pub use file_answer_source::FileAnswerSource;
