//! Adapters - Implementations of the port interfaces.
//!
//! - `answers` - Answer sheets from YAML/JSON files
//! - `report` - Markdown and JSON report renderers
//! - `storage` - Local filesystem report export

pub mod answers;
pub mod report;
pub mod storage;

pub use answers::FileAnswerSource;
pub use report::{JsonReportRenderer, MarkdownReportRenderer};
pub use storage::LocalReportWriter;
