//! Ports - Interfaces between the application and the outside world.
//!
//! The application depends on these traits; adapters implement them.

mod answer_source;
mod report_renderer;
mod report_writer;

pub use answer_source::{AnswerSource, AnswerSourceError};
pub use report_renderer::{RenderError, ReportFormat, ReportRenderer};
pub use report_writer::{report_file_name, ExportError, ReportWriter};
