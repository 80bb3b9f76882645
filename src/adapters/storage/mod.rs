//! Filesystem storage adapters.

mod local_report_writer;

pub use local_report_writer::LocalReportWriter;
