//! Report export adapters.

mod csv;

pub use self::csv::{CsvExport, CsvReportExporter};
