//! Workbook assembly: turns a scrape session into an xlsx file.

pub mod filename;
pub mod sheets;
pub mod workbook;

pub use filename::output_path;
pub use sheets::{SheetData, build_sheet_plan};
pub use workbook::{ExportReport, SheetSummary, write_workbook};
