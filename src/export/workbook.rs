use std::fs;
use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use tracing::{debug, info, instrument};

use super::sheets::SheetData;
use crate::constants::sheets::{EXPECTED, PLAYERS_SUFFIX};
use crate::error::AppError;

/// Name and size of one written sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetSummary {
    pub name: String,
    pub rows: usize,
    pub columns: usize,
}

/// What ended up in a written workbook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub path: PathBuf,
    pub sheets: Vec<SheetSummary>,
}

impl ExportReport {
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }

    pub fn has_sheet(&self, name: &str) -> bool {
        self.sheets.iter().any(|s| s.name == name)
    }

    /// Sheets a complete game page should produce that are missing here
    pub fn missing_expected_sheets(&self) -> Vec<&'static str> {
        EXPECTED
            .into_iter()
            .filter(|name| !self.has_sheet(name))
            .collect()
    }

    /// Per-team roster sheets
    pub fn team_player_sheets(&self) -> Vec<&str> {
        self.sheet_names()
            .into_iter()
            .filter(|name| name.ends_with(PLAYERS_SUFFIX))
            .collect()
    }
}

/// Writes `sheets` to an xlsx file at `path`, creating parent directories.
///
/// Every cell is written as a string. Header rows are bold.
///
/// # Returns
/// * `Ok(ExportReport)` - Summary of the written sheets
/// * `Err(AppError::NothingToWrite)` - `sheets` is empty
/// * `Err(AppError::Io | AppError::Workbook)` - The directory or file could not be written
#[instrument(skip(sheets))]
pub fn write_workbook(path: &Path, sheets: &[SheetData]) -> Result<ExportReport, AppError> {
    if sheets.is_empty() {
        return Err(AppError::nothing_to_write(path.display().to_string()));
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty())
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
        info!("Created directory: {}", parent.display());
    }

    let header_format = Format::new().set_bold();
    let mut workbook = Workbook::new();
    let mut summaries = Vec::with_capacity(sheets.len());

    for sheet in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&sheet.name)?;

        let mut first_row = 0;
        if let Some(header) = &sheet.header {
            for (col_idx, value) in header.iter().enumerate() {
                let (row, col) = cell_position(0, col_idx)?;
                worksheet.write_string_with_format(row, col, value, &header_format)?;
            }
            first_row = 1;
        }
        write_rows(worksheet, first_row, &sheet.rows)?;

        debug!(
            "Sheet '{}': {} rows x {} columns",
            sheet.name,
            sheet.row_count(),
            sheet.column_count()
        );
        summaries.push(SheetSummary {
            name: sheet.name.clone(),
            rows: sheet.row_count(),
            columns: sheet.column_count(),
        });
    }

    workbook.save(path)?;
    info!("Workbook saved with {} sheets", summaries.len());

    Ok(ExportReport {
        path: path.to_path_buf(),
        sheets: summaries,
    })
}

fn write_rows(worksheet: &mut Worksheet, first_row: u32, rows: &[Vec<String>]) -> Result<(), XlsxError> {
    for (row_idx, row) in rows.iter().enumerate() {
        for (col_idx, value) in row.iter().enumerate() {
            let (row, col) = cell_position(first_row as usize + row_idx, col_idx)?;
            worksheet.write_string(row, col, value)?;
        }
    }
    Ok(())
}

/// Converts grid indices to xlsx cell coordinates, failing instead of wrapping.
fn cell_position(row: usize, col: usize) -> Result<(u32, u16), XlsxError> {
    let row = u32::try_from(row).map_err(|_| XlsxError::RowColumnLimitError)?;
    let col = u16::try_from(col).map_err(|_| XlsxError::RowColumnLimitError)?;
    Ok((row, col))
}
