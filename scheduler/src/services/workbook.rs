//! Spreadsheet codec for the persisted tables
//!
//! One xlsx document holds two sheets: `participants` (participant,
//! is_active) and `session_history` (date, participant_1, participant_2).
//! Columns are located by header so hand-edited files with reordered
//! columns still load.

use std::collections::HashMap;
use std::io::Cursor;

use calamine::{open_workbook_from_rs, Data, Range, Reader, Xlsx};
use chrono::{Duration, NaiveDate};
use rust_xlsxwriter::{Workbook, XlsxError};
use shared::{format_iso_date, parse_iso_date, Participant, SessionRecord};

use crate::core::{HistoryLedger, Roster};
use crate::error::{SchedulerError, SchedulerResult};

pub const PARTICIPANTS_SHEET: &str = "participants";
pub const SESSION_HISTORY_SHEET: &str = "session_history";

const PARTICIPANT_COLUMNS: [&str; 2] = ["participant", "is_active"];
const SESSION_COLUMNS: [&str; 3] = ["date", "participant_1", "participant_2"];

fn write_error(e: XlsxError) -> SchedulerError {
    SchedulerError::WorkbookError { message: e.to_string() }
}

/// Serialize both tables into a single xlsx document
pub fn encode_workbook(roster: &Roster, ledger: &HistoryLedger) -> SchedulerResult<Vec<u8>> {
    let mut workbook = Workbook::new();

    let sheet = workbook.add_worksheet();
    sheet.set_name(PARTICIPANTS_SHEET).map_err(write_error)?;
    for (col, header) in PARTICIPANT_COLUMNS.iter().enumerate() {
        sheet.write_string(0, col as u16, *header).map_err(write_error)?;
    }
    for (i, participant) in roster.participants().iter().enumerate() {
        let row = (i + 1) as u32;
        sheet.write_string(row, 0, participant.name.as_str()).map_err(write_error)?;
        sheet.write_boolean(row, 1, participant.active).map_err(write_error)?;
    }

    let sheet = workbook.add_worksheet();
    sheet.set_name(SESSION_HISTORY_SHEET).map_err(write_error)?;
    for (col, header) in SESSION_COLUMNS.iter().enumerate() {
        sheet.write_string(0, col as u16, *header).map_err(write_error)?;
    }
    for (i, record) in ledger.records().iter().enumerate() {
        let row = (i + 1) as u32;
        sheet.write_string(row, 0, format_iso_date(record.date)).map_err(write_error)?;
        sheet.write_string(row, 1, record.participant_1.as_str()).map_err(write_error)?;
        sheet.write_string(row, 2, record.participant_2.as_str()).map_err(write_error)?;
    }

    workbook.save_to_buffer().map_err(write_error)
}

/// Parse both tables out of an xlsx document
pub fn decode_workbook(bytes: &[u8]) -> SchedulerResult<(Roster, HistoryLedger)> {
    let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes))
        .map_err(|e| SchedulerError::malformed(format!("cannot open workbook: {e}")))?;

    let participants = sheet_range(&mut workbook, PARTICIPANTS_SHEET)?;
    let sessions = sheet_range(&mut workbook, SESSION_HISTORY_SHEET)?;

    Ok((decode_roster(&participants)?, decode_ledger(&sessions)?))
}

fn sheet_range(workbook: &mut Xlsx<Cursor<&[u8]>>, name: &str) -> SchedulerResult<Range<Data>> {
    if !workbook.sheet_names().iter().any(|sheet| sheet == name) {
        return Err(SchedulerError::malformed(format!("missing sheet '{name}'")));
    }
    workbook
        .worksheet_range(name)
        .map_err(|e| SchedulerError::malformed(format!("cannot read sheet '{name}': {e}")))
}

/// Header-indexed view over a sheet
struct Table<'a> {
    sheet: &'static str,
    first_row: usize,
    columns: HashMap<String, usize>,
    rows: Vec<&'a [Data]>,
}

impl<'a> Table<'a> {
    fn new(sheet: &'static str, range: &'a Range<Data>) -> Self {
        let mut rows = range.rows();
        let columns = rows
            .next()
            .map(|header| {
                header
                    .iter()
                    .enumerate()
                    .filter_map(|(i, cell)| cell_text(cell).map(|name| (name, i)))
                    .collect()
            })
            .unwrap_or_default();
        let first_row = range.start().map(|(row, _)| row as usize).unwrap_or(0);

        Self {
            sheet,
            first_row,
            columns,
            rows: rows.collect(),
        }
    }

    fn column(&self, name: &str) -> SchedulerResult<usize> {
        self.columns.get(name).copied().ok_or_else(|| {
            SchedulerError::malformed(format!("sheet '{}' has no '{}' column", self.sheet, name))
        })
    }

    /// Spreadsheet row number (1-based, header is the first row) of a data row
    fn row_number(&self, index: usize) -> usize {
        self.first_row + index + 2
    }

    fn is_headerless(&self) -> bool {
        self.columns.is_empty() && self.rows.is_empty()
    }
}

static EMPTY_CELL: Data = Data::Empty;

fn cell(row: &[Data], col: usize) -> &Data {
    row.get(col).unwrap_or(&EMPTY_CELL)
}

fn cell_text(cell: &Data) -> Option<String> {
    let text = match cell {
        Data::Empty => return None,
        Data::String(s) => s.trim().to_string(),
        other => other.to_string(),
    };
    (!text.is_empty()).then_some(text)
}

fn cell_bool(table: &Table<'_>, index: usize, cell: &Data) -> SchedulerResult<bool> {
    match cell {
        Data::Bool(b) => Ok(*b),
        Data::Empty => Ok(false),
        Data::Int(i) => Ok(*i != 0),
        Data::Float(f) => Ok(*f != 0.0),
        Data::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "1" => Ok(true),
            "false" | "no" | "0" | "" => Ok(false),
            _ => Err(SchedulerError::malformed(format!(
                "sheet '{}' row {}: '{}' is not a boolean",
                table.sheet,
                table.row_number(index),
                s
            ))),
        },
        other => Err(SchedulerError::malformed(format!(
            "sheet '{}' row {}: '{}' is not a boolean",
            table.sheet,
            table.row_number(index),
            other
        ))),
    }
}

/// Convert an Excel serial day number (1900 date system) to a date
fn excel_serial_date(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() || serial < 1.0 {
        return None;
    }
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    epoch.checked_add_signed(Duration::days(serial.floor() as i64))
}

fn cell_date(table: &Table<'_>, index: usize, cell: &Data) -> SchedulerResult<NaiveDate> {
    let malformed = |value: String| SchedulerError::MalformedDate {
        sheet: table.sheet.to_string(),
        row: table.row_number(index),
        value,
    };

    match cell {
        Data::String(s) => parse_iso_date(s).map_err(|_| malformed(s.clone())),
        Data::DateTimeIso(s) => {
            let day = s.get(..10).unwrap_or(s.as_str());
            parse_iso_date(day).map_err(|_| malformed(s.clone()))
        }
        Data::DateTime(dt) => excel_serial_date(dt.as_f64()).ok_or_else(|| malformed(dt.as_f64().to_string())),
        Data::Float(f) => excel_serial_date(*f).ok_or_else(|| malformed(f.to_string())),
        Data::Int(i) => excel_serial_date(*i as f64).ok_or_else(|| malformed(i.to_string())),
        other => Err(malformed(other.to_string())),
    }
}

fn decode_roster(range: &Range<Data>) -> SchedulerResult<Roster> {
    let table = Table::new(PARTICIPANTS_SHEET, range);
    if table.is_headerless() {
        return Ok(Roster::new());
    }
    let name_col = table.column("participant")?;
    let active_col = table.column("is_active")?;

    let mut participants = Vec::new();
    for (index, row) in table.rows.iter().enumerate() {
        // Blank rows left behind by the editor
        let Some(name) = cell_text(cell(row, name_col)) else {
            continue;
        };
        let active = cell_bool(&table, index, cell(row, active_col))?;
        participants.push(Participant::new(name, active));
    }

    Roster::from_edits(participants)
}

fn decode_ledger(range: &Range<Data>) -> SchedulerResult<HistoryLedger> {
    let table = Table::new(SESSION_HISTORY_SHEET, range);
    if table.is_headerless() {
        return Ok(HistoryLedger::new());
    }
    let date_col = table.column("date")?;
    let first_col = table.column("participant_1")?;
    let second_col = table.column("participant_2")?;

    let mut records = Vec::new();
    for (index, row) in table.rows.iter().enumerate() {
        if row.iter().all(|c| matches!(c, Data::Empty)) {
            continue;
        }
        let date = cell_date(&table, index, cell(row, date_col))?;
        let participant_1 = cell_text(cell(row, first_col)).ok_or_else(|| {
            SchedulerError::malformed(format!(
                "sheet '{}' row {}: missing participant_1",
                table.sheet,
                table.row_number(index)
            ))
        })?;
        let participant_2 = cell_text(cell(row, second_col)).ok_or_else(|| {
            SchedulerError::malformed(format!(
                "sheet '{}' row {}: missing participant_2",
                table.sheet,
                table.row_number(index)
            ))
        })?;
        records.push(SessionRecord::new(date, participant_1, participant_2));
    }

    Ok(HistoryLedger::from_records(records))
}
