use crate::error::LoadError;
use crate::models::SalesRecordData;
use crate::services::record_store::RecordStore;
use calamine::{open_workbook_auto, Data, Range, Reader};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Number of columns read from each row.
pub const COLUMN_COUNT: u32 = 8;

// Largest serial Excel accepts, 9999-12-31.
const MAX_EXCEL_SERIAL: f64 = 2_958_465.0;

static EMPTY_CELL: Data = Data::Empty;

/// Reads sales records from the first worksheet of a spreadsheet.
///
/// Row 1 is the header. Columns 1 to 8 hold, in order: order date, region,
/// city, category, product, quantity, unit price and total price.
#[derive(Debug, Clone)]
pub struct SpreadsheetLoader {
    path: PathBuf,
}

impl SpreadsheetLoader {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        SpreadsheetLoader { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends every data row to `store` and returns how many were added.
    ///
    /// Stops at the first row that fails to convert; rows before it stay in
    /// the store and keep their ids.
    pub fn load_into(&self, store: &mut RecordStore) -> Result<usize, LoadError> {
        let mut workbook = open_workbook_auto(&self.path).map_err(|source| LoadError::Open {
            path: self.path.clone(),
            source,
        })?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| LoadError::MissingWorksheet {
                path: self.path.clone(),
            })?
            .map_err(LoadError::Worksheet)?;

        log::debug!(
            "Reading worksheet of {} with dimensions {:?}",
            self.path.display(),
            range.get_size()
        );

        load_range(&range, store)
    }
}

/// Appends the data rows of an already opened worksheet to `store`.
pub fn load_range(range: &Range<Data>, store: &mut RecordStore) -> Result<usize, LoadError> {
    let (start, end) = match (range.start(), range.end()) {
        (Some(start), Some(end)) => (start, end),
        _ => return Ok(0),
    };

    let mut loaded = 0;
    for row in start.0..=end.0 {
        // Sheet row 1 is the header
        if row == 0 || is_blank_row(range, row, start.1, end.1) {
            continue;
        }

        let data = read_row(range, row)?;
        store.create(data)?;
        loaded += 1;
    }

    Ok(loaded)
}

fn is_blank_row(range: &Range<Data>, row: u32, first_col: u32, last_col: u32) -> bool {
    (first_col..=last_col).all(|col| matches!(range.get_value((row, col)), None | Some(Data::Empty)))
}

fn read_row(range: &Range<Data>, row: u32) -> Result<SalesRecordData, LoadError> {
    let cell = |col: u32| Cell::at(range, row, col);

    Ok(SalesRecordData {
        order_date: cell(0).datetime()?,
        region: cell(1).text()?,
        city: cell(2).text()?,
        category: cell(3).text()?,
        product: cell(4).text()?,
        quantity: cell(5).integer()?,
        unit_price: cell(6).decimal()?,
        total_price: cell(7).decimal()?,
    })
}

/// A cell together with its zero-based position, for error reporting.
struct Cell<'a> {
    row: u32,
    col: u32,
    value: &'a Data,
}

impl<'a> Cell<'a> {
    fn at(range: &'a Range<Data>, row: u32, col: u32) -> Self {
        Cell {
            row,
            col,
            value: range.get_value((row, col)).unwrap_or(&EMPTY_CELL),
        }
    }

    fn error(&self, expected: &'static str) -> LoadError {
        LoadError::Cell {
            row: self.row + 1,
            column: self.col + 1,
            expected,
            found: format!("{:?}", self.value),
        }
    }

    fn datetime(&self) -> Result<NaiveDateTime, LoadError> {
        let parsed = match self.value {
            Data::DateTime(dt) => dt.as_datetime(),
            Data::Float(serial) => from_excel_serial(*serial),
            Data::Int(serial) => from_excel_serial(*serial as f64),
            Data::DateTimeIso(s) | Data::String(s) => parse_datetime(s.trim()),
            _ => None,
        };

        parsed.ok_or_else(|| self.error("date"))
    }

    fn text(&self) -> Result<String, LoadError> {
        match self.value {
            Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => Ok(s.clone()),
            Data::Int(i) => Ok(i.to_string()),
            Data::Float(f) => Ok(f.to_string()),
            Data::Bool(b) => Ok(b.to_string()),
            Data::Empty => Ok(String::new()),
            Data::DateTime(dt) => dt
                .as_datetime()
                .map(|dt| dt.to_string())
                .ok_or_else(|| self.error("text")),
            Data::Error(_) => Err(self.error("text")),
        }
    }

    fn integer(&self) -> Result<i64, LoadError> {
        match self.value {
            Data::Int(i) => Ok(*i),
            // `as` would saturate anything outside the i64 range
            Data::Float(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Ok(*f as i64),
            Data::String(s) => s.trim().parse().map_err(|_| self.error("integer")),
            _ => Err(self.error("integer")),
        }
    }

    fn decimal(&self) -> Result<Decimal, LoadError> {
        let parsed = match self.value {
            Data::Int(i) => Some(Decimal::from(*i)),
            Data::Float(f) => Decimal::from_f64(*f),
            Data::String(s) => Decimal::from_str(s.trim()).ok(),
            _ => None,
        };

        parsed.ok_or_else(|| self.error("decimal"))
    }
}

/// Converts a serial date of the 1900 date system.
fn from_excel_serial(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() || !(0.0..=MAX_EXCEL_SERIAL).contains(&serial) {
        return None;
    }

    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;
    let seconds = (serial * 86_400.0).round() as i64;
    epoch.checked_add_signed(Duration::seconds(seconds))
}

fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(dt);
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}
