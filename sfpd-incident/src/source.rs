//! The five source tables and their typed rows.
//!
//! Each table is a CSV export of one spreadsheet keyed by `Incident ID`.
//! Columns are located by header name, so column order is free and extra
//! columns are ignored. A missing required column is a fatal
//! [`LoadError::MissingColumn`].
//!
//! | Table | File | Required columns |
//! |---|---|---|
//! | Incidents | `SF_Incidents.csv` | Incident ID, Police District, Analysis Neighborhood |
//! | Coordinates | `SF_Coordinates.csv` | Incident ID, Latitude, Longitude |
//! | Crimes | `SF_Crimes.csv` | Incident ID, Incident Category, Incident Description |
//! | Dates | `SF_Dates.csv` | Incident ID, Incident Year, Incident Day of Week, Incident Time |
//! | Resolution | `SF_Resolution.csv` | Incident ID, Resolution |

use crate::error::LoadError;
use crate::hour::hour_of_day;
use csv::{ReaderBuilder, StringRecord};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Spreadsheet column names.
pub mod columns {
    pub const INCIDENT_ID: &str = "Incident ID";
    pub const POLICE_DISTRICT: &str = "Police District";
    pub const ANALYSIS_NEIGHBORHOOD: &str = "Analysis Neighborhood";
    pub const LATITUDE: &str = "Latitude";
    pub const LONGITUDE: &str = "Longitude";
    pub const INCIDENT_CATEGORY: &str = "Incident Category";
    pub const INCIDENT_SUBCATEGORY: &str = "Incident Subcategory";
    pub const INCIDENT_DESCRIPTION: &str = "Incident Description";
    pub const INCIDENT_DATE: &str = "Incident Date";
    pub const INCIDENT_YEAR: &str = "Incident Year";
    pub const INCIDENT_DAY_OF_WEEK: &str = "Incident Day of Week";
    pub const INCIDENT_TIME: &str = "Incident Time";
    pub const RESOLUTION: &str = "Resolution";
}

use columns::*;

/// One of the five source tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SourceTable {
    Incidents,
    Coordinates,
    Crimes,
    Dates,
    Resolution,
}

impl SourceTable {
    /// All tables, in join order.
    pub const ALL: [SourceTable; 5] = [
        SourceTable::Incidents,
        SourceTable::Coordinates,
        SourceTable::Crimes,
        SourceTable::Dates,
        SourceTable::Resolution,
    ];

    /// Default file name of the table's CSV export.
    pub fn file_name(&self) -> &'static str {
        match self {
            SourceTable::Incidents => "SF_Incidents.csv",
            SourceTable::Coordinates => "SF_Coordinates.csv",
            SourceTable::Crimes => "SF_Crimes.csv",
            SourceTable::Dates => "SF_Dates.csv",
            SourceTable::Resolution => "SF_Resolution.csv",
        }
    }

    /// Name of the SQL table the rows are loaded into.
    pub fn table_name(&self) -> &'static str {
        match self {
            SourceTable::Incidents => "incidents",
            SourceTable::Coordinates => "coordinates",
            SourceTable::Crimes => "crimes",
            SourceTable::Dates => "dates",
            SourceTable::Resolution => "resolutions",
        }
    }

    pub fn required_columns(&self) -> &'static [&'static str] {
        match self {
            SourceTable::Incidents => &[INCIDENT_ID, POLICE_DISTRICT, ANALYSIS_NEIGHBORHOOD],
            SourceTable::Coordinates => &[INCIDENT_ID, LATITUDE, LONGITUDE],
            SourceTable::Crimes => &[INCIDENT_ID, INCIDENT_CATEGORY, INCIDENT_DESCRIPTION],
            SourceTable::Dates => &[
                INCIDENT_ID,
                INCIDENT_YEAR,
                INCIDENT_DAY_OF_WEEK,
                INCIDENT_TIME,
            ],
            SourceTable::Resolution => &[INCIDENT_ID, RESOLUTION],
        }
    }

    /// Columns read when present; absent ones read as empty text.
    pub fn optional_columns(&self) -> &'static [&'static str] {
        match self {
            SourceTable::Crimes => &[INCIDENT_SUBCATEGORY],
            SourceTable::Dates => &[INCIDENT_DATE],
            _ => &[],
        }
    }
}

impl fmt::Display for SourceTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Header-name to position lookup for one source table.
#[derive(Debug, Clone)]
pub struct ColumnIndex {
    table: SourceTable,
    positions: HashMap<&'static str, usize>,
}

impl ColumnIndex {
    /// Locate every required and optional column of `table` in `headers`.
    ///
    /// Header cells are trimmed and a UTF-8 byte order mark is stripped, since
    /// spreadsheet tools commonly write one.
    pub fn from_headers(table: SourceTable, headers: &StringRecord) -> Result<Self, LoadError> {
        let names: Vec<&str> = headers
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').trim())
            .collect();

        let mut positions = HashMap::new();
        for &column in table.required_columns() {
            match names.iter().position(|n| *n == column) {
                Some(pos) => {
                    positions.insert(column, pos);
                }
                None => {
                    return Err(LoadError::MissingColumn {
                        file: table.file_name(),
                        column,
                    })
                }
            }
        }
        for &column in table.optional_columns() {
            if let Some(pos) = names.iter().position(|n| *n == column) {
                positions.insert(column, pos);
            }
        }
        Ok(Self { table, positions })
    }

    pub fn table(&self) -> SourceTable {
        self.table
    }

    /// Trimmed cell text, or `""` for an absent optional column or short row.
    pub fn get<'r>(&self, record: &'r StringRecord, column: &str) -> &'r str {
        self.positions
            .get(column)
            .and_then(|&pos| record.get(pos))
            .map(str::trim)
            .unwrap_or("")
    }

    fn incident_id(&self, record: &StringRecord, line: u64) -> Result<String, LoadError> {
        let id = strip_float_suffix(self.get(record, INCIDENT_ID));
        if id.is_empty() {
            return Err(LoadError::EmptyIncidentId {
                file: self.table.file_name(),
                line,
            });
        }
        Ok(id.to_string())
    }
}

/// `"2020.0"` becomes `"2020"`. Spreadsheet exports write whole numbers as
/// floats in some files and not others; anything else is returned unchanged.
fn strip_float_suffix(value: &str) -> &str {
    match value.strip_suffix(".0") {
        Some(digits) if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => digits,
        _ => value,
    }
}

/// Identity and location of an incident (`SF_Incidents.csv`).
#[derive(Debug, Clone, PartialEq)]
pub struct IncidentRow {
    pub incident_id: String,
    pub police_district: String,
    pub analysis_neighborhood: String,
}

/// Geographic coordinates (`SF_Coordinates.csv`).
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateRow {
    pub incident_id: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Crime classification (`SF_Crimes.csv`).
#[derive(Debug, Clone, PartialEq)]
pub struct CrimeRow {
    pub incident_id: String,
    pub category: String,
    pub subcategory: String,
    pub description: String,
}

/// Date and time fields (`SF_Dates.csv`).
#[derive(Debug, Clone, PartialEq)]
pub struct DateRow {
    pub incident_id: String,
    pub date: String,
    pub year: i32,
    pub day_of_week: String,
    pub time: String,
    pub hour: u32,
}

/// Resolution outcome (`SF_Resolution.csv`).
#[derive(Debug, Clone, PartialEq)]
pub struct ResolutionRow {
    pub incident_id: String,
    pub resolution: String,
}

/// Read every data row of `table` from `csv_data`, converting each with `parse`.
///
/// `parse` receives the column index, the record and its 1-based line number.
fn read_rows<T>(
    table: SourceTable,
    csv_data: &str,
    parse: impl Fn(&ColumnIndex, &StringRecord, u64) -> Result<T, LoadError>,
) -> Result<Vec<T>, LoadError> {
    let file = table.file_name();
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_data.as_bytes());

    let headers = rdr
        .headers()
        .map_err(|source| LoadError::Csv { file, source })?
        .clone();
    let index = ColumnIndex::from_headers(table, &headers)?;

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(|source| LoadError::Csv { file, source })?;
        // Blank spreadsheet rows export as a line of empty cells.
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        rows.push(parse(&index, &record, line)?);
    }
    Ok(rows)
}

fn parse_coordinate(
    index: &ColumnIndex,
    record: &StringRecord,
    column: &'static str,
    line: u64,
) -> Result<Option<f64>, LoadError> {
    let value = index.get(record, column);
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(Some)
        .ok_or_else(|| LoadError::InvalidCoordinate {
            file: index.table().file_name(),
            line,
            column,
            value: value.to_string(),
        })
}

impl IncidentRow {
    pub fn parse_csv(csv_data: &str) -> Result<Vec<Self>, LoadError> {
        read_rows(SourceTable::Incidents, csv_data, |index, record, line| {
            Ok(IncidentRow {
                incident_id: index.incident_id(record, line)?,
                police_district: index.get(record, POLICE_DISTRICT).to_string(),
                analysis_neighborhood: index.get(record, ANALYSIS_NEIGHBORHOOD).to_string(),
            })
        })
    }
}

impl CoordinateRow {
    /// Empty latitude/longitude cells become `None`; anything else must be a number.
    pub fn parse_csv(csv_data: &str) -> Result<Vec<Self>, LoadError> {
        read_rows(SourceTable::Coordinates, csv_data, |index, record, line| {
            Ok(CoordinateRow {
                incident_id: index.incident_id(record, line)?,
                latitude: parse_coordinate(index, record, LATITUDE, line)?,
                longitude: parse_coordinate(index, record, LONGITUDE, line)?,
            })
        })
    }
}

impl CrimeRow {
    pub fn parse_csv(csv_data: &str) -> Result<Vec<Self>, LoadError> {
        read_rows(SourceTable::Crimes, csv_data, |index, record, line| {
            Ok(CrimeRow {
                incident_id: index.incident_id(record, line)?,
                category: index.get(record, INCIDENT_CATEGORY).to_string(),
                subcategory: index.get(record, INCIDENT_SUBCATEGORY).to_string(),
                description: index.get(record, INCIDENT_DESCRIPTION).to_string(),
            })
        })
    }
}

impl DateRow {
    /// The hour of day is derived here, once, from `Incident Time`.
    /// Whole-number years written as `2020.0` are accepted.
    pub fn parse_csv(csv_data: &str) -> Result<Vec<Self>, LoadError> {
        read_rows(SourceTable::Dates, csv_data, |index, record, line| {
            let file = index.table().file_name();

            let year_str = index.get(record, INCIDENT_YEAR);
            let year = strip_float_suffix(year_str)
                .parse::<i32>()
                .map_err(|_| LoadError::InvalidYear {
                    file,
                    line,
                    value: year_str.to_string(),
                })?;

            let time = index.get(record, INCIDENT_TIME);
            let hour = hour_of_day(time).ok_or_else(|| LoadError::InvalidTime {
                file,
                line,
                value: time.to_string(),
            })?;

            Ok(DateRow {
                incident_id: index.incident_id(record, line)?,
                date: index.get(record, INCIDENT_DATE).to_string(),
                year,
                day_of_week: index.get(record, INCIDENT_DAY_OF_WEEK).to_string(),
                time: time.to_string(),
                hour,
            })
        })
    }
}

impl ResolutionRow {
    pub fn parse_csv(csv_data: &str) -> Result<Vec<Self>, LoadError> {
        read_rows(SourceTable::Resolution, csv_data, |index, record, line| {
            Ok(ResolutionRow {
                incident_id: index.incident_id(record, line)?,
                resolution: index.get(record, RESOLUTION).to_string(),
            })
        })
    }
}
