pub mod clean;

use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use csv::StringRecord;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Malformed row at line {line}: {message}")]
    MalformedRow { line: u64, message: String },
}

/// One tour stop: a single concert date in one city.
///
/// `surp_1`/`surp_2` hold the raw surprise-song cells exactly as they appear
/// in the file. Cleaning (punctuation stripping, `" / "` splitting) happens
/// only during aggregation, never here.
#[derive(Debug, Clone, Serialize)]
pub struct Row {
    pub city: String,
    pub date: NaiveDate,
    pub tick_sales: f64,
    pub surp_1: Option<String>,
    pub surp_2: Option<String>,
    /// Longitude
    pub x: f64,
    /// Latitude
    pub y: f64,
}

/// Column indices resolved from the header row.
struct Columns {
    city: usize,
    date: usize,
    tick_sales: usize,
    surp_1: usize,
    surp_2: usize,
    x: usize,
    y: usize,
}

impl Columns {
    fn resolve(headers: &StringRecord) -> Result<Self, LoadError> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| LoadError::MalformedRow {
                    line: 1,
                    message: format!("missing required column `{name}`"),
                })
        };
        Ok(Self {
            city: find("city")?,
            date: find("date")?,
            tick_sales: find("tick_sales")?,
            surp_1: find("surp_1")?,
            surp_2: find("surp_2")?,
            x: find("x")?,
            y: find("y")?,
        })
    }
}

/// Load and validate the tour dataset from a `;`-separated file.
///
/// Validation is all-or-nothing: any malformed row fails the whole load so
/// aggregate totals can never be silently skewed by dropped rows.
pub fn load_rows(path: &Path) -> Result<Vec<Row>, LoadError> {
    let file = std::fs::File::open(path)?;
    read_rows(file)
}

/// Parse rows from any reader. The first record must be a header row naming
/// at least `city`, `date`, `tick_sales`, `surp_1`, `surp_2`, `x`, `y`.
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<Row>, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(crate::FIELD_SEPARATOR)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let cols = Columns::resolve(rdr.headers()?)?;

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        rows.push(parse_row(&record, line, &cols)?);
    }

    if rows.is_empty() {
        log::warn!("Dataset contains a header but no data rows");
    } else {
        log::debug!("Parsed {} rows", rows.len());
    }
    Ok(rows)
}

fn parse_row(record: &StringRecord, line: u64, cols: &Columns) -> Result<Row, LoadError> {
    let malformed = |message: String| LoadError::MalformedRow { line, message };

    let field = |idx: usize, name: &str| {
        record
            .get(idx)
            .ok_or_else(|| malformed(format!("missing field `{name}`")))
    };

    let numeric = |idx: usize, name: &str| -> Result<f64, LoadError> {
        let raw = field(idx, name)?;
        raw.parse::<f64>()
            .map_err(|_| malformed(format!("field `{name}` is not numeric: {raw:?}")))
    };

    // `surp_*` absence is not an error; an empty cell means no surprise song.
    let optional = |idx: usize| {
        record
            .get(idx)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    let city = field(cols.city, "city")?.to_string();
    if city.is_empty() {
        return Err(malformed("field `city` is empty".to_string()));
    }

    let raw_date = field(cols.date, "date")?;
    let date = NaiveDate::parse_from_str(raw_date, "%Y-%m-%d")
        .map_err(|_| malformed(format!("field `date` is not a YYYY-MM-DD date: {raw_date:?}")))?;

    let tick_sales = numeric(cols.tick_sales, "tick_sales")?;
    let x = numeric(cols.x, "x")?;
    let y = numeric(cols.y, "y")?;

    if !(-180.0..=180.0).contains(&x) {
        return Err(malformed(format!("longitude out of range: {x}")));
    }
    if !(-90.0..=90.0).contains(&y) {
        return Err(malformed(format!("latitude out of range: {y}")));
    }

    Ok(Row {
        city,
        date,
        tick_sales,
        surp_1: optional(cols.surp_1),
        surp_2: optional(cols.surp_2),
        x,
        y,
    })
}
