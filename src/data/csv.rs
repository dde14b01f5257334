// CSV data source implementation
// Author: Gabriel Demetrios Lafis

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use chrono::NaiveDateTime;

use super::{source_type_of, DataError, DataSet, DataSource, DataType, Row, SchemaBuilder, Value};

/// Timestamp layouts seen across the city exports
const TIMESTAMP_FORMATS: [&str; 5] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Parse a trip timestamp
pub fn parse_timestamp(text: &str) -> Result<NaiveDateTime, DataError> {
    let text = text.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .ok_or_else(|| DataError::ParseError(format!("invalid timestamp '{}'", text)))
}

/// Cell spellings that mean "no value"
const NA_VALUES: [&str; 6] = ["NaN", "nan", "NA", "N/A", "NULL", "null"];

/// Whether a raw cell stands for a missing value
pub fn is_missing(field: &str) -> bool {
    let field = field.trim();
    field.is_empty() || NA_VALUES.contains(&field)
}

/// Convert a raw CSV cell into a typed value
pub fn parse_cell(field: &str, data_type: DataType) -> Result<Value, String> {
    if is_missing(field) {
        return Ok(Value::Null);
    }

    match data_type {
        DataType::DateTime => parse_timestamp(field)
            .map(Value::DateTime)
            .map_err(|_| format!("invalid timestamp '{}'", field.trim())),
        DataType::Float => field
            .trim()
            .parse::<f64>()
            .map(Value::Float)
            .map_err(|_| format!("invalid number '{}'", field)),
        DataType::Integer => field
            .trim()
            .parse::<i64>()
            .map(Value::Integer)
            .map_err(|_| format!("invalid integer '{}'", field)),
        DataType::String => Ok(Value::String(field.to_string())),
    }
}

/// CSV data source for trip exports
pub struct CsvSource {
    path: String,
    delimiter: char,
}

impl CsvSource {
    /// Create a new CSV data source
    pub fn new<P: AsRef<Path>>(path: P, delimiter: char) -> Self {
        CsvSource {
            path: path.as_ref().to_string_lossy().to_string(),
            delimiter,
        }
    }
}

impl DataSource for CsvSource {
    fn read(&self) -> Result<DataSet, DataError> {
        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);

        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter as u8)
            .has_headers(true)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader
            .headers()?
            .iter()
            .map(|s| s.to_string())
            .collect();

        let schema = headers
            .iter()
            .fold(SchemaBuilder::new(), |builder, name| {
                builder.add_field(name, source_type_of(name), true)
            })
            .build();
        let types: Vec<DataType> = schema.fields.iter().map(|f| f.data_type).collect();
        let mut dataset = DataSet::new(schema);

        for (index, result) in csv_reader.records().enumerate() {
            let record = result?;
            // header is line 1
            let line = index + 2;

            let values = record
                .iter()
                .zip(&types)
                .map(|(field, data_type)| parse_cell(field, *data_type))
                .collect::<Result<Vec<Value>, String>>()
                .map_err(|err| {
                    DataError::ParseError(format!("{} line {}: {}", self.path, line, err))
                })?;

            dataset.add_row(Row::new(values))?;
        }

        dataset.metadata.add("source".to_string(), "csv".to_string());
        dataset.metadata.add("path".to_string(), self.path.clone());

        Ok(dataset)
    }

    fn name(&self) -> &str {
        &self.path
    }
}
