// Dataset loader for city trip files
// Author: Gabriel Demetrios Lafis

use std::path::{Path, PathBuf};

use chrono::{Datelike, Timelike};
use log::{debug, info};

use super::{
    City, CsvSource, DataError, DataSet, DataSource, DataType, Field, SchemaValidator, Value,
    DAY_OF_WEEK, HOUR, MONTH, START_TIME,
};

/// Loads a city's trips and materializes the calendar columns filters
/// and reports rely on.
#[derive(Debug, Clone)]
pub struct DatasetLoader {
    data_dir: PathBuf,
}

impl DatasetLoader {
    /// Create a loader reading city files from `data_dir`
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        DatasetLoader {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    /// Path of the file backing a city
    pub fn path_for(&self, city: City) -> PathBuf {
        self.data_dir.join(city.file_name())
    }

    /// Load every trip recorded for `city`
    pub fn load(&self, city: City) -> Result<DataSet, DataError> {
        let path = self.path_for(city);
        debug!("Loading {} trips from {}", city, path.display());

        let source = CsvSource::new(&path, ',');
        let mut dataset = load_from_source(&source)?;
        dataset.metadata.add("city".to_string(), city.name().to_string());

        info!("Loaded {} trips for {}", dataset.len(), city);
        Ok(dataset)
    }
}

/// Read a source, check it carries every trip column and append the
/// derived calendar columns
pub fn load_from_source(source: &dyn DataSource) -> Result<DataSet, DataError> {
    let mut dataset = source.read()?;
    SchemaValidator::validate_trip_columns(&dataset.schema)?;
    derive_calendar_fields(&mut dataset)?;
    Ok(dataset)
}

/// Append `month`, `day_of_week` and `hour` columns computed from the
/// start timestamp. Fails on the first row without a usable start time.
pub fn derive_calendar_fields(dataset: &mut DataSet) -> Result<(), DataError> {
    let start = dataset
        .schema
        .index_of(START_TIME)
        .ok_or_else(|| DataError::MissingColumn(START_TIME.to_string()))?;

    for (index, row) in dataset.data.iter_mut().enumerate() {
        let started = row.values[start].as_datetime().copied().ok_or_else(|| {
            DataError::ParseError(format!("row {}: missing start time", index + 1))
        })?;

        row.values.push(Value::Integer(i64::from(started.month())));
        row.values
            .push(Value::String(started.format("%A").to_string().to_lowercase()));
        row.values.push(Value::Integer(i64::from(started.hour())));
    }

    dataset.schema.fields.extend([
        Field::new(MONTH.to_string(), DataType::Integer, false),
        Field::new(DAY_OF_WEEK.to_string(), DataType::String, false),
        Field::new(HOUR.to_string(), DataType::Integer, false),
    ]);

    Ok(())
}
