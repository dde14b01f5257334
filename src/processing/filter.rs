// Filter operations for trip data
// Author: Gabriel Demetrios Lafis

use std::fmt;

use crate::data::{DataSet, Value, DAY_OF_WEEK, MONTH};
use super::{DataProcessor, Pipeline, ProcessingError};

/// Literal that disables a filter
pub const NO_CONSTRAINT: &str = "all";

/// Months covered by the published datasets
pub const MONTHS: [&str; 6] = ["january", "february", "march", "april", "may", "june"];

pub const DAYS: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Value a column is constrained to
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    All,
    Equals(Value),
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FilterValue::All => f.write_str(NO_CONSTRAINT),
            FilterValue::Equals(value) => write!(f, "{}", value),
        }
    }
}

fn is_no_constraint(name: &str) -> bool {
    name.trim().eq_ignore_ascii_case(NO_CONSTRAINT)
}

/// Translate a month name into its 1-based index.
///
/// Only January through June are accepted; anything else is an error
/// rather than an out-of-range index.
pub fn month_index(name: &str) -> Result<i64, ProcessingError> {
    let wanted = name.trim().to_lowercase();
    MONTHS
        .iter()
        .position(|month| *month == wanted)
        .map(|i| i as i64 + 1)
        .ok_or_else(|| {
            ProcessingError::InvalidArgument(format!(
                "unsupported month '{}', expected one of {} or '{}'",
                name.trim(),
                MONTHS.join(", "),
                NO_CONSTRAINT
            ))
        })
}

/// Parse user input for the month filter
pub fn parse_month(name: &str) -> Result<FilterValue, ProcessingError> {
    if is_no_constraint(name) {
        return Ok(FilterValue::All);
    }

    month_index(name).map(|index| FilterValue::Equals(Value::Integer(index)))
}

/// Parse user input for the day-of-week filter
pub fn parse_day(name: &str) -> Result<FilterValue, ProcessingError> {
    if is_no_constraint(name) {
        return Ok(FilterValue::All);
    }

    let wanted = name.trim().to_lowercase();
    if DAYS.contains(&wanted.as_str()) {
        Ok(FilterValue::Equals(Value::String(wanted)))
    } else {
        Err(ProcessingError::InvalidArgument(format!(
            "unsupported day '{}', expected a weekday name or '{}'",
            name.trim(),
            NO_CONSTRAINT
        )))
    }
}

/// Keep rows where a column equals a value
pub struct FilterProcessor {
    name: String,
    column: String,
    value: FilterValue,
}

impl FilterProcessor {
    /// Create a new filter processor on `column`
    pub fn new(column: &str, value: FilterValue) -> Self {
        FilterProcessor {
            name: format!("equals_{}", column),
            column: column.to_string(),
            value,
        }
    }

    /// Filter on the derived month column
    pub fn month(value: FilterValue) -> Self {
        Self::new(MONTH, value)
    }

    /// Filter on the derived day-of-week column
    pub fn day(value: FilterValue) -> Self {
        Self::new(DAY_OF_WEEK, value)
    }
}

impl DataProcessor for FilterProcessor {
    fn process(&self, input: &DataSet) -> Result<DataSet, ProcessingError> {
        let wanted = match &self.value {
            FilterValue::All => return Ok(input.clone()),
            FilterValue::Equals(value) => value,
        };

        let index = input.schema.index_of(&self.column).ok_or_else(|| {
            ProcessingError::InvalidArgument(format!("Column '{}' not found", self.column))
        })?;

        let mut result = input.empty_like();
        result.data = input
            .data
            .iter()
            .filter(|row| &row.values[index] == wanted)
            .cloned()
            .collect();

        Ok(result)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Keep the rows of `table` whose `column` equals `value`; `All` keeps
/// every row. The input is never modified and row order is preserved.
pub fn apply(
    table: &DataSet,
    column: &str,
    value: &FilterValue,
) -> Result<DataSet, ProcessingError> {
    FilterProcessor::new(column, value.clone()).process(table)
}

/// Month and day-of-week constraints chosen by the user
#[derive(Debug, Clone, PartialEq)]
pub struct TripFilter {
    pub month: FilterValue,
    pub day: FilterValue,
}

impl TripFilter {
    /// Filter that keeps every trip
    pub fn all() -> Self {
        TripFilter {
            month: FilterValue::All,
            day: FilterValue::All,
        }
    }

    /// Build a filter from month and day names, each possibly `all`
    pub fn parse(month: &str, day: &str) -> Result<Self, ProcessingError> {
        Ok(TripFilter {
            month: parse_month(month)?,
            day: parse_day(day)?,
        })
    }

    /// Month stage followed by the day stage
    pub fn pipeline(&self) -> Pipeline {
        Pipeline::new("trip_filter")
            .add(FilterProcessor::month(self.month.clone()))
            .add(FilterProcessor::day(self.day.clone()))
    }

    pub fn apply(&self, table: &DataSet) -> Result<DataSet, ProcessingError> {
        self.pipeline().execute(table)
    }
}

impl Default for TripFilter {
    fn default() -> Self {
        Self::all()
    }
}

impl fmt::Display for TripFilter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "month={}, day={}", self.month, self.day)
    }
}
