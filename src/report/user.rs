// Rider demographics
// Author: Gabriel Demetrios Lafis

use serde::Serialize;

use crate::data::{DataSet, Value, BIRTH_YEAR, GENDER, USER_TYPE};
use crate::processing::{compute_max, compute_min, compute_mode, value_counts, ProcessingError};
use super::{Count, ReportOutcome};

/// Statistics of a column only some cities publish
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Demographic<T> {
    Data(T),
    /// The column exists but every trip in the view leaves it blank
    AllMissing,
    /// The city's file has no such column
    NotRecorded,
}

impl<T> Demographic<T> {
    pub fn data(&self) -> Option<&T> {
        match self {
            Demographic::Data(data) => Some(data),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BirthYearStats {
    pub earliest: i64,
    pub most_recent: i64,
    pub most_common: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserStats {
    pub user_types: Vec<Count>,
    pub gender: Demographic<Vec<Count>>,
    pub birth_years: Demographic<BirthYearStats>,
}

fn counts_of(view: &DataSet, column: &str) -> Result<Vec<Count>, ProcessingError> {
    Ok(value_counts(view.column(column)?.filter_map(Value::as_str))
        .into_iter()
        .map(|(value, count)| Count {
            value: value.to_string(),
            count,
        })
        .collect())
}

fn gender_stats(view: &DataSet) -> Result<Demographic<Vec<Count>>, ProcessingError> {
    if !view.schema.has_field(GENDER) {
        return Ok(Demographic::NotRecorded);
    }

    let counts = counts_of(view, GENDER)?;
    Ok(if counts.is_empty() {
        Demographic::AllMissing
    } else {
        Demographic::Data(counts)
    })
}

fn birth_year_stats(view: &DataSet) -> Result<Demographic<BirthYearStats>, ProcessingError> {
    if !view.schema.has_field(BIRTH_YEAR) {
        return Ok(Demographic::NotRecorded);
    }

    let years: Vec<i64> = view
        .column(BIRTH_YEAR)?
        .filter_map(Value::as_f64)
        .filter(|year| year.is_finite())
        .map(|year| year as i64)
        .collect();

    Ok(
        match (compute_min(&years), compute_max(&years), compute_mode(years.iter().copied())) {
            (Some(earliest), Some(most_recent), Some(most_common)) => {
                Demographic::Data(BirthYearStats {
                    earliest,
                    most_recent,
                    most_common,
                })
            }
            _ => Demographic::AllMissing,
        },
    )
}

/// User type breakdown, plus gender and birth year where the schema has them
pub fn user_stats(view: &DataSet) -> Result<ReportOutcome<UserStats>, ProcessingError> {
    if view.is_empty() {
        return Ok(ReportOutcome::NoData);
    }

    Ok(ReportOutcome::Data(UserStats {
        user_types: counts_of(view, USER_TYPE)?,
        gender: gender_stats(view)?,
        birth_years: birth_year_stats(view)?,
    }))
}
