// Reports computed over a filtered trip view
// Author: Gabriel Demetrios Lafis

mod duration;
mod render;
mod station;
mod time;
mod user;

pub use duration::*;
pub use render::*;
pub use station::*;
pub use time::*;
pub use user::*;

use serde::Serialize;

use crate::data::DataSet;
use crate::processing::{ProcessingError, TripFilter};

/// Result of a reporter: either statistics or an explicit marker that the
/// view held nothing to summarize.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ReportOutcome<T> {
    Data(T),
    NoData,
}

impl<T> ReportOutcome<T> {
    pub fn is_no_data(&self) -> bool {
        matches!(self, ReportOutcome::NoData)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            ReportOutcome::Data(data) => Some(data),
            ReportOutcome::NoData => None,
        }
    }
}

impl<T> From<Option<T>> for ReportOutcome<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(ReportOutcome::NoData, ReportOutcome::Data)
    }
}

/// A frequency entry in a breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Count {
    pub value: String,
    pub count: usize,
}

/// All four reports for one view, as emitted by `report --format json`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripReport {
    pub city: String,
    pub month: String,
    pub day: String,
    pub trips: usize,
    pub time: ReportOutcome<TimeStats>,
    pub stations: ReportOutcome<StationStats>,
    pub duration: ReportOutcome<DurationStats>,
    pub users: ReportOutcome<UserStats>,
}

impl TripReport {
    pub fn build(city: &str, filter: &TripFilter, view: &DataSet) -> Result<Self, ProcessingError> {
        Ok(TripReport {
            city: city.to_string(),
            month: filter.month.to_string(),
            day: filter.day.to_string(),
            trips: view.len(),
            time: time_stats(view)?,
            stations: station_stats(view)?,
            duration: duration_stats(view)?,
            users: user_stats(view)?,
        })
    }
}
