// Most popular stations and trip
// Author: Gabriel Demetrios Lafis

use serde::Serialize;

use crate::data::{DataSet, Value, END_STATION, START_STATION};
use crate::processing::{compute_mode, ProcessingError};
use super::ReportOutcome;

/// Joins start and end station into a trip label
pub const TRIP_SEPARATOR: &str = " to ";

/// Each value is `None` when no trip in the view names that station
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationStats {
    pub most_common_start_station: Option<String>,
    pub most_common_end_station: Option<String>,
    pub most_common_trip: Option<String>,
}

pub fn trip_label(start: &str, end: &str) -> String {
    format!("{}{}{}", start, TRIP_SEPARATOR, end)
}

/// Most common start station, end station and start/end combination
pub fn station_stats(view: &DataSet) -> Result<ReportOutcome<StationStats>, ProcessingError> {
    if view.is_empty() {
        return Ok(ReportOutcome::NoData);
    }

    let starts: Vec<Option<&str>> = view.column(START_STATION)?.map(Value::as_str).collect();
    let ends: Vec<Option<&str>> = view.column(END_STATION)?.map(Value::as_str).collect();

    let trip = compute_mode(
        starts
            .iter()
            .zip(&ends)
            .filter_map(|pair| match pair {
                (Some(start), Some(end)) => Some(trip_label(start, end)),
                _ => None,
            }),
    );

    Ok(ReportOutcome::Data(StationStats {
        most_common_start_station: compute_mode(starts.iter().flatten().copied())
            .map(str::to_string),
        most_common_end_station: compute_mode(ends.iter().flatten().copied()).map(str::to_string),
        most_common_trip: trip,
    }))
}
