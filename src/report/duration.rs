// Total and average trip duration
// Author: Gabriel Demetrios Lafis

use serde::Serialize;

use crate::data::{DataSet, Value, TRIP_DURATION};
use crate::processing::{compute_mean, compute_sum, ProcessingError};
use super::ReportOutcome;

/// Durations in seconds, unrounded
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DurationStats {
    pub trips: usize,
    pub total_seconds: f64,
    pub mean_seconds: f64,
}

pub fn duration_stats(view: &DataSet) -> Result<ReportOutcome<DurationStats>, ProcessingError> {
    let durations: Vec<f64> = view.column(TRIP_DURATION)?.filter_map(Value::as_f64).collect();

    Ok(compute_mean(&durations)
        .map(|mean| DurationStats {
            trips: durations.len(),
            total_seconds: compute_sum(&durations),
            mean_seconds: mean,
        })
        .into())
}
