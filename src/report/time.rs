// Most frequent times of travel
// Author: Gabriel Demetrios Lafis

use serde::Serialize;

use crate::data::{DataSet, Value, DAY_OF_WEEK, HOUR, MONTH};
use crate::processing::{compute_mode, ProcessingError};
use super::ReportOutcome;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeStats {
    pub most_common_month: i64,
    pub most_common_day: String,
    pub most_common_hour: i64,
}

/// Most common month, day of week and start hour of the view
pub fn time_stats(view: &DataSet) -> Result<ReportOutcome<TimeStats>, ProcessingError> {
    let month = compute_mode(view.column(MONTH)?.filter_map(Value::as_i64));
    let day = compute_mode(view.column(DAY_OF_WEEK)?.filter_map(Value::as_str));
    let hour = compute_mode(view.column(HOUR)?.filter_map(Value::as_i64));

    Ok(match (month, day, hour) {
        (Some(month), Some(day), Some(hour)) => ReportOutcome::Data(TimeStats {
            most_common_month: month,
            most_common_day: day.to_string(),
            most_common_hour: hour,
        }),
        _ => ReportOutcome::NoData,
    })
}
