// Console rendering of reports and raw rows
// Author: Gabriel Demetrios Lafis

use std::io::{self, Write};
use std::time::Instant;

use crate::data::DataSet;
use crate::utils::AppResult;
use super::{
    duration_stats, station_stats, time_stats, user_stats, Count, Demographic, DurationStats,
    ReportOutcome, StationStats, TimeStats, UserStats,
};

const SEPARATOR_WIDTH: usize = 40;
const NO_DATA: &str = "No data available for the selected filters.";
const NO_STATION: &str = "no data";

pub fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

/// "wednesday" -> "Wednesday"
pub fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn write_footer<W: Write>(out: &mut W, started: Instant) -> io::Result<()> {
    writeln!(out, "\nThis took {} seconds.", started.elapsed().as_secs_f64())?;
    writeln!(out, "{}", separator())
}

fn write_counts<W: Write>(out: &mut W, counts: &[Count]) -> io::Result<()> {
    for entry in counts {
        writeln!(out, "  {}: {}", entry.value, entry.count)?;
    }
    Ok(())
}

pub fn write_time_stats<W: Write>(
    out: &mut W,
    outcome: &ReportOutcome<TimeStats>,
) -> io::Result<()> {
    match outcome {
        ReportOutcome::Data(stats) => {
            writeln!(out, "Most common month: {}", stats.most_common_month)?;
            writeln!(out, "Most common day of week: {}", title_case(&stats.most_common_day))?;
            writeln!(out, "Most common start hour: {}", stats.most_common_hour)
        }
        ReportOutcome::NoData => writeln!(out, "{}", NO_DATA),
    }
}

pub fn write_station_stats<W: Write>(
    out: &mut W,
    outcome: &ReportOutcome<StationStats>,
) -> io::Result<()> {
    match outcome {
        ReportOutcome::Data(stats) => {
            let start = stats.most_common_start_station.as_deref();
            let end = stats.most_common_end_station.as_deref();
            let trip = stats.most_common_trip.as_deref();
            writeln!(out, "Most common start station: {}", start.unwrap_or(NO_STATION))?;
            writeln!(out, "Most common end station: {}", end.unwrap_or(NO_STATION))?;
            writeln!(out, "Most common trip: {}", trip.unwrap_or(NO_STATION))
        }
        ReportOutcome::NoData => writeln!(out, "{}", NO_DATA),
    }
}

pub fn write_duration_stats<W: Write>(
    out: &mut W,
    outcome: &ReportOutcome<DurationStats>,
) -> io::Result<()> {
    match outcome {
        ReportOutcome::Data(stats) => {
            writeln!(out, "Total travel time: {} seconds", stats.total_seconds)?;
            writeln!(out, "Mean travel time: {} seconds", stats.mean_seconds)
        }
        ReportOutcome::NoData => writeln!(out, "{}", NO_DATA),
    }
}

/// Gender and birth year blocks are left out for cities that do not record
/// them; a note is printed only when the column exists but is blank.
pub fn write_user_stats<W: Write>(
    out: &mut W,
    outcome: &ReportOutcome<UserStats>,
) -> io::Result<()> {
    let stats = match outcome {
        ReportOutcome::Data(stats) => stats,
        ReportOutcome::NoData => return writeln!(out, "{}", NO_DATA),
    };

    writeln!(out, "User types:")?;
    write_counts(out, &stats.user_types)?;

    match &stats.gender {
        Demographic::Data(counts) => {
            writeln!(out, "\nGender breakdown:")?;
            write_counts(out, counts)?;
        }
        Demographic::AllMissing => writeln!(out, "\nNo gender data for the selected trips.")?,
        Demographic::NotRecorded => {}
    }

    match &stats.birth_years {
        Demographic::Data(years) => {
            writeln!(out, "\nEarliest birth year: {}", years.earliest)?;
            writeln!(out, "Most recent birth year: {}", years.most_recent)?;
            writeln!(out, "Most common birth year: {}", years.most_common)?;
        }
        Demographic::AllMissing => {
            writeln!(out, "\nNo birth year data for the selected trips.")?
        }
        Demographic::NotRecorded => {}
    }

    Ok(())
}

/// Compute and print the four reports for a view, each with its timing
pub fn print_reports<W: Write>(out: &mut W, view: &DataSet) -> AppResult<()> {
    writeln!(out, "\nCalculating The Most Frequent Times of Travel...\n")?;
    let started = Instant::now();
    write_time_stats(out, &time_stats(view)?)?;
    write_footer(out, started)?;

    writeln!(out, "\nCalculating The Most Popular Stations and Trip...\n")?;
    let started = Instant::now();
    write_station_stats(out, &station_stats(view)?)?;
    write_footer(out, started)?;

    writeln!(out, "\nCalculating Trip Duration...\n")?;
    let started = Instant::now();
    write_duration_stats(out, &duration_stats(view)?)?;
    write_footer(out, started)?;

    writeln!(out, "\nCalculating User Stats...\n")?;
    let started = Instant::now();
    write_user_stats(out, &user_stats(view)?)?;
    write_footer(out, started)?;

    Ok(())
}

/// Print up to `count` rows starting at `start`, one `header: value`
/// line per cell. Returns the index of the next unprinted row.
pub fn write_rows<W: Write>(
    out: &mut W,
    dataset: &DataSet,
    start: usize,
    count: usize,
) -> io::Result<usize> {
    let end = dataset.len().min(start.saturating_add(count));

    for index in start..end {
        writeln!(out, "\nRow {}:", index + 1)?;
        for (field, value) in dataset.schema.fields.iter().zip(&dataset.data[index].values) {
            writeln!(out, "  {}: {}", field.name, value)?;
        }
    }

    Ok(end.max(start))
}
