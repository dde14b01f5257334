// Bikeshare Explorer
// Author: Gabriel Demetrios Lafis

//! # Bikeshare Explorer
//!
//! Loads US bike-share trip exports (Chicago, New York City, Washington),
//! narrows them by month and day of week, and summarizes the result.
//!
//! ## Features
//!
//! - CSV loading with typed columns and derived `month`, `day_of_week`
//!   and `hour` fields
//! - Month and day-of-week filtering
//! - Time-of-travel, station, trip duration and rider statistics
//! - Interactive console shell with raw row paging
//!
//! ## Example
//!
//! ```no_run
//! use bikeshare_explorer::{
//!     data::{City, DatasetLoader},
//!     processing::TripFilter,
//!     report::time_stats,
//! };
//!
//! let loader = DatasetLoader::new("./data");
//! let trips = loader.load(City::Chicago).unwrap();
//!
//! let filter = TripFilter::parse("march", "all").unwrap();
//! let view = filter.apply(&trips).unwrap();
//!
//! println!("{:?}", time_stats(&view).unwrap());
//! ```

pub mod data;
pub mod processing;
pub mod report;
pub mod shell;
pub mod utils;

// Re-export main types
pub use data::{City, DataSet, DatasetLoader, Row, Schema, Value};
pub use processing::{FilterValue, TripFilter};
pub use report::{ReportOutcome, TripReport};
pub use shell::Shell;
pub use utils::{AppError, AppResult, Config};
