// Interactive prompt loop
// Author: Gabriel Demetrios Lafis

use std::io::{BufRead, Write};

use log::{error, info};

use crate::data::{City, DataSet, DatasetLoader};
use crate::processing::{parse_day, parse_month, FilterValue, TripFilter};
use crate::report::{print_reports, separator, write_rows};
use crate::utils::AppResult;

/// Drives the explore loop: ask for filters, load, page raw rows, report,
/// and offer to start over. Input is read line by line; end of input ends
/// the session wherever it happens.
pub struct Shell<R, W> {
    loader: DatasetLoader,
    page_size: usize,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(loader: DatasetLoader, page_size: usize, input: R, output: W) -> Self {
        Shell {
            loader,
            page_size: page_size.max(1),
            input,
            output,
        }
    }

    /// Run until the user declines to restart or input is exhausted
    pub fn run(&mut self) -> AppResult<()> {
        writeln!(self.output, "Hello! Let's explore some US bikeshare data!")?;

        loop {
            let (city, filter) = match self.get_filters()? {
                Some(choice) => choice,
                None => return Ok(()),
            };
            info!("Exploring {} with {}", city, filter);

            match self.load(city, &filter) {
                Ok(view) => {
                    if !self.display_raw_data(&view)? {
                        return Ok(());
                    }
                    print_reports(&mut self.output, &view)?;
                }
                Err(err) => {
                    error!("Loading {} failed: {}", city, err);
                    writeln!(self.output, "Could not load data for {}: {}", city, err)?;
                }
            }

            match self.ask("\nWould you like to restart? Enter yes or no.\n")? {
                Some(answer) if answer == "yes" => continue,
                _ => return Ok(()),
            }
        }
    }

    fn load(&self, city: City, filter: &TripFilter) -> AppResult<DataSet> {
        let table = self.loader.load(city)?;
        Ok(filter.apply(&table)?)
    }

    /// Prompt and return the trimmed, lower-cased answer; `None` at end of input
    fn ask(&mut self, prompt: &str) -> AppResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim().to_lowercase()))
    }

    /// Re-prompt until `parse` accepts the answer
    fn ask_until<T, F>(&mut self, prompt: &str, invalid: &str, parse: F) -> AppResult<Option<T>>
    where
        F: Fn(&str) -> Option<T>,
    {
        loop {
            let answer = match self.ask(prompt)? {
                Some(answer) => answer,
                None => return Ok(None),
            };

            match parse(&answer) {
                Some(value) => return Ok(Some(value)),
                None => writeln!(self.output, "{}", invalid)?,
            }
        }
    }

    /// Ask for city, month and day
    pub fn get_filters(&mut self) -> AppResult<Option<(City, TripFilter)>> {
        let city = self.ask_until(
            "Enter the city name (chicago, new york city, washington): ",
            "Invalid city. Please choose from chicago, new york city, or washington.",
            |answer| answer.parse::<City>().ok(),
        )?;
        let city = match city {
            Some(city) => city,
            None => return Ok(None),
        };

        let month = self.ask_until(
            "Enter the month (january, february, ... , june) or 'all': ",
            "Invalid month. Please choose a month from january to june, or 'all'.",
            |answer| parse_month(answer).ok(),
        )?;
        let month: FilterValue = match month {
            Some(month) => month,
            None => return Ok(None),
        };

        let day = self.ask_until(
            "Enter the day of the week (monday, tuesday, ...) or 'all': ",
            "Invalid day. Please choose a day of the week or 'all'.",
            |answer| parse_day(answer).ok(),
        )?;
        let day = match day {
            Some(day) => day,
            None => return Ok(None),
        };

        writeln!(self.output, "{}", separator())?;
        Ok(Some((city, TripFilter { month, day })))
    }

    /// Page through the view on request. Returns `false` at end of input.
    pub fn display_raw_data(&mut self, view: &DataSet) -> AppResult<bool> {
        writeln!(self.output, "\nRaw data is available to review.")?;
        let prompt = format!(
            "\nWould you like to view {} rows of raw data? Enter yes or no: ",
            self.page_size
        );
        let mut next = 0;

        loop {
            match self.ask(&prompt)? {
                None => return Ok(false),
                Some(answer) if answer != "yes" => return Ok(true),
                Some(_) => {}
            }

            next = write_rows(&mut self.output, view, next, self.page_size)?;

            if next >= view.len() {
                writeln!(self.output, "\nNo more rows to display.")?;
                return Ok(true);
            }
        }
    }
}
