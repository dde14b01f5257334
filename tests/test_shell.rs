// Interactive shell tests
// Author: Gabriel Demetrios Lafis

mod common;

use std::path::Path;

use bikeshare_explorer::{data::DatasetLoader, Shell};

fn run_session(data_dir: &Path, page_size: usize, input: &str) -> String {
    let mut out = Vec::new();
    let mut shell = Shell::new(DatasetLoader::new(data_dir), page_size, input.as_bytes(), &mut out);
    shell.run().unwrap();
    drop(shell);
    String::from_utf8(out).unwrap()
}

#[test]
fn test_reprompts_on_invalid_input() {
    let dir = common::data_dir();
    let text = run_session(dir.path(), 5, "boston\nChicago\njuly\nMarch\nfunday\nall\nyes\nno\n");

    assert!(text.starts_with("Hello! Let's explore some US bikeshare data!"));
    assert_eq!(text.matches("Invalid city.").count(), 1);
    assert_eq!(text.matches("Invalid month.").count(), 1);
    assert_eq!(text.matches("Invalid day.").count(), 1);

    // three march trips fit in one page
    assert!(text.contains("Row 3:"));
    assert!(!text.contains("Row 4:"));
    assert!(text.contains("No more rows to display."));
    assert!(text.contains("Most common month: 3"));
    assert!(text.contains("Would you like to restart?"));
}

#[test]
fn test_pages_through_raw_rows() {
    let dir = common::data_dir();
    let text = run_session(dir.path(), 2, "chicago\nall\nall\nyes\nyes\nyes\nno\n");

    assert_eq!(
        text.matches("Would you like to view 2 rows of raw data?").count(),
        3
    );
    assert!(text.contains("Row 5:"));
    assert!(!text.contains("Row 6:"));
    assert!(text.contains("No more rows to display."));
}

#[test]
fn test_restart_loop() {
    let dir = common::data_dir();
    let text = run_session(
        dir.path(),
        5,
        "washington\nall\nall\nno\nyes\nchicago\njune\nmonday\nno\nno\n",
    );

    assert_eq!(text.matches("Hello!").count(), 1);
    assert_eq!(text.matches("Would you like to restart?").count(), 2);
    // washington publishes no demographics, so neither block is printed
    assert!(!text.contains("Gender breakdown"));
    assert!(!text.contains("birth year"));
    assert!(text.contains("No data available for the selected filters."));
}

#[test]
fn test_end_of_input_ends_session() {
    let dir = common::data_dir();
    let text = run_session(dir.path(), 5, "chicago\n");

    assert!(text.contains("Enter the month"));
    assert!(!text.contains("Calculating"));
}

#[test]
fn test_load_failure_is_reported() {
    let dir = tempfile::TempDir::new().unwrap();
    let text = run_session(dir.path(), 5, "washington\nall\nall\nno\n");

    assert!(text.contains("Could not load data for washington"));
    assert!(!text.contains("Calculating"));
    assert!(text.contains("Would you like to restart?"));
}
