// Bikeshare Explorer - Main executable
// Author: Gabriel Demetrios Lafis

use std::io::{self, Write};

use anyhow::Context;
use clap::{App, Arg, ArgMatches};
use log::{debug, info};

use bikeshare_explorer::{
    data::{City, DatasetLoader},
    processing::TripFilter,
    report::{print_reports, separator, TripReport},
    utils::{init_logging, Config},
    Shell,
};

fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let matches = App::new("Bikeshare Explorer")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Gabriel Demetrios Lafis")
        .about("Explore US bike-share trip data")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Sets a custom config file (json or yaml)")
                .takes_value(true),
        )
        .arg(
            Arg::new("data-dir")
                .short('d')
                .long("data-dir")
                .value_name("DIR")
                .help("Directory holding the city CSV files")
                .takes_value(true),
        )
        .subcommand(App::new("explore").about("Run the interactive explorer (default)"))
        .subcommand(
            App::new("report")
                .about("Print the statistics for one city without prompting")
                .arg(
                    Arg::new("city")
                        .long("city")
                        .value_name("CITY")
                        .help("chicago, new york city or washington")
                        .takes_value(true)
                        .required(true),
                )
                .arg(
                    Arg::new("month")
                        .long("month")
                        .value_name("MONTH")
                        .help("january to june, or all")
                        .takes_value(true)
                        .default_value("all"),
                )
                .arg(
                    Arg::new("day")
                        .long("day")
                        .value_name("DAY")
                        .help("Day of the week, or all")
                        .takes_value(true)
                        .default_value("all"),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .value_name("FORMAT")
                        .help("Output format")
                        .takes_value(true)
                        .possible_values(["text", "json"])
                        .default_value("text"),
                ),
        )
        .get_matches();

    // Load configuration
    let mut config = if let Some(config_path) = matches.value_of("config") {
        match Config::from_file(config_path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("Error loading config file: {}", err);
                Config::default()
            }
        }
    } else {
        Config::default()
    };

    if let Some(dir) = matches.value_of("data-dir") {
        config.data.dir = dir.to_string();
    }

    // Initialize logging
    if let Err(err) = init_logging(config.log_level_filter()) {
        eprintln!("Error initializing logger: {}", err);
    }
    debug!("Using configuration {:?}", config);

    let loader = DatasetLoader::new(&config.data.dir);

    match matches.subcommand() {
        Some(("report", report_matches)) => run_report(&loader, report_matches),
        _ => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            let mut shell = Shell::new(
                loader,
                config.display.raw_rows_per_page,
                stdin.lock(),
                stdout.lock(),
            );
            shell.run()?;
            Ok(())
        }
    }
}

fn run_report(loader: &DatasetLoader, matches: &ArgMatches) -> anyhow::Result<()> {
    let city: City = matches.value_of("city").unwrap_or_default().parse()?;
    let filter = TripFilter::parse(
        matches.value_of("month").unwrap_or("all"),
        matches.value_of("day").unwrap_or("all"),
    )?;
    info!("Reporting {} with {}", city, filter);

    let trips = loader
        .load(city)
        .with_context(|| format!("loading {}", loader.path_for(city).display()))?;
    let view = filter.apply(&trips)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if matches.value_of("format") == Some("json") {
        let report = TripReport::build(city.name(), &filter, &view)?;
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        writeln!(out, "City: {} ({}), {} trips", city, filter, view.len())?;
        writeln!(out, "{}", separator())?;
        print_reports(&mut out, &view)?;
    }

    Ok(())
}
