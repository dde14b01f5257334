// Filter and report benchmarks
// Author: Gabriel Demetrios Lafis

use std::fmt::Write;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use bikeshare_explorer::{
    data::{City, DataSet, DatasetLoader},
    processing::TripFilter,
    report::{station_stats, time_stats, user_stats},
};

const STATIONS: [&str; 6] = [
    "Canal St & Adams St",
    "Clinton St & Madison St",
    "Streeter Dr & Grand Ave",
    "Lake Shore Dr & Monroe St",
    "Michigan Ave & Oak St",
    "Theater on the Lake",
];

fn synthetic_trips(rows: usize) -> (tempfile::TempDir, DataSet) {
    let mut csv = String::from(
        "Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year\n",
    );
    for i in 0..rows {
        let month = i % 6 + 1;
        let day = i % 28 + 1;
        let hour = i % 24;
        writeln!(
            csv,
            "2017-{:02}-{:02} {:02}:00:00,2017-{:02}-{:02} {:02}:30:00,{},{},{},{},{},{}",
            month,
            day,
            hour,
            month,
            day,
            hour,
            300 + i % 1200,
            STATIONS[i % STATIONS.len()],
            STATIONS[(i * 7) % STATIONS.len()],
            if i % 5 == 0 { "Customer" } else { "Subscriber" },
            if i % 2 == 0 { "Male" } else { "Female" },
            1950 + i % 50,
        )
        .unwrap();
    }

    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(dir.path().join(City::Chicago.file_name()), csv).unwrap();
    let trips = DatasetLoader::new(dir.path()).load(City::Chicago).unwrap();
    (dir, trips)
}

fn bench_reports(c: &mut Criterion) {
    let (_dir, trips) = synthetic_trips(20_000);
    let filter = TripFilter::parse("march", "all").unwrap();

    c.bench_function("filter_march", |b| {
        b.iter(|| filter.apply(black_box(&trips)).unwrap())
    });

    c.bench_function("time_stats", |b| b.iter(|| time_stats(black_box(&trips)).unwrap()));
    c.bench_function("station_stats", |b| {
        b.iter(|| station_stats(black_box(&trips)).unwrap())
    });
    c.bench_function("user_stats", |b| b.iter(|| user_stats(black_box(&trips)).unwrap()));
}

criterion_group!(benches, bench_reports);
criterion_main!(benches);
