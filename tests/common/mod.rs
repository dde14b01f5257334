// Shared fixtures for integration tests
// Author: Gabriel Demetrios Lafis

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

pub const CHICAGO_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
0,2017-01-02 08:15:00,2017-01-02 08:30:00,900,A,B,Subscriber,Male,1985.0
1,2017-03-06 17:05:00,2017-03-06 17:15:00,600,B,C,Subscriber,Female,1990.0
2,2017-03-07 17:45:00,2017-03-07 17:50:00,300,A,B,Customer,,
3,2017-06-10 09:00:00,2017-06-10 09:20:00,1200,C,A,Subscriber,Male,1972.0
4,2017-03-08 17:20:00,2017-03-08 17:45:00,1500,C,B,Subscriber,Male,1990.0
";

pub const NEW_YORK_CITY_CSV: &str = "\
Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
2017-03-01 10:00:00,2017-03-01 10:10:00,600,X,Y,Subscriber,Female,1980.0
2017-03-15 10:30:00,2017-03-15 10:36:40,400,Y,X,Customer,,
2017-04-03 14:00:00,2017-04-03 14:13:20,800,X,Y,Subscriber,Male,1975.0
2017-05-20 18:00:00,2017-05-20 18:03:20,200,Z,X,Subscriber,Male,1999.0
";

pub const WASHINGTON_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
0,2017-02-14 07:00:00,2017-02-14 07:08:20,500.5,P,Q,Subscriber
1,2017-02-15 07:30:00,2017-02-15 07:41:40,700.25,Q,P,Customer
2,2017-06-04 12:00:00,2017-06-04 12:05:00,300,P,Q,Subscriber
";

/// Directory holding all three city files
pub fn data_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "chicago.csv", CHICAGO_CSV);
    write(dir.path(), "new_york_city.csv", NEW_YORK_CITY_CSV);
    write(dir.path(), "washington.csv", WASHINGTON_CSV);
    dir
}

pub fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}
