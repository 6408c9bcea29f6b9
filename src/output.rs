// src/output.rs
use crate::market::Series;
use crate::matrix::PathMatrix;
use std::fs::File;
use std::io::{self, Write};

pub fn write_matrix_to_csv(filename: &str, walks: &PathMatrix) -> io::Result<()> {
    let mut file = File::create(filename)?;
    let header: Vec<String> = (0..=walks.num_steps()).map(|j| format!("step_{}", j)).collect();
    writeln!(file, "path_id,{}", header.join(","))?;
    for i in 0..walks.num_paths() {
        let row: Vec<String> = walks.path(i).iter().map(|s| s.to_string()).collect();
        writeln!(file, "{},{}", i, row.join(","))?;
    }
    Ok(())
}

pub fn write_series_to_csv(filename: &str, series: &Series) -> io::Result<()> {
    let mut file = File::create(filename)?;
    writeln!(file, "date,{}", series.ticker)?;
    for (date, value) in series.dates.iter().zip(series.values.iter()) {
        writeln!(file, "{},{}", date, value)?;
    }
    Ok(())
}
