//! Writing coordinate loops to disk as two column CSV or JSON.

use crate::airfoil::CoordinateLoop;
use crate::Result;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Json,
}

impl Default for ExportFormat {
    fn default() -> Self {
        ExportFormat::Csv
    }
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Where and how a coordinate loop is saved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub directory: PathBuf,
    pub base_name: String,
    pub format: ExportFormat,
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            directory: PathBuf::from("."),
            base_name: "naca_airfoil_coordinates".to_string(),
            format: ExportFormat::Csv,
        }
    }
}

/// Format a coordinate the way the csv module of the original tool wrote floats: shortest round
/// trip digits, a trailing ".0" on whole numbers, two digit signed exponents outside of
/// [1e-4, 1e16), and "nan"/"inf" for non-finite values.
pub fn format_value(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v == f64::INFINITY {
        return "inf".to_string();
    }
    if v == f64::NEG_INFINITY {
        return "-inf".to_string();
    }

    let abs = v.abs();
    if abs != 0.0 && (abs < 1e-4 || abs >= 1e16) {
        let text = format!("{:e}", v);
        let (mantissa, exponent) = text.split_once('e').unwrap_or((text.as_str(), "0"));
        let exponent: i32 = exponent.parse().unwrap_or(0);
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}e{}{:02}", mantissa, sign, exponent.abs());
    }

    let text = format!("{}", v);
    if text.contains('.') {
        text
    } else {
        format!("{}.0", text)
    }
}

/// Write the loop as CSV with a header row of `x,y` and one row per point in loop order
pub fn write_csv<W: Write>(coords: &CoordinateLoop, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["x", "y"])?;
    for (x, y) in coords.xs.iter().zip_eq(coords.ys.iter()) {
        wtr.write_record([format_value(*x), format_value(*y)])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_json<W: Write>(coords: &CoordinateLoop, writer: W) -> Result<()> {
    serde_json::to_writer_pretty(writer, coords)?;
    Ok(())
}

/// Find a file name in `directory` which doesn't exist yet. The first candidate is
/// `base_name.extension`, followed by `base_name_1.extension`, `base_name_2.extension`, and so on.
pub fn unique_path(directory: &Path, base_name: &str, extension: &str) -> PathBuf {
    let mut path = directory.join(format!("{}.{}", base_name, extension));
    let mut number: usize = 1;
    while path.exists() {
        path = directory.join(format!("{}_{}.{}", base_name, number, extension));
        number += 1;
    }
    path
}

/// Save the loop into the configured directory under a non-colliding name, returning the path
/// of the written file
pub fn save(coords: &CoordinateLoop, config: &ExportConfig) -> Result<PathBuf> {
    fs::create_dir_all(&config.directory)?;
    let path = unique_path(&config.directory, &config.base_name, config.format.extension());
    let mut writer = BufWriter::new(File::create(&path)?);
    match config.format {
        ExportFormat::Csv => write_csv(coords, &mut writer)?,
        ExportFormat::Json => write_json(coords, &mut writer)?,
    }
    writer.flush()?;
    Ok(path)
}
