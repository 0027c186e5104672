use crate::export::ExportConfig;
use crate::plot::PlotFrame;
use crate::{Result, DEFAULT_POINT_COUNT};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Settings for a generation run. Any field missing from a configuration file takes its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub point_count: usize,
    pub plot: PlotFrame,
    pub export: ExportConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            point_count: DEFAULT_POINT_COUNT,
            plot: PlotFrame::default(),
            export: ExportConfig::default(),
        }
    }
}

impl GeneratorConfig {
    pub fn from_path(path: &Path) -> Result<GeneratorConfig> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }
}
