use crate::converter::ConvertParams;
use crate::document::svg::SvgStyle;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Config of the `vectorize` tool.
///
/// ```json
/// {
///   "input": "photo.png",
///   "params": { "shape": "crosshatch", "blockSize": 10, "alpha": 0.9 },
///   "seed": 42,
///   "output": { "svg": "out/photo.svg", "reportJson": "out/report.json" }
/// }
/// ```
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VectorizeConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub params: ConvertParams,
    /// Seed for the stochastic shapes. Drawn at random (and reported) when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub style: SvgStyle,
    pub output: VectorizeOutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VectorizeOutputConfig {
    pub svg: PathBuf,
    #[serde(default)]
    pub report_json: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<VectorizeConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

pub fn parse_config(data: &str) -> Result<VectorizeConfig, serde_json::Error> {
    serde_json::from_str(data)
}
