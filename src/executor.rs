//! The compare pipeline: load the image pair, run the comparison, and
//! persist the diff image and digest artifacts.

use std::fs;
use std::path::{Path, PathBuf};

use crate::digest::CompareReport;
use crate::image_io::{load_image, save_image};
use crate::types::CompareOptions;
use crate::{compare, Result};

/// Everything one comparison run needs: the image pair, where artifacts
/// go, the comparison options, and the optional pass/fail gate.
#[derive(Debug, Clone)]
pub struct CompareConfig {
    pub baseline_path: PathBuf,
    pub current_path: PathBuf,
    pub output_path: PathBuf,
    pub options: CompareOptions,
    /// Pass/fail threshold on the diff ratio; `None` disables gating.
    pub threshold: Option<f64>,
    pub digest_txt_path: Option<PathBuf>,
    pub digest_json_path: Option<PathBuf>,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            baseline_path: PathBuf::new(),
            current_path: PathBuf::new(),
            output_path: PathBuf::from("./diff.png"),
            options: CompareOptions::default(),
            threshold: None,
            digest_txt_path: None,
            digest_json_path: None,
        }
    }
}

/// Run one comparison end to end. Decode failures and unwritable artifact
/// paths are fatal; the pass/fail verdict is carried in the report, not in
/// the error channel.
pub fn execute(config: &CompareConfig) -> Result<CompareReport> {
    let baseline = load_image(&config.baseline_path)?;
    let current = load_image(&config.current_path)?;

    let result = compare::compare(&baseline, &current, &config.options)?;

    save_image(&config.output_path, &result.diff_image)?;

    let mut report = CompareReport {
        pixel_diff_count: result.pixel_diff_count,
        pixel_diff_ratio: result.pixel_diff_ratio,
        diff_percent: result.pixel_diff_ratio * 100.0,
        total_pixels: result.total_pixels,
        baseline_path: config.baseline_path.display().to_string(),
        current_path: config.current_path.display().to_string(),
        diff_path: config.output_path.display().to_string(),
        pass: None,
        threshold: None,
    };

    if let Some(threshold) = config.threshold {
        report.gate(threshold);
    }

    if let Some(path) = &config.digest_txt_path {
        write_artifact(path, &format!("{}\n", report.digest_text()))?;
    }
    if let Some(path) = &config.digest_json_path {
        write_artifact(path, &format!("{}\n", report.to_json()?))?;
    }

    Ok(report)
}

fn write_artifact(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, contents)?;
    Ok(())
}
