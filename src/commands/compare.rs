use std::path::{Path, PathBuf};
use std::process::ExitCode;

use vrshot_lib::{
    execute, CompareConfig, CompareOptions, FileConfig, Rect, Result, VrshotError,
};

/// Run the compare command.
#[allow(clippy::too_many_arguments)]
pub fn run_compare(
    config_path: Option<PathBuf>,
    verbose: bool,
    baseline: PathBuf,
    current: PathBuf,
    output: PathBuf,
    digest: Option<PathBuf>,
    digest_json: Option<PathBuf>,
    threshold: Option<f64>,
    color_threshold: Option<u8>,
    ignore_antialiasing: bool,
    ignore_regions: Option<PathBuf>,
    max_height: Option<u32>,
    diff_overlay: Option<bool>,
    label_font: Option<PathBuf>,
    label_font_size: Option<f32>,
    baseline_label: String,
    diff_label: String,
    current_label: String,
) -> ExitCode {
    let file_config = match FileConfig::load(config_path.as_deref()) {
        Ok(cfg) => cfg,
        Err(err) => return fatal(err),
    };

    let regions = match ignore_regions {
        Some(path) => match load_ignore_regions(&path) {
            Ok(regions) => regions,
            Err(err) => return fatal(err),
        },
        None => Vec::new(),
    };

    let defaults = CompareOptions::default();
    let options = CompareOptions {
        color_threshold: color_threshold
            .or(file_config.color_threshold)
            .unwrap_or(defaults.color_threshold),
        // The flag can only switch the filter off; absent flag defers to
        // the config file.
        ignore_antialiasing: ignore_antialiasing
            || file_config.ignore_antialiasing.unwrap_or(false),
        ignore_regions: regions,
        max_height: max_height.or(file_config.max_height).unwrap_or(0),
        diff_overlay: diff_overlay
            .or(file_config.diff_overlay)
            .unwrap_or(defaults.diff_overlay),
        label_font_path: label_font.or(file_config.label_font.map(PathBuf::from)),
        label_font_size: label_font_size
            .or(file_config.label_font_size)
            .unwrap_or(defaults.label_font_size),
        baseline_label,
        diff_label,
        current_label,
    };
    let threshold = threshold.or(file_config.threshold);

    if verbose {
        let source = config_path
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "defaults".to_string());
        eprintln!(
            "Effective config [{source}]: threshold={}, color-threshold={}, ignore-antialiasing={}, max-height={}, diff-overlay={}, regions={}",
            threshold.map_or("off".to_string(), |t| format!("{t:.4}")),
            options.color_threshold,
            options.ignore_antialiasing,
            options.max_height,
            options.diff_overlay,
            options.ignore_regions.len(),
        );
        eprintln!(
            "Comparing {} against {}\u{2026}",
            baseline.display(),
            current.display()
        );
    }

    let compare_config = CompareConfig {
        baseline_path: baseline,
        current_path: current,
        output_path: output,
        options,
        threshold,
        digest_txt_path: digest,
        digest_json_path: digest_json,
    };

    let report = match execute(&compare_config) {
        Ok(report) => report,
        Err(err) => return fatal(err),
    };

    if verbose {
        eprintln!("Diff image: {}", report.diff_path);
    }
    println!("{}", report.digest_text());

    match report.pass {
        Some(false) => ExitCode::from(1),
        _ => ExitCode::SUCCESS,
    }
}

fn load_ignore_regions(path: &Path) -> Result<Vec<Rect>> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        VrshotError::config(format!(
            "Failed to read ignore regions {}: {}",
            path.display(),
            e
        ))
    })?;
    serde_json::from_str(&raw).map_err(|e| {
        VrshotError::config(format!(
            "Invalid ignore regions {}: {}",
            path.display(),
            e
        ))
    })
}

// Exit code 2 is reserved for fatal errors; threshold failures use 1.
fn fatal(err: VrshotError) -> ExitCode {
    eprintln!("Error: {err}");
    ExitCode::from(2)
}
