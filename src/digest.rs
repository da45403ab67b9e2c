//! The compare report: a flat record of one comparison, rendered as the
//! fixed-layout text digest and as camelCase JSON.

use serde::{Deserialize, Serialize};

use crate::Result;

/// Summary of a single comparison. Built once by the executor and treated
/// as immutable afterwards (gating fills the optional fields, nothing else
/// changes).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareReport {
    pub pixel_diff_count: u64,
    pub pixel_diff_ratio: f64,
    /// `pixel_diff_ratio * 100`, kept alongside the ratio so consumers never
    /// have to recompute it.
    pub diff_percent: f64,
    pub total_pixels: u64,
    pub baseline_path: String,
    pub current_path: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub diff_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pass: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
}

/// Default pass/fail threshold on the diff ratio.
pub const DEFAULT_THRESHOLD: f64 = 0.15;

impl CompareReport {
    /// Apply the pass/fail gate: passing means the diff ratio does not
    /// exceed the threshold.
    pub fn gate(&mut self, threshold: f64) {
        self.threshold = Some(threshold);
        self.pass = Some(self.pixel_diff_ratio <= threshold);
    }

    /// The fixed-layout text digest, also used for stdout.
    pub fn digest_text(&self) -> String {
        format!(
            "[Compare Result]\nBaseline: {}\nCurrent: {}\nOutput: {}\nDiff Pixels: {} / {}\nDiff Percent: {:.4}%",
            self.baseline_path,
            self.current_path,
            self.diff_path,
            self.pixel_diff_count,
            self.total_pixels,
            self.diff_percent,
        )
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CompareReport {
        CompareReport {
            pixel_diff_count: 150,
            pixel_diff_ratio: 0.015,
            diff_percent: 1.5,
            total_pixels: 10_000,
            baseline_path: "shots/baseline.png".to_string(),
            current_path: "shots/current.png".to_string(),
            diff_path: "shots/diff.png".to_string(),
            pass: None,
            threshold: None,
        }
    }

    #[test]
    fn digest_text_uses_fixed_layout() {
        let report = sample();
        assert_eq!(
            report.digest_text(),
            "[Compare Result]\n\
             Baseline: shots/baseline.png\n\
             Current: shots/current.png\n\
             Output: shots/diff.png\n\
             Diff Pixels: 150 / 10000\n\
             Diff Percent: 1.5000%"
        );
    }

    #[test]
    fn diff_percent_tracks_the_ratio() {
        let report = sample();
        assert!((report.diff_percent - report.pixel_diff_ratio * 100.0).abs() < 1e-12);
    }

    #[test]
    fn gate_passes_at_or_below_threshold() {
        let mut report = sample();
        report.gate(0.015);
        assert_eq!(report.pass, Some(true));
        assert_eq!(report.threshold, Some(0.015));

        let mut report = sample();
        report.gate(0.01);
        assert_eq!(report.pass, Some(false));
    }

    #[test]
    fn json_uses_camel_case_and_round_trips() {
        let mut report = sample();
        report.gate(DEFAULT_THRESHOLD);

        let json = report.to_json().expect("serialize report");
        assert!(json.contains("\"pixelDiffCount\": 150"));
        assert!(json.contains("\"pixelDiffRatio\""));
        assert!(json.contains("\"diffPercent\""));
        assert!(json.contains("\"totalPixels\": 10000"));
        assert!(json.contains("\"baselinePath\""));
        assert!(json.contains("\"diffPath\""));
        assert!(json.contains("\"pass\": true"));
        assert!(json.contains("\"threshold\": 0.15"));

        let back: CompareReport = serde_json::from_str(&json).expect("deserialize report");
        assert_eq!(back.pixel_diff_count, report.pixel_diff_count);
        assert_eq!(back.pass, Some(true));
    }

    #[test]
    fn ungated_report_omits_gate_fields() {
        let json = sample().to_json().expect("serialize report");
        assert!(!json.contains("\"pass\""));
        assert!(!json.contains("\"threshold\""));
    }

    #[test]
    fn empty_diff_path_is_omitted_from_json() {
        let mut report = sample();
        report.diff_path = String::new();
        let json = report.to_json().expect("serialize report");
        assert!(!json.contains("\"diffPath\""));
    }
}
