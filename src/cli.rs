use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "vrshot")]
#[command(
    version,
    about = "Visual regression comparison for screenshots",
    long_about = "vrshot\n\nCompares a baseline screenshot against a current one, writes a diff\nimage (labeled three-panel composite or flat diff), and prints a digest.\nAn optional threshold turns the comparison into a pass/fail gate."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(
        long,
        global = true,
        value_name = "PATH",
        help = "Optional config file (TOML) to set defaults for threshold/color-threshold/rendering; CLI flags override config"
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compare a baseline screenshot against a current one
    Compare {
        #[arg(help = "Baseline image (PNG et al.)")]
        baseline: PathBuf,

        #[arg(help = "Current image to compare against the baseline")]
        current: PathBuf,

        #[arg(long, short, default_value = "./diff.png", help = "Diff image output path")]
        output: PathBuf,

        #[arg(long, value_name = "PATH", help = "Write the text digest to this file")]
        digest: Option<PathBuf>,

        #[arg(long, value_name = "PATH", help = "Write the JSON digest to this file")]
        digest_json: Option<PathBuf>,

        #[arg(
            long,
            help = "Pass/fail threshold on the diff ratio (0-1); exit code 1 when exceeded"
        )]
        threshold: Option<f64>,

        #[arg(
            long,
            help = "Per-pixel color distance threshold (0-255); 0 falls back to the default of 10"
        )]
        color_threshold: Option<u8>,

        #[arg(long, help = "Count anti-aliased edge pixels instead of filtering them out")]
        ignore_antialiasing: bool,

        #[arg(
            long,
            value_name = "PATH",
            help = "Path to a JSON array of {x,y,width,height} pixel regions to mask before comparing"
        )]
        ignore_regions: Option<PathBuf>,

        #[arg(long, value_name = "PX", help = "Clamp the compared area to this height")]
        max_height: Option<u32>,

        #[arg(
            long,
            value_name = "BOOL",
            help = "Render the labeled three-panel composite (true, default) or a flat diff image (false)"
        )]
        diff_overlay: Option<bool>,

        #[arg(long, value_name = "PATH", help = "Font file for panel labels (TTF/OTF/TTC)")]
        label_font: Option<PathBuf>,

        #[arg(long, value_name = "PX", help = "Label font size in pixels")]
        label_font_size: Option<f32>,

        #[arg(long, default_value = "baseline", help = "Label above the left panel")]
        baseline_label: String,

        #[arg(long, default_value = "diff", help = "Label above the center panel")]
        diff_label: String,

        #[arg(long, default_value = "current", help = "Label above the right panel")]
        current_label: String,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}
