mod cli;
mod commands;

use std::process::ExitCode;

use cli::Commands;
use commands::run_compare;

fn main() -> ExitCode {
    let args = cli::parse();

    match args.command {
        Commands::Compare {
            baseline,
            current,
            output,
            digest,
            digest_json,
            threshold,
            color_threshold,
            ignore_antialiasing,
            ignore_regions,
            max_height,
            diff_overlay,
            label_font,
            label_font_size,
            baseline_label,
            diff_label,
            current_label,
        } => run_compare(
            args.config,
            args.verbose,
            baseline,
            current,
            output,
            digest,
            digest_json,
            threshold,
            color_threshold,
            ignore_antialiasing,
            ignore_regions,
            max_height,
            diff_overlay,
            label_font,
            label_font_size,
            baseline_label,
            diff_label,
            current_label,
        ),
    }
}
