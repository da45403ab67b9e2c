//! Visual regression comparison library.
//!
//! Compares a baseline screenshot against a current one, counts perceptually
//! differing pixels, and renders a diff artifact: either a labeled
//! three-panel composite (baseline | diff | current) or a flat gray/red
//! diff image.
//!
//! # Module Overview
//!
//! - [`compare`] - canvas normalization, region masking, pixel classification
//! - [`pixelmatch`] - the YIQ-based perceptual pixel comparator
//! - [`render`] - overlay, flat diff, and composite rendering
//! - [`font`] - label face resolution (explicit, system, built-in)
//! - [`digest`] - the compare report and its text/JSON digests
//! - [`executor`] - the load/compare/persist pipeline
//! - [`config`] - TOML config file support
//!
//! # Example
//!
//! ```no_run
//! use vrshot_lib::{execute, CompareConfig, CompareOptions};
//!
//! # fn example() -> vrshot_lib::Result<()> {
//! let config = CompareConfig {
//!     baseline_path: "baseline.png".into(),
//!     current_path: "current.png".into(),
//!     output_path: "diff.png".into(),
//!     options: CompareOptions::default(),
//!     threshold: Some(0.01),
//!     ..CompareConfig::default()
//! };
//! let report = execute(&config)?;
//! println!("{}", report.digest_text());
//! # Ok(())
//! # }
//! ```

pub mod compare;
pub mod config;
pub mod digest;
pub mod error;
pub mod executor;
pub mod font;
pub mod image_io;
pub mod pixelmatch;
pub mod render;
pub mod types;

pub use compare::{compare, CANVAS_FILL, MASK_FILL};
pub use config::FileConfig;
pub use digest::{CompareReport, DEFAULT_THRESHOLD};
pub use error::{Result, VrshotError};
pub use executor::{execute, CompareConfig};
pub use font::{resolve_face, FaceProvider, LabelFace};
pub use image_io::{load_image, save_image};
pub use render::{render_composite, render_flat_diff, render_overlay};
pub use types::{CompareOptions, CompareResult, Rect};
