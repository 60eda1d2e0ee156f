//! # framecut-core
//!
//! Trims the transparent border of PNG images.
//!
//! ## Features
//! - Bounding box of all non-transparent pixels (four directional scans)
//! - Optional transparent frame kept around the content
//! - `.cut` output naming or in-place overwrite
//!
//! ## Example
//!
//! ```no_run
//! use framecut_core::{cut_file, CutOptions};
//!
//! let options = CutOptions::new().with_frame(4);
//! let report = cut_file("sprite.png", &options).unwrap();
//! println!("{} -> {}", report.input.display(), report.output.display());
//! ```

mod bounds;
mod codec;
mod cut;
mod error;
mod frame;
mod naming;
mod types;

pub use bounds::{first_opaque_column, first_opaque_row, has_content, last_opaque_column, last_opaque_row, scan_bounds};
pub use codec::{load_png, save_png};
pub use cut::{cut_file, cut_image, Cut, CutOptions, CutReport};
pub use error::FramecutError;
pub use frame::{clamp_frame, crop};
pub use naming::{is_valid_marker, output_path, DEFAULT_MARKER};
pub use types::{BoundingBox, CropRect};
