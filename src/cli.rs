use std::path::PathBuf;

use clap::Parser;
use framecut_core::{is_valid_marker, CutOptions};

use crate::config::Config;

/// Framecut is a tool to remove a transparent frame from a picture.
#[derive(Debug, Parser)]
#[command(name = "framecut", version, about)]
pub struct Args {
    /// PNG files to cut; patterns like `frames/*.png` are expanded
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Keep n pixel of the frame if any
    #[arg(short, long, value_name = "PX")]
    pub frame: Option<u32>,

    /// Override original file on save
    #[arg(short = 'o', long = "override")]
    pub overwrite: bool,

    /// Marker inserted before the extension of written files
    #[arg(short, long, value_name = "TEXT", value_parser = parse_marker)]
    pub marker: Option<String>,

    /// Fail on fully transparent images instead of writing a single pixel
    #[arg(short, long)]
    pub strict: bool,

    /// Configuration file (defaults to framecut.toml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

fn parse_marker(value: &str) -> Result<String, String> {
    if is_valid_marker(value) {
        Ok(value.to_string())
    } else {
        Err("must be non-empty and free of path separators".to_string())
    }
}

impl Args {
    /// Merge flags over file configuration. Flags win.
    pub fn cut_options(&self, config: &Config) -> CutOptions {
        CutOptions::new()
            .with_frame(self.frame.unwrap_or(config.frame))
            .with_overwrite(self.overwrite || config.overwrite)
            .with_marker(self.marker.clone().unwrap_or_else(|| config.marker.clone()))
            .with_strict(self.strict || config.strict)
    }
}
