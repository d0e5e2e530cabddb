use crate::core::data::viewport::{DEFAULT_CENTER_X, DEFAULT_CENTER_Y, DEFAULT_SIZE, Viewport};
use clap::{Args, Parser};
use std::path::PathBuf;

/// Optional starting view, shared by both binaries.
///
/// The values are taken as raw strings so that a bad one can fall back to
/// its default instead of aborting startup.
#[derive(Debug, Clone, Default, Args)]
pub struct ViewportArgs {
    /// Real part of the view centre
    #[arg(value_name = "CENTER_X", allow_hyphen_values = true)]
    pub center_x: Option<String>,

    /// Imaginary part of the view centre
    #[arg(value_name = "CENTER_Y", allow_hyphen_values = true)]
    pub center_y: Option<String>,

    /// Side length of the square view
    #[arg(value_name = "SIZE", allow_hyphen_values = true)]
    pub size: Option<String>,

    /// Anything after SIZE is accepted and ignored
    #[arg(hide = true, allow_negative_numbers = true)]
    pub extra: Vec<String>,
}

impl ViewportArgs {
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        if !self.extra.is_empty() {
            tracing::debug!(ignored = ?self.extra, "ignoring extra arguments");
        }

        let center_x = parse_or_default(
            "CENTER_X",
            self.center_x.as_deref(),
            DEFAULT_CENTER_X,
            f64::is_finite,
        );
        let center_y = parse_or_default(
            "CENTER_Y",
            self.center_y.as_deref(),
            DEFAULT_CENTER_Y,
            f64::is_finite,
        );
        let size = parse_or_default("SIZE", self.size.as_deref(), DEFAULT_SIZE, |size| {
            size.is_finite() && size > 0.0
        });

        // every component has already been validated
        Viewport::new(center_x, center_y, size).unwrap_or_default()
    }
}

/// Renders one frame to an image file.
#[derive(Debug, Parser)]
#[command(name = "mandelbrot_viewer", version, about)]
pub struct SnapshotArgs {
    #[command(flatten)]
    pub view: ViewportArgs,

    /// Where to write the frame (.png, .jpg or .jpeg)
    #[arg(short, long, default_value = "mandelbrot.png")]
    pub output: PathBuf,
}

/// Explores the Mandelbrot set in a window.
#[derive(Debug, Parser)]
#[command(name = "gui", version, about)]
pub struct GuiArgs {
    #[command(flatten)]
    pub view: ViewportArgs,
}

fn parse_or_default(
    name: &str,
    raw: Option<&str>,
    default: f64,
    accept: impl Fn(f64) -> bool,
) -> f64 {
    let Some(raw) = raw else {
        return default;
    };

    match raw.trim().parse::<f64>() {
        Ok(value) if accept(value) => value,
        _ => {
            tracing::debug!(argument = name, value = raw, default, "ignoring invalid argument");
            default
        }
    }
}
