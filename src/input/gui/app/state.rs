use std::path::Path;

pub const DEFAULT_SAVE_PATH: &str = "mandelbrot.png";

/// UI-only state that does not belong to the render thread.
pub struct GuiAppState {
    pub save_path: String,
    pub status_message: Option<String>,
    pub redraw_pending: bool,
}

impl Default for GuiAppState {
    fn default() -> Self {
        Self {
            save_path: DEFAULT_SAVE_PATH.to_owned(),
            status_message: None,
            redraw_pending: true,
        }
    }
}

#[must_use]
pub fn window_title(resolution: u32) -> String {
    format!("Mandelbrot {resolution}-by-{resolution}")
}

/// Title shown once a frame has been saved: the bare file name.
#[must_use]
pub fn saved_title(filepath: &Path) -> String {
    filepath.file_name().map_or_else(
        || filepath.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_title_names_resolution() {
        assert_eq!(window_title(512), "Mandelbrot 512-by-512");
    }

    #[test]
    fn test_saved_title_drops_directories() {
        assert_eq!(saved_title(Path::new("shots/deep/zoom.png")), "zoom.png");
        assert_eq!(saved_title(Path::new("frame.jpg")), "frame.jpg");
    }

    #[test]
    fn test_default_state_saves_to_png_and_wants_first_redraw() {
        let state = GuiAppState::default();

        assert_eq!(state.save_path, "mandelbrot.png");
        assert!(state.status_message.is_none());
        assert!(state.redraw_pending);
    }
}
