use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use image::{ColorType, ImageFormat};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SaveFrameError {
    #[error("filename must end in .png or .jpg: {0}")]
    UnsupportedExtension(String),
    #[error(transparent)]
    Image(#[from] image::ImageError),
}

/// Writes frames as PNG or JPEG, chosen by the file extension.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImageFilePresenter;

impl ImageFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    pub fn format_for(filepath: &Path) -> Result<ImageFormat, SaveFrameError> {
        let extension = filepath
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("png") => Ok(ImageFormat::Png),
            Some("jpg" | "jpeg") => Ok(ImageFormat::Jpeg),
            _ => Err(SaveFrameError::UnsupportedExtension(
                filepath.display().to_string(),
            )),
        }
    }
}

impl FilePresenterPort for ImageFilePresenter {
    type Failure = SaveFrameError;

    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> Result<(), Self::Failure> {
        let format = Self::format_for(filepath)?;
        let side = buffer.resolution();

        image::save_buffer_with_format(
            filepath,
            buffer.buffer(),
            side,
            side,
            ColorType::Rgb8,
            format,
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::point::Point;

    fn sample_buffer() -> PixelBuffer {
        let mut buffer = PixelBuffer::new(4);
        buffer
            .set_pixel(Point { x: 1, y: 2 }, Colour { r: 175, g: 20, b: 0 })
            .unwrap();
        buffer
    }

    #[test]
    fn test_format_is_chosen_by_extension() {
        assert_eq!(
            ImageFilePresenter::format_for(Path::new("a.png")).unwrap(),
            ImageFormat::Png
        );
        assert_eq!(
            ImageFilePresenter::format_for(Path::new("a.JPG")).unwrap(),
            ImageFormat::Jpeg
        );
        assert_eq!(
            ImageFilePresenter::format_for(Path::new("dir/a.jpeg")).unwrap(),
            ImageFormat::Jpeg
        );
    }

    #[test]
    fn test_unsupported_extension_is_rejected() {
        for name in ["frame.bmp", "frame", "frame.png.txt"] {
            assert!(matches!(
                ImageFilePresenter::format_for(Path::new(name)),
                Err(SaveFrameError::UnsupportedExtension(_))
            ));
        }
    }

    #[test]
    fn test_png_round_trips_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.png");
        let buffer = sample_buffer();

        ImageFilePresenter::new().present(&buffer, &path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (4, 4));
        assert_eq!(decoded.get_pixel(1, 2).0, [175, 20, 0]);
        assert_eq!(decoded.as_raw(), buffer.buffer());
    }

    #[test]
    fn test_jpeg_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.jpg");

        ImageFilePresenter::new()
            .present(&sample_buffer(), &path)
            .unwrap();

        let decoded = image::open(&path).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (4, 4));
    }

    #[test]
    fn test_unsupported_extension_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.gif");

        let result = ImageFilePresenter::new().present(&sample_buffer(), &path);

        assert!(result.is_err());
        assert!(!path.exists());
    }
}
