use crate::core::data::pixel_buffer::PixelBuffer;
use std::error::Error;
use std::path::Path;

pub trait FilePresenterPort {
    type Failure: Error + Send + Sync + 'static;

    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> Result<(), Self::Failure>;
}
