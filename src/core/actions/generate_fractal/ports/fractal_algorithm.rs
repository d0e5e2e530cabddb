use crate::core::data::point::Point;
use std::error::Error;

/// Computes one value per buffer-space pixel.
pub trait FractalAlgorithm {
    type Success;
    type Failure: Error;

    fn resolution(&self) -> u32;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure>;
}
