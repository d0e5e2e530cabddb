use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use thiserror::Error;

const RED: u8 = 175;
const GREEN_PERIOD: u32 = 254;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum BandedColourMapError {
    #[error("escape time {value} exceeds maximum iterations {max_iterations}")]
    ValueOutOfRange { value: u32, max_iterations: u32 },
}

/// Black for bounded points, otherwise a fixed red with a green channel
/// that climbs by two per iteration and wraps at 254.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BandedColourMap {
    max_iterations: u32,
}

impl BandedColourMap {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

impl ColourMap for BandedColourMap {
    type T = u32;
    type Failure = BandedColourMapError;

    fn map(&self, value: u32) -> Result<Colour, Self::Failure> {
        if value > self.max_iterations {
            return Err(BandedColourMapError::ValueOutOfRange {
                value,
                max_iterations: self.max_iterations,
            });
        }

        if value == self.max_iterations {
            return Ok(Colour::BLACK);
        }

        // value < max_iterations <= u32::MAX, widen before doubling
        let green = (u64::from(value) * 2 % u64::from(GREEN_PERIOD)) as u8;

        Ok(Colour {
            r: RED,
            g: green,
            b: 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_point_is_black() {
        let colour_map = BandedColourMap::new(255);

        assert_eq!(colour_map.map(255), Ok(Colour { r: 0, g: 0, b: 0 }));
    }

    #[test]
    fn test_immediate_escape_is_pure_red() {
        let colour_map = BandedColourMap::new(255);

        assert_eq!(colour_map.map(0), Ok(Colour { r: 175, g: 0, b: 0 }));
    }

    #[test]
    fn test_green_wraps_at_period() {
        let colour_map = BandedColourMap::new(255);

        assert_eq!(colour_map.map(126), Ok(Colour { r: 175, g: 252, b: 0 }));
        assert_eq!(colour_map.map(127), Ok(Colour { r: 175, g: 0, b: 0 }));
        assert_eq!(colour_map.map(128), Ok(Colour { r: 175, g: 2, b: 0 }));
        assert_eq!(colour_map.map(254), Ok(Colour { r: 175, g: 0, b: 0 }));
    }

    #[test]
    fn test_green_climbs_by_two() {
        let colour_map = BandedColourMap::new(255);

        assert_eq!(colour_map.map(1).unwrap().g, 2);
        assert_eq!(colour_map.map(10).unwrap().g, 20);
    }

    #[test]
    fn test_value_above_max_fails() {
        let colour_map = BandedColourMap::new(10);

        assert_eq!(
            colour_map.map(11),
            Err(BandedColourMapError::ValueOutOfRange {
                value: 11,
                max_iterations: 10
            })
        );
    }
}
