/// A pixel position in buffer space: `x` is the column, `y` the row,
/// with (0, 0) at the top-left.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}
