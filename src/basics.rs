//! Foundation types shared across the crate.

// ============================================================================
// Point
// ============================================================================

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PointBase<T: Copy> {
    pub x: T,
    pub y: T,
}

impl<T: Copy> PointBase<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

/// Pixel coordinate. Column `x`, row `y`, both counted from the top-left.
pub type PointU = PointBase<u32>;

/// Signed coordinate as handed over by platform callers.
pub type PointI = PointBase<i32>;

impl PointI {
    /// Convert to a pixel coordinate if it lies inside `width x height`.
    pub fn to_pixel(self, width: u32, height: u32) -> Option<PointU> {
        let x = u32::try_from(self.x).ok()?;
        let y = u32::try_from(self.y).ok()?;
        (x < width && y < height).then_some(PointU::new(x, y))
    }
}

impl From<(u32, u32)> for PointU {
    fn from((x, y): (u32, u32)) -> Self {
        Self::new(x, y)
    }
}
