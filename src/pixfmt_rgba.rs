//! RGBA8888 pixel format, plus the `PixelAccess` trait the fill engine uses.
//!
//! Pixels are 32-bit ABGR words (see [`crate::color::argb_to_packed_32`])
//! stored in native byte order, 4 bytes per pixel.

use crate::error::Result;
use crate::rendering_buffer::RenderingBuffer;

// ============================================================================
// PixelAccess trait
// ============================================================================

/// Read/write access to packed pixels by coordinate.
///
/// This is the layer between the fill engine and raw pixel memory. Each
/// implementation fixes a storage width and its `Packed` value type.
/// Coordinates are not validated; callers keep them inside
/// `[0, width) x [0, height)`.
pub trait PixelAccess {
    /// The pixel value as stored in the buffer. Compared bitwise.
    type Packed: Copy + Eq + core::fmt::Debug;

    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Get the packed pixel at (x, y).
    fn pixel(&self, x: u32, y: u32) -> Self::Packed;

    /// Overwrite the pixel at (x, y).
    fn copy_pixel(&mut self, x: u32, y: u32, c: Self::Packed);
}

// ============================================================================
// PixfmtRgba8888
// ============================================================================

/// Bytes per pixel for RGBA8888.
pub const BPP: usize = 4;

/// Pixel format for 32-bit ABGR pixels.
pub struct PixfmtRgba8888<'a, 'b> {
    rbuf: &'a mut RenderingBuffer<'b>,
}

impl<'a, 'b> PixfmtRgba8888<'a, 'b> {
    /// Attach to `rbuf`, which must hold pixels of exactly [`BPP`] bytes.
    pub fn new(rbuf: &'a mut RenderingBuffer<'b>) -> Result<Self> {
        rbuf.check_bpp(BPP)?;
        Ok(Self { rbuf })
    }
}

impl<'a, 'b> PixelAccess for PixfmtRgba8888<'a, 'b> {
    type Packed = u32;

    fn width(&self) -> u32 {
        self.rbuf.width()
    }

    fn height(&self) -> u32 {
        self.rbuf.height()
    }

    #[inline]
    fn pixel(&self, x: u32, y: u32) -> u32 {
        let p = self.rbuf.pixel_bytes(x, y);
        u32::from_ne_bytes([p[0], p[1], p[2], p[3]])
    }

    #[inline]
    fn copy_pixel(&mut self, x: u32, y: u32, c: u32) {
        self.rbuf.pixel_bytes_mut(x, y).copy_from_slice(&c.to_ne_bytes());
    }
}
