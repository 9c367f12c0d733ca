//! RGB565 pixel format.
//!
//! 16-bit pixels (5 bits red, 6 green, 5 blue) stored in native byte order,
//! 2 bytes per pixel. There is no alpha channel in the buffer.

use crate::pixfmt_rgba::PixelAccess;
use crate::error::Result;
use crate::rendering_buffer::RenderingBuffer;

/// Bytes per pixel for RGB565.
pub const BPP: usize = 2;

/// Pixel format for packed 5-6-5 pixels.
pub struct PixfmtRgb565<'a, 'b> {
    rbuf: &'a mut RenderingBuffer<'b>,
}

impl<'a, 'b> PixfmtRgb565<'a, 'b> {
    /// Attach to `rbuf`, which must hold pixels of exactly [`BPP`] bytes.
    pub fn new(rbuf: &'a mut RenderingBuffer<'b>) -> Result<Self> {
        rbuf.check_bpp(BPP)?;
        Ok(Self { rbuf })
    }
}

impl<'a, 'b> PixelAccess for PixfmtRgb565<'a, 'b> {
    type Packed = u16;

    fn width(&self) -> u32 {
        self.rbuf.width()
    }

    fn height(&self) -> u32 {
        self.rbuf.height()
    }

    #[inline]
    fn pixel(&self, x: u32, y: u32) -> u16 {
        let p = self.rbuf.pixel_bytes(x, y);
        u16::from_ne_bytes([p[0], p[1]])
    }

    #[inline]
    fn copy_pixel(&mut self, x: u32, y: u32, c: u16) {
        self.rbuf.pixel_bytes_mut(x, y).copy_from_slice(&c.to_ne_bytes());
    }
}
