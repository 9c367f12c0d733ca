//! Alpha-only pixel format.
//!
//! One byte per pixel holding coverage/alpha. Red, green and blue are not
//! stored, so a fill color reduces to its alpha channel
//! ([`crate::color::argb_alpha_as_packed_8`]).

use crate::pixfmt_rgba::PixelAccess;
use crate::error::Result;
use crate::rendering_buffer::RenderingBuffer;

/// Bytes per pixel for Alpha8.
pub const BPP: usize = 1;

pub struct PixfmtAlpha8<'a, 'b> {
    rbuf: &'a mut RenderingBuffer<'b>,
}

impl<'a, 'b> PixfmtAlpha8<'a, 'b> {
    /// Attach to `rbuf`, which must hold pixels of exactly [`BPP`] bytes.
    pub fn new(rbuf: &'a mut RenderingBuffer<'b>) -> Result<Self> {
        rbuf.check_bpp(BPP)?;
        Ok(Self { rbuf })
    }
}

impl<'a, 'b> PixelAccess for PixfmtAlpha8<'a, 'b> {
    type Packed = u8;

    fn width(&self) -> u32 {
        self.rbuf.width()
    }

    fn height(&self) -> u32 {
        self.rbuf.height()
    }

    #[inline]
    fn pixel(&self, x: u32, y: u32) -> u8 {
        self.rbuf.pixel_bytes(x, y)[0]
    }

    #[inline]
    fn copy_pixel(&mut self, x: u32, y: u32, c: u8) {
        self.rbuf.pixel_bytes_mut(x, y)[0] = c;
    }
}
