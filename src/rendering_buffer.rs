//! Rendering buffer: a non-owning view over packed pixel memory.
//!
//! The buffer is tightly packed: row `y` starts at byte `y * width * bpp`
//! and there is no padding between rows. Memory is owned by the caller
//! (typically a platform bitmap whose pixels are locked for the duration of
//! a fill); the view only borrows it.

use crate::error::{FillError, Result};

/// Flat pixel index of `(x, y)` in a buffer `width` pixels wide.
///
/// This is a pixel index, not a byte offset; multiply by the pixel size to
/// address bytes. No bounds checking is done here.
#[inline]
pub fn pixel_index(x: u32, y: u32, width: u32) -> usize {
    y as usize * width as usize + x as usize
}

/// Minimum byte length for a `width * height` buffer of `bpp`-byte pixels.
///
/// Returns `None` on overflow.
pub fn required_len(width: u32, height: u32, bpp: usize) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(bpp))
}

/// Borrowed view of `width * height` pixels of `bpp` bytes each.
pub struct RenderingBuffer<'a> {
    data: &'a mut [u8],
    width: u32,
    height: u32,
    bpp: usize,
}

impl<'a> RenderingBuffer<'a> {
    /// Attach to caller-owned memory.
    ///
    /// Fails if either dimension is zero or `data` is shorter than
    /// `width * height * bpp`. Extra trailing bytes are ignored.
    pub fn new(data: &'a mut [u8], width: u32, height: u32, bpp: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(FillError::EmptyBuffer { width, height });
        }
        let expected = required_len(width, height, bpp).unwrap_or(usize::MAX);
        if data.len() < expected {
            return Err(FillError::BufferTooSmall {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data: &mut data[..expected],
            width,
            height,
            bpp,
        })
    }

    /// Attach to a raw pointer handed out by a platform lock-pixels call.
    ///
    /// # Safety
    /// `buf` must be valid for reads and writes of `width * height * bpp`
    /// bytes for the whole lifetime `'a`, and nothing else may access that
    /// memory while the view exists.
    pub unsafe fn from_raw_parts(
        buf: *mut u8,
        width: u32,
        height: u32,
        bpp: usize,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(FillError::EmptyBuffer { width, height });
        }
        let len = required_len(width, height, bpp).ok_or(FillError::BufferTooSmall {
            expected: usize::MAX,
            actual: 0,
        })?;
        if buf.is_null() {
            return Err(FillError::BufferTooSmall {
                expected: len,
                actual: 0,
            });
        }
        let data = std::slice::from_raw_parts_mut(buf, len);
        Self::new(data, width, height, bpp)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per pixel.
    pub fn bpp(&self) -> usize {
        self.bpp
    }

    /// Fail with `PixelSizeMismatch` unless pixels are `expected` bytes wide.
    pub fn check_bpp(&self, expected: usize) -> Result<()> {
        if self.bpp != expected {
            return Err(FillError::PixelSizeMismatch {
                expected,
                actual: self.bpp,
            });
        }
        Ok(())
    }

    /// Bytes per row.
    pub fn stride(&self) -> usize {
        self.width as usize * self.bpp
    }

    /// Bytes of the pixel at `(x, y)`.
    #[inline]
    pub fn pixel_bytes(&self, x: u32, y: u32) -> &[u8] {
        let off = pixel_index(x, y, self.width) * self.bpp;
        &self.data[off..off + self.bpp]
    }

    #[inline]
    pub fn pixel_bytes_mut(&mut self, x: u32, y: u32) -> &mut [u8] {
        let off = pixel_index(x, y, self.width) * self.bpp;
        &mut self.data[off..off + self.bpp]
    }

    /// Immutable slice for row `y`.
    pub fn row_slice(&self, y: u32) -> &[u8] {
        assert!(
            y < self.height,
            "row {} out of bounds (height={})",
            y,
            self.height
        );
        let stride = self.stride();
        let start = y as usize * stride;
        &self.data[start..start + stride]
    }

    pub fn as_bytes(&self) -> &[u8] {
        &*self.data
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut *self.data
    }
}
