//! Bitmap formats and the ARGB fill entry point.
//!
//! Platform bitmaps hand over a locked pixel pointer together with a format
//! tag. [`fill_argb`] encodes a platform ARGB color for that format and runs
//! the matching engine instantiation. Formats without an engine are either
//! rejected (float and GPU-backed storage) or skipped without touching the
//! pixels.
//!
//! [`Bitmap`] also carries the byte-level edits that need no resampling:
//! cutting out a region and mirroring.

use log::debug;

use crate::basics::{PointI, PointU};
use crate::color::{
    abgr_to_argb, argb, argb_alpha_as_packed_8, argb_to_packed_16, argb_to_packed_32,
    packed_16_to_argb,
};
use crate::error::{FillError, Result};
use crate::flood_fill::{fill_alpha8, fill_rgb565, fill_rgba8888};
use crate::pixfmt_alpha8::PixfmtAlpha8;
use crate::pixfmt_rgb565::PixfmtRgb565;
use crate::pixfmt_rgba::{PixelAccess, PixfmtRgba8888};
use crate::rendering_buffer::{pixel_index, required_len, RenderingBuffer};

// ============================================================================
// Format tags
// ============================================================================

/// Pixel storage format of a bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BitmapFormat {
    /// 8-bit alpha only.
    Alpha8,
    /// 32-bit, R, G, B, A bytes.
    Rgba8888,
    /// 16-bit 5-6-5, no alpha.
    Rgb565,
    /// 16-bit 4-4-4-4. Recognized but not fillable.
    Rgba4444,
    /// 64-bit half-float RGBA.
    RgbaF16,
    /// Pixels live in GPU memory and cannot be locked.
    Hardware,
    /// Any tag this crate does not know.
    Unknown(i32),
}

impl BitmapFormat {
    pub const TAG_RGBA_8888: i32 = 1;
    pub const TAG_RGB_565: i32 = 4;
    pub const TAG_RGBA_4444: i32 = 7;
    pub const TAG_A_8: i32 = 8;
    pub const TAG_RGBA_F16: i32 = 9;

    /// Map a platform format code.
    ///
    /// `Hardware` has no code of its own; callers that know a bitmap is
    /// GPU-backed construct it directly.
    pub fn from_tag(tag: i32) -> Self {
        match tag {
            Self::TAG_RGBA_8888 => BitmapFormat::Rgba8888,
            Self::TAG_RGB_565 => BitmapFormat::Rgb565,
            Self::TAG_RGBA_4444 => BitmapFormat::Rgba4444,
            Self::TAG_A_8 => BitmapFormat::Alpha8,
            Self::TAG_RGBA_F16 => BitmapFormat::RgbaF16,
            other => BitmapFormat::Unknown(other),
        }
    }

    /// Bytes per pixel, or `None` where there is no addressable CPU storage.
    pub fn bytes_per_pixel(self) -> Option<usize> {
        match self {
            BitmapFormat::Alpha8 => Some(1),
            BitmapFormat::Rgb565 | BitmapFormat::Rgba4444 => Some(2),
            BitmapFormat::Rgba8888 => Some(4),
            BitmapFormat::RgbaF16 => Some(8),
            BitmapFormat::Hardware | BitmapFormat::Unknown(_) => None,
        }
    }

    /// Whether [`fill_argb`] modifies pixels of this format.
    pub fn is_fillable(self) -> bool {
        matches!(
            self,
            BitmapFormat::Alpha8 | BitmapFormat::Rgba8888 | BitmapFormat::Rgb565
        )
    }
}

// ============================================================================
// Dispatch
// ============================================================================

/// Flood fill a locked bitmap with an ARGB color.
///
/// `x` and `y` are signed as platform integers are; negative values are
/// reported as out of bounds. `RgbaF16` and `Hardware` fail with
/// [`FillError::UnsupportedFormat`]. Other formats without an engine are
/// left untouched and `Ok(())` is returned.
pub fn fill_argb(
    data: &mut [u8],
    width: u32,
    height: u32,
    format: BitmapFormat,
    x: i32,
    y: i32,
    color: u32,
) -> Result<()> {
    match format {
        BitmapFormat::RgbaF16 | BitmapFormat::Hardware => {
            return Err(FillError::UnsupportedFormat(format));
        }
        BitmapFormat::Rgba4444 | BitmapFormat::Unknown(_) => {
            debug!("fill skipped: no fill support for {:?}", format);
            return Ok(());
        }
        BitmapFormat::Alpha8 | BitmapFormat::Rgba8888 | BitmapFormat::Rgb565 => {}
    }

    let bpp = format
        .bytes_per_pixel()
        .ok_or(FillError::UnsupportedFormat(format))?;
    let mut rbuf = RenderingBuffer::new(data, width, height, bpp)?;
    let seed = PointI::new(x, y)
        .to_pixel(width, height)
        .ok_or(FillError::OutOfBounds {
            x: x as i64,
            y: y as i64,
            width,
            height,
        })?;

    debug!(
        "fill {:?} {}x{} at ({}, {}) with {:#010x}",
        format, width, height, seed.x, seed.y, color
    );
    match format {
        BitmapFormat::Alpha8 => fill_alpha8(&mut rbuf, seed, argb_alpha_as_packed_8(color)),
        BitmapFormat::Rgba8888 => fill_rgba8888(&mut rbuf, seed, argb_to_packed_32(color)),
        BitmapFormat::Rgb565 => fill_rgb565(&mut rbuf, seed, argb_to_packed_16(color)),
        _ => Ok(()),
    }
}

// ============================================================================
// Bitmap
// ============================================================================

/// An owned bitmap: dimensions, format tag and tightly packed pixel bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    format: BitmapFormat,
    data: Vec<u8>,
}

impl Bitmap {
    /// Allocate a zeroed bitmap.
    pub fn new(width: u32, height: u32, format: BitmapFormat) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(FillError::EmptyBuffer { width, height });
        }
        let bpp = format
            .bytes_per_pixel()
            .ok_or(FillError::UnsupportedFormat(format))?;
        let len = required_len(width, height, bpp).ok_or(FillError::BufferTooSmall {
            expected: usize::MAX,
            actual: 0,
        })?;
        Ok(Self {
            width,
            height,
            format,
            data: vec![0; len],
        })
    }

    /// Wrap existing pixel bytes. Bytes past `width * height * bpp` are dropped.
    pub fn from_bytes(
        width: u32,
        height: u32,
        format: BitmapFormat,
        mut data: Vec<u8>,
    ) -> Result<Self> {
        let bpp = format
            .bytes_per_pixel()
            .ok_or(FillError::UnsupportedFormat(format))?;
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
        data.truncate(expected);
        Ok(Self {
            width,
            height,
            format,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn format(&self) -> BitmapFormat {
        self.format
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Borrow the pixels as a rendering buffer.
    pub fn rendering_buffer(&mut self) -> Result<RenderingBuffer<'_>> {
        let bpp = self.bpp()?;
        RenderingBuffer::new(&mut self.data, self.width, self.height, bpp)
    }

    /// Flood fill from `(x, y)` with an ARGB color. See [`fill_argb`].
    pub fn fill(&mut self, x: i32, y: i32, color: u32) -> Result<()> {
        fill_argb(
            &mut self.data,
            self.width,
            self.height,
            self.format,
            x,
            y,
            color,
        )
    }

    /// Write one pixel from an ARGB color, encoded for this bitmap's format.
    pub fn set_pixel_argb(&mut self, x: u32, y: u32, color: u32) -> Result<()> {
        let p = self.checked_point(x, y)?;
        let format = self.format;
        let mut rbuf = self.rendering_buffer()?;
        match format {
            BitmapFormat::Alpha8 => {
                PixfmtAlpha8::new(&mut rbuf)?.copy_pixel(p.x, p.y, argb_alpha_as_packed_8(color))
            }
            BitmapFormat::Rgba8888 => {
                PixfmtRgba8888::new(&mut rbuf)?.copy_pixel(p.x, p.y, argb_to_packed_32(color))
            }
            BitmapFormat::Rgb565 => {
                PixfmtRgb565::new(&mut rbuf)?.copy_pixel(p.x, p.y, argb_to_packed_16(color))
            }
            _ => return Err(FillError::UnsupportedFormat(format)),
        }
        Ok(())
    }

    /// Read one pixel back as ARGB.
    ///
    /// A8 pixels decode to black with the stored alpha; RGB565 pixels
    /// decode through [`packed_16_to_argb`].
    pub fn pixel_argb(&self, x: u32, y: u32) -> Result<u32> {
        let p = self.checked_point(x, y)?;
        let bpp = self.bpp()?;
        let off = pixel_index(p.x, p.y, self.width) * bpp;
        let b = &self.data[off..off + bpp];
        match self.format {
            BitmapFormat::Alpha8 => Ok(argb(b[0], 0, 0, 0)),
            BitmapFormat::Rgba8888 => {
                let abgr = u32::from_ne_bytes([b[0], b[1], b[2], b[3]]);
                Ok(abgr_to_argb(abgr))
            }
            BitmapFormat::Rgb565 => Ok(packed_16_to_argb(u16::from_ne_bytes([b[0], b[1]]))),
            _ => Err(FillError::UnsupportedFormat(self.format)),
        }
    }

    /// Copy out the `width` x `height` region whose top-left corner is
    /// `(x, y)`.
    ///
    /// With `out_bounds` the result always has the requested size and any
    /// part outside this bitmap is zeroed. Without it the region is clipped
    /// to this bitmap, and a region that misses it entirely is
    /// `OutOfBounds`.
    pub fn cut(
        &self,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        out_bounds: bool,
    ) -> Result<Bitmap> {
        if width == 0 || height == 0 {
            return Err(FillError::EmptyBuffer { width, height });
        }
        let bpp = self.bpp()?;

        let (x0, y0) = (x as i64, y as i64);
        let (x1, y1) = (x0 + width as i64, y0 + height as i64);
        let (ix0, iy0) = (x0.max(0), y0.max(0));
        let (ix1, iy1) = (x1.min(self.width as i64), y1.min(self.height as i64));
        let disjoint = ix0 >= ix1 || iy0 >= iy1;

        let (origin_x, origin_y, out_w, out_h) = if out_bounds {
            (x0, y0, width, height)
        } else if disjoint {
            return Err(FillError::OutOfBounds {
                x: x0,
                y: y0,
                width: self.width,
                height: self.height,
            });
        } else {
            (ix0, iy0, (ix1 - ix0) as u32, (iy1 - iy0) as u32)
        };

        let mut out = Bitmap::new(out_w, out_h, self.format)?;
        if !disjoint {
            let run = (ix1 - ix0) as usize * bpp;
            for sy in iy0..iy1 {
                let src = pixel_index(ix0 as u32, sy as u32, self.width) * bpp;
                let dst =
                    pixel_index((ix0 - origin_x) as u32, (sy - origin_y) as u32, out_w) * bpp;
                out.data[dst..dst + run].copy_from_slice(&self.data[src..src + run]);
            }
        }
        debug!(
            "cut {}x{} at ({}, {}) from {}x{} {:?} -> {}x{}",
            width, height, x, y, self.width, self.height, self.format, out_w, out_h
        );
        Ok(out)
    }

    /// [`cut`](Self::cut) by edges. `right` and `bottom` are exclusive;
    /// swapped edges describe the same rectangle.
    pub fn crop(
        &self,
        left: i32,
        top: i32,
        right: i32,
        bottom: i32,
        out_bounds: bool,
    ) -> Result<Bitmap> {
        let width = (right as i64 - left as i64).unsigned_abs() as u32;
        let height = (bottom as i64 - top as i64).unsigned_abs() as u32;
        self.cut(left.min(right), top.min(bottom), width, height, out_bounds)
    }

    /// Mirror the pixels left to right, in place.
    pub fn flip_horizontal(&mut self) -> Result<()> {
        let bpp = self.bpp()?;
        let w = self.width as usize;
        for row in self.data.chunks_exact_mut(w * bpp) {
            for x in 0..w / 2 {
                let (left, right) = row.split_at_mut((w - 1 - x) * bpp);
                left[x * bpp..(x + 1) * bpp].swap_with_slice(&mut right[..bpp]);
            }
        }
        Ok(())
    }

    /// Mirror the rows top to bottom, in place.
    pub fn flip_vertical(&mut self) -> Result<()> {
        let stride = self.width as usize * self.bpp()?;
        let h = self.height as usize;
        for y in 0..h / 2 {
            let (top, bottom) = self.data.split_at_mut((h - 1 - y) * stride);
            top[y * stride..(y + 1) * stride].swap_with_slice(&mut bottom[..stride]);
        }
        Ok(())
    }

    fn bpp(&self) -> Result<usize> {
        self.format
            .bytes_per_pixel()
            .ok_or(FillError::UnsupportedFormat(self.format))
    }

    fn checked_point(&self, x: u32, y: u32) -> Result<PointU> {
        if x >= self.width || y >= self.height {
            return Err(FillError::OutOfBounds {
                x: x as i64,
                y: y as i64,
                width: self.width,
                height: self.height,
            });
        }
        Ok(PointU::new(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag() {
        assert_eq!(BitmapFormat::from_tag(1), BitmapFormat::Rgba8888);
        assert_eq!(BitmapFormat::from_tag(4), BitmapFormat::Rgb565);
        assert_eq!(BitmapFormat::from_tag(7), BitmapFormat::Rgba4444);
        assert_eq!(BitmapFormat::from_tag(8), BitmapFormat::Alpha8);
        assert_eq!(BitmapFormat::from_tag(9), BitmapFormat::RgbaF16);
        assert_eq!(BitmapFormat::from_tag(0), BitmapFormat::Unknown(0));
        assert_eq!(BitmapFormat::from_tag(-3), BitmapFormat::Unknown(-3));
    }

    #[test]
    fn test_bytes_per_pixel() {
        assert_eq!(BitmapFormat::Alpha8.bytes_per_pixel(), Some(1));
        assert_eq!(BitmapFormat::Rgb565.bytes_per_pixel(), Some(2));
        assert_eq!(BitmapFormat::Rgba8888.bytes_per_pixel(), Some(4));
        assert_eq!(BitmapFormat::Hardware.bytes_per_pixel(), None);
        assert!(BitmapFormat::Rgb565.is_fillable());
        assert!(!BitmapFormat::Rgba4444.is_fillable());
    }

    #[test]
    fn test_fill_rgba8888_bitmap() {
        let mut bmp = Bitmap::new(3, 2, BitmapFormat::Rgba8888).unwrap();
        bmp.set_pixel_argb(1, 0, 0xFF000000).unwrap();
        bmp.set_pixel_argb(1, 1, 0xFF000000).unwrap();
        bmp.fill(0, 0, 0xFFFFFF00).unwrap();
        assert_eq!(bmp.pixel_argb(0, 0).unwrap(), 0xFFFFFF00);
        assert_eq!(bmp.pixel_argb(0, 1).unwrap(), 0xFFFFFF00);
        assert_eq!(bmp.pixel_argb(1, 0).unwrap(), 0xFF000000);
        assert_eq!(bmp.pixel_argb(2, 0).unwrap(), 0);
        assert_eq!(bmp.pixel_argb(2, 1).unwrap(), 0);
    }

    #[test]
    fn test_fill_rgb565_bitmap() {
        let mut bmp = Bitmap::new(2, 2, BitmapFormat::Rgb565).unwrap();
        bmp.fill(1, 1, 0xFF123456).unwrap();
        let expected = packed_16_to_argb(argb_to_packed_16(0xFF123456));
        for y in 0..2 {
            for x in 0..2 {
                assert_eq!(bmp.pixel_argb(x, y).unwrap(), expected);
            }
        }
    }

    #[test]
    fn test_fill_alpha8_uses_alpha() {
        let mut bmp = Bitmap::new(2, 1, BitmapFormat::Alpha8).unwrap();
        bmp.fill(0, 0, 0x80FFFFFF).unwrap();
        assert_eq!(bmp.data(), &[0x80, 0x80]);
        assert_eq!(bmp.pixel_argb(1, 0).unwrap(), 0x80000000);
    }

    #[test]
    fn test_fill_argb_rejects_negative_seed() {
        let mut data = vec![0u8; 4];
        assert_eq!(
            fill_argb(&mut data, 2, 2, BitmapFormat::Alpha8, -1, 0, 0xFF000000),
            Err(FillError::OutOfBounds {
                x: -1,
                y: 0,
                width: 2,
                height: 2
            })
        );
        assert!(fill_argb(&mut data, 2, 2, BitmapFormat::Alpha8, 0, 2, 0xFF000000).is_err());
        assert_eq!(data, [0, 0, 0, 0]);
    }

    #[test]
    fn test_fill_argb_unsupported_formats() {
        let mut data = vec![0u8; 32];
        assert_eq!(
            fill_argb(&mut data, 2, 2, BitmapFormat::RgbaF16, 0, 0, 0xFFFFFFFF),
            Err(FillError::UnsupportedFormat(BitmapFormat::RgbaF16))
        );
        assert_eq!(
            fill_argb(&mut data, 2, 2, BitmapFormat::Hardware, 0, 0, 0xFFFFFFFF),
            Err(FillError::UnsupportedFormat(BitmapFormat::Hardware))
        );
        assert!(data.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_fill_argb_skips_unknown_formats() {
        let mut data = vec![0u8; 8];
        assert_eq!(
            fill_argb(&mut data, 2, 2, BitmapFormat::Rgba4444, 0, 0, 0xFFFFFFFF),
            Ok(())
        );
        assert_eq!(
            fill_argb(&mut data, 2, 2, BitmapFormat::Unknown(42), 0, 0, 0xFFFFFFFF),
            Ok(())
        );
        // Bad coordinates are not even looked at for skipped formats.
        assert_eq!(
            fill_argb(&mut data, 2, 2, BitmapFormat::Unknown(42), -5, 99, 0xFFFFFFFF),
            Ok(())
        );
        assert!(data.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_fill_argb_short_buffer() {
        let mut data = vec![0u8; 7];
        assert_eq!(
            fill_argb(&mut data, 2, 1, BitmapFormat::Rgba8888, 0, 0, 0xFFFFFFFF),
            Err(FillError::BufferTooSmall {
                expected: 8,
                actual: 7
            })
        );
    }

    #[test]
    fn test_from_bytes() {
        let bmp = Bitmap::from_bytes(2, 2, BitmapFormat::Rgb565, vec![0; 8]).unwrap();
        assert_eq!(bmp.width(), 2);
        assert_eq!(bmp.height(), 2);
        assert_eq!(bmp.format(), BitmapFormat::Rgb565);
        assert_eq!(bmp.into_bytes().len(), 8);
        assert!(Bitmap::from_bytes(2, 2, BitmapFormat::Rgb565, vec![0; 7]).is_err());
        let long = Bitmap::from_bytes(1, 1, BitmapFormat::Alpha8, vec![1, 2, 3]).unwrap();
        assert_eq!(long.data(), &[1]);
        assert!(Bitmap::from_bytes(2, 2, BitmapFormat::Hardware, vec![]).is_err());
    }

    #[test]
    fn test_new_rejects_empty() {
        assert_eq!(
            Bitmap::new(0, 5, BitmapFormat::Alpha8),
            Err(FillError::EmptyBuffer {
                width: 0,
                height: 5
            })
        );
    }

    #[test]
    fn test_pixel_argb_out_of_bounds() {
        let mut bmp = Bitmap::new(2, 2, BitmapFormat::Alpha8).unwrap();
        assert!(bmp.pixel_argb(2, 0).is_err());
        assert!(bmp.set_pixel_argb(0, 2, 0).is_err());
    }

    fn alpha8(width: u32, height: u32, data: &[u8]) -> Bitmap {
        Bitmap::from_bytes(width, height, BitmapFormat::Alpha8, data.to_vec()).unwrap()
    }

    #[test]
    fn test_cut_inside() {
        let bmp = alpha8(4, 3, &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]);
        let out = bmp.cut(1, 1, 2, 2, false).unwrap();
        assert_eq!((out.width(), out.height()), (2, 2));
        assert_eq!(out.data(), &[5, 6, 9, 10]);
        assert_eq!(bmp.cut(1, 1, 2, 2, true).unwrap(), out);
    }

    #[test]
    fn test_cut_out_bounds_pads_with_zero() {
        let bmp = alpha8(2, 2, &[1, 2, 3, 4]);
        let out = bmp.cut(-1, -1, 4, 3, true).unwrap();
        assert_eq!((out.width(), out.height()), (4, 3));
        assert_eq!(out.data(), &[0, 0, 0, 0, 0, 1, 2, 0, 0, 3, 4, 0]);
    }

    #[test]
    fn test_cut_clips_without_out_bounds() {
        let bmp = alpha8(2, 2, &[1, 2, 3, 4]);
        assert_eq!(bmp.cut(-1, -1, 4, 3, false).unwrap(), bmp);
        let right = bmp.cut(1, 0, 5, 5, false).unwrap();
        assert_eq!((right.width(), right.height()), (1, 2));
        assert_eq!(right.data(), &[2, 4]);
    }

    #[test]
    fn test_cut_disjoint_region() {
        let bmp = alpha8(2, 2, &[1, 2, 3, 4]);
        let out = bmp.cut(5, -7, 2, 2, true).unwrap();
        assert_eq!(out.data(), &[0, 0, 0, 0]);
        assert_eq!(
            bmp.cut(5, -7, 2, 2, false),
            Err(FillError::OutOfBounds {
                x: 5,
                y: -7,
                width: 2,
                height: 2
            })
        );
        assert!(bmp.cut(0, 0, 0, 1, true).is_err());
    }

    #[test]
    fn test_cut_rgba8888_keeps_colors() {
        let mut bmp = Bitmap::new(3, 3, BitmapFormat::Rgba8888).unwrap();
        bmp.set_pixel_argb(2, 2, 0xFF102030).unwrap();
        bmp.set_pixel_argb(1, 2, 0x80405060).unwrap();
        let out = bmp.cut(1, 1, 3, 2, true).unwrap();
        assert_eq!(out.format(), BitmapFormat::Rgba8888);
        assert_eq!(out.pixel_argb(1, 1).unwrap(), 0xFF102030);
        assert_eq!(out.pixel_argb(0, 1).unwrap(), 0x80405060);
        assert_eq!(out.pixel_argb(2, 1).unwrap(), 0);
        assert_eq!(out.pixel_argb(2, 0).unwrap(), 0);
    }

    #[test]
    fn test_crop_edges() {
        let bmp = alpha8(4, 3, &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]);
        let out = bmp.crop(1, 0, 3, 2, false).unwrap();
        assert_eq!(out.data(), &[1, 2, 5, 6]);
        assert_eq!(bmp.crop(3, 2, 1, 0, false).unwrap(), out);
        assert!(bmp.crop(2, 0, 2, 3, true).is_err());
    }

    #[test]
    fn test_flip_horizontal() {
        let mut bmp = alpha8(3, 2, &[1, 2, 3, 4, 5, 6]);
        bmp.flip_horizontal().unwrap();
        assert_eq!(bmp.data(), &[3, 2, 1, 6, 5, 4]);

        let mut wide = Bitmap::new(2, 1, BitmapFormat::Rgb565).unwrap();
        wide.set_pixel_argb(0, 0, 0xFFFF0000).unwrap();
        wide.set_pixel_argb(1, 0, 0xFF0000FF).unwrap();
        wide.flip_horizontal().unwrap();
        assert_eq!(wide.pixel_argb(0, 0).unwrap(), 0xFF0000F8);
        assert_eq!(wide.pixel_argb(1, 0).unwrap(), 0xFFF80000);
    }

    #[test]
    fn test_flip_vertical() {
        let mut bmp = alpha8(2, 3, &[1, 2, 3, 4, 5, 6]);
        bmp.flip_vertical().unwrap();
        assert_eq!(bmp.data(), &[5, 6, 3, 4, 1, 2]);
    }

    #[test]
    fn test_double_flip_is_identity() {
        let mut bmp = Bitmap::new(5, 4, BitmapFormat::Rgba8888).unwrap();
        for (i, (x, y)) in [(0, 0), (4, 1), (2, 3), (1, 2)].into_iter().enumerate() {
            bmp.set_pixel_argb(x, y, 0xFF000000 | (i as u32 + 1) * 0x010203).unwrap();
        }
        let before = bmp.clone();
        bmp.flip_horizontal().unwrap();
        assert_ne!(bmp, before);
        bmp.flip_horizontal().unwrap();
        bmp.flip_vertical().unwrap();
        bmp.flip_vertical().unwrap();
        assert_eq!(bmp, before);
    }
}
