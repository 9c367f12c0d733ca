//! Scanline seed fill.
//!
//! Replaces the 4-connected region of pixels equal to the seed's color with a
//! new packed color, in place. The engine is generic over [`PixelAccess`],
//! so one implementation serves every pixel width.
//!
//! Each popped seed is expanded horizontally into the run `[x_l, x_r]` it
//! belongs to. The rows above and below are then scanned across that run and
//! only the right end of every matching run there is pushed, so one
//! contiguous run costs one stack entry per adjacent span instead of one per
//! pixel. Finally the run itself is overwritten. A seed whose pixel was
//! already overwritten by an earlier span skips the neighbor scan; its line
//! fill then finds nothing to do.

use log::{trace, warn};

use crate::basics::PointU;
use crate::error::{FillError, Result};
use crate::pixfmt_alpha8::PixfmtAlpha8;
use crate::pixfmt_rgb565::PixfmtRgb565;
use crate::pixfmt_rgba::{PixelAccess, PixfmtRgba8888};
use crate::rendering_buffer::RenderingBuffer;

// ============================================================================
// Options and statistics
// ============================================================================

/// Tuning knobs for [`flood_fill_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FillOptions {
    /// Stop with [`FillError::RegionLimitExceeded`] before writing more than
    /// this many pixels. `None` means no limit.
    pub max_pixels: Option<u64>,
}

impl FillOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_pixels(mut self, max_pixels: u64) -> Self {
        self.max_pixels = Some(max_pixels);
        self
    }
}

/// Counters collected during one fill.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FillStats {
    /// Pixels overwritten with the new color.
    pub pixels_filled: u64,
    /// Seeds whose run was expanded and scanned for neighbors.
    pub spans: u64,
    /// Largest number of pending seeds at any time.
    pub max_stack_depth: usize,
}

// ============================================================================
// Engine
// ============================================================================

/// Flood fill from `seed` with `color`, which must already be encoded in
/// the format's packed representation.
///
/// Filling a pixel that already has `color` is a no-op.
pub fn flood_fill<P: PixelAccess>(pf: &mut P, seed: PointU, color: P::Packed) -> Result<()> {
    flood_fill_with(pf, seed, color, &FillOptions::default()).map(|_| ())
}

/// [`flood_fill`] with options, returning fill statistics.
///
/// A `RegionLimitExceeded` error leaves the pixels written so far in place;
/// the fill is not rolled back.
pub fn flood_fill_with<P: PixelAccess>(
    pf: &mut P,
    seed: PointU,
    color: P::Packed,
    options: &FillOptions,
) -> Result<FillStats> {
    let width = pf.width();
    let height = pf.height();
    if seed.x >= width || seed.y >= height {
        return Err(FillError::OutOfBounds {
            x: seed.x as i64,
            y: seed.y as i64,
            width,
            height,
        });
    }

    let old_color = pf.pixel(seed.x, seed.y);
    if old_color == color {
        trace!("fill at ({}, {}): seed already has {:?}", seed.x, seed.y, color);
        return Ok(FillStats::default());
    }

    let mut filler = SpanFiller {
        pf,
        old_color,
        color,
        width,
        height,
        max_pixels: options.max_pixels,
        stack: vec![seed],
        stats: FillStats {
            max_stack_depth: 1,
            ..FillStats::default()
        },
    };
    filler.run()?;

    trace!(
        "fill at ({}, {}): {} pixels in {} spans, stack depth {}",
        seed.x,
        seed.y,
        filler.stats.pixels_filled,
        filler.stats.spans,
        filler.stats.max_stack_depth
    );
    Ok(filler.stats)
}

struct SpanFiller<'p, P: PixelAccess> {
    pf: &'p mut P,
    old_color: P::Packed,
    color: P::Packed,
    width: u32,
    height: u32,
    max_pixels: Option<u64>,
    stack: Vec<PointU>,
    stats: FillStats,
}

impl<'p, P: PixelAccess> SpanFiller<'p, P> {
    fn run(&mut self) -> Result<()> {
        while let Some(seed) = self.stack.pop() {
            if self.matches(seed.x, seed.y) {
                let (x_l, x_r) = self.find_span(seed);
                self.stats.spans += 1;
                if seed.y + 1 < self.height {
                    self.push_span_ends(x_l, x_r, seed.y + 1);
                }
                if seed.y >= 1 {
                    self.push_span_ends(x_l, x_r, seed.y - 1);
                }
            }
            self.fill_line(seed)?;
        }
        Ok(())
    }

    #[inline]
    fn matches(&self, x: u32, y: u32) -> bool {
        self.pf.pixel(x, y) == self.old_color
    }

    /// Leftmost and rightmost column of the matching run through `seed`.
    fn find_span(&self, seed: PointU) -> (u32, u32) {
        let mut x_l = seed.x;
        while x_l >= 1 && self.matches(x_l - 1, seed.y) {
            x_l -= 1;
        }
        let mut x_r = seed.x;
        while x_r + 1 < self.width && self.matches(x_r + 1, seed.y) {
            x_r += 1;
        }
        (x_l, x_r)
    }

    /// Push the right end of every matching run on `row` within `[x_l, x_r]`.
    ///
    /// A run that continues past `x_r` is pushed at `x_r`; its own span
    /// scan extends it when popped.
    fn push_span_ends(&mut self, x_l: u32, x_r: u32, row: u32) {
        for cx in x_l..=x_r {
            if self.matches(cx, row) && (cx == x_r || !self.matches(cx + 1, row)) {
                self.stack.push(PointU::new(cx, row));
            }
        }
        self.stats.max_stack_depth = self.stats.max_stack_depth.max(self.stack.len());
    }

    /// Overwrite the run through `seed`: right of it first, then leftwards
    /// from the seed itself.
    fn fill_line(&mut self, seed: PointU) -> Result<()> {
        let y = seed.y;
        if seed.x + 1 < self.width && self.pf.pixel(seed.x + 1, y) == self.pf.pixel(seed.x, y) {
            let mut x = seed.x + 1;
            while x < self.width && self.matches(x, y) {
                self.set(x, y)?;
                x += 1;
            }
        }

        let mut x = seed.x;
        while self.matches(x, y) {
            self.set(x, y)?;
            if x == 0 {
                break;
            }
            x -= 1;
        }
        Ok(())
    }

    #[inline]
    fn set(&mut self, x: u32, y: u32) -> Result<()> {
        if let Some(limit) = self.max_pixels {
            if self.stats.pixels_filled >= limit {
                warn!("fill stopped at ({}, {}): region exceeds {} pixels", x, y, limit);
                return Err(FillError::RegionLimitExceeded { limit });
            }
        }
        self.pf.copy_pixel(x, y, self.color);
        self.stats.pixels_filled += 1;
        Ok(())
    }
}

// ============================================================================
// Per-format entry points
// ============================================================================

/// Fill a 32-bit ABGR buffer. `color` comes from
/// [`crate::color::argb_to_packed_32`].
pub fn fill_rgba8888(rbuf: &mut RenderingBuffer<'_>, seed: PointU, color: u32) -> Result<()> {
    flood_fill(&mut PixfmtRgba8888::new(rbuf)?, seed, color)
}

/// Fill an RGB565 buffer. `color` comes from
/// [`crate::color::argb_to_packed_16`].
pub fn fill_rgb565(rbuf: &mut RenderingBuffer<'_>, seed: PointU, color: u16) -> Result<()> {
    flood_fill(&mut PixfmtRgb565::new(rbuf)?, seed, color)
}

/// Fill an alpha-only buffer.
pub fn fill_alpha8(rbuf: &mut RenderingBuffer<'_>, seed: PointU, color: u8) -> Result<()> {
    flood_fill(&mut PixfmtAlpha8::new(rbuf)?, seed, color)
}
