//! # pixfill
//!
//! In-place flood fill (bucket fill) over packed pixel buffers.
//!
//! The crate fills the 4-connected region of exactly matching pixels around
//! a seed point with a new color, directly in caller-owned memory. It
//! supports three storage formats:
//!
//! - **RGBA8888**: 32-bit pixels, stored as ABGR words
//! - **RGB565**: 16-bit pixels, no alpha
//! - **A8**: 8-bit alpha only
//!
//! ## Architecture
//!
//! 1. **Color codec** ([`color`]): ARGB channel extraction and conversion to
//!    each format's packed representation
//! 2. **Buffer access** ([`rendering_buffer`], `pixfmt_*`): a borrowed view
//!    of the pixel memory and typed per-format pixel get/set
//! 3. **Fill engine** ([`flood_fill`]): one scanline seed fill, generic over
//!    [`PixelAccess`](pixfmt_rgba::PixelAccess)
//! 4. **Format dispatch** ([`bitmap`]): platform format tags to engine
//!    instantiations, plus an owned [`Bitmap`](bitmap::Bitmap)
//!
//! ```
//! use pixfill::bitmap::{Bitmap, BitmapFormat};
//!
//! let mut bmp = Bitmap::new(4, 4, BitmapFormat::Rgba8888).unwrap();
//! bmp.fill(1, 1, 0xFF336699).unwrap();
//! assert_eq!(bmp.pixel_argb(3, 3).unwrap(), 0xFF336699);
//! ```

pub mod basics;
pub mod bitmap;
pub mod color;
pub mod error;
pub mod flood_fill;
pub mod pixfmt_alpha8;
pub mod pixfmt_rgb565;
pub mod pixfmt_rgba;
pub mod rendering_buffer;

pub use basics::PointU;
pub use error::{FillError, Result};
pub use flood_fill::{flood_fill, flood_fill_with, FillOptions, FillStats};
