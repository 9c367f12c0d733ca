//! Packed color codecs.
//!
//! Colors enter the crate as 32-bit ARGB (`0xAARRGGBB`), the form platform
//! color integers use. Buffers store them in one of three native encodings:
//!
//! - `Rgba8888`: 32-bit ABGR (`0xAABBGGRR`); stored native-endian this is the
//!   R, G, B, A byte order on little-endian hosts
//! - `Rgb565`: 16-bit, 5 bits red, 6 bits green, 5 bits blue, no alpha
//! - `Alpha8`: the alpha channel only
//!
//! All functions here are pure value transforms.

// ============================================================================
// Channel extraction
// ============================================================================

/// One 8-bit channel of an ARGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgbChannel {
    Alpha,
    Red,
    Green,
    Blue,
}

impl ArgbChannel {
    /// Bit offset of the channel's low bit inside `0xAARRGGBB`.
    #[inline]
    pub const fn shift(self) -> u32 {
        match self {
            ArgbChannel::Alpha => 24,
            ArgbChannel::Red => 16,
            ArgbChannel::Green => 8,
            ArgbChannel::Blue => 0,
        }
    }
}

/// Extract one channel from a packed ARGB value.
#[inline]
pub const fn argb_channel(argb: u32, channel: ArgbChannel) -> u8 {
    ((argb >> channel.shift()) & 0xFF) as u8
}

#[inline]
pub const fn argb_alpha(argb: u32) -> u8 {
    argb_channel(argb, ArgbChannel::Alpha)
}

#[inline]
pub const fn argb_red(argb: u32) -> u8 {
    argb_channel(argb, ArgbChannel::Red)
}

#[inline]
pub const fn argb_green(argb: u32) -> u8 {
    argb_channel(argb, ArgbChannel::Green)
}

#[inline]
pub const fn argb_blue(argb: u32) -> u8 {
    argb_channel(argb, ArgbChannel::Blue)
}

/// Pack four channels into `0xAARRGGBB`.
#[inline]
pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> u32 {
    (a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32
}

// ============================================================================
// 32-bit ABGR
// ============================================================================

/// Convert ARGB to the 32-bit ABGR word stored in an RGBA8888 buffer.
///
/// Alpha stays in the most significant byte; red and blue trade places.
#[inline]
pub const fn argb_to_packed_32(argb: u32) -> u32 {
    (argb & 0xFF00_FF00) | (argb & 0x00FF_0000) >> 16 | (argb & 0x0000_00FF) << 16
}

/// Inverse of [`argb_to_packed_32`]. The swap is its own inverse.
#[inline]
pub const fn abgr_to_argb(abgr: u32) -> u32 {
    argb_to_packed_32(abgr)
}

// ============================================================================
// 16-bit 5-6-5
// ============================================================================

pub const RGB565_RED: u16 = 0xF800;
pub const RGB565_GREEN: u16 = 0x07E0;
pub const RGB565_BLUE: u16 = 0x001F;

/// Convert ARGB to RGB565 by dropping the low bits of each channel.
///
/// Alpha is discarded. No rounding or dithering.
#[inline]
pub const fn argb_to_packed_16(argb: u32) -> u16 {
    let r = (argb_red(argb) >> 3) as u16;
    let g = (argb_green(argb) >> 2) as u16;
    let b = (argb_blue(argb) >> 3) as u16;
    r << 11 | g << 5 | b
}

/// Widen RGB565 back to ARGB.
///
/// Channels are shifted into place with their low bits zero, so `0xFFFF`
/// decodes to `0xFFF8FCF8`. Alpha is always `0xFF`.
#[inline]
pub const fn packed_16_to_argb(rgb565: u16) -> u32 {
    let r = ((rgb565 & RGB565_RED) >> 8) as u8;
    let g = ((rgb565 & RGB565_GREEN) >> 3) as u8;
    let b = ((rgb565 & RGB565_BLUE) << 3) as u8;
    argb(0xFF, r, g, b)
}

// ============================================================================
// 8-bit alpha
// ============================================================================

/// The packed value for an A8 buffer: just the alpha channel.
#[inline]
pub const fn argb_alpha_as_packed_8(argb: u32) -> u8 {
    argb_alpha(argb)
}
