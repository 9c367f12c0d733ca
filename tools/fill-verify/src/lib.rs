// Randomized verification of the pixfill engine.
//
// Builds random scenes over a small palette, fills them with the engine and
// with a plain breadth-first reference fill, and compares the results
// pixel by pixel.

use std::collections::VecDeque;

use pixfill::bitmap::{Bitmap, BitmapFormat};
use pixfill::color::argb;
use pixfill::FillError;
use rand::Rng;

/// Largest palette a scene may use. Index `MAX_COLORS` is reserved for the
/// fill color.
pub const MAX_COLORS: u8 = 15;

// ============================================================================
// Scenes
// ============================================================================

/// A grid of palette indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    /// Palette index per pixel, row-major, top-to-bottom.
    pub cells: Vec<u8>,
}

impl Scene {
    pub fn cell(&self, x: u32, y: u32) -> u8 {
        self.cells[(y * self.width + x) as usize]
    }

    /// Text rendering, one hex digit per pixel.
    pub fn to_text(&self) -> String {
        let mut s = String::with_capacity(((self.width + 1) * self.height) as usize);
        for row in self.cells.chunks(self.width as usize) {
            for &c in row {
                s.push(char::from_digit(c as u32, 16).unwrap_or('?'));
            }
            s.push('\n');
        }
        s
    }
}

/// Random scene with `colors` palette entries.
pub fn random_scene<R: Rng>(rng: &mut R, width: u32, height: u32, colors: u8) -> Scene {
    let colors = colors.clamp(1, MAX_COLORS);
    let cells = (0..width * height)
        .map(|_| rng.random_range(0..colors))
        .collect();
    Scene {
        width,
        height,
        cells,
    }
}

/// ARGB color of a palette index.
///
/// Entries stay distinct after encoding to every fillable format: alpha is
/// distinct for A8 and red keeps distinct top bits for RGB565.
pub fn palette_argb(index: u8) -> u32 {
    argb(index << 4 | 0x0F, index << 3, index << 2, index << 3)
}

/// Encode a scene into a bitmap of the given format.
pub fn build_bitmap(scene: &Scene, format: BitmapFormat) -> Result<Bitmap, FillError> {
    let mut bmp = Bitmap::new(scene.width, scene.height, format)?;
    for y in 0..scene.height {
        for x in 0..scene.width {
            bmp.set_pixel_argb(x, y, palette_argb(scene.cell(x, y)))?;
        }
    }
    Ok(bmp)
}

/// Fill a bitmap built from `scene` with the engine.
pub fn engine_fill(
    scene: &Scene,
    format: BitmapFormat,
    x: u32,
    y: u32,
    new_index: u8,
) -> Result<Bitmap, FillError> {
    let mut bmp = build_bitmap(scene, format)?;
    bmp.fill(x as i32, y as i32, palette_argb(new_index))?;
    Ok(bmp)
}

/// Map a bitmap back to palette indices. Pixels matching no palette entry
/// become `u8::MAX`, which renders as `?`.
pub fn scene_from_bitmap(bmp: &Bitmap) -> Result<Scene, FillError> {
    // Decoded palette as the format stores it, so lossy formats compare equal.
    let mut decoded = Vec::with_capacity(MAX_COLORS as usize + 1);
    for index in 0..=MAX_COLORS {
        let mut swatch = Bitmap::new(1, 1, bmp.format())?;
        swatch.set_pixel_argb(0, 0, palette_argb(index))?;
        decoded.push(swatch.pixel_argb(0, 0)?);
    }
    let mut cells = Vec::with_capacity((bmp.width() * bmp.height()) as usize);
    for y in 0..bmp.height() {
        for x in 0..bmp.width() {
            let c = bmp.pixel_argb(x, y)?;
            let index = decoded.iter().position(|&d| d == c).map_or(u8::MAX, |i| i as u8);
            cells.push(index);
        }
    }
    Ok(Scene {
        width: bmp.width(),
        height: bmp.height(),
        cells,
    })
}

// ============================================================================
// Reference fill
// ============================================================================

/// Breadth-first 4-connected fill over palette indices.
pub fn reference_fill(scene: &Scene, x: u32, y: u32, new_index: u8) -> Scene {
    let mut out = scene.clone();
    let old = scene.cell(x, y);
    if old == new_index {
        return out;
    }
    let w = scene.width as usize;
    let h = scene.height as usize;
    let mut queue = VecDeque::new();
    let start = y as usize * w + x as usize;
    out.cells[start] = new_index;
    queue.push_back((x as usize, y as usize));
    while let Some((cx, cy)) = queue.pop_front() {
        let mut visit = |nx: usize, ny: usize, out: &mut Scene| {
            let i = ny * w + nx;
            if out.cells[i] == old {
                out.cells[i] = new_index;
                queue.push_back((nx, ny));
            }
        };
        if cx > 0 {
            visit(cx - 1, cy, &mut out);
        }
        if cx + 1 < w {
            visit(cx + 1, cy, &mut out);
        }
        if cy > 0 {
            visit(cx, cy - 1, &mut out);
        }
        if cy + 1 < h {
            visit(cx, cy + 1, &mut out);
        }
    }
    out
}

// ============================================================================
// Comparison
// ============================================================================

/// A single mismatching pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffInfo {
    pub x: u32,
    pub y: u32,
    pub expected: u32,
    pub actual: u32,
}

/// Outcome of one engine-vs-reference run.
#[derive(Debug, Clone)]
pub struct CompareResult {
    pub format: BitmapFormat,
    pub seed: (u32, u32),
    pub total_pixels: u64,
    pub different_pixels: u64,
    pub first_diff: Option<DiffInfo>,
}

impl CompareResult {
    pub fn identical(&self) -> bool {
        self.different_pixels == 0
    }
}

impl std::fmt::Display for CompareResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.identical() {
            write!(
                f,
                "IDENTICAL: {:?} seed {:?}, {} pixels match",
                self.format, self.seed, self.total_pixels
            )
        } else {
            write!(
                f,
                "DIFFERENT: {:?} seed {:?}, {}/{} pixels differ",
                self.format, self.seed, self.different_pixels, self.total_pixels
            )?;
            if let Some(ref d) = self.first_diff {
                write!(
                    f,
                    "\n  First diff at ({}, {}): expected={:#010x} actual={:#010x}",
                    d.x, d.y, d.expected, d.actual
                )?;
            }
            Ok(())
        }
    }
}

/// Compare two bitmaps of identical shape, pixel by pixel in ARGB.
pub fn compare_bitmaps(expected: &Bitmap, actual: &Bitmap) -> Result<(u64, Option<DiffInfo>), FillError> {
    let mut different = 0u64;
    let mut first = None;
    for y in 0..expected.height() {
        for x in 0..expected.width() {
            let e = expected.pixel_argb(x, y)?;
            let a = actual.pixel_argb(x, y)?;
            if e != a {
                different += 1;
                if first.is_none() {
                    first = Some(DiffInfo {
                        x,
                        y,
                        expected: e,
                        actual: a,
                    });
                }
            }
        }
    }
    Ok((different, first))
}

/// Fill `scene` at `(x, y)` with both fills and compare.
pub fn verify_scene(
    scene: &Scene,
    format: BitmapFormat,
    x: u32,
    y: u32,
    new_index: u8,
) -> Result<CompareResult, FillError> {
    let actual = engine_fill(scene, format, x, y, new_index)?;
    let expected = build_bitmap(&reference_fill(scene, x, y, new_index), format)?;
    let (different_pixels, first_diff) = compare_bitmaps(&expected, &actual)?;
    Ok(CompareResult {
        format,
        seed: (x, y),
        total_pixels: scene.width as u64 * scene.height as u64,
        different_pixels,
        first_diff,
    })
}

/// One random scene, seed and fill color.
pub fn verify_random<R: Rng>(
    rng: &mut R,
    format: BitmapFormat,
    width: u32,
    height: u32,
    colors: u8,
) -> Result<CompareResult, FillError> {
    let scene = random_scene(rng, width, height, colors);
    let x = rng.random_range(0..width);
    let y = rng.random_range(0..height);
    let new_index = rng.random_range(0..=MAX_COLORS);
    verify_scene(&scene, format, x, y, new_index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_palette_distinct_per_format() {
        use pixfill::color::{argb_alpha_as_packed_8, argb_to_packed_16, argb_to_packed_32};
        for a in 0..=MAX_COLORS {
            for b in 0..a {
                let (ca, cb) = (palette_argb(a), palette_argb(b));
                assert_ne!(argb_to_packed_32(ca), argb_to_packed_32(cb));
                assert_ne!(argb_to_packed_16(ca), argb_to_packed_16(cb));
                assert_ne!(argb_alpha_as_packed_8(ca), argb_alpha_as_packed_8(cb));
            }
        }
    }

    #[test]
    fn test_reference_fill() {
        let scene = Scene {
            width: 3,
            height: 3,
            cells: vec![0, 1, 0, 0, 1, 0, 0, 0, 0],
        };
        let out = reference_fill(&scene, 2, 0, 4);
        assert_eq!(out.cells, vec![4, 1, 4, 4, 1, 4, 4, 4, 4]);
        assert_eq!(out.to_text(), "414\n414\n444\n");
    }

    #[test]
    fn test_scene_from_engine_fill() {
        let scene = Scene {
            width: 3,
            height: 2,
            cells: vec![2, 5, 2, 2, 5, 5],
        };
        for format in [
            BitmapFormat::Rgba8888,
            BitmapFormat::Rgb565,
            BitmapFormat::Alpha8,
        ] {
            let bmp = engine_fill(&scene, format, 0, 1, 9).unwrap();
            let out = scene_from_bitmap(&bmp).unwrap();
            assert_eq!(out.to_text(), "952\n955\n", "{:?}", format);
        }
    }

    #[test]
    fn test_random_scenes_match_reference() {
        let mut rng = SmallRng::seed_from_u64(0x5EED);
        for format in [
            BitmapFormat::Rgba8888,
            BitmapFormat::Rgb565,
            BitmapFormat::Alpha8,
        ] {
            for _ in 0..50 {
                let r = verify_random(&mut rng, format, 12, 9, 3).unwrap();
                assert!(r.identical(), "{}", r);
            }
        }
    }
}
