// THEORY:
// The `ops` module is the core of the crate. Both operations share one
// skeleton: resolve the color and image arguments, flatten the image to RGBA8,
// make a single pass over the pixels, and apply a rewrite rule gated by the
// tolerance test.
//
// Key architectural principles:
// 1.  **Tolerance gate**: a pixel matches the reference color only when every
//     channel's signed delta has absolute value <= `delta_rank`. Deltas are
//     computed per channel, in `i16`, so a 0-vs-255 comparison cannot wrap.
// 2.  **Offset preservation**: `replace_color` does not paint matches with a
//     flat target color. It translates each pixel's offset from the source
//     color onto the target color, which keeps anti-aliased edges and soft
//     gradients intact. Shifted channels saturate into `0..=255`.
// 3.  **Dimension stability**: both operations return a buffer with the
//     input's width and height. Only pixel values change; non-matching pixels
//     come back byte-identical.

use image::{Rgba, RgbaImage};

use crate::color::{ColorSpec, Rgb};
use crate::error::Result;
use crate::input::ImageInput;

/// Per-channel tolerance used when the caller has no stronger opinion.
pub const DEFAULT_DELTA_RANK: u8 = 10;

/// Per-channel signed deltas between a pixel and a reference color.
fn channel_deltas(pixel: &Rgba<u8>, color: Rgb) -> (i16, i16, i16) {
    (
        pixel.0[0] as i16 - color.red as i16,
        pixel.0[1] as i16 - color.green as i16,
        pixel.0[2] as i16 - color.blue as i16,
    )
}

fn within_rank((dr, dg, db): (i16, i16, i16), delta_rank: u8) -> bool {
    let rank = delta_rank as i16;
    dr.abs() <= rank && dg.abs() <= rank && db.abs() <= rank
}

/// Adds a signed shift to a channel, saturating into the byte range.
fn shift_channel(base: u8, delta: i16) -> u8 {
    (base as i16 + delta).clamp(0, 255) as u8
}

/// Replaces every pixel within `delta_rank` of `from` with `to`, shifted by
/// the pixel's own offset from `from`. Alpha is untouched.
///
/// A pixel exactly equal to `from` maps exactly to `to`; a near-match keeps
/// its distance, so shading around the source color survives the swap.
/// Returns the rewritten RGBA buffer.
pub fn replace_color(
    img: impl Into<ImageInput>,
    from: impl Into<ColorSpec>,
    to: impl Into<ColorSpec>,
    delta_rank: u8,
) -> Result<RgbaImage> {
    let from = from.into().resolve()?;
    let to = to.into().resolve()?;
    let mut canvas = img.into().decode()?.to_rgba8();

    for pixel in canvas.pixels_mut() {
        let deltas = channel_deltas(pixel, from);
        if within_rank(deltas, delta_rank) {
            *pixel = Rgba([
                shift_channel(to.red, deltas.0),
                shift_channel(to.green, deltas.1),
                shift_channel(to.blue, deltas.2),
                pixel.0[3],
            ]);
        }
    }

    Ok(canvas)
}

/// Rewrites every pixel within `delta_rank` of `color` to fully transparent
/// white `(255, 255, 255, 0)`. Returns the rewritten RGBA buffer.
pub fn make_transparent(
    img: impl Into<ImageInput>,
    color: impl Into<ColorSpec>,
    delta_rank: u8,
) -> Result<RgbaImage> {
    let color = color.into().resolve()?;
    let mut canvas = img.into().decode()?.to_rgba8();

    for pixel in canvas.pixels_mut() {
        if within_rank(channel_deltas(pixel, color), delta_rank) {
            *pixel = Rgba([255, 255, 255, 0]);
        }
    }

    Ok(canvas)
}
