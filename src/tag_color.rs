//! Deterministic tag colors and hover-state variants.
//!
//! Maps a tag name to a background color from a curated palette using a
//! simple hash, and derives the hover color by shifting HSL lightness.

use egui::Color32;

/// How far [`hover_color`] moves the HSL lightness channel.
pub const HOVER_LIGHTNESS_SHIFT: f32 = 0.10;

/// Curated palette of 16 tag colors.
///
/// All entries are dark enough to stay readable behind near-white text, and
/// sit far enough from pure black/white that the hover shift never clamps.
const PALETTE: [Color32; 16] = [
    Color32::from_rgb(0xb7, 0x1c, 0x3a), // crimson
    Color32::from_rgb(0xc2, 0x47, 0x2b), // burnt orange
    Color32::from_rgb(0xb8, 0x86, 0x0b), // goldenrod
    Color32::from_rgb(0x2e, 0x7d, 0x32), // green
    Color32::from_rgb(0x00, 0x69, 0x5c), // teal
    Color32::from_rgb(0x15, 0x65, 0xc0), // blue
    Color32::from_rgb(0x45, 0x27, 0xa0), // deep purple
    Color32::from_rgb(0x8e, 0x24, 0xaa), // magenta
    Color32::from_rgb(0xad, 0x14, 0x57), // pink
    Color32::from_rgb(0x00, 0x83, 0x8f), // cyan
    Color32::from_rgb(0x55, 0x8b, 0x2f), // olive
    Color32::from_rgb(0x6d, 0x4c, 0x41), // brown
    Color32::from_rgb(0x37, 0x47, 0x4f), // blue grey
    Color32::from_rgb(0x5e, 0x35, 0xb1), // violet
    Color32::from_rgb(0xd8, 0x43, 0x15), // deep orange
    Color32::from_rgb(0x28, 0x35, 0x93), // indigo
];

/// Return a deterministic background color for a tag name.
///
/// Hashing is case-insensitive, so `UI` and `ui` share a color. The empty
/// string is valid input and maps to a palette entry like any other name.
pub fn color_from_name(name: &str) -> Color32 {
    let hash = djb2(&name.to_lowercase());
    PALETTE[hash as usize % PALETTE.len()]
}

/// Background to paint while the pointer is over a chip. Dark themes darken
/// the base color, light themes lighten it.
pub fn hover_color(base: Color32, dark_mode: bool) -> Color32 {
    if dark_mode {
        darken(base, HOVER_LIGHTNESS_SHIFT)
    } else {
        lighten(base, HOVER_LIGHTNESS_SHIFT)
    }
}

/// Raise HSL lightness by `amount`, clamped to the valid range.
pub fn lighten(color: Color32, amount: f32) -> Color32 {
    shift_lightness(color, amount.abs())
}

/// Lower HSL lightness by `amount`, clamped to the valid range.
pub fn darken(color: Color32, amount: f32) -> Color32 {
    shift_lightness(color, -amount.abs())
}

/// djb2 hash (32-bit) for short strings.
fn djb2(text: &str) -> u32 {
    let mut hash: u32 = 5381;
    for byte in text.bytes() {
        hash = hash.wrapping_mul(33).wrapping_add(u32::from(byte));
    }
    hash
}

fn shift_lightness(color: Color32, delta: f32) -> Color32 {
    let (h, s, l) = rgb_to_hsl(color);
    hsl_to_rgb(h, s, (l + delta).clamp(0.0, 1.0))
}

/// Convert to HSL: hue in degrees (0-360), saturation and lightness in 0.0-1.0.
fn rgb_to_hsl(color: Color32) -> (f32, f32, f32) {
    let r = color.r() as f32 / 255.0;
    let g = color.g() as f32 / 255.0;
    let b = color.b() as f32 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return (0.0, 0.0, l); // Achromatic.
    }

    let d = max - min;
    let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
    let h = if max == r {
        60.0 * ((g - b) / d).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / d + 2.0)
    } else {
        60.0 * ((r - g) / d + 4.0)
    };

    (h, s, l)
}

fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Color32 {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    Color32::from_rgb(
        ((r + m) * 255.0).round() as u8,
        ((g + m) * 255.0).round() as u8,
        ((b + m) * 255.0).round() as u8,
    )
}
