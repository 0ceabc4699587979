//! Shade helpers on `0xRRGGBB` colours.
//!
//! Lightness is shifted in HSL space on the straight sRGB values, so hue and
//! saturation stay put while the shade changes.

/// Raises HSL lightness by `amount` percentage points (clamped to 100%).
pub fn lighten(rgb: u32, amount: f32) -> u32 {
    shift_lightness(rgb, amount / 100.0)
}

/// Lowers HSL lightness by `amount` percentage points (clamped to 0%).
pub fn darken(rgb: u32, amount: f32) -> u32 {
    shift_lightness(rgb, -amount / 100.0)
}

/// Splits `0xRRGGBB` into bytes.
#[inline]
pub fn channels(rgb: u32) -> [u8; 3] {
    [(rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8]
}

#[inline]
pub fn pack(r: u8, g: u8, b: u8) -> u32 {
    (r as u32) << 16 | (g as u32) << 8 | b as u32
}

fn shift_lightness(rgb: u32, delta: f32) -> u32 {
    let [r, g, b] = channels(rgb);
    let (h, s, l) = rgb_to_hsl(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0);
    let (r, g, b) = hsl_to_rgb(h, s, (l + delta).clamp(0.0, 1.0));
    pack(to_byte(r), to_byte(g), to_byte(b))
}

/// Unit float channel to `0..=255`, clamped.
#[inline]
pub(crate) fn to_byte(c: f32) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// `h` in `[0, 1)` turns; `s`, `l` in `[0, 1]`.
fn rgb_to_hsl(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return (0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    (h / 6.0, s, l)
}

fn hsl_to_rgb(h: f32, s: f32, l: f32) -> (f32, f32, f32) {
    if s == 0.0 {
        return (l, l, l);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    (
        hue_to_channel(p, q, h + 1.0 / 3.0),
        hue_to_channel(p, q, h),
        hue_to_channel(p, q, h - 1.0 / 3.0),
    )
}

fn hue_to_channel(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_byte_clamps_and_rounds() {
        assert_eq!(to_byte(-0.2), 0);
        assert_eq!(to_byte(0.5), 128);
        assert_eq!(to_byte(1.5), 255);
    }

    #[test]
    fn hsl_round_trip_keeps_colour() {
        for rgb in [0x4A5568, 0xB91C1C, 0xD4A574, 0x8B9DC3, 0x000000, 0xFFFFFF] {
            assert_eq!(shift_lightness(rgb, 0.0), rgb, "{rgb:06X}");
        }
    }

    #[test]
    fn grey_shifts_evenly() {
        // 20 points of lightness is 51 steps per channel.
        assert_eq!(lighten(0x808080, 20.0), 0xB3B3B3);
        assert_eq!(darken(0x808080, 20.0), 0x4D4D4D);
    }

    #[test]
    fn clamps_at_black_and_white() {
        assert_eq!(lighten(0xF5F5F0, 50.0), 0xFFFFFF);
        assert_eq!(darken(0x2D3748, 80.0), 0x000000);
    }

    #[test]
    fn darken_keeps_hue() {
        let seat = 0xB91C1C;
        let [r, g, b] = channels(darken(seat, 15.0));
        assert!(r > g && g.abs_diff(b) <= 1, "still a red shade: {r} {g} {b}");
        assert!(r < 0xB9);
    }

    #[test]
    fn pack_and_channels_agree() {
        assert_eq!(channels(0x123456), [0x12, 0x34, 0x56]);
        assert_eq!(pack(0x12, 0x34, 0x56), 0x123456);
    }
}
