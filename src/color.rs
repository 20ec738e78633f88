//! Color types and HSV to RGB conversion.
//!
//! All channels are 0-255 with hue on a 0-255 circle, matching
//! `smart_leds::hsv::Hsv`.

use smart_leds::{RGB8, hsv::Hsv as HSV};

pub type Rgb = RGB8;
pub type Hsv = HSV;

/// All three duty cycles off.
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Convert HSV to RGB using the standard cone-model sector table.
///
/// Zero saturation yields exactly `(v, v, v)`; the conversion is periodic in
/// hue with period 256.
#[allow(clippy::cast_possible_truncation, clippy::many_single_char_names)]
pub fn hsv2rgb(hsv: Hsv) -> Rgb {
    let Hsv { hue, sat, val } = hsv;
    if sat == 0 {
        return Rgb { r: val, g: val, b: val };
    }

    // Sector 0-5 across the wheel, remainder as the in-sector fraction
    // scaled to 0-255.
    let scaled = u16::from(hue) * 6;
    let sector = scaled >> 8;
    let f = scaled & 0xFF;

    let v = u16::from(val);
    let s = u16::from(sat);
    let p = (v * (255 - s) / 255) as u8;
    let q = (v * (255 - f * s / 255) / 255) as u8;
    let t = (v * (255 - (255 - f) * s / 255) / 255) as u8;

    match sector {
        0 => Rgb { r: val, g: t, b: p },
        1 => Rgb { r: q, g: val, b: p },
        2 => Rgb { r: p, g: val, b: t },
        3 => Rgb { r: p, g: q, b: val },
        4 => Rgb { r: t, g: p, b: val },
        _ => Rgb { r: val, g: p, b: q },
    }
}
