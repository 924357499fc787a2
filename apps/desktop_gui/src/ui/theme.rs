//! Background palette: random hues at a fixed saturation/lightness, and the
//! eased cross-fade between them.

use std::fmt;

use eframe::egui::Color32;
use rand::Rng;

pub const BACKGROUND_SATURATION: f32 = 0.70;
pub const BACKGROUND_LIGHTNESS: f32 = 0.80;
pub const BACKGROUND_FADE_SECS: f32 = 0.5;

pub const CARD_FILL: Color32 = Color32::from_rgba_premultiplied(230, 230, 230, 230);
pub const HEADING_TEXT: Color32 = Color32::from_rgb(31, 41, 55);
pub const BODY_TEXT: Color32 = Color32::from_rgb(55, 65, 81);
pub const ERROR_TEXT: Color32 = Color32::from_rgb(239, 68, 68);
pub const SPINNER: Color32 = Color32::from_rgb(107, 114, 128);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub hue: u16,
    pub saturation: f32,
    pub lightness: f32,
}

impl Hsl {
    pub fn background(hue: u16) -> Self {
        Self {
            hue: hue % 360,
            saturation: BACKGROUND_SATURATION,
            lightness: BACKGROUND_LIGHTNESS,
        }
    }

    /// Uniform over the 360 integer hues.
    pub fn random_background<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::background(rng.gen_range(0..360))
    }

    pub fn to_color32(self) -> Color32 {
        let s = self.saturation.clamp(0.0, 1.0);
        let l = self.lightness.clamp(0.0, 1.0);
        let h = f32::from(self.hue % 360) / 60.0;

        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
        let (r, g, b) = match h as u8 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };
        let m = l - chroma / 2.0;
        let to_u8 = |v: f32| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Color32::from_rgb(to_u8(r), to_u8(g), to_u8(b))
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue,
            (self.saturation * 100.0).round(),
            (self.lightness * 100.0).round()
        )
    }
}

pub fn lerp_color(from: Color32, to: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| -> u8 {
        let (a, b) = (f32::from(a), f32::from(b));
        (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
    };
    Color32::from_rgb(mix(from.r(), to.r()), mix(from.g(), to.g()), mix(from.b(), to.b()))
}

#[derive(Debug, Clone, Copy)]
pub struct ColorTransition {
    from: Color32,
    to: Color32,
    started_at: f64,
}

impl ColorTransition {
    pub fn settled(color: Color32) -> Self {
        Self {
            from: color,
            to: color,
            started_at: f64::NEG_INFINITY,
        }
    }

    /// Starts easing toward `to` from wherever the fade currently is.
    pub fn retarget(&mut self, to: Color32, now: f64) {
        if to == self.to {
            return;
        }
        self.from = self.sample(now);
        self.to = to;
        self.started_at = now;
    }

    pub fn sample(&self, now: f64) -> Color32 {
        lerp_color(self.from, self.to, self.progress(now))
    }

    pub fn is_settled(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }

    fn progress(&self, now: f64) -> f32 {
        let elapsed = (now - self.started_at).max(0.0) as f32;
        (elapsed / BACKGROUND_FADE_SECS).min(1.0)
    }
}

#[cfg(test)]
#[path = "tests/theme_tests.rs"]
mod tests;
