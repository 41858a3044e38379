//! Color helpers for demo cell content.
//!
//! Colors are emitted as CSS strings, directly usable as a cell background.

/// A CSS color string (e.g., "rgb(12,200,34)")
pub type CssColor = String;

/// RGB color with u8 components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS functional notation without spaces, `rgb(r,g,b)`.
    pub fn to_css(self) -> CssColor {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }

    /// Convert to CSS hex string (#RRGGBB).
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Sine-wave color cycle: each channel is
/// `round(sin(frequency * i + phase) * width + center)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rainbow {
    pub frequency: [f64; 3],
    pub phase: [f64; 3],
    pub center: f64,
    pub width: f64,
}

impl Default for Rainbow {
    /// The demo palette: slow cycle, channels a third of a turn apart.
    fn default() -> Self {
        Self {
            frequency: [0.05, 0.05, 0.05],
            phase: [0.0, 2.0, 4.0],
            center: 128.0,
            width: 127.0,
        }
    }
}

impl Rainbow {
    /// Color at step `i` of the cycle.
    pub fn at(&self, i: f64) -> Rgb {
        let [fr, fg, fb] = self.frequency;
        let [pr, pg, pb] = self.phase;
        Rgb::new(
            self.channel(fr, pr, i),
            self.channel(fg, pg, i),
            self.channel(fb, pb, i),
        )
    }

    /// Color of grid cell (`x`, `y`); diagonals share a color.
    pub fn cell(&self, x: u32, y: u32) -> Rgb {
        self.at(f64::from(x) + f64::from(y))
    }

    /// The cast is safe because we clamp to [0, 255] before converting.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn channel(&self, frequency: f64, phase: f64, i: f64) -> u8 {
        let value = ((frequency * i + phase).sin() * self.width + self.center).round();
        value.clamp(0.0, 255.0) as u8
    }
}
