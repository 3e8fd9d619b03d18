use serde::{Deserialize, Serialize};

/// Linear RGB color with components in [0, 1]
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Default, bytemuck::Pod, bytemuck::Zeroable, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (leading `#` optional)
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .ok()
                .map(|v| v as f32 / 255.0)
        };

        Some(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    pub fn to_hex(&self) -> String {
        let [r, g, b, _] = self.to_rgba8(1.0);
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    /// Linear interpolation toward `other`; `t` is not clamped
    pub fn lerp(&self, other: Color, t: f32) -> Color {
        Color::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
        )
    }

    pub fn scale(&self, factor: f32) -> Color {
        Color::new(self.r * factor, self.g * factor, self.b * factor)
    }

    pub fn to_array(&self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    pub fn to_rgba8(&self, alpha: f32) -> [u8; 4] {
        let quantize = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [quantize(self.r), quantize(self.g), quantize(self.b), quantize(alpha)]
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_hex(&value).ok_or_else(|| format!("invalid hex color '{}'", value))
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// Two-stop gradient keyed by a normalized factor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorGradient {
    pub inner: Color,
    pub outer: Color,
}

impl ColorGradient {
    pub fn new(inner: Color, outer: Color) -> Self {
        Self { inner, outer }
    }

    /// Color at `t`, clamped to the segment between the endpoints
    pub fn interpolate(&self, t: f32) -> Color {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        self.inner.lerp(self.outer, t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_parses_channels() {
        let c = Color::from_hex("#f7d794").unwrap();
        assert!((c.r - 247.0 / 255.0).abs() < 1e-6);
        assert!((c.g - 215.0 / 255.0).abs() < 1e-6);
        assert!((c.b - 148.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_from_hex_without_prefix() {
        assert_eq!(Color::from_hex("ffffff"), Some(Color::WHITE));
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        assert!(Color::from_hex("#fff").is_none());
        assert!(Color::from_hex("#gggggg").is_none());
        assert!(Color::from_hex("#ééé").is_none());
    }

    #[test]
    fn test_hex_survives_serde() {
        let c: Color = serde_json::from_str("\"#915eff\"").unwrap();
        assert_eq!(serde_json::to_string(&c).unwrap(), "\"#915eff\"");
    }

    #[test]
    fn test_gradient_clamps_factor() {
        let g = ColorGradient::new(Color::BLACK, Color::WHITE);
        assert_eq!(g.interpolate(-1.0), Color::BLACK);
        assert_eq!(g.interpolate(2.0), Color::WHITE);
        assert_eq!(g.interpolate(f32::NAN), Color::BLACK);

        let mid = g.interpolate(0.5);
        assert!((mid.r - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_to_rgba8_saturates() {
        let c = Color::new(2.0, -1.0, 0.5);
        assert_eq!(c.to_rgba8(1.0), [255, 0, 128, 255]);
    }
}
