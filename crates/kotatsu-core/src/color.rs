use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// 24-bit RGB color packed as 0xRRGGBB.
///
/// Deserializes from either an integer (`0x0a0a20`) or a hex string
/// (`"#0a0a20"`, `"0a0a20"`). Always serializes as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "ColorRepr", into = "u32")]
pub struct Rgb24(u32);

/// Accepted config spellings of a color.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum ColorRepr {
    Packed(u32),
    Hex(String),
}

impl Rgb24 {
    pub const BLACK: Self = Self(0x000000);
    pub const WHITE: Self = Self(0xffffff);

    /// Build from a packed value. Bits above 24 are rejected.
    pub const fn new(packed: u32) -> Option<Self> {
        if packed > 0xffffff {
            None
        } else {
            Some(Self(packed))
        }
    }

    /// Keep the low 24 bits of `packed`.
    pub const fn masked(packed: u32) -> Self {
        Self(packed & 0xffffff)
    }

    pub const fn from_channels(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Parse `#RRGGBB` or `RRGGBB`.
    pub fn from_hex_str(s: &str) -> Result<Self, ConfigError> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ConfigError::InvalidColor(s.to_string()));
        }
        u32::from_str_radix(digits, 16)
            .map(Self)
            .map_err(|_| ConfigError::InvalidColor(s.to_string()))
    }

    pub const fn packed(self) -> u32 {
        self.0
    }

    pub const fn r(self) -> u8 {
        ((self.0 >> 16) & 0xff) as u8
    }

    pub const fn g(self) -> u8 {
        ((self.0 >> 8) & 0xff) as u8
    }

    pub const fn b(self) -> u8 {
        (self.0 & 0xff) as u8
    }

    /// Channel-wise linear blend, each channel rounded half away from zero.
    /// `t = 0` returns `self` unchanged.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let mix = |a: u8, b: u8| -> u8 {
            let a = a as f64;
            let b = b as f64;
            (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
        };
        Self::from_channels(
            mix(self.r(), other.r()),
            mix(self.g(), other.g()),
            mix(self.b(), other.b()),
        )
    }

    /// Channels scaled to [0, 1] for shader uniforms.
    pub fn to_unit_rgb(self) -> [f32; 3] {
        [
            self.r() as f32 / 255.0,
            self.g() as f32 / 255.0,
            self.b() as f32 / 255.0,
        ]
    }
}

impl TryFrom<ColorRepr> for Rgb24 {
    type Error = ConfigError;

    fn try_from(repr: ColorRepr) -> Result<Self, Self::Error> {
        match repr {
            ColorRepr::Packed(v) => {
                Self::new(v).ok_or_else(|| ConfigError::InvalidColor(format!("{v:#x}")))
            }
            ColorRepr::Hex(s) => Self::from_hex_str(&s),
        }
    }
}

impl From<Rgb24> for u32 {
    fn from(c: Rgb24) -> u32 {
        c.0
    }
}

impl std::fmt::Display for Rgb24 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

/// Sky gradient output: color at the zenith and at the horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPair {
    pub top: Rgb24,
    pub bottom: Rgb24,
}

impl ColorPair {
    pub const fn new(top: Rgb24, bottom: Rgb24) -> Self {
        Self { top, bottom }
    }

    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            top: self.top.lerp(other.top, t),
            bottom: self.bottom.lerp(other.bottom, t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channels() {
        let c = Rgb24::from_channels(0x12, 0x34, 0x56);
        assert_eq!(c.packed(), 0x123456);
        assert_eq!((c.r(), c.g(), c.b()), (0x12, 0x34, 0x56));
    }

    #[test]
    fn test_new_rejects_wide_values() {
        assert!(Rgb24::new(0xffffff).is_some());
        assert!(Rgb24::new(0x1000000).is_none());
    }

    #[test]
    fn test_hex_parse() {
        assert_eq!(Rgb24::from_hex_str("#0a0a20"), Ok(Rgb24::from_channels(10, 10, 32)));
        assert_eq!(Rgb24::from_hex_str("FF9966"), Ok(Rgb24::from_channels(255, 0x99, 0x66)));
        assert!(matches!(
            Rgb24::from_hex_str("#12345"),
            Err(ConfigError::InvalidColor(_))
        ));
        assert!(matches!(
            Rgb24::from_hex_str("#12345g"),
            Err(ConfigError::InvalidColor(_))
        ));
    }

    #[test]
    fn test_lerp_endpoints_exact() {
        let a = Rgb24::from_channels(10, 200, 33);
        let b = Rgb24::from_channels(255, 0, 34);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }

    #[test]
    fn test_lerp_midpoint_rounds_half_up() {
        // 10 + 245 * 0.5 = 132.5 -> 133
        let a = Rgb24::from_channels(10, 0, 0);
        let b = Rgb24::from_channels(255, 0, 0);
        assert_eq!(a.lerp(b, 0.5).r(), 133);
        // 255 - 245 * 0.5 = 132.5 -> 133
        assert_eq!(b.lerp(a, 0.5).r(), 133);
    }

    #[test]
    fn test_unit_rgb() {
        let [r, g, b] = Rgb24::WHITE.to_unit_rgb();
        assert_eq!((r, g, b), (1.0, 1.0, 1.0));
        assert_eq!(Rgb24::BLACK.to_unit_rgb(), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Rgb24::from_channels(0x0a, 0x0a, 0x20).to_string(), "#0a0a20");
    }
}
