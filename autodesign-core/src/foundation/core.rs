use crate::foundation::error::{AutodesignError, AutodesignResult};

/// Straight (non-premultiplied) 8-bit RGB color.
///
/// Serialized as a `[r, g, b]` JSON array, the shape used by the run config file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Build a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` or `RRGGBB` (case-insensitive).
    pub fn from_hex(s: &str) -> AutodesignResult<Self> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        if s.len() != 6 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(AutodesignError::invalid_parameter(format!(
                "invalid HEX color format \"{s}\" (expected #RRGGBB)"
            )));
        }

        fn hex_byte(pair: &str) -> AutodesignResult<u8> {
            u8::from_str_radix(pair, 16).map_err(|_| {
                AutodesignError::invalid_parameter(format!("invalid hex byte \"{pair}\""))
            })
        }

        Ok(Self::new(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
        ))
    }

    /// Format as lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Channels as an array in `r, g, b` order.
    pub fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Fully opaque `image` pixel of this color.
    pub fn to_rgba(self) -> image::Rgba<u8> {
        image::Rgba([self.r, self.g, self.b, 255])
    }
}

impl From<[u8; 3]> for Rgb8 {
    fn from(v: [u8; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl From<Rgb8> for [u8; 3] {
    fn from(c: Rgb8) -> Self {
        c.channels()
    }
}

impl std::str::FromStr for Rgb8 {
    type Err = AutodesignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// Gradient border parameters: outer `start` color, inner `end` color and ring count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BorderSpec {
    /// Color of the outermost ring.
    pub start: Rgb8,
    /// Color of the innermost ring and of the poster seat.
    pub end: Rgb8,
    /// Border thickness in pixels (>= 1).
    pub thickness_px: u32,
}

impl BorderSpec {
    /// Build a validated border spec.
    pub fn new(start: Rgb8, end: Rgb8, thickness_px: u32) -> AutodesignResult<Self> {
        let spec = Self {
            start,
            end,
            thickness_px,
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Check `thickness_px >= 1`.
    pub fn validate(&self) -> AutodesignResult<()> {
        if self.thickness_px == 0 {
            return Err(AutodesignError::invalid_parameter(
                "border thickness must be >= 1px",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
