//! Font description for the button label.
//!
//! The host resolves these to real faces when it rasterizes `DrawCommand::Text`.

/// Font family specification.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum FontFamily {
    /// Sans-serif font (default system sans-serif)
    #[default]
    SansSerif,
    /// Custom font by name
    Name(String),
}

/// Font weight on a 100-900 scale, matching CSS font-weight values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Normal/regular weight (400) - default
    pub const NORMAL: Self = Self(400);
    /// Bold weight (700)
    pub const BOLD: Self = Self(700);
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// Family, weight and size of a piece of text.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub family: FontFamily,
    pub weight: FontWeight,
    /// Size in logical pixels
    pub size: f32,
}

impl Font {
    pub const DEFAULT_SIZE: f32 = 12.0;

    pub fn new(family: FontFamily, size: f32) -> Self {
        Self {
            family,
            weight: FontWeight::NORMAL,
            size,
        }
    }

    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new(FontFamily::SansSerif, Self::DEFAULT_SIZE)
    }
}
