//! Comment emoji categories.

/// Emoji category attached to a comment.
///
/// The wire carries a fixed set of category names. An unrecognized name is
/// preserved verbatim in [`Emotion::Other`] so decoding never fails and the
/// original string survives a round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Emotion {
    /// `"sleeping"`.
    Sleeping,
    /// `"grinning"`.
    Grinning,
    /// `"neutral-face"`.
    NeutralFace,
    /// Any category this client does not recognize.
    Other(String),
}

impl Emotion {
    /// Parses a wire category name.
    pub fn from_wire(name: &str) -> Self {
        match name {
            "sleeping" => Emotion::Sleeping,
            "grinning" => Emotion::Grinning,
            "neutral-face" => Emotion::NeutralFace,
            other => Emotion::Other(other.to_string()),
        }
    }

    /// Returns the wire category name.
    pub fn wire_name(&self) -> &str {
        match self {
            Emotion::Sleeping => "sleeping",
            Emotion::Grinning => "grinning",
            Emotion::NeutralFace => "neutral-face",
            Emotion::Other(name) => name,
        }
    }

    /// Returns the display glyph for this category.
    pub fn glyph(&self) -> &str {
        match self {
            Emotion::Sleeping => "\u{1F634}",
            Emotion::Grinning => "\u{1F600}",
            Emotion::NeutralFace => "\u{1F610}",
            Emotion::Other(_) => "\u{2753}",
        }
    }
}
