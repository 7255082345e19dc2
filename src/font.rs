use crate::layout::Measure;
use crate::{LayoutError, Px};
use owned_ttf_parser::{AsFaceRef, OwnedFace};

/// A parsed font object. Fonts can be TTF or OTF fonts, and are used purely as
/// a source of glyph metrics: the rasterizer that ultimately draws the laid-out
/// lines is expected to be bound to the same font face and size.
///
/// Typically, fonts are referred to throughout user applications by their
/// [`Id`](id_arena::Id) within a [`Room`](crate::Room), and not by direct
/// references.
pub struct Font {
    pub face: OwnedFace,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, LayoutError> {
        let face = OwnedFace::from_vec(bytes, 0)?;

        Ok(Font { face })
    }

    /// Calculate the ascent (distance from the baseline to the top of the font) for the given font size
    pub fn ascent(&self, size: Px) -> Px {
        let scaling: Px = size / self.face.as_face_ref().units_per_em() as f32;
        scaling * self.face.as_face_ref().ascender() as f32
    }

    /// Calculate the descent (distance from the baseline to the bottom of the font) for the given font size.
    /// Note: this is usually negative
    pub fn descent(&self, size: Px) -> Px {
        let scaling: Px = size / self.face.as_face_ref().units_per_em() as f32;
        scaling * self.face.as_face_ref().descender() as f32
    }

    /// Calculate the leading (extra space between lines) for the given font size
    pub fn leading(&self, size: Px) -> Px {
        let scaling: Px = size / self.face.as_face_ref().units_per_em() as f32;
        scaling * self.face.as_face_ref().line_gap() as f32
    }

    /// Calculate the default line height of the font for the given size. The returned value is
    /// how much to vertically offset a second row of text below a first row of text.
    pub fn line_height(&self, size: Px) -> Px {
        let scaling: Px = size / self.face.as_face_ref().units_per_em() as f32;
        let leading: Px = scaling * self.face.as_face_ref().line_gap() as f32;
        let ascent: Px = scaling * self.face.as_face_ref().ascender() as f32;
        let descent: Px = scaling * self.face.as_face_ref().descender() as f32;
        leading + ascent - descent
    }

    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        self.face.as_face_ref().glyph_index(ch).map(|i| i.0)
    }

    pub fn replacement_glyph_id(&self) -> Option<u16> {
        self.face.as_face_ref().glyph_index('\u{FFFD}').map(|i| i.0)
    }

    /// Calculate the width of a given string of text at the given font size, as the
    /// sum of the scaled horizontal advances of its glyphs. Characters without a
    /// glyph in the face fall back to the replacement glyph, if the face has one.
    pub fn width_of_text(&self, text: &str, size: Px) -> Px {
        let scaling = size / self.face.as_face_ref().units_per_em() as f32;
        text.chars()
            .filter_map(|ch| self.glyph_id(ch).or_else(|| self.replacement_glyph_id()))
            .map(|gid| {
                scaling
                    * self
                        .face
                        .as_face_ref()
                        .glyph_hor_advance(owned_ttf_parser::GlyphId(gid))
                        .unwrap_or_default() as f32
            })
            .sum()
    }

    /// Bind this font to a size, yielding a [`Measure`] implementation suitable
    /// for handing to [`wrap_text`](crate::layout::wrap_text)
    pub fn sized(&self, size: Px) -> SizedFont<'_> {
        SizedFont { font: self, size }
    }
}

/// A font bound to a specific size, measuring candidate lines via
/// [`Font::width_of_text`]
#[derive(Copy, Clone)]
pub struct SizedFont<'f> {
    pub font: &'f Font,
    pub size: Px,
}

impl Measure for SizedFont<'_> {
    fn width(&self, candidate: &str) -> Px {
        self.font.width_of_text(candidate, self.size)
    }
}
