use crate::font::Font;
use crate::layout::{place_lines, wrap_text, LineSpan, Margins, Measure};
use crate::rect::Rect;
use crate::units::Px;
use crate::LayoutError;
use id_arena::Id;

/// Horizontal anchoring for lines on a panel, with 2-D canvas `textAlign`
/// semantics: the anchor x-coordinate in each emitted [`LineSpan`] is the
/// start, centre, or end of the drawn line.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Align {
    Left,
    #[default]
    Center,
    Right,
}

/// The font a panel's text is set in: an [`Id`] into the owning
/// [`Room`](crate::Room)'s font arena, plus a size
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PanelFont {
    pub id: Id<Font>,
    pub size: Px,
}

/// A fixed-size texture surface with a block of text to be wrapped and drawn
/// onto it: a wall plaque, a floor inscription, a button face. The panel
/// describes *what* goes where; rasterizing the resulting [`PanelLayout`] is
/// the renderer's job.
///
/// Each panel owns its font binding, so panels set in different faces and
/// sizes can live in one [`Room`](crate::Room) and lay out in one pass.
/// [`Panel::layout`] itself only needs a [`Measure`], which
/// [`Room::layout_panel`](crate::Room::layout_panel) resolves from the
/// binding.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    /// Texture dimensions as (width, height)
    pub extent: (Px, Px),
    /// Inset from the texture edges; text wraps within what remains
    pub padding: Margins,
    /// The raw copy, with `'\n'` as a hard line break
    pub text: String,
    pub font: PanelFont,
    pub align: Align,
    /// Baseline-to-baseline advance between successive lines
    pub leading: Px,
    /// Offset of the first line's baseline from the top of the content box
    pub first_baseline: Px,
}

impl Panel {
    /// Create a panel with centred text, no padding, and a vertical rhythm
    /// derived from the font size
    pub fn new(extent: (Px, Px), text: impl Into<String>, font: PanelFont) -> Panel {
        Panel {
            extent,
            padding: Margins::empty(),
            text: text.into(),
            font,
            align: Align::Center,
            leading: font.size * (4.0 / 3.0),
            first_baseline: font.size * 2.0,
        }
    }

    pub fn with_padding(mut self, padding: Margins) -> Panel {
        self.padding = padding;
        self
    }

    pub fn with_align(mut self, align: Align) -> Panel {
        self.align = align;
        self
    }

    pub fn with_leading(mut self, leading: Px) -> Panel {
        self.leading = leading;
        self
    }

    pub fn with_first_baseline(mut self, first_baseline: Px) -> Panel {
        self.first_baseline = first_baseline;
        self
    }

    /// The region of the texture that text is wrapped within: the extent inset
    /// by the padding
    pub fn content_box(&self) -> Rect {
        Rect {
            x1: self.padding.left,
            y1: self.padding.top,
            x2: self.extent.0 - self.padding.right,
            y2: self.extent.1 - self.padding.bottom,
        }
    }

    /// Wrap this panel's text to its content width and place the lines,
    /// yielding a [`PanelLayout`] ready for rasterization
    pub fn layout<M: Measure>(&self, measure: &M) -> Result<PanelLayout, LayoutError> {
        let content = self.content_box();
        let lines = wrap_text(measure, &self.text, content.width())?;

        let anchor_x = match self.align {
            Align::Left => content.x1,
            Align::Center => content.centre_x(),
            Align::Right => content.x2,
        };

        let lines = place_lines(lines, anchor_x, content.y1 + self.first_baseline, self.leading);

        Ok(PanelLayout {
            extent: self.extent,
            align: self.align,
            lines,
        })
    }
}

/// The laid-out form of one panel: positioned line spans plus the texture
/// extent and alignment the rasterizer needs to interpret the anchors. Pure
/// data; producing it touches no rendering state.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelLayout {
    pub extent: (Px, Px),
    pub align: Align,
    pub lines: Vec<LineSpan>,
}
