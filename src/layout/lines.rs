use crate::units::Px;

/// A single laid-out line of text with the coordinates it should be drawn at,
/// in texture space. The x-coordinate is an *anchor*: depending on the panel's
/// alignment the rasterizer draws the line starting at, centred on, or ending
/// at the anchor, matching 2-D canvas `textAlign` semantics. The y-coordinate
/// is the line's baseline.
///
/// Layout is transform-agnostic: a rasterizer that mirrors its surface (as
/// textures applied to inward-facing geometry commonly are) applies its own
/// transform around drawing the spans.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSpan {
    pub text: String,
    pub coords: (Px, Px),
}

/// Assign coordinates to already-wrapped lines at a fixed vertical rhythm:
/// line `i` is anchored at `(anchor_x, first_baseline + i * leading)`.
pub fn place_lines(
    lines: Vec<String>,
    anchor_x: Px,
    first_baseline: Px,
    leading: Px,
) -> Vec<LineSpan> {
    lines
        .into_iter()
        .enumerate()
        .map(|(i, text)| LineSpan {
            text,
            coords: (anchor_x, first_baseline + leading * i as f32),
        })
        .collect()
}
