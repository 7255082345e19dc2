use thiserror::Error;

use crate::units::Px;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum LayoutError {
    /// The wrap width handed to the layout engine was zero, negative, or NaN
    #[error("maximum width must be a positive number of pixels, got {0}")]
    InvalidMaxWidth(Px),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsingError(#[from] owned_ttf_parser::FaceParsingError),
}
