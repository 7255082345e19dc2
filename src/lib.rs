mod error;
pub use error::*;

mod event;
pub use event::*;

mod font;
pub use font::*;

/// Utility functions and structures to layout text for rasterization onto panels
pub mod layout;

mod panel;
pub use panel::*;

mod rect;
pub use rect::*;

mod room;
pub use room::*;

mod units;
pub use units::*;

#[cfg(test)]
pub(crate) mod testface;
