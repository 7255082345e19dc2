use crate::font::Font;
use crate::panel::{Panel, PanelLayout};
use crate::LayoutError;
use id_arena::{Arena, Id};

#[derive(Default)]
/// A room is the owned context that holds every text panel of a scene along
/// with the fonts that measure them. Construct one, fill it, lay it out, and
/// drop it — there is no ambient or global state, so independent rooms can be
/// built and laid out side by side.
pub struct Room {
    pub fonts: Arena<Font>,
    pub panels: Arena<Panel>,
    pub panel_order: Vec<Id<Panel>>,
}

impl Room {
    /// Add a font to the room. Note that fonts are stored "globally" within
    /// the room, such that any panel can be measured against it by referring
    /// to it by its id.
    pub fn add_font(&mut self, font: Font) -> Id<Font> {
        self.fonts.alloc(font)
    }

    /// Add a panel to the room, returning the id of that panel within the
    /// room. The panel will be added to the end of the room's draw order.
    pub fn add_panel(&mut self, panel: Panel) -> Id<Panel> {
        let id = self.panels.alloc(panel);
        self.panel_order.push(id);
        id
    }

    /// Get the 0-based index of a panel given its id. Note that changing the
    /// panel order after this call _will_ invalidate the returned index
    pub fn index_of_panel(&self, panel: Id<Panel>) -> Option<usize> {
        self.panel_order
            .iter()
            .enumerate()
            .find(|&(_, p)| *p == panel)
            .map(|(i, _)| i)
    }

    /// Get the panel id of a panel at the given index. Returns [None] if
    /// `panel_index >= self.panel_order.len()`.
    pub fn id_of_panel_index(&self, panel_index: usize) -> Option<Id<Panel>> {
        self.panel_order.get(panel_index).copied()
    }

    /// Lay out one panel, measuring its text with the font face and size the
    /// panel is bound to
    pub fn layout_panel(&self, panel: Id<Panel>) -> Result<PanelLayout, LayoutError> {
        let panel = &self.panels[panel];
        let font = &self.fonts[panel.font.id];
        panel.layout(&font.sized(panel.font.size))
    }

    /// Lay out every panel in the room in draw order, each against its own
    /// font binding, yielding each panel's id alongside its layout
    pub fn layout_all(&self) -> Result<Vec<(Id<Panel>, PanelLayout)>, LayoutError> {
        self.panel_order
            .iter()
            .map(|&id| Ok((id, self.layout_panel(id)?)))
            .collect()
    }
}
