use crate::panel::Panel;
use id_arena::Id;
use std::collections::HashMap;

/// The pointer interactions a panel can react to. Detection is the input
/// system's job; this crate only routes the resulting events.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// The panel was clicked or tapped
    Pick,
    PointerOver,
    PointerOut,
}

/// Routes pointer events to handlers registered per panel and event kind.
/// Dispatch is synchronous and single-threaded: handlers run on the calling
/// thread, in registration order, before [`Dispatcher::dispatch`] returns.
#[derive(Default)]
pub struct Dispatcher {
    handlers: HashMap<(Id<Panel>, EventKind), Vec<Box<dyn FnMut()>>>,
}

impl Dispatcher {
    /// Register a handler to run whenever `kind` fires on `panel`. Multiple
    /// handlers may be registered for the same panel and kind; they run in
    /// registration order.
    pub fn on<F: FnMut() + 'static>(&mut self, panel: Id<Panel>, kind: EventKind, handler: F) {
        self.handlers
            .entry((panel, kind))
            .or_default()
            .push(Box::new(handler));
    }

    /// Fire `kind` on `panel`, running every registered handler. Returns the
    /// number of handlers that ran; zero means nothing was registered.
    pub fn dispatch(&mut self, panel: Id<Panel>, kind: EventKind) -> usize {
        match self.handlers.get_mut(&(panel, kind)) {
            Some(handlers) => {
                for handler in handlers.iter_mut() {
                    handler();
                }
                handlers.len()
            }
            None => 0,
        }
    }

    /// The number of handlers registered for `kind` on `panel`
    pub fn handler_count(&self, panel: Id<Panel>, kind: EventKind) -> usize {
        self.handlers
            .get(&(panel, kind))
            .map(Vec::len)
            .unwrap_or_default()
    }
}
