use types::HandlerName;

use crate::handler::{Handler, RecordingHandler};

/// Fixed table from handler name to implementation.
#[derive(Debug)]
pub struct HandlerRegistry {
    handlers: [Box<dyn Handler>; HandlerName::COUNT],
}

impl HandlerRegistry {
    /// `foo`, `bar` and `boo`, each a [`RecordingHandler`] with the default layout.
    pub fn standard() -> Self {
        Self::from_fn(|name| Box::new(RecordingHandler::new(name)))
    }

    /// Builds the table by asking `make` for each name in turn.
    pub fn from_fn(mut make: impl FnMut(HandlerName) -> Box<dyn Handler>) -> Self {
        Self {
            handlers: HandlerName::ALL.map(&mut make),
        }
    }

    pub fn get(&self, name: HandlerName) -> &dyn Handler {
        self.handlers[name.index()].as_ref()
    }

    /// Resolves a raw token. Matching is exact and case-sensitive.
    pub fn resolve(&self, token: &str) -> Option<&dyn Handler> {
        HandlerName::lookup(token).map(|name| self.get(name))
    }
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
