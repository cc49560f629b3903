//! Explicit observer primitive used by every component in the graph.
//!
//! Listeners receive typed change events carrying old and new values and are
//! invoked synchronously, in registration order, before the mutating call
//! returns. There is no dynamic property interception anywhere in the crate:
//! each component defines its own event enum and owns one `Subscribers` list.

use std::fmt;

/// Handle returned by [`Subscribers::subscribe`], used to cancel delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriberId(u64);

impl SubscriberId {
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Ordered registry of boxed change listeners for one event type.
pub struct Subscribers<E> {
    entries: Vec<(SubscriberId, Box<dyn FnMut(&E)>)>,
    next_id: u64,
}

impl<E> Subscribers<E> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Registers a listener and returns its cancellation handle.
    pub fn subscribe(&mut self, listener: impl FnMut(&E) + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` when the id is not registered.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Delivers `event` to every listener in registration order.
    pub fn notify(&mut self, event: &E) {
        for (_, listener) in &mut self.entries {
            listener(event);
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<E> Default for Subscribers<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Subscribers<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("len", &self.entries.len())
            .finish()
    }
}
