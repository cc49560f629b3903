use crate::core::{LegendPosition, Pixels};
use crate::observe::{SubscriberId, Subscribers};

use super::events::LegendEvent;
use super::options::LegendOptions;

/// Legend presentation state.
///
/// `height` is derived from position, expansion, and the series count; the
/// root recomputes it whenever any of those change. Position and the
/// display-preference flags are fixed at construction: the flags are opaque
/// pass-through values for the rendering layer, and a mutable position would
/// leave `height` stale with no rule to refresh it.
#[derive(Debug)]
pub struct LegendState {
    position: LegendPosition,
    expand_by_default: bool,
    expanded: bool,
    height: Pixels,
    value_to_show_when_collapsed: String,
    show_timestamp_when_expanded: bool,
    show_value_when_expanded: bool,
    show_maximum_when_expanded: bool,
    show_minimum_when_expanded: bool,
    subscribers: Subscribers<LegendEvent>,
    destroyed: bool,
}

impl LegendState {
    pub(crate) fn new(options: LegendOptions) -> Self {
        Self {
            position: options.position,
            expand_by_default: options.expand_by_default,
            // Expansion starts from the host preference, then moves on its own.
            expanded: options.expand_by_default,
            height: Pixels(0),
            value_to_show_when_collapsed: options.value_to_show_when_collapsed,
            show_timestamp_when_expanded: options.show_timestamp_when_expanded,
            show_value_when_expanded: options.show_value_when_expanded,
            show_maximum_when_expanded: options.show_maximum_when_expanded,
            show_minimum_when_expanded: options.show_minimum_when_expanded,
            subscribers: Subscribers::new(),
            destroyed: false,
        }
    }

    #[must_use]
    pub fn position(&self) -> LegendPosition {
        self.position
    }

    #[must_use]
    pub fn expand_by_default(&self) -> bool {
        self.expand_by_default
    }

    #[must_use]
    pub fn expanded(&self) -> bool {
        self.expanded
    }

    #[must_use]
    pub fn height(&self) -> Pixels {
        self.height
    }

    #[must_use]
    pub fn value_to_show_when_collapsed(&self) -> &str {
        &self.value_to_show_when_collapsed
    }

    #[must_use]
    pub fn show_timestamp_when_expanded(&self) -> bool {
        self.show_timestamp_when_expanded
    }

    #[must_use]
    pub fn show_value_when_expanded(&self) -> bool {
        self.show_value_when_expanded
    }

    #[must_use]
    pub fn show_maximum_when_expanded(&self) -> bool {
        self.show_maximum_when_expanded
    }

    #[must_use]
    pub fn show_minimum_when_expanded(&self) -> bool {
        self.show_minimum_when_expanded
    }

    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub(crate) fn subscribe(
        &mut self,
        listener: impl FnMut(&LegendEvent) + 'static,
    ) -> SubscriberId {
        self.subscribers.subscribe(listener)
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    pub(crate) fn set_expanded(&mut self, new: bool) -> Option<LegendEvent> {
        if self.expanded == new {
            return None;
        }
        let old = std::mem::replace(&mut self.expanded, new);
        let event = LegendEvent::Expanded { old, new };
        self.subscribers.notify(&event);
        Some(event)
    }

    pub(crate) fn set_height(&mut self, new: Pixels) -> Option<LegendEvent> {
        if self.height == new {
            return None;
        }
        let old = std::mem::replace(&mut self.height, new);
        let event = LegendEvent::Height { old, new };
        self.subscribers.notify(&event);
        Some(event)
    }

    pub(crate) fn destroy(&mut self) {
        self.destroyed = true;
        self.subscribers.clear();
    }
}
