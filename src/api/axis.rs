use crate::core::NumericRange;
use crate::observe::{SubscriberId, Subscribers};

use super::events::AxisEvent;
use super::options::{XAxisOptions, YAxisOptions};

/// Domain (x) axis: raw range plus a display range that mirrors it.
///
/// The display range is derived state; it is only ever written by the
/// configuration root's passthrough rule.
#[derive(Debug, Default)]
pub struct XAxisState {
    range: Option<NumericRange>,
    display_range: Option<NumericRange>,
    subscribers: Subscribers<AxisEvent>,
    destroyed: bool,
}

impl XAxisState {
    pub(crate) fn new(options: XAxisOptions) -> Self {
        Self {
            range: options.range,
            display_range: None,
            subscribers: Subscribers::new(),
            destroyed: false,
        }
    }

    #[must_use]
    pub fn range(&self) -> Option<NumericRange> {
        self.range
    }

    #[must_use]
    pub fn display_range(&self) -> Option<NumericRange> {
        self.display_range
    }

    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub(crate) fn subscribe(&mut self, listener: impl FnMut(&AxisEvent) + 'static) -> SubscriberId {
        self.subscribers.subscribe(listener)
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    pub(crate) fn set_range(&mut self, new: Option<NumericRange>) -> Option<AxisEvent> {
        if self.range == new {
            return None;
        }
        let old = std::mem::replace(&mut self.range, new);
        let event = AxisEvent::Range { old, new };
        self.subscribers.notify(&event);
        Some(event)
    }

    pub(crate) fn set_display_range(&mut self, new: Option<NumericRange>) -> Option<AxisEvent> {
        if self.display_range == new {
            return None;
        }
        let old = std::mem::replace(&mut self.display_range, new);
        let event = AxisEvent::DisplayRange { old, new };
        self.subscribers.notify(&event);
        Some(event)
    }

    pub(crate) fn destroy(&mut self) {
        self.destroyed = true;
        self.subscribers.clear();
    }
}

/// Value (y) axis: raw range, autoscale settings, and the derived display
/// range the autoscale rule maintains.
#[derive(Debug)]
pub struct YAxisState {
    range: Option<NumericRange>,
    display_range: Option<NumericRange>,
    autoscale: bool,
    autoscale_padding: f64,
    subscribers: Subscribers<AxisEvent>,
    destroyed: bool,
}

impl YAxisState {
    pub(crate) fn new(options: YAxisOptions) -> Self {
        Self {
            range: options.range,
            display_range: None,
            autoscale: options.autoscale,
            autoscale_padding: options.autoscale_padding,
            subscribers: Subscribers::new(),
            destroyed: false,
        }
    }

    #[must_use]
    pub fn range(&self) -> Option<NumericRange> {
        self.range
    }

    #[must_use]
    pub fn display_range(&self) -> Option<NumericRange> {
        self.display_range
    }

    #[must_use]
    pub fn autoscale(&self) -> bool {
        self.autoscale
    }

    #[must_use]
    pub fn autoscale_padding(&self) -> f64 {
        self.autoscale_padding
    }

    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub(crate) fn subscribe(&mut self, listener: impl FnMut(&AxisEvent) + 'static) -> SubscriberId {
        self.subscribers.subscribe(listener)
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    pub(crate) fn set_range(&mut self, new: Option<NumericRange>) -> Option<AxisEvent> {
        if self.range == new {
            return None;
        }
        let old = std::mem::replace(&mut self.range, new);
        let event = AxisEvent::Range { old, new };
        self.subscribers.notify(&event);
        Some(event)
    }

    pub(crate) fn set_display_range(&mut self, new: Option<NumericRange>) -> Option<AxisEvent> {
        if self.display_range == new {
            return None;
        }
        let old = std::mem::replace(&mut self.display_range, new);
        let event = AxisEvent::DisplayRange { old, new };
        self.subscribers.notify(&event);
        Some(event)
    }

    pub(crate) fn set_autoscale(&mut self, new: bool) -> Option<AxisEvent> {
        if self.autoscale == new {
            return None;
        }
        let old = std::mem::replace(&mut self.autoscale, new);
        let event = AxisEvent::Autoscale { old, new };
        self.subscribers.notify(&event);
        Some(event)
    }

    pub(crate) fn set_autoscale_padding(&mut self, new: f64) -> Option<AxisEvent> {
        if self.autoscale_padding == new {
            return None;
        }
        let old = std::mem::replace(&mut self.autoscale_padding, new);
        let event = AxisEvent::AutoscalePadding { old, new };
        self.subscribers.notify(&event);
        Some(event)
    }

    pub(crate) fn destroy(&mut self) {
        self.destroyed = true;
        self.subscribers.clear();
    }
}
