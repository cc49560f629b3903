use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::Color;
use crate::error::{ConfigError, ConfigResult};
use crate::observe::{SubscriberId, Subscribers};

use super::events::SeriesEvent;

/// Identifier assigned to a series entry when it joins the collection.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct SeriesId(u64);

impl SeriesId {
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SeriesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "series#{}", self.0)
    }
}

/// One plotted series as the configuration core sees it.
///
/// The payload is host-owned and opaque; the core only manages `color`,
/// which is always resolved once the entry has been added.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesEntry {
    id: SeriesId,
    color: Option<Color>,
    payload: Value,
}

impl SeriesEntry {
    #[must_use]
    pub fn id(&self) -> SeriesId {
        self.id
    }

    #[must_use]
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    #[must_use]
    pub fn payload(&self) -> &Value {
        &self.payload
    }
}

/// Ordered, observable collection of series entries.
#[derive(Debug, Default)]
pub struct SeriesCollection {
    entries: Vec<SeriesEntry>,
    next_id: u64,
    subscribers: Subscribers<SeriesEvent>,
    destroyed: bool,
}

impl SeriesCollection {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: SeriesId) -> Option<&SeriesEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SeriesEntry> {
        self.entries.iter()
    }

    /// Entries matching a predicate, in collection order.
    pub fn filter(&self, predicate: impl Fn(&SeriesEntry) -> bool) -> Vec<&SeriesEntry> {
        self.entries.iter().filter(|entry| predicate(entry)).collect()
    }

    /// True when any present entry currently holds `color`.
    #[must_use]
    pub fn any_holds(&self, color: Color) -> bool {
        self.entries.iter().any(|entry| entry.color == Some(color))
    }

    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub(crate) fn subscribe(
        &mut self,
        listener: impl FnMut(&SeriesEvent) + 'static,
    ) -> SubscriberId {
        self.subscribers.subscribe(listener)
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    pub(crate) fn insert(&mut self, color: Option<Color>, payload: Value) -> (SeriesId, SeriesEvent) {
        let id = SeriesId(self.next_id);
        self.next_id += 1;
        self.entries.push(SeriesEntry { id, color, payload });

        let event = SeriesEvent::Added { id };
        self.subscribers.notify(&event);
        (id, event)
    }

    pub(crate) fn take(&mut self, id: SeriesId) -> Option<(SeriesEntry, SeriesEvent)> {
        let index = self.entries.iter().position(|entry| entry.id == id)?;
        let entry = self.entries.remove(index);

        let event = SeriesEvent::Removed {
            id,
            color: entry.color,
        };
        self.subscribers.notify(&event);
        Some((entry, event))
    }

    /// Assigns a freshly leased color during the add protocol.
    ///
    /// Intentionally silent: the assignment is part of `Added` handling, not
    /// a recolor, so it must not trigger the recolor protocol.
    pub(crate) fn assign_color(&mut self, id: SeriesId, color: Color) {
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.id == id) {
            entry.color = Some(color);
        }
    }

    /// Replaces an entry's color, emitting the recolor event when the value
    /// actually changes.
    pub(crate) fn replace_color(
        &mut self,
        id: SeriesId,
        new: Color,
    ) -> ConfigResult<Option<SeriesEvent>> {
        let entry = self
            .entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .ok_or(ConfigError::UnknownSeries { id })?;

        match entry.color.replace(new) {
            Some(old) if old != new => {
                let event = SeriesEvent::Color { id, old, new };
                self.subscribers.notify(&event);
                Ok(Some(event))
            }
            _ => Ok(None),
        }
    }

    pub(crate) fn destroy(&mut self) {
        self.destroyed = true;
        self.subscribers.clear();
    }
}
