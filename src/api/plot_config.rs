use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::core::{ColorPalette, NumericRange, legend_height};
use crate::error::{ConfigError, ConfigResult};
use crate::observe::{SubscriberId, Subscribers};

use super::axis::{XAxisState, YAxisState};
use super::events::{AxisEvent, ConfigEvent, LegendEvent, SeriesEvent};
use super::legend::LegendState;
use super::options::{ColorSpec, LoadState, PlotConfigOptions, SeriesOptions};
use super::rules::RULES;
use super::series::{SeriesCollection, SeriesEntry, SeriesId};

/// Root of the reactive configuration graph.
///
/// Owns exactly one of each child component plus the color palette, and runs
/// the rule table that keeps derived state (display ranges, legend height,
/// series colors) consistent with every mutation. All mutation goes through
/// the root so the rules always fire; children are exposed read-only.
pub struct PlotConfig {
    state: LoadState,
    pub(crate) x_axis: XAxisState,
    pub(crate) y_axis: YAxisState,
    pub(crate) legend: LegendState,
    pub(crate) series: SeriesCollection,
    pub(crate) palette: ColorPalette,
    subscribers: Subscribers<ConfigEvent>,
    destroyed: bool,
}

impl PlotConfig {
    /// Builds the graph from an options tree and brings derived state up to
    /// date: initial series run the color-assignment protocol, initial axis
    /// ranges trigger their rules once, and the legend height is computed.
    pub fn new(options: PlotConfigOptions) -> ConfigResult<Self> {
        let PlotConfigOptions {
            state,
            series,
            x_axis,
            y_axis,
            legend,
        } = options;

        let mut config = Self {
            state,
            x_axis: XAxisState::new(x_axis),
            y_axis: YAxisState::new(y_axis),
            legend: LegendState::new(legend),
            series: SeriesCollection::new(),
            palette: ColorPalette::new(),
            subscribers: Subscribers::new(),
            destroyed: false,
        };

        for series_options in series {
            config.add_series(series_options)?;
        }

        if let Some(range) = config.x_axis.range() {
            config.dispatch(ConfigEvent::XAxis(AxisEvent::Range {
                old: None,
                new: Some(range),
            }))?;
        }
        if let Some(range) = config.y_axis.range() {
            config.dispatch(ConfigEvent::YAxis(AxisEvent::Range {
                old: None,
                new: Some(range),
            }))?;
        }
        let _ = config.refresh_legend_height();

        debug!(series = config.series.len(), "plot configuration constructed");
        Ok(config)
    }

    /// Builds the graph straight from a JSON options document.
    pub fn from_json_str(input: &str) -> ConfigResult<Self> {
        Self::new(PlotConfigOptions::from_json_str(input)?)
    }

    #[must_use]
    pub fn state(&self) -> LoadState {
        self.state
    }

    #[must_use]
    pub fn x_axis(&self) -> &XAxisState {
        &self.x_axis
    }

    #[must_use]
    pub fn y_axis(&self) -> &YAxisState {
        &self.y_axis
    }

    #[must_use]
    pub fn legend(&self) -> &LegendState {
        &self.legend
    }

    #[must_use]
    pub fn series(&self) -> &SeriesCollection {
        &self.series
    }

    #[must_use]
    pub fn palette(&self) -> &ColorPalette {
        &self.palette
    }

    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn set_state(&mut self, state: LoadState) -> ConfigResult<()> {
        self.ensure_live()?;
        if self.state == state {
            return Ok(());
        }
        let old = std::mem::replace(&mut self.state, state);
        self.dispatch(ConfigEvent::State { old, new: state })
    }

    pub fn set_x_range(&mut self, range: Option<NumericRange>) -> ConfigResult<()> {
        self.ensure_live()?;
        match self.x_axis.set_range(range) {
            Some(event) => self.dispatch(ConfigEvent::XAxis(event)),
            None => Ok(()),
        }
    }

    pub fn set_y_range(&mut self, range: Option<NumericRange>) -> ConfigResult<()> {
        self.ensure_live()?;
        match self.y_axis.set_range(range) {
            Some(event) => self.dispatch(ConfigEvent::YAxis(event)),
            None => Ok(()),
        }
    }

    pub fn set_y_autoscale(&mut self, autoscale: bool) -> ConfigResult<()> {
        self.ensure_live()?;
        match self.y_axis.set_autoscale(autoscale) {
            Some(event) => self.dispatch(ConfigEvent::YAxis(event)),
            None => Ok(()),
        }
    }

    pub fn set_y_autoscale_padding(&mut self, padding: f64) -> ConfigResult<()> {
        self.ensure_live()?;
        match self.y_axis.set_autoscale_padding(padding) {
            Some(event) => self.dispatch(ConfigEvent::YAxis(event)),
            None => Ok(()),
        }
    }

    pub fn set_legend_expanded(&mut self, expanded: bool) -> ConfigResult<()> {
        self.ensure_live()?;
        match self.legend.set_expanded(expanded) {
            Some(event) => self.dispatch(ConfigEvent::Legend(event)),
            None => Ok(()),
        }
    }

    /// Adds a series entry. A textual color is parsed first
    /// (`InvalidColorFormat` aborts the add); the color-assignment protocol
    /// and legend sizing then run through the rule table.
    pub fn add_series(&mut self, options: SeriesOptions) -> ConfigResult<SeriesId> {
        self.ensure_live()?;
        let color = options.color.as_ref().map(ColorSpec::resolve).transpose()?;
        let (id, event) = self.series.insert(color, options.payload);
        self.dispatch(ConfigEvent::Series(event))?;
        Ok(id)
    }

    /// Removes a series entry, returning it to the caller.
    ///
    /// Its color goes back to the palette unless another entry still holds
    /// the same color. Returns `Ok(None)` when the id is not present.
    pub fn remove_series(&mut self, id: SeriesId) -> ConfigResult<Option<SeriesEntry>> {
        self.ensure_live()?;
        let Some((entry, event)) = self.series.take(id) else {
            return Ok(None);
        };
        self.dispatch(ConfigEvent::Series(event))?;
        Ok(Some(entry))
    }

    /// Changes a series color, running the recolor protocol: the new color
    /// is reserved out of the palette, and the old one is returned only if
    /// no present entry still holds it.
    pub fn set_series_color(
        &mut self,
        id: SeriesId,
        color: impl Into<ColorSpec>,
    ) -> ConfigResult<()> {
        self.ensure_live()?;
        let resolved = color.into().resolve()?;
        match self.series.replace_color(id, resolved)? {
            Some(event) => self.dispatch(ConfigEvent::Series(event)),
            None => Ok(()),
        }
    }

    /// Subscribes to every event in the graph.
    pub fn subscribe(&mut self, listener: impl FnMut(&ConfigEvent) + 'static) -> SubscriberId {
        self.subscribers.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    pub fn subscribe_x_axis(
        &mut self,
        listener: impl FnMut(&AxisEvent) + 'static,
    ) -> SubscriberId {
        self.x_axis.subscribe(listener)
    }

    pub fn unsubscribe_x_axis(&mut self, id: SubscriberId) -> bool {
        self.x_axis.unsubscribe(id)
    }

    pub fn subscribe_y_axis(
        &mut self,
        listener: impl FnMut(&AxisEvent) + 'static,
    ) -> SubscriberId {
        self.y_axis.subscribe(listener)
    }

    pub fn unsubscribe_y_axis(&mut self, id: SubscriberId) -> bool {
        self.y_axis.unsubscribe(id)
    }

    pub fn subscribe_legend(
        &mut self,
        listener: impl FnMut(&LegendEvent) + 'static,
    ) -> SubscriberId {
        self.legend.subscribe(listener)
    }

    pub fn unsubscribe_legend(&mut self, id: SubscriberId) -> bool {
        self.legend.unsubscribe(id)
    }

    pub fn subscribe_series(
        &mut self,
        listener: impl FnMut(&SeriesEvent) + 'static,
    ) -> SubscriberId {
        self.series.subscribe(listener)
    }

    pub fn unsubscribe_series(&mut self, id: SubscriberId) -> bool {
        self.series.unsubscribe(id)
    }

    /// Tears down the graph synchronously: x-axis, y-axis, series
    /// collection, legend, in that order, then the root itself. Idempotent;
    /// no reactive side effects fire afterwards.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        debug!("destroying plot configuration");
        self.x_axis.destroy();
        self.y_axis.destroy();
        self.series.destroy();
        self.legend.destroy();
        self.subscribers.clear();
        self.destroyed = true;
    }

    pub(crate) fn refresh_legend_height(&mut self) -> Option<ConfigEvent> {
        let height = legend_height(
            self.legend.position(),
            self.legend.expanded(),
            self.series.len(),
        );
        self.legend.set_height(height).map(ConfigEvent::Legend)
    }

    fn ensure_live(&self) -> ConfigResult<()> {
        if self.destroyed {
            return Err(ConfigError::Destroyed);
        }
        Ok(())
    }

    /// Drains the event queue: every event is run through the rule table in
    /// order (effects may emit follow-up events), then delivered to root
    /// subscribers. Errors from effects abort the drain and propagate to the
    /// caller of the triggering mutation.
    fn dispatch(&mut self, seed: ConfigEvent) -> ConfigResult<()> {
        let mut queue = VecDeque::from([seed]);
        while let Some(event) = queue.pop_front() {
            for rule in RULES {
                if (rule.matches)(&event) {
                    trace!(rule = rule.name, ?event, "applying reactive rule");
                    queue.extend((rule.apply)(self, &event)?);
                }
            }
            self.subscribers.notify(&event);
        }
        Ok(())
    }
}

impl std::fmt::Debug for PlotConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlotConfig")
            .field("state", &self.state)
            .field("series", &self.series.len())
            .field("destroyed", &self.destroyed)
            .finish_non_exhaustive()
    }
}
