use std::cell::RefCell;
use std::rc::Rc;

use plot_config::api::{
    AxisEvent, ConfigEvent, LoadState, PlotConfigOptions, SeriesOptions,
};
use plot_config::core::{LegendPosition, NumericRange};
use plot_config::{ConfigError, PlotConfig};

#[test]
fn construction_merges_documented_defaults() {
    let config = PlotConfig::new(PlotConfigOptions::default()).expect("config init");

    assert_eq!(config.state(), LoadState::Unloaded);
    assert!(config.series().is_empty());
    assert_eq!(config.x_axis().range(), None);
    assert_eq!(config.y_axis().range(), None);
    assert!(!config.y_axis().autoscale());
    assert!((config.y_axis().autoscale_padding() - 0.1).abs() < 1e-12);

    let legend = config.legend();
    assert_eq!(legend.position(), LegendPosition::Top);
    assert!(!legend.expand_by_default());
    assert!(!legend.expanded());
    assert_eq!(legend.value_to_show_when_collapsed(), "nearestValue");
    assert!(legend.show_timestamp_when_expanded());
    assert!(legend.show_value_when_expanded());
    assert!(legend.show_maximum_when_expanded());
    assert!(legend.show_minimum_when_expanded());
}

#[test]
fn initial_series_run_the_color_protocol() {
    let mut options = PlotConfigOptions::default();
    options.series.push(SeriesOptions::new());
    options.series.push(SeriesOptions::new().with_color("#00ff00"));

    let config = PlotConfig::new(options).expect("config init");

    assert_eq!(config.series().len(), 2);
    let colors: Vec<_> = config.series().iter().map(|entry| entry.color()).collect();
    assert!(colors.iter().all(Option::is_some));
    assert_ne!(colors[0], colors[1]);
}

#[test]
fn invalid_initial_series_color_fails_construction() {
    let mut options = PlotConfigOptions::default();
    options.series.push(SeriesOptions::new().with_color("#nope"));

    let err = PlotConfig::new(options).expect_err("must reject");
    assert!(matches!(err, ConfigError::InvalidColorFormat { .. }));
}

#[test]
fn state_changes_are_published() {
    let mut config = PlotConfig::new(PlotConfigOptions::default()).expect("config init");

    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    config.subscribe(move |event| {
        if let ConfigEvent::State { old, new } = event {
            sink.borrow_mut().push((*old, *new));
        }
    });

    config.set_state(LoadState::Loading).expect("set state");
    config.set_state(LoadState::Loaded).expect("set state");
    // Unchanged values do not re-fire.
    config.set_state(LoadState::Loaded).expect("set state");

    assert_eq!(
        *seen.borrow(),
        vec![
            (LoadState::Unloaded, LoadState::Loading),
            (LoadState::Loading, LoadState::Loaded),
        ]
    );
    assert_eq!(config.state(), LoadState::Loaded);
}

#[test]
fn root_subscribers_fire_in_registration_order() {
    let mut config = PlotConfig::new(PlotConfigOptions::default()).expect("config init");

    let order = Rc::new(RefCell::new(Vec::new()));
    let first = Rc::clone(&order);
    config.subscribe(move |_| first.borrow_mut().push("first"));
    let second = Rc::clone(&order);
    config.subscribe(move |_| second.borrow_mut().push("second"));

    config
        .set_x_range(Some(NumericRange::new(0.0, 1.0)))
        .expect("set x range");

    // Two events (range, then derived display range), each delivered in
    // registration order.
    assert_eq!(
        *order.borrow(),
        vec!["first", "second", "first", "second"]
    );
}

#[test]
fn range_events_carry_old_and_new_values() {
    let mut config = PlotConfig::new(PlotConfigOptions::default()).expect("config init");

    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    config.subscribe_y_axis(move |event| sink.borrow_mut().push(*event));

    let range = NumericRange::new(1.0, 2.0);
    config.set_y_range(Some(range)).expect("set y range");

    let events = seen.borrow();
    assert_eq!(
        events[0],
        AxisEvent::Range {
            old: None,
            new: Some(range),
        }
    );
    assert_eq!(
        events[1],
        AxisEvent::DisplayRange {
            old: None,
            new: Some(range),
        }
    );
}

#[test]
fn unsubscribe_stops_event_delivery() {
    let mut config = PlotConfig::new(PlotConfigOptions::default()).expect("config init");

    let seen = Rc::new(RefCell::new(0u32));
    let sink = Rc::clone(&seen);
    let id = config.subscribe(move |_| *sink.borrow_mut() += 1);

    config
        .set_x_range(Some(NumericRange::new(0.0, 1.0)))
        .expect("set x range");
    let after_first = *seen.borrow();
    assert!(after_first > 0);

    assert!(config.unsubscribe(id));
    config
        .set_x_range(Some(NumericRange::new(5.0, 6.0)))
        .expect("set x range");
    assert_eq!(*seen.borrow(), after_first);
}

#[test]
fn destroy_cascades_once_over_all_children() {
    let mut config = PlotConfig::new(PlotConfigOptions::default()).expect("config init");
    config.add_series(SeriesOptions::new()).expect("add series");

    config.destroy();

    assert!(config.is_destroyed());
    assert!(config.x_axis().is_destroyed());
    assert!(config.y_axis().is_destroyed());
    assert!(config.series().is_destroyed());
    assert!(config.legend().is_destroyed());

    // Idempotent.
    config.destroy();
    assert!(config.is_destroyed());
}

#[test]
fn no_reactive_side_effects_after_destroy() {
    let mut config = PlotConfig::new(PlotConfigOptions::default()).expect("config init");

    let seen = Rc::new(RefCell::new(0u32));
    let sink = Rc::clone(&seen);
    config.subscribe(move |_| *sink.borrow_mut() += 1);

    config.destroy();

    let err = config
        .set_y_range(Some(NumericRange::new(0.0, 1.0)))
        .expect_err("must reject");
    assert!(matches!(err, ConfigError::Destroyed));
    assert!(matches!(
        config.add_series(SeriesOptions::new()).expect_err("must reject"),
        ConfigError::Destroyed
    ));

    assert_eq!(config.y_axis().display_range(), None);
    assert_eq!(*seen.borrow(), 0);
}
