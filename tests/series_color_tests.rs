use plot_config::api::{PlotConfigOptions, SeriesOptions};
use plot_config::core::Color;
use plot_config::{ConfigError, PlotConfig};

fn empty_config() -> PlotConfig {
    PlotConfig::new(PlotConfigOptions::default()).expect("config init")
}

#[test]
fn auto_assigned_colors_are_distinct_and_leased() {
    let mut config = empty_config();

    let first = config.add_series(SeriesOptions::new()).expect("add first");
    let second = config.add_series(SeriesOptions::new()).expect("add second");

    let c1 = config.series().get(first).and_then(|s| s.color()).expect("color");
    let c2 = config.series().get(second).and_then(|s| s.color()).expect("color");

    assert_ne!(c1, c2);
    assert!(!config.palette().is_available(c1));
    assert!(!config.palette().is_available(c2));
}

#[test]
fn hex_color_is_parsed_and_reserved() {
    let mut config = empty_config();

    let id = config
        .add_series(SeriesOptions::new().with_color("#ff0000"))
        .expect("add series");

    let color = config.series().get(id).and_then(|s| s.color()).expect("color");
    assert_eq!(color, Color::from_hex_str("#ff0000").expect("parse"));
    assert!(!config.palette().is_available(color));
}

#[test]
fn resolved_color_from_the_pool_is_reserved() {
    let mut config = empty_config();

    // Lease one color just to learn a value that is certainly in the pool.
    let probe = config.add_series(SeriesOptions::new()).expect("probe");
    config.remove_series(probe).expect("remove probe");
    let pool_color = config
        .palette()
        .is_available(Color::rgb(0x20, 0xb2, 0xaa))
        .then_some(Color::rgb(0x20, 0xb2, 0xaa))
        .expect("default palette head available again");

    let id = config
        .add_series(SeriesOptions::new().with_color(pool_color))
        .expect("add series");

    assert_eq!(config.series().get(id).and_then(|s| s.color()), Some(pool_color));
    assert!(!config.palette().is_available(pool_color));
}

#[test]
fn unparsable_color_aborts_the_add() {
    let mut config = empty_config();

    let err = config
        .add_series(SeriesOptions::new().with_color("#not-a-color"))
        .expect_err("must reject");
    assert!(matches!(err, ConfigError::InvalidColorFormat { .. }));
    assert_eq!(config.series().len(), 0);
}

#[test]
fn removing_a_series_returns_its_color() {
    let mut config = empty_config();
    let available_before = config.palette().available_len();

    let id = config.add_series(SeriesOptions::new()).expect("add series");
    let color = config.series().get(id).and_then(|s| s.color()).expect("color");
    assert_eq!(config.palette().available_len(), available_before - 1);

    let entry = config.remove_series(id).expect("remove").expect("present");
    assert_eq!(entry.color(), Some(color));
    assert!(config.palette().is_available(color));
    assert_eq!(config.palette().available_len(), available_before);
}

#[test]
fn removing_unknown_series_is_a_quiet_no_op() {
    let mut config = empty_config();
    let id = config.add_series(SeriesOptions::new()).expect("add series");
    config.remove_series(id).expect("remove");

    assert!(config.remove_series(id).expect("second remove").is_none());
}

#[test]
fn recoloring_unknown_series_fails() {
    let mut config = empty_config();
    let id = config.add_series(SeriesOptions::new()).expect("add series");
    config.remove_series(id).expect("remove");

    let err = config
        .set_series_color(id, "#112233")
        .expect_err("must reject");
    assert!(matches!(err, ConfigError::UnknownSeries { id: e } if e == id));
}

#[test]
fn recolor_releases_old_color_when_unused() {
    let mut config = empty_config();

    let id = config.add_series(SeriesOptions::new()).expect("add series");
    let old = config.series().get(id).and_then(|s| s.color()).expect("color");

    config.set_series_color(id, "#123456").expect("recolor");

    let new = config.series().get(id).and_then(|s| s.color()).expect("color");
    assert_eq!(new, Color::from_hex_str("#123456").expect("parse"));
    assert!(config.palette().is_available(old));
    assert!(!config.palette().is_available(new));
}

#[test]
fn shared_color_is_only_returned_by_the_last_holder() {
    let mut config = empty_config();

    // S1, S2 auto-assigned distinct colors C1, C2.
    let s1 = config.add_series(SeriesOptions::new()).expect("add s1");
    let s2 = config.add_series(SeriesOptions::new()).expect("add s2");
    let c1 = config.series().get(s1).and_then(|s| s.color()).expect("c1");
    let c2 = config.series().get(s2).and_then(|s| s.color()).expect("c2");
    assert_ne!(c1, c2);

    // S2 switches to C1: C2 no longer has a holder and returns to the pool.
    config.set_series_color(s2, c1).expect("recolor s2");
    assert!(config.palette().is_available(c2));
    assert!(!config.palette().is_available(c1));

    // Removing S1 must not return C1 while S2 still holds it.
    config.remove_series(s1).expect("remove s1");
    assert!(!config.palette().is_available(c1));

    // Removing S2 finally returns C1.
    config.remove_series(s2).expect("remove s2");
    assert!(config.palette().is_available(c1));
}

#[test]
fn manually_duplicated_colors_follow_the_same_use_check() {
    let mut config = empty_config();

    let s1 = config.add_series(SeriesOptions::new()).expect("add s1");
    let c1 = config.series().get(s1).and_then(|s| s.color()).expect("c1");

    // Host explicitly reuses C1; the palette only guarantees non-collision
    // for its own leases.
    let s2 = config
        .add_series(SeriesOptions::new().with_color(c1))
        .expect("add s2");
    assert_eq!(config.series().get(s2).and_then(|s| s.color()), Some(c1));

    config.remove_series(s1).expect("remove s1");
    assert!(!config.palette().is_available(c1));

    config.remove_series(s2).expect("remove s2");
    assert!(config.palette().is_available(c1));
}

#[test]
fn exhausted_palette_keeps_serving_colors() {
    let mut config = empty_config();
    let pool_size = config.palette().base_len();

    let mut colors = Vec::new();
    for _ in 0..pool_size + 1 {
        let id = config.add_series(SeriesOptions::new()).expect("add series");
        colors.push(config.series().get(id).and_then(|s| s.color()).expect("color"));
    }

    assert_eq!(config.palette().available_len(), 0);
    // The over-quota lease cycles back to the start of the base list.
    assert_eq!(colors[pool_size], colors[0]);
}

#[test]
fn filter_selects_entries_by_predicate() {
    let mut config = empty_config();

    let red = config
        .add_series(SeriesOptions::new().with_color("#ff0000"))
        .expect("add red");
    config.add_series(SeriesOptions::new()).expect("add auto");

    let red_color = Color::from_hex_str("#ff0000").expect("parse");
    let matches = config
        .series()
        .filter(|entry| entry.color() == Some(red_color));
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].id(), red);
}
