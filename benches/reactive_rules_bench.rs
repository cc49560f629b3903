use criterion::{Criterion, criterion_group, criterion_main};
use plot_config::PlotConfig;
use plot_config::api::{PlotConfigOptions, SeriesOptions};
use plot_config::core::NumericRange;
use std::hint::black_box;

fn bench_y_range_autoscale_dispatch(c: &mut Criterion) {
    let mut options = PlotConfigOptions::default();
    options.y_axis.autoscale = true;
    let mut config = PlotConfig::new(options).expect("config init");

    c.bench_function("y_range_autoscale_dispatch", |b| {
        let mut value = 0.0f64;
        b.iter(|| {
            value += 1.0;
            config
                .set_y_range(Some(NumericRange::new(
                    black_box(value),
                    black_box(value + 10.0),
                )))
                .expect("set y range");
        })
    });
}

fn bench_series_add_remove_cycle(c: &mut Criterion) {
    let mut config = PlotConfig::new(PlotConfigOptions::default()).expect("config init");

    c.bench_function("series_add_remove_cycle", |b| {
        b.iter(|| {
            let id = config.add_series(SeriesOptions::new()).expect("add series");
            config.remove_series(black_box(id)).expect("remove series");
        })
    });
}

criterion_group!(
    benches,
    bench_y_range_autoscale_dispatch,
    bench_series_add_remove_cycle
);
criterion_main!(benches);
