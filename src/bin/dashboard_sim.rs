//! Headless dashboard simulation.
//!
//! Drives two synchronized charts the way the live dashboard does: a
//! polling loop appends synthetic samples every tick, a zoom gesture lands
//! mid-run on the first chart, and the final frames are written to disk as
//! SVG documents.

use std::error::Error;
use std::fs;
use std::path::PathBuf;

use telechart_rs::chart::ChartManager;
use telechart_rs::core::{Sample, SeriesSet, Viewport, ZoomTransform};
use telechart_rs::ingest::ChannelConfig;
use telechart_rs::render::SvgSurface;

const START_MS: f64 = 1_700_000_000_000.0;
const POLL_INTERVAL_MS: f64 = 500.0;
const TICKS: usize = 40;

fn synthetic_series(series_count: usize, ticks: usize) -> SeriesSet {
    let mut series = Vec::with_capacity(series_count);
    for index in 0..series_count {
        let phase = index as f64 * 0.9;
        let mut samples = Vec::with_capacity(ticks);
        for tick in 0..ticks {
            let x = START_MS + tick as f64 * POLL_INTERVAL_MS;
            let y = 0.55 + 0.4 * ((tick as f64) * 0.35 + phase).sin();
            samples.push(Sample::new(x, y));
        }
        series.push(samples);
    }
    SeriesSet::new(series)
}

fn main() -> Result<(), Box<dyn Error>> {
    let _ = telechart_rs::telemetry::init_default_tracing();

    let surface = SvgSurface::new()
        .with_container("plot-1", Viewport::new(900, 420))
        .with_container("plot-2", Viewport::new(900, 420));
    let mut manager = ChartManager::new(surface);

    let staging = ChannelConfig {
        endpoint: "/data1".to_owned(),
        fields: ["n1", "n2", "n3", "rem", "w"]
            .map(str::to_owned)
            .to_vec(),
        labels: ["probability", "time", "N1", "N2", "N3", "REM", "W"]
            .map(str::to_owned)
            .to_vec(),
        colors: ["#2222ff", "#2ca02c", "#800080", "#d62728", "#ee7f0e"]
            .map(str::to_owned)
            .to_vec(),
    };
    let band_power = ChannelConfig {
        endpoint: "/data2".to_owned(),
        fields: ["alpha_power", "beta_power", "theta_power", "delta_power"]
            .map(str::to_owned)
            .to_vec(),
        labels: ["power", "time", "alpha", "beta", "theta", "delta"]
            .map(str::to_owned)
            .to_vec(),
        colors: ["#2222ff", "#2ca02c", "#800080", "#d62728"]
            .map(str::to_owned)
            .to_vec(),
    };

    manager.create_chart(staging.chart_config("plot-1")?, synthetic_series(5, 2))?;
    manager.create_chart(band_power.chart_config("plot-2")?, synthetic_series(4, 2))?;

    for tick in 3..=TICKS {
        manager.update("plot-1", synthetic_series(5, tick))?;
        manager.update("plot-2", synthetic_series(4, tick))?;

        // Halfway through, the viewer zooms into the recent half of chart 1;
        // the gesture propagates to chart 2 through the manager.
        if tick == TICKS / 2 {
            manager.zoom("plot-1", ZoomTransform::new(2.0, -820.0))?;
        }
    }

    let out_dir = PathBuf::from("dashboard_sim_out");
    fs::create_dir_all(&out_dir)?;
    for container_id in ["plot-1", "plot-2"] {
        let chart = manager
            .chart(container_id)
            .expect("chart registered above");
        let (start, end) = chart.x_domain()?;
        println!(
            "{container_id}: x-domain [{start:.0}, {end:.0}] ms, y-domain max {:.3}",
            chart.y_domain().1
        );

        let document = manager
            .surface()
            .document(container_id)
            .expect("frame committed above");
        let path = out_dir.join(format!("{container_id}.svg"));
        fs::write(&path, document)?;
        println!("wrote {}", path.display());
    }

    Ok(())
}
