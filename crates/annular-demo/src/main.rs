//! Headless demo: drives the pie-chart widget and a multi-ring monitor
//! against the recording backend, then exercises the settings store.

use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, bail};

use annular_chart::prelude::*;
use annular_engine::logging::{LoggingConfig, init_logging};
use annular_engine::scene::DrawCmd;
use annular_settings::{SaveRequest, SettingStore};

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    run_pie_chart()?;
    run_monitor();
    run_settings()?;

    Ok(())
}

/// Mounts a 75% chart, scrolls it into view, and polls on wall-clock time
/// until the animation completes.
fn run_pie_chart() -> anyhow::Result<()> {
    let mut tree = HostTree::new();
    let body = tree.insert(None, Vec2::zero(), Vec2::new(800.0, 2000.0));
    let el = tree.insert(Some(body), Vec2::new(100.0, 120.0), Vec2::new(300.0, 300.0));
    tree.set_attr(el, ATTR_VALUE, "75");
    tree.set_attr(el, ATTR_UNITS, "%");
    tree.set_attr(el, ATTR_COLOR, "success");

    let mut surface = RecordingSurface::new(Vec2::new(300.0, 300.0));
    let mut labels = RecordingLabelHost::new();

    let now = Instant::now();
    let mut chart = PieChart::mount(
        &mut tree,
        el,
        ChartOptions::default(),
        Env::default(),
        &Palette::default(),
        &mut labels,
        now,
    )
    .context("mounting pie chart")?;

    // Simulate the page scrolling the element into view.
    let viewport = Viewport { scroll_top: 0.0, height: 900.0 };
    chart.on_scroll(&tree, viewport, Instant::now(), &mut labels);
    log::info!("pie chart animating toward {:.0}%", chart.target() * 100.0);

    let deadline = Instant::now() + Duration::from_secs(5);
    while chart.phase() != Phase::Complete {
        if Instant::now() > deadline {
            bail!("pie chart did not complete in time");
        }
        chart.poll(Instant::now(), &mut surface, &mut labels);
        thread::sleep(Duration::from_millis(2));
    }

    log::info!(
        "pie chart complete: label {:?}, {} draw commands on the last frame",
        chart.label_text(),
        surface.commands().len(),
    );
    Ok(())
}

/// Resource gauges the monitor rings query.
struct MonitorState {
    cpu: f32,
    mem: f32,
    disk: f32,
}

/// Three concentric rings with info leader lines, driven on synthetic time.
fn run_monitor() {
    let mut surface = RecordingSurface::new(Vec2::new(240.0, 240.0));
    let mut labels = RecordingLabelHost::new();
    let mut state = MonitorState { cpu: 0.0, mem: 0.0, disk: 0.0 };

    let mut circle: ProgressCircle<MonitorState> =
        ProgressCircle::new(Vec2::new(240.0, 240.0)).min_radius(30.0);

    circle
        .add_entry(
            RingParams::new(
                Color::from_rgba8(255, 103, 91, 255),
                Box::new(|s: &mut MonitorState| {
                    s.cpu = (s.cpu + 0.03).min(0.78);
                    s.cpu
                }),
            )
            .info(Box::new(|s| format!("cpu {:.0}%", s.cpu * 100.0))),
            &mut labels,
        )
        .add_entry(
            RingParams::new(
                Color::from_rgba8(255, 153, 0, 255),
                Box::new(|s: &mut MonitorState| {
                    s.mem = (s.mem + 0.02).min(0.41);
                    s.mem
                }),
            )
            .info(Box::new(|s| format!("mem {:.0}%", s.mem * 100.0))),
            &mut labels,
        )
        .add_entry(
            RingParams::new(
                Color::from_rgba8(88, 185, 218, 255),
                Box::new(|s: &mut MonitorState| {
                    s.disk = (s.disk + 0.01).min(0.51);
                    s.disk
                }),
            )
            .info(Box::new(|s| format!("disk {:.0}%", s.disk * 100.0))),
            &mut labels,
        );

    let t0 = Instant::now();
    circle.start(None, t0); // stock 33 ms interval
    for i in 1..=40u32 {
        circle.run(t0 + i * Duration::from_millis(33), &mut state, &mut surface, &mut labels);
    }
    circle.stop();

    let arcs = surface
        .commands()
        .iter()
        .filter(|c| matches!(c, DrawCmd::Arc(_)))
        .count();
    log::info!("monitor frame: {arcs} arcs, {} labels", labels.len());
    for record in labels.records() {
        log::info!("  {} -> {:?}", record.style.class, record.text);
    }
}

/// A valid save, then a rejected one.
fn run_settings() -> anyhow::Result<()> {
    let mut store = SettingStore::new("demo-session-token");
    store.register("lazy_load", "off", true);
    store.register("chart_palette", "default", false);

    let token = store.token().to_string();
    let resp = store
        .save(&SaveRequest {
            authorized: true,
            token: Some(&token),
            option_id: Some("lazy_load"),
            value: Some("on"),
            autoload: true,
        })
        .context("saving lazy_load")?;
    log::info!("settings: {}", resp.message);

    let rejected = store.save(&SaveRequest {
        authorized: true,
        token: Some(&token),
        option_id: Some("not_registered"),
        value: Some("x"),
        autoload: false,
    });
    match rejected {
        Err(e) => log::info!("settings correctly rejected: {e}"),
        Ok(_) => bail!("allow-list failed to reject an unknown option"),
    }

    Ok(())
}
