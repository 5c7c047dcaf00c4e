//! Drive the particle background without a renderer attached.
//!
//! Run with: `cargo run --example headless`

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;
use drift_field::PointInstance;
use drift_params::MemoryStorage;
use drift_runtime::{FrameClock, HostEnv, ManualScheduler, TickScheduler, Viewport};
use drift_scene::{CameraPose, EffectStage, PointStyle, SceneSurface};
use drift_viewer::BackgroundApp;

/// A render surface that just logs what it receives
#[derive(Default)]
struct LoggingSurface {
    uploads: usize,
}

impl SceneSurface for LoggingSurface {
    fn upload_points(&mut self, instances: &[PointInstance]) {
        self.uploads += 1;
        log::debug!("upload #{}: {} instances", self.uploads, instances.len());
    }

    fn set_camera(&mut self, pose: &CameraPose) {
        log::info!(
            "camera at ({:.0}, {:.0}, {:.0}), fov {:.0}",
            pose.position.x,
            pose.position.y,
            pose.position.z,
            pose.fov
        );
    }

    fn set_effects(&mut self, chain: &[EffectStage]) {
        log::info!("effect chain: {} stage(s)", chain.len());
    }

    fn set_style(&mut self, style: &PointStyle) {
        log::info!(
            "point style: size {:.2}, opacity {:.2}",
            style.point_size,
            style.opacity
        );
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let app = BackgroundApp::new(LoggingSurface::default());
    let app = Rc::new(RefCell::new(app));

    let mut scheduler = ManualScheduler::new();
    let handle = app.clone();
    scheduler.on_tick(Box::new(move |_dt| handle.borrow_mut().tick()));

    // The host is "interactive" immediately in a headless run
    app.borrow_mut().mount(HostEnv::new(
        Viewport::new(1920.0, 1080.0),
        Box::new(MemoryStorage::new()),
    ));

    let mut clock = FrameClock::new();
    for _ in 0..600 {
        clock.tick();
        scheduler.step(clock.delta_time as f32);
    }

    let app = app.borrow();
    let field = app.field().expect("mounted");
    let mean_drift = field
        .positions()
        .iter()
        .zip(field.origins())
        .map(|(p, o)| (*p - *o).length() as f64)
        .sum::<f64>()
        / field.len() as f64;

    println!(
        "{} frames, {} particles, mean drift from origin {:.3}",
        clock.frame(),
        field.len(),
        mean_drift
    );
    println!("--- exported settings ---");
    println!("{}", app.export()?);

    Ok(())
}
