//! Monitor probe
//!
//! Lists the connected monitors with their work areas.

use casement::Context;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let mut context = Context::new()?;

    let monitors = context.monitors();
    log::info!("{} monitor(s) connected", monitors.len());
    for monitor in monitors {
        let wa = monitor.workarea;
        log::info!(
            "{}: work area {}x{} at ({}, {})",
            monitor.name,
            wa.width,
            wa.height,
            wa.x,
            wa.y
        );
    }

    Ok(())
}
