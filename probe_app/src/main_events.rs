//! Event probe
//!
//! Opens a window and logs every lifecycle event until it is closed.
//! Window settings are read from `probe.toml` next to the working
//! directory when present.

use casement::{Context, WindowEventHandler, WindowSettings};

const SETTINGS_PATH: &str = "probe.toml";

#[derive(Default)]
struct EventLog {
    events_seen: u64,
}

impl WindowEventHandler for EventLog {
    fn on_close(&mut self) {
        self.events_seen += 1;
        log::info!("close requested");
    }

    fn on_refresh(&mut self) {
        self.events_seen += 1;
        // Refresh fires on every damage event; keep it out of the info log.
        log::debug!("refresh");
    }

    fn on_resize(&mut self, width: i32, height: i32) {
        self.events_seen += 1;
        log::info!("resized to {}x{}", width, height);
    }

    fn on_move(&mut self, x: i32, y: i32) {
        self.events_seen += 1;
        log::info!("moved to ({}, {})", x, y);
    }

    fn on_scale_change(&mut self, xscale: f32, yscale: f32) {
        self.events_seen += 1;
        log::info!("content scale changed to {}x{}", xscale, yscale);
    }

    fn on_iconify(&mut self, iconified: bool) {
        self.events_seen += 1;
        log::info!("{}", if iconified { "iconified" } else { "restored" });
    }

    fn on_maximize(&mut self, maximized: bool) {
        self.events_seen += 1;
        log::info!("{}", if maximized { "maximized" } else { "unmaximized" });
    }

    fn on_focus(&mut self, focused: bool) {
        self.events_seen += 1;
        log::info!("{}", if focused { "focused" } else { "unfocused" });
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let settings = match WindowSettings::load_from_file(SETTINGS_PATH) {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("could not load {}: {}; using defaults", SETTINGS_PATH, e);
            WindowSettings::default()
        }
    };

    let mut context = Context::new()?;
    let mut window = context.create_window(&settings)?;
    window.show();

    let mut events = EventLog::default();
    while !window.should_close() {
        context.wait_events();
        window.dispatch_events(&mut events);
    }

    log::info!("window closed after {} event(s)", events.events_seen);
    Ok(())
}
