//! GLFW ownership, window construction, and the event pump

use std::sync::mpsc::{channel, Receiver, Sender};

use glfw::{ClientApiHint, WindowHint, WindowMode};
use thiserror::Error;

use crate::monitor::{MonitorCache, MonitorChange, MonitorInfo};
use crate::settings::WindowSettings;
use crate::window::{Window, WindowError};

/// Context errors
#[derive(Error, Debug)]
pub enum ContextError {
    /// GLFW refused to initialize.
    #[error("GLFW initialization failed")]
    InitializationFailed,
}

/// Owner of the GLFW library instance.
///
/// All windows are created through the context, and the context pumps the
/// native event loop. Monitor queries go through the context as well, since
/// the monitor cache is fed by a callback registered on the library
/// instance.
pub struct Context {
    glfw: glfw::Glfw,
    monitors: MonitorCache,
    changes: Receiver<MonitorChange>,
    change_sender: Sender<MonitorChange>,
    monitor_callback_set: bool,
}

impl Context {
    /// Initialize GLFW. Native errors are routed to the `log` crate.
    pub fn new() -> Result<Self, ContextError> {
        let glfw = glfw::init(glfw::log_errors).map_err(|_| ContextError::InitializationFailed)?;
        log::debug!("GLFW initialized");

        let (change_sender, changes) = channel();
        Ok(Self {
            glfw,
            monitors: MonitorCache::default(),
            changes,
            change_sender,
            monitor_callback_set: false,
        })
    }

    /// Create a window from the given settings.
    ///
    /// When `settings.fullscreen` names a monitor, the window is created
    /// fullscreen on the first connected monitor with that name; otherwise
    /// it is a regular windowed window.
    pub fn create_window(&mut self, settings: &WindowSettings) -> Result<Window, WindowError> {
        // No rendering API is managed here; leave context creation to the
        // application if it needs one.
        self.glfw
            .window_hint(WindowHint::ClientApi(ClientApiHint::NoApi));
        self.glfw
            .window_hint(WindowHint::Resizable(settings.resizable));
        self.glfw.window_hint(WindowHint::Visible(settings.visible));

        let (window, events) = match &settings.fullscreen {
            Some(name) => self.glfw.with_connected_monitors(|glfw, monitors| {
                let monitor = monitors
                    .iter()
                    .find(|m| m.get_name().as_deref() == Some(name.as_str()))
                    .ok_or_else(|| WindowError::MonitorNotFound(name.clone()))?;
                glfw.create_window(
                    settings.width,
                    settings.height,
                    &settings.title,
                    WindowMode::FullScreen(monitor),
                )
                .ok_or(WindowError::CreationFailed)
            })?,
            None => self
                .glfw
                .create_window(
                    settings.width,
                    settings.height,
                    &settings.title,
                    WindowMode::Windowed,
                )
                .ok_or(WindowError::CreationFailed)?,
        };

        log::info!(
            "created {}x{} window \"{}\"",
            settings.width,
            settings.height,
            settings.title
        );
        Ok(Window::from_parts(window, events))
    }

    /// Connected monitors, as last observed.
    ///
    /// The first call snapshots the monitors GLFW reports at that moment
    /// and registers the connect/disconnect callback; later calls fold any
    /// pending change events into the cached list before returning it.
    pub fn monitors(&mut self) -> &[MonitorInfo] {
        if self.monitors.is_initialized() {
            for change in self.changes.try_iter() {
                self.monitors.apply(change);
            }
        }

        if !self.monitors.is_initialized() {
            let snapshot = self.glfw.with_connected_monitors(|_, monitors| {
                monitors.iter().map(MonitorInfo::from_handle).collect()
            });
            self.monitors.repopulate(snapshot);

            if !self.monitor_callback_set {
                let sender = self.change_sender.clone();
                self.glfw.set_monitor_callback(move |monitor, event| {
                    let _ = sender.send(MonitorChange::capture(&monitor, event));
                });
                self.monitor_callback_set = true;
            }
        }

        self.monitors.as_slice()
    }

    /// Process pending native events, returning immediately.
    pub fn poll_events(&mut self) {
        self.glfw.poll_events();
    }

    /// Block until at least one native event arrives, then process events.
    pub fn wait_events(&mut self) {
        self.glfw.wait_events();
    }

    /// Like [`wait_events`](Self::wait_events), but give up after `timeout`
    /// seconds.
    pub fn wait_events_timeout(&mut self, timeout: f64) {
        self.glfw.wait_events_timeout(timeout);
    }
}
