//! Window wrapper and event hook dispatch
//!
//! A [`Window`] owns its native GLFW window; dropping the wrapper destroys
//! the handle. Lifecycle events are buffered by GLFW while the caller pumps
//! the event loop and are forwarded to a [`WindowEventHandler`] by
//! [`Window::dispatch_events`], each hook receiving exactly the arguments
//! the native callback carried.

use glfw::WindowEvent;
use thiserror::Error;

/// Window creation errors
#[derive(Error, Debug)]
pub enum WindowError {
    /// GLFW declined to create the window.
    #[error("window creation failed")]
    CreationFailed,

    /// A fullscreen target was requested by name but no connected monitor
    /// matches it.
    #[error("no connected monitor named \"{0}\"")]
    MonitorNotFound(String),
}

/// Overridable window lifecycle hooks.
///
/// Every method has a no-op default, so an implementation only overrides
/// the events it cares about. Hooks receive event arguments only; a handler
/// that needs to mutate the window should record what it saw and act after
/// [`Window::dispatch_events`] returns.
pub trait WindowEventHandler {
    /// The user requested that the window close.
    fn on_close(&mut self) {}

    /// The window contents need to be redrawn.
    fn on_refresh(&mut self) {}

    /// The window was resized, in screen coordinates.
    fn on_resize(&mut self, width: i32, height: i32) {
        let _ = (width, height);
    }

    /// The window was moved, in screen coordinates.
    fn on_move(&mut self, x: i32, y: i32) {
        let _ = (x, y);
    }

    /// The content scale of the window changed.
    fn on_scale_change(&mut self, xscale: f32, yscale: f32) {
        let _ = (xscale, yscale);
    }

    /// The window was iconified or restored.
    fn on_iconify(&mut self, iconified: bool) {
        let _ = iconified;
    }

    /// The window was maximized or restored.
    fn on_maximize(&mut self, maximized: bool) {
        let _ = maximized;
    }

    /// The window gained or lost input focus.
    fn on_focus(&mut self, focused: bool) {
        let _ = focused;
    }
}

/// Owning wrapper around a native GLFW window.
///
/// Created through [`Context::create_window`](crate::Context::create_window).
/// Dropping the wrapper destroys the native window.
pub struct Window {
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, WindowEvent)>,
}

impl Window {
    /// Wrap a freshly created window and enable buffering for the event
    /// kinds the hook trait covers.
    pub(crate) fn from_parts(
        mut window: glfw::PWindow,
        events: glfw::GlfwReceiver<(f64, WindowEvent)>,
    ) -> Self {
        window.set_close_polling(true);
        window.set_refresh_polling(true);
        window.set_size_polling(true);
        window.set_pos_polling(true);
        window.set_content_scale_polling(true);
        window.set_iconify_polling(true);
        window.set_maximize_polling(true);
        window.set_focus_polling(true);
        Self { window, events }
    }

    /// Make the window visible.
    pub fn show(&mut self) {
        self.window.show();
    }

    /// Hide the window.
    pub fn hide(&mut self) {
        self.window.hide();
    }

    /// Whether the close flag is set.
    pub fn should_close(&self) -> bool {
        self.window.should_close()
    }

    /// Set or clear the close flag.
    pub fn set_should_close(&mut self, value: bool) {
        self.window.set_should_close(value);
    }

    /// Resize the window, in screen coordinates.
    pub fn set_size(&mut self, width: i32, height: i32) {
        self.window.set_size(width, height);
    }

    /// Constrain the window size. `None` leaves that bound unconstrained.
    pub fn set_size_limits(
        &mut self,
        min_width: Option<u32>,
        min_height: Option<u32>,
        max_width: Option<u32>,
        max_height: Option<u32>,
    ) {
        self.window
            .set_size_limits(min_width, min_height, max_width, max_height);
    }

    /// Current window size, in screen coordinates.
    pub fn size(&self) -> (i32, i32) {
        self.window.get_size()
    }

    /// Current framebuffer size, in pixels.
    pub fn framebuffer_size(&self) -> (i32, i32) {
        self.window.get_framebuffer_size()
    }

    /// Drain the events buffered since the last pump and forward each one
    /// to the matching hook.
    pub fn dispatch_events(&mut self, handler: &mut dyn WindowEventHandler) {
        for (_, event) in glfw::flush_messages(&self.events) {
            deliver(&event, handler);
        }
    }

    /// Borrow the underlying GLFW window.
    pub fn inner(&self) -> &glfw::PWindow {
        &self.window
    }

    /// Mutably borrow the underlying GLFW window.
    pub fn inner_mut(&mut self) -> &mut glfw::PWindow {
        &mut self.window
    }
}

/// Forward one buffered event to its hook. Events outside the hook set are
/// dropped here.
fn deliver(event: &WindowEvent, handler: &mut dyn WindowEventHandler) {
    match *event {
        WindowEvent::Close => handler.on_close(),
        WindowEvent::Refresh => handler.on_refresh(),
        WindowEvent::Size(width, height) => handler.on_resize(width, height),
        WindowEvent::Pos(x, y) => handler.on_move(x, y),
        WindowEvent::ContentScale(xscale, yscale) => handler.on_scale_change(xscale, yscale),
        WindowEvent::Iconify(iconified) => handler.on_iconify(iconified),
        WindowEvent::Maximize(maximized) => handler.on_maximize(maximized),
        WindowEvent::Focus(focused) => handler.on_focus(focused),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Hook {
        Close,
        Refresh,
        Resize(i32, i32),
        Move(i32, i32),
        Scale(f32, f32),
        Iconify(bool),
        Maximize(bool),
        Focus(bool),
    }

    #[derive(Default)]
    struct Recorder {
        hooks: Vec<Hook>,
    }

    impl WindowEventHandler for Recorder {
        fn on_close(&mut self) {
            self.hooks.push(Hook::Close);
        }

        fn on_refresh(&mut self) {
            self.hooks.push(Hook::Refresh);
        }

        fn on_resize(&mut self, width: i32, height: i32) {
            self.hooks.push(Hook::Resize(width, height));
        }

        fn on_move(&mut self, x: i32, y: i32) {
            self.hooks.push(Hook::Move(x, y));
        }

        fn on_scale_change(&mut self, xscale: f32, yscale: f32) {
            self.hooks.push(Hook::Scale(xscale, yscale));
        }

        fn on_iconify(&mut self, iconified: bool) {
            self.hooks.push(Hook::Iconify(iconified));
        }

        fn on_maximize(&mut self, maximized: bool) {
            self.hooks.push(Hook::Maximize(maximized));
        }

        fn on_focus(&mut self, focused: bool) {
            self.hooks.push(Hook::Focus(focused));
        }
    }

    #[test]
    fn test_each_event_reaches_its_hook_with_its_arguments() {
        let mut recorder = Recorder::default();
        let events = [
            WindowEvent::Close,
            WindowEvent::Refresh,
            WindowEvent::Size(640, 480),
            WindowEvent::Pos(10, -20),
            WindowEvent::ContentScale(1.5, 2.0),
            WindowEvent::Iconify(true),
            WindowEvent::Maximize(false),
            WindowEvent::Focus(true),
        ];

        for event in &events {
            deliver(event, &mut recorder);
        }

        assert_eq!(
            recorder.hooks,
            vec![
                Hook::Close,
                Hook::Refresh,
                Hook::Resize(640, 480),
                Hook::Move(10, -20),
                Hook::Scale(1.5, 2.0),
                Hook::Iconify(true),
                Hook::Maximize(false),
                Hook::Focus(true),
            ]
        );
    }

    #[test]
    fn test_position_events_reach_the_move_hook_not_resize() {
        let mut recorder = Recorder::default();
        deliver(&WindowEvent::Pos(3, 4), &mut recorder);
        assert_eq!(recorder.hooks, vec![Hook::Move(3, 4)]);
    }

    #[test]
    fn test_events_outside_the_hook_set_invoke_nothing() {
        let mut recorder = Recorder::default();
        deliver(&WindowEvent::FramebufferSize(800, 600), &mut recorder);
        deliver(&WindowEvent::CursorPos(1.0, 2.0), &mut recorder);
        assert!(recorder.hooks.is_empty());
    }

    #[test]
    fn test_default_hooks_are_no_ops() {
        struct Passive;
        impl WindowEventHandler for Passive {}

        let mut passive = Passive;
        deliver(&WindowEvent::Size(1, 1), &mut passive);
        deliver(&WindowEvent::Close, &mut passive);
    }
}
