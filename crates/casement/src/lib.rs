//! # Casement
//!
//! Monitor and window wrappers over GLFW with overridable event hooks.
//!
//! The library keeps the object shape of a windowing layer while GLFW does
//! all the actual work: a [`Context`] owns the library instance and the
//! monitor cache, a [`Window`] owns one native window, and window lifecycle
//! events are forwarded to the hooks of a [`WindowEventHandler`]
//! implementation when the application pumps events.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use casement::{Context, WindowEventHandler, WindowSettings};
//!
//! struct App;
//!
//! impl WindowEventHandler for App {
//!     fn on_resize(&mut self, width: i32, height: i32) {
//!         println!("resized to {}x{}", width, height);
//!     }
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut context = Context::new()?;
//!     let mut window = context.create_window(&WindowSettings::default())?;
//!     window.show();
//!
//!     let mut app = App;
//!     while !window.should_close() {
//!         context.wait_events();
//!         window.dispatch_events(&mut app);
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod context;
pub mod monitor;
pub mod settings;
pub mod window;

pub use context::{Context, ContextError};
pub use monitor::{MonitorInfo, Workarea};
pub use settings::{SettingsError, WindowSettings};
pub use window::{Window, WindowError, WindowEventHandler};
