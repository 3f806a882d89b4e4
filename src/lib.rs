// src/lib.rs

//! Platform/windowing layer for the ironpark engine.
//!
//! This crate owns everything between the native windowing system and the
//! engine's synchronous game loop: the display window, the 8-bit paletted
//! software framebuffer, input event pumping, mouse cursor resources, and
//! fullscreen/resolution negotiation. The rest of the engine talks to a
//! single owning [`platform::Platform`] context; backends implement
//! [`platform::backends::Driver`].
//!
//! ```no_run
//! use ironpark_platform::config::ConfigManager;
//! use ironpark_platform::platform::{Platform, PlatformRequest};
//!
//! fn main() -> anyhow::Result<()> {
//!     env_logger::init();
//!     let mut platform = Platform::open_x11(ConfigManager::load_default(), "ironpark")?;
//!     'game: loop {
//!         for request in platform.process_messages()? {
//!             if request == PlatformRequest::Quit {
//!                 break 'game;
//!             }
//!         }
//!         // ... tick the simulation, draw into platform.screen_mut() ...
//!         platform.present()?;
//!     }
//!     platform.shutdown()
//! }
//! ```

pub mod config;
pub mod cursors;
pub mod input;
pub mod keys;
pub mod platform;
pub mod resolution;
pub mod screen;

pub use config::{Config, ConfigManager, DisplayConfig, FullscreenMode};
pub use cursors::{CursorKind, CursorRegistry};
pub use input::{ButtonState, CursorState, InputState, KeyboardState, TextInputSession};
pub use keys::{KeySymbol, Modifiers};
pub use platform::{Platform, PlatformRequest, Shortcut};
pub use resolution::{Resolution, ResolutionCatalog};
pub use screen::{FrameDescription, PaletteColor, Screen};
