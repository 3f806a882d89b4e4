// src/platform/backends/mod.rs

//! Defines the `Driver` trait for windowing backends and the common types
//! they exchange with the platform layer, such as `BackendEvent` and
//! `WindowFlags`.
//!
//! A driver bridges one native windowing API to the engine's synchronous,
//! polling game loop: it drains the native event queue into generic
//! `BackendEvent`s once per tick and exposes the window, surface, cursor,
//! and display-mode operations the platform needs. All driver calls happen
//! on the thread that owns the `Platform`.

use crate::config::FullscreenMode;
use crate::cursors::CursorImage;
use crate::keys::{KeySymbol, Modifiers};
use crate::resolution::Resolution;
use crate::screen::{FrameDescription, PaletteColor};
use anyhow::Result;
use bitflags::bitflags;

#[cfg(test)]
pub mod mock;
pub mod x11;

bitflags! {
    /// Window-manager state of the engine window, queried when deciding
    /// whether a resize should be persisted as the new windowed size.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct WindowFlags: u8 {
        const MAXIMIZED = 1 << 0;
        const MINIMIZED = 1 << 1;
        const FULLSCREEN = 1 << 2;
        const BORDERLESS_FULLSCREEN = 1 << 3;
    }
}

impl WindowFlags {
    /// True when the window is in a state where its size is not a
    /// user-chosen windowed size.
    pub fn obscures_windowed_size(self) -> bool {
        self.intersects(
            WindowFlags::MAXIMIZED
                | WindowFlags::MINIMIZED
                | WindowFlags::FULLSCREEN
                | WindowFlags::BORDERLESS_FULLSCREEN,
        )
    }
}

/// Represents mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    Other(u8),
}

/// Cursors the native platform provides ready-made; everything else is
/// built from bitmap resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemCursor {
    Arrow,
    Hand,
}

/// Opaque driver-side cursor resource identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CursorHandle(pub u64);

/// Geometry of a freshly created driver surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceInfo {
    /// Bytes per row of the 8-bit surface, including alignment padding.
    pub pitch: u32,
}

/// Events originating from the native windowing system, translated into the
/// engine's vocabulary. Produced by `Driver::process_events`, consumed by
/// the platform's event pump once per tick.
#[derive(Debug, Clone, PartialEq)]
pub enum BackendEvent {
    /// The platform asked the application to close.
    Quit,
    /// The window's drawable area changed size.
    WindowResized { width: u32, height: u32 },
    /// The pointer moved, in window coordinates.
    MouseMotion { x: i32, y: i32 },
    /// Vertical wheel movement, positive away from the user.
    MouseWheel { delta: i32 },
    MouseButtonDown { button: MouseButton, x: i32, y: i32 },
    MouseButtonUp { button: MouseButton, x: i32, y: i32 },
    /// A key went down. `scancode` identifies the physical key, `symbol`
    /// the logical meaning under the current layout.
    KeyDown {
        scancode: u8,
        symbol: KeySymbol,
        modifiers: Modifiers,
    },
    /// A multi-touch gesture update. `distance_delta` is the normalized
    /// change in finger spread since the previous event.
    MultiGesture {
        fingers: u8,
        distance_delta: f32,
        timestamp_ms: u32,
    },
    /// A composed character arrived from the IME/text layer, as UTF-8
    /// bytes.
    TextInput { bytes: Vec<u8> },
}

/// Interface every windowing backend implements.
///
/// The driver owns the native window and all native resources (surface,
/// cursors). Failures from surface creation, palette application,
/// presentation, and fullscreen switching are unrecoverable backend errors:
/// they are returned as `Err` and bubble to the engine's single top-level
/// termination point rather than aborting in place.
pub trait Driver {
    /// Drains all pending native events, non-blocking, in arrival order.
    fn process_events(&mut self) -> Result<Vec<BackendEvent>>;

    /// Snapshot of the whole keyboard's current held state, indexed by
    /// scan code.
    fn keyboard_snapshot(&mut self) -> [bool; 256];

    /// Releases any existing surface and creates a fresh 8-bit indexed
    /// surface of the given size, returning its row pitch.
    fn create_surface(&mut self, width: u32, height: u32) -> Result<SurfaceInfo>;

    /// Binds a new 256-entry palette to the surface.
    fn apply_palette(&mut self, colors: &[PaletteColor; 256]) -> Result<()>;

    /// Copies the paletted pixel buffer into the surface and blits/flips it
    /// onto the visible window. The driver handles any locking the native
    /// surface requires and always unlocks, even on failure.
    fn present(&mut self, pixels: &[u8], frame: &FrameDescription) -> Result<()>;

    fn set_window_size(&mut self, width: u32, height: u32) -> Result<()>;

    /// Applies the native fullscreen flag for the target mode. The caller
    /// handles resolution selection beforehand.
    fn set_fullscreen(&mut self, mode: FullscreenMode) -> Result<()>;

    fn window_flags(&self) -> WindowFlags;

    /// Native mode list of the display the window is currently on.
    fn display_modes(&mut self) -> Result<Vec<Resolution>>;

    /// The desktop's current resolution, used for aspect-ratio filtering.
    fn desktop_resolution(&mut self) -> Result<Resolution>;

    fn create_system_cursor(&mut self, cursor: SystemCursor) -> Result<CursorHandle>;

    fn create_bitmap_cursor(&mut self, image: &CursorImage) -> Result<CursorHandle>;

    /// Makes `handle` the active cursor. The handle must have come from one
    /// of the `create_*_cursor` methods of this driver.
    fn set_cursor(&mut self, handle: CursorHandle);

    fn free_cursor(&mut self, handle: CursorHandle);

    /// Tells the native text layer a capture session started; backends
    /// without an IME hook can ignore this.
    fn start_text_input(&mut self) {}

    /// Tells the native text layer the capture session ended.
    fn stop_text_input(&mut self) {}

    /// Releases all native resources. Idempotent; called before drop.
    fn cleanup(&mut self) -> Result<()>;
}
