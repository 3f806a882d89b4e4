// src/platform/backends/x11/mod.rs

//! X11 backend. Implements the `Driver` trait over raw Xlib plus the XRandR
//! extension, split into focused submodules:
//!
//! - `connection`: display connection and default-screen identifiers.
//! - `window`: the engine window, WM protocols, EWMH fullscreen.
//! - `surface`: palette-expanded software presentation via `XPutImage`.
//! - `event`: translation of `XEvent`s into `BackendEvent`s.
//! - `modes`: display mode enumeration through XRandR.

pub mod connection;
pub mod event;
pub mod modes;
pub mod surface;
pub mod window;

use self::connection::Connection;
use self::surface::Surface;
use self::window::Window;
use crate::config::FullscreenMode;
use crate::cursors::{CursorImage, CURSOR_SIZE};
use crate::platform::backends::{
    BackendEvent, CursorHandle, Driver, SurfaceInfo, SystemCursor, WindowFlags,
};
use crate::resolution::Resolution;
use crate::screen::{aligned_pitch, FrameDescription, PaletteColor};

use anyhow::{anyhow, Context, Result};
use log::{debug, info, trace, warn};
use std::collections::HashSet;
use std::mem;

// X11 library imports
use libc::{c_char, c_uint};
use x11::xlib;

/// X font cursor glyph for the standard left-pointing arrow.
const XC_LEFT_PTR: c_uint = 68;
/// X font cursor glyph for the pointing hand.
const XC_HAND2: c_uint = 60;

/// The X11 implementation of `Driver`.
///
/// Field order matters for drop: the surface (which owns a GC) and the
/// window must go before the connection closes the display.
pub struct XDriver {
    window: Window,
    surface: Option<Surface>,
    /// XIDs of cursors this driver created and still owns.
    cursors: HashSet<xlib::Cursor>,
    flags: WindowFlags,
    cleaned_up: bool,
    connection: Connection,
}

impl XDriver {
    /// Connects to the X server and creates a mapped window of the given
    /// size, always in windowed mode.
    pub fn new(width: u32, height: u32, title: &str) -> Result<Self> {
        info!("Initializing X11 driver");
        let connection = Connection::new().context("X11 connection failed")?;
        let window = Window::new(&connection, width, height, title)
            .context("X11 window creation failed")?;
        window.map_and_flush(&connection);

        Ok(Self {
            window,
            surface: None,
            cursors: HashSet::new(),
            flags: WindowFlags::empty(),
            cleaned_up: false,
            connection,
        })
    }

    fn surface_mut(&mut self) -> Result<&mut Surface> {
        self.surface
            .as_mut()
            .ok_or_else(|| anyhow!("No surface created yet"))
    }

    /// Builds an X cursor from a monochrome bitmap resource.
    ///
    /// X bitmaps are little-endian within each byte, so the MSB-first
    /// resource rows are bit-reversed per byte on the way in.
    fn build_bitmap_cursor(&mut self, image: &CursorImage) -> Result<xlib::Cursor> {
        let mut data_bits = image.data;
        let mut mask_bits = image.mask;
        for byte in data_bits.iter_mut().chain(mask_bits.iter_mut()) {
            *byte = byte.reverse_bits();
        }

        let display = self.connection.display();
        // SAFETY: Xlib FFI over a valid display and root drawable. The
        // bitmap arrays outlive the XCreateBitmapFromData calls, which copy
        // the data server-side. Both pixmaps are freed before returning.
        unsafe {
            let data_pixmap = xlib::XCreateBitmapFromData(
                display,
                self.connection.root(),
                data_bits.as_ptr() as *const c_char,
                CURSOR_SIZE,
                CURSOR_SIZE,
            );
            if data_pixmap == 0 {
                return Err(anyhow!("XCreateBitmapFromData failed for cursor data"));
            }
            let mask_pixmap = xlib::XCreateBitmapFromData(
                display,
                self.connection.root(),
                mask_bits.as_ptr() as *const c_char,
                CURSOR_SIZE,
                CURSOR_SIZE,
            );
            if mask_pixmap == 0 {
                xlib::XFreePixmap(display, data_pixmap);
                return Err(anyhow!("XCreateBitmapFromData failed for cursor mask"));
            }

            let mut fg: xlib::XColor = mem::zeroed();
            fg.flags = (xlib::DoRed | xlib::DoGreen | xlib::DoBlue) as c_char;
            let mut bg: xlib::XColor = mem::zeroed();
            bg.red = 0xFFFF;
            bg.green = 0xFFFF;
            bg.blue = 0xFFFF;
            bg.flags = (xlib::DoRed | xlib::DoGreen | xlib::DoBlue) as c_char;

            let cursor = xlib::XCreatePixmapCursor(
                display,
                data_pixmap,
                mask_pixmap,
                &mut fg,
                &mut bg,
                image.hot_x,
                image.hot_y,
            );
            xlib::XFreePixmap(display, data_pixmap);
            xlib::XFreePixmap(display, mask_pixmap);
            if cursor == 0 {
                return Err(anyhow!("XCreatePixmapCursor failed"));
            }
            Ok(cursor)
        }
    }
}

impl Driver for XDriver {
    fn process_events(&mut self) -> Result<Vec<BackendEvent>> {
        event::process_pending_events(&self.connection, &mut self.window)
    }

    fn keyboard_snapshot(&mut self) -> [bool; 256] {
        let mut snapshot = [false; 256];
        let mut keymap = [0 as c_char; 32];
        // SAFETY: XQueryKeymap fills exactly 32 bytes, one bit per keycode.
        unsafe { xlib::XQueryKeymap(self.connection.display(), keymap.as_mut_ptr()) };

        for keycode in 8u32..=255 {
            let byte = keymap[(keycode / 8) as usize] as u8;
            if byte & (1 << (keycode % 8)) != 0 {
                // SAFETY: Valid display; index 0 is the unshifted keysym.
                let keysym = unsafe {
                    xlib::XKeycodeToKeysym(self.connection.display(), keycode as xlib::KeyCode, 0)
                };
                snapshot[event::keycode_to_scancode(keycode, keysym) as usize] = true;
            }
        }
        snapshot
    }

    fn create_surface(&mut self, width: u32, height: u32) -> Result<SurfaceInfo> {
        // Replacing the surface drops the old one first.
        self.surface = None;
        let surface = Surface::new(&self.connection, self.window.id(), width, height)?;
        self.surface = Some(surface);
        Ok(SurfaceInfo {
            pitch: aligned_pitch(width),
        })
    }

    fn apply_palette(&mut self, colors: &[PaletteColor; 256]) -> Result<()> {
        self.surface_mut()?.apply_palette(colors);
        Ok(())
    }

    fn present(&mut self, pixels: &[u8], frame: &FrameDescription) -> Result<()> {
        let window_id = self.window.id();
        let surface = self
            .surface
            .as_mut()
            .ok_or_else(|| anyhow!("No surface created yet"))?;
        surface.present(&self.connection, window_id, pixels, frame)
    }

    fn set_window_size(&mut self, width: u32, height: u32) -> Result<()> {
        self.window.set_size(&self.connection, width, height)
    }

    fn set_fullscreen(&mut self, mode: FullscreenMode) -> Result<()> {
        debug!("Applying fullscreen mode {:?}", mode);
        self.flags
            .remove(WindowFlags::FULLSCREEN | WindowFlags::BORDERLESS_FULLSCREEN);
        match mode {
            FullscreenMode::Windowed => {
                self.window.set_fullscreen_state(&self.connection, false)?;
            }
            FullscreenMode::Exclusive => {
                self.window.set_fullscreen_state(&self.connection, true)?;
                self.flags.insert(WindowFlags::FULLSCREEN);
            }
            FullscreenMode::Borderless => {
                self.window.set_fullscreen_state(&self.connection, true)?;
                self.flags.insert(WindowFlags::BORDERLESS_FULLSCREEN);
            }
        }
        Ok(())
    }

    fn window_flags(&self) -> WindowFlags {
        self.flags
    }

    fn display_modes(&mut self) -> Result<Vec<Resolution>> {
        modes::display_modes(&self.connection)
    }

    fn desktop_resolution(&mut self) -> Result<Resolution> {
        Ok(modes::desktop_resolution(&self.connection))
    }

    fn create_system_cursor(&mut self, cursor: SystemCursor) -> Result<CursorHandle> {
        let glyph = match cursor {
            SystemCursor::Arrow => XC_LEFT_PTR,
            SystemCursor::Hand => XC_HAND2,
        };
        // SAFETY: Valid display; glyph indices come from the cursor font.
        let xid = unsafe { xlib::XCreateFontCursor(self.connection.display(), glyph) };
        if xid == 0 {
            return Err(anyhow!("XCreateFontCursor failed for {:?}", cursor));
        }
        self.cursors.insert(xid);
        Ok(CursorHandle(xid))
    }

    fn create_bitmap_cursor(&mut self, image: &CursorImage) -> Result<CursorHandle> {
        let xid = self.build_bitmap_cursor(image)?;
        self.cursors.insert(xid);
        Ok(CursorHandle(xid))
    }

    fn set_cursor(&mut self, handle: CursorHandle) {
        if self.cursors.contains(&handle.0) {
            self.window.define_cursor(&self.connection, handle.0);
        } else {
            warn!("set_cursor called with unknown handle {:?}", handle);
        }
    }

    fn free_cursor(&mut self, handle: CursorHandle) {
        if self.cursors.remove(&handle.0) {
            // SAFETY: The XID came from one of our create calls and is
            // removed from the set before freeing, so it is freed once.
            unsafe {
                xlib::XFreeCursor(self.connection.display(), handle.0);
            }
        }
    }

    fn start_text_input(&mut self) {
        // Keyboard focus already delivers composed text via XLookupString.
        trace!("Text input capture started");
    }

    fn stop_text_input(&mut self) {
        trace!("Text input capture stopped");
    }

    fn cleanup(&mut self) -> Result<()> {
        if self.cleaned_up {
            return Ok(());
        }
        info!("Cleaning up X11 driver");
        for xid in self.cursors.drain() {
            // SAFETY: Each XID was created by this driver and freed once.
            unsafe {
                xlib::XFreeCursor(self.connection.display(), xid);
            }
        }
        self.surface = None;
        self.window.cleanup(&self.connection);
        self.connection.cleanup();
        self.cleaned_up = true;
        Ok(())
    }
}

impl Drop for XDriver {
    fn drop(&mut self) {
        if !self.cleaned_up {
            warn!("XDriver dropped without cleanup; releasing resources now.");
            let _ = self.cleanup();
        }
    }
}
