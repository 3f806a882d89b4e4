// src/platform/backends/x11/window.rs
#![allow(non_snake_case)] // Allow non-snake case for X11 types

use super::connection::Connection;
use anyhow::{anyhow, Context, Result};
use log::{debug, info, trace, warn};
use std::ffi::CString;
use std::mem;

// X11 library imports
use libc::{c_char, c_long, c_uint};
use x11::xlib;

/// `_NET_WM_STATE` client message action: remove the property.
const NET_WM_STATE_REMOVE: c_long = 0;
/// `_NET_WM_STATE` client message action: add the property.
const NET_WM_STATE_ADD: c_long = 1;

/// The engine's X11 window and the WM atoms it talks through.
///
/// Owns the window ID, tracks the current pixel dimensions, and provides
/// resize, fullscreen, title, and cursor-define operations. Cleanup is
/// explicit (`cleanup`) because Xlib calls need the `Connection`, which the
/// `Drop` impl cannot borrow; drop only logs if cleanup was skipped.
#[derive(Debug)]
pub struct Window {
    id: xlib::Window,
    wm_delete_window: xlib::Atom,
    protocols_atom: xlib::Atom,
    net_wm_state: xlib::Atom,
    net_wm_state_fullscreen: xlib::Atom,
    current_pixel_width: u32,
    current_pixel_height: u32,
}

impl Window {
    /// Creates the window in windowed mode at the given size.
    ///
    /// The window is created windowed first (never fullscreen) so the
    /// display it lands on is known before any mode negotiation happens.
    /// It is not mapped until `map_and_flush`.
    pub fn new(connection: &Connection, width: u32, height: u32, title: &str) -> Result<Self> {
        info!("Creating X11 window: {}x{}px", width, height);
        let display = connection.display();

        // SAFETY: Xlib FFI. The connection guarantees a valid display,
        // root window, and visual for the default screen.
        let window_id = unsafe {
            let mut attributes: xlib::XSetWindowAttributes = mem::zeroed();
            attributes.background_pixel = xlib::XBlackPixel(display, connection.screen());
            attributes.event_mask = xlib::StructureNotifyMask
                | xlib::KeyPressMask
                | xlib::ButtonPressMask
                | xlib::ButtonReleaseMask
                | xlib::PointerMotionMask
                | xlib::ExposureMask;

            xlib::XCreateWindow(
                display,
                connection.root(),
                0,
                0,
                width as c_uint,
                height as c_uint,
                0, // border width
                connection.depth(),
                xlib::InputOutput as c_uint,
                connection.visual(),
                xlib::CWBackPixel | xlib::CWEventMask,
                &mut attributes,
            )
        };
        if window_id == 0 {
            return Err(anyhow!("XCreateWindow failed"));
        }
        debug!("X window created (ID: {})", window_id);

        let mut window = Self {
            id: window_id,
            wm_delete_window: 0,
            protocols_atom: 0,
            net_wm_state: 0,
            net_wm_state_fullscreen: 0,
            current_pixel_width: width,
            current_pixel_height: height,
        };
        window.setup_protocols(connection, title)?;
        Ok(window)
    }

    /// Registers `WM_DELETE_WINDOW`, interns the EWMH fullscreen atoms, and
    /// sets the window title.
    fn setup_protocols(&mut self, connection: &Connection, title: &str) -> Result<()> {
        let display = connection.display();
        // SAFETY: Xlib FFI over a valid display and window ID.
        unsafe {
            self.wm_delete_window = xlib::XInternAtom(
                display,
                b"WM_DELETE_WINDOW\0".as_ptr() as *const c_char,
                xlib::False,
            );
            self.protocols_atom = xlib::XInternAtom(
                display,
                b"WM_PROTOCOLS\0".as_ptr() as *const c_char,
                xlib::False,
            );
            self.net_wm_state = xlib::XInternAtom(
                display,
                b"_NET_WM_STATE\0".as_ptr() as *const c_char,
                xlib::False,
            );
            self.net_wm_state_fullscreen = xlib::XInternAtom(
                display,
                b"_NET_WM_STATE_FULLSCREEN\0".as_ptr() as *const c_char,
                xlib::False,
            );

            if self.wm_delete_window != 0 && self.protocols_atom != 0 {
                xlib::XSetWMProtocols(display, self.id, [self.wm_delete_window].as_mut_ptr(), 1);
            } else {
                warn!("WM_DELETE_WINDOW/WM_PROTOCOLS atoms unavailable; close button events will not arrive.");
            }

            let title_cstr = CString::new(title).context("Window title contains NUL")?;
            xlib::XStoreName(display, self.id, title_cstr.as_ptr() as *mut c_char);
        }
        Ok(())
    }

    /// Maps the window and flushes so it becomes visible immediately.
    pub fn map_and_flush(&self, connection: &Connection) {
        if self.id == 0 {
            warn!("map_and_flush called on a destroyed window.");
            return;
        }
        // SAFETY: Valid display and window ID.
        unsafe {
            xlib::XMapWindow(connection.display(), self.id);
            xlib::XFlush(connection.display());
        }
        debug!("Window mapped.");
    }

    /// Asks the server to resize the window.
    pub fn set_size(&self, connection: &Connection, width: u32, height: u32) -> Result<()> {
        if self.id == 0 {
            return Err(anyhow!("set_size on a destroyed window"));
        }
        trace!("Resizing window {} to {}x{}", self.id, width, height);
        // SAFETY: Valid display and window ID; dimensions are server-checked.
        unsafe {
            xlib::XResizeWindow(
                connection.display(),
                self.id,
                width as c_uint,
                height as c_uint,
            );
            xlib::XFlush(connection.display());
        }
        Ok(())
    }

    /// Adds or removes the EWMH fullscreen state via a client message to
    /// the root window (the form window managers require for mapped
    /// windows).
    pub fn set_fullscreen_state(&self, connection: &Connection, fullscreen: bool) -> Result<()> {
        if self.id == 0 {
            return Err(anyhow!("set_fullscreen_state on a destroyed window"));
        }
        if self.net_wm_state == 0 || self.net_wm_state_fullscreen == 0 {
            return Err(anyhow!(
                "Window manager does not expose _NET_WM_STATE; cannot toggle fullscreen"
            ));
        }
        debug!(
            "Setting fullscreen state of window {} to {}",
            self.id, fullscreen
        );

        // SAFETY: Xlib FFI; the event struct is fully initialized before
        // XSendEvent reads it.
        let status = unsafe {
            let mut event: xlib::XClientMessageEvent = mem::zeroed();
            event.type_ = xlib::ClientMessage;
            event.window = self.id;
            event.message_type = self.net_wm_state;
            event.format = 32;
            event.data.set_long(
                0,
                if fullscreen {
                    NET_WM_STATE_ADD
                } else {
                    NET_WM_STATE_REMOVE
                },
            );
            event.data.set_long(1, self.net_wm_state_fullscreen as c_long);
            event.data.set_long(2, 0);
            event.data.set_long(3, 1); // source indication: normal application

            let mut xevent = xlib::XEvent { client_message: event };
            xlib::XSendEvent(
                connection.display(),
                connection.root(),
                xlib::False,
                xlib::SubstructureRedirectMask | xlib::SubstructureNotifyMask,
                &mut xevent,
            )
        };
        // SAFETY note: XSendEvent returns 0 on conversion failure.
        if status == 0 {
            return Err(anyhow!("XSendEvent for _NET_WM_STATE failed"));
        }
        connection.flush();
        Ok(())
    }

    /// Sets the active cursor for this window.
    pub fn define_cursor(&self, connection: &Connection, cursor: xlib::Cursor) {
        if self.id == 0 {
            return;
        }
        // SAFETY: Valid display, window ID, and cursor XID.
        unsafe {
            xlib::XDefineCursor(connection.display(), self.id, cursor);
            xlib::XFlush(connection.display());
        }
    }

    /// Destroys the window. Idempotent.
    pub fn cleanup(&mut self, connection: &Connection) {
        if self.id != 0 && !connection.display().is_null() {
            info!("Destroying X11 window (ID: {})", self.id);
            // SAFETY: Valid display and window ID; the ID is zeroed after
            // so no further Xlib calls use it.
            unsafe {
                xlib::XDestroyWindow(connection.display(), self.id);
                xlib::XFlush(connection.display());
            }
            self.id = 0;
        }
    }

    #[inline]
    pub fn id(&self) -> xlib::Window {
        self.id
    }

    #[inline]
    pub fn wm_delete_window_atom(&self) -> xlib::Atom {
        self.wm_delete_window
    }

    #[inline]
    pub fn protocols_atom(&self) -> xlib::Atom {
        self.protocols_atom
    }

    #[inline]
    pub fn current_dimensions(&self) -> (u32, u32) {
        (self.current_pixel_width, self.current_pixel_height)
    }

    /// Updates the cached dimensions; called when a `ConfigureNotify`
    /// reports a new size.
    pub fn update_dimensions(&mut self, width: u32, height: u32) {
        if self.current_pixel_width != width || self.current_pixel_height != height {
            debug!(
                "Window dimensions cached: {}x{} -> {}x{}",
                self.current_pixel_width, self.current_pixel_height, width, height
            );
            self.current_pixel_width = width;
            self.current_pixel_height = height;
        }
    }
}

impl Drop for Window {
    fn drop(&mut self) {
        if self.id != 0 {
            warn!(
                "Window (ID: {}) dropped without explicit cleanup; server resources may leak.",
                self.id
            );
        }
    }
}
