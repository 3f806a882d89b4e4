// src/platform/backends/x11/connection.rs
#![allow(non_snake_case)] // Allow non-snake case for X11 types

use anyhow::{anyhow, Result};
use log::{debug, info, warn};
use std::ptr;

// X11 library imports
use libc::c_int;
use x11::xlib;

/// Manages an X11 Display connection, ensuring it's closed on drop.
#[derive(Debug)]
struct ManagedDisplay {
    ptr: *mut xlib::Display,
}

impl ManagedDisplay {
    /// Opens a connection to the X server named by the `DISPLAY`
    /// environment variable.
    fn new() -> Result<Self> {
        // SAFETY: Passing NULL makes XOpenDisplay use $DISPLAY.
        let display_ptr = unsafe { xlib::XOpenDisplay(ptr::null()) };
        if display_ptr.is_null() {
            Err(anyhow!(
                "Failed to open X display. Check DISPLAY environment variable or X server status."
            ))
        } else {
            debug!("X display opened: {:p}", display_ptr);
            Ok(Self { ptr: display_ptr })
        }
    }

    #[inline]
    fn raw(&self) -> *mut xlib::Display {
        self.ptr
    }
}

impl Drop for ManagedDisplay {
    fn drop(&mut self) {
        if !self.ptr.is_null() {
            info!("Closing X11 display connection: {:p}", self.ptr);
            // SAFETY: The pointer is non-null and came from XOpenDisplay.
            unsafe {
                let status = xlib::XCloseDisplay(self.ptr);
                if status != 0 {
                    warn!("XCloseDisplay returned non-zero status: {}", status);
                }
            }
        }
    }
}

/// The connection to the X server plus the per-screen identifiers the rest
/// of the backend needs (screen number, root window, default visual and
/// depth).
///
/// The connection is closed automatically on drop; `cleanup` may be called
/// earlier and is idempotent.
#[derive(Debug)]
pub struct Connection {
    managed_display: ManagedDisplay,
    screen: c_int,
    root: xlib::Window,
    visual: *mut xlib::Visual,
    depth: c_int,
}

impl Connection {
    /// Establishes a new connection to the X server and caches the default
    /// screen's root window, visual, and depth.
    pub fn new() -> Result<Self> {
        info!("Establishing X11 server connection.");
        let managed_display = ManagedDisplay::new()?;

        // SAFETY: The display pointer is valid for the lifetime of
        // `managed_display`; these queries only read server defaults.
        let (screen, root, visual, depth) = unsafe {
            let screen = xlib::XDefaultScreen(managed_display.raw());
            let root = xlib::XRootWindow(managed_display.raw(), screen);
            let visual = xlib::XDefaultVisual(managed_display.raw(), screen);
            let depth = xlib::XDefaultDepth(managed_display.raw(), screen);
            (screen, root, visual, depth)
        };
        if visual.is_null() {
            return Err(anyhow!("Failed to get default visual for screen {}", screen));
        }
        debug!(
            "X11 connection ready: screen {}, root {}, depth {}",
            screen, root, depth
        );

        Ok(Connection {
            managed_display,
            screen,
            root,
            visual,
            depth,
        })
    }

    /// Marks the connection as cleaned up; the actual `XCloseDisplay`
    /// happens in `ManagedDisplay`'s drop unless it already ran. Idempotent.
    pub fn cleanup(&mut self) {
        if !self.managed_display.ptr.is_null() {
            info!("X11 connection cleanup; close deferred to drop.");
        }
    }

    /// Returns the raw X11 display pointer.
    ///
    /// The pointer is valid for the lifetime of this `Connection`; callers
    /// must not hold it past the connection's drop.
    #[inline]
    pub fn display(&self) -> *mut xlib::Display {
        self.managed_display.raw()
    }

    #[inline]
    pub fn screen(&self) -> c_int {
        self.screen
    }

    #[inline]
    pub fn root(&self) -> xlib::Window {
        self.root
    }

    #[inline]
    pub fn visual(&self) -> *mut xlib::Visual {
        self.visual
    }

    #[inline]
    pub fn depth(&self) -> c_int {
        self.depth
    }

    /// Flushes the X command buffer.
    pub fn flush(&self) {
        // SAFETY: Display pointer is valid while self lives.
        unsafe {
            xlib::XFlush(self.display());
        }
    }
}
