// src/platform/backends/x11/modes.rs
#![allow(non_snake_case)] // Allow non-snake case for X11 types

use super::connection::Connection;
use crate::resolution::Resolution;

use anyhow::Result;
use log::{debug, warn};

// X11 library imports
use libc::c_int;
use x11::{xlib, xrandr};

/// Queries the sizes the display supports through the XRandR extension.
///
/// Servers without RandR (or with an empty size list) fall back to the
/// current desktop resolution as the only mode, which keeps mode
/// negotiation working on bare setups.
pub fn display_modes(connection: &Connection) -> Result<Vec<Resolution>> {
    let mut count: c_int = 0;
    // SAFETY: Valid display and screen number; the returned array is owned
    // by Xlib's per-display cache and must not be freed here.
    let sizes = unsafe { xrandr::XRRSizes(connection.display(), connection.screen(), &mut count) };

    if sizes.is_null() || count <= 0 {
        warn!("XRRSizes returned no modes; falling back to the desktop resolution.");
        return Ok(vec![desktop_resolution(connection)]);
    }

    let mut modes = Vec::with_capacity(count as usize);
    // SAFETY: RandR guarantees `count` valid entries at `sizes`.
    for i in 0..count as usize {
        let size = unsafe { *sizes.add(i) };
        if size.width > 0 && size.height > 0 {
            modes.push(Resolution {
                width: size.width as u32,
                height: size.height as u32,
            });
        }
    }
    debug!("XRandR reported {} display modes", modes.len());
    Ok(modes)
}

/// The desktop's current resolution on the default screen.
pub fn desktop_resolution(connection: &Connection) -> Resolution {
    // SAFETY: Valid display and screen number; these only read cached
    // server geometry.
    let (width, height) = unsafe {
        (
            xlib::XDisplayWidth(connection.display(), connection.screen()),
            xlib::XDisplayHeight(connection.display(), connection.screen()),
        )
    };
    Resolution {
        width: width.max(1) as u32,
        height: height.max(1) as u32,
    }
}
