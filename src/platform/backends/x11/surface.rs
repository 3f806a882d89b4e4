// src/platform/backends/x11/surface.rs
#![allow(non_snake_case)] // Allow non-snake case for X11 types

use super::connection::Connection;
use crate::screen::{FrameDescription, PaletteColor};

use anyhow::{anyhow, Result};
use log::{debug, trace};
use std::ptr;

// X11 library imports
use libc::{c_char, c_int, c_uint};
use x11::xlib;

/// RAII wrapper for an X11 Graphics Context (GC).
#[derive(Debug)]
struct SafeGc {
    display: *mut xlib::Display,
    gc: xlib::GC,
}

impl SafeGc {
    fn new(display: *mut xlib::Display, drawable: xlib::Drawable) -> Result<Self> {
        // SAFETY: Valid display and drawable; zero value mask means default
        // GC attributes.
        let gc = unsafe { xlib::XCreateGC(display, drawable, 0, ptr::null_mut()) };
        if gc.is_null() {
            return Err(anyhow!("XCreateGC failed"));
        }
        Ok(Self { display, gc })
    }

    #[inline]
    fn raw(&self) -> xlib::GC {
        self.gc
    }
}

impl Drop for SafeGc {
    fn drop(&mut self) {
        if !self.gc.is_null() && !self.display.is_null() {
            // SAFETY: GC came from XCreateGC on this display and is freed
            // exactly once.
            unsafe {
                xlib::XFreeGC(self.display, self.gc);
            }
        }
    }
}

/// The software presentation surface: an 8-bit indexed frame expanded
/// through the palette into a truecolor framebuffer and pushed to the
/// window with `XPutImage`.
pub struct Surface {
    gc: SafeGc,
    /// Expanded 0x00RRGGBB pixels, width*height entries.
    framebuffer: Vec<u32>,
    width: u32,
    height: u32,
    /// Palette entry -> native 32-bit pixel, rebuilt on every palette change.
    pixel_table: [u32; 256],
}

impl Surface {
    pub fn new(
        connection: &Connection,
        window: xlib::Window,
        width: u32,
        height: u32,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(anyhow!("Surface dimensions must be non-zero"));
        }
        debug!("Creating X11 presentation surface: {}x{}", width, height);

        let gc = SafeGc::new(connection.display(), window)?;
        let framebuffer = vec![0u32; width as usize * height as usize];

        Ok(Self {
            gc,
            framebuffer,
            width,
            height,
            pixel_table: [0u32; 256],
        })
    }

    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Rebuilds the palette-to-pixel table. The default X visual on a
    /// 24/32-bit screen stores pixels as 0x00RRGGBB.
    pub fn apply_palette(&mut self, colors: &[PaletteColor; 256]) {
        for (slot, color) in self.pixel_table.iter_mut().zip(colors.iter()) {
            *slot = ((color.r as u32) << 16) | ((color.g as u32) << 8) | (color.b as u32);
        }
        trace!("Palette pixel table rebuilt");
    }

    /// Expands the 8-bit frame through the palette and puts it on the
    /// window. The `XImage` is created per call over the framebuffer and its
    /// data pointer detached before destruction so Xlib never frees Rust
    /// memory.
    pub fn present(
        &mut self,
        connection: &Connection,
        window: xlib::Window,
        pixels: &[u8],
        frame: &FrameDescription,
    ) -> Result<()> {
        if frame.width != self.width || frame.height != self.height {
            return Err(anyhow!(
                "Frame {}x{} does not match surface {}x{}",
                frame.width,
                frame.height,
                self.width,
                self.height
            ));
        }
        let needed = frame.pitch as usize * frame.height as usize;
        if pixels.len() < needed {
            return Err(anyhow!(
                "Pixel buffer too small: {} bytes for pitch {} x height {}",
                pixels.len(),
                frame.pitch,
                frame.height
            ));
        }

        let width = self.width as usize;
        for y in 0..self.height as usize {
            let src_row = &pixels[y * frame.pitch as usize..][..width];
            let dst_row = &mut self.framebuffer[y * width..][..width];
            for (dst, &index) in dst_row.iter_mut().zip(src_row.iter()) {
                *dst = self.pixel_table[index as usize];
            }
        }

        // SAFETY: The framebuffer outlives the image; the data pointer is
        // detached before XDestroyImage so only the struct is freed.
        unsafe {
            let image = xlib::XCreateImage(
                connection.display(),
                connection.visual(),
                connection.depth() as c_uint,
                xlib::ZPixmap,
                0,
                self.framebuffer.as_mut_ptr() as *mut c_char,
                self.width as c_uint,
                self.height as c_uint,
                32,
                (self.width * 4) as c_int,
            );
            if image.is_null() {
                return Err(anyhow!(
                    "XCreateImage failed for {}x{} surface",
                    self.width,
                    self.height
                ));
            }
            xlib::XPutImage(
                connection.display(),
                window,
                self.gc.raw(),
                image,
                0,
                0,
                0,
                0,
                self.width as c_uint,
                self.height as c_uint,
            );
            (*image).data = ptr::null_mut();
            xlib::XDestroyImage(image);
            xlib::XFlush(connection.display());
        }
        Ok(())
    }
}
