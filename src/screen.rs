// src/screen.rs

//! The off-screen paletted frame store.
//!
//! `Screen` owns the raw 8-bit pixel buffer the renderer draws into and the
//! 256-entry palette that gives the indices meaning. The platform recreates
//! the driver-side surface and resizes the buffer on every window size
//! change; presentation copies the buffer through the driver onto the
//! visible window.

use log::debug;

/// Width in pixels of one dirty-tracking block.
pub const DIRTY_BLOCK_WIDTH: u32 = 64;
/// Height in pixels of one dirty-tracking block.
pub const DIRTY_BLOCK_HEIGHT: u32 = 8;

/// Rows of 8-bit pixels are padded to a 4-byte boundary, matching the pitch
/// the original surface allocator produced.
#[inline]
pub fn aligned_pitch(width: u32) -> u32 {
    (width + 3) & !3
}

/// One palette entry, stored in (red, green, blue, alpha) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaletteColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// The 256-color palette bound to the indexed surface.
#[derive(Debug, Clone)]
pub struct Palette {
    colors: [PaletteColor; 256],
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            colors: [PaletteColor::default(); 256],
        }
    }
}

impl Palette {
    /// Applies a run of colors supplied as flat (blue, green, red, reserved)
    /// quads, the byte order the legacy renderer emits. Each quad is
    /// reordered to (r, g, b) with alpha forced to 0. Entries falling
    /// outside [0, 256) or past the end of `quads` are ignored.
    pub fn apply_bgra_quads(&mut self, quads: &[u8], start_index: usize, count: usize) {
        for i in 0..count {
            let index = start_index + i;
            let offset = i * 4;
            if index >= 256 || offset + 4 > quads.len() {
                break;
            }
            self.colors[index] = PaletteColor {
                r: quads[offset + 2],
                g: quads[offset + 1],
                b: quads[offset],
                a: 0,
            };
        }
    }

    pub fn colors(&self) -> &[PaletteColor; 256] {
        &self.colors
    }
}

/// Geometry of the current frame, published to the renderer after every
/// resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameDescription {
    pub width: u32,
    pub height: u32,
    /// Bytes per pixel row, including alignment padding.
    pub pitch: u32,
    pub origin_x: i32,
    pub origin_y: i32,
}

/// Fixed-size tiling the incremental redraw uses to track changed regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DirtyTiling {
    pub block_width: u32,
    pub block_height: u32,
    pub columns: u32,
    pub rows: u32,
}

impl DirtyTiling {
    fn for_size(width: u32, height: u32) -> Self {
        DirtyTiling {
            block_width: DIRTY_BLOCK_WIDTH,
            block_height: DIRTY_BLOCK_HEIGHT,
            columns: (width >> 6) + 1,
            rows: (height >> 3) + 1,
        }
    }
}

/// The renderer's write target: a raw byte store mirroring the surface
/// dimensions.
#[derive(Debug, Default)]
pub struct PixelBuffer {
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Reallocates the buffer to `new_len` bytes. The overlapping prefix is
    /// copied from the old buffer, any newly exposed tail is zero-filled,
    /// and the old buffer is freed after the copy.
    pub fn reallocate(&mut self, new_len: usize) {
        let mut new_data = vec![0u8; new_len];
        let copy_len = self.data.len().min(new_len);
        new_data[..copy_len].copy_from_slice(&self.data[..copy_len]);
        self.data = new_data;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

/// Owns the pixel buffer, palette, and the frame metadata derived from the
/// current window size.
#[derive(Debug, Default)]
pub struct Screen {
    buffer: PixelBuffer,
    palette: Palette,
    frame: FrameDescription,
    tiling: DirtyTiling,
}

impl Screen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resizes the pixel store to match a new surface of `width` x `height`
    /// with the given row pitch, preserving overlapping content.
    pub fn resize(&mut self, width: u32, height: u32, pitch: u32) {
        self.buffer.reallocate(pitch as usize * height as usize);
        self.frame = FrameDescription {
            width,
            height,
            pitch,
            origin_x: 0,
            origin_y: 0,
        };
        self.tiling = DirtyTiling::for_size(width, height);
        debug!(
            "Screen resized to {}x{} (pitch {}, {} dirty columns x {} rows)",
            width, height, pitch, self.tiling.columns, self.tiling.rows
        );
    }

    pub fn frame(&self) -> &FrameDescription {
        &self.frame
    }

    pub fn tiling(&self) -> &DirtyTiling {
        &self.tiling
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn palette_mut(&mut self) -> &mut Palette {
        &mut self.palette
    }

    pub fn pixels(&self) -> &[u8] {
        self.buffer.bytes()
    }

    pub fn pixels_mut(&mut self) -> &mut [u8] {
        self.buffer.bytes_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pitch_is_rounded_up_to_four_bytes() {
        assert_eq!(aligned_pitch(640), 640);
        assert_eq!(aligned_pitch(641), 644);
        assert_eq!(aligned_pitch(643), 644);
        assert_eq!(aligned_pitch(0), 0);
    }

    #[test]
    fn first_allocation_is_zero_filled() {
        let mut buffer = PixelBuffer::default();
        buffer.reallocate(64);
        assert!(buffer.bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn growing_preserves_prefix_and_zero_fills_tail() {
        let mut buffer = PixelBuffer::default();
        // 100x100 worth of bytes, filled with a marker.
        buffer.reallocate(100 * 100);
        buffer.bytes_mut().fill(0xAB);

        // 200x50 is the same byte count here, so also check an actual grow.
        buffer.reallocate(200 * 80);
        let old_len = 100 * 100;
        assert!(buffer.bytes()[..old_len].iter().all(|&b| b == 0xAB));
        assert!(buffer.bytes()[old_len..].iter().all(|&b| b == 0));
    }

    #[test]
    fn shrinking_keeps_the_leading_bytes() {
        let mut buffer = PixelBuffer::default();
        buffer.reallocate(16);
        for (i, byte) in buffer.bytes_mut().iter_mut().enumerate() {
            *byte = i as u8;
        }
        buffer.reallocate(8);
        assert_eq!(buffer.bytes(), &[0, 1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn palette_reorders_bgra_quads() {
        let mut palette = Palette::default();
        // Blue=0x10, Green=0x20, Red=0x30, reserved=0xFF.
        palette.apply_bgra_quads(&[0x10, 0x20, 0x30, 0xFF], 5, 1);
        let color = palette.colors()[5];
        assert_eq!(
            color,
            PaletteColor {
                r: 0x30,
                g: 0x20,
                b: 0x10,
                a: 0
            }
        );
    }

    #[test]
    fn palette_ignores_out_of_range_entries() {
        let mut palette = Palette::default();
        let quads = vec![0xFFu8; 4 * 4];
        palette.apply_bgra_quads(&quads, 254, 4);
        assert_ne!(palette.colors()[254], PaletteColor::default());
        assert_ne!(palette.colors()[255], PaletteColor::default());
        // Nothing wrapped around.
        assert_eq!(palette.colors()[0], PaletteColor::default());
    }

    #[test]
    fn screen_resize_publishes_frame_and_tiling() {
        let mut screen = Screen::new();
        screen.resize(641, 480, aligned_pitch(641));

        let frame = screen.frame();
        assert_eq!(frame.width, 641);
        assert_eq!(frame.height, 480);
        assert_eq!(frame.pitch, 644);
        assert_eq!((frame.origin_x, frame.origin_y), (0, 0));

        let tiling = screen.tiling();
        assert_eq!(tiling.block_width, 64);
        assert_eq!(tiling.block_height, 8);
        assert_eq!(tiling.columns, (641 >> 6) + 1);
        assert_eq!(tiling.rows, (480 >> 3) + 1);

        assert_eq!(screen.pixels().len(), 644 * 480);
    }
}
