// src/cursors/mod.rs

//! The fixed set of mouse cursors the engine UI uses and the registry that
//! owns their native handles.
//!
//! Two cursors come from the native platform (arrow, pointing hand); the
//! rest are 32x32 monochrome bitmap+mask pairs with per-cursor hotspots,
//! carried as static resources in `data`.

pub mod data;

use crate::platform::backends::{CursorHandle, Driver, SystemCursor};
use anyhow::{Context, Result};
use log::{debug, info};

/// Side length of every bitmap cursor, in pixels.
pub const CURSOR_SIZE: u32 = 32;
/// Bytes in one 32x32 1-bpp plane.
pub const CURSOR_PLANE_BYTES: usize = (32 * 32) / 8;

/// A monochrome cursor resource.
///
/// Bit 7 of each byte is the leftmost pixel of its 8-pixel run. A set bit
/// in `mask` makes the pixel opaque; a set bit in `data` selects the
/// foreground (black) color, clear selects white. Pixels clear in both
/// planes are transparent.
#[derive(Debug, Clone, Copy)]
pub struct CursorImage {
    pub data: [u8; CURSOR_PLANE_BYTES],
    pub mask: [u8; CURSOR_PLANE_BYTES],
    pub hot_x: u32,
    pub hot_y: u32,
}

/// Every cursor the UI can request, in registry slot order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum CursorKind {
    Arrow,
    Blank,
    UpArrow,
    UpDownArrow,
    HandPoint,
    Zzz,
    DiagonalArrows,
    Picker,
    TreeDown,
    FountainDown,
    StatueDown,
    BenchDown,
    CrossHair,
    BinDown,
    LamppostDown,
    FenceDown,
    FlowerDown,
    PathDown,
    DigDown,
    WaterDown,
    HouseDown,
    VolcanoDown,
    WalkDown,
    PaintDown,
    EntranceDown,
    HandOpen,
    HandClosed,
}

impl CursorKind {
    pub const COUNT: usize = 27;

    pub const ALL: [CursorKind; Self::COUNT] = [
        CursorKind::Arrow,
        CursorKind::Blank,
        CursorKind::UpArrow,
        CursorKind::UpDownArrow,
        CursorKind::HandPoint,
        CursorKind::Zzz,
        CursorKind::DiagonalArrows,
        CursorKind::Picker,
        CursorKind::TreeDown,
        CursorKind::FountainDown,
        CursorKind::StatueDown,
        CursorKind::BenchDown,
        CursorKind::CrossHair,
        CursorKind::BinDown,
        CursorKind::LamppostDown,
        CursorKind::FenceDown,
        CursorKind::FlowerDown,
        CursorKind::PathDown,
        CursorKind::DigDown,
        CursorKind::WaterDown,
        CursorKind::HouseDown,
        CursorKind::VolcanoDown,
        CursorKind::WalkDown,
        CursorKind::PaintDown,
        CursorKind::EntranceDown,
        CursorKind::HandOpen,
        CursorKind::HandClosed,
    ];

    #[inline]
    fn index(self) -> usize {
        self as usize
    }

    /// Where this cursor's pixels come from.
    fn source(self) -> CursorSource {
        match self {
            CursorKind::Arrow => CursorSource::System(SystemCursor::Arrow),
            CursorKind::HandPoint => CursorSource::System(SystemCursor::Hand),
            CursorKind::Blank => CursorSource::Bitmap(&data::BLANK),
            CursorKind::UpArrow => CursorSource::Bitmap(&data::UP_ARROW),
            CursorKind::UpDownArrow => CursorSource::Bitmap(&data::UP_DOWN_ARROW),
            CursorKind::Zzz => CursorSource::Bitmap(&data::ZZZ),
            CursorKind::DiagonalArrows => CursorSource::Bitmap(&data::DIAGONAL_ARROWS),
            CursorKind::Picker => CursorSource::Bitmap(&data::PICKER),
            CursorKind::TreeDown => CursorSource::Bitmap(&data::TREE_DOWN),
            CursorKind::FountainDown => CursorSource::Bitmap(&data::FOUNTAIN_DOWN),
            CursorKind::StatueDown => CursorSource::Bitmap(&data::STATUE_DOWN),
            CursorKind::BenchDown => CursorSource::Bitmap(&data::BENCH_DOWN),
            CursorKind::CrossHair => CursorSource::Bitmap(&data::CROSS_HAIR),
            CursorKind::BinDown => CursorSource::Bitmap(&data::BIN_DOWN),
            CursorKind::LamppostDown => CursorSource::Bitmap(&data::LAMPPOST_DOWN),
            CursorKind::FenceDown => CursorSource::Bitmap(&data::FENCE_DOWN),
            CursorKind::FlowerDown => CursorSource::Bitmap(&data::FLOWER_DOWN),
            CursorKind::PathDown => CursorSource::Bitmap(&data::PATH_DOWN),
            CursorKind::DigDown => CursorSource::Bitmap(&data::DIG_DOWN),
            CursorKind::WaterDown => CursorSource::Bitmap(&data::WATER_DOWN),
            CursorKind::HouseDown => CursorSource::Bitmap(&data::HOUSE_DOWN),
            CursorKind::VolcanoDown => CursorSource::Bitmap(&data::VOLCANO_DOWN),
            CursorKind::WalkDown => CursorSource::Bitmap(&data::WALK_DOWN),
            CursorKind::PaintDown => CursorSource::Bitmap(&data::PAINT_DOWN),
            CursorKind::EntranceDown => CursorSource::Bitmap(&data::ENTRANCE_DOWN),
            CursorKind::HandOpen => CursorSource::Bitmap(&data::HAND_OPEN),
            CursorKind::HandClosed => CursorSource::Bitmap(&data::HAND_CLOSED),
        }
    }
}

enum CursorSource {
    System(SystemCursor),
    Bitmap(&'static CursorImage),
}

/// Owns one native cursor handle per `CursorKind` slot.
#[derive(Debug, Default)]
pub struct CursorRegistry {
    handles: [Option<CursorHandle>; CursorKind::COUNT],
}

impl CursorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates every cursor through the driver and activates the arrow as
    /// the default.
    pub fn load_all(&mut self, driver: &mut dyn Driver) -> Result<()> {
        info!("Loading {} cursors", CursorKind::COUNT);
        for kind in CursorKind::ALL {
            let handle = match kind.source() {
                CursorSource::System(cursor) => driver
                    .create_system_cursor(cursor)
                    .with_context(|| format!("Failed to create system cursor {kind:?}"))?,
                CursorSource::Bitmap(image) => driver
                    .create_bitmap_cursor(image)
                    .with_context(|| format!("Failed to create bitmap cursor {kind:?}"))?,
            };
            self.handles[kind.index()] = Some(handle);
        }
        self.activate(driver, CursorKind::Arrow);
        Ok(())
    }

    /// Makes `kind` the active cursor. A kind that failed to load (or was
    /// already unloaded) is ignored.
    pub fn activate(&self, driver: &mut dyn Driver, kind: CursorKind) {
        if let Some(handle) = self.handles[kind.index()] {
            driver.set_cursor(handle);
        }
    }

    /// Releases every loaded handle. Idempotent.
    pub fn unload_all(&mut self, driver: &mut dyn Driver) {
        let mut freed = 0;
        for slot in &mut self.handles {
            if let Some(handle) = slot.take() {
                driver.free_cursor(handle);
                freed += 1;
            }
        }
        if freed > 0 {
            debug!("Released {} cursors", freed);
        }
    }

    pub fn is_loaded(&self, kind: CursorKind) -> bool {
        self.handles[kind.index()].is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_order_matches_enum_order() {
        for (i, kind) in CursorKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
        assert_eq!(CursorKind::ALL.len(), CursorKind::COUNT);
    }

    #[test]
    fn blank_cursor_is_fully_transparent() {
        assert!(data::BLANK.data.iter().all(|&b| b == 0));
        assert!(data::BLANK.mask.iter().all(|&b| b == 0));
    }

    #[test]
    fn bitmap_data_never_escapes_the_mask() {
        // A set data bit with a clear mask bit is undefined on most
        // platforms; the resource tables must not contain any.
        for kind in CursorKind::ALL {
            if let CursorSource::Bitmap(image) = kind.source() {
                for (data, mask) in image.data.iter().zip(image.mask.iter()) {
                    assert_eq!(data & !mask, 0, "stray data bit in {kind:?}");
                }
            }
        }
    }

    #[test]
    fn hotspots_are_inside_the_bitmap() {
        for kind in CursorKind::ALL {
            if let CursorSource::Bitmap(image) = kind.source() {
                assert!(image.hot_x < CURSOR_SIZE, "{kind:?}");
                assert!(image.hot_y < CURSOR_SIZE, "{kind:?}");
            }
        }
    }
}
