// src/platform/backends/mock.rs

//! A test double for `Driver`: events are queued by the test, every driver
//! call is recorded, and individual operations can be made to fail to
//! exercise error propagation.

use super::{BackendEvent, CursorHandle, Driver, SurfaceInfo, SystemCursor, WindowFlags};
use crate::config::FullscreenMode;
use crate::cursors::CursorImage;
use crate::resolution::Resolution;
use crate::screen::{aligned_pitch, FrameDescription, PaletteColor};

use anyhow::{anyhow, Result};
use std::collections::VecDeque;

/// One recorded driver call, in call order.
#[derive(Debug, Clone, PartialEq)]
pub enum DriverCall {
    CreateSurface { width: u32, height: u32 },
    ApplyPalette,
    Present { width: u32, height: u32 },
    SetWindowSize { width: u32, height: u32 },
    SetFullscreen(FullscreenMode),
    CreateSystemCursor(SystemCursor),
    CreateBitmapCursor,
    SetCursor(CursorHandle),
    FreeCursor(CursorHandle),
    StartTextInput,
    StopTextInput,
    Cleanup,
}

pub struct MockDriver {
    /// Events handed out by the next `process_events` calls; one inner Vec
    /// per call.
    pub event_batches: VecDeque<Vec<BackendEvent>>,
    pub calls: Vec<DriverCall>,
    pub flags: WindowFlags,
    pub modes: Vec<Resolution>,
    pub desktop: Resolution,
    pub keys_down: [bool; 256],
    pub fail_set_fullscreen: bool,
    pub fail_create_surface: bool,
    /// Last pixel buffer passed to `present`, for asserting on contents.
    pub last_presented: Vec<u8>,
    next_cursor_id: u64,
}

impl Default for MockDriver {
    fn default() -> Self {
        MockDriver {
            event_batches: VecDeque::new(),
            calls: Vec::new(),
            flags: WindowFlags::empty(),
            modes: Vec::new(),
            desktop: Resolution {
                width: 0,
                height: 0,
            },
            keys_down: [false; 256],
            fail_set_fullscreen: false,
            fail_create_surface: false,
            last_presented: Vec::new(),
            next_cursor_id: 0,
        }
    }
}

impl MockDriver {
    pub fn new() -> Self {
        Self {
            desktop: Resolution {
                width: 1920,
                height: 1080,
            },
            modes: vec![
                Resolution {
                    width: 640,
                    height: 480,
                },
                Resolution {
                    width: 800,
                    height: 600,
                },
                Resolution {
                    width: 1920,
                    height: 1080,
                },
            ],
            ..Self::default()
        }
    }

    /// Queues one batch of events for the next `process_events` call.
    pub fn push_events(&mut self, events: Vec<BackendEvent>) {
        self.event_batches.push_back(events);
    }

    pub fn calls_of_kind(&self, matches: impl Fn(&DriverCall) -> bool) -> usize {
        self.calls.iter().filter(|c| matches(c)).count()
    }
}

impl Driver for MockDriver {
    fn process_events(&mut self) -> Result<Vec<BackendEvent>> {
        Ok(self.event_batches.pop_front().unwrap_or_default())
    }

    fn keyboard_snapshot(&mut self) -> [bool; 256] {
        self.keys_down
    }

    fn create_surface(&mut self, width: u32, height: u32) -> Result<SurfaceInfo> {
        self.calls.push(DriverCall::CreateSurface { width, height });
        if self.fail_create_surface {
            return Err(anyhow!("mock surface creation failure"));
        }
        Ok(SurfaceInfo {
            pitch: aligned_pitch(width),
        })
    }

    fn apply_palette(&mut self, _colors: &[PaletteColor; 256]) -> Result<()> {
        self.calls.push(DriverCall::ApplyPalette);
        Ok(())
    }

    fn present(&mut self, pixels: &[u8], frame: &FrameDescription) -> Result<()> {
        self.calls.push(DriverCall::Present {
            width: frame.width,
            height: frame.height,
        });
        self.last_presented = pixels.to_vec();
        Ok(())
    }

    fn set_window_size(&mut self, width: u32, height: u32) -> Result<()> {
        self.calls.push(DriverCall::SetWindowSize { width, height });
        Ok(())
    }

    fn set_fullscreen(&mut self, mode: FullscreenMode) -> Result<()> {
        self.calls.push(DriverCall::SetFullscreen(mode));
        if self.fail_set_fullscreen {
            return Err(anyhow!("mock fullscreen failure"));
        }
        self.flags
            .remove(WindowFlags::FULLSCREEN | WindowFlags::BORDERLESS_FULLSCREEN);
        match mode {
            FullscreenMode::Windowed => {}
            FullscreenMode::Exclusive => self.flags.insert(WindowFlags::FULLSCREEN),
            FullscreenMode::Borderless => self.flags.insert(WindowFlags::BORDERLESS_FULLSCREEN),
        }
        Ok(())
    }

    fn window_flags(&self) -> WindowFlags {
        self.flags
    }

    fn display_modes(&mut self) -> Result<Vec<Resolution>> {
        Ok(self.modes.clone())
    }

    fn desktop_resolution(&mut self) -> Result<Resolution> {
        Ok(self.desktop)
    }

    fn create_system_cursor(&mut self, cursor: SystemCursor) -> Result<CursorHandle> {
        self.calls.push(DriverCall::CreateSystemCursor(cursor));
        self.next_cursor_id += 1;
        Ok(CursorHandle(self.next_cursor_id))
    }

    fn create_bitmap_cursor(&mut self, _image: &CursorImage) -> Result<CursorHandle> {
        self.calls.push(DriverCall::CreateBitmapCursor);
        self.next_cursor_id += 1;
        Ok(CursorHandle(self.next_cursor_id))
    }

    fn set_cursor(&mut self, handle: CursorHandle) {
        self.calls.push(DriverCall::SetCursor(handle));
    }

    fn free_cursor(&mut self, handle: CursorHandle) {
        self.calls.push(DriverCall::FreeCursor(handle));
    }

    fn start_text_input(&mut self) {
        self.calls.push(DriverCall::StartTextInput);
    }

    fn stop_text_input(&mut self) {
        self.calls.push(DriverCall::StopTextInput);
    }

    fn cleanup(&mut self) -> Result<()> {
        self.calls.push(DriverCall::Cleanup);
        Ok(())
    }
}
