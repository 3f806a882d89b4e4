// src/platform/mod.rs

//! The owning platform context.
//!
//! `Platform` ties one windowing `Driver` to the engine's synchronous game
//! loop: it pumps native events once per tick, maintains the input state the
//! UI polls, owns the paletted screen buffer and cursor registry, and runs
//! window/fullscreen negotiation against the persisted configuration. There
//! is exactly one `Platform` per process and every call happens on the
//! thread that owns it.
//!
//! Backend failures (surface creation, presentation, fullscreen switches)
//! are unrecoverable: they come back as `Err` and the caller decides how to
//! terminate. The pump itself never exits the process.

pub mod backends;

#[cfg(test)]
mod tests;

use crate::config::{ConfigManager, FullscreenMode};
use crate::cursors::{CursorKind, CursorRegistry};
use crate::input::{ButtonState, InputState, TextInputSession};
use crate::keys::{scancode, KeySymbol, Modifiers};
use crate::resolution::{Resolution, ResolutionCatalog};
use crate::screen::Screen;
use backends::{BackendEvent, Driver, MouseButton, WindowFlags};

use anyhow::{Context, Result};
use log::{debug, info, trace, warn};

/// One wheel notch scrolls this many accumulator units.
const WHEEL_NOTCH: i32 = 128;

/// A pinch gesture resets after this much silence.
const GESTURE_RESET_INTERVAL_MS: u32 = 1000;
/// Pinch travel (in pixels of spread change) needed to fire a zoom step.
const GESTURE_PIXEL_TOLERANCE: i32 = 128;

/// Discrete mouse action codes the UI's input queue consumes.
pub mod mouse_code {
    pub const LEFT_PRESS: u8 = 1;
    pub const LEFT_RELEASE: u8 = 2;
    pub const RIGHT_PRESS: u8 = 3;
    pub const RIGHT_RELEASE: u8 = 4;
}

/// Keyboard shortcuts the platform layer itself recognizes and forwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    ZoomIn,
    ZoomOut,
}

/// Work the game loop must react to after a pump cycle.
///
/// The platform never acts on these itself beyond its own bookkeeping; they
/// are the seam to the out-of-scope collaborators (UI input queue, shortcut
/// dispatch, window layout).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformRequest {
    /// The user asked to close the application.
    Quit,
    /// The drawable area changed; layout and redraw are due.
    Resized { width: u32, height: u32 },
    /// A discrete left/right button transition (see `mouse_code`).
    MouseInput { code: u8, x: i32, y: i32 },
    /// A shortcut triggered by a platform-level gesture.
    Shortcut(Shortcut),
}

/// Accumulates two-finger pinch spread until it amounts to a zoom step.
#[derive(Debug, Default)]
struct GestureTracker {
    spread: f32,
    last_timestamp_ms: u32,
}

impl GestureTracker {
    fn update(
        &mut self,
        fingers: u8,
        distance_delta: f32,
        timestamp_ms: u32,
        screen_width: u32,
    ) -> Option<Shortcut> {
        if fingers != 2 {
            return None;
        }
        if timestamp_ms > self.last_timestamp_ms.saturating_add(GESTURE_RESET_INTERVAL_MS) {
            self.spread = 0.0;
        }
        self.last_timestamp_ms = timestamp_ms;
        self.spread += distance_delta;

        // The delta is normalized to the window; scale back to pixels.
        let pixels = (self.spread * screen_width as f32) as i32;
        if pixels > GESTURE_PIXEL_TOLERANCE {
            self.spread = 0.0;
            Some(Shortcut::ZoomIn)
        } else if pixels < -GESTURE_PIXEL_TOLERANCE {
            self.spread = 0.0;
            Some(Shortcut::ZoomOut)
        } else {
            None
        }
    }
}

/// Decodes one text-input event's UTF-8 payload into the single legacy
/// codepage byte the edit buffer stores. Two-byte sequences cover Latin-1;
/// anything longer has no legacy representation and is dropped.
fn decode_legacy_byte(bytes: &[u8]) -> Option<u8> {
    match bytes {
        [b] if *b < 0x80 => Some(*b),
        [b0, b1] if b0 & 0xE0 == 0xC0 && b1 & 0xC0 == 0x80 => {
            Some((((*b0 as u32 & 0x1F) << 6) | (*b1 as u32 & 0x3F)) as u8)
        }
        _ => None,
    }
}

/// The platform context. See the module docs.
pub struct Platform {
    driver: Box<dyn Driver>,
    config: ConfigManager,
    screen: Screen,
    input: InputState,
    cursors: CursorRegistry,
    catalog: ResolutionCatalog,
    gesture: GestureTracker,
    shut_down: bool,
}

impl Platform {
    /// Builds the platform over an already-created driver window.
    ///
    /// Loads cursors, creates the initial surface at the configured windowed
    /// size, enumerates display modes, and applies the configured fullscreen
    /// mode last (the window always starts windowed so the display it is on
    /// is known before any mode negotiation).
    pub fn new(driver: Box<dyn Driver>, config: ConfigManager) -> Result<Self> {
        let mut platform = Platform {
            driver,
            config,
            screen: Screen::new(),
            input: InputState::default(),
            cursors: CursorRegistry::new(),
            catalog: ResolutionCatalog::new(),
            gesture: GestureTracker::default(),
            shut_down: false,
        };

        platform
            .cursors
            .load_all(platform.driver.as_mut())
            .context("cursor loading failed")?;

        let (width, height) = {
            let display = platform.config.display();
            (display.window_width, display.window_height)
        };
        platform.resize(width, height)?;
        platform.rebuild_resolution_catalog()?;

        let startup_mode = platform.config.display().fullscreen_mode;
        if startup_mode != FullscreenMode::Windowed {
            platform.set_fullscreen_mode(startup_mode)?;
        }
        info!("Platform initialized ({}x{}, {:?})", width, height, startup_mode);
        Ok(platform)
    }

    /// Convenience constructor over the X11 backend: opens the display and a
    /// windowed window at the configured size.
    pub fn open_x11(config: ConfigManager, title: &str) -> Result<Self> {
        let (width, height) = {
            let display = config.display();
            (display.window_width, display.window_height)
        };
        let driver = backends::x11::XDriver::new(width, height, title)?;
        Self::new(Box::new(driver), config)
    }

    // --- Event pump ------------------------------------------------------

    /// Runs one pump cycle: drains the backend's event queue in arrival
    /// order, updates the polled input state, and returns the requests the
    /// game loop must handle.
    pub fn process_messages(&mut self) -> Result<Vec<PlatformRequest>> {
        let mut requests = Vec::new();
        self.input.cursor.begin_tick();
        self.input.keyboard.begin_tick();

        for event in self.driver.process_events()? {
            match event {
                BackendEvent::Quit => {
                    debug!("Quit requested by the windowing system");
                    requests.push(PlatformRequest::Quit);
                }
                BackendEvent::WindowResized { width, height } => {
                    self.resize(width, height)?;
                    requests.push(PlatformRequest::Resized { width, height });
                }
                BackendEvent::MouseMotion { x, y } => {
                    self.input.cursor.x = x;
                    self.input.cursor.y = y;
                }
                BackendEvent::MouseWheel { delta } => {
                    self.input.cursor.wheel += delta * WHEEL_NOTCH;
                }
                BackendEvent::MouseButtonDown { button, x, y } => {
                    self.handle_button(button, true, x, y, &mut requests);
                }
                BackendEvent::MouseButtonUp { button, x, y } => {
                    self.handle_button(button, false, x, y, &mut requests);
                }
                BackendEvent::KeyDown {
                    scancode,
                    symbol,
                    modifiers,
                } => {
                    self.handle_key_down(scancode, symbol, modifiers)?;
                }
                BackendEvent::MultiGesture {
                    fingers,
                    distance_delta,
                    timestamp_ms,
                } => {
                    let width = self.screen.frame().width;
                    if let Some(shortcut) =
                        self.gesture
                            .update(fingers, distance_delta, timestamp_ms, width)
                    {
                        requests.push(PlatformRequest::Shortcut(shortcut));
                    }
                }
                BackendEvent::TextInput { bytes } => {
                    if let (Some(session), Some(byte)) =
                        (self.input.text.as_mut(), decode_legacy_byte(&bytes))
                    {
                        session.insert(byte);
                    }
                }
            }
        }

        self.input.cursor.recompute_any();
        let snapshot = self.driver.keyboard_snapshot();
        self.input.keyboard.set_down_snapshot(snapshot);
        Ok(requests)
    }

    fn handle_button(
        &mut self,
        button: MouseButton,
        down: bool,
        x: i32,
        y: i32,
        requests: &mut Vec<PlatformRequest>,
    ) {
        let cursor = &mut self.input.cursor;
        // Every button event updates the click position, discrete code or
        // not.
        cursor.click_x = x;
        cursor.click_y = y;
        let state = if down {
            ButtonState::PRESSED
        } else {
            ButtonState::RELEASED
        };
        let code = match (button, down) {
            (MouseButton::Left, true) => {
                cursor.left = state;
                Some(mouse_code::LEFT_PRESS)
            }
            (MouseButton::Left, false) => {
                cursor.left = state;
                Some(mouse_code::LEFT_RELEASE)
            }
            (MouseButton::Right, true) => {
                cursor.right = state;
                Some(mouse_code::RIGHT_PRESS)
            }
            (MouseButton::Right, false) => {
                cursor.right = state;
                Some(mouse_code::RIGHT_RELEASE)
            }
            // The middle button only tracks state; the UI has no discrete
            // action for it.
            (MouseButton::Middle, _) => {
                cursor.middle = state;
                None
            }
            (MouseButton::Other(_), _) => None,
        };
        if let Some(code) = code {
            cursor.last_action_code = code;
            requests.push(PlatformRequest::MouseInput { code, x, y });
        }
    }

    fn handle_key_down(
        &mut self,
        scancode: u8,
        symbol: KeySymbol,
        modifiers: Modifiers,
    ) -> Result<()> {
        // The keypad Enter behaves as the main Enter everywhere.
        let scancode = if scancode == scancode::KEYPAD_ENTER {
            scancode::RETURN
        } else {
            scancode
        };

        self.input.keyboard.record_press(scancode, symbol);

        // The toggle skips only the text-editing handling below; the press
        // itself is recorded like any other key.
        if scancode == scancode::RETURN && modifiers.contains(Modifiers::ALT) {
            trace!("Alt+Enter fullscreen toggle");
            let target = match self.config.display().fullscreen_mode {
                FullscreenMode::Windowed => FullscreenMode::Borderless,
                _ => FullscreenMode::Windowed,
            };
            return self.set_fullscreen_mode(target);
        }

        if let Some(session) = self.input.text.as_mut() {
            match scancode {
                scancode::BACKSPACE => session.delete_backward(),
                scancode::DELETE => session.delete_forward(),
                scancode::HOME => session.move_to_start(),
                scancode::END => session.move_to_end(),
                scancode::LEFT => session.move_left(),
                scancode::RIGHT => session.move_right(),
                _ => {}
            }
        }
        Ok(())
    }

    // --- Surface and presentation ----------------------------------------

    /// Recreates the driver surface and the screen buffer for a new drawable
    /// size, reapplies the palette, and persists the size as the preferred
    /// windowed dimensions when the window is in a plain windowed state.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        let width = width.max(1);
        let height = height.max(1);

        let surface = self
            .driver
            .create_surface(width, height)
            .context("surface recreation failed")?;
        self.driver
            .apply_palette(self.screen.palette().colors())
            .context("palette rebind failed")?;
        self.screen.resize(width, height, surface.pitch);

        if !self.driver.window_flags().obscures_windowed_size() {
            let display = self.config.display();
            if display.window_width != width || display.window_height != height {
                let display = self.config.display_mut();
                display.window_width = width;
                display.window_height = height;
                if let Err(e) = self.config.save() {
                    warn!("Failed to persist window size: {:#}", e);
                }
            }
        }
        Ok(())
    }

    /// Copies the screen buffer through the driver onto the visible window.
    pub fn present(&mut self) -> Result<()> {
        let frame = *self.screen.frame();
        self.driver
            .present(self.screen.pixels(), &frame)
            .context("frame presentation failed")
    }

    /// Applies a run of (blue, green, red, reserved) palette quads and pushes
    /// the updated palette to the driver surface.
    pub fn update_palette(&mut self, quads: &[u8], start_index: usize, count: usize) -> Result<()> {
        self.screen
            .palette_mut()
            .apply_bgra_quads(quads, start_index, count);
        self.driver
            .apply_palette(self.screen.palette().colors())
            .context("palette application failed")
    }

    // --- Fullscreen / resolution -----------------------------------------

    /// Re-enumerates the display's modes and rebuilds the catalog. Seeds the
    /// configured fullscreen resolution from the largest entry if it was
    /// never chosen.
    pub fn rebuild_resolution_catalog(&mut self) -> Result<()> {
        let modes = self.driver.display_modes()?;
        let desktop = self.driver.desktop_resolution()?;
        self.catalog.rebuild(
            &modes,
            desktop,
            self.config.display().allow_any_aspect_ratio,
        );

        if let Some(largest) = self.catalog.largest() {
            let display = self.config.display_mut();
            display.fullscreen_width.get_or_insert(largest.width);
            display.fullscreen_height.get_or_insert(largest.height);
        }
        Ok(())
    }

    /// Switches between windowed, exclusive fullscreen, and borderless
    /// fullscreen, persisting the chosen mode.
    ///
    /// Exclusive drops back to windowed first: mode and size changes only
    /// apply reliably to a windowed client, so the sequence is unfullscreen,
    /// pick the nearest supported resolution, resize, then re-enter
    /// fullscreen. A driver failure bubbles with no fallback mode.
    pub fn set_fullscreen_mode(&mut self, mode: FullscreenMode) -> Result<()> {
        info!("Switching fullscreen mode to {:?}", mode);
        match mode {
            FullscreenMode::Windowed => {
                self.driver
                    .set_fullscreen(FullscreenMode::Windowed)
                    .context("leaving fullscreen failed")?;
                let (width, height) = {
                    let display = self.config.display();
                    (display.window_width, display.window_height)
                };
                self.driver.set_window_size(width, height)?;
                self.resize(width, height)?;
            }
            FullscreenMode::Exclusive => {
                self.driver
                    .set_fullscreen(FullscreenMode::Windowed)
                    .context("leaving fullscreen failed")?;
                self.rebuild_resolution_catalog()?;
                let (want_w, want_h) = {
                    let display = self.config.display();
                    (
                        display.fullscreen_width.unwrap_or(640),
                        display.fullscreen_height.unwrap_or(480),
                    )
                };
                let target = self.catalog.closest_to(want_w, want_h);
                debug!(
                    "Exclusive fullscreen: requested {}x{}, using {}x{}",
                    want_w, want_h, target.width, target.height
                );
                self.driver.set_window_size(target.width, target.height)?;
                self.driver
                    .set_fullscreen(FullscreenMode::Exclusive)
                    .context("entering exclusive fullscreen failed")?;
                self.resize(target.width, target.height)?;
            }
            FullscreenMode::Borderless => {
                self.driver
                    .set_fullscreen(FullscreenMode::Borderless)
                    .context("entering borderless fullscreen failed")?;
                let desktop = self.driver.desktop_resolution()?;
                self.resize(desktop.width, desktop.height)?;
            }
        }

        if self.config.display().fullscreen_mode != mode {
            self.config.display_mut().fullscreen_mode = mode;
            if let Err(e) = self.config.save() {
                warn!("Failed to persist fullscreen mode: {:#}", e);
            }
        }
        Ok(())
    }

    // --- Text capture ----------------------------------------------------

    /// Starts capturing typed text into an edit buffer seeded with
    /// `existing`. `capacity` includes one byte reserved for the legacy
    /// string terminator.
    pub fn begin_text_capture(&mut self, existing: &[u8], capacity: usize) {
        self.input.text = Some(TextInputSession::new(existing, capacity));
        self.driver.start_text_input();
    }

    /// Ends the capture session and returns the edited bytes, or `None` if
    /// no session was live.
    pub fn end_text_capture(&mut self) -> Option<Vec<u8>> {
        let session = self.input.text.take()?;
        self.driver.stop_text_input();
        Some(session.into_bytes())
    }

    pub fn is_capturing_text(&self) -> bool {
        self.input.text.is_some()
    }

    // --- Cursors ---------------------------------------------------------

    /// Makes `kind` the visible mouse cursor.
    pub fn set_cursor(&mut self, kind: CursorKind) {
        self.cursors.activate(self.driver.as_mut(), kind);
    }

    // --- Accessors -------------------------------------------------------

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut Screen {
        &mut self.screen
    }

    pub fn config(&self) -> &ConfigManager {
        &self.config
    }

    pub fn resolutions(&self) -> &[Resolution] {
        self.catalog.entries()
    }

    pub fn window_flags(&self) -> WindowFlags {
        self.driver.window_flags()
    }

    // --- Shutdown --------------------------------------------------------

    /// Releases cursors and all driver resources. Idempotent; also run on
    /// drop if never called.
    pub fn shutdown(&mut self) -> Result<()> {
        if self.shut_down {
            return Ok(());
        }
        info!("Shutting down platform");
        self.cursors.unload_all(self.driver.as_mut());
        self.driver.cleanup()?;
        self.shut_down = true;
        Ok(())
    }
}

impl Drop for Platform {
    fn drop(&mut self) {
        if !self.shut_down {
            if let Err(e) = self.shutdown() {
                warn!("Error during platform shutdown: {:#}", e);
            }
        }
    }
}

#[cfg(test)]
mod decode_tests {
    use super::decode_legacy_byte;

    #[test]
    fn ascii_passes_through() {
        assert_eq!(decode_legacy_byte(b"A"), Some(b'A'));
        assert_eq!(decode_legacy_byte(&[0x7F]), Some(0x7F));
    }

    #[test]
    fn two_byte_sequence_maps_to_latin1() {
        // U+00E9, e with acute accent.
        assert_eq!(decode_legacy_byte(&[0xC3, 0xA9]), Some(0xE9));
    }

    #[test]
    fn longer_sequences_are_dropped() {
        // U+20AC, the euro sign, has no single-byte form.
        assert_eq!(decode_legacy_byte(&[0xE2, 0x82, 0xAC]), None);
        assert_eq!(decode_legacy_byte(&[0xF0, 0x9F, 0x8E, 0xA2]), None);
        assert_eq!(decode_legacy_byte(&[]), None);
    }
}
