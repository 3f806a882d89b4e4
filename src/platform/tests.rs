// src/platform/tests.rs

//! Pump- and controller-level tests running the whole `Platform` against the
//! mock driver.

use super::backends::mock::{DriverCall, MockDriver};
use super::backends::{
    BackendEvent, CursorHandle, Driver, MouseButton, SurfaceInfo, SystemCursor, WindowFlags,
};
use super::{mouse_code, Platform, PlatformRequest, Shortcut};
use crate::config::{Config, ConfigManager, FullscreenMode};
use crate::cursors::CursorImage;
use crate::input::ButtonState;
use crate::keys::{scancode, KeySymbol, Modifiers};
use crate::resolution::Resolution;
use crate::screen::{FrameDescription, PaletteColor};

use anyhow::Result;
use std::cell::RefCell;
use std::rc::Rc;
use test_log::test;

/// A cloneable handle to a `MockDriver` so a test can keep inspecting the
/// driver after moving it into the platform.
#[derive(Clone)]
struct SharedMock(Rc<RefCell<MockDriver>>);

impl SharedMock {
    fn new() -> Self {
        SharedMock(Rc::new(RefCell::new(MockDriver::new())))
    }

    fn push_events(&self, events: Vec<BackendEvent>) {
        self.0.borrow_mut().push_events(events);
    }

    fn calls(&self) -> Vec<DriverCall> {
        self.0.borrow().calls.clone()
    }

    fn count(&self, matches: impl Fn(&DriverCall) -> bool) -> usize {
        self.0.borrow().calls_of_kind(matches)
    }
}

impl Driver for SharedMock {
    fn process_events(&mut self) -> Result<Vec<BackendEvent>> {
        self.0.borrow_mut().process_events()
    }
    fn keyboard_snapshot(&mut self) -> [bool; 256] {
        self.0.borrow_mut().keyboard_snapshot()
    }
    fn create_surface(&mut self, width: u32, height: u32) -> Result<SurfaceInfo> {
        self.0.borrow_mut().create_surface(width, height)
    }
    fn apply_palette(&mut self, colors: &[PaletteColor; 256]) -> Result<()> {
        self.0.borrow_mut().apply_palette(colors)
    }
    fn present(&mut self, pixels: &[u8], frame: &FrameDescription) -> Result<()> {
        self.0.borrow_mut().present(pixels, frame)
    }
    fn set_window_size(&mut self, width: u32, height: u32) -> Result<()> {
        self.0.borrow_mut().set_window_size(width, height)
    }
    fn set_fullscreen(&mut self, mode: FullscreenMode) -> Result<()> {
        self.0.borrow_mut().set_fullscreen(mode)
    }
    fn window_flags(&self) -> WindowFlags {
        self.0.borrow().window_flags()
    }
    fn display_modes(&mut self) -> Result<Vec<Resolution>> {
        self.0.borrow_mut().display_modes()
    }
    fn desktop_resolution(&mut self) -> Result<Resolution> {
        self.0.borrow_mut().desktop_resolution()
    }
    fn create_system_cursor(&mut self, cursor: SystemCursor) -> Result<CursorHandle> {
        self.0.borrow_mut().create_system_cursor(cursor)
    }
    fn create_bitmap_cursor(&mut self, image: &CursorImage) -> Result<CursorHandle> {
        self.0.borrow_mut().create_bitmap_cursor(image)
    }
    fn set_cursor(&mut self, handle: CursorHandle) {
        self.0.borrow_mut().set_cursor(handle)
    }
    fn free_cursor(&mut self, handle: CursorHandle) {
        self.0.borrow_mut().free_cursor(handle)
    }
    fn start_text_input(&mut self) {
        self.0.borrow_mut().start_text_input()
    }
    fn stop_text_input(&mut self) {
        self.0.borrow_mut().stop_text_input()
    }
    fn cleanup(&mut self) -> Result<()> {
        self.0.borrow_mut().cleanup()
    }
}

fn test_config(name: &str) -> ConfigManager {
    let path = std::env::temp_dir()
        .join(format!("ironpark-platform-test-{}-{}", name, std::process::id()))
        .join("platform.json");
    ConfigManager::from_config(Config::default(), path)
}

fn new_platform(name: &str) -> (Platform, SharedMock) {
    let mock = SharedMock::new();
    let platform =
        Platform::new(Box::new(mock.clone()), test_config(name)).expect("platform init");
    (platform, mock)
}

#[test]
fn startup_creates_surface_cursors_and_seeds_fullscreen_size() {
    let (platform, mock) = new_platform("startup");

    assert!(mock
        .calls()
        .contains(&DriverCall::CreateSurface {
            width: 640,
            height: 480
        }));
    // Arrow and hand are system cursors, the other 25 are bitmaps.
    assert_eq!(
        mock.count(|c| matches!(c, DriverCall::CreateSystemCursor(_))),
        2
    );
    assert_eq!(
        mock.count(|c| matches!(c, DriverCall::CreateBitmapCursor)),
        25
    );
    assert!(mock.count(|c| matches!(c, DriverCall::SetCursor(_))) >= 1);

    // The largest catalog entry becomes the configured fullscreen size.
    assert_eq!(platform.config().display().fullscreen_width, Some(1920));
    assert_eq!(platform.config().display().fullscreen_height, Some(1080));
    assert_eq!(platform.screen().frame().width, 640);
    assert_eq!(platform.screen().frame().pitch, 640);
}

#[test]
fn quit_event_becomes_a_quit_request() {
    let (mut platform, mock) = new_platform("quit");
    mock.push_events(vec![BackendEvent::Quit]);
    let requests = platform.process_messages().unwrap();
    assert_eq!(requests, vec![PlatformRequest::Quit]);
}

#[test]
fn left_and_right_buttons_raise_discrete_codes() {
    let (mut platform, mock) = new_platform("buttons");
    mock.push_events(vec![
        BackendEvent::MouseButtonDown {
            button: MouseButton::Left,
            x: 10,
            y: 20,
        },
        BackendEvent::MouseButtonUp {
            button: MouseButton::Left,
            x: 11,
            y: 21,
        },
        BackendEvent::MouseButtonDown {
            button: MouseButton::Right,
            x: 12,
            y: 22,
        },
        BackendEvent::MouseButtonUp {
            button: MouseButton::Right,
            x: 13,
            y: 23,
        },
    ]);
    let requests = platform.process_messages().unwrap();
    assert_eq!(
        requests,
        vec![
            PlatformRequest::MouseInput {
                code: mouse_code::LEFT_PRESS,
                x: 10,
                y: 20
            },
            PlatformRequest::MouseInput {
                code: mouse_code::LEFT_RELEASE,
                x: 11,
                y: 21
            },
            PlatformRequest::MouseInput {
                code: mouse_code::RIGHT_PRESS,
                x: 12,
                y: 22
            },
            PlatformRequest::MouseInput {
                code: mouse_code::RIGHT_RELEASE,
                x: 13,
                y: 23
            },
        ]
    );
    let cursor = platform.input().cursor;
    assert_eq!((cursor.click_x, cursor.click_y), (13, 23));
    assert_eq!(cursor.last_action_code, mouse_code::RIGHT_RELEASE);
    // Last event in the batch was a right release.
    assert_eq!(cursor.right, ButtonState::RELEASED);
}

#[test]
fn middle_button_updates_state_without_a_request() {
    let (mut platform, mock) = new_platform("middle");
    mock.push_events(vec![BackendEvent::MouseButtonDown {
        button: MouseButton::Middle,
        x: 5,
        y: 6,
    }]);
    let requests = platform.process_messages().unwrap();
    assert!(requests.is_empty());
    let cursor = platform.input().cursor;
    assert_eq!(cursor.middle, ButtonState::PRESSED);
    assert!(cursor.any.contains(ButtonState::DOWN));
    assert_eq!(cursor.last_action_code, 0);
    // The click position is tracked for every button.
    assert_eq!((cursor.click_x, cursor.click_y), (5, 6));
}

#[test]
fn wheel_deltas_accumulate_in_notches() {
    let (mut platform, mock) = new_platform("wheel");
    mock.push_events(vec![
        BackendEvent::MouseWheel { delta: 1 },
        BackendEvent::MouseWheel { delta: 1 },
        BackendEvent::MouseWheel { delta: -1 },
    ]);
    platform.process_messages().unwrap();
    assert_eq!(platform.input_mut().cursor.take_wheel(), 128);
    assert_eq!(platform.input().cursor.wheel, 0);
}

#[test]
fn motion_tracks_the_pointer() {
    let (mut platform, mock) = new_platform("motion");
    mock.push_events(vec![
        BackendEvent::MouseMotion { x: 1, y: 2 },
        BackendEvent::MouseMotion { x: 300, y: 200 },
    ]);
    platform.process_messages().unwrap();
    assert_eq!(platform.input().cursor.x, 300);
    assert_eq!(platform.input().cursor.y, 200);
}

#[test]
fn resize_event_recreates_surface_and_persists_windowed_size() {
    let (mut platform, mock) = new_platform("resize");
    mock.push_events(vec![BackendEvent::WindowResized {
        width: 801,
        height: 600,
    }]);
    let requests = platform.process_messages().unwrap();
    assert_eq!(
        requests,
        vec![PlatformRequest::Resized {
            width: 801,
            height: 600
        }]
    );
    assert!(mock.calls().contains(&DriverCall::CreateSurface {
        width: 801,
        height: 600
    }));

    let frame = *platform.screen().frame();
    assert_eq!((frame.width, frame.height, frame.pitch), (801, 600, 804));
    assert_eq!(platform.screen().pixels().len(), 804 * 600);
    assert_eq!(platform.screen().tiling().columns, (801 >> 6) + 1);
    assert_eq!(platform.screen().tiling().rows, (600 >> 3) + 1);

    assert_eq!(platform.config().display().window_width, 801);
    assert_eq!(platform.config().display().window_height, 600);
}

#[test]
fn fullscreen_resize_does_not_overwrite_the_windowed_size() {
    let (mut platform, mock) = new_platform("resize-fullscreen");
    mock.0.borrow_mut().flags = WindowFlags::BORDERLESS_FULLSCREEN;
    mock.push_events(vec![BackendEvent::WindowResized {
        width: 1920,
        height: 1080,
    }]);
    platform.process_messages().unwrap();
    assert_eq!(platform.config().display().window_width, 640);
    assert_eq!(platform.config().display().window_height, 480);
}

#[test]
fn alt_enter_toggles_borderless_and_back() {
    let (mut platform, mock) = new_platform("alt-enter");
    let alt_enter = BackendEvent::KeyDown {
        scancode: scancode::RETURN,
        symbol: KeySymbol::Enter,
        modifiers: Modifiers::ALT,
    };

    mock.push_events(vec![alt_enter.clone()]);
    platform.process_messages().unwrap();
    assert!(mock
        .calls()
        .contains(&DriverCall::SetFullscreen(FullscreenMode::Borderless)));
    assert_eq!(
        platform.config().display().fullscreen_mode,
        FullscreenMode::Borderless
    );
    // Borderless sizes the surface to the desktop.
    assert_eq!(platform.screen().frame().width, 1920);
    // The press is still recorded; only the text-editing handling is
    // short-circuited by the toggle.
    assert!(platform.input().keyboard.was_pressed(scancode::RETURN));
    assert_eq!(platform.input().keyboard.last_key(), Some(KeySymbol::Enter));

    mock.push_events(vec![alt_enter]);
    platform.process_messages().unwrap();
    assert_eq!(
        platform.config().display().fullscreen_mode,
        FullscreenMode::Windowed
    );
    assert_eq!(platform.screen().frame().width, 640);
}

#[test]
fn keypad_enter_registers_as_the_main_enter() {
    let (mut platform, mock) = new_platform("keypad-enter");
    mock.push_events(vec![BackendEvent::KeyDown {
        scancode: scancode::KEYPAD_ENTER,
        symbol: KeySymbol::KeypadEnter,
        modifiers: Modifiers::empty(),
    }]);
    platform.process_messages().unwrap();
    assert!(platform.input().keyboard.was_pressed(scancode::RETURN));
    assert!(!platform.input().keyboard.was_pressed(scancode::KEYPAD_ENTER));
    assert_eq!(
        platform.input().keyboard.last_key(),
        Some(KeySymbol::KeypadEnter)
    );
}

#[test]
fn key_snapshot_is_refreshed_each_cycle() {
    let (mut platform, mock) = new_platform("snapshot");
    mock.0.borrow_mut().keys_down[30] = true;
    platform.process_messages().unwrap();
    assert!(platform.input().keyboard.is_down(30));

    mock.0.borrow_mut().keys_down[30] = false;
    platform.process_messages().unwrap();
    assert!(!platform.input().keyboard.is_down(30));
}

#[test]
fn text_capture_edits_through_the_pump() {
    let (mut platform, mock) = new_platform("text");
    platform.begin_text_capture(b"ab", 16);
    assert!(platform.is_capturing_text());
    assert!(mock.calls().contains(&DriverCall::StartTextInput));

    mock.push_events(vec![
        BackendEvent::TextInput {
            bytes: b"c".to_vec(),
        },
        BackendEvent::KeyDown {
            scancode: scancode::BACKSPACE,
            symbol: KeySymbol::Backspace,
            modifiers: Modifiers::empty(),
        },
        BackendEvent::KeyDown {
            scancode: scancode::HOME,
            symbol: KeySymbol::Home,
            modifiers: Modifiers::empty(),
        },
        // U+00E9 arrives as two UTF-8 bytes and lands as one legacy byte.
        BackendEvent::TextInput {
            bytes: vec![0xC3, 0xA9],
        },
        // A three-byte sequence has no legacy encoding and is dropped.
        BackendEvent::TextInput {
            bytes: vec![0xE2, 0x82, 0xAC],
        },
    ]);
    platform.process_messages().unwrap();

    let edited = platform.end_text_capture().expect("session was live");
    assert_eq!(edited, vec![0xE9, b'a', b'b']);
    assert!(!platform.is_capturing_text());
    assert!(mock.calls().contains(&DriverCall::StopTextInput));
    assert_eq!(platform.end_text_capture(), None);
}

#[test]
fn text_input_without_a_session_is_ignored() {
    let (mut platform, mock) = new_platform("text-idle");
    mock.push_events(vec![BackendEvent::TextInput {
        bytes: b"x".to_vec(),
    }]);
    platform.process_messages().unwrap();
    assert!(!platform.is_capturing_text());
}

#[test]
fn pinch_gesture_fires_zoom_after_enough_travel() {
    let (mut platform, mock) = new_platform("gesture");
    // Screen is 640 wide; 0.15 * 640 = 96 pixels, under the threshold.
    mock.push_events(vec![
        BackendEvent::MultiGesture {
            fingers: 2,
            distance_delta: 0.15,
            timestamp_ms: 100,
        },
        BackendEvent::MultiGesture {
            fingers: 2,
            distance_delta: 0.15,
            timestamp_ms: 200,
        },
    ]);
    let requests = platform.process_messages().unwrap();
    assert_eq!(requests, vec![PlatformRequest::Shortcut(Shortcut::ZoomIn)]);

    // Pinching inward zooms out.
    mock.push_events(vec![BackendEvent::MultiGesture {
        fingers: 2,
        distance_delta: -0.4,
        timestamp_ms: 300,
    }]);
    let requests = platform.process_messages().unwrap();
    assert_eq!(requests, vec![PlatformRequest::Shortcut(Shortcut::ZoomOut)]);
}

#[test]
fn pinch_accumulator_resets_after_a_second_of_silence() {
    let (mut platform, mock) = new_platform("gesture-reset");
    mock.push_events(vec![
        BackendEvent::MultiGesture {
            fingers: 2,
            distance_delta: 0.15,
            timestamp_ms: 100,
        },
        // 1.9 s later: the earlier travel no longer counts.
        BackendEvent::MultiGesture {
            fingers: 2,
            distance_delta: 0.15,
            timestamp_ms: 2000,
        },
    ]);
    let requests = platform.process_messages().unwrap();
    assert!(requests.is_empty());
}

#[test]
fn single_finger_gestures_are_ignored() {
    let (mut platform, mock) = new_platform("gesture-one-finger");
    mock.push_events(vec![BackendEvent::MultiGesture {
        fingers: 1,
        distance_delta: 5.0,
        timestamp_ms: 100,
    }]);
    let requests = platform.process_messages().unwrap();
    assert!(requests.is_empty());
}

#[test]
fn exclusive_fullscreen_leaves_fullscreen_before_switching() {
    let (mut platform, mock) = new_platform("exclusive");
    platform
        .set_fullscreen_mode(FullscreenMode::Exclusive)
        .unwrap();

    let calls = mock.calls();
    let unfullscreen = calls
        .iter()
        .position(|c| *c == DriverCall::SetFullscreen(FullscreenMode::Windowed))
        .expect("must drop out of fullscreen first");
    let resize = calls
        .iter()
        .position(|c| {
            *c == DriverCall::SetWindowSize {
                width: 1920,
                height: 1080,
            }
        })
        .expect("must resize to the chosen mode");
    let fullscreen = calls
        .iter()
        .position(|c| *c == DriverCall::SetFullscreen(FullscreenMode::Exclusive))
        .expect("must enter exclusive fullscreen");
    assert!(unfullscreen < resize && resize < fullscreen);

    assert_eq!(platform.screen().frame().width, 1920);
    assert_eq!(
        platform.config().display().fullscreen_mode,
        FullscreenMode::Exclusive
    );
    // The fullscreen resolution never leaks into the windowed size.
    assert_eq!(platform.config().display().window_width, 640);
}

#[test]
fn exclusive_fullscreen_snaps_to_the_nearest_supported_mode() {
    let mock = SharedMock::new();
    let mut config = Config::default();
    config.display.fullscreen_width = Some(1000);
    config.display.fullscreen_height = Some(700);
    // The mock's desktop is 16:9; keep the 4:3 modes in the catalog so the
    // area comparison has more than one candidate.
    config.display.allow_any_aspect_ratio = true;
    let mut platform = Platform::new(
        Box::new(mock.clone()),
        ConfigManager::from_config(config, test_config("exclusive-snap").path()),
    )
    .unwrap();

    platform
        .set_fullscreen_mode(FullscreenMode::Exclusive)
        .unwrap();
    // 1000x700 is closest in area to 800x600 among the mock's modes.
    assert!(mock.calls().contains(&DriverCall::SetWindowSize {
        width: 800,
        height: 600
    }));
    assert_eq!(platform.screen().frame().width, 800);
}

#[test]
fn fullscreen_failure_bubbles_to_the_caller() {
    let (mut platform, mock) = new_platform("fullscreen-error");
    mock.0.borrow_mut().fail_set_fullscreen = true;
    assert!(platform
        .set_fullscreen_mode(FullscreenMode::Borderless)
        .is_err());
}

#[test]
fn surface_failure_during_resize_bubbles_out_of_the_pump() {
    let (mut platform, mock) = new_platform("surface-error");
    mock.0.borrow_mut().fail_create_surface = true;
    mock.push_events(vec![BackendEvent::WindowResized {
        width: 800,
        height: 600,
    }]);
    assert!(platform.process_messages().is_err());
}

#[test]
fn present_pushes_the_screen_buffer() {
    let (mut platform, mock) = new_platform("present");
    platform.screen_mut().pixels_mut().fill(7);
    platform.present().unwrap();
    assert!(mock.calls().contains(&DriverCall::Present {
        width: 640,
        height: 480
    }));
    assert!(mock.0.borrow().last_presented.iter().all(|&b| b == 7));
}

#[test]
fn palette_updates_reach_the_driver() {
    let (mut platform, mock) = new_platform("palette");
    let applies_before = mock.count(|c| matches!(c, DriverCall::ApplyPalette));
    platform
        .update_palette(&[0x10, 0x20, 0x30, 0x00], 1, 1)
        .unwrap();
    assert_eq!(
        mock.count(|c| matches!(c, DriverCall::ApplyPalette)),
        applies_before + 1
    );
    let color = platform.screen().palette().colors()[1];
    assert_eq!((color.r, color.g, color.b, color.a), (0x30, 0x20, 0x10, 0));
}

#[test]
fn shutdown_releases_cursors_once() {
    let (mut platform, mock) = new_platform("shutdown");
    platform.shutdown().unwrap();
    platform.shutdown().unwrap();
    assert_eq!(mock.count(|c| matches!(c, DriverCall::FreeCursor(_))), 27);
    assert_eq!(mock.count(|c| matches!(c, DriverCall::Cleanup)), 1);
    drop(platform);
    assert_eq!(mock.count(|c| matches!(c, DriverCall::Cleanup)), 1);
}
