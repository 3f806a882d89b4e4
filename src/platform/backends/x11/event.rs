// src/platform/backends/x11/event.rs
#![allow(non_snake_case)] // Allow non-snake case for X11 types

use super::connection::Connection;
use super::window::Window;
use crate::keys::{scancode, KeySymbol, Modifiers};
use crate::platform::backends::{BackendEvent, MouseButton};

use anyhow::Result;
use log::{debug, trace};
use std::mem;
use std::ptr;

// X11 library imports
use libc::{c_char, c_int, c_uint};
use x11::{keysym, xlib};

/// Buffer size for text obtained from `XLookupString`.
const KEY_TEXT_BUFFER_SIZE: usize = 32;

/// Drains all pending X11 events and translates them into `BackendEvent`s.
///
/// Non-blocking: the loop is bounded by `XPending`, so it only consumes
/// events already queued when the tick started plus whatever the server
/// has already delivered. Resize events update the window's cached
/// dimensions so repeated `ConfigureNotify`s for the same size are
/// filtered out.
pub fn process_pending_events(
    connection: &Connection,
    window: &mut Window,
) -> Result<Vec<BackendEvent>> {
    let mut backend_events = Vec::new();
    let display = connection.display();

    // SAFETY: XPending/XNextEvent over a valid display; the XPending bound
    // guarantees XNextEvent never blocks.
    while unsafe { xlib::XPending(display) } > 0 {
        let mut xevent: xlib::XEvent = unsafe { mem::zeroed() };
        unsafe { xlib::XNextEvent(display, &mut xevent) };

        // SAFETY: `type_` is the common discriminant of the XEvent union.
        let event_type = unsafe { xevent.type_ };

        match event_type {
            xlib::ConfigureNotify => {
                // SAFETY: Discriminant checked above.
                let configure = unsafe { xevent.configure };
                let (current_w, current_h) = window.current_dimensions();
                let (new_w, new_h) = (configure.width as u32, configure.height as u32);
                if (current_w, current_h) != (new_w, new_h) {
                    debug!(
                        "ConfigureNotify: {}x{} -> {}x{}",
                        current_w, current_h, new_w, new_h
                    );
                    window.update_dimensions(new_w, new_h);
                    backend_events.push(BackendEvent::WindowResized {
                        width: new_w,
                        height: new_h,
                    });
                }
            }
            xlib::ClientMessage => {
                // SAFETY: Discriminant checked above.
                let client_message = unsafe { xevent.client_message };
                if client_message.message_type == window.protocols_atom()
                    && client_message.data.as_longs()[0] as xlib::Atom
                        == window.wm_delete_window_atom()
                {
                    debug!("WM_DELETE_WINDOW received");
                    backend_events.push(BackendEvent::Quit);
                }
            }
            xlib::KeyPress => {
                // SAFETY: Discriminant checked above. XLookupString needs a
                // mutable pointer to the key event.
                let key_event = unsafe { &mut xevent.key };
                let mut x_keysym: xlib::KeySym = 0;
                let mut key_text_buffer = [0u8; KEY_TEXT_BUFFER_SIZE];

                // SAFETY: Valid event pointer, buffer pointer/length pair,
                // and keysym out-pointer; compose status is unused.
                let count = unsafe {
                    xlib::XLookupString(
                        key_event,
                        key_text_buffer.as_mut_ptr() as *mut c_char,
                        key_text_buffer.len() as c_int,
                        &mut x_keysym,
                        ptr::null_mut(),
                    )
                };
                let text = if count > 0 {
                    String::from_utf8_lossy(&key_text_buffer[..count as usize]).to_string()
                } else {
                    String::new()
                };

                let modifiers = state_to_modifiers(key_event.state);
                let symbol = keysym_to_symbol(x_keysym, &text);
                let scan = keycode_to_scancode(key_event.keycode, x_keysym);

                trace!(
                    "KeyPress: symbol {:?}, scancode {}, modifiers {:?}",
                    symbol,
                    scan,
                    modifiers
                );
                backend_events.push(BackendEvent::KeyDown {
                    scancode: scan,
                    symbol,
                    modifiers,
                });

                // Printable text rides in a separate event, the way the
                // pump's text capture expects composed input.
                if !text.is_empty()
                    && !modifiers.intersects(Modifiers::CONTROL | Modifiers::ALT)
                    && text.chars().all(|c| !c.is_control())
                {
                    backend_events.push(BackendEvent::TextInput {
                        bytes: text.into_bytes(),
                    });
                }
            }
            xlib::ButtonPress => {
                // SAFETY: Discriminant checked above.
                let button_event = unsafe { xevent.button };
                match button_event.button {
                    // Buttons 4/5 are the vertical wheel in X11.
                    4 => backend_events.push(BackendEvent::MouseWheel { delta: 1 }),
                    5 => backend_events.push(BackendEvent::MouseWheel { delta: -1 }),
                    other => backend_events.push(BackendEvent::MouseButtonDown {
                        button: x_button_to_mouse_button(other),
                        x: button_event.x,
                        y: button_event.y,
                    }),
                }
            }
            xlib::ButtonRelease => {
                // SAFETY: Discriminant checked above.
                let button_event = unsafe { xevent.button };
                // Wheel "buttons" release immediately; only report the rest.
                if button_event.button != 4 && button_event.button != 5 {
                    backend_events.push(BackendEvent::MouseButtonUp {
                        button: x_button_to_mouse_button(button_event.button),
                        x: button_event.x,
                        y: button_event.y,
                    });
                }
            }
            xlib::MotionNotify => {
                // SAFETY: Discriminant checked above.
                let motion = unsafe { xevent.motion };
                backend_events.push(BackendEvent::MouseMotion {
                    x: motion.x,
                    y: motion.y,
                });
            }
            xlib::Expose => {
                // The engine redraws every tick; nothing to do.
                trace!("Expose event ignored");
            }
            _ => {
                trace!("Unhandled X event type {}", event_type);
            }
        }
    }

    Ok(backend_events)
}

fn state_to_modifiers(state: c_uint) -> Modifiers {
    let mut modifiers = Modifiers::empty();
    if state & xlib::ShiftMask != 0 {
        modifiers.insert(Modifiers::SHIFT);
    }
    if state & xlib::ControlMask != 0 {
        modifiers.insert(Modifiers::CONTROL);
    }
    if state & xlib::Mod1Mask != 0 {
        modifiers.insert(Modifiers::ALT);
    }
    if state & xlib::Mod4Mask != 0 {
        modifiers.insert(Modifiers::SUPER);
    }
    if state & xlib::LockMask != 0 {
        modifiers.insert(Modifiers::CAPS_LOCK);
    }
    modifiers
}

fn x_button_to_mouse_button(button: u32) -> MouseButton {
    match button {
        1 => MouseButton::Left,
        2 => MouseButton::Middle,
        3 => MouseButton::Right,
        other => MouseButton::Other(other as u8),
    }
}

/// Maps an X keysym (plus any text it produced) to the engine's logical
/// key symbol.
fn keysym_to_symbol(keysym_value: xlib::KeySym, text: &str) -> KeySymbol {
    match keysym_value as u32 {
        keysym::XK_Return => KeySymbol::Enter,
        keysym::XK_KP_Enter => KeySymbol::KeypadEnter,
        keysym::XK_BackSpace => KeySymbol::Backspace,
        keysym::XK_Tab => KeySymbol::Tab,
        keysym::XK_Escape => KeySymbol::Escape,
        keysym::XK_Home => KeySymbol::Home,
        keysym::XK_End => KeySymbol::End,
        keysym::XK_Insert => KeySymbol::Insert,
        keysym::XK_Delete => KeySymbol::Delete,
        keysym::XK_Left => KeySymbol::Left,
        keysym::XK_Right => KeySymbol::Right,
        keysym::XK_Up => KeySymbol::Up,
        keysym::XK_Down => KeySymbol::Down,
        keysym::XK_Page_Up => KeySymbol::PageUp,
        keysym::XK_Page_Down => KeySymbol::PageDown,
        keysym::XK_Pause => KeySymbol::Pause,
        keysym::XK_F1 => KeySymbol::F1,
        keysym::XK_F2 => KeySymbol::F2,
        keysym::XK_F3 => KeySymbol::F3,
        keysym::XK_F4 => KeySymbol::F4,
        keysym::XK_F5 => KeySymbol::F5,
        keysym::XK_F6 => KeySymbol::F6,
        keysym::XK_F7 => KeySymbol::F7,
        keysym::XK_F8 => KeySymbol::F8,
        keysym::XK_F9 => KeySymbol::F9,
        keysym::XK_F10 => KeySymbol::F10,
        keysym::XK_F11 => KeySymbol::F11,
        keysym::XK_F12 => KeySymbol::F12,
        keysym::XK_Shift_L | keysym::XK_Shift_R => KeySymbol::Shift,
        keysym::XK_Control_L | keysym::XK_Control_R => KeySymbol::Control,
        keysym::XK_Alt_L | keysym::XK_Alt_R => KeySymbol::Alt,
        keysym::XK_Super_L | keysym::XK_Super_R => KeySymbol::Super,
        keysym::XK_Caps_Lock => KeySymbol::CapsLock,
        keysym::XK_Num_Lock => KeySymbol::NumLock,
        _ => match text.chars().next() {
            Some(c) if !c.is_control() => KeySymbol::Char(c),
            _ => KeySymbol::Unknown,
        },
    }
}

/// Derives the 256-entry-table index for a key.
///
/// Keys the engine addresses by name use the fixed HID-style constants in
/// `keys::scancode`; everything else falls back to the evdev code (X
/// keycode minus 8), which keeps distinct physical keys distinct.
pub(super) fn keycode_to_scancode(keycode: u32, keysym_value: xlib::KeySym) -> u8 {
    match keysym_value as u32 {
        keysym::XK_Return => scancode::RETURN,
        keysym::XK_KP_Enter => scancode::KEYPAD_ENTER,
        keysym::XK_Escape => scancode::ESCAPE,
        keysym::XK_BackSpace => scancode::BACKSPACE,
        keysym::XK_Home => scancode::HOME,
        keysym::XK_End => scancode::END,
        keysym::XK_Delete => scancode::DELETE,
        keysym::XK_Left => scancode::LEFT,
        keysym::XK_Right => scancode::RIGHT,
        _ => keycode.saturating_sub(8).min(255) as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_keys_map_to_fixed_scancodes() {
        assert_eq!(
            keycode_to_scancode(36, keysym::XK_Return as xlib::KeySym),
            scancode::RETURN
        );
        assert_eq!(
            keycode_to_scancode(104, keysym::XK_KP_Enter as xlib::KeySym),
            scancode::KEYPAD_ENTER
        );
    }

    #[test]
    fn unnamed_keys_use_the_evdev_code() {
        // Keycode 38 is evdev 30 ('a' on a pc105 layout).
        assert_eq!(keycode_to_scancode(38, 0), 30);
        // Values clamp into the table.
        assert_eq!(keycode_to_scancode(3, 0), 0);
    }

    #[test]
    fn keysym_mapping_prefers_named_symbols_over_text() {
        assert_eq!(
            keysym_to_symbol(keysym::XK_Return as xlib::KeySym, "\r"),
            KeySymbol::Enter
        );
        assert_eq!(keysym_to_symbol(0, "a"), KeySymbol::Char('a'));
        assert_eq!(keysym_to_symbol(0, ""), KeySymbol::Unknown);
    }
}
