// src/input.rs

//! Input state owned by the platform layer.
//!
//! The game loop polls these structures between ticks; the event pump is
//! their only writer. There are no free-standing globals: everything hangs
//! off `InputState`, which the `Platform` context object owns.

use crate::keys::KeySymbol;
use bitflags::bitflags;
use log::trace;

bitflags! {
    /// State of a single mouse button as the legacy UI code consumes it.
    ///
    /// A press sets `DOWN | CHANGED`, a release leaves only `CHANGED`; the
    /// pump strips `CHANGED` at the start of every tick so the UI can detect
    /// edges with a single flag test.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ButtonState: u8 {
        const DOWN = 1 << 0;
        const CHANGED = 1 << 1;
    }
}

impl ButtonState {
    pub const PRESSED: ButtonState = ButtonState::DOWN.union(ButtonState::CHANGED);
    pub const RELEASED: ButtonState = ButtonState::CHANGED;
}

/// Mouse state mirror read by the game loop.
#[derive(Debug, Clone, Copy, Default)]
pub struct CursorState {
    pub left: ButtonState,
    pub middle: ButtonState,
    pub right: ButtonState,
    /// Bitwise-or of the three button states, recomputed at the end of each
    /// pump cycle.
    pub any: ButtonState,
    /// Last known pointer position in window coordinates.
    pub x: i32,
    pub y: i32,
    /// Position of the most recent button press or release.
    pub click_x: i32,
    pub click_y: i32,
    /// Accumulated wheel delta. The pump only ever adds to this; the game
    /// loop takes and resets it when it consumes scrolling.
    pub wheel: i32,
    /// Discrete action code of the most recent left/right button event this
    /// tick (1=left-down, 2=left-up, 3=right-down, 4=right-up), 0 if none.
    pub last_action_code: u8,
}

impl CursorState {
    /// Per-tick reset: edge flags and the discrete action code are
    /// transient; position and wheel carry over.
    pub fn begin_tick(&mut self) {
        self.left.remove(ButtonState::CHANGED);
        self.middle.remove(ButtonState::CHANGED);
        self.right.remove(ButtonState::CHANGED);
        self.last_action_code = 0;
    }

    pub fn recompute_any(&mut self) {
        self.any = self.left | self.middle | self.right;
    }

    /// Returns the accumulated wheel delta and resets the accumulator.
    pub fn take_wheel(&mut self) -> i32 {
        std::mem::take(&mut self.wheel)
    }
}

/// Whole-keyboard state, keyed by physical scan code.
#[derive(Debug, Clone)]
pub struct KeyboardState {
    /// Snapshot of which keys are currently held, refreshed wholesale from
    /// the backend at the end of each pump cycle.
    keys_down: [bool; 256],
    /// Sticky "went down this tick" table, cleared at the start of each
    /// cycle.
    keys_pressed: [bool; 256],
    /// Last logical key symbol pressed this tick, if any.
    last_key: Option<KeySymbol>,
}

impl Default for KeyboardState {
    fn default() -> Self {
        KeyboardState {
            keys_down: [false; 256],
            keys_pressed: [false; 256],
            last_key: None,
        }
    }
}

impl KeyboardState {
    pub fn begin_tick(&mut self) {
        self.keys_pressed = [false; 256];
        self.last_key = None;
    }

    pub fn record_press(&mut self, scancode: u8, symbol: KeySymbol) {
        self.keys_pressed[scancode as usize] = true;
        self.last_key = Some(symbol);
    }

    pub fn set_down_snapshot(&mut self, snapshot: [bool; 256]) {
        self.keys_down = snapshot;
    }

    pub fn is_down(&self, scancode: u8) -> bool {
        self.keys_down[scancode as usize]
    }

    pub fn was_pressed(&self, scancode: u8) -> bool {
        self.keys_pressed[scancode as usize]
    }

    pub fn last_key(&self) -> Option<KeySymbol> {
        self.last_key
    }
}

/// A live text-capture session.
///
/// The session owns the edit buffer for its lifetime; the caller seeds it
/// with the existing string on `begin_text_capture` and receives the edited
/// bytes back from `end_text_capture`. One byte of the stated capacity is
/// reserved for the legacy string terminator, so the content never exceeds
/// `capacity - 1` bytes.
///
/// Invariant: `cursor <= len() <= capacity - 1`.
#[derive(Debug)]
pub struct TextInputSession {
    buffer: Vec<u8>,
    capacity: usize,
    cursor: usize,
}

impl TextInputSession {
    /// Starts a session over `existing` content with the given total buffer
    /// capacity (including the terminator slot). The cursor starts at the
    /// end of the existing string.
    pub fn new(existing: &[u8], capacity: usize) -> Self {
        let max_len = capacity.saturating_sub(1);
        let mut buffer = existing.to_vec();
        buffer.truncate(max_len);
        let cursor = buffer.len();
        trace!(
            "Text capture started: {} existing bytes, capacity {}",
            buffer.len(),
            capacity
        );
        TextInputSession {
            buffer,
            capacity,
            cursor,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.buffer.len() >= self.capacity.saturating_sub(1)
    }

    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Consumes the session, yielding the edited content.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }

    /// Inserts one byte at the cursor, shifting trailing bytes right. A full
    /// session ignores the insert.
    pub fn insert(&mut self, byte: u8) {
        if self.is_full() {
            return;
        }
        self.buffer.insert(self.cursor, byte);
        self.cursor += 1;
    }

    /// Deletes the byte before the cursor, if any.
    pub fn delete_backward(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        self.buffer.remove(self.cursor);
    }

    /// Deletes the byte at the cursor, if the cursor is not at the end.
    pub fn delete_forward(&mut self) {
        if self.cursor < self.buffer.len() {
            self.buffer.remove(self.cursor);
        }
    }

    pub fn move_to_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_to_end(&mut self) {
        self.cursor = self.buffer.len();
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.buffer.len() {
            self.cursor += 1;
        }
    }
}

/// All input state, single-writer (the event pump), many readers.
#[derive(Debug, Default)]
pub struct InputState {
    pub cursor: CursorState,
    pub keyboard: KeyboardState,
    pub text: Option<TextInputSession>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invariant(session: &TextInputSession) {
        assert!(session.cursor() <= session.len());
        assert!(session.len() <= session.capacity.saturating_sub(1));
    }

    #[test]
    fn button_press_and_release_edges() {
        let mut cursor = CursorState::default();
        cursor.left = ButtonState::PRESSED;
        cursor.recompute_any();
        assert!(cursor.any.contains(ButtonState::DOWN));

        cursor.begin_tick();
        assert_eq!(cursor.left, ButtonState::DOWN);

        cursor.left = ButtonState::RELEASED;
        cursor.recompute_any();
        assert!(!cursor.left.contains(ButtonState::DOWN));
        assert!(cursor.left.contains(ButtonState::CHANGED));

        cursor.begin_tick();
        assert_eq!(cursor.left, ButtonState::empty());
    }

    #[test]
    fn wheel_accumulates_until_taken() {
        let mut cursor = CursorState::default();
        cursor.wheel += 128;
        cursor.begin_tick();
        cursor.wheel += -256;
        assert_eq!(cursor.take_wheel(), -128);
        assert_eq!(cursor.wheel, 0);
    }

    #[test]
    fn keyboard_pressed_table_is_cleared_each_tick() {
        let mut keyboard = KeyboardState::default();
        keyboard.record_press(40, KeySymbol::Enter);
        assert!(keyboard.was_pressed(40));
        assert_eq!(keyboard.last_key(), Some(KeySymbol::Enter));

        keyboard.begin_tick();
        assert!(!keyboard.was_pressed(40));
        assert_eq!(keyboard.last_key(), None);
    }

    #[test]
    fn session_seeds_cursor_at_existing_length() {
        let session = TextInputSession::new(b"park", 32);
        assert_eq!(session.len(), 4);
        assert_eq!(session.cursor(), 4);
        assert_invariant(&session);
    }

    #[test]
    fn session_truncates_oversized_seed() {
        let session = TextInputSession::new(b"abcdef", 4);
        assert_eq!(session.bytes(), b"abc");
        assert_eq!(session.cursor(), 3);
        assert_invariant(&session);
    }

    #[test]
    fn insert_respects_capacity() {
        let mut session = TextInputSession::new(b"", 4);
        session.insert(b'a');
        session.insert(b'b');
        session.insert(b'c');
        session.insert(b'd'); // Over capacity, dropped.
        assert_eq!(session.bytes(), b"abc");
        assert_invariant(&session);
    }

    #[test]
    fn insert_in_middle_shifts_tail() {
        let mut session = TextInputSession::new(b"ac", 16);
        session.move_left();
        session.insert(b'b');
        assert_eq!(session.bytes(), b"abc");
        assert_eq!(session.cursor(), 2);
        assert_invariant(&session);
    }

    #[test]
    fn delete_backward_at_start_is_a_no_op() {
        let mut session = TextInputSession::new(b"ab", 16);
        session.move_to_start();
        session.delete_backward();
        assert_eq!(session.bytes(), b"ab");
        assert_invariant(&session);
    }

    #[test]
    fn delete_forward_at_end_is_a_no_op() {
        let mut session = TextInputSession::new(b"ab", 16);
        session.delete_forward();
        assert_eq!(session.bytes(), b"ab");
        assert_invariant(&session);
    }

    #[test]
    fn edit_sequence_preserves_invariant() {
        let mut session = TextInputSession::new(b"hello", 8);
        let ops: &[fn(&mut TextInputSession)] = &[
            |s| s.move_to_start(),
            |s| s.delete_forward(),
            |s| s.insert(b'y'),
            |s| s.move_to_end(),
            |s| s.insert(b'!'),
            |s| s.insert(b'!'),
            |s| s.insert(b'!'), // Hits capacity.
            |s| s.delete_backward(),
            |s| s.move_left(),
            |s| s.move_left(),
            |s| s.move_right(),
            |s| s.delete_backward(),
        ];
        for op in ops {
            op(&mut session);
            assert_invariant(&session);
        }
    }

    #[test]
    fn capacity_one_never_accepts_content() {
        let mut session = TextInputSession::new(b"x", 1);
        assert!(session.is_empty());
        session.insert(b'a');
        assert!(session.is_empty());
        assert_invariant(&session);
    }
}
