// src/cursors/data.rs

//! Bitmap resources for the custom cursors.
//!
//! Each cursor is two 32x32 1-bpp planes (see `CursorImage` for the bit
//! conventions) plus a hotspot. Black pixels carry a one-pixel white
//! halo so the cursors stay readable over dark map tiles.

use super::CursorImage;

pub static BLANK: CursorImage = CursorImage {
    data: [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    mask: [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    hot_x: 0,
    hot_y: 0,
};

pub static UP_ARROW: CursorImage = CursorImage {
    data: [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x01, 0x80, 0x00, 0x00, 0x01, 0x80, 0x00,
        0x00, 0x03, 0xc0, 0x00, 0x00, 0x05, 0xa0, 0x00,
        0x00, 0x09, 0x90, 0x00, 0x00, 0x11, 0x88, 0x00,
        0x00, 0x21, 0x84, 0x00, 0x00, 0x41, 0x82, 0x00,
        0x00, 0x01, 0x80, 0x00, 0x00, 0x01, 0x80, 0x00,
        0x00, 0x01, 0x80, 0x00, 0x00, 0x01, 0x80, 0x00,
        0x00, 0x01, 0x80, 0x00, 0x00, 0x01, 0x80, 0x00,
        0x00, 0x01, 0x80, 0x00, 0x00, 0x01, 0x80, 0x00,
        0x00, 0x01, 0x80, 0x00, 0x00, 0x01, 0x80, 0x00,
        0x00, 0x01, 0x80, 0x00, 0x00, 0x01, 0x80, 0x00,
        0x00, 0x01, 0x80, 0x00, 0x00, 0x01, 0x80, 0x00,
        0x00, 0x01, 0x80, 0x00, 0x00, 0x01, 0x80, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    mask: [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0xc0, 0x00,
        0x00, 0x03, 0xc0, 0x00, 0x00, 0x07, 0xe0, 0x00,
        0x00, 0x0f, 0xf0, 0x00, 0x00, 0x1f, 0xf8, 0x00,
        0x00, 0x3f, 0xfc, 0x00, 0x00, 0x7f, 0xfe, 0x00,
        0x00, 0xfb, 0xdf, 0x00, 0x00, 0xf3, 0xcf, 0x00,
        0x00, 0xe3, 0xc7, 0x00, 0x00, 0x03, 0xc0, 0x00,
        0x00, 0x03, 0xc0, 0x00, 0x00, 0x03, 0xc0, 0x00,
        0x00, 0x03, 0xc0, 0x00, 0x00, 0x03, 0xc0, 0x00,
        0x00, 0x03, 0xc0, 0x00, 0x00, 0x03, 0xc0, 0x00,
        0x00, 0x03, 0xc0, 0x00, 0x00, 0x03, 0xc0, 0x00,
        0x00, 0x03, 0xc0, 0x00, 0x00, 0x03, 0xc0, 0x00,
        0x00, 0x03, 0xc0, 0x00, 0x00, 0x03, 0xc0, 0x00,
        0x00, 0x03, 0xc0, 0x00, 0x00, 0x03, 0xc0, 0x00,
        0x00, 0x03, 0xc0, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    hot_x: 15,
    hot_y: 4,
};

pub static UP_DOWN_ARROW: CursorImage = CursorImage {
    data: [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x80, 0x00,
        0x00, 0x01, 0x80, 0x00, 0x00, 0x03, 0xc0, 0x00,
        0x00, 0x05, 0xa0, 0x00, 0x00, 0x09, 0x90, 0x00,
        0x00, 0x11, 0x88, 0x00, 0x00, 0x21, 0x84, 0x00,
        0x00, 0x01, 0x80, 0x00, 0x00, 0x01, 0x80, 0x00,
        0x00, 0x01, 0x80, 0x00, 0x00, 0x01, 0x80, 0x00,
        0x00, 0x01, 0x80, 0x00, 0x00, 0x01, 0x80, 0x00,
        0x00, 0x01, 0x80, 0x00, 0x00, 0x01, 0x80, 0x00,
        0x00, 0x01, 0x80, 0x00, 0x00, 0x01, 0x80, 0x00,
        0x00, 0x01, 0x80, 0x00, 0x00, 0x01, 0x80, 0x00,
        0x00, 0x21, 0x84, 0x00, 0x00, 0x11, 0x88, 0x00,
        0x00, 0x09, 0x90, 0x00, 0x00, 0x05, 0xa0, 0x00,
        0x00, 0x03, 0xc0, 0x00, 0x00, 0x01, 0x80, 0x00,
        0x00, 0x01, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    mask: [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x03, 0xc0, 0x00, 0x00, 0x03, 0xc0, 0x00,
        0x00, 0x07, 0xe0, 0x00, 0x00, 0x0f, 0xf0, 0x00,
        0x00, 0x1f, 0xf8, 0x00, 0x00, 0x3f, 0xfc, 0x00,
        0x00, 0x7f, 0xfe, 0x00, 0x00, 0x7b, 0xde, 0x00,
        0x00, 0x73, 0xce, 0x00, 0x00, 0x03, 0xc0, 0x00,
        0x00, 0x03, 0xc0, 0x00, 0x00, 0x03, 0xc0, 0x00,
        0x00, 0x03, 0xc0, 0x00, 0x00, 0x03, 0xc0, 0x00,
        0x00, 0x03, 0xc0, 0x00, 0x00, 0x03, 0xc0, 0x00,
        0x00, 0x03, 0xc0, 0x00, 0x00, 0x03, 0xc0, 0x00,
        0x00, 0x03, 0xc0, 0x00, 0x00, 0x73, 0xce, 0x00,
        0x00, 0x7b, 0xde, 0x00, 0x00, 0x7f, 0xfe, 0x00,
        0x00, 0x3f, 0xfc, 0x00, 0x00, 0x1f, 0xf8, 0x00,
        0x00, 0x0f, 0xf0, 0x00, 0x00, 0x07, 0xe0, 0x00,
        0x00, 0x03, 0xc0, 0x00, 0x00, 0x03, 0xc0, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    hot_x: 15,
    hot_y: 15,
};

pub static ZZZ: CursorImage = CursorImage {
    data: [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x03, 0xe0, 0x00, 0x00, 0x00, 0x40,
        0x00, 0x00, 0x00, 0x80, 0x00, 0x00, 0x01, 0x00,
        0x00, 0x00, 0x03, 0xe0, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x03, 0xf8, 0x00, 0x00, 0x00, 0x10, 0x00,
        0x00, 0x00, 0x20, 0x00, 0x00, 0x00, 0x40, 0x00,
        0x00, 0x00, 0x80, 0x00, 0x00, 0x01, 0x00, 0x00,
        0x00, 0x03, 0xf8, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x0f, 0xf8, 0x00, 0x00, 0x00, 0x10, 0x00, 0x00,
        0x00, 0x20, 0x00, 0x00, 0x00, 0x40, 0x00, 0x00,
        0x00, 0x80, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00,
        0x02, 0x00, 0x00, 0x00, 0x04, 0x00, 0x00, 0x00,
        0x0f, 0xf8, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    mask: [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07, 0xf0,
        0x00, 0x00, 0x07, 0xf0, 0x00, 0x00, 0x07, 0xf0,
        0x00, 0x00, 0x03, 0xe0, 0x00, 0x00, 0x07, 0xf0,
        0x00, 0x00, 0x07, 0xf0, 0x00, 0x07, 0xff, 0xf0,
        0x00, 0x07, 0xfc, 0x00, 0x00, 0x07, 0xfc, 0x00,
        0x00, 0x00, 0xf8, 0x00, 0x00, 0x01, 0xf0, 0x00,
        0x00, 0x03, 0xe0, 0x00, 0x00, 0x07, 0xfc, 0x00,
        0x00, 0x07, 0xfc, 0x00, 0x1f, 0xff, 0xfc, 0x00,
        0x1f, 0xfc, 0x00, 0x00, 0x1f, 0xfc, 0x00, 0x00,
        0x00, 0xf8, 0x00, 0x00, 0x01, 0xf0, 0x00, 0x00,
        0x03, 0xe0, 0x00, 0x00, 0x07, 0xc0, 0x00, 0x00,
        0x0f, 0x80, 0x00, 0x00, 0x1f, 0xfc, 0x00, 0x00,
        0x1f, 0xfc, 0x00, 0x00, 0x1f, 0xfc, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    hot_x: 15,
    hot_y: 15,
};

pub static DIAGONAL_ARROWS: CursorImage = CursorImage {
    data: [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x03, 0xe0, 0x00, 0x00, 0x03, 0x80, 0x00, 0x00,
        0x02, 0xc0, 0x00, 0x00, 0x02, 0x60, 0x00, 0x00,
        0x02, 0x30, 0x00, 0x00, 0x00, 0x18, 0x00, 0x00,
        0x00, 0x0c, 0x00, 0x00, 0x00, 0x06, 0x00, 0x00,
        0x00, 0x03, 0x00, 0x00, 0x00, 0x01, 0x80, 0x00,
        0x00, 0x00, 0xc0, 0x00, 0x00, 0x00, 0x60, 0x00,
        0x00, 0x00, 0x30, 0x00, 0x00, 0x00, 0x18, 0x00,
        0x00, 0x00, 0x0c, 0x00, 0x00, 0x00, 0x06, 0x40,
        0x00, 0x00, 0x03, 0x40, 0x00, 0x00, 0x01, 0xc0,
        0x00, 0x00, 0x00, 0xc0, 0x00, 0x00, 0x07, 0xe0,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    mask: [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x07, 0xf0, 0x00, 0x00,
        0x07, 0xf0, 0x00, 0x00, 0x07, 0xf0, 0x00, 0x00,
        0x07, 0xf0, 0x00, 0x00, 0x07, 0xf8, 0x00, 0x00,
        0x07, 0xfc, 0x00, 0x00, 0x07, 0x7e, 0x00, 0x00,
        0x00, 0x3f, 0x00, 0x00, 0x00, 0x1f, 0x80, 0x00,
        0x00, 0x0f, 0xc0, 0x00, 0x00, 0x07, 0xe0, 0x00,
        0x00, 0x03, 0xf0, 0x00, 0x00, 0x01, 0xf8, 0x00,
        0x00, 0x00, 0xfc, 0x00, 0x00, 0x00, 0x7e, 0x00,
        0x00, 0x00, 0x3f, 0xe0, 0x00, 0x00, 0x1f, 0xe0,
        0x00, 0x00, 0x0f, 0xe0, 0x00, 0x00, 0x07, 0xe0,
        0x00, 0x00, 0x0f, 0xf0, 0x00, 0x00, 0x0f, 0xf0,
        0x00, 0x00, 0x0f, 0xf0, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    hot_x: 15,
    hot_y: 15,
};

pub static PICKER: CursorImage = CursorImage {
    data: [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0xf8, 0x00, 0x00, 0x00, 0xf8,
        0x00, 0x00, 0x00, 0xf8, 0x00, 0x00, 0x00, 0xf8,
        0x00, 0x00, 0x00, 0xf8, 0x00, 0x00, 0x01, 0x00,
        0x00, 0x00, 0x02, 0x80, 0x00, 0x00, 0x05, 0x00,
        0x00, 0x00, 0x0a, 0x00, 0x00, 0x00, 0x14, 0x00,
        0x00, 0x00, 0x28, 0x00, 0x00, 0x00, 0x50, 0x00,
        0x00, 0x00, 0xa0, 0x00, 0x00, 0x01, 0x40, 0x00,
        0x00, 0x02, 0x80, 0x00, 0x00, 0x05, 0x00, 0x00,
        0x00, 0x0a, 0x00, 0x00, 0x00, 0x14, 0x00, 0x00,
        0x00, 0x28, 0x00, 0x00, 0x00, 0x50, 0x00, 0x00,
        0x00, 0xa0, 0x00, 0x00, 0x01, 0x40, 0x00, 0x00,
        0x01, 0x00, 0x00, 0x00, 0x02, 0xc0, 0x00, 0x00,
        0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    mask: [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0xfc,
        0x00, 0x00, 0x01, 0xfc, 0x00, 0x00, 0x01, 0xfc,
        0x00, 0x00, 0x01, 0xfc, 0x00, 0x00, 0x01, 0xfc,
        0x00, 0x00, 0x03, 0xfc, 0x00, 0x00, 0x07, 0xfc,
        0x00, 0x00, 0x0f, 0xc0, 0x00, 0x00, 0x1f, 0xc0,
        0x00, 0x00, 0x3f, 0x80, 0x00, 0x00, 0x7f, 0x00,
        0x00, 0x00, 0xfe, 0x00, 0x00, 0x01, 0xfc, 0x00,
        0x00, 0x03, 0xf8, 0x00, 0x00, 0x07, 0xf0, 0x00,
        0x00, 0x0f, 0xe0, 0x00, 0x00, 0x1f, 0xc0, 0x00,
        0x00, 0x3f, 0x80, 0x00, 0x00, 0x7f, 0x00, 0x00,
        0x00, 0xfe, 0x00, 0x00, 0x01, 0xfc, 0x00, 0x00,
        0x03, 0xf8, 0x00, 0x00, 0x03, 0xf0, 0x00, 0x00,
        0x07, 0xe0, 0x00, 0x00, 0x07, 0xe0, 0x00, 0x00,
        0x07, 0xe0, 0x00, 0x00, 0x07, 0x80, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    hot_x: 6,
    hot_y: 28,
};

pub static TREE_DOWN: CursorImage = CursorImage {
    data: [
        0x80, 0x00, 0x00, 0x00, 0xc0, 0x00, 0x00, 0x00,
        0xe0, 0x00, 0x00, 0x00, 0xf0, 0x00, 0x00, 0x00,
        0xf8, 0x00, 0x00, 0x00, 0xfc, 0x00, 0x00, 0x00,
        0xbe, 0x00, 0x00, 0x00, 0x9f, 0x00, 0x00, 0x00,
        0x8f, 0x80, 0x00, 0x00, 0x87, 0xc0, 0x00, 0x00,
        0x83, 0xe0, 0x00, 0x00, 0x81, 0xe0, 0x00, 0x00,
        0x80, 0xe0, 0x00, 0x00, 0x80, 0x60, 0x00, 0x00,
        0x80, 0x20, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x80, 0x00, 0x00, 0x01, 0x40,
        0x00, 0x00, 0x01, 0x40, 0x00, 0x00, 0x02, 0x20,
        0x00, 0x00, 0x02, 0x20, 0x00, 0x00, 0x04, 0x10,
        0x00, 0x00, 0x04, 0x10, 0x00, 0x00, 0x0f, 0xf8,
        0x00, 0x00, 0x01, 0xc0, 0x00, 0x00, 0x01, 0xc0,
        0x00, 0x00, 0x01, 0xc0, 0x00, 0x00, 0x01, 0xc0,
        0x00, 0x00, 0x01, 0xc0, 0x00, 0x00, 0x01, 0xc0,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    mask: [
        0xe0, 0x00, 0x00, 0x00, 0xf0, 0x00, 0x00, 0x00,
        0xf8, 0x00, 0x00, 0x00, 0xfc, 0x00, 0x00, 0x00,
        0xfe, 0x00, 0x00, 0x00, 0xff, 0x00, 0x00, 0x00,
        0xff, 0x80, 0x00, 0x00, 0xff, 0xc0, 0x00, 0x00,
        0xff, 0xe0, 0x00, 0x00, 0xdf, 0xf0, 0x00, 0x00,
        0xcf, 0xf0, 0x00, 0x00, 0xc7, 0xf0, 0x00, 0x00,
        0xc3, 0xf0, 0x00, 0x00, 0xc1, 0xf0, 0x00, 0x00,
        0xc0, 0xf0, 0x00, 0x00, 0xc0, 0x70, 0x01, 0xc0,
        0x00, 0x00, 0x03, 0xe0, 0x00, 0x00, 0x03, 0xe0,
        0x00, 0x00, 0x07, 0xf0, 0x00, 0x00, 0x07, 0xf0,
        0x00, 0x00, 0x0f, 0x78, 0x00, 0x00, 0x0f, 0x78,
        0x00, 0x00, 0x1f, 0xfc, 0x00, 0x00, 0x1f, 0xfc,
        0x00, 0x00, 0x1f, 0xfc, 0x00, 0x00, 0x03, 0xe0,
        0x00, 0x00, 0x03, 0xe0, 0x00, 0x00, 0x03, 0xe0,
        0x00, 0x00, 0x03, 0xe0, 0x00, 0x00, 0x03, 0xe0,
        0x00, 0x00, 0x03, 0xe0, 0x00, 0x00, 0x00, 0x00,
    ],
    hot_x: 0,
    hot_y: 0,
};

pub static FOUNTAIN_DOWN: CursorImage = CursorImage {
    data: [
        0x80, 0x00, 0x00, 0x00, 0xc0, 0x00, 0x00, 0x00,
        0xe0, 0x00, 0x00, 0x00, 0xf0, 0x00, 0x00, 0x00,
        0xf8, 0x00, 0x00, 0x00, 0xfc, 0x00, 0x00, 0x00,
        0xbe, 0x00, 0x00, 0x00, 0x9f, 0x00, 0x00, 0x00,
        0x8f, 0x80, 0x00, 0x00, 0x87, 0xc0, 0x00, 0x00,
        0x83, 0xe0, 0x00, 0x00, 0x81, 0xe0, 0x00, 0x00,
        0x80, 0xe0, 0x00, 0x00, 0x80, 0x60, 0x00, 0x00,
        0x80, 0x20, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x80,
        0x00, 0x00, 0x01, 0xc0, 0x00, 0x00, 0x02, 0xa0,
        0x00, 0x00, 0x04, 0x90, 0x00, 0x00, 0x08, 0x88,
        0x00, 0x00, 0x00, 0x80, 0x00, 0x00, 0x00, 0x80,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x1f, 0xfc, 0x00, 0x00, 0x0f, 0xf8,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    mask: [
        0xe0, 0x00, 0x00, 0x00, 0xf0, 0x00, 0x00, 0x00,
        0xf8, 0x00, 0x00, 0x00, 0xfc, 0x00, 0x00, 0x00,
        0xfe, 0x00, 0x00, 0x00, 0xff, 0x00, 0x00, 0x00,
        0xff, 0x80, 0x00, 0x00, 0xff, 0xc0, 0x00, 0x00,
        0xff, 0xe0, 0x00, 0x00, 0xdf, 0xf0, 0x00, 0x00,
        0xcf, 0xf0, 0x00, 0x00, 0xc7, 0xf0, 0x00, 0x00,
        0xc3, 0xf0, 0x00, 0x00, 0xc1, 0xf0, 0x00, 0x00,
        0xc0, 0xf0, 0x00, 0x00, 0xc0, 0x70, 0x00, 0x00,
        0x00, 0x00, 0x01, 0xc0, 0x00, 0x00, 0x03, 0xe0,
        0x00, 0x00, 0x07, 0xf0, 0x00, 0x00, 0x0f, 0xf8,
        0x00, 0x00, 0x1f, 0xfc, 0x00, 0x00, 0x1f, 0xfc,
        0x00, 0x00, 0x1d, 0xdc, 0x00, 0x00, 0x01, 0xc0,
        0x00, 0x00, 0x01, 0xc0, 0x00, 0x00, 0x3f, 0xfe,
        0x00, 0x00, 0x3f, 0xfe, 0x00, 0x00, 0x3f, 0xfe,
        0x00, 0x00, 0x1f, 0xfc, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    hot_x: 0,
    hot_y: 0,
};

pub static STATUE_DOWN: CursorImage = CursorImage {
    data: [
        0x80, 0x00, 0x00, 0x00, 0xc0, 0x00, 0x00, 0x00,
        0xe0, 0x00, 0x00, 0x00, 0xf0, 0x00, 0x00, 0x00,
        0xf8, 0x00, 0x00, 0x00, 0xfc, 0x00, 0x00, 0x00,
        0xbe, 0x00, 0x00, 0x00, 0x9f, 0x00, 0x00, 0x00,
        0x8f, 0x80, 0x00, 0x00, 0x87, 0xc0, 0x00, 0x00,
        0x83, 0xe0, 0x00, 0x00, 0x81, 0xe0, 0x00, 0x00,
        0x80, 0xe0, 0x00, 0x00, 0x80, 0x60, 0x00, 0x00,
        0x80, 0x20, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x01, 0xc0, 0x00, 0x00, 0x01, 0xc0,
        0x00, 0x00, 0x01, 0xc0, 0x00, 0x00, 0x01, 0xc0,
        0x00, 0x00, 0x01, 0xc0, 0x00, 0x00, 0x01, 0xc0,
        0x00, 0x00, 0x01, 0xc0, 0x00, 0x00, 0x01, 0xc0,
        0x00, 0x00, 0x07, 0xf0, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x0f, 0xf8, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    mask: [
        0xe0, 0x00, 0x00, 0x00, 0xf0, 0x00, 0x00, 0x00,
        0xf8, 0x00, 0x00, 0x00, 0xfc, 0x00, 0x00, 0x00,
        0xfe, 0x00, 0x00, 0x00, 0xff, 0x00, 0x00, 0x00,
        0xff, 0x80, 0x00, 0x00, 0xff, 0xc0, 0x00, 0x00,
        0xff, 0xe0, 0x00, 0x00, 0xdf, 0xf0, 0x00, 0x00,
        0xcf, 0xf0, 0x00, 0x00, 0xc7, 0xf0, 0x00, 0x00,
        0xc3, 0xf0, 0x00, 0x00, 0xc1, 0xf0, 0x00, 0x00,
        0xc0, 0xf0, 0x00, 0x00, 0xc0, 0x70, 0x03, 0xe0,
        0x00, 0x00, 0x03, 0xe0, 0x00, 0x00, 0x03, 0xe0,
        0x00, 0x00, 0x03, 0xe0, 0x00, 0x00, 0x03, 0xe0,
        0x00, 0x00, 0x03, 0xe0, 0x00, 0x00, 0x03, 0xe0,
        0x00, 0x00, 0x03, 0xe0, 0x00, 0x00, 0x0f, 0xf8,
        0x00, 0x00, 0x0f, 0xf8, 0x00, 0x00, 0x1f, 0xfc,
        0x00, 0x00, 0x1f, 0xfc, 0x00, 0x00, 0x1f, 0xfc,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    hot_x: 0,
    hot_y: 0,
};

pub static BENCH_DOWN: CursorImage = CursorImage {
    data: [
        0x80, 0x00, 0x00, 0x00, 0xc0, 0x00, 0x00, 0x00,
        0xe0, 0x00, 0x00, 0x00, 0xf0, 0x00, 0x00, 0x00,
        0xf8, 0x00, 0x00, 0x00, 0xfc, 0x00, 0x00, 0x00,
        0xbe, 0x00, 0x00, 0x00, 0x9f, 0x00, 0x00, 0x00,
        0x8f, 0x80, 0x00, 0x00, 0x87, 0xc0, 0x00, 0x00,
        0x83, 0xe0, 0x00, 0x00, 0x81, 0xe0, 0x00, 0x00,
        0x80, 0xe0, 0x00, 0x00, 0x80, 0x60, 0x00, 0x00,
        0x80, 0x20, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1f, 0xfc,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1f, 0xfc,
        0x00, 0x00, 0x08, 0x08, 0x00, 0x00, 0x08, 0x08,
        0x00, 0x00, 0x08, 0x08, 0x00, 0x00, 0x08, 0x08,
        0x00, 0x00, 0x08, 0x08, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    mask: [
        0xe0, 0x00, 0x00, 0x00, 0xf0, 0x00, 0x00, 0x00,
        0xf8, 0x00, 0x00, 0x00, 0xfc, 0x00, 0x00, 0x00,
        0xfe, 0x00, 0x00, 0x00, 0xff, 0x00, 0x00, 0x00,
        0xff, 0x80, 0x00, 0x00, 0xff, 0xc0, 0x00, 0x00,
        0xff, 0xe0, 0x00, 0x00, 0xdf, 0xf0, 0x00, 0x00,
        0xcf, 0xf0, 0x00, 0x00, 0xc7, 0xf0, 0x00, 0x00,
        0xc3, 0xf0, 0x00, 0x00, 0xc1, 0xf0, 0x00, 0x00,
        0xc0, 0xf0, 0x00, 0x00, 0xc0, 0x70, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x3f, 0xfe, 0x00, 0x00, 0x3f, 0xfe,
        0x00, 0x00, 0x3f, 0xfe, 0x00, 0x00, 0x3f, 0xfe,
        0x00, 0x00, 0x3f, 0xfe, 0x00, 0x00, 0x1c, 0x1c,
        0x00, 0x00, 0x1c, 0x1c, 0x00, 0x00, 0x1c, 0x1c,
        0x00, 0x00, 0x1c, 0x1c, 0x00, 0x00, 0x1c, 0x1c,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    hot_x: 0,
    hot_y: 0,
};

pub static CROSS_HAIR: CursorImage = CursorImage {
    data: [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00,
        0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00,
        0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00,
        0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00,
        0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00,
        0x00, 0x03, 0x80, 0x00, 0x07, 0xff, 0xff, 0xe0,
        0x00, 0x03, 0x80, 0x00, 0x00, 0x01, 0x00, 0x00,
        0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00,
        0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00,
        0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00,
        0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00,
        0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    mask: [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x03, 0x80, 0x00, 0x00, 0x03, 0x80, 0x00,
        0x00, 0x03, 0x80, 0x00, 0x00, 0x03, 0x80, 0x00,
        0x00, 0x03, 0x80, 0x00, 0x00, 0x03, 0x80, 0x00,
        0x00, 0x03, 0x80, 0x00, 0x00, 0x03, 0x80, 0x00,
        0x00, 0x03, 0x80, 0x00, 0x00, 0x07, 0xc0, 0x00,
        0x0f, 0xff, 0xff, 0xf0, 0x0f, 0xff, 0xff, 0xf0,
        0x0f, 0xff, 0xff, 0xf0, 0x00, 0x07, 0xc0, 0x00,
        0x00, 0x03, 0x80, 0x00, 0x00, 0x03, 0x80, 0x00,
        0x00, 0x03, 0x80, 0x00, 0x00, 0x03, 0x80, 0x00,
        0x00, 0x03, 0x80, 0x00, 0x00, 0x03, 0x80, 0x00,
        0x00, 0x03, 0x80, 0x00, 0x00, 0x03, 0x80, 0x00,
        0x00, 0x03, 0x80, 0x00, 0x00, 0x03, 0x80, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    hot_x: 15,
    hot_y: 15,
};

pub static BIN_DOWN: CursorImage = CursorImage {
    data: [
        0x80, 0x00, 0x00, 0x00, 0xc0, 0x00, 0x00, 0x00,
        0xe0, 0x00, 0x00, 0x00, 0xf0, 0x00, 0x00, 0x00,
        0xf8, 0x00, 0x00, 0x00, 0xfc, 0x00, 0x00, 0x00,
        0xbe, 0x00, 0x00, 0x00, 0x9f, 0x00, 0x00, 0x00,
        0x8f, 0x80, 0x00, 0x00, 0x87, 0xc0, 0x00, 0x00,
        0x83, 0xe0, 0x00, 0x00, 0x81, 0xe0, 0x00, 0x00,
        0x80, 0xe0, 0x00, 0x00, 0x80, 0x60, 0x00, 0x00,
        0x80, 0x20, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0f, 0xf8,
        0x00, 0x00, 0x07, 0xf0, 0x00, 0x00, 0x04, 0x10,
        0x00, 0x00, 0x05, 0x50, 0x00, 0x00, 0x05, 0x50,
        0x00, 0x00, 0x05, 0x50, 0x00, 0x00, 0x05, 0x50,
        0x00, 0x00, 0x05, 0x50, 0x00, 0x00, 0x04, 0x10,
        0x00, 0x00, 0x07, 0xf0, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    mask: [
        0xe0, 0x00, 0x00, 0x00, 0xf0, 0x00, 0x00, 0x00,
        0xf8, 0x00, 0x00, 0x00, 0xfc, 0x00, 0x00, 0x00,
        0xfe, 0x00, 0x00, 0x00, 0xff, 0x00, 0x00, 0x00,
        0xff, 0x80, 0x00, 0x00, 0xff, 0xc0, 0x00, 0x00,
        0xff, 0xe0, 0x00, 0x00, 0xdf, 0xf0, 0x00, 0x00,
        0xcf, 0xf0, 0x00, 0x00, 0xc7, 0xf0, 0x00, 0x00,
        0xc3, 0xf0, 0x00, 0x00, 0xc1, 0xf0, 0x00, 0x00,
        0xc0, 0xf0, 0x00, 0x00, 0xc0, 0x70, 0x00, 0x00,
        0x00, 0x00, 0x1f, 0xfc, 0x00, 0x00, 0x1f, 0xfc,
        0x00, 0x00, 0x1f, 0xfc, 0x00, 0x00, 0x0f, 0xf8,
        0x00, 0x00, 0x0f, 0xf8, 0x00, 0x00, 0x0f, 0xf8,
        0x00, 0x00, 0x0f, 0xf8, 0x00, 0x00, 0x0f, 0xf8,
        0x00, 0x00, 0x0f, 0xf8, 0x00, 0x00, 0x0f, 0xf8,
        0x00, 0x00, 0x0f, 0xf8, 0x00, 0x00, 0x0f, 0xf8,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    hot_x: 0,
    hot_y: 0,
};

pub static LAMPPOST_DOWN: CursorImage = CursorImage {
    data: [
        0x80, 0x00, 0x00, 0x00, 0xc0, 0x00, 0x00, 0x00,
        0xe0, 0x00, 0x00, 0x00, 0xf0, 0x00, 0x00, 0x00,
        0xf8, 0x00, 0x00, 0x00, 0xfc, 0x00, 0x00, 0x00,
        0xbe, 0x00, 0x00, 0x00, 0x9f, 0x00, 0x00, 0x00,
        0x8f, 0x80, 0x00, 0x00, 0x87, 0xc0, 0x00, 0x00,
        0x83, 0xe0, 0x00, 0x00, 0x81, 0xe0, 0x00, 0x00,
        0x80, 0xe0, 0x00, 0x00, 0x80, 0x60, 0x00, 0x00,
        0x80, 0x20, 0x00, 0x00, 0x00, 0x00, 0x00, 0x80,
        0x00, 0x00, 0x01, 0xc0, 0x00, 0x00, 0x00, 0x80,
        0x00, 0x00, 0x00, 0x80, 0x00, 0x00, 0x00, 0x80,
        0x00, 0x00, 0x00, 0x80, 0x00, 0x00, 0x00, 0x80,
        0x00, 0x00, 0x00, 0x80, 0x00, 0x00, 0x00, 0x80,
        0x00, 0x00, 0x00, 0x80, 0x00, 0x00, 0x00, 0x80,
        0x00, 0x00, 0x00, 0x80, 0x00, 0x00, 0x00, 0x80,
        0x00, 0x00, 0x03, 0xe0, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    mask: [
        0xe0, 0x00, 0x00, 0x00, 0xf0, 0x00, 0x00, 0x00,
        0xf8, 0x00, 0x00, 0x00, 0xfc, 0x00, 0x00, 0x00,
        0xfe, 0x00, 0x00, 0x00, 0xff, 0x00, 0x00, 0x00,
        0xff, 0x80, 0x00, 0x00, 0xff, 0xc0, 0x00, 0x00,
        0xff, 0xe0, 0x00, 0x00, 0xdf, 0xf0, 0x00, 0x00,
        0xcf, 0xf0, 0x00, 0x00, 0xc7, 0xf0, 0x00, 0x00,
        0xc3, 0xf0, 0x00, 0x00, 0xc1, 0xf0, 0x00, 0x00,
        0xc0, 0xf0, 0x01, 0xc0, 0xc0, 0x70, 0x03, 0xe0,
        0x00, 0x00, 0x03, 0xe0, 0x00, 0x00, 0x03, 0xe0,
        0x00, 0x00, 0x01, 0xc0, 0x00, 0x00, 0x01, 0xc0,
        0x00, 0x00, 0x01, 0xc0, 0x00, 0x00, 0x01, 0xc0,
        0x00, 0x00, 0x01, 0xc0, 0x00, 0x00, 0x01, 0xc0,
        0x00, 0x00, 0x01, 0xc0, 0x00, 0x00, 0x01, 0xc0,
        0x00, 0x00, 0x01, 0xc0, 0x00, 0x00, 0x07, 0xf0,
        0x00, 0x00, 0x07, 0xf0, 0x00, 0x00, 0x07, 0xf0,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    hot_x: 0,
    hot_y: 0,
};

pub static FENCE_DOWN: CursorImage = CursorImage {
    data: [
        0x80, 0x00, 0x00, 0x00, 0xc0, 0x00, 0x00, 0x00,
        0xe0, 0x00, 0x00, 0x00, 0xf0, 0x00, 0x00, 0x00,
        0xf8, 0x00, 0x00, 0x00, 0xfc, 0x00, 0x00, 0x00,
        0xbe, 0x00, 0x00, 0x00, 0x9f, 0x00, 0x00, 0x00,
        0x8f, 0x80, 0x00, 0x00, 0x87, 0xc0, 0x00, 0x00,
        0x83, 0xe0, 0x00, 0x00, 0x81, 0xe0, 0x00, 0x00,
        0x80, 0xe0, 0x00, 0x00, 0x80, 0x60, 0x00, 0x00,
        0x80, 0x20, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x08, 0x88,
        0x00, 0x00, 0x08, 0x88, 0x00, 0x00, 0x1f, 0xfc,
        0x00, 0x00, 0x08, 0x88, 0x00, 0x00, 0x08, 0x88,
        0x00, 0x00, 0x08, 0x88, 0x00, 0x00, 0x08, 0x88,
        0x00, 0x00, 0x1f, 0xfc, 0x00, 0x00, 0x08, 0x88,
        0x00, 0x00, 0x08, 0x88, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    mask: [
        0xe0, 0x00, 0x00, 0x00, 0xf0, 0x00, 0x00, 0x00,
        0xf8, 0x00, 0x00, 0x00, 0xfc, 0x00, 0x00, 0x00,
        0xfe, 0x00, 0x00, 0x00, 0xff, 0x00, 0x00, 0x00,
        0xff, 0x80, 0x00, 0x00, 0xff, 0xc0, 0x00, 0x00,
        0xff, 0xe0, 0x00, 0x00, 0xdf, 0xf0, 0x00, 0x00,
        0xcf, 0xf0, 0x00, 0x00, 0xc7, 0xf0, 0x00, 0x00,
        0xc3, 0xf0, 0x00, 0x00, 0xc1, 0xf0, 0x00, 0x00,
        0xc0, 0xf0, 0x00, 0x00, 0xc0, 0x70, 0x00, 0x00,
        0x00, 0x00, 0x1d, 0xdc, 0x00, 0x00, 0x1d, 0xdc,
        0x00, 0x00, 0x3f, 0xfe, 0x00, 0x00, 0x3f, 0xfe,
        0x00, 0x00, 0x3f, 0xfe, 0x00, 0x00, 0x1d, 0xdc,
        0x00, 0x00, 0x1d, 0xdc, 0x00, 0x00, 0x3f, 0xfe,
        0x00, 0x00, 0x3f, 0xfe, 0x00, 0x00, 0x3f, 0xfe,
        0x00, 0x00, 0x1d, 0xdc, 0x00, 0x00, 0x1d, 0xdc,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    hot_x: 0,
    hot_y: 0,
};

pub static FLOWER_DOWN: CursorImage = CursorImage {
    data: [
        0x80, 0x00, 0x00, 0x00, 0xc0, 0x00, 0x00, 0x00,
        0xe0, 0x00, 0x00, 0x00, 0xf0, 0x00, 0x00, 0x00,
        0xf8, 0x00, 0x00, 0x00, 0xfc, 0x00, 0x00, 0x00,
        0xbe, 0x00, 0x00, 0x00, 0x9f, 0x00, 0x00, 0x00,
        0x8f, 0x80, 0x00, 0x00, 0x87, 0xc0, 0x00, 0x00,
        0x83, 0xe0, 0x00, 0x00, 0x81, 0xe0, 0x00, 0x00,
        0x80, 0xe0, 0x00, 0x00, 0x80, 0x60, 0x00, 0x00,
        0x80, 0x20, 0x00, 0x00, 0x00, 0x00, 0x00, 0x80,
        0x00, 0x00, 0x01, 0xc0, 0x00, 0x00, 0x00, 0x80,
        0x00, 0x00, 0x04, 0x90, 0x00, 0x00, 0x0f, 0xf8,
        0x00, 0x00, 0x04, 0x90, 0x00, 0x00, 0x00, 0x80,
        0x00, 0x00, 0x01, 0xc0, 0x00, 0x00, 0x00, 0x80,
        0x00, 0x00, 0x00, 0x80, 0x00, 0x00, 0x00, 0x80,
        0x00, 0x00, 0x00, 0x80, 0x00, 0x00, 0x00, 0x80,
        0x00, 0x00, 0x00, 0x80, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    mask: [
        0xe0, 0x00, 0x00, 0x00, 0xf0, 0x00, 0x00, 0x00,
        0xf8, 0x00, 0x00, 0x00, 0xfc, 0x00, 0x00, 0x00,
        0xfe, 0x00, 0x00, 0x00, 0xff, 0x00, 0x00, 0x00,
        0xff, 0x80, 0x00, 0x00, 0xff, 0xc0, 0x00, 0x00,
        0xff, 0xe0, 0x00, 0x00, 0xdf, 0xf0, 0x00, 0x00,
        0xcf, 0xf0, 0x00, 0x00, 0xc7, 0xf0, 0x00, 0x00,
        0xc3, 0xf0, 0x00, 0x00, 0xc1, 0xf0, 0x00, 0x00,
        0xc0, 0xf0, 0x01, 0xc0, 0xc0, 0x70, 0x03, 0xe0,
        0x00, 0x00, 0x03, 0xe0, 0x00, 0x00, 0x0f, 0xf8,
        0x00, 0x00, 0x1f, 0xfc, 0x00, 0x00, 0x1f, 0xfc,
        0x00, 0x00, 0x1f, 0xfc, 0x00, 0x00, 0x0f, 0xf8,
        0x00, 0x00, 0x03, 0xe0, 0x00, 0x00, 0x03, 0xe0,
        0x00, 0x00, 0x01, 0xc0, 0x00, 0x00, 0x01, 0xc0,
        0x00, 0x00, 0x01, 0xc0, 0x00, 0x00, 0x01, 0xc0,
        0x00, 0x00, 0x01, 0xc0, 0x00, 0x00, 0x01, 0xc0,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    hot_x: 0,
    hot_y: 0,
};

pub static PATH_DOWN: CursorImage = CursorImage {
    data: [
        0x80, 0x00, 0x00, 0x00, 0xc0, 0x00, 0x00, 0x00,
        0xe0, 0x00, 0x00, 0x00, 0xf0, 0x00, 0x00, 0x00,
        0xf8, 0x00, 0x00, 0x00, 0xfc, 0x00, 0x00, 0x00,
        0xbe, 0x00, 0x00, 0x00, 0x9f, 0x00, 0x00, 0x00,
        0x8f, 0x80, 0x00, 0x00, 0x87, 0xc0, 0x00, 0x00,
        0x83, 0xe0, 0x00, 0x00, 0x81, 0xe0, 0x00, 0x00,
        0x80, 0xe0, 0x00, 0x00, 0x80, 0x60, 0x00, 0x00,
        0x80, 0x20, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x1d, 0xdc, 0x00, 0x00, 0x1d, 0xdc,
        0x00, 0x00, 0x1d, 0xdc, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x1d, 0xdc, 0x00, 0x00, 0x1d, 0xdc,
        0x00, 0x00, 0x1d, 0xdc, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x1d, 0xdc, 0x00, 0x00, 0x1d, 0xdc,
        0x00, 0x00, 0x1d, 0xdc, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    mask: [
        0xe0, 0x00, 0x00, 0x00, 0xf0, 0x00, 0x00, 0x00,
        0xf8, 0x00, 0x00, 0x00, 0xfc, 0x00, 0x00, 0x00,
        0xfe, 0x00, 0x00, 0x00, 0xff, 0x00, 0x00, 0x00,
        0xff, 0x80, 0x00, 0x00, 0xff, 0xc0, 0x00, 0x00,
        0xff, 0xe0, 0x00, 0x00, 0xdf, 0xf0, 0x00, 0x00,
        0xcf, 0xf0, 0x00, 0x00, 0xc7, 0xf0, 0x00, 0x00,
        0xc3, 0xf0, 0x00, 0x00, 0xc1, 0xf0, 0x00, 0x00,
        0xc0, 0xf0, 0x00, 0x00, 0xc0, 0x70, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3f, 0xfe,
        0x00, 0x00, 0x3f, 0xfe, 0x00, 0x00, 0x3f, 0xfe,
        0x00, 0x00, 0x3f, 0xfe, 0x00, 0x00, 0x3f, 0xfe,
        0x00, 0x00, 0x3f, 0xfe, 0x00, 0x00, 0x3f, 0xfe,
        0x00, 0x00, 0x3f, 0xfe, 0x00, 0x00, 0x3f, 0xfe,
        0x00, 0x00, 0x3f, 0xfe, 0x00, 0x00, 0x3f, 0xfe,
        0x00, 0x00, 0x3f, 0xfe, 0x00, 0x00, 0x3f, 0xfe,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    hot_x: 0,
    hot_y: 0,
};

pub static DIG_DOWN: CursorImage = CursorImage {
    data: [
        0x80, 0x00, 0x00, 0x00, 0xc0, 0x00, 0x00, 0x00,
        0xe0, 0x00, 0x00, 0x00, 0xf0, 0x00, 0x00, 0x00,
        0xf8, 0x00, 0x00, 0x00, 0xfc, 0x00, 0x00, 0x00,
        0xbe, 0x00, 0x00, 0x00, 0x9f, 0x00, 0x00, 0x00,
        0x8f, 0x80, 0x00, 0x00, 0x87, 0xc0, 0x00, 0x00,
        0x83, 0xe0, 0x00, 0x00, 0x81, 0xe0, 0x00, 0x00,
        0x80, 0xe0, 0x00, 0x00, 0x80, 0x60, 0x00, 0x00,
        0x80, 0x20, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x78,
        0x00, 0x00, 0x00, 0x78, 0x00, 0x00, 0x00, 0x78,
        0x00, 0x00, 0x00, 0x78, 0x00, 0x00, 0x00, 0x78,
        0x00, 0x00, 0x00, 0x40, 0x00, 0x00, 0x00, 0x80,
        0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x02, 0x00,
        0x00, 0x00, 0x04, 0x00, 0x00, 0x00, 0x08, 0x00,
        0x00, 0x00, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    mask: [
        0xe0, 0x00, 0x00, 0x00, 0xf0, 0x00, 0x00, 0x00,
        0xf8, 0x00, 0x00, 0x00, 0xfc, 0x00, 0x00, 0x00,
        0xfe, 0x00, 0x00, 0x00, 0xff, 0x00, 0x00, 0x00,
        0xff, 0x80, 0x00, 0x00, 0xff, 0xc0, 0x00, 0x00,
        0xff, 0xe0, 0x00, 0x00, 0xdf, 0xf0, 0x00, 0x00,
        0xcf, 0xf0, 0x00, 0x00, 0xc7, 0xf0, 0x00, 0x00,
        0xc3, 0xf0, 0x00, 0x00, 0xc1, 0xf0, 0x00, 0x00,
        0xc0, 0xf0, 0x00, 0x00, 0xc0, 0x70, 0x00, 0x00,
        0x00, 0x00, 0x00, 0xfc, 0x00, 0x00, 0x00, 0xfc,
        0x00, 0x00, 0x00, 0xfc, 0x00, 0x00, 0x00, 0xfc,
        0x00, 0x00, 0x00, 0xfc, 0x00, 0x00, 0x00, 0xfc,
        0x00, 0x00, 0x01, 0xfc, 0x00, 0x00, 0x03, 0xe0,
        0x00, 0x00, 0x07, 0xc0, 0x00, 0x00, 0x0f, 0x80,
        0x00, 0x00, 0x1f, 0x00, 0x00, 0x00, 0x3e, 0x00,
        0x00, 0x00, 0x3c, 0x00, 0x00, 0x00, 0x38, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    hot_x: 0,
    hot_y: 0,
};

pub static WATER_DOWN: CursorImage = CursorImage {
    data: [
        0x80, 0x00, 0x00, 0x00, 0xc0, 0x00, 0x00, 0x00,
        0xe0, 0x00, 0x00, 0x00, 0xf0, 0x00, 0x00, 0x00,
        0xf8, 0x00, 0x00, 0x00, 0xfc, 0x00, 0x00, 0x00,
        0xbe, 0x00, 0x00, 0x00, 0x9f, 0x00, 0x00, 0x00,
        0x8f, 0x80, 0x00, 0x00, 0x87, 0xc0, 0x00, 0x00,
        0x83, 0xe0, 0x00, 0x00, 0x81, 0xe0, 0x00, 0x00,
        0x80, 0xe0, 0x00, 0x00, 0x80, 0x60, 0x00, 0x00,
        0x80, 0x20, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x08, 0x88, 0x00, 0x00, 0x15, 0x54,
        0x00, 0x00, 0x02, 0x22, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x08, 0x88, 0x00, 0x00, 0x15, 0x54,
        0x00, 0x00, 0x02, 0x22, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x08, 0x88, 0x00, 0x00, 0x15, 0x54,
        0x00, 0x00, 0x02, 0x22, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    mask: [
        0xe0, 0x00, 0x00, 0x00, 0xf0, 0x00, 0x00, 0x00,
        0xf8, 0x00, 0x00, 0x00, 0xfc, 0x00, 0x00, 0x00,
        0xfe, 0x00, 0x00, 0x00, 0xff, 0x00, 0x00, 0x00,
        0xff, 0x80, 0x00, 0x00, 0xff, 0xc0, 0x00, 0x00,
        0xff, 0xe0, 0x00, 0x00, 0xdf, 0xf0, 0x00, 0x00,
        0xcf, 0xf0, 0x00, 0x00, 0xc7, 0xf0, 0x00, 0x00,
        0xc3, 0xf0, 0x00, 0x00, 0xc1, 0xf0, 0x00, 0x00,
        0xc0, 0xf0, 0x00, 0x00, 0xc0, 0x70, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1d, 0xdc,
        0x00, 0x00, 0x3f, 0xfe, 0x00, 0x00, 0x3f, 0xff,
        0x00, 0x00, 0x3f, 0xff, 0x00, 0x00, 0x1f, 0xff,
        0x00, 0x00, 0x3f, 0xfe, 0x00, 0x00, 0x3f, 0xff,
        0x00, 0x00, 0x3f, 0xff, 0x00, 0x00, 0x1f, 0xff,
        0x00, 0x00, 0x3f, 0xfe, 0x00, 0x00, 0x3f, 0xff,
        0x00, 0x00, 0x3f, 0xff, 0x00, 0x00, 0x07, 0x77,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    hot_x: 0,
    hot_y: 0,
};

pub static HOUSE_DOWN: CursorImage = CursorImage {
    data: [
        0x80, 0x00, 0x00, 0x00, 0xc0, 0x00, 0x00, 0x00,
        0xe0, 0x00, 0x00, 0x00, 0xf0, 0x00, 0x00, 0x00,
        0xf8, 0x00, 0x00, 0x00, 0xfc, 0x00, 0x00, 0x00,
        0xbe, 0x00, 0x00, 0x00, 0x9f, 0x00, 0x00, 0x00,
        0x8f, 0x80, 0x00, 0x00, 0x87, 0xc0, 0x00, 0x00,
        0x83, 0xe0, 0x00, 0x00, 0x81, 0xe0, 0x00, 0x00,
        0x80, 0xe0, 0x00, 0x00, 0x80, 0x60, 0x00, 0x00,
        0x80, 0x20, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x80, 0x00, 0x00, 0x01, 0x40,
        0x00, 0x00, 0x02, 0x20, 0x00, 0x00, 0x04, 0x10,
        0x00, 0x00, 0x08, 0x08, 0x00, 0x00, 0x1f, 0xfc,
        0x00, 0x00, 0x08, 0x08, 0x00, 0x00, 0x08, 0x08,
        0x00, 0x00, 0x09, 0xc8, 0x00, 0x00, 0x09, 0xc8,
        0x00, 0x00, 0x09, 0xc8, 0x00, 0x00, 0x09, 0xc8,
        0x00, 0x00, 0x0f, 0xf8, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    mask: [
        0xe0, 0x00, 0x00, 0x00, 0xf0, 0x00, 0x00, 0x00,
        0xf8, 0x00, 0x00, 0x00, 0xfc, 0x00, 0x00, 0x00,
        0xfe, 0x00, 0x00, 0x00, 0xff, 0x00, 0x00, 0x00,
        0xff, 0x80, 0x00, 0x00, 0xff, 0xc0, 0x00, 0x00,
        0xff, 0xe0, 0x00, 0x00, 0xdf, 0xf0, 0x00, 0x00,
        0xcf, 0xf0, 0x00, 0x00, 0xc7, 0xf0, 0x00, 0x00,
        0xc3, 0xf0, 0x00, 0x00, 0xc1, 0xf0, 0x00, 0x00,
        0xc0, 0xf0, 0x00, 0x00, 0xc0, 0x70, 0x01, 0xc0,
        0x00, 0x00, 0x03, 0xe0, 0x00, 0x00, 0x07, 0xf0,
        0x00, 0x00, 0x0f, 0xf8, 0x00, 0x00, 0x1f, 0x7c,
        0x00, 0x00, 0x3f, 0xfe, 0x00, 0x00, 0x3f, 0xfe,
        0x00, 0x00, 0x3f, 0xfe, 0x00, 0x00, 0x1f, 0xfc,
        0x00, 0x00, 0x1f, 0xfc, 0x00, 0x00, 0x1f, 0xfc,
        0x00, 0x00, 0x1f, 0xfc, 0x00, 0x00, 0x1f, 0xfc,
        0x00, 0x00, 0x1f, 0xfc, 0x00, 0x00, 0x1f, 0xfc,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    hot_x: 0,
    hot_y: 0,
};

pub static VOLCANO_DOWN: CursorImage = CursorImage {
    data: [
        0x80, 0x00, 0x00, 0x00, 0xc0, 0x00, 0x00, 0x00,
        0xe0, 0x00, 0x00, 0x00, 0xf0, 0x00, 0x00, 0x00,
        0xf8, 0x00, 0x00, 0x00, 0xfc, 0x00, 0x00, 0x00,
        0xbe, 0x00, 0x00, 0x00, 0x9f, 0x00, 0x00, 0x00,
        0x8f, 0x80, 0x00, 0x00, 0x87, 0xc0, 0x00, 0x00,
        0x83, 0xe0, 0x00, 0x00, 0x81, 0xe0, 0x00, 0x00,
        0x80, 0xe0, 0x00, 0x00, 0x80, 0x60, 0x00, 0x00,
        0x80, 0x20, 0x00, 0x00, 0x00, 0x00, 0x00, 0x80,
        0x00, 0x00, 0x02, 0x20, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x01, 0xc0, 0x00, 0x00, 0x01, 0x40,
        0x00, 0x00, 0x01, 0x40, 0x00, 0x00, 0x02, 0x20,
        0x00, 0x00, 0x02, 0x20, 0x00, 0x00, 0x02, 0x20,
        0x00, 0x00, 0x02, 0x20, 0x00, 0x00, 0x02, 0x20,
        0x00, 0x00, 0x04, 0x10, 0x00, 0x00, 0x04, 0x10,
        0x00, 0x00, 0x07, 0xf0, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    mask: [
        0xe0, 0x00, 0x00, 0x00, 0xf0, 0x00, 0x00, 0x00,
        0xf8, 0x00, 0x00, 0x00, 0xfc, 0x00, 0x00, 0x00,
        0xfe, 0x00, 0x00, 0x00, 0xff, 0x00, 0x00, 0x00,
        0xff, 0x80, 0x00, 0x00, 0xff, 0xc0, 0x00, 0x00,
        0xff, 0xe0, 0x00, 0x00, 0xdf, 0xf0, 0x00, 0x00,
        0xcf, 0xf0, 0x00, 0x00, 0xc7, 0xf0, 0x00, 0x00,
        0xc3, 0xf0, 0x00, 0x00, 0xc1, 0xf0, 0x00, 0x00,
        0xc0, 0xf0, 0x01, 0xc0, 0xc0, 0x70, 0x07, 0xf0,
        0x00, 0x00, 0x07, 0xf0, 0x00, 0x00, 0x07, 0xf0,
        0x00, 0x00, 0x03, 0xe0, 0x00, 0x00, 0x03, 0xe0,
        0x00, 0x00, 0x07, 0xf0, 0x00, 0x00, 0x07, 0xf0,
        0x00, 0x00, 0x07, 0x70, 0x00, 0x00, 0x07, 0x70,
        0x00, 0x00, 0x07, 0x70, 0x00, 0x00, 0x0f, 0x78,
        0x00, 0x00, 0x0f, 0x78, 0x00, 0x00, 0x0f, 0xf8,
        0x00, 0x00, 0x0f, 0xf8, 0x00, 0x00, 0x0f, 0xf8,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    hot_x: 0,
    hot_y: 0,
};

pub static WALK_DOWN: CursorImage = CursorImage {
    data: [
        0x80, 0x00, 0x00, 0x00, 0xc0, 0x00, 0x00, 0x00,
        0xe0, 0x00, 0x00, 0x00, 0xf0, 0x00, 0x00, 0x00,
        0xf8, 0x00, 0x00, 0x00, 0xfc, 0x00, 0x00, 0x00,
        0xbe, 0x00, 0x00, 0x00, 0x9f, 0x00, 0x00, 0x00,
        0x8f, 0x80, 0x00, 0x00, 0x87, 0xc0, 0x00, 0x00,
        0x83, 0xe0, 0x00, 0x00, 0x81, 0xe0, 0x00, 0x00,
        0x80, 0xe0, 0x00, 0x00, 0x80, 0x60, 0x00, 0x00,
        0x80, 0x20, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0e, 0x00,
        0x00, 0x00, 0x0e, 0x00, 0x00, 0x00, 0x0e, 0x00,
        0x00, 0x00, 0x0e, 0x00, 0x00, 0x00, 0x0e, 0x00,
        0x00, 0x00, 0x06, 0x38, 0x00, 0x00, 0x06, 0x38,
        0x00, 0x00, 0x00, 0x38, 0x00, 0x00, 0x00, 0x38,
        0x00, 0x00, 0x00, 0x38, 0x00, 0x00, 0x00, 0x30,
        0x00, 0x00, 0x00, 0x30, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    mask: [
        0xe0, 0x00, 0x00, 0x00, 0xf0, 0x00, 0x00, 0x00,
        0xf8, 0x00, 0x00, 0x00, 0xfc, 0x00, 0x00, 0x00,
        0xfe, 0x00, 0x00, 0x00, 0xff, 0x00, 0x00, 0x00,
        0xff, 0x80, 0x00, 0x00, 0xff, 0xc0, 0x00, 0x00,
        0xff, 0xe0, 0x00, 0x00, 0xdf, 0xf0, 0x00, 0x00,
        0xcf, 0xf0, 0x00, 0x00, 0xc7, 0xf0, 0x00, 0x00,
        0xc3, 0xf0, 0x00, 0x00, 0xc1, 0xf0, 0x00, 0x00,
        0xc0, 0xf0, 0x00, 0x00, 0xc0, 0x70, 0x00, 0x00,
        0x00, 0x00, 0x1f, 0x00, 0x00, 0x00, 0x1f, 0x00,
        0x00, 0x00, 0x1f, 0x00, 0x00, 0x00, 0x1f, 0x00,
        0x00, 0x00, 0x1f, 0x00, 0x00, 0x00, 0x1f, 0x7c,
        0x00, 0x00, 0x1f, 0x7c, 0x00, 0x00, 0x0f, 0x7c,
        0x00, 0x00, 0x0f, 0x7c, 0x00, 0x00, 0x00, 0x7c,
        0x00, 0x00, 0x00, 0x7c, 0x00, 0x00, 0x00, 0x7c,
        0x00, 0x00, 0x00, 0x78, 0x00, 0x00, 0x00, 0x78,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    hot_x: 0,
    hot_y: 0,
};

pub static PAINT_DOWN: CursorImage = CursorImage {
    data: [
        0x80, 0x00, 0x00, 0x00, 0xc0, 0x00, 0x00, 0x00,
        0xe0, 0x00, 0x00, 0x00, 0xf0, 0x00, 0x00, 0x00,
        0xf8, 0x00, 0x00, 0x00, 0xfc, 0x00, 0x00, 0x00,
        0xbe, 0x00, 0x00, 0x00, 0x9f, 0x00, 0x00, 0x00,
        0x8f, 0x80, 0x00, 0x00, 0x87, 0xc0, 0x00, 0x00,
        0x83, 0xe0, 0x00, 0x00, 0x81, 0xe0, 0x00, 0x00,
        0x80, 0xe0, 0x00, 0x00, 0x80, 0x60, 0x00, 0x00,
        0x80, 0x20, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x08, 0x00, 0x00, 0x00, 0x18,
        0x00, 0x00, 0x00, 0x30, 0x00, 0x00, 0x00, 0x60,
        0x00, 0x00, 0x00, 0xc0, 0x00, 0x00, 0x01, 0x80,
        0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x1e, 0x00,
        0x00, 0x00, 0x1e, 0x00, 0x00, 0x00, 0x1e, 0x00,
        0x00, 0x00, 0x1e, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    mask: [
        0xe0, 0x00, 0x00, 0x00, 0xf0, 0x00, 0x00, 0x00,
        0xf8, 0x00, 0x00, 0x00, 0xfc, 0x00, 0x00, 0x00,
        0xfe, 0x00, 0x00, 0x00, 0xff, 0x00, 0x00, 0x00,
        0xff, 0x80, 0x00, 0x00, 0xff, 0xc0, 0x00, 0x00,
        0xff, 0xe0, 0x00, 0x00, 0xdf, 0xf0, 0x00, 0x00,
        0xcf, 0xf0, 0x00, 0x00, 0xc7, 0xf0, 0x00, 0x00,
        0xc3, 0xf0, 0x00, 0x00, 0xc1, 0xf0, 0x00, 0x00,
        0xc0, 0xf0, 0x00, 0x00, 0xc0, 0x70, 0x00, 0x1c,
        0x00, 0x00, 0x00, 0x3c, 0x00, 0x00, 0x00, 0x7c,
        0x00, 0x00, 0x00, 0xfc, 0x00, 0x00, 0x01, 0xf8,
        0x00, 0x00, 0x03, 0xf0, 0x00, 0x00, 0x07, 0xe0,
        0x00, 0x00, 0x3f, 0xc0, 0x00, 0x00, 0x3f, 0x80,
        0x00, 0x00, 0x3f, 0x00, 0x00, 0x00, 0x3f, 0x00,
        0x00, 0x00, 0x3f, 0x00, 0x00, 0x00, 0x3f, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    hot_x: 0,
    hot_y: 0,
};

pub static ENTRANCE_DOWN: CursorImage = CursorImage {
    data: [
        0x80, 0x00, 0x00, 0x00, 0xc0, 0x00, 0x00, 0x00,
        0xe0, 0x00, 0x00, 0x00, 0xf0, 0x00, 0x00, 0x00,
        0xf8, 0x00, 0x00, 0x00, 0xfc, 0x00, 0x00, 0x00,
        0xbe, 0x00, 0x00, 0x00, 0x9f, 0x00, 0x00, 0x00,
        0x8f, 0x80, 0x00, 0x00, 0x87, 0xc0, 0x00, 0x00,
        0x83, 0xe0, 0x00, 0x00, 0x81, 0xe0, 0x00, 0x00,
        0x80, 0xe0, 0x00, 0x00, 0x80, 0x60, 0x00, 0x00,
        0x80, 0x20, 0x00, 0x00, 0x00, 0x00, 0x00, 0x80,
        0x00, 0x00, 0x03, 0x60, 0x00, 0x00, 0x0c, 0x18,
        0x00, 0x00, 0x10, 0x04, 0x00, 0x00, 0x10, 0x04,
        0x00, 0x00, 0x10, 0x04, 0x00, 0x00, 0x10, 0x04,
        0x00, 0x00, 0x10, 0x04, 0x00, 0x00, 0x10, 0x04,
        0x00, 0x00, 0x10, 0x04, 0x00, 0x00, 0x10, 0x04,
        0x00, 0x00, 0x10, 0x04, 0x00, 0x00, 0x10, 0x04,
        0x00, 0x00, 0x1f, 0xfc, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    mask: [
        0xe0, 0x00, 0x00, 0x00, 0xf0, 0x00, 0x00, 0x00,
        0xf8, 0x00, 0x00, 0x00, 0xfc, 0x00, 0x00, 0x00,
        0xfe, 0x00, 0x00, 0x00, 0xff, 0x00, 0x00, 0x00,
        0xff, 0x80, 0x00, 0x00, 0xff, 0xc0, 0x00, 0x00,
        0xff, 0xe0, 0x00, 0x00, 0xdf, 0xf0, 0x00, 0x00,
        0xcf, 0xf0, 0x00, 0x00, 0xc7, 0xf0, 0x00, 0x00,
        0xc3, 0xf0, 0x00, 0x00, 0xc1, 0xf0, 0x00, 0x00,
        0xc0, 0xf0, 0x01, 0xc0, 0xc0, 0x70, 0x07, 0xf0,
        0x00, 0x00, 0x1f, 0xfc, 0x00, 0x00, 0x3f, 0xfe,
        0x00, 0x00, 0x3e, 0x3e, 0x00, 0x00, 0x38, 0x0e,
        0x00, 0x00, 0x38, 0x0e, 0x00, 0x00, 0x38, 0x0e,
        0x00, 0x00, 0x38, 0x0e, 0x00, 0x00, 0x38, 0x0e,
        0x00, 0x00, 0x38, 0x0e, 0x00, 0x00, 0x38, 0x0e,
        0x00, 0x00, 0x38, 0x0e, 0x00, 0x00, 0x3f, 0xfe,
        0x00, 0x00, 0x3f, 0xfe, 0x00, 0x00, 0x3f, 0xfe,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    hot_x: 0,
    hot_y: 0,
};

pub static HAND_OPEN: CursorImage = CursorImage {
    data: [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x30, 0x30, 0x00, 0x00, 0x33, 0x33, 0x00,
        0x00, 0x33, 0x33, 0x00, 0x00, 0xb3, 0x33, 0x00,
        0x01, 0x33, 0x33, 0x00, 0x02, 0x33, 0x33, 0x00,
        0x01, 0x33, 0x33, 0x00, 0x00, 0xb3, 0x33, 0x00,
        0x00, 0x7f, 0xff, 0x80, 0x00, 0x7f, 0xff, 0x80,
        0x00, 0x7f, 0xff, 0x80, 0x00, 0x7f, 0xff, 0x80,
        0x00, 0x7f, 0xff, 0x80, 0x00, 0x7f, 0xff, 0x80,
        0x00, 0x7f, 0xff, 0x80, 0x00, 0x7f, 0xff, 0x80,
        0x00, 0x7f, 0xff, 0x80, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    mask: [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x78, 0x78, 0x00,
        0x00, 0x7f, 0xff, 0x80, 0x00, 0x7f, 0xff, 0x80,
        0x01, 0xff, 0xff, 0x80, 0x03, 0xff, 0xff, 0x80,
        0x07, 0xff, 0xff, 0x80, 0x07, 0xff, 0xff, 0x80,
        0x07, 0xff, 0xff, 0x80, 0x03, 0xff, 0xff, 0xc0,
        0x01, 0xff, 0xff, 0xc0, 0x00, 0xff, 0xff, 0xc0,
        0x00, 0xff, 0xff, 0xc0, 0x00, 0xff, 0xff, 0xc0,
        0x00, 0xff, 0xff, 0xc0, 0x00, 0xff, 0xff, 0xc0,
        0x00, 0xff, 0xff, 0xc0, 0x00, 0xff, 0xff, 0xc0,
        0x00, 0xff, 0xff, 0xc0, 0x00, 0xff, 0xff, 0xc0,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    hot_x: 15,
    hot_y: 15,
};

pub static HAND_CLOSED: CursorImage = CursorImage {
    data: [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x09, 0x24, 0x00,
        0x00, 0x09, 0x24, 0x00, 0x00, 0x3f, 0xff, 0x00,
        0x00, 0x3f, 0xff, 0x00, 0x00, 0x3f, 0xff, 0x00,
        0x00, 0x3f, 0xff, 0x00, 0x00, 0x3f, 0xff, 0x00,
        0x00, 0x3f, 0xff, 0x00, 0x00, 0x3f, 0xff, 0x00,
        0x00, 0x3f, 0xff, 0x00, 0x00, 0x3f, 0xff, 0x00,
        0x00, 0x3f, 0xff, 0x00, 0x00, 0x3f, 0xff, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    mask: [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x1f, 0xfe, 0x00, 0x00, 0x1f, 0xfe, 0x00,
        0x00, 0x7f, 0xff, 0x80, 0x00, 0x7f, 0xff, 0x80,
        0x00, 0x7f, 0xff, 0x80, 0x00, 0x7f, 0xff, 0x80,
        0x00, 0x7f, 0xff, 0x80, 0x00, 0x7f, 0xff, 0x80,
        0x00, 0x7f, 0xff, 0x80, 0x00, 0x7f, 0xff, 0x80,
        0x00, 0x7f, 0xff, 0x80, 0x00, 0x7f, 0xff, 0x80,
        0x00, 0x7f, 0xff, 0x80, 0x00, 0x7f, 0xff, 0x80,
        0x00, 0x7f, 0xff, 0x80, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    hot_x: 15,
    hot_y: 15,
};
