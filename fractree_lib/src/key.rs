//! Backend independent key codes.
//!
//! Display backends translate their native key events into these codes before
//! handing them to the controller. Printable keys use their ASCII value, keys
//! that never produce a character live above `0x7F`.

pub const SPACE: u32 = 0x20;
pub const ESCAPE: u32 = 0x1B;
pub const UP: u32 = 0x80;
pub const DOWN: u32 = 0x81;
pub const LEFT: u32 = 0x82;
pub const RIGHT: u32 = 0x83;
