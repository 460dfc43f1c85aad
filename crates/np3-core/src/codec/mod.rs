//! NP3 Value Codecs
//!
//! Field-level readers and writers. Each reader takes the whole file buffer
//! and looks at the field's fixed offset; each writer patches a caller-owned
//! buffer in place.
//!
//! # Encodings
//!
//! - Biased byte: `stored = 0x80 + value`
//! - Quarter step: `stored = 0x80 + 4 * value`
//! - Packed hue: `[0x80 + (hue >> 8), hue & 0xFF]`, read back through a
//!   `0x0F` mask on the high byte so the marker bit is discarded
//! - Tone curve samples: big-endian u16
//!
//! Readers never panic: a byte past the end of the buffer reads as `0x80`,
//! i.e. logical zero. Writers fail with [`Error::BufferSize`] instead.

pub mod color;
pub mod scalar;
pub mod tone_curve;

use crate::{Error, Result};

/// Stored byte for logical zero
pub(crate) const BIAS: u8 = 0x80;

/// Read a single byte, substituting the bias byte when out of bounds
pub(crate) fn byte_at(buf: &[u8], offset: usize) -> u8 {
    buf.get(offset).copied().unwrap_or(BIAS)
}

/// Borrow `len` bytes at `offset` for writing
pub(crate) fn slot_mut(buf: &mut [u8], offset: usize, len: usize) -> Result<&mut [u8]> {
    let actual = buf.len();
    buf.get_mut(offset..offset + len).ok_or(Error::BufferSize {
        expected: offset + len,
        actual,
    })
}

pub(crate) fn from_biased(byte: u8) -> i32 {
    byte as i32 - BIAS as i32
}

/// Caller guarantees `value` is within `-128..=127`
pub(crate) fn to_biased(value: i32) -> u8 {
    (BIAS as i32 + value) as u8
}

/// Clamp into `min..=max`, logging when the value had to move
pub(crate) fn saturate(field: &'static str, value: i32, min: i32, max: i32) -> i32 {
    let clamped = value.clamp(min, max);
    if clamped != value {
        tracing::debug!(field, value, clamped, "value out of range, saturating");
    }
    clamped
}

/// Wrap any hue into `0..360`
pub(crate) fn wrap_hue(hue: i32) -> i32 {
    hue.rem_euclid(360)
}

/// Wrap a hue into `0..360` and pack it into its two stored bytes
pub(crate) fn pack_hue(hue: i32) -> [u8; 2] {
    let hue = wrap_hue(hue) as u16;
    [BIAS + (hue >> 8) as u8, (hue & 0xff) as u8]
}

/// Only the low nibble of the high byte carries hue bits
pub(crate) fn unpack_hue(high: u8, low: u8) -> i32 {
    (((high & 0x0f) as i32) << 8) | low as i32
}
