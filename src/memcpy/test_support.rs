//! Test support utilities - only compiled in test builds.

use core::fmt::Write;

use heapless::String;

use crate::memcpy::buffer::ByteView;

/// Repeating fill pattern used by the interop checks.
pub const PATTERN: [u8; 8] = [0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF];

/// Fills `buf` with [`PATTERN`], repeating as needed.
pub fn fill(buf: &mut [u8]) {
    for (i, byte) in buf.iter_mut().enumerate() {
        *byte = PATTERN[i % PATTERN.len()];
    }
}

/// Returns `[1, 2, ..., N]`.
pub fn counting<const N: usize>() -> [u8; N] {
    let mut out = [0u8; N];
    for (i, byte) in out.iter_mut().enumerate() {
        *byte = (i + 1) as u8;
    }
    out
}

/// Upper-case hex rendering of a view, two digits per byte.
pub fn hex(view: &ByteView<'_>) -> String<64> {
    let mut out = String::new();
    for i in 0..view.len() {
        let byte = view.get(i).unwrap();
        write!(out, "{byte:02X}").unwrap();
    }
    out
}

/// Copies a view into an array.
pub fn snapshot<const N: usize>(view: &ByteView<'_>) -> [u8; N] {
    let mut out = [0u8; N];
    view.copy_to_slice(&mut out);
    out
}

/// Renders a `Display` value without allocating.
pub fn render(value: &impl core::fmt::Display) -> String<96> {
    let mut out = String::new();
    write!(out, "{value}").unwrap();
    out
}
