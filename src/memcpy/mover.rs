#![allow(unsafe_code)]

use core::cell::Cell;

/// Moves `src` into `dst` with memmove semantics.
///
/// The two slices may overlap; the result is as if `src` were read in full
/// before `dst` is written.
///
/// # Panics
/// Panics if the slices differ in length.
#[inline]
pub(crate) fn move_cells(dst: &[Cell<u8>], src: &[Cell<u8>]) {
    assert_eq!(dst.len(), src.len(), "move length mismatch");

    // SAFETY: both pointers come from live slices of `dst.len()` cells.
    // `Cell<u8>` has the layout of `u8`, and writing through a shared
    // `Cell` is permitted. `ptr::copy` tolerates overlap.
    unsafe {
        core::ptr::copy(
            src.as_ptr().cast::<u8>(),
            dst.as_ptr().cast::<u8>().cast_mut(),
            dst.len(),
        );
    }
}
