#![allow(unsafe_code)]

use core::cell::Cell;

use super::{ByteSource, ByteView};
use crate::memcpy::error::Rejection;

/// Host `Buffer`: a native owned byte region whose pointer and length are
/// available directly.
#[derive(Clone, Copy)]
pub struct NodeBuffer<'a> {
    cells: &'a [Cell<u8>],
}

impl<'a> NodeBuffer<'a> {
    /// Wraps a mutable byte slice.
    #[inline]
    pub fn new(bytes: &'a mut [u8]) -> Self {
        Self {
            cells: Cell::from_mut(bytes).as_slice_of_cells(),
        }
    }

    /// Wraps storage that is already shared as cells.
    ///
    /// Views over overlapping parts of one cell slice may serve as target and
    /// source of the same copy.
    #[inline]
    pub fn from_cells(cells: &'a [Cell<u8>]) -> Self {
        Self { cells }
    }

    /// Wraps a region of host memory.
    ///
    /// The same region may be wrapped any number of times, as a `NodeBuffer`
    /// or an [`ArrayBuffer`](super::ArrayBuffer), and those wrappers may be
    /// used together in one copy.
    ///
    /// # Safety
    /// `ptr` must be non-null and valid for reads and writes of `len` bytes
    /// for `'a`. While any wrapper of the region is in use, the region must
    /// not be reached through a `&` or `&mut` reference other than cells.
    #[inline]
    pub unsafe fn from_raw_parts(ptr: *mut u8, len: usize) -> Self {
        // SAFETY: `Cell<u8>` has the layout of `u8`; validity is the caller's
        // contract. Only shared cell references are created, so wrappers of
        // the same region do not invalidate each other.
        let cells = unsafe { core::slice::from_raw_parts(ptr.cast::<Cell<u8>>(), len) };
        Self::from_cells(cells)
    }

    /// Length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<'a> ByteSource<'a> for NodeBuffer<'a> {
    #[inline]
    fn as_bytes(&self) -> Result<ByteView<'a>, Rejection> {
        Ok(ByteView::new(self.cells))
    }
}

impl core::fmt::Debug for NodeBuffer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NodeBuffer")
            .field("len", &self.cells.len())
            .finish_non_exhaustive()
    }
}
