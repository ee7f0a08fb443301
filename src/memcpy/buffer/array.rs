#![allow(unsafe_code)]

use core::cell::Cell;

use super::{ByteSource, ByteView};
use crate::memcpy::error::Rejection;

/// Host `ArrayBuffer`: a managed reference whose backing store must be
/// unwrapped before its bytes can be reached.
///
/// The host may detach the buffer, after which it has no contents and a
/// byte length of zero.
#[derive(Clone, Copy)]
pub struct ArrayBuffer<'a> {
    contents: Option<&'a [Cell<u8>]>,
}

impl<'a> ArrayBuffer<'a> {
    /// Wraps a mutable byte slice as a live `ArrayBuffer`.
    #[inline]
    pub fn new(bytes: &'a mut [u8]) -> Self {
        Self {
            contents: Some(Cell::from_mut(bytes).as_slice_of_cells()),
        }
    }

    /// Wraps a backing store that is already shared as cells.
    #[inline]
    pub fn from_cells(cells: &'a [Cell<u8>]) -> Self {
        Self {
            contents: Some(cells),
        }
    }

    /// An `ArrayBuffer` whose backing store has been released.
    #[inline]
    pub const fn detached() -> Self {
        Self { contents: None }
    }

    /// Wraps the backing store of a host `ArrayBuffer`.
    ///
    /// Other wrappers of the same store may be used in the same copy.
    ///
    /// # Safety
    /// Same contract as [`NodeBuffer::from_raw_parts`](super::NodeBuffer::from_raw_parts).
    #[inline]
    pub unsafe fn from_raw_parts(ptr: *mut u8, len: usize) -> Self {
        // SAFETY: upheld by the caller; see `NodeBuffer::from_raw_parts`.
        let cells = unsafe { core::slice::from_raw_parts(ptr.cast::<Cell<u8>>(), len) };
        Self::from_cells(cells)
    }

    /// Unwraps the backing store.
    #[inline]
    pub fn contents(&self) -> Option<&'a [Cell<u8>]> {
        self.contents
    }

    #[inline]
    pub fn is_detached(&self) -> bool {
        self.contents.is_none()
    }

    #[inline]
    pub fn byte_length(&self) -> usize {
        self.contents.map_or(0, <[_]>::len)
    }
}

impl<'a> ByteSource<'a> for ArrayBuffer<'a> {
    fn as_bytes(&self) -> Result<ByteView<'a>, Rejection> {
        self.contents()
            .map(ByteView::new)
            .ok_or(Rejection::Detached)
    }
}

impl core::fmt::Debug for ArrayBuffer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ArrayBuffer")
            .field("byte_length", &self.byte_length())
            .field("detached", &self.is_detached())
            .finish()
    }
}
