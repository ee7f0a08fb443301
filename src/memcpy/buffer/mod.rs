pub mod array;
pub mod owned;

use core::cell::Cell;

use crate::memcpy::error::Rejection;

pub use array::ArrayBuffer;
pub use owned::NodeBuffer;

/// Capability shared by every buffer representation: hand out the byte view.
pub trait ByteSource<'a> {
    /// Resolves the buffer to its bytes.
    ///
    /// Fails only when the representation cannot currently produce storage.
    fn as_bytes(&self) -> Result<ByteView<'a>, Rejection>;
}

/// Resolved view over an externally owned byte region.
///
/// Bytes are held as cells so that a target and a source may alias the
/// same storage.
#[derive(Clone, Copy)]
pub struct ByteView<'a> {
    cells: &'a [Cell<u8>],
}

impl<'a> ByteView<'a> {
    #[inline]
    pub fn new(cells: &'a [Cell<u8>]) -> Self {
        Self { cells }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Reads the byte at `index`, if in bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<u8> {
        self.cells.get(index).map(Cell::get)
    }

    /// Copies the whole view into `dest`.
    ///
    /// # Panics
    /// Panics if destination length doesn't match view length.
    pub fn copy_to_slice(&self, dest: &mut [u8]) {
        assert_eq!(dest.len(), self.cells.len(), "length mismatch");
        for (out, cell) in dest.iter_mut().zip(self.cells) {
            *out = cell.get();
        }
    }

    /// Returns true if the two views share at least one byte.
    #[inline]
    pub fn overlaps(&self, other: &ByteView<'_>) -> bool {
        let a = self.cells.as_ptr_range();
        let b = other.cells.as_ptr_range();
        !self.is_empty() && !other.is_empty() && a.start < b.end && b.start < a.end
    }

    /// Sub-range of the view, or `None` if `start..end` is out of bounds.
    #[inline]
    pub(crate) fn range(&self, start: usize, end: usize) -> Option<&'a [Cell<u8>]> {
        self.cells.get(start..end)
    }
}

impl core::fmt::Debug for ByteView<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ByteView")
            .field("len", &self.cells.len())
            .finish_non_exhaustive()
    }
}

impl<'a> ByteSource<'a> for ByteView<'a> {
    fn as_bytes(&self) -> Result<ByteView<'a>, Rejection> {
        Ok(*self)
    }
}

/// Either buffer representation a host can pass in.
#[derive(Debug, Clone, Copy)]
pub enum BufferHandle<'a> {
    Buffer(NodeBuffer<'a>),
    ArrayBuffer(ArrayBuffer<'a>),
}

impl<'a> ByteSource<'a> for BufferHandle<'a> {
    fn as_bytes(&self) -> Result<ByteView<'a>, Rejection> {
        match self {
            BufferHandle::Buffer(buf) => buf.as_bytes(),
            BufferHandle::ArrayBuffer(ab) => ab.as_bytes(),
        }
    }
}

impl<'a> From<NodeBuffer<'a>> for BufferHandle<'a> {
    fn from(buf: NodeBuffer<'a>) -> Self {
        BufferHandle::Buffer(buf)
    }
}

impl<'a> From<ArrayBuffer<'a>> for BufferHandle<'a> {
    fn from(ab: ArrayBuffer<'a>) -> Self {
        BufferHandle::ArrayBuffer(ab)
    }
}
