use crate::memcpy::{
    buffer::{ByteSource, ByteView},
    error::{CopyError, Field},
    mover::move_cells,
};

/// A fully validated copy, ready to run.
///
/// All offsets satisfy `target_start <= target.len()` and
/// `source_start <= source_end <= source.len()`. Whether the range fits the
/// target is checked by [`CopyRequest::execute`].
#[derive(Debug, Clone, Copy)]
pub struct CopyRequest<'a> {
    target: ByteView<'a>,
    target_start: usize,
    source: ByteView<'a>,
    source_start: usize,
    source_end: usize,
}

impl<'a> CopyRequest<'a> {
    pub(crate) fn from_parts(
        target: ByteView<'a>,
        target_start: usize,
        source: ByteView<'a>,
        source_start: usize,
        source_end: usize,
    ) -> Self {
        debug_assert!(target_start <= target.len());
        debug_assert!(source_start <= source_end && source_end <= source.len());

        Self {
            target,
            target_start,
            source,
            source_start,
            source_end,
        }
    }

    #[inline]
    pub fn target_start(&self) -> usize {
        self.target_start
    }

    #[inline]
    pub fn source_start(&self) -> usize {
        self.source_start
    }

    #[inline]
    pub fn source_end(&self) -> usize {
        self.source_end
    }

    /// Number of bytes the request moves.
    #[inline]
    pub fn len(&self) -> usize {
        self.source_end - self.source_start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.source_end == self.source_start
    }

    /// Performs the copy and returns the number of bytes moved.
    ///
    /// An empty range returns 0 without touching either buffer. Fails with
    /// [`CopyError::CapacityOverrun`] if the range does not fit the target,
    /// in which case nothing is written.
    pub fn execute(&self) -> Result<usize, CopyError> {
        let len = self.len();
        if len == 0 {
            tracing::trace!("empty source range, nothing to copy");
            return Ok(0);
        }

        let end = self
            .target_start
            .checked_add(len)
            .filter(|&end| end <= self.target.len())
            .ok_or(CopyError::CapacityOverrun)?;

        let dst = self
            .target
            .range(self.target_start, end)
            .ok_or(CopyError::CapacityOverrun)?;
        let src = self
            .source
            .range(self.source_start, self.source_end)
            .ok_or(CopyError::Range(Field::SourceEnd))?;

        tracing::trace!(
            target_start = self.target_start,
            source_start = self.source_start,
            len,
            overlapping = ByteView::new(dst).overlaps(&ByteView::new(src)),
            "moving bytes"
        );

        move_cells(dst, src);
        Ok(len)
    }
}

/// Typed entry point: build a [`CopyRequest`] from two buffers and optional
/// offsets without going through host values.
#[derive(Debug, Clone, Copy)]
pub struct CopyBuilder<'a> {
    target: ByteView<'a>,
    source: ByteView<'a>,
    target_start: Option<u32>,
    source_start: Option<u32>,
    source_end: Option<u32>,
}

impl<'a> CopyBuilder<'a> {
    /// Resolves both buffers, target first.
    pub fn new(
        target: impl ByteSource<'a>,
        source: impl ByteSource<'a>,
    ) -> Result<Self, CopyError> {
        let target = target.as_bytes().map_err(CopyError::InvalidTarget)?;
        let source = source.as_bytes().map_err(CopyError::InvalidSource)?;

        Ok(Self {
            target,
            source,
            target_start: None,
            source_start: None,
            source_end: None,
        })
    }

    /// Sets where in the target the copy begins. Defaults to 0.
    pub fn target_start(mut self, start: u32) -> Self {
        self.target_start = Some(start);
        self
    }

    /// Sets the first source byte to copy. Defaults to 0.
    pub fn source_start(mut self, start: u32) -> Self {
        self.source_start = Some(start);
        self
    }

    /// Sets the end of the source range, exclusive. Defaults to the source
    /// length.
    pub fn source_end(mut self, end: u32) -> Self {
        self.source_end = Some(end);
        self
    }

    /// Validates the offsets in argument order.
    pub fn build(self) -> Result<CopyRequest<'a>, CopyError> {
        let target_start = match self.target_start {
            Some(start) => check_target_start(start, &self.target)?,
            None => 0,
        };
        let source_start = match self.source_start {
            Some(start) => check_source_start(start, &self.source)?,
            None => 0,
        };
        let source_end = match self.source_end {
            Some(end) => check_source_end(end, source_start, &self.source)?,
            None => self.source.len(),
        };

        Ok(CopyRequest::from_parts(
            self.target,
            target_start,
            self.source,
            source_start,
            source_end,
        ))
    }
}

/// Converts `n` into an index no greater than `len`.
fn index_within(n: u32, len: usize) -> Option<usize> {
    usize::try_from(n).ok().filter(|&idx| idx <= len)
}

pub(crate) fn check_target_start(start: u32, target: &ByteView<'_>) -> Result<usize, CopyError> {
    index_within(start, target.len()).ok_or(CopyError::Range(Field::TargetStart))
}

pub(crate) fn check_source_start(start: u32, source: &ByteView<'_>) -> Result<usize, CopyError> {
    index_within(start, source.len()).ok_or(CopyError::Range(Field::SourceStart))
}

pub(crate) fn check_source_end(
    end: u32,
    source_start: usize,
    source: &ByteView<'_>,
) -> Result<usize, CopyError> {
    index_within(end, source.len())
        .filter(|&end| end >= source_start)
        .ok_or(CopyError::Range(Field::SourceEnd))
}
