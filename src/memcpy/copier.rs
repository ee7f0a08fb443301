use crate::memcpy::{
    args::parse,
    buffer::ByteSource,
    error::CopyError,
    policy::{OffsetPolicy, StrictOffsets},
    request::CopyBuilder,
    value::HostValue,
};

/// Entry point for host bindings.
///
/// Parses `target[, targetStart], source[, sourceStart[, sourceEnd]]`,
/// validates every argument and performs an overlap-safe copy. Holds no
/// state besides its offset policy.
#[derive(Debug, Default, Clone, Copy)]
pub struct Copier<P: OffsetPolicy = StrictOffsets> {
    policy: P,
}

impl Copier<StrictOffsets> {
    /// Creates a copier with the strict offset policy.
    pub const fn new() -> Self {
        Self {
            policy: StrictOffsets,
        }
    }
}

impl<P: OffsetPolicy> Copier<P> {
    /// Creates a copier with a custom offset policy.
    pub fn with_policy(policy: P) -> Self {
        Self { policy }
    }

    /// Returns the offset policy in use.
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Copies between the buffers named by `args` and returns the number of
    /// bytes copied.
    ///
    /// The call holds no locks; the caller must keep both buffers free of
    /// concurrent access for its duration.
    pub fn copy(&self, args: &[HostValue<'_>]) -> Result<usize, CopyError> {
        parse(args, &self.policy)
            .and_then(|req| req.execute())
            .map_err(rejected)
    }

    /// Same as [`Copier::copy`], run inside a critical section.
    ///
    /// For buffers wrapping raw memory that interrupt handlers or other
    /// cores can reach.
    pub fn copy_guarded(&self, args: &[HostValue<'_>]) -> Result<usize, CopyError> {
        critical_section::with(|_| self.copy(args))
    }
}

/// Copies with the default strict policy.
///
/// ```
/// use bounded_memcpy::prelude::*;
///
/// let mut target = [0u8; 4];
/// let mut source = [1u8, 2, 3, 4];
/// let n = bounded_memcpy::memcpy(&[
///     NodeBuffer::new(&mut target).into(),
///     1u32.into(),
///     ArrayBuffer::new(&mut source).into(),
///     0u32.into(),
///     3u32.into(),
/// ])
/// .unwrap();
///
/// assert_eq!(n, 3);
/// assert_eq!(target, [0, 1, 2, 3]);
/// ```
pub fn memcpy(args: &[HostValue<'_>]) -> Result<usize, CopyError> {
    Copier::new().copy(args)
}

/// Typed form of [`memcpy`] for callers that already hold buffers.
pub fn copy<'a>(
    target: impl ByteSource<'a>,
    target_start: Option<u32>,
    source: impl ByteSource<'a>,
    source_start: Option<u32>,
    source_end: Option<u32>,
) -> Result<usize, CopyError> {
    let mut builder = CopyBuilder::new(target, source).map_err(rejected)?;
    if let Some(start) = target_start {
        builder = builder.target_start(start);
    }
    if let Some(start) = source_start {
        builder = builder.source_start(start);
    }
    if let Some(end) = source_end {
        builder = builder.source_end(end);
    }
    builder
        .build()
        .and_then(|req| req.execute())
        .map_err(rejected)
}

fn rejected(err: CopyError) -> CopyError {
    tracing::debug!(error = %err, category = ?err.category(), "memcpy rejected");
    err
}
