use core::ops::Deref;

use heapless::Vec;

use crate::memcpy::{
    error::{CopyError, Field},
    policy::OffsetPolicy,
    request::{CopyRequest, check_source_end, check_source_start, check_target_start},
    value::HostValue,
};

/// Most arguments a valid call can carry:
/// `target, targetStart, source, sourceStart, sourceEnd`.
pub const MAX_ARGS: usize = 5;

/// Fixed-capacity argument frame for bindings that collect host arguments
/// without allocating.
#[derive(Debug, Clone, Default)]
pub struct CallArgs<'a> {
    values: Vec<HostValue<'a>, MAX_ARGS>,
}

impl<'a> CallArgs<'a> {
    /// Creates an empty frame.
    pub const fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Appends an argument.
    ///
    /// A sixth argument can never form a valid call and fails with
    /// `ArgumentCount`.
    pub fn push(&mut self, value: impl Into<HostValue<'a>>) -> Result<(), CopyError> {
        self.values
            .push(value.into())
            .map_err(|_| CopyError::ArgumentCount)
    }

    /// Collects `values` into a frame, failing if there are more than
    /// [`MAX_ARGS`].
    pub fn from_slice(values: &[HostValue<'a>]) -> Result<Self, CopyError> {
        let mut args = Self::new();
        for value in values {
            args.push(*value)?;
        }
        Ok(args)
    }
}

impl<'a> Deref for CallArgs<'a> {
    type Target = [HostValue<'a>];

    fn deref(&self) -> &Self::Target {
        &self.values
    }
}

/// Walks the positional arguments front to back.
struct Cursor<'s, 'a> {
    args: &'s [HostValue<'a>],
    pos: usize,
}

impl<'s, 'a> Cursor<'s, 'a> {
    fn new(args: &'s [HostValue<'a>]) -> Self {
        Self { args, pos: 0 }
    }

    fn peek(&self) -> Option<&'s HostValue<'a>> {
        self.args.get(self.pos)
    }

    fn advance(&mut self) -> Option<&'s HostValue<'a>> {
        let value = self.peek()?;
        self.pos += 1;
        Some(value)
    }

    fn remaining(&self) -> usize {
        self.args.len() - self.pos
    }

    /// Consumes an optional offset, honouring the mistyped-value policy.
    fn optional_offset<P: OffsetPolicy>(
        &mut self,
        field: Field,
        policy: &P,
    ) -> Result<Option<u32>, CopyError> {
        let Some(value) = self.advance() else {
            return Ok(None);
        };
        match value.as_uint32() {
            Some(n) => Ok(Some(n)),
            None if policy.skip_mistyped(field) => Ok(None),
            None => Err(CopyError::Type(field)),
        }
    }
}

/// Parses `target[, targetStart], source[, sourceStart[, sourceEnd]]`.
///
/// Checks run in argument order and the first violation is returned.
pub fn parse<'a, P: OffsetPolicy>(
    args: &[HostValue<'a>],
    policy: &P,
) -> Result<CopyRequest<'a>, CopyError> {
    if args.len() < 2 {
        return Err(CopyError::ArgumentCount);
    }
    let mut cursor = Cursor::new(args);

    let target = cursor
        .advance()
        .ok_or(CopyError::ArgumentCount)?
        .as_buffer()
        .map_err(CopyError::InvalidTarget)?;

    // A non-uint32 here is left for the source slot.
    let mut target_start = 0;
    if let Some(start) = cursor.peek().and_then(HostValue::as_uint32) {
        cursor.advance();
        target_start = check_target_start(start, &target)?;
    }

    let source = cursor
        .advance()
        .ok_or(CopyError::ArgumentCount)?
        .as_buffer()
        .map_err(CopyError::InvalidSource)?;

    let source_start = match cursor.optional_offset(Field::SourceStart, policy)? {
        Some(start) => check_source_start(start, &source)?,
        None => 0,
    };
    let source_end = match cursor.optional_offset(Field::SourceEnd, policy)? {
        Some(end) => check_source_end(end, source_start, &source)?,
        None => source.len(),
    };

    if cursor.remaining() > 0 {
        return Err(CopyError::ArgumentCount);
    }

    Ok(CopyRequest::from_parts(
        target,
        target_start,
        source,
        source_start,
        source_end,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memcpy::{
        buffer::{ArrayBuffer, NodeBuffer},
        error::Rejection,
        policy::{LenientOffsets, StrictOffsets},
    };

    #[test]
    fn too_few_arguments() {
        let mut t = [0u8; 4];
        let buf = HostValue::from(NodeBuffer::new(&mut t));

        assert_eq!(
            parse(&[], &StrictOffsets).unwrap_err(),
            CopyError::ArgumentCount
        );
        assert_eq!(
            parse(&[buf], &StrictOffsets).unwrap_err(),
            CopyError::ArgumentCount
        );
        // target and targetStart consume everything; no source remains.
        assert_eq!(
            parse(&[buf, 1u32.into()], &StrictOffsets).unwrap_err(),
            CopyError::ArgumentCount
        );
    }

    #[test]
    fn argument_count_precedes_buffer_checks() {
        assert_eq!(
            parse(&[HostValue::Null], &StrictOffsets).unwrap_err(),
            CopyError::ArgumentCount
        );
    }

    #[test]
    fn invalid_target() {
        let mut s = [0u8; 4];
        let src = HostValue::from(NodeBuffer::new(&mut s));

        assert_eq!(
            parse(&[HostValue::Null, src], &StrictOffsets).unwrap_err(),
            CopyError::InvalidTarget(Rejection::NotAnObject)
        );
        assert_eq!(
            parse(&[HostValue::Object, src], &StrictOffsets).unwrap_err(),
            CopyError::InvalidTarget(Rejection::NotByteArray)
        );
        assert_eq!(
            parse(&[ArrayBuffer::detached().into(), src], &StrictOffsets).unwrap_err(),
            CopyError::InvalidTarget(Rejection::Detached)
        );
    }

    #[test]
    fn non_integer_after_target_is_taken_as_source() {
        let mut t = [0u8; 4];
        let mut s = [0u8; 4];
        let target = HostValue::from(NodeBuffer::new(&mut t));
        let source = HostValue::from(NodeBuffer::new(&mut s));

        assert_eq!(
            parse(&[target, "1".into(), source], &StrictOffsets).unwrap_err(),
            CopyError::InvalidSource(Rejection::NotAnObject)
        );
        assert_eq!(
            parse(&[target, (-1i32).into(), source], &StrictOffsets).unwrap_err(),
            CopyError::InvalidSource(Rejection::NotAnObject)
        );
        assert_eq!(
            parse(&[target, 0u32.into(), HostValue::Object], &StrictOffsets).unwrap_err(),
            CopyError::InvalidSource(Rejection::NotByteArray)
        );
        assert_eq!(
            parse(&[target, ArrayBuffer::detached().into()], &StrictOffsets).unwrap_err(),
            CopyError::InvalidSource(Rejection::Detached)
        );
    }

    #[test]
    fn target_start_out_of_range() {
        let mut t = [0u8; 4];
        let mut s = [0u8; 4];
        let target = HostValue::from(NodeBuffer::new(&mut t));
        let source = HostValue::from(NodeBuffer::new(&mut s));

        assert_eq!(
            parse(&[target, 5u32.into(), source], &StrictOffsets).unwrap_err(),
            CopyError::Range(Field::TargetStart)
        );
        let req = parse(&[target, 4u32.into(), source], &StrictOffsets).unwrap();
        assert_eq!(req.target_start(), 4);
    }

    #[test]
    fn source_offsets() {
        let mut t = [0u8; 8];
        let mut s = [0u8; 8];
        let target = HostValue::from(NodeBuffer::new(&mut t));
        let source = HostValue::from(ArrayBuffer::new(&mut s));

        let req = parse(&[target, source, 2u32.into(), 6u32.into()], &StrictOffsets).unwrap();
        assert_eq!((req.source_start(), req.source_end()), (2, 6));

        let req = parse(&[target, source, 3u32.into()], &StrictOffsets).unwrap();
        assert_eq!((req.source_start(), req.source_end()), (3, 8));

        assert_eq!(
            parse(&[target, source, 9u32.into()], &StrictOffsets).unwrap_err(),
            CopyError::Range(Field::SourceStart)
        );
        assert_eq!(
            parse(&[target, source, 4u32.into(), 3u32.into()], &StrictOffsets).unwrap_err(),
            CopyError::Range(Field::SourceEnd)
        );
        assert_eq!(
            parse(&[target, source, 0u32.into(), 9u32.into()], &StrictOffsets).unwrap_err(),
            CopyError::Range(Field::SourceEnd)
        );
    }

    #[test]
    fn mistyped_source_offsets() {
        let mut t = [0u8; 8];
        let mut s = [0u8; 8];
        let target = HostValue::from(NodeBuffer::new(&mut t));
        let source = HostValue::from(NodeBuffer::new(&mut s));

        assert_eq!(
            parse(&[target, source, HostValue::Undefined], &StrictOffsets).unwrap_err(),
            CopyError::Type(Field::SourceStart)
        );
        assert_eq!(
            parse(&[target, source, 1u32.into(), 2.5.into()], &StrictOffsets).unwrap_err(),
            CopyError::Type(Field::SourceEnd)
        );

        let req = parse(
            &[target, source, HostValue::Undefined, HostValue::Null],
            &LenientOffsets,
        )
        .unwrap();
        assert_eq!((req.source_start(), req.source_end()), (0, 8));
    }

    #[test]
    fn trailing_arguments() {
        let mut t = [0u8; 8];
        let mut s = [0u8; 8];
        let target = HostValue::from(NodeBuffer::new(&mut t));
        let source = HostValue::from(NodeBuffer::new(&mut s));

        assert_eq!(
            parse(
                &[target, source, 1u32.into(), 2u32.into(), 3u32.into()],
                &StrictOffsets
            )
            .unwrap_err(),
            CopyError::ArgumentCount
        );
    }

    #[test]
    fn call_args_capacity() {
        let mut t = [0u8; 8];
        let target = HostValue::from(NodeBuffer::new(&mut t));

        let mut args = CallArgs::new();
        args.push(target).unwrap();
        args.push(0u32).unwrap();
        args.push(target).unwrap();
        args.push(0u32).unwrap();
        args.push(8u32).unwrap();
        assert_eq!(args.len(), MAX_ARGS);
        assert_eq!(args.push(true), Err(CopyError::ArgumentCount));

        let req = parse(&args, &StrictOffsets).unwrap();
        assert_eq!(req.len(), 8);

        assert_eq!(
            CallArgs::from_slice(&[HostValue::Null; 6]).unwrap_err(),
            CopyError::ArgumentCount
        );
    }
}
