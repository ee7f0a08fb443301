use crate::memcpy::error::Field;

/// Controls how a present but non-uint32 optional source offset is treated.
pub trait OffsetPolicy {
    /// Returns true if the offending value should be consumed and treated as
    /// absent, false if the call must fail with a type error.
    fn skip_mistyped(&self, field: Field) -> bool;
}

/// Default policy: a mistyped offset is a type error.
#[derive(Debug, Default, Clone, Copy)]
pub struct StrictOffsets;

impl OffsetPolicy for StrictOffsets {
    fn skip_mistyped(&self, _field: Field) -> bool {
        false
    }
}

/// Legacy policy: a mistyped offset falls back to its default.
#[derive(Debug, Default, Clone, Copy)]
pub struct LenientOffsets;

impl OffsetPolicy for LenientOffsets {
    fn skip_mistyped(&self, _field: Field) -> bool {
        true
    }
}
