/// Numeric argument that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Offset into the target at which writing begins.
    TargetStart,
    /// Offset into the source at which reading begins.
    SourceStart,
    /// Exclusive end offset into the source.
    SourceEnd,
}

impl Field {
    /// Name of the argument as a host caller spells it.
    pub fn name(&self) -> &'static str {
        match self {
            Field::TargetStart => "targetStart",
            Field::SourceStart => "sourceStart",
            Field::SourceEnd => "sourceEnd",
        }
    }
}

impl core::fmt::Display for Field {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a value could not be used as a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The value is a primitive, not an object.
    NotAnObject,
    /// The value is an object without byte storage.
    NotByteArray,
    /// The `ArrayBuffer` has released its backing store.
    Detached,
}

impl core::fmt::Display for Rejection {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Rejection::NotAnObject => write!(f, "not an object"),
            Rejection::NotByteArray => write!(f, "not a valid byte array"),
            Rejection::Detached => write!(f, "buffer is detached"),
        }
    }
}

/// Errors that can occur while validating or performing a copy.
///
/// Every error is reported before any byte of the target is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyError {
    /// Too few or too many arguments.
    ArgumentCount,
    /// The target is not a usable buffer.
    InvalidTarget(Rejection),
    /// The source is not a usable buffer.
    InvalidSource(Rejection),
    /// An optional offset is present but not an unsigned 32-bit integer.
    Type(Field),
    /// An offset lies outside the buffer it indexes.
    Range(Field),
    /// The source range does not fit into the target at `targetStart`.
    CapacityOverrun,
}

/// Coarse grouping of [`CopyError`] for host adapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Malformed call shape.
    CallShape,
    /// An argument of the wrong kind.
    ArgumentKind,
    /// A numeric argument out of bounds.
    OutOfBounds,
    /// The copy would write past the end of the target.
    Overrun,
}

impl CopyError {
    /// Returns the coarse failure class.
    pub fn category(&self) -> Category {
        match self {
            CopyError::ArgumentCount => Category::CallShape,
            CopyError::InvalidTarget(_) | CopyError::InvalidSource(_) | CopyError::Type(_) => {
                Category::ArgumentKind
            }
            CopyError::Range(_) => Category::OutOfBounds,
            CopyError::CapacityOverrun => Category::Overrun,
        }
    }

    /// Returns the offending numeric argument, if the error concerns one.
    pub fn field(&self) -> Option<Field> {
        match self {
            CopyError::Type(field) | CopyError::Range(field) => Some(*field),
            _ => None,
        }
    }
}

impl core::fmt::Display for CopyError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CopyError::ArgumentCount => write!(f, "illegal number of arguments"),
            CopyError::InvalidTarget(why) => write!(f, "illegal target: {why}"),
            CopyError::InvalidSource(why) => write!(f, "illegal source: {why}"),
            CopyError::Type(field) => write!(f, "illegal {field}: not an uint32"),
            CopyError::Range(Field::SourceEnd) => write!(
                f,
                "illegal sourceEnd: less than sourceStart or bigger than length"
            ),
            CopyError::Range(field) => write!(f, "illegal {field}: bigger than length"),
            CopyError::CapacityOverrun => {
                write!(f, "illegal source range: target capacity overrun")
            }
        }
    }
}

impl core::error::Error for CopyError {}
