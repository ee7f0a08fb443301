pub mod args;
pub mod buffer;
pub mod copier;
pub mod error;
pub(crate) mod mover;
pub mod policy;
pub mod request;
pub mod value;

#[cfg(test)]
mod test_support;

pub use args::{CallArgs, MAX_ARGS, parse};
pub use buffer::{ArrayBuffer, BufferHandle, ByteSource, ByteView, NodeBuffer};
pub use copier::{Copier, copy, memcpy};
pub use error::{Category, CopyError, Field, Rejection};
pub use policy::{LenientOffsets, OffsetPolicy, StrictOffsets};
pub use request::{CopyBuilder, CopyRequest};
pub use value::HostValue;

pub mod prelude {
    pub use super::{
        ArrayBuffer, BufferHandle, ByteSource, ByteView, CallArgs, Category, CopyBuilder,
        CopyError, CopyRequest, Copier, Field, HostValue, LenientOffsets, NodeBuffer,
        OffsetPolicy, Rejection, StrictOffsets,
    };
}
