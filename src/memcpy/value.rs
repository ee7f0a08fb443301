use crate::memcpy::{
    buffer::{ArrayBuffer, ByteSource, ByteView, NodeBuffer},
    error::Rejection,
};

/// A call-site argument as the host runtime hands it over.
#[derive(Debug, Clone, Copy)]
pub enum HostValue<'a> {
    /// `undefined`, also what a missing argument reads as.
    Undefined,
    /// `null`.
    Null,
    /// A boolean.
    Bool(bool),
    /// Any number, integral or not.
    Number(f64),
    /// A string, never coerced to a number.
    Str(&'a str),
    /// Any object without byte storage.
    Object,
    /// A host `Buffer`.
    Buffer(NodeBuffer<'a>),
    /// A host `ArrayBuffer`, possibly detached.
    ArrayBuffer(ArrayBuffer<'a>),
}

impl<'a> HostValue<'a> {
    /// Returns the value as an unsigned 32-bit integer, if it is one.
    ///
    /// Accepts finite, integral numbers in `0..=u32::MAX`. Negative zero is
    /// not a uint32.
    pub fn as_uint32(&self) -> Option<u32> {
        let HostValue::Number(n) = *self else {
            return None;
        };
        if !(0.0..=u32::MAX as f64).contains(&n) || (n == 0.0 && n.is_sign_negative()) {
            return None;
        }
        let int = n as u32;
        (int as f64 == n).then_some(int)
    }

    /// Resolves the value to a byte view.
    pub fn as_buffer(&self) -> Result<ByteView<'a>, Rejection> {
        match self {
            HostValue::Buffer(buf) => buf.as_bytes(),
            HostValue::ArrayBuffer(ab) => ab.as_bytes(),
            HostValue::Object => Err(Rejection::NotByteArray),
            _ => Err(Rejection::NotAnObject),
        }
    }
}

impl From<u32> for HostValue<'_> {
    fn from(n: u32) -> Self {
        HostValue::Number(n as f64)
    }
}

impl From<i32> for HostValue<'_> {
    fn from(n: i32) -> Self {
        HostValue::Number(n as f64)
    }
}

impl From<f64> for HostValue<'_> {
    fn from(n: f64) -> Self {
        HostValue::Number(n)
    }
}

impl From<bool> for HostValue<'_> {
    fn from(b: bool) -> Self {
        HostValue::Bool(b)
    }
}

impl<'a> From<&'a str> for HostValue<'a> {
    fn from(s: &'a str) -> Self {
        HostValue::Str(s)
    }
}

impl<'a> From<NodeBuffer<'a>> for HostValue<'a> {
    fn from(buf: NodeBuffer<'a>) -> Self {
        HostValue::Buffer(buf)
    }
}

impl<'a> From<ArrayBuffer<'a>> for HostValue<'a> {
    fn from(ab: ArrayBuffer<'a>) -> Self {
        HostValue::ArrayBuffer(ab)
    }
}
