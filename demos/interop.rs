//! Interop example: moving bytes between host buffers
//!
//! This example demonstrates:
//! - Wrapping host memory as `Buffer`s and `ArrayBuffer`s
//! - Collecting call-site arguments into a fixed-size `CallArgs` frame
//! - The optional `targetStart` / `sourceStart` / `sourceEnd` arguments
//! - Overlapping copies within one buffer
//! - Typed errors and the lenient offset policy

use bounded_memcpy::prelude::*;

fn main() {
    // ========== Buffer <- ArrayBuffer ==========
    let mut packet = [0u8; 12];
    let mut payload = *b"..HELLO..";

    {
        let target = NodeBuffer::new(&mut packet);
        let source = ArrayBuffer::new(&mut payload);

        // A binding fills the frame as it walks the host's arguments.
        let mut args = CallArgs::new();
        args.push(target).unwrap();
        args.push(4u32).unwrap(); // targetStart
        args.push(source).unwrap();
        args.push(2u32).unwrap(); // sourceStart
        args.push(7u32).unwrap(); // sourceEnd

        let copied = Copier::new().copy(&args).unwrap();
        assert_eq!(copied, 5);
    }
    assert_eq!(&packet[4..9], b"HELLO");

    // ========== Overlapping copy ==========
    // Shift the whole packet left by four bytes, in place.
    {
        let buf = NodeBuffer::new(&mut packet);
        let copied = bounded_memcpy::copy(buf, None, buf, Some(4), None).unwrap();
        assert_eq!(copied, 8);
    }
    assert_eq!(&packet[..5], b"HELLO");

    // ========== Rejections ==========
    let mut small = [0u8; 4];
    let mut big = [0u8; 8];
    let target = NodeBuffer::new(&mut small);
    let source = NodeBuffer::new(&mut big);

    let err = bounded_memcpy::memcpy(&[target.into(), source.into()]).unwrap_err();
    assert_eq!(err, CopyError::CapacityOverrun);
    println!("rejected: {err}");

    let err = bounded_memcpy::memcpy(&[target.into(), source.into(), "2".into()]).unwrap_err();
    assert_eq!(err, CopyError::Type(Field::SourceStart));
    println!("rejected: {err}");

    // The lenient policy treats the mistyped offset as absent.
    let copied = Copier::with_policy(LenientOffsets)
        .copy(&[target.into(), source.into(), 4u32.into(), HostValue::Undefined])
        .unwrap();
    assert_eq!(copied, 4);
}
