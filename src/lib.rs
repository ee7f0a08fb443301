//! A `no_std`, no-alloc bounded copy between host byte buffers.
//!
//! This crate implements the native half of a buffer-copy binding: it takes
//! the positional arguments a host runtime passes,
//! `target[, targetStart], source[, sourceStart[, sourceEnd]]`, validates
//! every one of them, and moves the selected source bytes into the target.
//!
//! # Features
//!
//! - **Zero heap allocation** - arguments fit a fixed-size frame, buffers are borrowed
//! - **Two buffer representations** - owned `Buffer`s and unwrappable `ArrayBuffer`s
//! - **Validate-then-act** - every failure is reported before a byte is written
//! - **Overlap-safe** - target and source may be the same storage
//! - **Typed errors** - one variant per failure, carrying the offending field
//!
//! # Argument rules
//!
//! ```text
//!  memcpy(target, [targetStart], source, [sourceStart], [sourceEnd])
//!           │          │            │          │              │
//!           │          │            │          │              └─ uint32, sourceStart..=len
//!           │          │            │          └─ uint32, 0..=len
//!           │          │            └─ Buffer | ArrayBuffer
//!           │          └─ consumed only if uint32, 0..=len
//!           └─ Buffer | ArrayBuffer
//! ```
//!
//! The copy itself requires `targetStart + (sourceEnd - sourceStart)` to fit
//! the target. An empty source range returns 0 without touching memory.
//!
//! # Example
//!
//! ```rust
//! use bounded_memcpy::prelude::*;
//!
//! let mut target = [0u8; 10];
//! let mut source = [1u8, 2, 3, 4, 5, 6, 7, 8, 9, 10];
//!
//! let copied = bounded_memcpy::memcpy(&[
//!     NodeBuffer::new(&mut target).into(),
//!     ArrayBuffer::new(&mut source).into(),
//!     2u32.into(),
//!     7u32.into(),
//! ])
//! .unwrap();
//!
//! assert_eq!(copied, 5);
//! assert_eq!(target, [3, 4, 5, 6, 7, 0, 0, 0, 0, 0]);
//! ```

#![deny(unsafe_code)]
#![no_std]

pub mod memcpy;

pub use memcpy::{copy, memcpy};

pub mod prelude {
    pub use crate::memcpy::prelude::*;
}
