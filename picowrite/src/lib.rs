// SPDX-License-Identifier: Apache-2.0

#![cfg_attr(not(test), no_std)]

//! A resource-constrained JSON writer for embedded systems.
//!
//! `picowrite` streams JSON text directly into a caller-supplied byte
//! buffer. There is no heap allocation and no in-memory value tree;
//! well-formedness is enforced by a fixed-capacity nesting stack while
//! the document is written.
//!
//! ```
//! use picowrite::{Format, JsonWriter};
//!
//! let mut buf = [0u8; 64];
//! let mut writer = JsonWriter::new(&mut buf);
//! writer.open_object()?;
//! writer.write_key("answer")?;
//! writer.write_int(42)?;
//! writer.close()?;
//! let len = writer.finish()?;
//! assert_eq!(&buf[..len], br#"{"answer":42}"#);
//! # Ok::<(), picowrite::WriteError>(())
//! ```
//!
//! String payloads are copied verbatim: the writer is a structural
//! encoder, and callers must pre-escape quotes, backslashes and control
//! characters before handing strings in.

mod frame_stack;

mod write_buffer;

mod write_error;
pub use write_error::WriteError;

mod writer;
pub use writer::{Format, JsonWriter};

pub use frame_stack::DEFAULT_MAX_DEPTH;

pub mod global;

impl From<write_buffer::Error> for WriteError {
    fn from(err: write_buffer::Error) -> Self {
        match err {
            write_buffer::Error::BufferFull => WriteError::BufferFull,
            write_buffer::Error::InvalidSliceBounds => {
                WriteError::UnexpectedState("Invalid slice bounds in write buffer")
            }
        }
    }
}
