// SPDX-License-Identifier: Apache-2.0

//! Non-reentrant short forms over a single process-wide writer.
//!
//! Mirrors the [`JsonWriter`] operations for call sites that do not want
//! to thread a context through. The instance is not synchronized:
//! concurrent calls from multiple threads are a data race and outside
//! this crate's contract. Use one [`JsonWriter`] per thread when
//! concurrency is needed; this module exists for the single-threaded
//! convenience case only.
//!
//! ```no_run
//! use picowrite::{global, Format};
//!
//! static mut BUF: [u8; 256] = [0; 256];
//!
//! // Single-threaded program: the static is not aliased anywhere else.
//! let buf = unsafe { &mut *core::ptr::addr_of_mut!(BUF) };
//! global::init(buf, Format::Compact);
//! global::open_array()?;
//! global::write_int(1)?;
//! global::close()?;
//! let len = global::finish()?;
//! # Ok::<(), picowrite::WriteError>(())
//! ```

use core::cell::UnsafeCell;

use log::debug;

use crate::{Format, JsonWriter, WriteError};

/// Interior-mutable holder for the process-wide writer. `Sync` is asserted
/// because the module contract restricts all access to a single thread.
struct SingleThreadCell<T>(UnsafeCell<T>);

// Contract: single-threaded access only, see the module docs.
unsafe impl<T> Sync for SingleThreadCell<T> {}

static WRITER: SingleThreadCell<Option<JsonWriter<'static>>> =
    SingleThreadCell(UnsafeCell::new(None));

fn with_writer<R>(f: impl FnOnce(&mut Option<JsonWriter<'static>>) -> R) -> R {
    // Single-threaded contract: this is the only live reference.
    let slot = unsafe { &mut *WRITER.0.get() };
    f(slot)
}

fn with_bound<R>(f: impl FnOnce(&mut JsonWriter<'static>) -> Result<R, WriteError>) -> Result<R, WriteError> {
    with_writer(|slot| f(slot.as_mut().ok_or(WriteError::NotInitialized)?))
}

/// (Re)binds the process-wide writer to a destination buffer, resetting
/// cursor and stack to the root frame. Each document needs its own `init`.
pub fn init(buf: &'static mut [u8], format: Format) {
    debug!("global writer bound to {} byte buffer", buf.len());
    with_writer(|slot| *slot = Some(JsonWriter::with_format(buf, format)));
}

/// Starts an array. See [`JsonWriter::open_array`].
pub fn open_array() -> Result<(), WriteError> {
    with_bound(|w| w.open_array())
}

/// Starts an object. See [`JsonWriter::open_object`].
pub fn open_object() -> Result<(), WriteError> {
    with_bound(|w| w.open_object())
}

/// Closes the innermost open container. See [`JsonWriter::close`].
pub fn close() -> Result<(), WriteError> {
    with_bound(|w| w.close())
}

/// Emits an object key. See [`JsonWriter::write_key`].
pub fn write_key(name: &str) -> Result<(), WriteError> {
    with_bound(|w| w.write_key(name))
}

/// Emits a string value, copied verbatim. See [`JsonWriter::write_string`].
pub fn write_string(value: &str) -> Result<(), WriteError> {
    with_bound(|w| w.write_string(value))
}

/// Emits an integer value. See [`JsonWriter::write_int`].
pub fn write_int(value: i64) -> Result<(), WriteError> {
    with_bound(|w| w.write_int(value))
}

/// Emits a boolean literal. See [`JsonWriter::write_bool`].
pub fn write_bool(value: bool) -> Result<(), WriteError> {
    with_bound(|w| w.write_bool(value))
}

/// Emits `null`. See [`JsonWriter::write_null`].
pub fn write_null() -> Result<(), WriteError> {
    with_bound(|w| w.write_null())
}

/// Finalizes the document and releases the buffer binding; the next
/// document needs a fresh [`init`]. A structural error leaves the binding
/// in place so the caller can still close open containers.
pub fn finish() -> Result<usize, WriteError> {
    with_writer(|slot| {
        slot.as_mut()
            .ok_or(WriteError::NotInitialized)?
            .check_finishable()?;
        match slot.take() {
            Some(writer) => writer.finish(),
            None => Err(WriteError::NotInitialized),
        }
    })
}
