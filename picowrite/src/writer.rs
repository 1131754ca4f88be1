// SPDX-License-Identifier: Apache-2.0

//! The writer state machine: separator policy, key/value pairing and
//! bounds-checked emission into the destination buffer.

use log::debug;

use crate::frame_stack::{FrameKind, FrameStack, DEFAULT_MAX_DEPTH};
use crate::write_buffer::SliceWriteBuffer;
use crate::write_error::WriteError;

/// Output style, fixed for the lifetime of a writer session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Format {
    /// No inter-token whitespace at all.
    Compact,
    /// A single space after `:` and `,`.
    Normal,
    /// A newline plus `indent * depth` spaces after every `,` and opening
    /// bracket, and before every closing bracket. The parameter is the
    /// indent width in spaces per nesting level.
    Pretty(u8),
}

/// A streaming JSON writer over a caller-supplied byte buffer.
///
/// The writer borrows the buffer for the whole session and performs no
/// allocation. `MAX_DEPTH` bounds the nesting stack: one slot for the
/// document root, plus one per open container and one per pending object
/// key. The default matches [`DEFAULT_MAX_DEPTH`].
///
/// Operations either succeed, report [`WriteError::BufferFull`] (the
/// buffer and stack are left untouched, so the caller can retry with a
/// larger buffer), or report a structural contract violation after which
/// the document must be considered broken.
#[derive(Debug)]
pub struct JsonWriter<'a, const MAX_DEPTH: usize = DEFAULT_MAX_DEPTH> {
    buf: SliceWriteBuffer<'a>,
    stack: FrameStack<MAX_DEPTH>,
    format: Format,
}

impl<'a> JsonWriter<'a> {
    /// Creates a compact-mode writer with the default nesting capacity.
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self::with_max_depth(buf, Format::Compact)
    }

    /// Creates a writer with the given output style and the default
    /// nesting capacity.
    pub fn with_format(buf: &'a mut [u8], format: Format) -> Self {
        Self::with_max_depth(buf, format)
    }
}

impl<'a, const MAX_DEPTH: usize> JsonWriter<'a, MAX_DEPTH> {
    /// Creates a writer with a caller-sized nesting stack, e.g.
    /// `JsonWriter::<8>::with_max_depth(&mut buf, Format::Compact)`.
    pub fn with_max_depth(buf: &'a mut [u8], format: Format) -> Self {
        Self {
            buf: SliceWriteBuffer::new(buf),
            stack: FrameStack::new(),
            format,
        }
    }

    /// Restarts the session over the same buffer: cursor back to zero,
    /// stack back to the root frame. The output style is kept.
    pub fn reset(&mut self) {
        self.buf.rewind();
        self.stack.reset();
    }

    /// Current write position in the buffer.
    pub fn pos(&self) -> usize {
        self.buf.current_pos()
    }

    /// Number of open containers and pending keys.
    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    /// The document written so far.
    pub fn as_bytes(&self) -> &[u8] {
        self.buf.written()
    }

    /// Starts an array. Valid anywhere a value is valid.
    pub fn open_array(&mut self) -> Result<(), WriteError> {
        self.open_container(FrameKind::Array, b'[')
    }

    /// Starts an object. Valid anywhere a value is valid.
    pub fn open_object(&mut self) -> Result<(), WriteError> {
        self.open_container(FrameKind::Object, b'{')
    }

    /// Closes the innermost open array or object.
    pub fn close(&mut self) -> Result<(), WriteError> {
        let bracket = match self.stack.top().kind {
            FrameKind::Array => b']',
            FrameKind::Object => b'}',
            FrameKind::Key => return Err(WriteError::DanglingKey),
            FrameKind::Root => return Err(WriteError::NoOpenContainer),
        };
        let lead = match self.format {
            Format::Pretty(indent) => 1 + indent_width(indent, self.stack.container_depth() - 1),
            _ => 0,
        };
        self.reserve(lead + 1)?;
        self.stack.pop();
        if let Format::Pretty(indent) = self.format {
            self.write_newline_indent(indent, self.stack.container_depth())?;
        }
        self.buf.write_byte(bracket)?;
        // A container can be a key's value
        self.consume_key();
        Ok(())
    }

    /// Emits an object key. Valid only while the top frame is an object;
    /// the key must be followed by exactly one value or container.
    ///
    /// The name is copied verbatim, callers pre-escape.
    pub fn write_key(&mut self, name: &str) -> Result<(), WriteError> {
        if self.stack.top().kind != FrameKind::Object {
            return Err(WriteError::KeyOutsideObject);
        }
        if !self.stack.has_capacity() {
            return Err(WriteError::NestingTooDeep);
        }
        let colon = match self.format {
            Format::Compact => 1,
            Format::Normal | Format::Pretty(_) => 2,
        };
        self.reserve(self.separator_len() + name.len() + 2 + colon)?;
        self.write_separator()?;
        self.stack.top_mut().emitted = true;
        self.stack.push(FrameKind::Key)?;
        self.write_quoted(name)?;
        self.buf.write_byte(b':')?;
        if colon == 2 {
            self.buf.write_byte(b' ')?;
        }
        Ok(())
    }

    /// Emits a string value. The payload is copied verbatim: quotes,
    /// backslashes and control characters must be pre-escaped by the
    /// caller.
    pub fn write_string(&mut self, value: &str) -> Result<(), WriteError> {
        self.check_value_allowed()?;
        self.reserve(self.separator_len() + value.len() + 2)?;
        self.begin_value()?;
        self.write_quoted(value)?;
        self.consume_key();
        Ok(())
    }

    /// Emits a signed 64-bit integer in its shortest decimal form.
    pub fn write_int(&mut self, value: i64) -> Result<(), WriteError> {
        self.check_value_allowed()?;
        let mut digits = itoa::Buffer::new();
        let text = digits.format(value);
        self.reserve(self.separator_len() + text.len())?;
        self.begin_value()?;
        self.buf.write_bytes(text.as_bytes())?;
        self.consume_key();
        Ok(())
    }

    /// Emits `true` or `false`.
    pub fn write_bool(&mut self, value: bool) -> Result<(), WriteError> {
        self.check_value_allowed()?;
        let text: &[u8] = if value { b"true" } else { b"false" };
        self.reserve(self.separator_len() + text.len())?;
        self.begin_value()?;
        self.buf.write_bytes(text)?;
        self.consume_key();
        Ok(())
    }

    /// Emits `null`.
    pub fn write_null(&mut self) -> Result<(), WriteError> {
        self.check_value_allowed()?;
        self.reserve(self.separator_len() + 4)?;
        self.begin_value()?;
        self.buf.write_bytes(b"null")?;
        self.consume_key();
        Ok(())
    }

    /// Finalizes the document. Valid only once the stack is back at the
    /// root frame with exactly one top-level value written. Appends a NUL
    /// terminator (kept for parity with C-interop call sites) and returns
    /// the written length excluding it.
    pub fn finish(mut self) -> Result<usize, WriteError> {
        self.check_finishable()?;
        // Every content write reserved one spare byte for this
        self.buf.write_byte(0)?;
        let len = self.buf.current_pos().saturating_sub(1);
        debug!("--finished-- {} bytes", len);
        Ok(len)
    }

    /// Validates what `finish` will enforce, without consuming the writer.
    pub(crate) fn check_finishable(&self) -> Result<(), WriteError> {
        match self.stack.top().kind {
            FrameKind::Root => {}
            FrameKind::Key => return Err(WriteError::DanglingKey),
            FrameKind::Array | FrameKind::Object => return Err(WriteError::UnclosedContainer),
        }
        if !self.stack.top().emitted {
            return Err(WriteError::EmptyDocument);
        }
        Ok(())
    }

    fn open_container(&mut self, kind: FrameKind, bracket: u8) -> Result<(), WriteError> {
        self.check_value_allowed()?;
        if !self.stack.has_capacity() {
            return Err(WriteError::NestingTooDeep);
        }
        let trail = match self.format {
            Format::Pretty(indent) => 1 + indent_width(indent, self.stack.container_depth() + 1),
            _ => 0,
        };
        self.reserve(self.separator_len() + 1 + trail)?;
        self.begin_value()?;
        self.stack.push(kind)?;
        self.buf.write_byte(bracket)?;
        if let Format::Pretty(indent) = self.format {
            self.write_newline_indent(indent, self.stack.container_depth())?;
        }
        Ok(())
    }

    /// Checks the operation's full byte count before anything is written,
    /// so an out-of-space failure leaves the document and stack untouched.
    fn reserve(&self, len: usize) -> Result<(), WriteError> {
        if self.buf.fits(len) {
            Ok(())
        } else {
            Err(WriteError::BufferFull)
        }
    }

    /// Rejects value placement the top frame does not allow: a bare value
    /// inside an object, or a second top-level value.
    fn check_value_allowed(&self) -> Result<(), WriteError> {
        let top = self.stack.top();
        match top.kind {
            FrameKind::Object => Err(WriteError::KeyExpected),
            FrameKind::Root if top.emitted => Err(WriteError::RootAlreadyWritten),
            _ => Ok(()),
        }
    }

    /// Separator step plus sibling bookkeeping for the frame receiving the
    /// value. Call only after the operation's bytes are reserved.
    fn begin_value(&mut self) -> Result<(), WriteError> {
        self.write_separator()?;
        let top = self.stack.top_mut();
        if top.kind != FrameKind::Key {
            top.emitted = true;
        }
        Ok(())
    }

    /// Bytes the separator step will emit before the next sibling.
    fn separator_len(&self) -> usize {
        let top = self.stack.top();
        match top.kind {
            FrameKind::Root | FrameKind::Key => 0,
            FrameKind::Array | FrameKind::Object => {
                if !top.emitted {
                    return 0;
                }
                match self.format {
                    Format::Compact => 1,
                    Format::Normal => 2,
                    Format::Pretty(indent) => {
                        2 + indent_width(indent, self.stack.container_depth())
                    }
                }
            }
        }
    }

    /// If this is a follow-up item in a container, a comma (plus
    /// mode-dependent whitespace) separates it from the previous sibling.
    /// A key frame never accumulates siblings, and the root permits only
    /// one value, guarded in `check_value_allowed`.
    fn write_separator(&mut self) -> Result<(), WriteError> {
        let top = *self.stack.top();
        match top.kind {
            FrameKind::Root | FrameKind::Key => Ok(()),
            FrameKind::Array | FrameKind::Object => {
                if !top.emitted {
                    return Ok(());
                }
                self.buf.write_byte(b',')?;
                match self.format {
                    Format::Compact => Ok(()),
                    Format::Normal => {
                        self.buf.write_byte(b' ')?;
                        Ok(())
                    }
                    Format::Pretty(indent) => {
                        self.write_newline_indent(indent, self.stack.container_depth())
                    }
                }
            }
        }
    }

    /// A key holds exactly one value; once that value landed the key frame
    /// comes off the stack.
    fn consume_key(&mut self) {
        if self.stack.top().kind == FrameKind::Key {
            self.stack.pop();
        }
    }

    fn write_quoted(&mut self, s: &str) -> Result<(), WriteError> {
        self.buf.write_byte(b'"')?;
        self.buf.write_bytes(s.as_bytes())?;
        self.buf.write_byte(b'"')?;
        Ok(())
    }

    fn write_newline_indent(&mut self, indent: u8, depth: usize) -> Result<(), WriteError> {
        self.buf.write_byte(b'\n')?;
        for _ in 0..indent_width(indent, depth) {
            self.buf.write_byte(b' ')?;
        }
        Ok(())
    }
}

fn indent_width(indent: u8, depth: usize) -> usize {
    (indent as usize).saturating_mul(depth)
}
