// SPDX-License-Identifier: Apache-2.0

//! Fixed-capacity nesting stack driving separator and validity decisions.
//!
//! The stack holds one frame per open container plus one per pending
//! object key. There is no dynamic growth: capacity is a const generic
//! so callers can size it to their maximum expected nesting depth.

use crate::write_error::WriteError;

/// Default nesting capacity (open containers plus pending keys).
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// What a stack entry represents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum FrameKind {
    /// The top-level document scope. Present from init, never popped.
    Root,
    Array,
    Object,
    /// An object key waiting for exactly one value.
    Key,
}

/// One nesting stack entry.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Frame {
    pub kind: FrameKind,
    /// True once this frame has written at least one child element.
    pub emitted: bool,
}

impl Frame {
    const fn root() -> Self {
        Frame {
            kind: FrameKind::Root,
            emitted: false,
        }
    }
}

/// Array-backed stack of frames. The root frame always occupies slot 0.
#[derive(Debug)]
pub(crate) struct FrameStack<const N: usize> {
    frames: [Frame; N],
    top: usize,
}

impl<const N: usize> FrameStack<N> {
    pub fn new() -> Self {
        const { assert!(N > 0, "frame stack needs room for the root frame") };
        Self {
            frames: [Frame::root(); N],
            top: 0,
        }
    }

    /// Drops everything back to the root frame with a cleared emitted flag.
    pub fn reset(&mut self) {
        self.frames[0] = Frame::root();
        self.top = 0;
    }

    /// Number of frames above the root (open containers and pending keys).
    pub fn depth(&self) -> usize {
        self.top
    }

    /// Number of open containers above the root, ignoring pending keys.
    /// This is the nesting level pretty-printed indentation follows: it
    /// grows on container open and shrinks on container close only.
    pub fn container_depth(&self) -> usize {
        self.frames[..=self.top]
            .iter()
            .filter(|f| matches!(f.kind, FrameKind::Array | FrameKind::Object))
            .count()
    }

    pub fn at_root(&self) -> bool {
        self.top == 0
    }

    /// True while there is room for one more frame.
    pub fn has_capacity(&self) -> bool {
        self.top + 1 < N
    }

    pub fn top(&self) -> &Frame {
        &self.frames[self.top]
    }

    pub fn top_mut(&mut self) -> &mut Frame {
        &mut self.frames[self.top]
    }

    /// Pushes a fresh frame. Exceeding capacity is caller misuse, reported
    /// rather than silently truncated.
    pub fn push(&mut self, kind: FrameKind) -> Result<(), WriteError> {
        let next = self.top.checked_add(1).ok_or(WriteError::NestingTooDeep)?;
        if next >= N {
            return Err(WriteError::NestingTooDeep);
        }
        self.frames[next] = Frame {
            kind,
            emitted: false,
        };
        self.top = next;
        Ok(())
    }

    /// Pops the top frame. The root frame is never popped; at the root this
    /// returns None and the stack is left untouched.
    pub fn pop(&mut self) -> Option<Frame> {
        if self.top == 0 {
            return None;
        }
        let frame = self.frames[self.top];
        self.top -= 1;
        Some(frame)
    }
}
