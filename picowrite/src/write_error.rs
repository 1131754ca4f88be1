// SPDX-License-Identifier: Apache-2.0

/// Errors that can occur while writing JSON.
///
/// Two classes share this enum. [`WriteError::BufferFull`] is a
/// recoverable runtime condition: the caller under-sized the destination
/// buffer and can retry with a larger one. Every other variant is a
/// structural contract violation, a programming error by the caller that
/// the writer does not attempt to repair.
#[derive(Debug, PartialEq)]
pub enum WriteError {
    /// The destination buffer has no room for the next write.
    BufferFull,
    /// Containers and keys nested deeper than the stack capacity.
    NestingTooDeep,
    /// A value was written directly inside an object without a preceding key.
    KeyExpected,
    /// A key was written outside an object, or directly after another key.
    KeyOutsideObject,
    /// `close` was called with no container open.
    NoOpenContainer,
    /// A key was still waiting for its value.
    DanglingKey,
    /// `finish` was called with containers still open.
    UnclosedContainer,
    /// `finish` was called before any top-level value was written.
    EmptyDocument,
    /// A second top-level value was written in the same session.
    RootAlreadyWritten,
    /// The global writer was used before `global::init`.
    NotInitialized,
    /// The writer entered an unexpected internal state.
    UnexpectedState(&'static str),
}

impl WriteError {
    /// True for caller misuse of the structural contract. False only for
    /// [`WriteError::BufferFull`], the out-of-space condition a caller may
    /// legitimately hit at runtime and recover from.
    pub fn is_contract_violation(&self) -> bool {
        !matches!(self, WriteError::BufferFull)
    }
}

impl core::fmt::Display for WriteError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            WriteError::BufferFull => write!(f, "Destination buffer full"),
            WriteError::NestingTooDeep => write!(f, "Nesting exceeds stack capacity"),
            WriteError::KeyExpected => write!(f, "Object member written without a key"),
            WriteError::KeyOutsideObject => write!(f, "Key written outside an object"),
            WriteError::NoOpenContainer => write!(f, "Close with no open container"),
            WriteError::DanglingKey => write!(f, "Key without a value"),
            WriteError::UnclosedContainer => write!(f, "Finish with unclosed containers"),
            WriteError::EmptyDocument => write!(f, "Finish without a document"),
            WriteError::RootAlreadyWritten => write!(f, "Multiple top-level values"),
            WriteError::NotInitialized => write!(f, "Global writer not initialized"),
            WriteError::UnexpectedState(msg) => write!(f, "Unexpected state: {msg}"),
        }
    }
}
