// SPDX-License-Identifier: Apache-2.0

/// Error type for SliceWriteBuffer operations.
#[derive(Debug, PartialEq)]
pub enum Error {
    /// The buffer has no room for the requested write.
    BufferFull,
    /// Invalid slice bounds computed for a write.
    InvalidSliceBounds,
}

/// A buffer that manages destination bytes and the current write position.
/// This encapsulates the byte slice and cursor that are always used together.
#[derive(Debug)]
pub struct SliceWriteBuffer<'a> {
    data: &'a mut [u8],
    pos: usize,
}

impl<'a> SliceWriteBuffer<'a> {
    /// Creates a new SliceWriteBuffer over the given destination bytes.
    pub fn new(data: &'a mut [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn current_pos(&self) -> usize {
        self.pos
    }

    /// Bytes still available between the cursor and the end of the buffer.
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Checks that `len` content bytes fit while leaving room for the
    /// terminator byte written by `finish`.
    pub fn fits(&self, len: usize) -> bool {
        match len.checked_add(1) {
            Some(needed) => needed <= self.remaining(),
            None => false,
        }
    }

    /// Moves the cursor back to the start for a fresh session over the
    /// same bytes. Previously written content is left in place.
    pub fn rewind(&mut self) {
        self.pos = 0;
    }

    pub fn write_byte(&mut self, byte: u8) -> Result<(), Error> {
        let slot = self.data.get_mut(self.pos).ok_or(Error::BufferFull)?;
        *slot = byte;
        self.pos = self.pos.checked_add(1).ok_or(Error::InvalidSliceBounds)?;
        Ok(())
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Error> {
        let end = self
            .pos
            .checked_add(bytes.len())
            .ok_or(Error::InvalidSliceBounds)?;
        let dst = self.data.get_mut(self.pos..end).ok_or(Error::BufferFull)?;
        dst.copy_from_slice(bytes);
        self.pos = end;
        Ok(())
    }

    /// The written prefix of the buffer.
    pub fn written(&self) -> &[u8] {
        // pos never exceeds data.len(); both write paths are bounds-checked
        &self.data[..self.pos]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_boundary_behavior() {
        let mut data = [0u8; 3];
        let mut buffer = SliceWriteBuffer::new(&mut data);

        assert_eq!(buffer.current_pos(), 0);
        assert_eq!(buffer.remaining(), 3);
        assert_eq!(buffer.write_byte(b'a'), Ok(()));
        assert_eq!(buffer.write_byte(b'b'), Ok(()));
        assert_eq!(buffer.write_byte(b'c'), Ok(()));

        // Cursor at the end: no room left, further writes must fail
        assert_eq!(buffer.current_pos(), 3);
        assert_eq!(buffer.remaining(), 0);
        assert_eq!(buffer.write_byte(b'd'), Err(Error::BufferFull));

        // A failed write leaves the cursor where it was
        assert_eq!(buffer.current_pos(), 3);
        assert_eq!(buffer.written(), b"abc");
    }

    #[test]
    fn test_fits_reserves_terminator_byte() {
        let mut data = [0u8; 4];
        let buffer = SliceWriteBuffer::new(&mut data);

        // 3 content bytes + 1 terminator byte fill the buffer exactly
        assert!(buffer.fits(3));
        assert!(!buffer.fits(4));
        // Degenerate huge length must not overflow the arithmetic
        assert!(!buffer.fits(usize::MAX));
    }

    #[test]
    fn test_write_bytes_all_or_nothing() {
        let mut data = [0u8; 4];
        let mut buffer = SliceWriteBuffer::new(&mut data);

        assert_eq!(buffer.write_bytes(b"ab"), Ok(()));
        // A multi-byte write that does not fit writes nothing at all
        assert_eq!(buffer.write_bytes(b"cde"), Err(Error::BufferFull));
        assert_eq!(buffer.current_pos(), 2);
        assert_eq!(buffer.written(), b"ab");
    }

    #[test]
    fn test_rewind_restarts_session() {
        let mut data = [0u8; 4];
        let mut buffer = SliceWriteBuffer::new(&mut data);

        assert_eq!(buffer.write_bytes(b"abcd"), Ok(()));
        buffer.rewind();
        assert_eq!(buffer.current_pos(), 0);
        assert_eq!(buffer.remaining(), 4);
        assert_eq!(buffer.write_byte(b'x'), Ok(()));
        assert_eq!(buffer.written(), b"x");
    }
}
