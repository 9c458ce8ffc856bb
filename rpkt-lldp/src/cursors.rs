use bytes::Buf;

/// A read cursor over a borrowed byte buffer.
///
/// Unlike `&[u8]` as a `Buf`, the cursor remembers the whole buffer, so the
/// slices it hands out keep the lifetime of the input and the current offset
/// is always available for error reporting.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Start at the first byte of `buf`.
    #[inline]
    pub fn new(buf: &'a [u8]) -> Self {
        Cursor { buf, pos: 0 }
    }

    /// The complete underlying buffer, including the consumed part.
    #[inline]
    pub fn buf(&self) -> &'a [u8] {
        self.buf
    }

    /// The unconsumed part, with the lifetime of the underlying buffer.
    #[inline]
    pub fn chunk_shared_lifetime(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }

    /// Number of bytes consumed so far.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.pos
    }

    /// Split off the next `cnt` bytes, or return `None` without moving if
    /// fewer than `cnt` bytes remain.
    #[inline]
    pub fn take_slice(&mut self, cnt: usize) -> Option<&'a [u8]> {
        let taken = self.buf.get(self.pos..self.pos.checked_add(cnt)?)?;
        self.pos += cnt;
        Some(taken)
    }
}

impl<'a> Buf for Cursor<'a> {
    #[inline]
    fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    #[inline]
    fn chunk(&self) -> &[u8] {
        &self.buf[self.pos..]
    }

    #[inline]
    fn advance(&mut self, cnt: usize) {
        assert!(cnt <= self.remaining());
        self.pos += cnt;
    }
}
