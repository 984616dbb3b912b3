//! Utility types for binary serialization.
//!
//! Provides VarInt (compact size) encoding, the `ByteCursor` reader and
//! `ByteWriter` writer for the transaction wire format. Every cursor read
//! is bounds-checked: a read that would run past the end of the buffer
//! fails without consuming anything.

use crate::PrimitivesError;

// ---------------------------------------------------------------------------
// VarInt
// ---------------------------------------------------------------------------

/// A variable-length integer (compact size).
///
/// A leading byte below 0xfd is the value itself; 0xfd, 0xfe and 0xff
/// are followed by a 2, 4 or 8 byte little-endian value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VarInt(pub u64);

impl VarInt {
    /// Return the wire-format byte length of this VarInt.
    ///
    /// # Returns
    /// 1, 3, 5, or 9 depending on the value.
    pub fn length(&self) -> usize {
        if self.0 < 0xfd {
            1
        } else if self.0 <= 0xffff {
            3
        } else if self.0 <= 0xffff_ffff {
            5
        } else {
            9
        }
    }

    /// Encode the VarInt into a new byte vector.
    pub fn to_bytes(&self) -> Vec<u8> {
        let v = self.0;
        let mut buf = Vec::with_capacity(self.length());
        if v < 0xfd {
            buf.push(v as u8);
        } else if v <= 0xffff {
            buf.push(0xfd);
            buf.extend_from_slice(&(v as u16).to_le_bytes());
        } else if v <= 0xffff_ffff {
            buf.push(0xfe);
            buf.extend_from_slice(&(v as u32).to_le_bytes());
        } else {
            buf.push(0xff);
            buf.extend_from_slice(&v.to_le_bytes());
        }
        buf
    }

    /// Return the underlying u64 value.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for VarInt {
    fn from(v: u64) -> Self {
        VarInt(v)
    }
}

impl From<usize> for VarInt {
    fn from(v: usize) -> Self {
        VarInt(v as u64)
    }
}

// ---------------------------------------------------------------------------
// ByteCursor
// ---------------------------------------------------------------------------

/// A sequential, bounds-checked reader over an immutable byte buffer.
///
/// The read position never exceeds the buffer length. Separate cursors
/// share nothing, so independent buffers can be decoded in parallel.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    /// Create a new cursor positioned at the start of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        ByteCursor { data, pos: 0 }
    }

    /// Create a cursor positioned at `start`, clamped to the buffer length.
    pub fn with_position(data: &'a [u8], start: usize) -> Self {
        ByteCursor { data, pos: start.min(data.len()) }
    }

    /// Read `n` bytes and advance the position.
    ///
    /// # Arguments
    /// * `n` - Number of bytes to read.
    ///
    /// # Returns
    /// A byte slice of length `n`, or `Truncated` if fewer remain.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], PrimitivesError> {
        let available = self.remaining();
        if n > available {
            return Err(PrimitivesError::Truncated { needed: n, available });
        }
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    /// Read exactly `N` bytes into a fixed-size array.
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], PrimitivesError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N)?);
        Ok(out)
    }

    /// Read a single byte and advance the position.
    pub fn read_u8(&mut self) -> Result<u8, PrimitivesError> {
        Ok(self.read_array::<1>()?[0])
    }

    /// Read a little-endian u16.
    pub fn read_u16_le(&mut self) -> Result<u16, PrimitivesError> {
        Ok(u16::from_le_bytes(self.read_array()?))
    }

    /// Read a big-endian u16.
    pub fn read_u16_be(&mut self) -> Result<u16, PrimitivesError> {
        Ok(u16::from_be_bytes(self.read_array()?))
    }

    /// Read a little-endian u32.
    pub fn read_u32_le(&mut self) -> Result<u32, PrimitivesError> {
        Ok(u32::from_le_bytes(self.read_array()?))
    }

    /// Read a little-endian i32.
    pub fn read_i32_le(&mut self) -> Result<i32, PrimitivesError> {
        Ok(i32::from_le_bytes(self.read_array()?))
    }

    /// Read a little-endian u64.
    pub fn read_u64_le(&mut self) -> Result<u64, PrimitivesError> {
        Ok(u64::from_le_bytes(self.read_array()?))
    }

    /// Read a little-endian i64.
    pub fn read_i64_le(&mut self) -> Result<i64, PrimitivesError> {
        Ok(i64::from_le_bytes(self.read_array()?))
    }

    /// Read a VarInt and advance the position accordingly.
    ///
    /// If the prefix byte is present but its value bytes are not, the
    /// whole read fails and the cursor does not move.
    pub fn read_varint(&mut self) -> Result<VarInt, PrimitivesError> {
        let start = self.pos;
        let result = match self.read_u8()? {
            0xff => self.read_u64_le(),
            0xfe => self.read_u32_le().map(u64::from),
            0xfd => self.read_u16_le().map(u64::from),
            b => Ok(u64::from(b)),
        };
        match result {
            Ok(v) => Ok(VarInt(v)),
            Err(e) => {
                self.pos = start;
                Err(e)
            }
        }
    }

    /// Read a VarInt length followed by that many raw bytes.
    ///
    /// The cursor does not move if the payload is incomplete.
    pub fn read_var_bytes(&mut self) -> Result<&'a [u8], PrimitivesError> {
        let start = self.pos;
        let len = self.read_varint()?.value();
        let available = self.remaining();
        match usize::try_from(len) {
            Ok(n) if n <= available => self.read_bytes(n),
            _ => {
                self.pos = start;
                Err(PrimitivesError::Truncated {
                    needed: usize::try_from(len).unwrap_or(usize::MAX),
                    available,
                })
            }
        }
    }

    /// Return the current read position.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Return the number of bytes remaining.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Return the bytes between two positions previously reported by
    /// `position()`, e.g. the exact source range of a decoded record.
    pub fn slice(&self, start: usize, end: usize) -> &'a [u8] {
        &self.data[start.min(end)..end.min(self.data.len())]
    }

    /// Return the whole underlying buffer.
    pub fn buffer(&self) -> &'a [u8] {
        self.data
    }
}

// ---------------------------------------------------------------------------
// ByteWriter
// ---------------------------------------------------------------------------

/// A buffer-based writer for the transaction wire format.
#[derive(Debug, Clone, Default)]
pub struct ByteWriter {
    buf: Vec<u8>,
}

impl ByteWriter {
    /// Create a new empty writer.
    pub fn new() -> Self {
        ByteWriter { buf: Vec::new() }
    }

    /// Create a new writer with a pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        ByteWriter { buf: Vec::with_capacity(capacity) }
    }

    /// Append raw bytes.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Append a single byte.
    pub fn write_u8(&mut self, val: u8) {
        self.buf.push(val);
    }

    /// Append a little-endian u16.
    pub fn write_u16_le(&mut self, val: u16) {
        self.buf.extend_from_slice(&val.to_le_bytes());
    }

    /// Append a little-endian u32.
    pub fn write_u32_le(&mut self, val: u32) {
        self.buf.extend_from_slice(&val.to_le_bytes());
    }

    /// Append a little-endian i32.
    pub fn write_i32_le(&mut self, val: i32) {
        self.buf.extend_from_slice(&val.to_le_bytes());
    }

    /// Append a little-endian u64.
    pub fn write_u64_le(&mut self, val: u64) {
        self.buf.extend_from_slice(&val.to_le_bytes());
    }

    /// Append a little-endian i64.
    pub fn write_i64_le(&mut self, val: i64) {
        self.buf.extend_from_slice(&val.to_le_bytes());
    }

    /// Append a VarInt.
    pub fn write_varint(&mut self, varint: VarInt) {
        self.buf.extend_from_slice(&varint.to_bytes());
    }

    /// Append a VarInt length prefix followed by the bytes.
    pub fn write_var_bytes(&mut self, bytes: &[u8]) {
        self.write_varint(VarInt::from(bytes.len()));
        self.buf.extend_from_slice(bytes);
    }

    /// Consume the writer and return the accumulated bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// Return a reference to the current buffer contents.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Return the number of bytes written so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Check if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}
