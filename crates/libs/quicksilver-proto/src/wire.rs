//! Flat binary wire codec. A message is an ordered sequence of primitive
//! fields with no per-field type tags; every multi-byte field is big-endian.
//! Variable-length fields (`put_bytes`/`read_bytes`) carry a u16 length
//! prefix; everything else is fixed width.
//!
//! Encoding is strictly append-only and order-preserving: decode reads
//! fields in the exact order they were appended, and the reader's position
//! is the handoff point between the base envelope codec and each payload
//! variant's own codec.

use crate::ProtoError;

/// Append-only sink for encoding.
#[derive(Debug, Default)]
pub struct WireWriter {
    buf: Vec<u8>,
}

impl WireWriter {
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { buf: Vec::with_capacity(capacity) }
    }

    pub fn put_i16(&mut self, value: i16) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    pub fn put_i32(&mut self, value: i32) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    pub fn put_f32(&mut self, value: f32) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    pub fn put_u8(&mut self, value: u8) {
        self.buf.push(value);
    }

    pub fn put_bool(&mut self, value: bool) {
        self.buf.push(u8::from(value));
    }

    /// u16 length prefix followed by the raw bytes.
    pub fn put_bytes(&mut self, bytes: &[u8]) -> Result<(), ProtoError> {
        let len = u16::try_from(bytes.len()).map_err(|_| {
            ProtoError::Encode(format!(
                "field of {} bytes exceeds the u16 length prefix",
                bytes.len()
            ))
        })?;
        self.buf.extend_from_slice(&len.to_be_bytes());
        self.buf.extend_from_slice(bytes);
        Ok(())
    }

    pub fn put_str(&mut self, value: &str) -> Result<(), ProtoError> {
        self.put_bytes(value.as_bytes())
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

/// Checked cursor over an encoded message. Every read advances the position
/// and fails with [`ProtoError::TruncatedMessage`] if the input ends early.
#[derive(Debug)]
pub struct WireReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> WireReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Offset of the next unread byte.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    fn take(&mut self, count: usize) -> Result<&'a [u8], ProtoError> {
        if self.remaining() < count {
            return Err(ProtoError::TruncatedMessage {
                needed: count,
                remaining: self.remaining(),
            });
        }
        let slice = &self.data[self.pos..self.pos + count];
        self.pos += count;
        Ok(slice)
    }

    pub fn read_i16(&mut self) -> Result<i16, ProtoError> {
        let bytes = self.take(2)?;
        Ok(i16::from_be_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_i32(&mut self) -> Result<i32, ProtoError> {
        let bytes = self.take(4)?;
        Ok(i32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn read_f32(&mut self) -> Result<f32, ProtoError> {
        let bytes = self.take(4)?;
        Ok(f32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn read_u8(&mut self) -> Result<u8, ProtoError> {
        Ok(self.take(1)?[0])
    }

    /// Any nonzero byte reads as true.
    pub fn read_bool(&mut self) -> Result<bool, ProtoError> {
        Ok(self.read_u8()? != 0)
    }

    pub fn read_bytes(&mut self) -> Result<&'a [u8], ProtoError> {
        let len_bytes = self.take(2)?;
        let len = usize::from(u16::from_be_bytes([len_bytes[0], len_bytes[1]]));
        self.take(len)
    }

    pub fn read_string(&mut self) -> Result<String, ProtoError> {
        let bytes = self.read_bytes()?;
        String::from_utf8(bytes.to_vec())
            .map_err(|_| ProtoError::Decode("text field is not valid utf-8".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitives_roundtrip_in_order() {
        let mut writer = WireWriter::new();
        writer.put_i16(-7);
        writer.put_i32(1_000_000);
        writer.put_f32(2.5);
        writer.put_bool(true);
        writer.put_bytes(b"abc").unwrap();
        let bytes = writer.into_bytes();

        let mut reader = WireReader::new(&bytes);
        assert_eq!(reader.read_i16().unwrap(), -7);
        assert_eq!(reader.read_i32().unwrap(), 1_000_000);
        assert_eq!(reader.read_f32().unwrap(), 2.5);
        assert!(reader.read_bool().unwrap());
        assert_eq!(reader.read_bytes().unwrap(), b"abc");
        assert!(reader.is_empty());
    }

    #[test]
    fn short_read_reports_truncation() {
        let mut reader = WireReader::new(&[0x00]);
        let err = reader.read_i16().unwrap_err();
        assert_eq!(err, ProtoError::TruncatedMessage { needed: 2, remaining: 1 });
    }

    #[test]
    fn position_tracks_reads() {
        let bytes = [0u8; 6];
        let mut reader = WireReader::new(&bytes);
        reader.read_i16().unwrap();
        assert_eq!(reader.position(), 2);
        reader.read_i32().unwrap();
        assert_eq!(reader.position(), 6);
    }
}
