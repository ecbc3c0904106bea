//! Storage forms for encoded messages: a framed byte form for disk or a
//! store-and-forward queue, and a msgpack record carrying delivery
//! bookkeeping alongside the raw wire bytes.

use serde::{Deserialize, Serialize};
use serde_bytes::ByteBuf;

use crate::ProtoError;

pub const FRAME_MAGIC: &[u8; 6] = b"QSMSG\0";
pub const FRAME_VERSION: u8 = 1;
const FRAME_FLAG_NETWORK_ORIGIN: u8 = 0x01;
const FRAME_HEADER_LEN: usize = FRAME_MAGIC.len() + 2;

/// Wraps encoded message bytes with magic, version, and flags.
pub fn pack_framed(wire: &[u8], network_origin: bool) -> Vec<u8> {
    let mut out = Vec::with_capacity(FRAME_HEADER_LEN + wire.len());
    out.extend_from_slice(FRAME_MAGIC);
    out.push(FRAME_VERSION);
    let mut flags = 0u8;
    if network_origin {
        flags |= FRAME_FLAG_NETWORK_ORIGIN;
    }
    out.push(flags);
    out.extend_from_slice(wire);
    out
}

/// Inverse of [`pack_framed`]: returns the wire bytes and the
/// network-origin flag.
pub fn unpack_framed(bytes: &[u8]) -> Result<(&[u8], bool), ProtoError> {
    if bytes.len() < FRAME_HEADER_LEN {
        return Err(ProtoError::Decode("framed message too short".into()));
    }
    if !bytes.starts_with(FRAME_MAGIC) {
        return Err(ProtoError::Decode("bad frame magic".into()));
    }
    let version = bytes[FRAME_MAGIC.len()];
    if version != FRAME_VERSION {
        return Err(ProtoError::Decode(format!("unsupported frame version {version}")));
    }
    let flags = bytes[FRAME_MAGIC.len() + 1];
    Ok((&bytes[FRAME_HEADER_LEN..], flags & FRAME_FLAG_NETWORK_ORIGIN != 0))
}

/// Delivery bookkeeping state for a stored message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryState {
    Queued = 0x00,
    Sent = 0x01,
    Delivered = 0x02,
    Failed = 0xFF,
}

impl DeliveryState {
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for DeliveryState {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x00 => Ok(DeliveryState::Queued),
            0x01 => Ok(DeliveryState::Sent),
            0x02 => Ok(DeliveryState::Delivered),
            0xFF => Ok(DeliveryState::Failed),
            _ => Err(()),
        }
    }
}

/// Stored message record: raw wire bytes plus delivery bookkeeping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageRecord {
    pub state: u8,
    pub wire_bytes: ByteBuf,
    pub network_origin: bool,
    pub method: i16,
}

impl MessageRecord {
    pub fn from_msgpack(bytes: &[u8]) -> Result<Self, ProtoError> {
        rmp_serde::from_slice(bytes).map_err(|e| ProtoError::Decode(e.to_string()))
    }

    pub fn to_msgpack(&self) -> Result<Vec<u8>, ProtoError> {
        let mut out = Vec::new();
        let mut serializer = rmp_serde::Serializer::new(&mut out).with_struct_map();
        self.serialize(&mut serializer).map_err(|e| ProtoError::Encode(e.to_string()))?;
        Ok(out)
    }

    pub fn state_enum(&self) -> Result<DeliveryState, ProtoError> {
        DeliveryState::try_from(self.state)
            .map_err(|_| ProtoError::Decode("unknown delivery state".into()))
    }
}
