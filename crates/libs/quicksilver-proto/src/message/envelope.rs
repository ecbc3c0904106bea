use crate::metadata::{MetadataBlock, METADATA_ENCODED_LEN};
use crate::wire::{WireReader, WireWriter};
use crate::ProtoError;

/// Encoded size of the base header: method, kind, five metadata fields.
pub const BASE_HEADER_LEN: usize = 4 + METADATA_ENCODED_LEN;

/// Identifies the handler operation invoked on each receiving node. Open
/// set: the constants below cover the built-in operations, applications
/// assign their own ids above them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MethodId(pub i16);

impl MethodId {
    pub const NOOP: MethodId = MethodId(0);
    pub const SET_ACTIVE: MethodId = MethodId(1);
    pub const INITIALIZE: MethodId = MethodId(2);
    pub const REFRESH: MethodId = MethodId(3);
    pub const SWITCH: MethodId = MethodId(4);
    pub const COMPLETE: MethodId = MethodId(5);

    pub fn as_i16(self) -> i16 {
        self.0
    }
}

impl From<i16> for MethodId {
    fn from(value: i16) -> Self {
        MethodId(value)
    }
}

/// Closed tag distinguishing payload variants. Carried in the base header so
/// decode knows which variant codec to hand the cursor to before reading
/// any payload bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    Signal = 0x0,
    Boolean = 0x1,
    Integer = 0x2,
    Float = 0x3,
    Text = 0x4,
    Blob = 0x5,
    ObjectRef = 0x6,
}

impl PayloadKind {
    pub fn as_i16(self) -> i16 {
        self as i16
    }
}

impl TryFrom<i16> for PayloadKind {
    type Error = ();

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            0x0 => Ok(PayloadKind::Signal),
            0x1 => Ok(PayloadKind::Boolean),
            0x2 => Ok(PayloadKind::Integer),
            0x3 => Ok(PayloadKind::Float),
            0x4 => Ok(PayloadKind::Text),
            0x5 => Ok(PayloadKind::Blob),
            0x6 => Ok(PayloadKind::ObjectRef),
            _ => Err(()),
        }
    }
}

/// Base unit of transmission: target operation, payload kind, routing
/// metadata. The kind is fixed at construction and must match the concrete
/// payload wrapped around this envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Envelope {
    pub method: MethodId,
    pub kind: PayloadKind,
    pub metadata: MetadataBlock,
}

impl Envelope {
    pub fn new(method: MethodId, kind: PayloadKind, metadata: MetadataBlock) -> Self {
        Self { method, kind, metadata }
    }

    /// Ambient default routing: [`MetadataBlock::new`].
    pub fn with_default_metadata(method: MethodId, kind: PayloadKind) -> Self {
        Self::new(method, kind, MetadataBlock::new())
    }

    /// Base header order: method, kind, then the metadata fields. Variant
    /// payload bytes follow whatever this appends.
    pub fn encode_onto(&self, writer: &mut WireWriter) {
        writer.put_i16(self.method.as_i16());
        writer.put_i16(self.kind.as_i16());
        self.metadata.encode_onto(writer);
    }

    /// Reads the base header and leaves the cursor at the first
    /// variant-owned byte; `reader.position()` is the handoff offset.
    pub fn decode_from(reader: &mut WireReader<'_>) -> Result<Self, ProtoError> {
        let method = MethodId(reader.read_i16()?);
        let raw_kind = reader.read_i16()?;
        let kind = PayloadKind::try_from(raw_kind)
            .map_err(|_| ProtoError::UnknownPayloadKind(raw_kind))?;
        let metadata = MetadataBlock::decode_from(reader)?;
        Ok(Self { method, kind, metadata })
    }
}
