//! Scalar payload variants. Each embeds the base envelope with its kind
//! fixed at construction; `metadata: None` takes the ambient default block.

use crate::message::{Envelope, MethodId, PayloadKind};
use crate::metadata::MetadataBlock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoolMessage {
    pub envelope: Envelope,
    pub value: bool,
}

impl BoolMessage {
    pub fn new(value: bool, method: MethodId, metadata: Option<MetadataBlock>) -> Self {
        Self {
            envelope: Envelope::new(method, PayloadKind::Boolean, metadata.unwrap_or_default()),
            value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntMessage {
    pub envelope: Envelope,
    pub value: i32,
}

impl IntMessage {
    pub fn new(value: i32, method: MethodId, metadata: Option<MetadataBlock>) -> Self {
        Self {
            envelope: Envelope::new(method, PayloadKind::Integer, metadata.unwrap_or_default()),
            value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatMessage {
    pub envelope: Envelope,
    pub value: f32,
}

impl FloatMessage {
    pub fn new(value: f32, method: MethodId, metadata: Option<MetadataBlock>) -> Self {
        Self {
            envelope: Envelope::new(method, PayloadKind::Float, metadata.unwrap_or_default()),
            value,
        }
    }
}

/// UTF-8 text payload, u16 length prefix on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextMessage {
    pub envelope: Envelope,
    pub value: String,
}

impl TextMessage {
    pub fn new(
        value: impl Into<String>,
        method: MethodId,
        metadata: Option<MetadataBlock>,
    ) -> Self {
        Self {
            envelope: Envelope::new(method, PayloadKind::Text, metadata.unwrap_or_default()),
            value: value.into(),
        }
    }
}

/// Raw byte payload, u16 length prefix on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobMessage {
    pub envelope: Envelope,
    pub value: Vec<u8>,
}

impl BlobMessage {
    pub fn new(value: Vec<u8>, method: MethodId, metadata: Option<MetadataBlock>) -> Self {
        Self {
            envelope: Envelope::new(method, PayloadKind::Blob, metadata.unwrap_or_default()),
            value,
        }
    }
}
