mod envelope;
mod object_ref;
mod payload;

pub use envelope::{Envelope, MethodId, PayloadKind, BASE_HEADER_LEN};
pub use object_ref::{ObjectRef, ObjectRefMessage, ResolutionMode};
pub use payload::{BlobMessage, BoolMessage, FloatMessage, IntMessage, TextMessage};

use sha2::{Digest, Sha256};

use crate::metadata::MetadataBlock;
use crate::resolve::ObjectResolver;
use crate::wire::{WireReader, WireWriter};
use crate::ProtoError;

/// A routable message: the base envelope plus one typed payload.
///
/// Duplicating a message copies the envelope and any scalar payload by
/// value; an object-reference payload duplicates the handle, never the
/// referenced node.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Bare envelope, no payload body.
    Signal(Envelope),
    Boolean(BoolMessage),
    Integer(IntMessage),
    Float(FloatMessage),
    Text(TextMessage),
    Blob(BlobMessage),
    ObjectRef(ObjectRefMessage),
}

impl Message {
    pub fn signal(method: MethodId, metadata: Option<MetadataBlock>) -> Self {
        Message::Signal(Envelope::new(
            method,
            PayloadKind::Signal,
            metadata.unwrap_or_default(),
        ))
    }

    pub fn envelope(&self) -> &Envelope {
        match self {
            Message::Signal(envelope) => envelope,
            Message::Boolean(message) => &message.envelope,
            Message::Integer(message) => &message.envelope,
            Message::Float(message) => &message.envelope,
            Message::Text(message) => &message.envelope,
            Message::Blob(message) => &message.envelope,
            Message::ObjectRef(message) => &message.envelope,
        }
    }

    pub fn metadata(&self) -> &MetadataBlock {
        &self.envelope().metadata
    }

    pub fn method(&self) -> MethodId {
        self.envelope().method
    }

    pub fn kind(&self) -> PayloadKind {
        self.envelope().kind
    }

    /// One flat buffer: base header, then the variant body. The resolver is
    /// consulted only for an object-reference payload.
    pub fn encode(&self, resolver: &dyn ObjectResolver) -> Result<Vec<u8>, ProtoError> {
        let mut writer = WireWriter::with_capacity(BASE_HEADER_LEN + 8);
        self.envelope().encode_onto(&mut writer);
        match self {
            Message::Signal(_) => {}
            Message::Boolean(message) => writer.put_bool(message.value),
            Message::Integer(message) => writer.put_i32(message.value),
            Message::Float(message) => writer.put_f32(message.value),
            Message::Text(message) => writer.put_str(&message.value)?,
            Message::Blob(message) => writer.put_bytes(&message.value)?,
            Message::ObjectRef(message) => message.encode_body(&mut writer, resolver)?,
        }
        Ok(writer.into_bytes())
    }

    /// Decodes one message and returns it with the next-read position, so a
    /// buffer of concatenated messages parses in sequence. The base header
    /// is read first; the payload kind then selects the variant codec that
    /// resumes at the handed-off cursor.
    pub fn decode(
        bytes: &[u8],
        resolver: &dyn ObjectResolver,
    ) -> Result<(Message, usize), ProtoError> {
        let mut reader = WireReader::new(bytes);
        let envelope = Envelope::decode_from(&mut reader)?;
        let message = match envelope.kind {
            PayloadKind::Signal => Message::Signal(envelope),
            PayloadKind::Boolean => {
                Message::Boolean(BoolMessage { envelope, value: reader.read_bool()? })
            }
            PayloadKind::Integer => {
                Message::Integer(IntMessage { envelope, value: reader.read_i32()? })
            }
            PayloadKind::Float => {
                Message::Float(FloatMessage { envelope, value: reader.read_f32()? })
            }
            PayloadKind::Text => {
                Message::Text(TextMessage { envelope, value: reader.read_string()? })
            }
            PayloadKind::Blob => {
                Message::Blob(BlobMessage { envelope, value: reader.read_bytes()?.to_vec() })
            }
            PayloadKind::ObjectRef => Message::ObjectRef(ObjectRefMessage::decode_body(
                envelope,
                &mut reader,
                resolver,
            )?),
        };
        Ok((message, reader.position()))
    }

    /// SHA-256 over the encoded bytes; stable for a given message and
    /// registry state. Used for replay and dedup bookkeeping.
    pub fn digest(&self, resolver: &dyn ObjectResolver) -> Result<[u8; 32], ProtoError> {
        let bytes = self.encode(resolver)?;
        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        let mut digest = [0u8; 32];
        digest.copy_from_slice(&hasher.finalize());
        Ok(digest)
    }

    pub fn digest_hex(&self, resolver: &dyn ObjectResolver) -> Result<String, ProtoError> {
        Ok(hex::encode(self.digest(resolver)?))
    }
}
