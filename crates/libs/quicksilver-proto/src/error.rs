use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtoError {
    /// Metadata field count or range violation.
    #[error("malformed metadata: {0}")]
    MalformedMetadata(String),
    /// Byte sequence ended before all mandatory fields were read.
    #[error("truncated message: needed {needed} more byte(s), {remaining} remaining")]
    TruncatedMessage { needed: usize, remaining: usize },
    /// Payload kind tag with no registered decoder.
    #[error("unknown payload kind {0}")]
    UnknownPayloadKind(i16),
    /// Attempt to encode an object-reference payload whose reference the host
    /// cannot identify.
    #[error("object reference payload is unresolved")]
    NullPayload,
    #[error("decode error: {0}")]
    Decode(String),
    #[error("encode error: {0}")]
    Encode(String),
}
