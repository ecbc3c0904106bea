mod error;

pub mod container;
pub mod filter;
pub mod message;
pub mod metadata;
pub mod resolve;
pub mod wire;

pub use error::ProtoError;
pub use message::{Envelope, Message, MethodId, PayloadKind};
pub use metadata::MetadataBlock;
