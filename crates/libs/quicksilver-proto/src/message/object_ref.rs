use crate::message::{Envelope, MethodId, PayloadKind};
use crate::metadata::MetadataBlock;
use crate::resolve::{NodeHandle, ObjectResolver};
use crate::wire::{WireReader, WireWriter};
use crate::ProtoError;

/// How a node reference travels over the wire. A local instance id is
/// meaningless across a network boundary, so the network view id wins
/// whenever the host exposes one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionMode {
    Networked { view_id: i32 },
    Local { instance_id: i32 },
}

/// A message-held relation to a scene node. The message never owns the
/// node; the receiving side re-resolves the identifier against its own
/// registry, and `Unresolved` is the valid outcome of a lookup miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectRef {
    Resolved(NodeHandle),
    Unresolved,
}

impl ObjectRef {
    pub fn handle(self) -> Option<NodeHandle> {
        match self {
            ObjectRef::Resolved(handle) => Some(handle),
            ObjectRef::Unresolved => None,
        }
    }

    pub fn is_resolved(self) -> bool {
        matches!(self, ObjectRef::Resolved(_))
    }
}

/// Object-reference payload variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectRefMessage {
    pub envelope: Envelope,
    pub value: ObjectRef,
}

impl ObjectRefMessage {
    pub fn new(handle: NodeHandle, method: MethodId, metadata: Option<MetadataBlock>) -> Self {
        Self {
            envelope: Envelope::new(method, PayloadKind::ObjectRef, metadata.unwrap_or_default()),
            value: ObjectRef::Resolved(handle),
        }
    }

    /// Picks the wire mode for the held reference. Encoding an unresolved
    /// reference, or a handle the host knows neither way, is a precondition
    /// violation.
    pub fn resolution_mode(
        &self,
        resolver: &dyn ObjectResolver,
    ) -> Result<ResolutionMode, ProtoError> {
        let Some(handle) = self.value.handle() else {
            return Err(ProtoError::NullPayload);
        };
        if let Some(view_id) = resolver.network_view_id(handle) {
            return Ok(ResolutionMode::Networked { view_id });
        }
        match resolver.local_instance_id(handle) {
            Some(instance_id) => Ok(ResolutionMode::Local { instance_id }),
            None => Err(ProtoError::NullPayload),
        }
    }

    /// Body layout after the base header: mode flag, then one id.
    pub(crate) fn encode_body(
        &self,
        writer: &mut WireWriter,
        resolver: &dyn ObjectResolver,
    ) -> Result<(), ProtoError> {
        match self.resolution_mode(resolver)? {
            ResolutionMode::Networked { view_id } => {
                writer.put_bool(true);
                writer.put_i32(view_id);
            }
            ResolutionMode::Local { instance_id } => {
                writer.put_bool(false);
                writer.put_i32(instance_id);
            }
        }
        Ok(())
    }

    pub(crate) fn decode_body(
        envelope: Envelope,
        reader: &mut WireReader<'_>,
        resolver: &dyn ObjectResolver,
    ) -> Result<Self, ProtoError> {
        let networked = reader.read_bool()?;
        let id = reader.read_i32()?;
        let resolved = if networked {
            resolver.resolve_network(id)
        } else {
            resolver.resolve_local(id)
        };
        let value = resolved.map(ObjectRef::Resolved).unwrap_or(ObjectRef::Unresolved);
        Ok(Self { envelope, value })
    }
}
