//! Object-reference resolution interfaces. A message holds a relation to a
//! scene node, never the node itself; the hosting environment supplies the
//! registry that turns transport-stable identifiers back into live handles.

/// Opaque handle to a live scene node, minted by the host's registry.
///
/// Generational: when a registry slot is retired its generation advances,
/// so handles to a removed node stop resolving instead of aliasing a newer
/// one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle {
    pub index: u32,
    pub generation: u32,
}

/// Resolver capability supplied by the hosting environment.
///
/// `resolve_*` translate wire identifiers to handles during decode; the id
/// accessors drive mode selection during encode. A `None` from either
/// `resolve_*` call is a valid miss, not an error.
pub trait ObjectResolver {
    fn resolve_network(&self, view_id: i32) -> Option<NodeHandle>;

    fn resolve_local(&self, instance_id: i32) -> Option<NodeHandle>;

    /// Network view id for a node, when it is network-addressable.
    fn network_view_id(&self, node: NodeHandle) -> Option<i32>;

    /// Process-local instance id, when the host knows the node at all.
    fn local_instance_id(&self, node: NodeHandle) -> Option<i32>;
}

/// Resolver for hosts with no object registry; every lookup misses.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullResolver;

impl ObjectResolver for NullResolver {
    fn resolve_network(&self, _view_id: i32) -> Option<NodeHandle> {
        None
    }

    fn resolve_local(&self, _instance_id: i32) -> Option<NodeHandle> {
        None
    }

    fn network_view_id(&self, _node: NodeHandle) -> Option<i32> {
        None
    }

    fn local_instance_id(&self, _node: NodeHandle) -> Option<i32> {
        None
    }
}
