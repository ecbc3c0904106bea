//! In-memory object registry: the host-side collaborator that maps
//! transport-stable identifiers (network view ids, local instance ids) to
//! live node handles, and back again during encode.

use std::collections::HashMap;

use qs_proto::resolve::{NodeHandle, ObjectResolver};

#[derive(Debug)]
struct Slot {
    generation: u32,
    live: bool,
    view_id: Option<i32>,
    instance_id: i32,
}

/// Registry over generational slots. Unregistering a node retires its slot,
/// so handles to it stop resolving; slots are not reused.
#[derive(Debug, Default)]
pub struct InMemoryRegistry {
    slots: Vec<Slot>,
    by_view: HashMap<i32, NodeHandle>,
    by_instance: HashMap<i32, NodeHandle>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a network-addressable node under both its view id and its
    /// local instance id.
    pub fn register_networked(&mut self, view_id: i32, instance_id: i32) -> NodeHandle {
        self.insert(Some(view_id), instance_id)
    }

    /// Registers a node reachable only inside this process.
    pub fn register_local(&mut self, instance_id: i32) -> NodeHandle {
        self.insert(None, instance_id)
    }

    fn insert(&mut self, view_id: Option<i32>, instance_id: i32) -> NodeHandle {
        let index = self.slots.len() as u32;
        self.slots.push(Slot { generation: 0, live: true, view_id, instance_id });
        let handle = NodeHandle { index, generation: 0 };
        if let Some(view_id) = view_id {
            self.by_view.insert(view_id, handle);
        }
        self.by_instance.insert(instance_id, handle);
        handle
    }

    /// Retires the node's slot. Returns false for a stale or unknown handle.
    pub fn unregister(&mut self, handle: NodeHandle) -> bool {
        match self.slots.get_mut(handle.index as usize) {
            Some(slot) if slot.live && slot.generation == handle.generation => {
                slot.live = false;
                slot.generation += 1;
                if let Some(view_id) = slot.view_id {
                    self.by_view.remove(&view_id);
                }
                self.by_instance.remove(&slot.instance_id);
                true
            }
            _ => {
                log::debug!("registry: unregister miss for {handle:?}");
                false
            }
        }
    }

    pub fn len(&self) -> usize {
        self.by_instance.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_instance.is_empty()
    }

    fn slot(&self, handle: NodeHandle) -> Option<&Slot> {
        self.slots
            .get(handle.index as usize)
            .filter(|slot| slot.live && slot.generation == handle.generation)
    }
}

impl ObjectResolver for InMemoryRegistry {
    fn resolve_network(&self, view_id: i32) -> Option<NodeHandle> {
        let found = self.by_view.get(&view_id).copied();
        if found.is_none() {
            log::debug!("registry: no node for network view id {view_id}");
        }
        found
    }

    fn resolve_local(&self, instance_id: i32) -> Option<NodeHandle> {
        let found = self.by_instance.get(&instance_id).copied();
        if found.is_none() {
            log::debug!("registry: no node for local instance id {instance_id}");
        }
        found
    }

    fn network_view_id(&self, node: NodeHandle) -> Option<i32> {
        self.slot(node)?.view_id
    }

    fn local_instance_id(&self, node: NodeHandle) -> Option<i32> {
        Some(self.slot(node)?.instance_id)
    }
}
