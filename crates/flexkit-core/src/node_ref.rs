// crates/flexkit-core/src/node_ref.rs
//
// External reference handle. Components forward it untouched to the node
// they produce; the host renderer binds the mounted element's id into the
// shared slot for imperative access.

use std::cell::RefCell;
use std::rc::Rc;

pub type ElementId = u32;

#[derive(Debug, Clone, Default)]
pub struct NodeRef {
    slot: Rc<RefCell<Option<ElementId>>>,
}

impl NodeRef {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind the mounted element's id. Called by the host renderer, not by
    /// components.
    pub fn bind(&self, id: ElementId) {
        *self.slot.borrow_mut() = Some(id);
    }

    pub fn get(&self) -> Option<ElementId> {
        *self.slot.borrow()
    }

    pub fn is_bound(&self) -> bool {
        self.slot.borrow().is_some()
    }

    /// True when both handles share one underlying slot (clones of the same
    /// ref), regardless of the bound value.
    pub fn same_slot(&self, other: &NodeRef) -> bool {
        Rc::ptr_eq(&self.slot, &other.slot)
    }
}
