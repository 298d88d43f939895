//! Arena-backed doubly-linked list.

use std::fmt;
use std::iter::FusedIterator;

use crate::ListError;

/// Stable identity of a value stored in an [`OrderedList`].
///
/// Ids are handed out in allocation order and never reused, so two ids are
/// equal exactly when they denote the same node.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    /// Create a `NodeId` from a raw index.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        NodeId(raw)
    }

    /// Get the raw `u32` value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Get the index into the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

// Compile-time assertion: NodeId is exactly 4 bytes.
const _: () = assert!(size_of::<NodeId>() == 4);

#[derive(Copy, Clone, Debug)]
struct Links {
    prev: Option<NodeId>,
    next: Option<NodeId>,
}

#[derive(Clone)]
struct Slot<T> {
    value: T,
    /// `None` while the node is detached.
    links: Option<Links>,
}

/// An ordered collection of distinct nodes with O(1) neighbour access.
///
/// The list owns every value it has ever allocated. Membership is tracked
/// per node; see the crate docs for the linked/detached distinction.
#[derive(Clone)]
pub struct OrderedList<T> {
    slots: Vec<Slot<T>>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
}

impl<T> Default for OrderedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> OrderedList<T> {
    /// Create an empty list.
    pub const fn new() -> Self {
        OrderedList {
            slots: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Create an empty list with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        OrderedList {
            slots: Vec::with_capacity(capacity),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Allocate a detached node holding `value`.
    ///
    /// # Panics
    /// Panics if more than `u32::MAX` nodes have been allocated.
    pub fn alloc(&mut self, value: T) -> NodeId {
        let raw = u32::try_from(self.slots.len())
            .unwrap_or_else(|_| panic!("OrderedList exceeded {} nodes", u32::MAX));
        self.slots.push(Slot { value, links: None });
        NodeId(raw)
    }

    /// Allocate a node and append it to the end of the list.
    pub fn push(&mut self, value: T) -> NodeId {
        let id = self.alloc(value);
        self.link(id, self.tail, None);
        id
    }

    /// Append a detached node to the end of the list.
    pub fn add(&mut self, id: NodeId) -> Result<(), ListError> {
        self.check_detached(id)?;
        self.link(id, self.tail, None);
        Ok(())
    }

    /// Link a detached node immediately before `existing`.
    pub fn insert_before(&mut self, id: NodeId, existing: NodeId) -> Result<(), ListError> {
        self.check_detached(id)?;
        let links = self.check_linked(existing)?;
        self.link(id, links.prev, Some(existing));
        Ok(())
    }

    /// Link a detached node immediately after `existing`.
    pub fn insert_after(&mut self, id: NodeId, existing: NodeId) -> Result<(), ListError> {
        self.check_detached(id)?;
        let links = self.check_linked(existing)?;
        self.link(id, Some(existing), links.next);
        Ok(())
    }

    /// Unlink a member node. The node stays allocated and may be re-added.
    pub fn delete(&mut self, id: NodeId) -> Result<(), ListError> {
        let links = self.check_linked(id)?;

        match links.prev {
            Some(prev) => self.links_mut(prev).next = links.next,
            None => self.head = links.next,
        }
        match links.next {
            Some(next) => self.links_mut(next).prev = links.prev,
            None => self.tail = links.prev,
        }

        self.slots[id.index()].links = None;
        self.len -= 1;
        Ok(())
    }

    /// Whether `id` is currently a member.
    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        self.links(id).is_some()
    }

    /// Value of an allocated node, member or not.
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.slots.get(id.index()).map(|slot| &slot.value)
    }

    /// Mutable value of an allocated node, member or not.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.slots.get_mut(id.index()).map(|slot| &mut slot.value)
    }

    #[inline]
    pub fn first(&self) -> Option<NodeId> {
        self.head
    }

    #[inline]
    pub fn last(&self) -> Option<NodeId> {
        self.tail
    }

    /// Successor of a member node. `None` at the end or for non-members.
    #[inline]
    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        self.links(id).and_then(|links| links.next)
    }

    /// Predecessor of a member node. `None` at the start or for non-members.
    #[inline]
    pub fn previous(&self, id: NodeId) -> Option<NodeId> {
        self.links(id).and_then(|links| links.prev)
    }

    /// First node after `from` whose value satisfies `predicate`.
    pub fn find_next(&self, from: NodeId, mut predicate: impl FnMut(&T) -> bool) -> Option<NodeId> {
        let mut cursor = self.next(from);
        while let Some(id) = cursor {
            if predicate(&self.slots[id.index()].value) {
                return Some(id);
            }
            cursor = self.next(id);
        }
        None
    }

    /// Nearest node before `from` whose value satisfies `predicate`.
    pub fn find_previous(
        &self,
        from: NodeId,
        mut predicate: impl FnMut(&T) -> bool,
    ) -> Option<NodeId> {
        let mut cursor = self.previous(from);
        while let Some(id) = cursor {
            if predicate(&self.slots[id.index()].value) {
                return Some(id);
            }
            cursor = self.previous(id);
        }
        None
    }

    /// Number of member nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate member nodes in list order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    /// Ids of member nodes in list order.
    pub fn ids(&self) -> impl DoubleEndedIterator<Item = NodeId> + '_ {
        self.iter().map(|(id, _)| id)
    }

    fn links(&self, id: NodeId) -> Option<Links> {
        self.slots.get(id.index()).and_then(|slot| slot.links)
    }

    /// Links of a node already known to be a member.
    fn links_mut(&mut self, id: NodeId) -> &mut Links {
        match &mut self.slots[id.index()].links {
            Some(links) => links,
            None => unreachable!("neighbour {id:?} of a member node is detached"),
        }
    }

    fn check_detached(&self, id: NodeId) -> Result<(), ListError> {
        match self.slots.get(id.index()) {
            None => Err(ListError::UnknownNode(id)),
            Some(Slot { links: Some(_), .. }) => Err(ListError::AlreadyLinked(id)),
            Some(Slot { links: None, .. }) => Ok(()),
        }
    }

    fn check_linked(&self, id: NodeId) -> Result<Links, ListError> {
        match self.slots.get(id.index()) {
            None => Err(ListError::UnknownNode(id)),
            Some(Slot { links: None, .. }) => Err(ListError::NotLinked(id)),
            Some(Slot {
                links: Some(links), ..
            }) => Ok(*links),
        }
    }

    /// Link a detached node between `prev` and `next`, which must be adjacent.
    fn link(&mut self, id: NodeId, prev: Option<NodeId>, next: Option<NodeId>) {
        match prev {
            Some(prev) => self.links_mut(prev).next = Some(id),
            None => self.head = Some(id),
        }
        match next {
            Some(next) => self.links_mut(next).prev = Some(id),
            None => self.tail = Some(id),
        }
        self.slots[id.index()].links = Some(Links { prev, next });
        self.len += 1;
    }
}

impl<T: fmt::Debug> fmt::Debug for OrderedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Iterator over `(id, value)` pairs of an [`OrderedList`] in list order.
pub struct Iter<'a, T> {
    list: &'a OrderedList<T>,
    front: Option<NodeId>,
    back: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (NodeId, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.front?;
        self.front = self.list.next(id);
        self.remaining -= 1;
        Some((id, &self.list.slots[id.index()].value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.back?;
        self.back = self.list.previous(id);
        self.remaining -= 1;
        Some((id, &self.list.slots[id.index()].value))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a OrderedList<T> {
    type Item = (NodeId, &'a T);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
