//! Internal representation and memory management of queued values.

use slab::Slab;

/// Index to a node in the node arena.
#[derive(Debug, Clone, PartialEq, Eq, Copy)]
pub(crate) struct NodeKey(usize);

impl From<usize> for NodeKey {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

impl NodeKey {
    /// "Dereferences" this index in an arena.
    ///
    /// Basically flips the arguments of [`Arena::get()`], but since this is in postfix, it's
    /// useful for chaining a series of operations.
    #[inline(always)]
    pub(crate) fn as_ref<T>(self, arena: &Arena<T>) -> &Node<T> {
        arena.get(self)
    }

    /// Unwrap the underlying index type.
    fn key(&self) -> usize {
        self.0
    }
}

/// A node of the circular linked list.
///
/// Only the base node has no value.
#[derive(Debug)]
pub(crate) struct Node<T> {
    /// Pointer to the next node in the linked list.
    next: NodeKey,

    /// Pointer to the previous node in the linked list.
    prev: NodeKey,

    value: Option<T>,
}

impl<T> Node<T> {
    pub(crate) fn next(&self) -> NodeKey {
        self.next
    }

    pub(crate) fn prev(&self) -> NodeKey {
        self.prev
    }

    pub(crate) fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }
}

/// Arena of list nodes, linked in a circle through a base node.
///
/// The node after the base is the front of the list and the node before it is the back, so an
/// empty list is just the base pointing at itself.
#[derive(Debug)]
pub(crate) struct Arena<T> {
    /// Internal store of nodes, indexed by [`NodeKey`].
    nodes: Slab<Node<T>>,

    /// Key to the base node, which is never removed (unless the arena is dropped).
    base: NodeKey,
}

impl<T> Arena<T> {
    /// Construct a new arena with room for `capacity` values besides the base node.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Slab::with_capacity(capacity.saturating_add(1));
        let base_key = nodes.vacant_key().into();
        let base = nodes
            .insert(Node {
                next: base_key,
                prev: base_key,
                value: None,
            })
            .into();

        debug_assert_eq!(base_key, base);

        Self { nodes, base }
    }

    /// Get the base node of the arena.
    pub(crate) fn base(&self) -> NodeKey {
        self.base
    }

    /// Key of the first node holding a value, or the base if the list is empty.
    pub(crate) fn front(&self) -> NodeKey {
        self.base.as_ref(self).next()
    }

    /// Retrieve a reference to a node using a key.
    pub(crate) fn get(&self, key: NodeKey) -> &Node<T> {
        &self.nodes[key.key()]
    }

    fn get_mut(&mut self, key: NodeKey) -> &mut Node<T> {
        &mut self.nodes[key.key()]
    }

    /// Number of values stored, not counting the base.
    pub(crate) fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Link a new node holding `value` in right before `next_key`.
    ///
    /// Inserting before the base appends to the back of the list.
    pub(crate) fn insert_before(&mut self, value: T, next_key: NodeKey) -> NodeKey {
        let prev_key = self.get(next_key).prev();
        let new_key = self
            .nodes
            .insert(Node {
                next: next_key,
                prev: prev_key,
                value: Some(value),
            })
            .into();
        self.get_mut(prev_key).next = new_key;
        self.get_mut(next_key).prev = new_key;
        new_key
    }

    /// Unlink and deallocate a node, handing back its value.
    ///
    /// Returns `None` without touching anything when `key` is the base.
    pub(crate) fn remove(&mut self, key: NodeKey) -> Option<T> {
        if key == self.base {
            return None;
        }

        let node = self.nodes.remove(key.key());
        self.get_mut(node.next).prev = node.prev;
        self.get_mut(node.prev).next = node.next;
        node.value
    }

    /// Walk the values from front to back.
    pub(crate) fn iter(&self) -> Iter<'_, T> {
        Iter {
            arena: self,
            cursor: self.front(),
        }
    }
}

/// Front-to-back cursor over the nodes of an [`Arena`].
pub(crate) struct Iter<'a, T> {
    arena: &'a Arena<T>,
    cursor: NodeKey,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (NodeKey, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.cursor;
        let node = key.as_ref(self.arena);
        // The base node has no value, which ends the walk.
        let value = node.value()?;
        self.cursor = node.next();
        Some((key, value))
    }
}
