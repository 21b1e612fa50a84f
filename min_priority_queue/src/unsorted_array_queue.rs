use std::borrow::Borrow;
use std::fmt::Debug;
use std::hash::Hash;
use std::iter::FromIterator;

use crate::min_priority_queue::{MinPriorityQueue, QueueError};
use crate::priority_node::PriorityNode;

/// Min-priority queue backed by unsorted vector of nodes.
///
/// Adding only appends to the end,
/// all other operations do linear scan over all elements.
/// It is the simplest correct implementation and useful as baseline.
///
/// When several elements share the smallest priority,
/// the one stored first in the vector is returned.
///
/// Keys are compared only with `Eq` and never hashed,
/// `Hash` is required only by [`MinPriorityQueue`] which is shared with hash based queues.
///
/// # Examples
///
/// ```
/// use min_priority_queue::{MinPriorityQueue, UnsortedArrayQueue};
///
/// let mut queue = UnsortedArrayQueue::new();
/// queue.add("x", 5).unwrap();
/// queue.change_priority(&"x", 0).unwrap();
/// queue.add("y", 1).unwrap();
/// assert_eq!(queue.peek_min(), Ok((&"x", &0)));
/// ```
///
/// ### Time complexity
///
/// `add` checks uniqueness of element so it is ***O(n)*** as every other operation.
#[derive(Clone)]
pub struct UnsortedArrayQueue<TKey, TPriority> {
    nodes: Vec<PriorityNode<TKey, TPriority>>,
}

impl<TKey: Eq, TPriority: Ord> UnsortedArrayQueue<TKey, TPriority> {
    /// Creates an empty queue
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty queue with allocated memory enough
    /// to keep `capacity` elements without reallocation.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Reserves space for at least `additional` new elements.
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.nodes.reserve(additional);
    }

    /// Create readonly borrowing iterator over queue in storage order.
    pub fn iter(&self) -> impl Iterator<Item = (&TKey, &TPriority)> {
        self.nodes.iter().map(|node| (node.element(), node.priority()))
    }

    fn position<Q>(&self, element: &Q) -> Option<usize>
    where
        TKey: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.nodes
            .iter()
            .position(|node| node.element().borrow() == element)
    }

    // First node with minimal priority
    fn min_position(&self) -> Option<usize> {
        let mut nodes = self.nodes.iter().enumerate();
        let (mut min_idx, mut min_node) = nodes.next()?;
        for (i, node) in nodes {
            if node.priority() < min_node.priority() {
                min_idx = i;
                min_node = node;
            }
        }
        Some(min_idx)
    }
}

impl<TKey: Hash + Eq, TPriority: Ord> MinPriorityQueue<TKey, TPriority>
    for UnsortedArrayQueue<TKey, TPriority>
{
    fn add(&mut self, element: TKey, priority: TPriority) -> Result<(), QueueError> {
        if self.position(&element).is_some() {
            return Err(QueueError::DuplicateElement);
        }
        self.nodes.push(PriorityNode::new(element, priority));
        Ok(())
    }

    #[inline]
    fn contains<Q>(&self, element: &Q) -> bool
    where
        TKey: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.position(element).is_some()
    }

    fn get_priority<Q>(&self, element: &Q) -> Result<&TPriority, QueueError>
    where
        TKey: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = self.position(element).ok_or(QueueError::NotFound)?;
        Ok(self.nodes[idx].priority())
    }

    fn peek_min(&self) -> Result<(&TKey, &TPriority), QueueError> {
        let idx = self.min_position().ok_or(QueueError::EmptyQueue)?;
        let node = &self.nodes[idx];
        Ok((node.element(), node.priority()))
    }

    fn remove_min(&mut self) -> Result<(TKey, TPriority), QueueError> {
        let idx = self.min_position().ok_or(QueueError::EmptyQueue)?;
        Ok(self.nodes.swap_remove(idx).into_parts())
    }

    fn change_priority<Q>(&mut self, element: &Q, priority: TPriority) -> Result<TPriority, QueueError>
    where
        TKey: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = self.position(element).ok_or(QueueError::NotFound)?;
        Ok(self.nodes[idx].set_priority(priority))
    }

    fn remove<Q>(&mut self, element: &Q) -> Result<TPriority, QueueError>
    where
        TKey: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = self.position(element).ok_or(QueueError::NotFound)?;
        let (_, priority) = self.nodes.swap_remove(idx).into_parts();
        Ok(priority)
    }

    #[inline]
    fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    fn clear(&mut self) {
        self.nodes.clear()
    }
}

impl<TKey: Debug, TPriority: Debug> Debug for UnsortedArrayQueue<TKey, TPriority> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "[")?;
        for node in self.nodes.iter() {
            write!(f, "{:?}", (node.element(), node.priority()))?;
        }
        write!(f, "]")
    }
}

impl<TKey: Eq, TPriority: Ord> Default for UnsortedArrayQueue<TKey, TPriority> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<TKey: Hash + Eq, TPriority: Ord> FromIterator<(TKey, TPriority)>
    for UnsortedArrayQueue<TKey, TPriority>
{
    /// Builds queue from pairs.
    /// Repeated element keeps the last priority.
    ///
    /// ### Time complexity
    ///
    /// ***O(n^2)*** because of uniqueness checks.
    fn from_iter<T: IntoIterator<Item = (TKey, TPriority)>>(iter: T) -> Self {
        let iter = iter.into_iter();
        let mut queue = Self::with_capacity(iter.size_hint().0);
        for (element, priority) in iter {
            queue.add_or_change_priority(element, priority);
        }
        queue
    }
}

impl<TKey: Hash + Eq, TPriority: Ord> IntoIterator for UnsortedArrayQueue<TKey, TPriority> {
    type Item = (TKey, TPriority);
    type IntoIter = UnsortedArrayQueueIterator<TKey, TPriority>;

    /// Make iterator that return items in ascending order of priority.
    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter { queue: self }
    }
}

/// Consuming iterator that returns elements in ascending order of priority
///
/// ### Time complexity
/// Overall complexity of iteration is ***O(n^2)***
pub struct UnsortedArrayQueueIterator<TKey, TPriority> {
    queue: UnsortedArrayQueue<TKey, TPriority>,
}

impl<TKey: Hash + Eq, TPriority: Ord> Iterator for UnsortedArrayQueueIterator<TKey, TPriority> {
    type Item = (TKey, TPriority);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.queue.remove_min().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.queue.len()))
    }
}
