use std::borrow::Borrow;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::fmt::Debug;
use std::hash::Hash;
use std::iter::FromIterator;

use crate::min_priority_queue::{MinPriorityQueue, QueueError};

/// Min-priority queue on top of [`std::collections::BinaryHeap`].
///
/// Standard heap cannot find its items, so every lookup is a linear scan
/// and changing priority removes the entry and pushes it again.
/// Only extracting minimum uses the heap order.
///
/// Equal priorities are extracted in the order they were pushed.
/// Changing priority counts as a new push unless the priority stays the same.
///
/// Keys are never hashed here, `Hash` is required only by [`MinPriorityQueue`].
///
/// # Examples
///
/// ```
/// use min_priority_queue::{MinPriorityQueue, StdHeapQueue};
///
/// let mut queue = StdHeapQueue::new();
/// queue.add("a", 2).unwrap();
/// queue.add("b", 2).unwrap();
/// queue.add("c", 5).unwrap();
/// assert_eq!(queue.change_priority(&"a", 7), Ok(2));
/// assert_eq!(queue.change_priority(&"c", 2), Ok(5));
/// let order: Vec<_> = queue.into_iter().map(|(e, _)| e).collect();
/// assert_eq!(order, ["b", "c", "a"]);
/// ```
///
/// ### Time complexity
///
/// `peek_min` is ***O(1)***, `remove_min` is ***O(log n)***.
/// `add` checks uniqueness of element so it is ***O(n)***
/// as well as `contains`, `get_priority`, `change_priority` and `remove`.
#[derive(Clone)]
pub struct StdHeapQueue<TKey, TPriority> {
    heap: BinaryHeap<Reverse<HeapEntry<TKey, TPriority>>>,
    // Sequence number of next pushed entry
    next_sequence: u64,
}

#[derive(Clone)]
struct HeapEntry<TKey, TPriority> {
    priority: TPriority,
    sequence: u64,
    element: TKey,
}

impl<TKey, TPriority: Ord> PartialEq for HeapEntry<TKey, TPriority> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<TKey, TPriority: Ord> Eq for HeapEntry<TKey, TPriority> {}

impl<TKey, TPriority: Ord> PartialOrd for HeapEntry<TKey, TPriority> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<TKey, TPriority: Ord> Ord for HeapEntry<TKey, TPriority> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

impl<TKey: Eq, TPriority: Ord> StdHeapQueue<TKey, TPriority> {
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
            heap: BinaryHeap::with_capacity(capacity),
            next_sequence: 0,
        }
    }

    /// Reserves space for at least `additional` new elements.
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.heap.reserve(additional);
    }

    /// Create readonly borrowing iterator over heap in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&TKey, &TPriority)> {
        self.heap
            .iter()
            .map(|Reverse(entry)| (&entry.element, &entry.priority))
    }

    fn push(&mut self, element: TKey, priority: TPriority) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(Reverse(HeapEntry {
            priority,
            sequence,
            element,
        }));
    }

    fn find<Q>(&self, element: &Q) -> Option<&HeapEntry<TKey, TPriority>>
    where
        TKey: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.heap
            .iter()
            .map(|Reverse(entry)| entry)
            .find(|entry| entry.element.borrow() == element)
    }

    // Takes entry out of the middle of heap and restores heap order in O(n)
    fn take<Q>(&mut self, element: &Q) -> Option<HeapEntry<TKey, TPriority>>
    where
        TKey: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let mut entries = std::mem::take(&mut self.heap).into_vec();
        let taken = entries
            .iter()
            .position(|Reverse(entry)| entry.element.borrow() == element)
            .map(|idx| entries.swap_remove(idx).0);
        self.heap = BinaryHeap::from(entries);
        taken
    }
}

impl<TKey: Hash + Eq, TPriority: Ord> MinPriorityQueue<TKey, TPriority>
    for StdHeapQueue<TKey, TPriority>
{
    fn add(&mut self, element: TKey, priority: TPriority) -> Result<(), QueueError> {
        if self.find(&element).is_some() {
            return Err(QueueError::DuplicateElement);
        }
        self.push(element, priority);
        Ok(())
    }

    #[inline]
    fn contains<Q>(&self, element: &Q) -> bool
    where
        TKey: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find(element).is_some()
    }

    fn get_priority<Q>(&self, element: &Q) -> Result<&TPriority, QueueError>
    where
        TKey: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find(element)
            .map(|entry| &entry.priority)
            .ok_or(QueueError::NotFound)
    }

    fn peek_min(&self) -> Result<(&TKey, &TPriority), QueueError> {
        self.heap
            .peek()
            .map(|Reverse(entry)| (&entry.element, &entry.priority))
            .ok_or(QueueError::EmptyQueue)
    }

    fn remove_min(&mut self) -> Result<(TKey, TPriority), QueueError> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.element, entry.priority))
            .ok_or(QueueError::EmptyQueue)
    }

    fn change_priority<Q>(&mut self, element: &Q, priority: TPriority) -> Result<TPriority, QueueError>
    where
        TKey: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.find(element) {
            None => return Err(QueueError::NotFound),
            // Keep position among equal priorities
            Some(entry) if entry.priority == priority => return Ok(priority),
            Some(_) => {}
        }
        let entry = self
            .take(element)
            .expect("Element presence checked just before");
        self.push(entry.element, priority);
        Ok(entry.priority)
    }

    fn remove<Q>(&mut self, element: &Q) -> Result<TPriority, QueueError>
    where
        TKey: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if self.find(element).is_none() {
            return Err(QueueError::NotFound);
        }
        let entry = self
            .take(element)
            .expect("Element presence checked just before");
        Ok(entry.priority)
    }

    #[inline]
    fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    fn clear(&mut self) {
        self.heap.clear()
    }
}

impl<TKey: Debug, TPriority: Debug> Debug for StdHeapQueue<TKey, TPriority> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "[")?;
        for Reverse(entry) in self.heap.iter() {
            write!(f, "{:?}", (&entry.element, &entry.priority))?;
        }
        write!(f, "]")
    }
}

impl<TKey: Eq, TPriority: Ord> Default for StdHeapQueue<TKey, TPriority> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<TKey: Hash + Eq, TPriority: Ord> FromIterator<(TKey, TPriority)>
    for StdHeapQueue<TKey, TPriority>
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

impl<TKey: Hash + Eq, TPriority: Ord> IntoIterator for StdHeapQueue<TKey, TPriority> {
    type Item = (TKey, TPriority);
    type IntoIter = StdHeapQueueIterator<TKey, TPriority>;

    /// Make iterator that return items in ascending order of priority.
    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter { queue: self }
    }
}

/// Consuming iterator that returns elements in ascending order of priority
///
/// ### Time complexity
/// Overall complexity of iteration is ***O(n log n)***
pub struct StdHeapQueueIterator<TKey, TPriority> {
    queue: StdHeapQueue<TKey, TPriority>,
}

impl<TKey: Hash + Eq, TPriority: Ord> Iterator for StdHeapQueueIterator<TKey, TPriority> {
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
