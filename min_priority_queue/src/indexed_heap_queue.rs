use std::borrow::Borrow;
use std::collections::hash_map::RandomState;
use std::fmt::Debug;
use std::hash::{BuildHasher, Hash};
use std::iter::FromIterator;

use crate::editable_binary_heap::{BinaryHeap, BinaryHeapIterator, HeapIndex};
use crate::mediator::{Mediator, MediatorEntry, MediatorIndex};
use crate::min_priority_queue::{MinPriorityQueue, QueueError};
use crate::priority_node::PriorityNode;

/// A min-priority queue backed by binary heap with lookup of element positions.
///
/// Smaller `TPriority` values are extracted first.
///
/// Keys are stored in hash map together with current position of their node in the heap.
/// Heap nodes refer back to keys by their position in that map.
/// Every move inside the heap updates the map immediately,
/// so element can be found in the heap in ***O(1)*** to change its priority.
///
/// It is logic error if priority values changes other way than by [`change_priority`] method.
/// It is logic error if key values changes somehow while in queue.
///
/// If you feel IndexedHeapQueue slow, it can be because it uses RandomState (slightly slow but strong against HashDoS attack) hasher by default.
/// For example, you may try [fnv] or [rustc-hash] crates hashers.
///
/// [`change_priority`]: MinPriorityQueue::change_priority
/// [fnv]: https://crates.io/crates/fnv
/// [rustc-hash]: https://crates.io/crates/rustc-hash
///
/// # Examples
///
/// ## Main example
/// ```
/// use min_priority_queue::{IndexedHeapQueue, MinPriorityQueue, QueueError};
///
/// let mut queue = IndexedHeapQueue::new();
///
/// // Currently queue is empty
/// assert_eq!(queue.peek_min(), Err(QueueError::EmptyQueue));
///
/// queue.add("Second", 2).unwrap();
/// queue.add("Third", 3).unwrap();
/// queue.add("First", 1).unwrap();
/// queue.add("Fourth", 4).unwrap();
/// queue.add("Fifth", 5).unwrap();
///
/// // Keys are unique
/// assert_eq!(queue.add("First", 0), Err(QueueError::DuplicateElement));
///
/// // Peek return references to most important pair.
/// assert_eq!(queue.peek_min(), Ok((&"First", &1)));
///
/// assert_eq!(queue.len(), 5);
///
/// // Removing always will return the smallest element
/// assert_eq!(queue.remove_min(), Ok(("First", 1)));
/// // We can change priority of item by key:
/// queue.change_priority(&"Fourth", -10).unwrap();
/// // And get it
/// assert_eq!(queue.get_priority(&"Fourth"), Ok(&-10));
/// // Now smallest element is Fourth
/// assert_eq!(queue.remove_min(), Ok(("Fourth", -10)));
/// // We can also increase priority!
/// queue.change_priority(&"Second", 10).unwrap();
/// assert_eq!(queue.remove_min(), Ok(("Third", 3)));
/// assert_eq!(queue.remove_min(), Ok(("Fifth", 5)));
/// assert_eq!(queue.remove_min(), Ok(("Second", 10)));
/// // Now queue is empty
/// assert_eq!(queue.remove_min(), Err(QueueError::EmptyQueue));
/// ```
///
/// ## Real number priorities
///
/// ```
/// use min_priority_queue::{FloatPriority, IndexedHeapQueue, MinPriorityQueue};
///
/// let mut queue = IndexedHeapQueue::new();
/// queue.add("x", FloatPriority(5.0)).unwrap();
/// queue.change_priority(&"x", FloatPriority(0.5)).unwrap();
/// queue.add("y", FloatPriority(1.0)).unwrap();
/// assert_eq!(queue.peek_min(), Ok((&"x", &FloatPriority(0.5))));
/// ```
#[derive(Clone)]
pub struct IndexedHeapQueue<TKey, TPriority, S = RandomState>
where
    TKey: Hash + Eq,
    TPriority: Ord,
    S: BuildHasher,
{
    heap: BinaryHeap<TPriority>,
    key_to_pos: Mediator<TKey, S>,
}

impl<TKey: Hash + Eq, TPriority: Ord> IndexedHeapQueue<TKey, TPriority, RandomState> {
    /// Creates an empty queue
    ///
    /// ### Examples
    ///
    /// ```
    /// use min_priority_queue::{IndexedHeapQueue, MinPriorityQueue};
    /// let mut queue = IndexedHeapQueue::new();
    /// queue.add("Key", 4).unwrap();
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity_and_hasher(0, RandomState::default())
    }

    /// Creates an empty queue with allocated memory enough
    /// to keep `capacity` elements without reallocation.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, RandomState::default())
    }
}

impl<TKey: Hash + Eq, TPriority: Ord, S: BuildHasher> IndexedHeapQueue<TKey, TPriority, S> {
    /// Creates an empty queue with specific Hasher
    ///
    /// ### Examples
    ///
    /// ```
    /// use min_priority_queue::{IndexedHeapQueue, MinPriorityQueue};
    /// use std::collections::hash_map::RandomState;
    /// let mut queue = IndexedHeapQueue::with_hasher(RandomState::default());
    /// queue.add("Key", 4).unwrap();
    /// ```
    #[inline]
    pub fn with_hasher(hasher: S) -> Self {
        Self::with_capacity_and_hasher(0, hasher)
    }

    /// Creates an empty queue with allocated memory enough
    /// to keep `capacity` elements without reallocation.
    /// Also useful when Hasher cannot be defaulted.
    #[inline]
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            key_to_pos: Mediator::with_capacity_and_hasher(capacity, hasher),
        }
    }

    /// Reserves space for at least `additional` new elements.
    ///
    /// ### Panics
    ///
    /// Panics if the new capacity overflows `usize`.
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.heap.reserve(additional);
        self.key_to_pos.reserve(additional);
    }

    /// Create readonly borrowing iterator over heap
    ///
    /// ```
    /// use min_priority_queue::IndexedHeapQueue;
    /// use std::collections::HashMap;
    /// let queue: IndexedHeapQueue<i32, i32> = (0..5).map(|x|(x,x)).collect();
    /// let mut entries = HashMap::new();
    /// for (&key, &priority) in queue.iter(){
    ///     entries.insert(key, priority);
    /// }
    /// let second_map: HashMap<i32, i32> = (0..5).map(|x|(x,x)).collect();
    /// assert_eq!(entries, second_map);
    /// ```
    ///
    /// ### Time complexity
    ///
    /// Iterating over whole queue is ***O(n)***
    pub fn iter(&self) -> IndexedHeapQueueBorrowIter<TKey, TPriority, S> {
        IndexedHeapQueueBorrowIter {
            key_to_pos: &self.key_to_pos,
            heap_iterator: self.heap.iter(),
        }
    }

    // Key must be absent from `key_to_pos`
    fn push_internal(&mut self, outer_pos: MediatorIndex, priority: TPriority) {
        // Borrow checker treats borrowing a field as borrowing whole structure
        // so we need to get references to fields to borrow them individually.
        let key_to_pos = &mut self.key_to_pos;
        let heap = &mut self.heap;

        heap.push(outer_pos, priority, |index, heap_idx| {
            *key_to_pos.get_index_mut(index) = heap_idx
        });
    }

    // Removes entry from by index of map
    fn remove_internal(&mut self, position: MediatorIndex) -> (TKey, TPriority) {
        let key_to_pos = &mut self.key_to_pos;
        let heap = &mut self.heap;

        let (_, heap_to_rem) = key_to_pos.get_index(position);

        let (removed_idx, priority) = heap
            .remove(heap_to_rem, |index, heap_idx| {
                *key_to_pos.get_index_mut(index) = heap_idx
            })
            .expect("Checked by key_to_pos");
        debug_assert_eq!(position, removed_idx);

        // Last map entry takes removed place, its heap node must follow
        let (removed_key, _) = key_to_pos.swap_remove_index(position);
        if MediatorIndex(key_to_pos.len()) != removed_idx {
            let (_, heap_idx_of_moved) = key_to_pos.get_index(removed_idx);
            let old_outer_pos = heap.change_outer_pos(removed_idx, heap_idx_of_moved);
            debug_assert_eq!(old_outer_pos, MediatorIndex(key_to_pos.len()));
        }

        (removed_key, priority)
    }

    // Do O(log n) heap updates and by-index map changes
    fn change_priority_internal(&mut self, position: MediatorIndex, priority: TPriority) -> TPriority {
        let heap = &mut self.heap;
        let key_to_pos = &mut self.key_to_pos;

        let (_, heap_idx) = key_to_pos.get_index(position);

        heap.change_priority(heap_idx, priority, |index, heap_idx| {
            *key_to_pos.get_index_mut(index) = heap_idx
        })
    }
}

impl<TKey, TPriority, S> MinPriorityQueue<TKey, TPriority> for IndexedHeapQueue<TKey, TPriority, S>
where
    TKey: Hash + Eq,
    TPriority: Ord,
    S: BuildHasher,
{
    /// ### Time complexity
    ///
    /// Average complexity is ***O(log n)***
    /// If elements added in ascending order, amortized complexity is ***O(1)***.
    fn add(&mut self, element: TKey, priority: TPriority) -> Result<(), QueueError> {
        let heap_len = self.heap.len();
        let outer_pos = match self.key_to_pos.entry(element) {
            MediatorEntry::Occupied(_) => return Err(QueueError::DuplicateElement),
            MediatorEntry::Vacant(entry) => entry.insert(heap_len),
        };
        self.push_internal(outer_pos, priority);
        Ok(())
    }

    /// ### Time complexity
    ///
    /// ***O(1)*** in average (limited by hash map key lookup).
    #[inline]
    fn contains<Q>(&self, element: &Q) -> bool
    where
        TKey: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.key_to_pos.get(element).is_some()
    }

    /// ### Time complexity
    ///
    /// ***O(1)*** in average (limited by hash map key lookup).
    fn get_priority<Q>(&self, element: &Q) -> Result<&TPriority, QueueError>
    where
        TKey: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let heap_idx = self.key_to_pos.get(element).ok_or(QueueError::NotFound)?;
        Ok(self
            .heap
            .look_into(heap_idx)
            .expect("Must contain if key_to_pos contain")
            .1)
    }

    /// ### Time complexity
    ///
    /// Always ***O(1)***
    fn peek_min(&self) -> Result<(&TKey, &TPriority), QueueError> {
        let (first_idx, heap_idx) = self
            .heap
            .most_prioritized_idx()
            .ok_or(QueueError::EmptyQueue)?;
        let (key, _) = self.key_to_pos.get_index(first_idx);
        let (_, priority) = self
            .heap
            .look_into(heap_idx)
            .expect("Checked using key_to_pos");
        Ok((key, priority))
    }

    /// ### Time complexity
    ///
    /// Cost of removal is always ***O(log n)***
    fn remove_min(&mut self) -> Result<(TKey, TPriority), QueueError> {
        let (to_remove, _) = self
            .heap
            .most_prioritized_idx()
            .ok_or(QueueError::EmptyQueue)?;
        Ok(self.remove_internal(to_remove))
    }

    /// ### Time complexity
    ///
    /// In best case ***O(1)***, in average costs ***O(log n)***.
    fn change_priority<Q>(&mut self, element: &Q, priority: TPriority) -> Result<TPriority, QueueError>
    where
        TKey: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let (map_pos, _, _) = self
            .key_to_pos
            .get_full(element)
            .ok_or(QueueError::NotFound)?;
        Ok(self.change_priority_internal(map_pos, priority))
    }

    /// ### Time complexity
    ///
    /// On average the function will require ***O(log n)*** operations.
    fn remove<Q>(&mut self, element: &Q) -> Result<TPriority, QueueError>
    where
        TKey: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let (index, _, _) = self
            .key_to_pos
            .get_full(element)
            .ok_or(QueueError::NotFound)?;
        let (_, priority) = self.remove_internal(index);
        Ok(priority)
    }

    #[inline]
    fn len(&self) -> usize {
        debug_assert_eq!(self.key_to_pos.len(), self.heap.usize_len());
        self.key_to_pos.len()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        debug_assert_eq!(self.heap.is_empty(), self.key_to_pos.is_empty());
        self.key_to_pos.is_empty()
    }

    #[inline]
    fn clear(&mut self) {
        self.heap.clear();
        self.key_to_pos.clear();
    }

    /// Uses only one hash lookup.
    fn add_or_change_priority(&mut self, element: TKey, priority: TPriority) -> Option<TPriority> {
        let heap_len = self.heap.len();
        match self.key_to_pos.entry(element) {
            MediatorEntry::Vacant(entry) => {
                let outer_pos = entry.insert(heap_len);
                self.push_internal(outer_pos, priority);
                None
            }
            MediatorEntry::Occupied(entry) => {
                let outer_pos = entry.index();
                Some(self.change_priority_internal(outer_pos, priority))
            }
        }
    }
}

impl<TKey: Hash + Eq + Debug, TPriority: Ord + Debug, S: BuildHasher> Debug
    for IndexedHeapQueue<TKey, TPriority, S>
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "[")?;
        for entry in self.iter() {
            write!(f, "{:?}", entry)?;
        }
        write!(f, "]")
    }
}

impl<TKey: Hash + Eq, TPriority: Ord, S: BuildHasher + Default> Default
    for IndexedHeapQueue<TKey, TPriority, S>
{
    #[inline]
    fn default() -> Self {
        Self::with_capacity_and_hasher(0, S::default())
    }
}

impl<TKey: Hash + Eq, TPriority: Ord, S: BuildHasher + Default> FromIterator<(TKey, TPriority)>
    for IndexedHeapQueue<TKey, TPriority, S>
{
    /// Allows building queue from iterator using `collect()`.
    /// At result it will be valid queue with unique keys,
    /// repeated key keeps the last priority.
    ///
    /// ### Examples
    ///
    /// ```
    /// use min_priority_queue::{IndexedHeapQueue, MinPriorityQueue};
    /// let mut queue: IndexedHeapQueue<&str, i32> =
    /// [("first", 0), ("second", 1), ("third", 2), ("first", 3)]
    ///                             .iter().cloned().collect();
    /// assert_eq!(queue.remove_min(), Ok(("second", 1)));
    /// assert_eq!(queue.remove_min(), Ok(("third", 2)));
    /// assert_eq!(queue.remove_min(), Ok(("first", 3)));
    /// assert!(queue.is_empty());
    /// ```
    ///
    /// ### Time complexity
    ///
    /// ***O(n)*** heapify after collecting unique keys.
    fn from_iter<T: IntoIterator<Item = (TKey, TPriority)>>(iter: T) -> Self {
        let iter = iter.into_iter();
        let (min_size, _) = iter.size_hint();
        let mut key_to_pos = Mediator::with_capacity_and_hasher(min_size, S::default());
        let mut priorities: Vec<TPriority> = Vec::with_capacity(min_size);

        // Until heapify every key stays at heap position equal to its mediator index
        for (key, priority) in iter {
            match key_to_pos.entry(key) {
                MediatorEntry::Vacant(entry) => {
                    entry.insert(HeapIndex(priorities.len()));
                    priorities.push(priority);
                }
                MediatorEntry::Occupied(entry) => {
                    priorities[entry.index().0] = priority;
                }
            }
        }

        let nodes = priorities
            .into_iter()
            .enumerate()
            .map(|(i, priority)| PriorityNode::new(MediatorIndex(i), priority))
            .collect();
        let heap = BinaryHeap::build(nodes, |index, heap_idx| {
            *key_to_pos.get_index_mut(index) = heap_idx
        });

        Self { heap, key_to_pos }
    }
}

impl<TKey: Hash + Eq, TPriority: Ord, S: BuildHasher> IntoIterator
    for IndexedHeapQueue<TKey, TPriority, S>
{
    type Item = (TKey, TPriority);
    type IntoIter = IndexedHeapQueueIterator<TKey, TPriority, S>;

    /// Make iterator that return items in ascending order.
    ///
    /// ### Examples
    ///
    /// ```
    /// use min_priority_queue::IndexedHeapQueue;
    /// let queue: IndexedHeapQueue<&str, i32> =
    ///     [("first", 0), ("second", 1), ("third", 2)]
    ///                             .iter().cloned().collect();
    /// let mut iterator = queue.into_iter();
    /// assert_eq!(iterator.next(), Some(("first", 0)));
    /// assert_eq!(iterator.next(), Some(("second", 1)));
    /// assert_eq!(iterator.next(), Some(("third", 2)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    ///
    /// ### Time complexity
    ///
    /// ***O(n log n)*** for iteration.
    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter { queue: self }
    }
}

/// This is consuming iterator that returns elements in ascending order
///
/// ### Time complexity
/// Overall complexity of iteration is ***O(n log n)***
pub struct IndexedHeapQueueIterator<TKey, TPriority, S = RandomState>
where
    TKey: Hash + Eq,
    TPriority: Ord,
    S: BuildHasher,
{
    queue: IndexedHeapQueue<TKey, TPriority, S>,
}

impl<TKey: Hash + Eq, TPriority: Ord, S: BuildHasher> Iterator
    for IndexedHeapQueueIterator<TKey, TPriority, S>
{
    type Item = (TKey, TPriority);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.queue.remove_min().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.queue.len()))
    }

    #[inline]
    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.queue.len()
    }
}

/// This is unordered borrowing iterator over queue.
///
/// ### Time complexity
/// Overall complexity of iteration is ***O(n)***
pub struct IndexedHeapQueueBorrowIter<'a, TKey, TPriority, S = RandomState>
where
    TKey: 'a + Hash + Eq,
    TPriority: 'a,
    S: BuildHasher,
{
    heap_iterator: BinaryHeapIterator<'a, TPriority>,
    key_to_pos: &'a Mediator<TKey, S>,
}

impl<'a, TKey: 'a + Hash + Eq, TPriority: 'a, S: BuildHasher> Iterator
    for IndexedHeapQueueBorrowIter<'a, TKey, TPriority, S>
{
    type Item = (&'a TKey, &'a TPriority);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let heap_iterator = &mut self.heap_iterator;
        let key_to_pos = &self.key_to_pos;
        heap_iterator.next().map(|(index, priority)| {
            let (key, _) = key_to_pos.get_index(index);
            (key, priority)
        })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.heap_iterator.size_hint()
    }

    #[inline]
    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.heap_iterator.count()
    }
}
