use std::borrow::Borrow;
use std::collections::hash_map::RandomState;
use std::collections::{BTreeMap, VecDeque};
use std::fmt::Debug;
use std::hash::{BuildHasher, Hash};
use std::iter::FromIterator;

use indexmap::map::{Entry as IMEntry, IndexMap};

use crate::min_priority_queue::{MinPriorityQueue, QueueError};

/// Position of element in `priorities` map.
/// Buckets keep these instead of keys so keys are owned only once.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
struct SlotIndex(usize);

/// Min-priority queue backed by two synchronized maps:
/// ordered map from priority to bucket of elements with that priority
/// and hash map from element to its priority.
///
/// Buckets are FIFO: among elements with the smallest priority
/// the one that got this priority first is returned first.
///
/// `TPriority` is stored in both maps so it must be `Clone`.
///
/// # Examples
///
/// ```
/// use min_priority_queue::{DualMapQueue, MinPriorityQueue};
///
/// let mut queue = DualMapQueue::new();
/// queue.add("first", 1).unwrap();
/// queue.add("second", 1).unwrap();
/// queue.add("third", 0).unwrap();
/// assert_eq!(queue.remove_min(), Ok(("third", 0)));
/// // Ties are resolved in order of arrival
/// assert_eq!(queue.remove_min(), Ok(("first", 1)));
/// assert_eq!(queue.remove_min(), Ok(("second", 1)));
/// ```
///
/// ### Time complexity
///
/// Lookups are ***O(1)*** on average,
/// `add`, `remove_min` and `change_priority` are ***O(log n)***
/// plus linear scan of one bucket when priorities repeat.
#[derive(Clone)]
pub struct DualMapQueue<TKey, TPriority, S = RandomState> {
    buckets: BTreeMap<TPriority, VecDeque<SlotIndex>>,
    priorities: IndexMap<TKey, TPriority, S>,
}

impl<TKey: Hash + Eq, TPriority: Ord + Clone> DualMapQueue<TKey, TPriority, RandomState> {
    /// Creates an empty queue
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity_and_hasher(0, RandomState::default())
    }

    /// Creates an empty queue with allocated memory enough
    /// to keep `capacity` elements without reallocation of element map.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, RandomState::default())
    }
}

impl<TKey: Hash + Eq, TPriority: Ord + Clone, S: BuildHasher> DualMapQueue<TKey, TPriority, S> {
    /// Creates an empty queue with specific Hasher
    #[inline]
    pub fn with_hasher(hasher: S) -> Self {
        Self::with_capacity_and_hasher(0, hasher)
    }

    #[inline]
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            buckets: BTreeMap::new(),
            priorities: IndexMap::with_capacity_and_hasher(capacity, hasher),
        }
    }

    /// Reserves space for at least `additional` new elements.
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.priorities.reserve(additional);
    }

    /// Create readonly borrowing iterator over queue.
    /// Order of iteration is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = (&TKey, &TPriority)> {
        self.priorities.iter()
    }

    /// Number of distinct priorities currently in queue
    #[inline]
    pub fn distinct_priorities(&self) -> usize {
        self.buckets.len()
    }

    // Element must be absent
    fn push_new(&mut self, slot: SlotIndex, priority: TPriority) {
        self.buckets.entry(priority).or_default().push_back(slot);
    }

    // Moves element from old bucket to the end of new one
    fn change_priority_at(&mut self, slot: SlotIndex, priority: TPriority) -> TPriority {
        let (_, current) = self
            .priorities
            .get_index_mut(slot.0)
            .expect("All slot indexes must be valid");
        if *current == priority {
            // Element keeps its place in bucket
            return priority;
        }
        let old = std::mem::replace(current, priority.clone());
        detach_from_bucket(&mut self.buckets, &old, slot);
        self.push_new(slot, priority);
        old
    }

    // Removes element from `priorities`, slot must be already detached from its bucket.
    // Fixes bucket of the element which was moved into freed slot.
    fn remove_slot(&mut self, slot: SlotIndex) -> (TKey, TPriority) {
        let removed = self
            .priorities
            .swap_remove_index(slot.0)
            .expect("All slot indexes must be valid");

        let moved_from = SlotIndex(self.priorities.len());
        if moved_from != slot {
            let (_, moved_priority) = self
                .priorities
                .get_index(slot.0)
                .expect("Swap remove moved last element here");
            let bucket = self
                .buckets
                .get_mut(moved_priority)
                .expect("Every stored priority has bucket");
            let in_bucket = bucket
                .iter_mut()
                .find(|x| **x == moved_from)
                .expect("Every slot is in bucket of its priority");
            *in_bucket = slot;
        }

        removed
    }
}

fn detach_from_bucket<TPriority: Ord>(
    buckets: &mut BTreeMap<TPriority, VecDeque<SlotIndex>>,
    priority: &TPriority,
    slot: SlotIndex,
) {
    let bucket = buckets
        .get_mut(priority)
        .expect("Every stored priority has bucket");
    let pos = bucket
        .iter()
        .position(|&x| x == slot)
        .expect("Every slot is in bucket of its priority");
    bucket.remove(pos);
    if bucket.is_empty() {
        buckets.remove(priority);
    }
}

impl<TKey, TPriority, S> MinPriorityQueue<TKey, TPriority> for DualMapQueue<TKey, TPriority, S>
where
    TKey: Hash + Eq,
    TPriority: Ord + Clone,
    S: BuildHasher,
{
    fn add(&mut self, element: TKey, priority: TPriority) -> Result<(), QueueError> {
        match self.priorities.entry(element) {
            IMEntry::Occupied(_) => Err(QueueError::DuplicateElement),
            IMEntry::Vacant(entry) => {
                let slot = SlotIndex(entry.index());
                entry.insert(priority.clone());
                self.push_new(slot, priority);
                Ok(())
            }
        }
    }

    #[inline]
    fn contains<Q>(&self, element: &Q) -> bool
    where
        TKey: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.priorities.contains_key(element)
    }

    #[inline]
    fn get_priority<Q>(&self, element: &Q) -> Result<&TPriority, QueueError>
    where
        TKey: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.priorities.get(element).ok_or(QueueError::NotFound)
    }

    fn peek_min(&self) -> Result<(&TKey, &TPriority), QueueError> {
        let (priority, bucket) = self
            .buckets
            .first_key_value()
            .ok_or(QueueError::EmptyQueue)?;
        let slot = bucket.front().expect("Empty buckets are always removed");
        let (element, _) = self
            .priorities
            .get_index(slot.0)
            .expect("All slot indexes must be valid");
        Ok((element, priority))
    }

    fn remove_min(&mut self) -> Result<(TKey, TPriority), QueueError> {
        let mut first = self.buckets.first_entry().ok_or(QueueError::EmptyQueue)?;
        let slot = first
            .get_mut()
            .pop_front()
            .expect("Empty buckets are always removed");
        if first.get().is_empty() {
            first.remove();
        }
        Ok(self.remove_slot(slot))
    }

    fn change_priority<Q>(&mut self, element: &Q, priority: TPriority) -> Result<TPriority, QueueError>
    where
        TKey: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let slot = self
            .priorities
            .get_index_of(element)
            .ok_or(QueueError::NotFound)?;
        Ok(self.change_priority_at(SlotIndex(slot), priority))
    }

    fn remove<Q>(&mut self, element: &Q) -> Result<TPriority, QueueError>
    where
        TKey: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let (slot, _, priority) = self
            .priorities
            .get_full(element)
            .ok_or(QueueError::NotFound)?;
        let slot = SlotIndex(slot);
        detach_from_bucket(&mut self.buckets, priority, slot);
        let (_, priority) = self.remove_slot(slot);
        Ok(priority)
    }

    #[inline]
    fn len(&self) -> usize {
        debug_assert_eq!(self.buckets.is_empty(), self.priorities.is_empty());
        self.priorities.len()
    }

    #[inline]
    fn clear(&mut self) {
        self.buckets.clear();
        self.priorities.clear();
    }

    fn add_or_change_priority(&mut self, element: TKey, priority: TPriority) -> Option<TPriority> {
        // Single hash lookup for both cases
        match self.priorities.entry(element) {
            IMEntry::Occupied(entry) => {
                let slot = SlotIndex(entry.index());
                Some(self.change_priority_at(slot, priority))
            }
            IMEntry::Vacant(entry) => {
                let slot = SlotIndex(entry.index());
                entry.insert(priority.clone());
                self.push_new(slot, priority);
                None
            }
        }
    }
}

impl<TKey: Debug, TPriority: Debug, S> Debug for DualMapQueue<TKey, TPriority, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "[")?;
        for entry in self.priorities.iter() {
            write!(f, "{:?}", entry)?;
        }
        write!(f, "]")
    }
}

impl<TKey: Hash + Eq, TPriority: Ord + Clone, S: BuildHasher + Default> Default
    for DualMapQueue<TKey, TPriority, S>
{
    #[inline]
    fn default() -> Self {
        Self::with_capacity_and_hasher(0, S::default())
    }
}

impl<TKey, TPriority, S> FromIterator<(TKey, TPriority)> for DualMapQueue<TKey, TPriority, S>
where
    TKey: Hash + Eq,
    TPriority: Ord + Clone,
    S: BuildHasher + Default,
{
    /// Builds queue from pairs.
    /// Repeated element keeps the last priority.
    ///
    /// ```
    /// use min_priority_queue::{DualMapQueue, MinPriorityQueue};
    /// let queue: DualMapQueue<&str, i32> =
    ///     [("first", 0), ("second", 1), ("first", 2)].iter().cloned().collect();
    /// assert_eq!(queue.len(), 2);
    /// assert_eq!(queue.get_priority(&"first"), Ok(&2));
    /// ```
    fn from_iter<T: IntoIterator<Item = (TKey, TPriority)>>(iter: T) -> Self {
        let iter = iter.into_iter();
        let mut queue = Self::with_capacity_and_hasher(iter.size_hint().0, S::default());
        for (element, priority) in iter {
            queue.add_or_change_priority(element, priority);
        }
        queue
    }
}

impl<TKey, TPriority, S> IntoIterator for DualMapQueue<TKey, TPriority, S>
where
    TKey: Hash + Eq,
    TPriority: Ord + Clone,
    S: BuildHasher,
{
    type Item = (TKey, TPriority);
    type IntoIter = DualMapQueueIterator<TKey, TPriority, S>;

    /// Make iterator that return items in ascending order of priority.
    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter { queue: self }
    }
}

/// Consuming iterator that returns elements in ascending order of priority
///
/// ### Time complexity
/// Overall complexity of iteration is ***O(n log n)***
pub struct DualMapQueueIterator<TKey, TPriority, S = RandomState> {
    queue: DualMapQueue<TKey, TPriority, S>,
}

impl<TKey, TPriority, S> Iterator for DualMapQueueIterator<TKey, TPriority, S>
where
    TKey: Hash + Eq,
    TPriority: Ord + Clone,
    S: BuildHasher,
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
}
