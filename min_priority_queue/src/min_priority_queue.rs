use std::borrow::Borrow;
use std::fmt::Display;
use std::hash::Hash;

/// Common interface of min-priority queues with mutable priorities.
///
/// Smaller `TPriority` values are extracted first.
/// Elements are unique: queue holds at most one priority per element.
///
/// All implementations behave the same way except for which element is returned
/// when several elements share the minimal priority.
/// This choice is deterministic within one implementation.
///
/// Failed calls never modify the queue.
///
/// # Examples
///
/// Code that works with any backing store:
///
/// ```
/// use min_priority_queue::{
///     DualMapQueue, IndexedHeapQueue, MinPriorityQueue, QueueError, StdHeapQueue,
///     UnsortedArrayQueue,
/// };
///
/// fn drain<Q: MinPriorityQueue<&'static str, i32>>(mut queue: Q) -> Vec<&'static str> {
///     queue.add("a", 3).unwrap();
///     queue.add("b", 1).unwrap();
///     queue.add("c", 2).unwrap();
///     assert_eq!(queue.add("a", 0), Err(QueueError::DuplicateElement));
///     let mut res = Vec::new();
///     while let Ok((element, _)) = queue.remove_min() {
///         res.push(element);
///     }
///     res
/// }
///
/// assert_eq!(drain(UnsortedArrayQueue::new()), ["b", "c", "a"]);
/// assert_eq!(drain(DualMapQueue::new()), ["b", "c", "a"]);
/// assert_eq!(drain(IndexedHeapQueue::new()), ["b", "c", "a"]);
/// assert_eq!(drain(StdHeapQueue::new()), ["b", "c", "a"]);
/// ```
pub trait MinPriorityQueue<TKey: Hash + Eq, TPriority: Ord> {
    /// Adds new element with priority.
    ///
    /// Returns [`QueueError::DuplicateElement`] if element is already in queue,
    /// in that case queue is left unchanged.
    fn add(&mut self, element: TKey, priority: TPriority) -> Result<(), QueueError>;

    /// Checks if element is in queue.
    fn contains<Q>(&self, element: &Q) -> bool
    where
        TKey: Borrow<Q>,
        Q: Hash + Eq + ?Sized;

    /// Returns current priority of element or [`QueueError::NotFound`].
    fn get_priority<Q>(&self, element: &Q) -> Result<&TPriority, QueueError>
    where
        TKey: Borrow<Q>,
        Q: Hash + Eq + ?Sized;

    /// Returns element with the smallest priority without removing it.
    ///
    /// It is always the pair that next [`remove_min`](MinPriorityQueue::remove_min) returns.
    fn peek_min(&self) -> Result<(&TKey, &TPriority), QueueError>;

    /// Removes and returns element with the smallest priority.
    fn remove_min(&mut self) -> Result<(TKey, TPriority), QueueError>;

    /// Replaces priority of element and returns the old one.
    fn change_priority<Q>(&mut self, element: &Q, priority: TPriority) -> Result<TPriority, QueueError>
    where
        TKey: Borrow<Q>,
        Q: Hash + Eq + ?Sized;

    /// Removes element regardless its position and returns its priority.
    fn remove<Q>(&mut self, element: &Q) -> Result<TPriority, QueueError>
    where
        TKey: Borrow<Q>,
        Q: Hash + Eq + ?Sized;

    /// Number of elements in queue.
    fn len(&self) -> usize;

    /// Removes all elements.
    fn clear(&mut self);

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Adds element if it is missing or changes its priority otherwise.
    /// Returns old priority if element was in queue.
    ///
    /// Never fails.
    fn add_or_change_priority(&mut self, element: TKey, priority: TPriority) -> Option<TPriority> {
        if self.contains(&element) {
            self.change_priority(&element, priority).ok()
        } else {
            self.add(element, priority)
                .expect("Element absence checked just before");
            None
        }
    }
}

/// Error returned by [`MinPriorityQueue`] operations.
///
/// All of them mean that caller violated contract of the called method.
/// Queue stays unchanged after any of them.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub enum QueueError {
    /// [`add`](MinPriorityQueue::add) got element which is already in queue.
    DuplicateElement,
    /// Queried element is not in queue.
    NotFound,
    /// [`peek_min`](MinPriorityQueue::peek_min) or
    /// [`remove_min`](MinPriorityQueue::remove_min) on empty queue.
    EmptyQueue,
}

impl Display for QueueError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            QueueError::DuplicateElement => write!(f, "Element is already in queue"),
            QueueError::NotFound => write!(f, "Element not found in queue"),
            QueueError::EmptyQueue => write!(f, "Queue is empty"),
        }
    }
}

impl std::error::Error for QueueError {}
