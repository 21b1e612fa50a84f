//! Min-priority queues that support changing priority of elements and early removal.
//!
//! Every queue implements [`MinPriorityQueue`] trait.
//! Each entry has unique *element* and associated *priority*.
//! Elements must be hashable; priorities must implement Ord trait.
//! Use [`FloatPriority`] for real number priorities.
//!
//! Removing returns element with the smallest priority.
//! Adding puts new element into queue; adding element which is already in queue is an error.
//! Also it is possible to change priority or remove element directly.
//!
//! There are four backing stores with the same behaviour:
//!
//! | Queue                    | add              | peek_min         | remove_min       | change_priority  |
//! |--------------------------|------------------|------------------|------------------|------------------|
//! | [`UnsortedArrayQueue`]   | ***O(n)***       | ***O(n)***       | ***O(n)***       | ***O(n)***       |
//! | [`DualMapQueue`]         | ***O(log n)***   | ***O(log n)***   | ***O(log n)***   | ***O(log n)***   |
//! | [`IndexedHeapQueue`]     | ***O(log n)***   | ***O(1)***       | ***O(log n)***   | ***O(log n)***   |
//! | [`StdHeapQueue`]         | ***O(n)***       | ***O(1)***       | ***O(log n)***   | ***O(n)***       |
//!
//! `contains` and `get_priority` are ***O(1)*** for hash based queues.
//!
//! They differ only in which element is returned when several elements share the smallest priority.
//!
//! # Examples
//!
//! This is implementation of [Dijkstra's algorithm][dijkstra] for weighted graph.
//! Sometimes shorter path to vertex in queue is found
//! so the priority of it needs to be decreased.
//!
//! This example shows how to change priority in [`IndexedHeapQueue`] when needed.
//!
//! [dijkstra]: https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
//!
//! ```
//! use min_priority_queue::{IndexedHeapQueue, MinPriorityQueue};
//! use std::collections::HashMap;
//!
//! struct Graph {
//!     // Outgoing edges: (target, weight)
//!     edges: Vec<Vec<(usize, u32)>>,
//! }
//!
//! fn shortest_paths(graph: &Graph, start: usize) -> HashMap<usize, u32> {
//!     let mut done: HashMap<usize, u32> = HashMap::new();
//!     let mut available = IndexedHeapQueue::new();
//!     available.add(start, 0).unwrap();
//!     while let Ok((vertex, distance)) = available.remove_min() {
//!         done.insert(vertex, distance);
//!         for &(next, weight) in graph.edges[vertex].iter() {
//!             if done.contains_key(&next) {
//!                 continue;
//!             }
//!             let candidate = distance + weight;
//!             match available.get_priority(&next).ok().copied() {
//!                 // Have found better path to vertex in queue
//!                 Some(known) if candidate < known => {
//!                     available.change_priority(&next, candidate).unwrap();
//!                 }
//!                 Some(_) => { /* Have found worse path. */ }
//!                 None => available.add(next, candidate).unwrap(),
//!             }
//!         }
//!     }
//!     done
//! }
//!
//! let graph = Graph {
//!     edges: vec![
//!         vec![(1, 7), (2, 9), (5, 14)],
//!         vec![(0, 7), (2, 10), (3, 15)],
//!         vec![(0, 9), (1, 10), (3, 11), (5, 2)],
//!         vec![(1, 15), (2, 11), (4, 6)],
//!         vec![(3, 6), (5, 9)],
//!         vec![(0, 14), (2, 2), (4, 9)],
//!     ],
//! };
//!
//! let distances = shortest_paths(&graph, 0);
//! assert_eq!(distances[&4], 20);
//! assert_eq!(distances[&5], 11);
//! assert_eq!(distances[&3], 20);
//! ```
//!

mod dual_map_queue;
mod editable_binary_heap;
mod float_priority;
mod indexed_heap_queue;
mod mediator;
mod min_priority_queue;
mod priority_node;
mod std_heap_queue;
mod unsorted_array_queue;

pub use crate::dual_map_queue::{DualMapQueue, DualMapQueueIterator};
pub use crate::float_priority::FloatPriority;
pub use crate::indexed_heap_queue::{
    IndexedHeapQueue, IndexedHeapQueueBorrowIter, IndexedHeapQueueIterator,
};
pub use crate::min_priority_queue::{MinPriorityQueue, QueueError};
pub use crate::priority_node::PriorityNode;
pub use crate::std_heap_queue::{StdHeapQueue, StdHeapQueueIterator};
pub use crate::unsorted_array_queue::{UnsortedArrayQueue, UnsortedArrayQueueIterator};

#[doc = include_str!("../../Readme.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;
