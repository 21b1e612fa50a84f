use std::cmp::{Ord, Ordering};
use std::fmt::Debug;
use std::vec::Vec;

use crate::mediator::MediatorIndex;
use crate::priority_node::PriorityNode;

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub(crate) struct HeapIndex(pub(crate) usize);

/// Min heap over nodes which point to their keys in `Mediator`.
///
/// Every change of node position is reported to `change_handler`
/// with mediator index of moved node and its new position,
/// so caller can keep its element-to-position map in sync.
pub(crate) struct BinaryHeap<TPriority> {
    data: Vec<PriorityNode<MediatorIndex, TPriority>>,
}

impl<TPriority: Ord> BinaryHeap<TPriority> {
    #[inline(always)]
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    #[inline(always)]
    pub(crate) fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Puts outer index and priority in the end of heap and lifts it up.
    /// Caller must already know that pushed item is at `self.len()` position.
    /// Time complexity - O(log n) swaps and change_handler calls
    #[inline(always)]
    pub(crate) fn push<TChangeHandler: FnMut(MediatorIndex, HeapIndex)>(
        &mut self,
        outer_pos: MediatorIndex,
        priority: TPriority,
        mut change_handler: TChangeHandler,
    ) {
        self.data.push(PriorityNode::new(outer_pos, priority));
        self.heapify_up(HeapIndex(self.data.len() - 1), &mut change_handler);
    }

    /// Position of item with the smallest priority
    #[inline(always)]
    pub(crate) fn most_prioritized_idx(&self) -> Option<(MediatorIndex, HeapIndex)> {
        self.data.first().map(|x| (*x.element(), HeapIndex(0)))
    }

    /// Removes item at position and returns it.
    /// Last item takes its place and is moved up or down as needed.
    /// Time complexity - O(log n) swaps and change_handler calls
    pub(crate) fn remove<TChangeHandler: FnMut(MediatorIndex, HeapIndex)>(
        &mut self,
        position: HeapIndex,
        mut change_handler: TChangeHandler,
    ) -> Option<(MediatorIndex, TPriority)> {
        if position >= self.len() {
            return None;
        }
        let last = self.data.len() - 1;
        if position.0 != last {
            self.swap_items(position.0, last, &mut change_handler);
        }
        let removed = self.data.pop()?;
        if position.0 < self.data.len() {
            self.restore_order(position, &mut change_handler);
        }
        Some(removed.into_parts())
    }

    #[inline(always)]
    pub(crate) fn look_into(&self, position: HeapIndex) -> Option<(MediatorIndex, &TPriority)> {
        let node = self.data.get(position.0)?;
        Some((*node.element(), node.priority()))
    }

    /// Changes priority of queue item and returns the old one
    /// Time complexity - O(log n) swaps and change_handler calls
    pub(crate) fn change_priority<TChangeHandler: FnMut(MediatorIndex, HeapIndex)>(
        &mut self,
        position: HeapIndex,
        updated: TPriority,
        mut change_handler: TChangeHandler,
    ) -> TPriority {
        assert!(
            position < self.len(),
            "Out of index during changing priority"
        );

        let old = self.data[position.0].set_priority(updated);
        match old.cmp(self.data[position.0].priority()) {
            Ordering::Greater => {
                self.heapify_up(position, &mut change_handler);
            }
            Ordering::Equal => {}
            Ordering::Less => {
                self.heapify_down(position, &mut change_handler);
            }
        }
        old
    }

    /// Points node at position to other mediator index.
    /// Used when mediator moves its entries.
    /// Returns old mediator index.
    #[inline(always)]
    pub(crate) fn change_outer_pos(
        &mut self,
        outer_pos: MediatorIndex,
        position: HeapIndex,
    ) -> MediatorIndex {
        assert!(position < self.len(), "Out of index during changing key");
        self.data[position.0].replace_element(outer_pos)
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> HeapIndex {
        HeapIndex(self.data.len())
    }

    #[inline(always)]
    pub(crate) fn usize_len(&self) -> usize {
        self.data.len()
    }

    #[inline(always)]
    pub(crate) fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline(always)]
    pub(crate) fn clear(&mut self) {
        self.data.clear()
    }

    #[inline(always)]
    pub(crate) fn iter(&self) -> BinaryHeapIterator<TPriority> {
        BinaryHeapIterator {
            inner: self.data.iter(),
        }
    }

    /// Builds heap from nodes in arbitrary order using bottom-up heapify.
    /// Node at position `i` is expected to be known by caller at `HeapIndex(i)`.
    /// Time complexity - O(n)
    pub(crate) fn build<TChangeHandler: FnMut(MediatorIndex, HeapIndex)>(
        data: Vec<PriorityNode<MediatorIndex, TPriority>>,
        mut change_handler: TChangeHandler,
    ) -> Self {
        let mut res = Self { data };
        for pos in (0..res.data.len() / 2).rev().map(HeapIndex) {
            res.heapify_down(pos, &mut change_handler);
        }
        res
    }

    // Moved item can be smaller than its new parent or bigger than its new children
    fn restore_order<TChangeHandler: FnMut(MediatorIndex, HeapIndex)>(
        &mut self,
        position: HeapIndex,
        change_handler: &mut TChangeHandler,
    ) {
        if self.heapify_up(position, change_handler) == position {
            self.heapify_down(position, change_handler);
        }
    }

    // Swim. Returns final position.
    fn heapify_up<TChangeHandler: FnMut(MediatorIndex, HeapIndex)>(
        &mut self,
        position: HeapIndex,
        change_handler: &mut TChangeHandler,
    ) -> HeapIndex {
        debug_assert!(position.0 < self.data.len(), "Out of index in heapify_up");
        let mut position = position.0;
        while position > 0 {
            let parent_pos = (position - 1) / 2;
            if self.data[parent_pos].priority() > self.data[position].priority() {
                self.swap_items(parent_pos, position, change_handler);
                position = parent_pos;
            } else {
                break;
            }
        }
        HeapIndex(position)
    }

    // Sink. Returns final position.
    fn heapify_down<TChangeHandler: FnMut(MediatorIndex, HeapIndex)>(
        &mut self,
        position: HeapIndex,
        change_handler: &mut TChangeHandler,
    ) -> HeapIndex {
        debug_assert!(position.0 < self.data.len(), "Out of index in heapify_down");
        let mut position = position.0;
        loop {
            let min_child_idx = {
                let child1 = position * 2 + 1;
                let child2 = child1 + 1;
                if child1 >= self.data.len() {
                    break;
                }
                if child2 < self.data.len()
                    && self.data[child2].priority() < self.data[child1].priority()
                {
                    child2
                } else {
                    child1
                }
            };

            if self.data[min_child_idx].priority() < self.data[position].priority() {
                self.swap_items(position, min_child_idx, change_handler);
                position = min_child_idx;
            } else {
                break;
            }
        }
        HeapIndex(position)
    }

    // Both moved nodes are reported so outer map never lags behind the array
    #[inline(always)]
    fn swap_items<TChangeHandler: FnMut(MediatorIndex, HeapIndex)>(
        &mut self,
        pos1: usize,
        pos2: usize,
        change_handler: &mut TChangeHandler,
    ) {
        debug_assert!(pos1 < self.data.len(), "Out of index in first pos in swap");
        debug_assert!(pos2 < self.data.len(), "Out of index in second pos in swap");
        self.data.swap(pos1, pos2);
        change_handler(*self.data[pos1].element(), HeapIndex(pos1));
        change_handler(*self.data[pos2].element(), HeapIndex(pos2));
    }
}

/// Unordered iterator over heap nodes
pub(crate) struct BinaryHeapIterator<'a, TPriority> {
    inner: std::slice::Iter<'a, PriorityNode<MediatorIndex, TPriority>>,
}

impl<'a, TPriority> Iterator for BinaryHeapIterator<'a, TPriority> {
    type Item = (MediatorIndex, &'a TPriority);

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|x| (*x.element(), x.priority()))
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    #[inline(always)]
    fn count(self) -> usize {
        self.inner.len()
    }
}

// Default implementations

impl<TPriority: Clone> Clone for BinaryHeap<TPriority> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
        }
    }
}

impl<TPriority: Debug> Debug for BinaryHeap<TPriority> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        self.data.fmt(f)
    }
}
