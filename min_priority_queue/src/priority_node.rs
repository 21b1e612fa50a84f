use std::fmt::Debug;
use std::hash::{Hash, Hasher};

/// Pair of element and its priority.
///
/// Element is fixed after creation, priority can be replaced.
/// Equality and hashing look only at element,
/// so two nodes with same element are the same entry regardless of priority.
///
/// ```
/// use min_priority_queue::PriorityNode;
///
/// let mut node = PriorityNode::new("task", 3);
/// assert_eq!(node.set_priority(1), 3);
/// assert_eq!(node, PriorityNode::new("task", 10));
/// assert_eq!(node.into_parts(), ("task", 1));
/// ```
#[derive(Clone, Copy)]
pub struct PriorityNode<TKey, TPriority> {
    element: TKey,
    priority: TPriority,
}

impl<TKey, TPriority> PriorityNode<TKey, TPriority> {
    #[inline(always)]
    pub fn new(element: TKey, priority: TPriority) -> Self {
        Self { element, priority }
    }

    #[inline(always)]
    pub fn element(&self) -> &TKey {
        &self.element
    }

    #[inline(always)]
    pub fn priority(&self) -> &TPriority {
        &self.priority
    }

    /// Replaces priority and returns old one
    #[inline(always)]
    pub fn set_priority(&mut self, priority: TPriority) -> TPriority {
        std::mem::replace(&mut self.priority, priority)
    }

    #[inline(always)]
    pub fn into_parts(self) -> (TKey, TPriority) {
        (self.element, self.priority)
    }

    // Element stays immutable for public users,
    // heap needs to re-point its nodes when mediator moves entries.
    #[inline(always)]
    pub(crate) fn replace_element(&mut self, element: TKey) -> TKey {
        std::mem::replace(&mut self.element, element)
    }
}

impl<TKey: PartialEq, TPriority> PartialEq for PriorityNode<TKey, TPriority> {
    fn eq(&self, other: &Self) -> bool {
        self.element == other.element
    }
}

impl<TKey: Eq, TPriority> Eq for PriorityNode<TKey, TPriority> {}

impl<TKey: Hash, TPriority> Hash for PriorityNode<TKey, TPriority> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.element.hash(state)
    }
}

impl<TKey: Debug, TPriority: Debug> Debug for PriorityNode<TKey, TPriority> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(
            f,
            "{{element: {:?}, priority: {:?}}}",
            &self.element, &self.priority
        )
    }
}
