use std::cmp::Ordering;
use std::fmt::{Debug, Display};
use std::hash::{Hash, Hasher};

/// Real number priority with total order.
///
/// `f64` doesn't implement `Ord`, so it cannot be used directly as priority.
/// This wrapper orders values using [`f64::total_cmp`]:
/// `-NaN < -inf < ... < -0.0 < +0.0 < ... < +inf < NaN`.
///
/// Two values are equal only if they have the same bit pattern,
/// which keeps `Eq`, `Hash` and `Ord` consistent.
///
/// ```
/// use min_priority_queue::{FloatPriority, IndexedHeapQueue, MinPriorityQueue};
///
/// let mut queue = IndexedHeapQueue::new();
/// queue.add("b", FloatPriority(1.0)).unwrap();
/// queue.add("a", FloatPriority(0.5)).unwrap();
/// assert_eq!(queue.remove_min(), Ok(("a", FloatPriority(0.5))));
/// ```
#[derive(Copy, Clone, Default)]
pub struct FloatPriority(pub f64);

impl FloatPriority {
    #[inline(always)]
    pub fn get(self) -> f64 {
        self.0
    }
}

impl From<f64> for FloatPriority {
    #[inline(always)]
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<FloatPriority> for f64 {
    #[inline(always)]
    fn from(value: FloatPriority) -> Self {
        value.0
    }
}

impl PartialEq for FloatPriority {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for FloatPriority {}

impl PartialOrd for FloatPriority {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatPriority {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Hash for FloatPriority {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state)
    }
}

impl Debug for FloatPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        Debug::fmt(&self.0, f)
    }
}

impl Display for FloatPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        Display::fmt(&self.0, f)
    }
}
