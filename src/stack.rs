//! The auxiliary stack used by the scan engine.
//!
//! A [`MonotonicStack`] holds `(index, value)` entries ordered strictly by
//! index and monotonically by value, bottom to top. It is created for one
//! scan and dropped when the scan finishes.

/// One `(index, value)` pair living on the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackEntry<V> {
    /// Position in the scanned sequence this entry is anchored at.
    pub index: usize,
    /// Value compared against incoming elements.
    pub value: V,
}

impl<V> StackEntry<V> {
    #[inline]
    pub fn new(index: usize, value: V) -> Self {
        Self { index, value }
    }
}

/// Ordering kept by a [`MonotonicStack`], bottom to top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Monotonicity {
    /// Values never decrease towards the top; a smaller incoming value pops.
    NonDecreasing,
    /// Values never increase towards the top; a larger incoming value pops.
    NonIncreasing,
}

impl Monotonicity {
    /// Whether `incoming` may be pushed directly above `top`.
    #[inline]
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn admits<V: PartialOrd>(self, top: &V, incoming: &V) -> bool {
        match self {
            Monotonicity::NonDecreasing => !(top > incoming),
            Monotonicity::NonIncreasing => !(top < incoming),
        }
    }
}

/// Stack of [`StackEntry`] values kept monotone under a [`Monotonicity`].
#[derive(Debug, Clone)]
pub struct MonotonicStack<V> {
    order: Monotonicity,
    entries: Vec<StackEntry<V>>,
}

impl<V: PartialOrd + Copy> MonotonicStack<V> {
    pub fn new(order: Monotonicity) -> Self {
        Self::with_capacity(order, 0)
    }

    pub fn with_capacity(order: Monotonicity, capacity: usize) -> Self {
        Self {
            order,
            entries: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn order(&self) -> Monotonicity {
        self.order
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn peek(&self) -> Option<&StackEntry<V>> {
        self.entries.last()
    }

    /// Push an entry on top.
    ///
    /// The caller must already have popped every entry the new value
    /// violates; both the index and value orderings are checked in debug builds.
    #[inline]
    pub fn push(&mut self, entry: StackEntry<V>) {
        if let Some(top) = self.entries.last() {
            debug_assert!(
                top.index < entry.index,
                "stack indices must be strictly ascending ({} then {})",
                top.index,
                entry.index
            );
            debug_assert!(
                self.order.admits(&top.value, &entry.value),
                "push would break {:?} ordering",
                self.order
            );
        }
        self.entries.push(entry);
    }

    #[inline]
    pub fn pop(&mut self) -> Option<StackEntry<V>> {
        self.entries.pop()
    }

    /// Pop the top entry if it does not admit `incoming` above it.
    #[inline]
    pub fn pop_violating(&mut self, incoming: &V) -> Option<StackEntry<V>> {
        match self.entries.last() {
            Some(top) if !self.order.admits(&top.value, incoming) => self.entries.pop(),
            _ => None,
        }
    }

    /// Entries bottom to top.
    pub fn as_slice(&self) -> &[StackEntry<V>] {
        &self.entries
    }
}
