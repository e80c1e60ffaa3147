//! Stack with constant-time minimum.
//!
//! A companion stack holds the running minima: a pushed value joins it when
//! it is no larger than the current minimum, and leaves it when that same
//! value is popped from the main stack. Duplicated minima are therefore kept
//! once per occurrence.

#[derive(Debug, Clone)]
pub struct MinStack<T> {
    data: Vec<T>,
    minima: Vec<T>,
}

impl<T> Default for MinStack<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            minima: Vec::new(),
        }
    }
}

impl<T: Ord + Copy> MinStack<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: T) {
        self.data.push(value);
        if self.minima.last().map_or(true, |&min| value <= min) {
            self.minima.push(value);
        }
    }

    /// Remove and return the most recently pushed value.
    pub fn pop(&mut self) -> Option<T> {
        let value = self.data.pop()?;
        if self.minima.last() == Some(&value) {
            self.minima.pop();
        }
        Some(value)
    }

    pub fn top(&self) -> Option<T> {
        self.data.last().copied()
    }

    /// Smallest value currently on the stack.
    pub fn min(&self) -> Option<T> {
        self.minima.last().copied()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T: Ord + Copy> Extend<T> for MinStack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T: Ord + Copy> FromIterator<T> for MinStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}
