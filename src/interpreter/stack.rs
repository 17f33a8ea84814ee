use std::collections::TryReserveError;

/// A last-in, first-out stack.
///
/// Used for the operator working stack of the compiler and for the value
/// stack of the evaluator. The compiler grows it through the fallible
/// [`try_push`](Self::try_push) so that running out of memory surfaces as a
/// compile error instead of an abort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates an empty stack able to hold `capacity` items without
    /// reallocating.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { items: Vec::with_capacity(capacity) }
    }

    /// Pushes an item, aborting on allocation failure like [`Vec::push`].
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Pushes an item, reporting allocation failure instead of aborting.
    ///
    /// # Example
    /// ```
    /// use funcplot::interpreter::stack::Stack;
    ///
    /// let mut stack = Stack::new();
    /// stack.try_push(1).unwrap();
    /// stack.try_push(2).unwrap();
    ///
    /// assert_eq!(stack.pop(), Some(2));
    /// assert_eq!(stack.peek(), Some(&1));
    /// ```
    pub fn try_push(&mut self, item: T) -> Result<(), TryReserveError> {
        self.items.try_reserve(1)?;
        self.items.push(item);
        Ok(())
    }

    /// Removes and returns the top item.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Returns the top item without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Removes and returns the top item if it satisfies `predicate`.
    pub fn pop_if(&mut self, predicate: impl FnOnce(&T) -> bool) -> Option<T> {
        if self.peek().is_some_and(predicate) {
            self.items.pop()
        } else {
            None
        }
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}
