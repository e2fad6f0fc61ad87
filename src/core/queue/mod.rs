use std::collections::VecDeque;

/// Sequential FIFO storage. Not synchronized on its own: SafeQueue owns
/// one of these behind its lock and does all the waiting/waking.
pub struct Queue<T>{
    items: VecDeque<T>,
}

impl <T> Queue <T> {
    /// Create a new, empty queue
    pub fn new() -> Self {
        Self{ items:VecDeque::new() }
    }

    /// Append an item at the tail
    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
        // --post operation assertion
        assert!(self.items.len() > 0, "storage cannot be empty right after an enqueue");
    }

    /// Remove and return the head item, None when nothing is stored
    pub fn dequeue(&mut self) -> Option<T> {
        let len_before = self.items.len();
        let result = self.items.pop_front();
        // -- post op assertion: exactly one item leaves, or none on empty
        match result {
            Some(_) => assert_eq!(self.items.len(), len_before - 1, "dequeue must remove exactly one item"),
            None => assert_eq!(self.items.len(), len_before, "dequeue on empty storage must not change it"),
        }
        result
    }

    /// Number of items currently stored
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

}
