pub use crate::core::{
    safequeue::SafeQueue,
    log::{LogEntry, Logger, SafeLogger, Op, State}
};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Unified Queue System Builder: a SafeQueue with every operation logged
///
/// Cloning yields another handle to the same queue and log, so producer
/// and consumer threads can each take their own copy.
pub struct QueueSystem<T> {
    label:String,
    queue: Arc<SafeQueue<T>>,
    logger: SafeLogger<T>,
}

impl<T> Clone for QueueSystem<T> {
    fn clone(&self) -> Self {
        Self {
            label: self.label.clone(),
            queue: self.queue.clone(),
            logger: self.logger.clone(),
        }
    }
}

impl<T: Clone + Send + 'static> QueueSystem<T> {
    /// Create a new QueueSystem
    pub fn new(label:String) -> Self {
        Self {
            queue: Arc::new(SafeQueue::new()),
            logger: Arc::new(Mutex::new(Logger::new(label.clone()))),
            label,
        }
    }

    /// Put with logging
    pub fn put(&self, item: T) -> bool {
        let accepted = self.queue.put(item.clone());
        let state = if accepted { State::Committed } else { State::Rejected };
        let mut logger = self.logger.lock().unwrap();
        logger.log(Op::Put, Some(item), state, self.queue.size());
        accepted
    }

    /// Get with logging (blocks while the queue is empty and open)
    pub fn get(&self) -> Option<T> {
        let item = self.queue.get();
        let state = if item.is_some() { State::Delivered } else { State::Rejected };
        let mut logger = self.logger.lock().unwrap();
        logger.log(Op::Get, item.clone(), state, self.queue.size());
        item
    }

    /// Get with logging, bounded wait
    pub fn get_timeout(&self, timeout: Duration) -> Option<T> {
        let item = self.queue.get_timeout(timeout);
        let state = if item.is_some() { State::Delivered } else { State::Rejected };
        let mut logger = self.logger.lock().unwrap();
        logger.log(Op::Get, item.clone(), state, self.queue.size());
        item
    }

    /// Close the queue, waking all blocked consumers
    pub fn close(&self) {
        self.queue.close();
        let mut logger = self.logger.lock().unwrap();
        logger.log(Op::Close, None, State::Committed, self.queue.size());
    }

    /// Current size snapshot (no lock taken)
    pub fn size(&self) -> u64 {
        self.queue.size()
    }

    /// Get current queue state
    pub fn queue_state(&self) -> (u64, bool) {
        let size = self.queue.size();
        (size, size == 0)
    }

    /// Expose logs
    pub fn logs(&self) -> Vec<LogEntry<T>> {
        let logger = self.logger.lock().unwrap();
        logger.entries.clone()
    }

    /// Get queue label
    pub fn label(&self) -> &str {
        &self.label
    }
}
