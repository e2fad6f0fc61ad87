use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Condvar, Mutex};
use std::time::Duration;
use crate::core::queue::Queue;

/// State guarded by the mutex: the FIFO storage plus the closed flag
struct Inner<T> {
    items: Queue<T>,
    closed: bool,
}

/// Thread-safe blocking FIFO queue
///
/// Any number of producer and consumer threads may call `put` and `get`
/// concurrently. `get` blocks while the queue is empty and open; `put`
/// never blocks (the queue is unbounded). `size` is readable without
/// taking the lock.
pub struct SafeQueue<T> {
    inner: Mutex<Inner<T>>,
    not_empty: Condvar,
    size: AtomicU64,
}

impl <T> SafeQueue <T> {
    /// Create a new, empty, open queue
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner { items: Queue::new(), closed: false }),
            not_empty: Condvar::new(),
            size: AtomicU64::new(0),
        }
    }

    /// Put an item at the tail of the queue and wake one waiting consumer.
    /// Returns false (dropping the item) if the queue has been closed.
    pub fn put(&self, item: T) -> bool {
        let mut inner = self.inner.lock().unwrap();
        if inner.closed {
            return false;
        }
        inner.items.enqueue(item);
        // size is bumped while still holding the lock, so it stays in step
        // with the storage for every later lock holder
        self.size.fetch_add(1, Ordering::SeqCst);
        self.not_empty.notify_one();
        true
    }

    /// Get the head item, blocking while the queue is empty and open.
    /// Returns None only once the queue is closed and drained.
    pub fn get(&self) -> Option<T> {
        let mut inner = self.inner.lock().unwrap();
        // loop, not a single check: wakeups may be spurious, and another
        // consumer may have taken the item between notify and re-acquire
        while inner.items.is_empty() && !inner.closed {
            inner = self.not_empty.wait(inner).unwrap();
        }
        let item = inner.items.dequeue()?;
        self.size.fetch_sub(1, Ordering::SeqCst);
        Some(item)
    }

    /// Like `get`, but give up once `timeout` has elapsed with the queue
    /// still empty. Returns None on timeout or on a closed, drained queue.
    pub fn get_timeout(&self, timeout: Duration) -> Option<T> {
        let inner = self.inner.lock().unwrap();
        let (mut inner, _timed_out) = self
            .not_empty
            .wait_timeout_while(inner, timeout, |inner| {
                inner.items.is_empty() && !inner.closed
            })
            .unwrap();
        // on timeout the storage is still empty, so the dequeue below
        // reports None without a separate check
        let item = inner.items.dequeue()?;
        self.size.fetch_sub(1, Ordering::SeqCst);
        Some(item)
    }

    /// Current number of items, read without taking the lock.
    /// A best-effort snapshot: valid at some instant, not ordered against
    /// concurrent puts and gets.
    pub fn size(&self) -> u64 {
        self.size.load(Ordering::SeqCst)
    }

    /// Close the queue and wake every blocked consumer. Items already in
    /// the queue are still delivered; once drained, `get` returns None.
    /// Idempotent.
    pub fn close(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.closed = true;
        self.not_empty.notify_all();
    }

    /// Check whether the queue has been closed
    pub fn is_closed(&self) -> bool {
        self.inner.lock().unwrap().closed
    }
}
