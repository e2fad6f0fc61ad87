use std::fmt::{Display, Formatter};
use std::fs::OpenOptions;
use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicU64, Ordering};
use serde::{Serialize, Deserialize};
use std::io::Write;

static LOG_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Queue operation being recorded
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Op {
    Put,
    Get,
    Close,
}

/// State of a queue operation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum State {
    Committed,   // put accepted into storage
    Delivered,   // get handed an item to the caller
    Rejected,    // put refused (queue closed), get timed out or queue closed and drained
}

/// Log entry recording an operation
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LogEntry<T> {
    pub local_log_id: u64,
    pub label: String,        // Which queue this entry belongs to
    pub op: Op,
    pub item: Option<T>,      // The item being put/got, if any
    pub state: State,         // Outcome of the operation
    pub size_after: u64,      // size() snapshot taken after the operation
}

impl <T: std::fmt::Debug> Display for LogEntry<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogEntry {{ local_log_id: {}, label: {}, op: {:?}, item: {:?}, state: {:?}, size_after: {}",
            self.local_log_id,
            self.label,
            self.op,
            self.item,
            self.state,
            self.size_after,
        )
    }
}


#[derive(Clone, Debug)]
/// Logger storing all entries
pub struct Logger<T> {
    pub(crate) entries: Vec<LogEntry<T>>,
    label: String,
}

impl<T:Clone> Logger<T> {
    pub fn new(label: String) -> Self {
        Self {entries:Vec::new(), label}
    }

    /// Log an operation
    pub fn log(&mut self, op: Op, item: Option<T>, state: State, size_after: u64) {
        // --- Negative-space assertion: state must match operation ---
        match op {
            Op::Put => assert!(
                matches!(state, State::Committed | State::Rejected),
                "Put must end Committed or Rejected"
            ),
            Op::Get => assert!(
                matches!(state, State::Delivered | State::Rejected),
                "Get must end Delivered or Rejected"
            ),
            Op::Close => assert!(
                matches!(state, State::Committed),
                "Close is always Committed"
            ),
        }

        let local_log_id = LOG_ID_COUNTER.fetch_add(1, Ordering::SeqCst);

        // --- Log entry insertion ---
        let before = self.entries.len();
        self.entries.push(LogEntry {
            local_log_id,
            label: self.label.clone(),
            op,
            item,
            state,
            size_after,
        });

        // --- Negative-space assertion: log length increased exactly by 1 ---
        assert_eq!(
            self.entries.len(),
            before + 1,
            "Logger must increase by exactly one entry"
        );
    }

    /// Entries recorded for a given operation kind
    pub fn entries_for(&self, op: Op) -> Vec<LogEntry<T>> {
        self.entries
            .iter()
            .filter(|entry| entry.op == op)
            .cloned()
            .collect()
    }
}


pub fn append_logs<T: Serialize>(log: &Vec<LogEntry<T>>, path: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)?;

    for entry in log {
        let json = serde_json::to_string(entry).expect("Serialization failed");
        writeln!(file, "{}", json)?; // one JSON object per line
    }
    Ok(())
}
/// Thread-safe wrapper
pub type SafeLogger<T> = Arc<Mutex<Logger<T>>>;
