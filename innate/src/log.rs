/// The ordered log of externally visible battle events.
///
/// Every entry is a pipe-delimited string, such as
/// `unboost|mon:Seviper|stat:atk|by:1`. The first element is the event title
/// and the rest are `key:value` attributes. Entries are append-only, so the
/// log doubles as a replayable record of everything that happened.
#[derive(Debug, Default, Clone)]
pub struct EventLog {
    entries: Vec<String>,
    last_read: usize,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a single entry to the log.
    pub fn push(&mut self, entry: String) {
        self.entries.push(entry);
    }

    /// Appends several entries to the log in order.
    pub fn push_extend<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.entries.extend(entries);
    }

    /// Returns all entries in the log.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reads all entries added since the last call to this method.
    ///
    /// Tests use this to assert on the log incrementally, one action at a
    /// time.
    pub fn read_out(&mut self) -> Vec<&str> {
        let out = self
            .entries
            .iter()
            .skip(self.last_read)
            .map(|entry| entry.as_str())
            .collect();
        self.last_read = self.entries.len();
        out
    }
}

/// Constructs a pipe-delimited log entry from a title and `(key, value)`
/// pairs.
///
/// ```
/// use innate::log_entry;
///
/// let entry = log_entry!("boost", ("mon", "Krabby"), ("stat", "atk"), ("by", 1));
/// assert_eq!(entry, "boost|mon:Krabby|stat:atk|by:1");
/// assert_eq!(log_entry!("turn"), "turn");
/// ```
#[macro_export]
macro_rules! log_entry {
    ($title:expr $(, ($key:expr, $value:expr))* $(,)?) => {{
        #[allow(unused_mut)]
        let mut entry = ::std::string::ToString::to_string(&$title);
        $(
            entry.push('|');
            entry.push_str(&::std::string::ToString::to_string(&$key));
            entry.push(':');
            entry.push_str(&::std::string::ToString::to_string(&$value));
        )*
        entry
    }};
}
