/// Append-only log of human-readable simulation events (dispatch, arrival,
/// return, recharge, path failure). Display collaborators read it; the core
/// only ever appends.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    entries: Vec<String>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.entries.push(line.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// The most recent `n` entries, oldest first.
    pub fn recent(&self, n: usize) -> &[String] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_in_order() {
        let mut log = EventLog::new();
        log.push("a");
        log.push("b".to_string());
        assert_eq!(log.entries(), ["a", "b"]);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn recent_takes_the_tail() {
        let mut log = EventLog::new();
        for i in 0..5 {
            log.push(format!("event {i}"));
        }
        assert_eq!(log.recent(2), ["event 3", "event 4"]);
        assert_eq!(log.recent(10).len(), 5);
        assert!(EventLog::new().recent(3).is_empty());
    }
}
