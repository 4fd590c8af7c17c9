use std::collections::VecDeque;

/// How many recent events the status screen shows.
pub const MESSAGE_LOG_CAPACITY: usize = 5;

/// Rolling log of the most recent game events, oldest first.
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    entries: VecDeque<String>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>) {
        if self.entries.len() == MESSAGE_LOG_CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(message.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn latest(&self) -> Option<&str> {
        self.entries.back().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, message: &str) -> bool {
        self.entries.iter().any(|m| m == message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_the_last_five() {
        let mut log = MessageLog::new();
        for i in 0..8 {
            log.push(format!("event {}", i));
        }
        assert_eq!(log.len(), MESSAGE_LOG_CAPACITY);
        assert_eq!(log.iter().next(), Some("event 3"));
        assert_eq!(log.latest(), Some("event 7"));
        assert!(!log.contains("event 2"));
    }
}
